pub mod interactive;

use crate::table::{FIELD_NAMES, TableParams};

pub fn print_banner() {
    println!("smartsine {}", env!("CARGO_PKG_VERSION"));
}

/// The parameter row as an aligned two-line table.
pub fn params_table(params: &TableParams) -> String {
    let cells = params.fields();
    let widths: Vec<usize> = FIELD_NAMES
        .iter()
        .zip(&cells)
        .map(|(name, cell)| name.len().max(cell.len()))
        .collect();

    let header: Vec<String> = FIELD_NAMES
        .iter()
        .zip(&widths)
        .map(|(name, &w)| format!("{name:>w$}"))
        .collect();
    let row: Vec<String> = cells
        .iter()
        .zip(&widths)
        .map(|(cell, &w)| format!("{cell:>w$}"))
        .collect();

    format!("{}\n{}", header.join(" | "), row.join(" | "))
}
