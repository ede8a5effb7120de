use serde::{Deserialize, Serialize};

use crate::error::{Result, SineError};
use crate::table::SineTable;
use crate::utils::consts::C_ARRAY_INDENT;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Comma separated values, wrapped every N entries
    #[default]
    Plain,
    /// C array definition
    C,
    /// JSON document with parameters and values
    Json,
}

/// Render a table in the requested style.
pub fn render(
    table: &SineTable,
    style: OutputStyle,
    values_per_line: usize,
    array_name: &str,
) -> Result<String> {
    match style {
        OutputStyle::Plain => format_table(&table.values, values_per_line),
        OutputStyle::C => format_c_array(array_name, &table.values, values_per_line),
        OutputStyle::Json => format_json(table),
    }
}

/// Plain text table.
///
/// Every value except the last is followed by `", "`, and a newline follows
/// every `values_per_line`-th value, so wrapped lines end in `", "`.
pub fn format_table(values: &[i64], values_per_line: usize) -> Result<String> {
    if values_per_line == 0 {
        return Err(SineError::ZeroValuesPerLine);
    }

    let mut text = String::new();
    for (i, value) in values.iter().enumerate() {
        text.push_str(&value.to_string());
        if i + 1 < values.len() {
            text.push_str(", ");
        }
        if (i + 1) % values_per_line == 0 {
            text.push('\n');
        }
    }
    Ok(text)
}

pub fn format_c_array(
    name: &str,
    values: &[i64],
    values_per_line: usize,
) -> Result<String> {
    if values_per_line == 0 {
        return Err(SineError::ZeroValuesPerLine);
    }
    if !is_c_identifier(name) {
        return Err(SineError::InvalidArrayName(name.to_string()));
    }

    let ty = c_element_type(values);
    if values.is_empty() {
        return Ok(format!("const {ty} {name}[0] = {{}};\n"));
    }

    let rows: Vec<String> = values
        .chunks(values_per_line)
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(i64::to_string)
                .collect();
            format!("{C_ARRAY_INDENT}{}", cells.join(", "))
        })
        .collect();

    Ok(format!(
        "const {ty} {name}[{}] = {{\n{}\n}};\n",
        values.len(),
        rows.join(",\n")
    ))
}

pub fn format_json(table: &SineTable) -> Result<String> {
    let mut text = serde_json::to_string_pretty(table)?;
    text.push('\n');
    Ok(text)
}

/// Narrowest fixed-width C integer type holding every value.
pub fn c_element_type(values: &[i64]) -> &'static str {
    let min = values
        .iter()
        .copied()
        .min()
        .unwrap_or(0);
    let max = values
        .iter()
        .copied()
        .max()
        .unwrap_or(0);

    if min >= i8::MIN as i64 && max <= i8::MAX as i64 {
        "int8_t"
    } else if min >= i16::MIN as i64 && max <= i16::MAX as i64 {
        "int16_t"
    } else if min >= i32::MIN as i64 && max <= i32::MAX as i64 {
        "int32_t"
    } else {
        "int64_t"
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableParams;

    #[test]
    fn test_plain_wraps_after_every_kth_value() {
        let text = format_table(&[1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(text, "1, 2, \n3, 4, \n5");
    }

    #[test]
    fn test_plain_trailing_newline_when_length_divides() {
        let text = format_table(&[1, 2, 3, 4], 2).unwrap();
        assert_eq!(text, "1, 2, \n3, 4\n");
    }

    #[test]
    fn test_plain_single_line_and_empty() {
        assert_eq!(format_table(&[-3, 0, 7], 32).unwrap(), "-3, 0, 7");
        assert_eq!(format_table(&[], 8).unwrap(), "");
        assert_eq!(format_table(&[42], 1).unwrap(), "42\n");
    }

    #[test]
    fn test_zero_values_per_line_rejected() {
        assert!(matches!(
            format_table(&[1, 2], 0),
            Err(SineError::ZeroValuesPerLine)
        ));
        assert!(matches!(
            format_c_array("t", &[1], 0),
            Err(SineError::ZeroValuesPerLine)
        ));
    }

    #[test]
    fn test_c_array_layout() {
        let text = format_c_array("lut", &[0, 250, -250], 2).unwrap();
        assert_eq!(
            text,
            "const int16_t lut[3] = {\n    0, 250,\n    -250\n};\n"
        );
    }

    #[test]
    fn test_c_array_empty_and_bad_name() {
        assert_eq!(
            format_c_array("lut", &[], 4).unwrap(),
            "const int8_t lut[0] = {};\n"
        );
        assert!(matches!(
            format_c_array("2lut", &[1], 4),
            Err(SineError::InvalidArrayName(_))
        ));
        assert!(matches!(
            format_c_array("sine-table", &[1], 4),
            Err(SineError::InvalidArrayName(_))
        ));
    }

    #[test]
    fn test_c_element_type_widths() {
        assert_eq!(c_element_type(&[-128, 127]), "int8_t");
        assert_eq!(c_element_type(&[128]), "int16_t");
        assert_eq!(c_element_type(&[-40_000, 5]), "int32_t");
        assert_eq!(c_element_type(&[i64::from(i32::MAX) + 1]), "int64_t");
    }

    #[test]
    fn test_json_carries_params_and_values() {
        let table = TableParams {
            entries: 4,
            amplitude: 1.0,
            offset: 0.0,
            angle_start_deg: 0.0,
            angle_end_deg: 360.0,
        }
        .generate();
        let text = format_json(&table).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["values"], serde_json::json!([0, 1, 0, -1]));
        assert_eq!(doc["params"]["entries"], 4);
        assert!(doc.get("angles_deg").is_none());
    }

    #[test]
    fn test_render_dispatches_on_style() {
        let table = TableParams::default().generate();
        let plain = render(&table, OutputStyle::Plain, 8, "t").unwrap();
        assert_eq!(plain.lines().count(), 4);
        let c = render(&table, OutputStyle::C, 8, "t").unwrap();
        assert!(c.starts_with("const int16_t t[32] = {"));
    }
}
