use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::error::Result;
use crate::format::{self, OutputStyle};
use crate::table::{SineTable, TableParams};
use crate::utils::consts::{VALUES_PER_LINE_MAX, VALUES_PER_LINE_MIN};

/// State behind the interactive surface: the editable parameter row, the
/// values-per-line setting and the result of the last calculation.
#[derive(Clone, Debug)]
pub struct Session {
    params: TableParams,
    values_per_line: usize,
    style: OutputStyle,
    array_name: String,
    table: Option<SineTable>,
    text: String,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            params: config.params,
            values_per_line: clamp_values_per_line(config.values_per_line),
            style: config.style,
            array_name: config.array_name.clone(),
            table: None,
            text: String::new(),
        }
    }

    pub fn params(&self) -> &TableParams {
        &self.params
    }

    pub fn set_params(&mut self, params: TableParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Replace one cell of the parameter row. The row is left untouched on
    /// error.
    pub fn set_field(&mut self, index: usize, text: &str) -> Result<()> {
        self.params = self.params.with_field(index, text)?;
        Ok(())
    }

    pub fn values_per_line(&self) -> usize {
        self.values_per_line
    }

    /// Move the slider; returns the label text. Takes effect on the next
    /// calculation.
    pub fn set_values_per_line(&mut self, value: usize) -> String {
        self.values_per_line = clamp_values_per_line(value);
        self.values_per_line.to_string()
    }

    pub fn calculate(&mut self) -> Result<&SineTable> {
        let table = self.params.generate();
        self.text =
            format::render(&table, self.style, self.values_per_line, &self.array_name)?;
        tracing::info!(
            "Calculated {} entries, {} per line",
            table.len(),
            self.values_per_line
        );
        Ok(self.table.insert(table))
    }

    /// Copy the last calculated text; empty before the first calculation.
    pub fn copy(&self, sink: &mut dyn ClipboardSink) -> Result<()> {
        sink.set_text(&self.text)
    }

    pub fn table(&self) -> Option<&SineTable> {
        self.table.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

fn clamp_values_per_line(value: usize) -> usize {
    value.clamp(VALUES_PER_LINE_MIN, VALUES_PER_LINE_MAX)
}
