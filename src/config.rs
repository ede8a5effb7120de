use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SineError};
use crate::format::OutputStyle;
use crate::plot::PlotConfig;
use crate::table::TableParams;
use crate::utils::consts::*;

/// Settings loaded from a JSON file. Missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub params: TableParams,
    pub values_per_line: usize,
    pub style: OutputStyle,
    pub array_name: String,
    pub plot: PlotConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            params: TableParams::default(),
            values_per_line: DEFAULT_VALUES_PER_LINE,
            style: OutputStyle::default(),
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            plot: PlotConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line values on top of this config. Nothing is changed
    /// when any override is invalid.
    pub fn with_overrides(&self, overrides: &Overrides) -> Result<Self> {
        let base = &self.params;
        let params = TableParams::from_values([
            overrides.entries.unwrap_or(base.entries as f64),
            overrides.amplitude.unwrap_or(base.amplitude),
            overrides.offset.unwrap_or(base.offset),
            overrides.angle_start_deg.unwrap_or(base.angle_start_deg),
            overrides.angle_end_deg.unwrap_or(base.angle_end_deg),
        ])?;

        let mut config = Self {
            params,
            ..self.clone()
        };
        if let Some(values_per_line) = overrides.values_per_line {
            config.values_per_line = values_per_line;
        }
        if let Some(style) = overrides.style {
            config.style = style;
        }
        if let Some(name) = &overrides.array_name {
            config.array_name = name.clone();
        }
        if overrides.no_plot {
            config.plot.enabled = false;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        if self.values_per_line < VALUES_PER_LINE_MIN {
            return Err(SineError::ZeroValuesPerLine);
        }
        Ok(())
    }
}

/// Values given on the command line; `None` keeps the config value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub entries: Option<f64>,
    pub amplitude: Option<f64>,
    pub offset: Option<f64>,
    pub angle_start_deg: Option<f64>,
    pub angle_end_deg: Option<f64>,
    pub values_per_line: Option<usize>,
    pub style: Option<OutputStyle>,
    pub array_name: Option<String>,
    pub no_plot: bool,
}
