use serde::{Deserialize, Serialize};

use crate::error::{Result, SineError};
use crate::utils::consts::*;

/// Column labels of the editable parameter row, in order.
pub const FIELD_NAMES: [&str; 5] =
    ["entries", "amplitude", "offset", "start angle", "end angle"];

/// The five inputs of a sine table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableParams {
    pub entries: i64,
    pub amplitude: f64,
    pub offset: f64,
    pub angle_start_deg: f64,
    pub angle_end_deg: f64,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES,
            amplitude: DEFAULT_AMPLITUDE,
            offset: DEFAULT_OFFSET,
            angle_start_deg: DEFAULT_ANGLE_START_DEG,
            angle_end_deg: DEFAULT_ANGLE_END_DEG,
        }
    }
}

impl TableParams {
    /// Parse the five cells of the parameter row.
    ///
    /// Every cell is read as a float; the entry count is then truncated
    /// toward zero, so `"32.9"` means 32 entries.
    pub fn from_fields(fields: [&str; 5]) -> Result<Self> {
        let mut values = [0.0; 5];
        for (index, text) in fields.iter().enumerate() {
            values[index] = parse_field(index, text)?;
        }
        Self::from_values(values)
    }

    /// Same as [`TableParams::from_fields`] on already-parsed numbers.
    pub fn from_values(values: [f64; 5]) -> Result<Self> {
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(SineError::NonFinite {
                    field: FIELD_NAMES[index],
                    value,
                });
            }
        }

        let params = Self {
            entries: values[0].trunc() as i64,
            amplitude: values[1],
            offset: values[2],
            angle_start_deg: values[3],
            angle_end_deg: values[4],
        };
        params.validate()?;
        Ok(params)
    }

    /// Cell texts for display and editing.
    pub fn fields(&self) -> [String; 5] {
        [
            self.entries.to_string(),
            self.amplitude.to_string(),
            self.offset.to_string(),
            self.angle_start_deg.to_string(),
            self.angle_end_deg.to_string(),
        ]
    }

    /// Copy of these params with one cell replaced.
    pub fn with_field(&self, index: usize, text: &str) -> Result<Self> {
        if index >= FIELD_NAMES.len() {
            return Err(SineError::UnknownField(index));
        }
        let mut values = [
            self.entries as f64,
            self.amplitude,
            self.offset,
            self.angle_start_deg,
            self.angle_end_deg,
        ];
        values[index] = parse_field(index, text)?;
        Self::from_values(values)
    }

    pub fn validate(&self) -> Result<()> {
        if self.entries > MAX_ENTRIES {
            return Err(SineError::TooManyEntries(self.entries));
        }

        let named = [
            ("amplitude", self.amplitude),
            ("offset", self.offset),
            ("start angle", self.angle_start_deg),
            ("end angle", self.angle_end_deg),
        ];
        for (field, value) in named {
            if !value.is_finite() {
                return Err(SineError::NonFinite { field, value });
            }
        }

        // Every sample lies within offset ± amplitude.
        if self.amplitude.abs() + self.offset.abs() >= i64::MAX as f64 {
            return Err(SineError::OutOfRange {
                amplitude: self.amplitude,
                offset: self.offset,
            });
        }
        Ok(())
    }

    pub fn generate(&self) -> SineTable {
        let angles_deg = linspace_exclusive(
            self.angle_start_deg,
            self.angle_end_deg,
            self.entries,
        );
        let values = angles_deg
            .iter()
            .map(|&deg| sample(self.amplitude, self.offset, deg))
            .collect();

        tracing::debug!(
            "Generated {} entries over [{}, {}) deg",
            self.entries.max(0),
            self.angle_start_deg,
            self.angle_end_deg
        );

        SineTable {
            params: *self,
            angles_deg,
            values,
        }
    }
}

/// A computed table together with the inputs that produced it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SineTable {
    pub params: TableParams,
    #[serde(skip)]
    pub angles_deg: Vec<f64>,
    pub values: Vec<i64>,
}

impl SineTable {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// `n` evenly spaced angles over `[start, end)`; the end is never included.
pub fn linspace_exclusive(start: f64, end: f64, n: i64) -> Vec<f64> {
    if n <= 0 {
        return Vec::new();
    }
    let step = (end - start) / n as f64;
    (0..n).map(|i| i as f64 * step + start).collect()
}

/// Round `amplitude * sin(angle) + offset` half-to-even.
pub fn generate_sine_table(
    n: i64,
    amplitude: f64,
    offset: f64,
    angle_start_deg: f64,
    angle_end_deg: f64,
) -> Vec<i64> {
    linspace_exclusive(angle_start_deg, angle_end_deg, n)
        .into_iter()
        .map(|deg| sample(amplitude, offset, deg))
        .collect()
}

fn sample(amplitude: f64, offset: f64, angle_deg: f64) -> i64 {
    (amplitude * angle_deg.to_radians().sin() + offset).round_ties_even() as i64
}

fn parse_field(index: usize, text: &str) -> Result<f64> {
    let field = FIELD_NAMES
        .get(index)
        .copied()
        .ok_or(SineError::UnknownField(index))?;
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| SineError::InvalidNumber {
            field,
            value: text.to_string(),
        })?;
    if !value.is_finite() {
        return Err(SineError::NonFinite { field, value });
    }
    Ok(value)
}
