use serde::{Deserialize, Serialize};
use textplots::{Chart, Plot, Shape};

use crate::utils::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub enabled: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
        }
    }
}

/// Axis ranges of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl PlotBounds {
    /// `None` for an empty table. Flat ranges are widened by at least one
    /// unit on each side.
    pub fn for_values(values: &[i64]) -> Option<Self> {
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;

        let (x_min, x_max) = widen(0.0, (values.len() - 1) as f32);
        let (y_min, y_max) = widen(min as f32, max as f32);
        Some(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

/// At least one unit, and never less than one `f32` step at this magnitude.
fn widen(lo: f32, hi: f32) -> (f32, f32) {
    if hi > lo {
        return (lo, hi);
    }
    let pad = 1.0f32.max(lo.abs().max(hi.abs()) * f32::EPSILON);
    (lo - pad, hi + pad)
}

/// `(index, value)` pairs, x axis is the table index.
pub fn plot_points(values: &[i64]) -> Vec<(f32, f32)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f32, v as f32))
        .collect()
}

/// Draw the table as a line with point markers on stdout.
pub fn render_plot(values: &[i64], config: &PlotConfig) {
    let Some(bounds) = PlotBounds::for_values(values) else {
        tracing::debug!("Nothing to plot for an empty table");
        return;
    };

    let points = plot_points(values);
    let width = config.width.max(MIN_PLOT_WIDTH);
    let height = config.height.max(MIN_PLOT_HEIGHT);

    println!("Index vs value ({} entries)", values.len());
    Chart::new_with_y_range(
        width,
        height,
        bounds.x_min,
        bounds.x_max,
        bounds.y_min,
        bounds.y_max,
    )
    .lineplot(&Shape::Lines(&points))
    .lineplot(&Shape::Points(&points))
    .display();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableParams;

    #[test]
    fn test_points_follow_index() {
        assert_eq!(
            plot_points(&[5, -2, 9]),
            vec![(0.0, 5.0), (1.0, -2.0), (2.0, 9.0)]
        );
    }

    #[test]
    fn test_bounds_span_values() {
        let bounds = PlotBounds::for_values(&[0, 250, -100, 3]).unwrap();
        assert_eq!(bounds.x_min, 0.0);
        assert_eq!(bounds.x_max, 3.0);
        assert_eq!(bounds.y_min, -100.0);
        assert_eq!(bounds.y_max, 250.0);
    }

    #[test]
    fn test_bounds_widen_degenerate_ranges() {
        let bounds = PlotBounds::for_values(&[7]).unwrap();
        assert_eq!((bounds.x_min, bounds.x_max), (-1.0, 1.0));
        assert_eq!((bounds.y_min, bounds.y_max), (6.0, 8.0));

        let flat = PlotBounds::for_values(&[4, 4, 4]).unwrap();
        assert_eq!((flat.x_min, flat.x_max), (0.0, 2.0));
        assert_eq!((flat.y_min, flat.y_max), (3.0, 5.0));
    }

    #[test]
    fn test_bounds_widen_flat_range_at_large_offset() {
        let values = TableParams {
            entries: 4,
            amplitude: 0.0,
            offset: 1e18,
            ..TableParams::default()
        }
        .generate()
        .values;
        let bounds = PlotBounds::for_values(&values).unwrap();
        assert!(bounds.y_min < bounds.y_max, "{bounds:?}");
        assert!(bounds.y_min < values[0] as f32 && (values[0] as f32) < bounds.y_max);

        let negative = PlotBounds::for_values(&[-4_000_000_000_000_000_000]).unwrap();
        assert!(negative.y_min < negative.y_max, "{negative:?}");
    }

    #[test]
    fn test_empty_table_has_no_bounds() {
        assert!(PlotBounds::for_values(&[]).is_none());
        render_plot(&[], &PlotConfig::default());
    }
}
