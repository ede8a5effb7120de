/// Log level (overridden by RUST_LOG)
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// Table defaults
// ============================================================================

/// Number of entries in the table
pub const DEFAULT_ENTRIES: i64 = 32;

/// Amplitude from the centre point (0 to peak)
pub const DEFAULT_AMPLITUDE: f64 = 250.0;

/// DC offset added to every sample
pub const DEFAULT_OFFSET: f64 = 0.0;

/// First sampled angle, in degrees
pub const DEFAULT_ANGLE_START_DEG: f64 = 0.0;

/// End of the angle range, in degrees (never sampled)
pub const DEFAULT_ANGLE_END_DEG: f64 = 180.0;

/// Upper bound on the entry count
pub const MAX_ENTRIES: i64 = 1 << 20;

// ============================================================================
// Formatting
// ============================================================================

pub const VALUES_PER_LINE_MIN: usize = 1;
pub const VALUES_PER_LINE_MAX: usize = 32;
pub const DEFAULT_VALUES_PER_LINE: usize = 8;

/// Identifier used for C array output
pub const DEFAULT_ARRAY_NAME: &str = "sine_table";

/// Indent of each row inside a C array body
pub const C_ARRAY_INDENT: &str = "    ";

// ============================================================================
// Plotting
// ============================================================================

/// Chart size in braille dots
pub const DEFAULT_PLOT_WIDTH: u32 = 120;
pub const DEFAULT_PLOT_HEIGHT: u32 = 40;

/// Smallest chart textplots will draw
pub const MIN_PLOT_WIDTH: u32 = 32;
pub const MIN_PLOT_HEIGHT: u32 = 3;
