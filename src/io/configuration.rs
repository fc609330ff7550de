//! Generator constants and runtime configuration defaults

/// Number of slots in the rolling seed window
pub const SEED_WINDOW_LEN: usize = 3;

// Default values for configurable parameters
/// Values generated per run
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;
/// Magnitude constant the weighted seed difference is subtracted from
pub const DEFAULT_SCALE: f64 = 10_000.0;
/// Initial window contents, oldest first
pub const DEFAULT_SEEDS: [f64; SEED_WINDOW_LEN] = [800.0, 25.0, 3005.0];
/// Same seeds as accepted on the command line
pub const DEFAULT_SEEDS_ARG: &str = "800,25,3005";
/// Multiplier applied to the seed difference
pub const DEFAULT_WEIGHT: f64 = 1.97;

// Plot settings
/// Buckets in the distribution histogram
pub const DEFAULT_HISTOGRAM_BINS: usize = 40;
/// Leading values drawn in the trace plot
pub const DEFAULT_TRACE_LENGTH: usize = 250;
/// Rendered plot width in pixels
pub const PLOT_WIDTH: u32 = 1000;
/// Rendered plot height in pixels
pub const PLOT_HEIGHT: u32 = 500;
/// Smallest accepted width or height in pixels
pub const PLOT_MIN_SIDE: u32 = 200;
/// Blank border around each chart in pixels
pub const PLOT_MARGIN: u32 = 20;
/// Space below the plot area for x tick labels and description
pub const PLOT_X_LABEL_AREA: u32 = 45;
/// Space left of the plot area for y tick labels and description
pub const PLOT_Y_LABEL_AREA: u32 = 70;
/// Font family for titles, labels and the legend
pub const PLOT_FONT: &str = "sans-serif";
/// Title font size
pub const PLOT_CAPTION_SIZE: u32 = 22;
/// Axis label and legend font size
pub const PLOT_LABEL_SIZE: u32 = 14;
/// Horizontal grid lines drawn across the plot area
pub const PLOT_GRID_LINES: u32 = 5;
/// Length of one dash, and of the gap after it, in grid lines
pub const PLOT_DASH_LEN: u32 = 6;
/// Histogram bar fill
pub const HISTOGRAM_COLOR: [u8; 3] = [0x1f, 0x77, 0xb4];
/// Trace line color
pub const TRACE_COLOR: [u8; 3] = [0xd6, 0x27, 0x28];
/// Plot background
pub const BACKGROUND_COLOR: [u8; 3] = [0xff, 0xff, 0xff];
/// Axis color
pub const AXIS_COLOR: [u8; 3] = [0x00, 0x00, 0x00];
/// Grid line color
pub const GRID_COLOR: [u8; 3] = [0xc8, 0xc8, 0xc8];

// Terminal output
/// Leading samples echoed before the summary
pub const PREVIEW_SAMPLES: usize = 5;
/// Decimal places for previewed and exported values
pub const VALUE_PRECISION: usize = 4;
/// Decimal places for printed statistics
pub const SUMMARY_PRECISION: usize = 2;

// Progress bar display settings
/// Generation steps between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 1_000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Default file name prefix for all outputs
pub const DEFAULT_OUTPUT_PREFIX: &str = "itamaraca";
/// Suffix of the histogram image
pub const HISTOGRAM_SUFFIX: &str = "_histogram.png";
/// Suffix of the trace image
pub const TRACE_SUFFIX: &str = "_trace.png";
/// Suffix of the CSV export
pub const CSV_SUFFIX: &str = "_results.csv";
