//! Command-line interface: generate a sequence, report on it and plot it

use crate::analysis::histogram::Histogram;
use crate::analysis::statistics::SummaryStatistics;
use crate::generator::{GenerationParameters, generate_with_observer};
use crate::io::configuration::{
    CSV_SUFFIX, DEFAULT_HISTOGRAM_BINS, DEFAULT_OUTPUT_PREFIX, DEFAULT_SAMPLE_COUNT,
    DEFAULT_SCALE, DEFAULT_SEEDS_ARG, DEFAULT_TRACE_LENGTH, DEFAULT_WEIGHT, HISTOGRAM_SUFFIX,
    PREVIEW_SAMPLES, TRACE_SUFFIX, VALUE_PRECISION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::export_sequence_csv;
use crate::io::plot::{PlotStyle, export_histogram_png, export_trace_png};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "itamaraca")]
#[command(
    author,
    version,
    about = "Generate a three-seed recurrence sequence and plot its distribution"
)]
/// Command-line arguments for the sequence generator
pub struct Cli {
    /// Number of values to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub count: usize,

    /// Magnitude constant (must be positive)
    #[arg(short, long, default_value_t = DEFAULT_SCALE, allow_negative_numbers = true)]
    pub scale: f64,

    /// Three comma-separated initial seeds, oldest first
    #[arg(
        long,
        value_delimiter = ',',
        default_value = DEFAULT_SEEDS_ARG,
        allow_hyphen_values = true
    )]
    pub seeds: Vec<f64>,

    /// Multiplier applied to the seed difference
    #[arg(short, long, default_value_t = DEFAULT_WEIGHT, allow_negative_numbers = true)]
    pub weight: f64,

    /// Histogram bucket count
    #[arg(short, long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub bins: usize,

    /// Leading values drawn in the trace plot
    #[arg(short, long, default_value_t = DEFAULT_TRACE_LENGTH)]
    pub trace_length: usize,

    /// Directory receiving plots and exports
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// File name prefix for plots and exports
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PREFIX)]
    pub prefix: String,

    /// Also write the sequence as CSV
    #[arg(short, long)]
    pub csv: bool,

    /// Skip rendering the histogram and trace images
    #[arg(long)]
    pub no_plots: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if plots should be rendered
    pub const fn should_plot(&self) -> bool {
        !self.no_plots
    }

    /// Generation parameters described by the arguments
    pub fn parameters(&self) -> GenerationParameters<f64> {
        GenerationParameters::new(self.count, self.scale, self.seeds.clone())
            .with_weight(self.weight)
    }

    /// Path of the histogram image
    pub fn histogram_path(&self) -> PathBuf {
        self.output_path(HISTOGRAM_SUFFIX)
    }

    /// Path of the trace image
    pub fn trace_path(&self) -> PathBuf {
        self.output_path(TRACE_SUFFIX)
    }

    /// Path of the CSV export
    pub fn csv_path(&self) -> PathBuf {
        self.output_path(CSV_SUFFIX)
    }

    fn output_path(&self, suffix: &str) -> PathBuf {
        self.output_dir.join(format!("{}{suffix}", self.prefix))
    }
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The generated sequence
    pub sequence: Vec<f64>,
    /// Statistics of the sequence, absent when it is empty
    pub summary: Option<SummaryStatistics<f64>>,
    /// Files written, in the order they were written
    pub written: Vec<PathBuf>,
}

/// Runs one generation with reporting, plotting and export
pub struct SequenceRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SequenceRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate, report and export according to the CLI arguments
    ///
    /// Presentation arguments are checked before generation starts so a bad
    /// bucket count does not waste a long run.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator rejects its parameters, a plot
    /// parameter is invalid, or an output file cannot be written
    // Allow print for the sample preview and results summary
    #[allow(clippy::print_stdout)]
    pub fn run(&mut self) -> Result<RunReport> {
        let params = self.cli.parameters();
        params.validate()?;
        self.validate_presentation()?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_generation(params.count);
        }
        let progress = self.progress_manager.as_ref();
        let sequence = generate_with_observer(&params, |produced| {
            if let Some(pm) = progress {
                pm.update_generation(produced);
            }
        })?;

        let mut written = Vec::new();

        if self.cli.should_plot() {
            let style = PlotStyle::default();
            self.set_stage("Rendering histogram");
            let histogram = Histogram::from_values(&sequence, self.cli.bins)?;
            let histogram_path = self.cli.histogram_path();
            export_histogram_png(&histogram, &style, &histogram_path)?;
            written.push(histogram_path);

            // An empty run has nothing to trace
            if !sequence.is_empty() {
                self.set_stage("Rendering trace");
                let trace_path = self.cli.trace_path();
                export_trace_png(&sequence, self.cli.trace_length, &style, &trace_path)?;
                written.push(trace_path);
            }
        }

        if self.cli.csv {
            self.set_stage("Writing CSV");
            let csv_path = self.cli.csv_path();
            export_sequence_csv(&sequence, &csv_path)?;
            written.push(csv_path);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        if !sequence.is_empty() {
            println!("{}", format_preview(&sequence));
        }
        let summary = SummaryStatistics::from_values(&sequence);
        println!("--- Itamaracá PRNG Results ---");
        match summary {
            Some(ref stats) => println!("{stats}"),
            None => println!("No values generated"),
        }
        for path in &written {
            println!("Wrote {}", path.display());
        }

        Ok(RunReport {
            sequence,
            summary,
            written,
        })
    }

    fn validate_presentation(&self) -> Result<()> {
        if !self.cli.should_plot() {
            return Ok(());
        }
        if self.cli.bins == 0 {
            return Err(invalid_parameter(
                "bins",
                &self.cli.bins,
                &"histogram needs at least one bucket",
            ));
        }
        if self.cli.trace_length == 0 {
            return Err(invalid_parameter(
                "trace-length",
                &self.cli.trace_length,
                &"trace needs at least one value",
            ));
        }
        Ok(())
    }

    fn set_stage(&self, stage: &'static str) {
        if let Some(ref pm) = self.progress_manager {
            pm.set_stage(stage);
        }
    }
}

/// One `Sample i: value` line per leading value, numbered from one
pub fn format_preview(sequence: &[f64]) -> String {
    sequence
        .iter()
        .take(PREVIEW_SAMPLES)
        .enumerate()
        .map(|(i, value)| format!("Sample {}: {:.*}", i + 1, VALUE_PRECISION, value))
        .collect::<Vec<_>>()
        .join("\n")
}
