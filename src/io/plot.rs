//! PNG rendering of the distribution histogram and the sequence trace

use crate::analysis::histogram::Histogram;
use crate::io::configuration::{
    AXIS_COLOR, BACKGROUND_COLOR, GRID_COLOR, HISTOGRAM_COLOR, PLOT_CAPTION_SIZE,
    PLOT_DASH_LEN, PLOT_FONT, PLOT_GRID_LINES, PLOT_HEIGHT, PLOT_LABEL_SIZE, PLOT_MARGIN,
    PLOT_MIN_SIDE, PLOT_WIDTH, PLOT_X_LABEL_AREA, PLOT_Y_LABEL_AREA, TRACE_COLOR,
};
use crate::io::error::{GeneratorError, Result, WithPath, invalid_parameter};
use image::{ImageFormat, RgbImage};
use num_traits::ToPrimitive;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::{
    BitMapBackend, Cartesian2d, ChartBuilder, ChartContext, Color, DashedLineSeries,
    DrawingArea, FontStyle, IntoDrawingArea, IntoFont, PathElement, RGBColor, Rectangle,
    SeriesLabelPosition,
};
use std::path::Path;

const HISTOGRAM_X_DESC: &str = "Generated Numerical Range";
const HISTOGRAM_Y_DESC: &str = "Frequency";
const TRACE_X_DESC: &str = "Iteration Index";
const TRACE_Y_DESC: &str = "Generated Value";
const TRACE_LABEL: &str = "Oscillation Path";

type PlotArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
type PlotChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Pixel size of a rendered plot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotStyle {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::new(PLOT_WIDTH, PLOT_HEIGHT)
    }
}

impl PlotStyle {
    /// Create a style for a `width` by `height` image
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn validate(&self) -> Result<()> {
        if self.width < PLOT_MIN_SIDE || self.height < PLOT_MIN_SIDE {
            return Err(invalid_parameter(
                "plot size",
                &format!("{}x{}", self.width, self.height),
                &format!("both sides must be at least {PLOT_MIN_SIDE} pixels"),
            ));
        }
        Ok(())
    }
}

const fn rgb([r, g, b]: [u8; 3]) -> RGBColor {
    RGBColor(r, g, b)
}

/// Draw onto an in-memory bitmap and hand back the finished raster
fn render_to_image<D>(style: &PlotStyle, draw: D) -> Result<RgbImage>
where
    D: FnOnce(&PlotArea<'_>) -> Result<()>,
{
    style.validate()?;

    let mut buffer = vec![0_u8; style.width as usize * style.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&rgb(BACKGROUND_COLOR))?;
        draw(&root)?;
        root.present()?;
    }

    RgbImage::from_raw(style.width, style.height, buffer).ok_or_else(|| {
        GeneratorError::Rendering {
            message: "bitmap buffer does not match the plot size".to_string(),
        }
    })
}

fn build_chart<'a, 'b>(
    root: &'a PlotArea<'b>,
    caption: &str,
    x_range: std::ops::Range<f64>,
    y_range: std::ops::Range<f64>,
) -> Result<PlotChart<'a, 'b>> {
    Ok(ChartBuilder::on(root)
        .caption(
            caption,
            (PLOT_FONT, PLOT_CAPTION_SIZE, FontStyle::Bold).into_font(),
        )
        .margin(PLOT_MARGIN)
        .x_label_area_size(PLOT_X_LABEL_AREA)
        .y_label_area_size(PLOT_Y_LABEL_AREA)
        .build_cartesian_2d(x_range, y_range)?)
}

fn draw_mesh(chart: &mut PlotChart<'_, '_>, x_desc: &str, y_desc: &str) -> Result<()> {
    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(rgb(AXIS_COLOR))
        .label_style((PLOT_FONT, PLOT_LABEL_SIZE))
        .axis_desc_style((PLOT_FONT, PLOT_LABEL_SIZE))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;
    Ok(())
}

// Evenly spaced horizontal dashes above the x axis
fn draw_dashed_grid(chart: &mut PlotChart<'_, '_>) -> Result<()> {
    let x_range = chart.x_range();
    let y_range = chart.y_range();
    let lines = f64::from(PLOT_GRID_LINES);

    for k in 1..=PLOT_GRID_LINES {
        let y = (y_range.end - y_range.start).mul_add(f64::from(k) / lines, y_range.start);
        chart.draw_series(DashedLineSeries::new(
            vec![(x_range.start, y), (x_range.end, y)],
            PLOT_DASH_LEN,
            PLOT_DASH_LEN,
            rgb(GRID_COLOR).stroke_width(1),
        ))?;
    }
    Ok(())
}

/// Draw one bar per histogram bucket over the data range
///
/// The title carries the number of values counted.
///
/// # Errors
///
/// Returns an error if the image is too small to hold a plot or drawing fails
pub fn render_histogram(histogram: &Histogram, style: &PlotStyle) -> Result<RgbImage> {
    let caption = format!(
        "Uniformity Analysis: Itamaracá Model (N={})",
        histogram.total()
    );
    // Headroom above the tallest bar
    let y_top = histogram.max_count().max(1) as f64 * 1.05;
    let edges = histogram.edges();

    render_to_image(style, |root| {
        let x_range = histogram.lower()..histogram.upper();
        let mut chart = build_chart(root, &caption, x_range, 0.0..y_top)?;
        draw_mesh(&mut chart, HISTOGRAM_X_DESC, HISTOGRAM_Y_DESC)?;
        draw_dashed_grid(&mut chart)?;

        let bars: Vec<[(f64, f64); 2]> = histogram
            .counts()
            .iter()
            .zip(edges.iter().zip(edges.iter().skip(1)))
            .map(|(&count, (&left, &right))| [(left, 0.0), (right, count as f64)])
            .collect();

        chart.draw_series(
            bars.iter()
                .map(|&corners| Rectangle::new(corners, rgb(HISTOGRAM_COLOR).filled())),
        )?;
        // White bucket edges
        chart.draw_series(
            bars.iter()
                .map(|&corners| Rectangle::new(corners, rgb(BACKGROUND_COLOR).stroke_width(1))),
        )?;
        Ok(())
    })
}

/// Draw the first `trace_length` values as a connected line in generation order
///
/// Non-finite values break the line instead of being drawn.
///
/// # Errors
///
/// Returns an error if there is nothing to draw, the image is too small or drawing fails
pub fn render_trace<F: ToPrimitive>(
    values: &[F],
    trace_length: usize,
    style: &PlotStyle,
) -> Result<RgbImage> {
    let shown: Vec<Option<f64>> = values
        .iter()
        .take(trace_length)
        .map(|v| v.to_f64().filter(|x| x.is_finite()))
        .collect();

    if shown.is_empty() {
        return Err(invalid_parameter(
            "trace length",
            &trace_length,
            &format!("no values to trace out of {}", values.len()),
        ));
    }

    let (lo, hi) = shown
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let (lo, hi) = if hi > lo {
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    } else if lo.is_finite() {
        (lo - 0.5, lo + 0.5)
    } else {
        (0.0, 1.0)
    };

    // Consecutive finite values form one unbroken segment
    let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (index, value) in shown.iter().enumerate() {
        match value {
            Some(v) => current.push((index as f64, *v)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    let caption = format!(
        "Sequence Dynamics (Stochastic Run - First {} Samples)",
        shown.len()
    );
    let x_end = (shown.len() - 1).max(1) as f64;

    render_to_image(style, |root| {
        let mut chart = build_chart(root, &caption, 0.0..x_end, lo..hi)?;
        draw_mesh(&mut chart, TRACE_X_DESC, TRACE_Y_DESC)?;
        draw_dashed_grid(&mut chart)?;

        let line = rgb(TRACE_COLOR).stroke_width(1);
        chart
            .draw_series(segments.into_iter().map(|points| PathElement::new(points, line)))?
            .label(TRACE_LABEL)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font((PLOT_FONT, PLOT_LABEL_SIZE))
            .border_style(rgb(AXIS_COLOR))
            .background_style(rgb(BACKGROUND_COLOR).mix(0.8))
            .draw()?;
        Ok(())
    })
}

/// Write a rendered plot as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot be saved
pub fn save_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GeneratorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .with_path(output_path)
}

/// Render and save the distribution histogram
///
/// # Errors
///
/// Returns an error if rendering or saving fails
pub fn export_histogram_png(
    histogram: &Histogram,
    style: &PlotStyle,
    output_path: &Path,
) -> Result<()> {
    let image = render_histogram(histogram, style)?;
    save_png(&image, output_path)
}

/// Render and save the sequence trace
///
/// # Errors
///
/// Returns an error if rendering or saving fails
pub fn export_trace_png<F: ToPrimitive>(
    values: &[F],
    trace_length: usize,
    style: &PlotStyle,
    output_path: &Path,
) -> Result<()> {
    let image = render_trace(values, trace_length, style)?;
    save_png(&image, output_path)
}
