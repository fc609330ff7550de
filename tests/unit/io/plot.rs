//! Tests for histogram and trace PNG rendering

#[cfg(test)]
mod tests {
    use image::RgbImage;
    use itamaraca::GeneratorError;
    use itamaraca::analysis::histogram::Histogram;
    use itamaraca::io::configuration::{
        BACKGROUND_COLOR, HISTOGRAM_COLOR, PLOT_HEIGHT, PLOT_MARGIN, PLOT_WIDTH,
        PLOT_Y_LABEL_AREA, TRACE_COLOR,
    };
    use itamaraca::io::plot::{
        PlotStyle, export_histogram_png, export_trace_png, render_histogram, render_trace,
        save_png,
    };
    use tempfile::TempDir;

    const SMALL: PlotStyle = PlotStyle::new(400, 300);

    fn column_coverage(image: &RgbImage, color: [u8; 3]) -> Vec<u32> {
        (0..image.width())
            .map(|x| {
                (0..image.height())
                    .filter(|&y| image.get_pixel(x, y).0 == color)
                    .count() as u32
            })
            .collect()
    }

    fn has_ink(image: &RgbImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> bool {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .any(|(x, y)| image.get_pixel(x, y).0 != BACKGROUND_COLOR)
    }

    // Tests bars are scaled to their bucket counts
    // Verified by drawing every bar at full height
    #[test]
    fn test_histogram_bar_heights() {
        // Buckets hold 1, 1, 1 and 2 values
        let histogram = Histogram::from_values(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        let image = render_histogram(&histogram, &SMALL).unwrap();

        assert_eq!(image.dimensions(), (400, 300));
        let coverage: Vec<u32> = column_coverage(&image, HISTOGRAM_COLOR)
            .into_iter()
            .filter(|&c| c > 0)
            .collect();
        let tallest = f64::from(*coverage.iter().max().unwrap());
        let shortest = f64::from(*coverage.iter().min().unwrap());
        let ratio = tallest / shortest;
        assert!((1.8..2.2).contains(&ratio), "bar ratio {ratio}");
    }

    // Tests the histogram carries a title and axis labels
    // Verified by removing the caption and mesh descriptions
    #[test]
    fn test_histogram_has_text() {
        let histogram = Histogram::from_values(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        let image = render_histogram(&histogram, &SMALL).unwrap();

        // Title band above the bars
        assert!(has_ink(&image, 0..400, PLOT_MARGIN..PLOT_MARGIN + 25));
        // Tick labels and description left of the plot area
        assert!(has_ink(&image, PLOT_MARGIN..PLOT_MARGIN + PLOT_Y_LABEL_AREA - 5, 60..240));
        assert!(!has_ink(&image, 0..PLOT_MARGIN / 2, 0..300));
    }

    // Tests the trace is drawn in the trace color
    // Verified by skipping the line series
    #[test]
    fn test_trace_draws_line() {
        let values: Vec<f64> = (0..50).map(|i| f64::from(i % 7)).collect();
        let image = render_trace(&values, 250, &SMALL).unwrap();

        let traced: u32 = column_coverage(&image, TRACE_COLOR).iter().sum();
        assert!(traced > 100, "only {traced} trace pixels");
        assert_eq!(column_coverage(&image, HISTOGRAM_COLOR).iter().sum::<u32>(), 0);
    }

    // Tests only the leading values are traced
    // Verified by ignoring the trace length
    #[test]
    fn test_trace_length_limits_points() {
        // A spike after the traced prefix must not reshape the y-range
        let limited = render_trace(&[0.0, 10.0, 1.0e9], 2, &SMALL).unwrap();
        let prefix = render_trace(&[0.0, 10.0], 250, &SMALL).unwrap();

        assert_eq!(limited.as_raw(), prefix.as_raw());
    }

    // Tests non-finite values break the line without failing the render
    // Verified by feeding NaN into the chart range
    #[test]
    fn test_trace_skips_non_finite() {
        let values = [1.0, f64::NAN, 3.0, f64::INFINITY, 2.0, 4.0];
        let image = render_trace(&values, 250, &SMALL).unwrap();

        assert!(column_coverage(&image, TRACE_COLOR).iter().any(|&c| c > 0));
        assert!(render_trace(&[f64::NAN, f64::NAN], 250, &SMALL).is_ok());
    }

    // Tests tracing nothing is rejected
    // Verified by rendering a blank plot for empty input
    #[test]
    fn test_trace_requires_values() {
        let empty: [f64; 0] = [];
        assert!(matches!(
            render_trace(&empty, 250, &SMALL),
            Err(GeneratorError::InvalidParameter { .. })
        ));
        assert!(render_trace(&[1.0, 2.0], 0, &SMALL).is_err());
    }

    // Tests images too small for a chart are rejected
    // Verified by removing the minimum size check
    #[test]
    fn test_plot_too_small() {
        let histogram = Histogram::from_values(&[1.0, 2.0], 2).unwrap();

        assert!(matches!(
            render_histogram(&histogram, &PlotStyle::new(10, 10)),
            Err(GeneratorError::InvalidParameter { .. })
        ));
        assert!(render_trace(&[1.0, 2.0], 2, &PlotStyle::new(400, 10)).is_err());
    }

    // Tests the default style matches the configured size
    // Verified by swapping width and height in the default
    #[test]
    fn test_default_style() {
        let style = PlotStyle::default();
        assert_eq!((style.width, style.height), (PLOT_WIDTH, PLOT_HEIGHT));
    }

    // Tests PNG files are written with the requested dimensions
    // Verified by disabling the save call
    #[test]
    fn test_export_png_files() {
        let temp_dir = TempDir::new().unwrap();
        let histogram_path = temp_dir.path().join("plots/hist.png");
        let trace_path = temp_dir.path().join("plots/trace.png");
        let values: Vec<f64> = (0..500).map(|i| f64::from(i % 37)).collect();
        let style = PlotStyle::default();

        let histogram = Histogram::from_values(&values, 40).unwrap();
        export_histogram_png(&histogram, &style, &histogram_path).unwrap();
        export_trace_png(&values, 250, &style, &trace_path).unwrap();

        let written = image::open(&histogram_path).unwrap();
        assert_eq!((written.width(), written.height()), (PLOT_WIDTH, PLOT_HEIGHT));
        assert!(trace_path.exists());
    }

    // Tests export errors name the failing path
    // Verified by reporting a placeholder path
    #[test]
    fn test_export_to_invalid_path() {
        let histogram = Histogram::from_values(&[1.0, 2.0], 2).unwrap();
        let result = export_histogram_png(
            &histogram,
            &SMALL,
            std::path::Path::new("/dev/null/plots/hist.png"),
        );

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("/dev/null"), "{message}");
    }

    // Tests a failed PNG write is an image error carrying the target path
    // Verified by leaving the placeholder path on converted image errors
    #[test]
    fn test_save_png_reports_image_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should go makes the encoder's create fail
        let target = temp_dir.path().join("taken.png");
        std::fs::create_dir(&target).unwrap();

        let image = RgbImage::new(4, 4);
        match save_png(&image, &target) {
            Err(GeneratorError::ImageExport { path, .. }) => assert_eq!(path, target),
            other => unreachable!("Expected ImageExport error, got {other:?}"),
        }
    }
}
