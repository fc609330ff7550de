//! Tests for mean, population standard deviation and range summaries

#[cfg(test)]
mod tests {
    use itamaraca::analysis::statistics::SummaryStatistics;
    use itamaraca::generator::{GenerationParameters, generate};

    // Tests a textbook sample with known population statistics
    // Verified by dividing the variance by n - 1
    #[test]
    fn test_known_population_statistics() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = SummaryStatistics::<f64>::from_values(&values).unwrap();

        assert_eq!(stats.count, 8);
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
        assert!((stats.min - 2.0).abs() < f64::EPSILON);
        assert!((stats.max - 9.0).abs() < f64::EPSILON);
    }

    // Tests an empty sequence has no summary
    // Verified by returning zeros for empty input
    #[test]
    fn test_empty_sequence() {
        let values: [f64; 0] = [];
        assert!(SummaryStatistics::<f64>::from_values(&values).is_none());
    }

    // Tests a single value has zero spread
    // Verified by using sample variance which is undefined for n = 1
    #[test]
    fn test_single_value() {
        let stats = SummaryStatistics::<f64>::from_values(&[5656.15]).unwrap();

        assert!((stats.mean - 5656.15).abs() < 1e-9);
        assert!(stats.std_dev.abs() < f64::EPSILON);
    }

    // Tests the printed summary uses two decimal places
    // Verified by printing full precision
    #[test]
    fn test_display_format() {
        let stats = SummaryStatistics::<f64>::from_values(&[1.0, 2.0, 4.0]).unwrap();

        assert_eq!(
            stats.to_string(),
            "Mean: 2.33\nStandard Deviation: 1.25"
        );
    }

    // Tests summaries of a generated run stay inside the observed range
    // Verified by swapping min and max tracking
    #[test]
    fn test_generated_sequence_summary() {
        let params = GenerationParameters::<f64>::new(10_000, 10_000.0, vec![800.0, 25.0, 3005.0]);
        let sequence = generate(&params).unwrap();
        let stats = SummaryStatistics::<f64>::from_values(&sequence).unwrap();

        assert_eq!(stats.count, 10_000);
        assert!(stats.min >= 0.0);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.std_dev >= 0.0);
    }
}
