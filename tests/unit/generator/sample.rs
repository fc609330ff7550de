//! Tests for the numeric types the generator runs over

#[cfg(test)]
mod tests {
    use itamaraca::generator::{GenerationParameters, SampleValue, generate};

    // Tests both precisions carry the same default weight
    // Verified by changing the f32 default
    #[test]
    fn test_default_weights() {
        assert!((f64::DEFAULT_WEIGHT - 1.97).abs() < f64::EPSILON);
        assert!((f32::DEFAULT_WEIGHT - 1.97).abs() < f32::EPSILON);
    }

    // Tests single precision generation follows the same recurrence
    // Verified by using the f64 weight rounded through f32
    #[test]
    fn test_f32_generation() {
        let params = GenerationParameters::<f32>::new(2, 10_000.0, vec![800.0, 25.0, 3005.0]);
        let sequence = generate(&params).unwrap();

        assert_eq!(sequence.len(), 2);
        assert!((sequence[0] - 5656.15).abs() < 1e-2, "got {}", sequence[0]);
        assert!((sequence[1] - 1093.3655).abs() < 1e-1, "got {}", sequence[1]);
    }
}
