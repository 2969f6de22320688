#[cfg(test)]
mod tests {
    use super::super::indicators::*;

    // Helper function to create sample price data
    fn sample_prices() -> Vec<f64> {
        vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ]
    }

    #[test]
    fn test_sma_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 0.001); // (1+2+3)/3 = 2
        assert!((result[1] - 3.0).abs() < 0.001); // (2+3+4)/3 = 3
        assert!((result[2] - 4.0).abs() < 0.001); // (3+4+5)/3 = 4
    }

    #[test]
    fn test_sma_insufficient_data() {
        let data = vec![1.0, 2.0];
        let result = sma(&data, 5);

        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_sma_real_prices() {
        let prices = sample_prices();
        let result = sma(&prices, 5);

        assert!(!result.is_empty());
        let expected_first = (44.34 + 44.09 + 44.15 + 43.61 + 44.33) / 5.0;
        assert!((result[0] - expected_first).abs() < 0.01);
    }

    #[test]
    fn test_rsi_range() {
        let prices = sample_prices();
        let result = rsi(&prices, 14);

        assert!(!result.is_empty());
        for &value in &result {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let prices = vec![44.0; 14];
        assert!(rsi(&prices, 14).is_empty());
    }

    #[test]
    fn test_rsi_first_value_needs_period_plus_one() {
        let prices: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let result = rsi(&prices, 14);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_rsi_all_gains_is_100() {
        let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let result = rsi(&prices, 14);
        for &value in &result {
            assert!((value - 100.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_rsi_all_losses_is_0() {
        let prices: Vec<f64> = (0..30).map(|i| 200.0 - i as f64).collect();
        let result = rsi(&prices, 14);
        for &value in &result {
            assert!(value.abs() < 0.001);
        }
    }

    #[test]
    fn test_rsi_flat_series_is_50() {
        let prices = vec![100.0; 60];
        let result = rsi(&prices, 14);
        assert!(!result.is_empty());
        for &value in &result {
            assert!((value - 50.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_trailing_low_full_window() {
        let prices = vec![10.0, 8.0, 9.0, 12.0];
        assert_eq!(trailing_low(&prices, 3), Some(8.0));
    }

    #[test]
    fn test_trailing_low_short_series_uses_everything() {
        let prices = vec![10.0, 8.0, 9.0];
        assert_eq!(trailing_low(&prices, 60), Some(8.0));
    }

    #[test]
    fn test_trailing_low_empty() {
        assert_eq!(trailing_low(&[], 60), None);
    }
}
