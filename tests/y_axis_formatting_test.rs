// tests/y_axis_formatting_test.rs

use labfit::plot_framework::format_axis_value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strain_axis_uses_scientific_notation() {
        // Strains sit around 1e-4 and would collapse to "0.00" in fixed notation
        assert_eq!(format_axis_value(2.5e-4), "2.5e-4");
        assert_eq!(format_axis_value(1.0e-3), "1.0e-3");
        assert_eq!(format_axis_value(-3.0e-5), "-3.0e-5");
    }

    #[test]
    fn test_zero_is_plain() {
        assert_eq!(format_axis_value(0.0), "0");
    }

    #[test]
    fn test_fixed_notation_precision_by_magnitude() {
        assert_eq!(format_axis_value(0.05), "0.05");
        assert_eq!(format_axis_value(0.5), "0.50");
        assert_eq!(format_axis_value(1.5), "1.50");
        assert_eq!(format_axis_value(12.34), "12.3");
        assert_eq!(format_axis_value(978.4), "978");
    }

    #[test]
    fn test_large_values_use_scientific_notation() {
        assert_eq!(format_axis_value(15000.0), "1.5e4");
        assert_eq!(format_axis_value(9999.0), "9999");
    }
}

// tests/y_axis_formatting_test.rs
