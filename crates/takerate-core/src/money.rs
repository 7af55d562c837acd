//! Dollar amount helpers for display.

use crate::constants::CENTS_PER_DOLLAR;

/// Round a dollar amount to the nearest cent.
///
/// Halfway cases round away from zero.
///
/// # Examples
///
/// ```
/// use takerate_core::money::round_to_cent;
/// assert_eq!(round_to_cent(4.567), 4.57);
/// assert_eq!(round_to_cent(-1.234), -1.23);
/// ```
pub fn round_to_cent(value: f64) -> f64 {
    (value * CENTS_PER_DOLLAR).round() / CENTS_PER_DOLLAR
}

/// Format a dollar amount as `$X.XX` (or `-$X.XX`).
pub fn format_dollars(value: f64) -> String {
    let rounded = round_to_cent(value);
    if rounded < 0.0 {
        format!("-${:.2}", -rounded)
    } else {
        format!("${:.2}", rounded.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(round_to_cent(1.004), 1.0);
        assert_eq!(round_to_cent(1.006), 1.01);
        assert_eq!(round_to_cent(0.0), 0.0);
    }

    #[test]
    fn whole_cents_unchanged() {
        assert_eq!(round_to_cent(3.14), 3.14);
        assert_eq!(round_to_cent(250.0), 250.0);
    }

    #[test]
    fn format_positive() {
        assert_eq!(format_dollars(4.5), "$4.50");
        assert_eq!(format_dollars(1234.567), "$1234.57");
    }

    #[test]
    fn format_negative() {
        assert_eq!(format_dollars(-12.346), "-$12.35");
    }

    #[test]
    fn format_negative_zero_is_unsigned() {
        assert_eq!(format_dollars(-0.001), "$0.00");
    }
}
