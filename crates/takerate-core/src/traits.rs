//! Trait interfaces for the take-rate model.
//!
//! - [`MatchRateModel`] — take rate to match probability (takerate-model implements
//!   one per curve-fit strategy)

use crate::types::Series;

/// Probability that a ride request finds a driver, as a function of the take rate.
///
/// Implementations are fitted once and then evaluated as pure functions.
/// Output is always within `[0, 1]`, whatever the input.
pub trait MatchRateModel: Send + Sync {
    /// Match probability at a single take rate.
    fn match_rate(&self, take_rate: f64) -> f64;

    /// Match probability at every point of a sweep.
    ///
    /// Default implementation maps [`match_rate`](Self::match_rate) over the series.
    fn match_rates(&self, take_rates: &Series) -> Series {
        take_rates.map(|take| self.match_rate(take))
    }
}

/// Clamp a raw curve value to a probability. NaN maps to 0.
///
/// # Examples
///
/// ```
/// use takerate_core::traits::clamp_probability;
/// assert_eq!(clamp_probability(1.26), 1.0);
/// assert_eq!(clamp_probability(-0.3), 0.0);
/// assert_eq!(clamp_probability(f64::NAN), 0.0);
/// ```
pub fn clamp_probability(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
