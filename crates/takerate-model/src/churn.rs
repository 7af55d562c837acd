//! Rider and driver losses per month.
//!
//! A rider whose request fails this month churns at the failed-match rate,
//! everyone else at the success rate. The failed-match effect lasts one month
//! only; nothing is carried into the next month.

use takerate_core::types::Series;

/// Monthly rider churn on each match outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiderChurn {
    /// Churn of riders whose requests were matched.
    pub success: f64,
    /// Churn of riders who failed to find a driver.
    pub failure: f64,
}

impl RiderChurn {
    pub const fn new(success: f64, failure: f64) -> Self {
        Self { success, failure }
    }

    /// Expected fraction of riders lost at a given match rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use takerate_model::churn::RiderChurn;
    /// let churn = RiderChurn::new(0.10, 0.33);
    /// assert_eq!(churn.lost_fraction(1.0), 0.10);
    /// assert_eq!(churn.lost_fraction(0.0), 0.33);
    /// ```
    pub fn lost_fraction(&self, match_rate: f64) -> f64 {
        match_rate * self.success + (1.0 - match_rate) * self.failure
    }
}

/// Probability a request fails to find a driver, at every sweep point.
pub fn fail_rates(match_rates: &Series) -> Series {
    match_rates.map(|m| 1.0 - m)
}

/// Riders lost this month at every sweep point.
pub fn riders_lost(match_rates: &Series, riders: f64, churn: RiderChurn) -> Series {
    match_rates.map(|m| riders * churn.lost_fraction(m))
}

/// Drivers lost this month, the same at every sweep point.
pub fn drivers_lost(len: usize, drivers: f64, churn: f64) -> Series {
    Series::full(len, drivers * churn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CHURN: RiderChurn = RiderChurn::new(0.10, 0.33);

    #[test]
    fn all_matched_uses_success_churn() {
        let lost = riders_lost(&Series::new(vec![1.0]), 1000.0, CHURN);
        assert!((lost.as_slice()[0] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn none_matched_uses_failure_churn() {
        let lost = riders_lost(&Series::new(vec![0.0]), 1000.0, CHURN);
        assert!((lost.as_slice()[0] - 330.0).abs() < 1e-9);
    }

    #[test]
    fn blend_at_half() {
        let lost = riders_lost(&Series::new(vec![0.5]), 1000.0, CHURN);
        assert!((lost.as_slice()[0] - 215.0).abs() < 1e-9);
    }

    #[test]
    fn fail_rate_complements_match() {
        let m = Series::new(vec![0.0, 0.25, 1.0]);
        assert_eq!(fail_rates(&m).as_slice(), &[1.0, 0.75, 0.0]);
    }

    #[test]
    fn drivers_lost_is_constant() {
        let lost = drivers_lost(4, 10.0, 0.05);
        assert_eq!(lost.len(), 4);
        assert!(lost.iter().all(|d| d == 0.5));
    }

    #[test]
    fn drivers_lost_empty_sweep() {
        assert!(drivers_lost(0, 10.0, 0.05).is_empty());
    }

    #[test]
    fn zero_churn_loses_nobody() {
        let lost = riders_lost(&Series::new(vec![0.2, 0.8]), 1000.0, RiderChurn::new(0.0, 0.0));
        assert!(lost.iter().all(|r| r == 0.0));
    }

    proptest! {
        #[test]
        fn riders_lost_between_churn_bounds(m in 0.0f64..=1.0, riders in 0.0f64..1e6) {
            let lost = riders_lost(&Series::new(vec![m]), riders, CHURN).as_slice()[0];
            prop_assert!(lost >= riders * CHURN.success - 1e-6);
            prop_assert!(lost <= riders * CHURN.failure + 1e-6);
        }

        #[test]
        fn better_matching_loses_fewer_riders(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(CHURN.lost_fraction(hi) <= CHURN.lost_fraction(lo) + 1e-12);
        }
    }
}
