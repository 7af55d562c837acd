//! Model constants. All monetary values in dollars per month.

/// Prevailing fare for a single ride. The platform's take can never exceed it.
pub const TRIP_FARE: f64 = 25.0;

/// Riders on the platform each month. Lost riders are replaced one-for-one.
pub const RIDERS: f64 = 1000.0;

/// Ride requests per rider per month.
pub const RIDES_PER_RIDER: f64 = 1.0;

/// Rides a single driver completes per month.
pub const DRIVER_TRIPS_PER_MONTH: f64 = 100.0;

/// Monthly churn of drivers.
pub const DRIVER_CHURN: f64 = 0.05;

/// Monthly churn of riders who hit a "failed to find driver" event.
///
/// Applied per month only: a rider who fails a match this month churns at
/// this rate this month and is back on the success-path rate next month.
pub const RIDER_FAILED_CHURN: f64 = 0.33;

/// Monthly churn of riders who never hit a failed match.
pub const RIDER_SUCCESS_CHURN: f64 = 0.10;

/// Rider acquisition: fixed term `a` of the per-unit cost `a/units + b`.
///
/// `y = 10/x + 10` costs $20 for a single rider and tends to $10 per rider.
pub const RIDER_ACQUISITION_FIXED: f64 = 10.0;

/// Rider acquisition: per-unit floor `b` of `a/units + b`.
pub const RIDER_ACQUISITION_FLOOR: f64 = 10.0;

/// Driver acquisition: fixed term `a` of the per-unit cost `a/units + b`.
///
/// `y = 200/x + 400` costs $600 for a single driver and tends to $400 per driver.
pub const DRIVER_ACQUISITION_FIXED: f64 = 200.0;

/// Driver acquisition: per-unit floor `b` of `a/units + b`.
pub const DRIVER_ACQUISITION_FLOOR: f64 = 400.0;

/// Lower calibration point of the match-rate curve: `(take, match rate)`.
pub const MATCH_CALIBRATION_LOW: (f64, f64) = (3.0, 0.93);

/// Upper calibration point of the match-rate curve: `(take, match rate)`.
pub const MATCH_CALIBRATION_HIGH: (f64, f64) = (6.0, 0.60);

/// Limit of the inverse-affine match curve as the take goes to negative infinity.
pub const MATCH_ASYMPTOTE: f64 = 1.0;

/// Sweep used with the linear match curve: `[0, 15]` over 1500 samples.
pub const LINEAR_SWEEP: (f64, f64, usize) = (0.0, 15.0, 1500);

/// Sweep used with the inverse-affine match curve: `[0, 6.22]` over 622 samples.
///
/// Stops short of the curve's pole just above a take of 6.6.
pub const INVERSE_AFFINE_SWEEP: (f64, f64, usize) = (0.0, 6.22, 622);

/// Cents per dollar, for display rounding.
pub const CENTS_PER_DOLLAR: f64 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_population_meets_rider_demand() {
        let drivers = RIDERS * RIDES_PER_RIDER / DRIVER_TRIPS_PER_MONTH;
        assert_eq!(drivers, 10.0);
    }

    #[test]
    fn failed_match_churns_more_than_success() {
        assert!(RIDER_FAILED_CHURN > RIDER_SUCCESS_CHURN);
    }

    #[test]
    fn calibration_points_ordered() {
        assert!(MATCH_CALIBRATION_LOW.0 < MATCH_CALIBRATION_HIGH.0);
        assert!(MATCH_CALIBRATION_LOW.1 > MATCH_CALIBRATION_HIGH.1);
    }

    #[test]
    fn sweeps_stay_below_fare() {
        assert!(LINEAR_SWEEP.1 <= TRIP_FARE);
        assert!(INVERSE_AFFINE_SWEEP.1 <= TRIP_FARE);
    }
}
