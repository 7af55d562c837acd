//! Error types for the take-rate model.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sweep needs at least one sample")] ZeroSamples,
    #[error("inverted sweep bounds: lower {lower} >= upper {upper}")] InvertedBounds { lower: f64, upper: f64 },
    #[error("non-finite sweep bound: {0}")] NonFiniteBound(f64),
    #[error("negative take rate in sweep: {0}")] NegativeTakeRate(f64),
    #[error("take rate {upper} exceeds trip fare {fare}")] TakeAboveFare { upper: f64, fare: f64 },
    #[error("trip fare must be positive: {0}")] NonPositiveFare(f64),
    #[error("{name} must be a probability in [0, 1]: {value}")] InvalidProbability { name: &'static str, value: f64 },
    #[error("{name} must be finite and non-negative: {value}")] NegativeQuantity { name: &'static str, value: f64 },
    #[error("driver trips per month must be positive: {0}")] NonPositiveDriverTrips(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    #[error("calibration take rates are identical: {0}")] IdenticalTakeRates(f64),
    #[error("calibration match rates are identical: {0}")] IdenticalMatchRates(f64),
    #[error("calibration match rate {match_rate} is not below the asymptote {asymptote}")] MatchNotBelowAsymptote { match_rate: f64, asymptote: f64 },
    #[error("calibration point at take {take} is not left of the pole at {pole}")] PoleBeforeCalibration { take: f64, pole: f64 },
    #[error("calibration match rate outside [0, 1]: {0}")] MatchOutOfRange(f64),
    #[error("non-finite calibration value: {0}")] NonFinite(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("series length mismatch: {left} != {right}")] LengthMismatch { left: usize, right: usize },
    #[error("empty series")] Empty,
}

#[derive(Error, Debug)]
pub enum ModelError {
    #[error(transparent)] Config(#[from] ConfigError),
    #[error(transparent)] Calibration(#[from] CalibrationError),
    #[error(transparent)] Series(#[from] SeriesError),
}
