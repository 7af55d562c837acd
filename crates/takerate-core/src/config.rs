//! Model configuration.
//!
//! [`ModelConfig`] bundles every input of one model run: the market
//! constants, the match-rate curve calibration, and the take-rate sweep.
//! Defaults are the given constants of the pricing problem. All structs deserialize
//! with per-field defaults so partial config files work.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{
    DRIVER_ACQUISITION_FIXED, DRIVER_ACQUISITION_FLOOR, DRIVER_CHURN, DRIVER_TRIPS_PER_MONTH,
    INVERSE_AFFINE_SWEEP, LINEAR_SWEEP, MATCH_ASYMPTOTE, MATCH_CALIBRATION_HIGH,
    MATCH_CALIBRATION_LOW, RIDER_ACQUISITION_FIXED, RIDER_ACQUISITION_FLOOR, RIDER_FAILED_CHURN,
    RIDER_SUCCESS_CHURN, RIDERS, RIDES_PER_RIDER, TRIP_FARE,
};
use crate::error::ConfigError;

/// Coefficients of an acquisition-cost curve: per-unit cost is `fixed / units + floor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostCurve {
    /// Spread over all units acquired; dominates at low volume.
    pub fixed: f64,
    /// Per-unit cost approached as volume grows.
    pub floor: f64,
}

impl CostCurve {
    pub const fn new(fixed: f64, floor: f64) -> Self {
        Self { fixed, floor }
    }

    pub const fn rider_default() -> Self {
        Self::new(RIDER_ACQUISITION_FIXED, RIDER_ACQUISITION_FLOOR)
    }

    pub const fn driver_default() -> Self {
        Self::new(DRIVER_ACQUISITION_FIXED, DRIVER_ACQUISITION_FLOOR)
    }

    fn validate(&self, fixed_name: &'static str, floor_name: &'static str) -> Result<(), ConfigError> {
        non_negative(fixed_name, self.fixed)?;
        non_negative(floor_name, self.floor)
    }
}

/// A cost curve with either coefficient possibly missing from a config file.
#[derive(Deserialize)]
struct PartialCostCurve {
    fixed: Option<f64>,
    floor: Option<f64>,
}

impl PartialCostCurve {
    fn or(self, defaults: CostCurve) -> CostCurve {
        CostCurve {
            fixed: self.fixed.unwrap_or(defaults.fixed),
            floor: self.floor.unwrap_or(defaults.floor),
        }
    }
}

fn rider_curve<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CostCurve, D::Error> {
    PartialCostCurve::deserialize(deserializer).map(|p| p.or(CostCurve::rider_default()))
}

fn driver_curve<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CostCurve, D::Error> {
    PartialCostCurve::deserialize(deserializer).map(|p| p.or(CostCurve::driver_default()))
}

/// Population and churn constants of the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Riders on the platform each month.
    pub riders: f64,
    /// Ride requests per rider per month.
    pub rides_per_rider: f64,
    /// Rides one driver completes per month.
    pub driver_trips_per_month: f64,
    /// Prevailing fare; the take rate can never exceed it.
    pub trip_fare: f64,
    /// Monthly churn of riders with no failed match.
    pub rider_success_churn: f64,
    /// Monthly churn of riders with a failed match this month.
    pub rider_failed_churn: f64,
    /// Monthly driver churn.
    pub driver_churn: f64,
    /// Missing coefficients fall back to the rider defaults.
    #[serde(deserialize_with = "rider_curve")]
    pub rider_acquisition: CostCurve,
    /// Missing coefficients fall back to the driver defaults.
    #[serde(deserialize_with = "driver_curve")]
    pub driver_acquisition: CostCurve,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            riders: RIDERS,
            rides_per_rider: RIDES_PER_RIDER,
            driver_trips_per_month: DRIVER_TRIPS_PER_MONTH,
            trip_fare: TRIP_FARE,
            rider_success_churn: RIDER_SUCCESS_CHURN,
            rider_failed_churn: RIDER_FAILED_CHURN,
            driver_churn: DRIVER_CHURN,
            rider_acquisition: CostCurve::rider_default(),
            driver_acquisition: CostCurve::driver_default(),
        }
    }
}

impl MarketConfig {
    /// Drivers needed to serve every ride request exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use takerate_core::config::MarketConfig;
    /// assert_eq!(MarketConfig::default().drivers(), 10.0);
    /// ```
    pub fn drivers(&self) -> f64 {
        self.riders * self.rides_per_rider / self.driver_trips_per_month
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("riders", self.riders)?;
        non_negative("rides_per_rider", self.rides_per_rider)?;
        if !(self.driver_trips_per_month.is_finite() && self.driver_trips_per_month > 0.0) {
            return Err(ConfigError::NonPositiveDriverTrips(self.driver_trips_per_month));
        }
        if !(self.trip_fare.is_finite() && self.trip_fare > 0.0) {
            return Err(ConfigError::NonPositiveFare(self.trip_fare));
        }
        probability("rider_success_churn", self.rider_success_churn)?;
        probability("rider_failed_churn", self.rider_failed_churn)?;
        probability("driver_churn", self.driver_churn)?;
        self.rider_acquisition
            .validate("rider_acquisition.fixed", "rider_acquisition.floor")?;
        self.driver_acquisition
            .validate("driver_acquisition.fixed", "driver_acquisition.floor")
    }
}

/// Strategy used to fit the match-rate curve through the calibration points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveKind {
    /// Straight line through both points.
    Linear,
    /// `a / (x + b) + c` through both points, tending to the asymptote `c`.
    #[default]
    InverseAffine,
}

impl CurveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InverseAffine => "inverse-affine",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveKind {
    type Err = String;

    /// # Examples
    ///
    /// ```
    /// use takerate_core::config::CurveKind;
    /// assert_eq!("linear".parse::<CurveKind>(), Ok(CurveKind::Linear));
    /// assert_eq!("inverse-affine".parse::<CurveKind>(), Ok(CurveKind::InverseAffine));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" | "linear-fit" => Ok(Self::Linear),
            "inverse-affine" | "inverse-affine-fit" => Ok(Self::InverseAffine),
            other => Err(format!("unknown curve kind: {other}")),
        }
    }
}

/// An observed `(take rate, match rate)` pair the curve must pass through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationPoint {
    pub take_rate: f64,
    pub match_rate: f64,
}

impl CalibrationPoint {
    pub const fn new(take_rate: f64, match_rate: f64) -> Self {
        Self {
            take_rate,
            match_rate,
        }
    }
}

/// Match-rate curve selection and calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub kind: CurveKind,
    pub low: CalibrationPoint,
    pub high: CalibrationPoint,
    /// Limit of the inverse-affine curve as the take goes to negative infinity.
    /// Ignored by the linear fit.
    pub asymptote: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self::with_kind(CurveKind::default())
    }
}

impl CurveConfig {
    pub fn with_kind(kind: CurveKind) -> Self {
        Self {
            kind,
            low: CalibrationPoint::new(MATCH_CALIBRATION_LOW.0, MATCH_CALIBRATION_LOW.1),
            high: CalibrationPoint::new(MATCH_CALIBRATION_HIGH.0, MATCH_CALIBRATION_HIGH.1),
            asymptote: MATCH_ASYMPTOTE,
        }
    }
}

/// Evenly spaced take rates over `[lower, upper]`, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub lower: f64,
    pub upper: f64,
    pub samples: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::inverse_affine()
    }
}

impl SweepConfig {
    pub const fn new(lower: f64, upper: f64, samples: usize) -> Self {
        Self {
            lower,
            upper,
            samples,
        }
    }

    /// `[0, 15]` over 1500 samples.
    pub const fn linear() -> Self {
        Self::new(LINEAR_SWEEP.0, LINEAR_SWEEP.1, LINEAR_SWEEP.2)
    }

    /// `[0, 6.22]` over 622 samples.
    pub const fn inverse_affine() -> Self {
        Self::new(
            INVERSE_AFFINE_SWEEP.0,
            INVERSE_AFFINE_SWEEP.1,
            INVERSE_AFFINE_SWEEP.2,
        )
    }

    /// Check sample count and bounds on their own.
    ///
    /// # Examples
    ///
    /// ```
    /// use takerate_core::config::SweepConfig;
    /// use takerate_core::error::ConfigError;
    /// assert!(SweepConfig::new(0.0, 15.0, 2).validate().is_ok());
    /// assert_eq!(SweepConfig::new(0.0, 15.0, 0).validate(), Err(ConfigError::ZeroSamples));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        for bound in [self.lower, self.upper] {
            if !bound.is_finite() {
                return Err(ConfigError::NonFiniteBound(bound));
            }
        }
        if self.lower >= self.upper {
            return Err(ConfigError::InvertedBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.lower < 0.0 {
            return Err(ConfigError::NegativeTakeRate(self.lower));
        }
        Ok(())
    }
}

/// Named pairings of curve strategy and sweep observed in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Linear fit over `[0, 15]`.
    Linear,
    /// Inverse-affine fit over `[0, 6.22]`.
    #[default]
    InverseAffine,
}

impl Preset {
    pub fn curve_kind(&self) -> CurveKind {
        match self {
            Self::Linear => CurveKind::Linear,
            Self::InverseAffine => CurveKind::InverseAffine,
        }
    }

    pub fn sweep(&self) -> SweepConfig {
        match self {
            Self::Linear => SweepConfig::linear(),
            Self::InverseAffine => SweepConfig::inverse_affine(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<CurveKind>()
            .map(|kind| match kind {
                CurveKind::Linear => Self::Linear,
                CurveKind::InverseAffine => Self::InverseAffine,
            })
            .map_err(|_| format!("unknown preset: {s}"))
    }
}

/// All inputs of a single model run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub market: MarketConfig,
    pub curve: CurveConfig,
    pub sweep: SweepConfig,
}

impl ModelConfig {
    /// Default market constants with the preset's curve and sweep.
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            market: MarketConfig::default(),
            curve: CurveConfig::with_kind(preset.curve_kind()),
            sweep: preset.sweep(),
        }
    }

    /// Validate the market, the sweep, and that no swept take exceeds the fare.
    ///
    /// Curve calibration is checked when the curve is fitted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sweep.validate()?;
        self.market.validate()?;
        if self.sweep.upper > self.market.trip_fare {
            return Err(ConfigError::TakeAboveFare {
                upper: self.sweep.upper,
                fare: self.market.trip_fare,
            });
        }
        Ok(())
    }
}

fn probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidProbability { name, value });
    }
    Ok(())
}

fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(ConfigError::NegativeQuantity { name, value });
    }
    Ok(())
}
