//! Match-rate curves fitted through two calibration points.
//!
//! Two strategies implement [`MatchRateModel`]:
//! - [`LinearFit`]: the straight line through both points.
//! - [`InverseAffineFit`]: `y = a / (x + b) + c` with `c` fixed at the
//!   asymptote (1.0 by default), so the match rate tends to certainty as the
//!   take falls and drops ever faster as it rises.
//!
//! Both clamp to `[0, 1]`. Constants are fitted once by [`MatchCurve::fit`].

use takerate_core::config::{CalibrationPoint, CurveConfig, CurveKind};
use takerate_core::error::CalibrationError;
use takerate_core::traits::{clamp_probability, MatchRateModel};

/// Straight line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Line through `low` and `high`.
    pub fn fit(low: CalibrationPoint, high: CalibrationPoint) -> Result<Self, CalibrationError> {
        check_point(low)?;
        check_point(high)?;
        if low.take_rate == high.take_rate {
            return Err(CalibrationError::IdenticalTakeRates(low.take_rate));
        }

        let slope = (high.match_rate - low.match_rate) / (high.take_rate - low.take_rate);
        let intercept = low.match_rate - slope * low.take_rate;
        Ok(Self { slope, intercept })
    }
}

impl MatchRateModel for LinearFit {
    fn match_rate(&self, take_rate: f64) -> f64 {
        clamp_probability(self.slope * take_rate + self.intercept)
    }
}

/// Inverse-affine curve `y = scale / (x + shift) + asymptote`.
///
/// The fitted curve has a pole at `x = -shift`, to the right of both
/// calibration points. Only the left branch is used: at or past the pole the
/// match rate is 0, the value the curve falls to on approach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseAffineFit {
    pub scale: f64,
    pub shift: f64,
    pub asymptote: f64,
}

impl InverseAffineFit {
    /// Solve for `scale` and `shift` so the curve passes through both points.
    ///
    /// With `u = y - asymptote`, both points satisfy `u * (x + shift) = scale`,
    /// giving `shift = (u2*x2 - u1*x1) / (u1 - u2)`.
    pub fn fit(
        low: CalibrationPoint,
        high: CalibrationPoint,
        asymptote: f64,
    ) -> Result<Self, CalibrationError> {
        check_point(low)?;
        check_point(high)?;
        if !asymptote.is_finite() {
            return Err(CalibrationError::NonFinite(asymptote));
        }
        if low.take_rate == high.take_rate {
            return Err(CalibrationError::IdenticalTakeRates(low.take_rate));
        }
        if low.match_rate == high.match_rate {
            return Err(CalibrationError::IdenticalMatchRates(low.match_rate));
        }
        for point in [low, high] {
            if point.match_rate >= asymptote {
                return Err(CalibrationError::MatchNotBelowAsymptote {
                    match_rate: point.match_rate,
                    asymptote,
                });
            }
        }

        let u1 = low.match_rate - asymptote;
        let u2 = high.match_rate - asymptote;
        let shift = (u2 * high.take_rate - u1 * low.take_rate) / (u1 - u2);
        let scale = u1 * (low.take_rate + shift);

        let pole = -shift;
        for point in [low, high] {
            if point.take_rate >= pole {
                return Err(CalibrationError::PoleBeforeCalibration {
                    take: point.take_rate,
                    pole,
                });
            }
        }

        Ok(Self {
            scale,
            shift,
            asymptote,
        })
    }

    /// Take rate at which the denominator vanishes.
    pub fn pole(&self) -> f64 {
        -self.shift
    }
}

impl MatchRateModel for InverseAffineFit {
    fn match_rate(&self, take_rate: f64) -> f64 {
        let denom = take_rate + self.shift;
        if denom >= 0.0 {
            return 0.0;
        }
        clamp_probability(self.scale / denom + self.asymptote)
    }
}

/// A fitted match-rate curve of either strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchCurve {
    Linear(LinearFit),
    InverseAffine(InverseAffineFit),
}

impl MatchCurve {
    /// Fit the configured strategy through the configured calibration points.
    pub fn fit(config: &CurveConfig) -> Result<Self, CalibrationError> {
        let curve = match config.kind {
            CurveKind::Linear => Self::Linear(LinearFit::fit(config.low, config.high)?),
            CurveKind::InverseAffine => Self::InverseAffine(InverseAffineFit::fit(
                config.low,
                config.high,
                config.asymptote,
            )?),
        };
        tracing::debug!(kind = %curve.kind(), ?curve, "fitted match-rate curve");
        Ok(curve)
    }

    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Linear(_) => CurveKind::Linear,
            Self::InverseAffine(_) => CurveKind::InverseAffine,
        }
    }
}

impl MatchRateModel for MatchCurve {
    fn match_rate(&self, take_rate: f64) -> f64 {
        match self {
            Self::Linear(fit) => fit.match_rate(take_rate),
            Self::InverseAffine(fit) => fit.match_rate(take_rate),
        }
    }
}

fn check_point(point: CalibrationPoint) -> Result<(), CalibrationError> {
    for value in [point.take_rate, point.match_rate] {
        if !value.is_finite() {
            return Err(CalibrationError::NonFinite(value));
        }
    }
    if !(0.0..=1.0).contains(&point.match_rate) {
        return Err(CalibrationError::MatchOutOfRange(point.match_rate));
    }
    Ok(())
}
