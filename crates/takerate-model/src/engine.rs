//! The full take-rate pipeline.
//!
//! [`MarketModel`] validates a [`ModelConfig`], builds the sweep, and fits the
//! match-rate curve once. [`MarketModel::evaluate`] then runs every stage over
//! the sweep and returns a [`ModelReport`]. Evaluation is pure: the same model
//! always yields a bit-identical report.

use tracing::{debug, info};

use takerate_core::config::{MarketConfig, ModelConfig};
use takerate_core::error::ModelError;
use takerate_core::traits::MatchRateModel;
use takerate_core::types::{ModelReport, Series};

use crate::acquisition::AcquisitionCost;
use crate::churn::{self, RiderChurn};
use crate::match_rate::MatchCurve;
use crate::revenue;
use crate::sweep::take_rate_sweep;

/// A validated, fitted model ready to evaluate.
#[derive(Debug, Clone)]
pub struct MarketModel {
    market: MarketConfig,
    curve: MatchCurve,
    take_rates: Series,
}

impl MarketModel {
    /// Validate the configuration, build the sweep, and fit the match curve.
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        config.validate()?;
        let take_rates = take_rate_sweep(&config.sweep)?;
        let curve = MatchCurve::fit(&config.curve)?;
        debug!(
            samples = take_rates.len(),
            lower = config.sweep.lower,
            upper = config.sweep.upper,
            kind = %curve.kind(),
            "model ready"
        );
        Ok(Self {
            market: config.market.clone(),
            curve,
            take_rates,
        })
    }

    pub fn curve(&self) -> &MatchCurve {
        &self.curve
    }

    pub fn market(&self) -> &MarketConfig {
        &self.market
    }

    pub fn take_rates(&self) -> &Series {
        &self.take_rates
    }

    /// Run every stage over the sweep.
    pub fn evaluate(&self) -> Result<ModelReport, ModelError> {
        let market = &self.market;
        let take_rates = self.take_rates.clone();
        let len = take_rates.len();

        let match_rates = self.curve.match_rates(&take_rates);
        let fail_rates = churn::fail_rates(&match_rates);

        let rider_churn = RiderChurn::new(market.rider_success_churn, market.rider_failed_churn);
        let riders_lost = churn::riders_lost(&match_rates, market.riders, rider_churn);
        let drivers_lost = churn::drivers_lost(len, market.drivers(), market.driver_churn);
        debug!(samples = len, drivers_lost = market.drivers() * market.driver_churn, "losses computed");

        let rider_cost = AcquisitionCost::from(market.rider_acquisition).total_costs(&riders_lost);
        let driver_cost =
            AcquisitionCost::from(market.driver_acquisition).total_costs(&drivers_lost);

        let profit = revenue::gross_profit(&take_rates, &match_rates, market.riders)?;
        let total_cost = revenue::total_cost(&rider_cost, &driver_cost)?;
        let net = revenue::net_revenue(&profit, &total_cost)?;
        let optimum = revenue::find_optimum(&take_rates, &net)?;

        info!(
            take_rate = optimum.take_rate,
            revenue = optimum.revenue,
            index = optimum.index,
            "revenue-maximizing take rate"
        );

        Ok(ModelReport {
            take_rates,
            match_rates,
            fail_rates,
            riders_lost,
            drivers_lost,
            rider_cost,
            driver_cost,
            total_cost,
            profit,
            revenue: net,
            optimum,
        })
    }

    /// Match probability at an arbitrary take rate, outside the sweep.
    pub fn match_rate_at(&self, take_rate: f64) -> f64 {
        self.curve.match_rate(take_rate)
    }
}

/// Build and evaluate a model in one call.
pub fn evaluate(config: &ModelConfig) -> Result<ModelReport, ModelError> {
    MarketModel::new(config)?.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use takerate_core::config::{CurveKind, Preset, SweepConfig};
    use takerate_core::error::{CalibrationError, ConfigError};

    fn two_point(kind: CurveKind) -> ModelConfig {
        let mut cfg = ModelConfig::default();
        cfg.curve.kind = kind;
        cfg.sweep = SweepConfig::new(0.0, 15.0, 2);
        cfg
    }

    #[test]
    fn two_point_inverse_affine() {
        let model = MarketModel::new(&two_point(CurveKind::InverseAffine)).unwrap();
        let report = model.evaluate().unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report.match_rates.get(0), Some(model.match_rate_at(0.0)));
        assert!(report.match_rates.get(0).unwrap() > 0.95);
        assert_eq!(report.profit.get(0), Some(0.0));
        assert_eq!(report.drivers_lost.as_slice(), &[0.5, 0.5]);
        // Past the pole nobody matches.
        assert_eq!(report.match_rates.get(1), Some(0.0));
        assert!((report.riders_lost.get(1).unwrap() - 330.0).abs() < 1e-9);
    }

    #[test]
    fn two_point_linear() {
        let report = evaluate(&two_point(CurveKind::Linear)).unwrap();
        assert_eq!(report.match_rates.as_slice(), &[1.0, 0.0]);
        assert!((report.riders_lost.get(0).unwrap() - 100.0).abs() < 1e-9);
        // 100 riders: 100 * (10/100 + 10) = 1010; 0.5 drivers: 400
        assert!((report.rider_cost.get(0).unwrap() - 1010.0).abs() < 1e-9);
        assert_eq!(report.driver_cost.get(0), Some(400.0));
        assert!((report.revenue.get(0).unwrap() - -1410.0).abs() < 1e-9);
    }

    #[test]
    fn all_series_aligned() {
        let report = evaluate(&ModelConfig::from_preset(Preset::Linear)).unwrap();
        let n = report.len();
        assert_eq!(n, 1500);
        for s in [
            &report.match_rates,
            &report.fail_rates,
            &report.riders_lost,
            &report.drivers_lost,
            &report.rider_cost,
            &report.driver_cost,
            &report.total_cost,
            &report.profit,
            &report.revenue,
        ] {
            assert_eq!(s.len(), n);
        }
    }

    #[test]
    fn optimum_is_maximal() {
        let report = evaluate(&ModelConfig::from_preset(Preset::InverseAffine)).unwrap();
        let best = report.optimum.revenue;
        assert!(report.revenue.iter().all(|r| r <= best));
        assert_eq!(report.take_rates.get(report.optimum.index), Some(report.optimum.take_rate));
    }

    #[test]
    fn linear_optimum_is_interior() {
        let report = evaluate(&ModelConfig::from_preset(Preset::Linear)).unwrap();
        let opt = report.optimum;
        assert!(opt.take_rate > 0.0 && opt.take_rate < 15.0, "optimum at {}", opt.take_rate);
        assert!(opt.revenue > 0.0, "optimum revenue {}", opt.revenue);
    }

    #[test]
    fn evaluation_is_bit_identical() {
        let model = MarketModel::new(&ModelConfig::default()).unwrap();
        let a = model.evaluate().unwrap();
        let b = model.evaluate().unwrap();
        let bits = |s: &Series| s.iter().map(f64::to_bits).collect::<Vec<_>>();
        assert_eq!(bits(&a.revenue), bits(&b.revenue));
        assert_eq!(bits(&a.rider_cost), bits(&b.rider_cost));
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_sweep_fails_before_fitting() {
        let mut cfg = ModelConfig::default();
        cfg.sweep = SweepConfig::new(5.0, 1.0, 10);
        cfg.curve.low.take_rate = cfg.curve.high.take_rate;
        let err = MarketModel::new(&cfg).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Config(ConfigError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn bad_calibration_surfaces() {
        let mut cfg = ModelConfig::default();
        cfg.curve.high.take_rate = cfg.curve.low.take_rate;
        let err = MarketModel::new(&cfg).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Calibration(CalibrationError::IdenticalTakeRates(_))
        ));
    }

    #[test]
    fn zero_rider_churn_costs_nothing() {
        let mut cfg = ModelConfig::default();
        cfg.market.rider_success_churn = 0.0;
        cfg.market.rider_failed_churn = 0.0;
        let report = evaluate(&cfg).unwrap();
        assert!(report.rider_cost.iter().all(|c| c == 0.0));
        assert!(report.revenue.iter().all(f64::is_finite));
    }

    #[test]
    fn vanishing_population_keeps_costs_finite() {
        let mut cfg = ModelConfig::default();
        cfg.market.riders = 1e-308;
        cfg.market.rider_success_churn = 0.01;
        cfg.market.rider_failed_churn = 0.01;
        let report = evaluate(&cfg).unwrap();
        for s in [&report.rider_cost, &report.driver_cost, &report.revenue] {
            assert!(s.iter().all(f64::is_finite));
        }
        assert!(report.optimum.revenue.is_finite());
    }

    #[test]
    fn zero_driver_churn_costs_nothing() {
        let mut cfg = ModelConfig::default();
        cfg.market.driver_churn = 0.0;
        let report = evaluate(&cfg).unwrap();
        assert!(report.driver_cost.iter().all(|c| c == 0.0));
    }
}
