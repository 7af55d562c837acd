//! Shared test helpers for E2E and property tests.

use takerate_core::config::{CostCurve, CurveKind, MarketConfig, ModelConfig, SweepConfig};
use takerate_core::types::Series;

/// Market from the worked scenario: 1000 riders, 10% / 33% rider churn,
/// 5% driver churn, 100 trips per driver (10 drivers).
pub fn scenario_market() -> MarketConfig {
    MarketConfig {
        riders: 1000.0,
        rides_per_rider: 1.0,
        driver_trips_per_month: 100.0,
        trip_fare: 25.0,
        rider_success_churn: 0.10,
        rider_failed_churn: 0.33,
        driver_churn: 0.05,
        rider_acquisition: CostCurve::new(10.0, 10.0),
        driver_acquisition: CostCurve::new(200.0, 400.0),
    }
}

/// Scenario market over the given sweep with the given curve strategy.
pub fn scenario_config(kind: CurveKind, sweep: SweepConfig) -> ModelConfig {
    let mut config = ModelConfig {
        market: scenario_market(),
        sweep,
        ..ModelConfig::default()
    };
    config.curve.kind = kind;
    config
}

/// Exactly two sweep points: take rate 0 and 15.
pub fn two_point_sweep() -> SweepConfig {
    SweepConfig::new(0.0, 15.0, 2)
}

/// Raw bit patterns of a series, for exact-equality checks.
pub fn bits(series: &Series) -> Vec<u64> {
    series.iter().map(f64::to_bits).collect()
}

/// Assert two floats agree within `tol`.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}
