//! Property tests over randomized market configurations.

use proptest::prelude::*;
use takerate_core::config::{CostCurve, CurveKind, MarketConfig, SweepConfig};
use takerate_model::evaluate;
use takerate_tests::helpers::*;

fn market() -> impl Strategy<Value = MarketConfig> {
    (
        0.0f64..10_000.0,
        1.0f64..500.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        (0.0f64..1_000.0, 0.0f64..1_000.0),
        (0.0f64..1_000.0, 0.0f64..1_000.0),
    )
        .prop_map(
            |(riders, trips, success, failure, driver_churn, (ra, rb), (da, db))| MarketConfig {
                riders,
                driver_trips_per_month: trips,
                rider_success_churn: success,
                rider_failed_churn: failure,
                driver_churn,
                rider_acquisition: CostCurve::new(ra, rb),
                driver_acquisition: CostCurve::new(da, db),
                ..scenario_market()
            },
        )
}

fn curve_kind() -> impl Strategy<Value = CurveKind> {
    prop_oneof![Just(CurveKind::Linear), Just(CurveKind::InverseAffine)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn revenue_is_profit_minus_cost(
        market in market(),
        kind in curve_kind(),
        upper in 0.5f64..25.0,
        samples in 1usize..200,
    ) {
        let mut config = scenario_config(kind, SweepConfig::new(0.0, upper, samples));
        config.market = market;
        let report = evaluate(&config).unwrap();

        prop_assert_eq!(report.len(), samples);
        for i in 0..report.len() {
            let profit = report.profit.get(i).unwrap();
            let cost = report.total_cost.get(i).unwrap();
            prop_assert_eq!(report.revenue.get(i).unwrap(), profit - cost);
            prop_assert!(cost.is_finite() && cost >= 0.0, "cost {} at {}", cost, i);
        }
    }

    #[test]
    fn optimum_dominates_sweep(
        market in market(),
        kind in curve_kind(),
        upper in 0.5f64..25.0,
        samples in 1usize..200,
    ) {
        let mut config = scenario_config(kind, SweepConfig::new(0.0, upper, samples));
        config.market = market;
        let report = evaluate(&config).unwrap();
        let opt = report.optimum;

        prop_assert!(report.revenue.iter().all(|r| r <= opt.revenue));
        prop_assert!(report.revenue.as_slice()[..opt.index].iter().all(|&r| r < opt.revenue));
        prop_assert_eq!(report.take_rates.get(opt.index), Some(opt.take_rate));
    }

    #[test]
    fn drivers_lost_ignores_take_rate(
        market in market(),
        kind in curve_kind(),
        samples in 1usize..100,
    ) {
        let mut config = scenario_config(kind, SweepConfig::new(0.0, 15.0, samples));
        config.market = market;
        let expected = config.market.drivers() * config.market.driver_churn;
        let report = evaluate(&config).unwrap();
        prop_assert!(report.drivers_lost.iter().all(|d| d == expected));
    }

    #[test]
    fn evaluation_is_deterministic(market in market(), kind in curve_kind()) {
        let mut config = scenario_config(kind, SweepConfig::new(0.0, 10.0, 50));
        config.market = market;
        let a = evaluate(&config).unwrap();
        let b = evaluate(&config).unwrap();
        prop_assert_eq!(bits(&a.revenue), bits(&b.revenue));
        prop_assert_eq!(a.optimum, b.optimum);
    }
}
