//! Acquisition cost of replacing lost riders or drivers.
//!
//! The per-unit cost `a/units + b` falls with volume toward the floor `b`;
//! total spend is `units * (a/units + b)`, evaluated as `a + b * units` so
//! tiny unit counts never overflow. Replacing nobody costs nothing, so zero
//! units is defined as zero spend rather than `0 * inf`.

use takerate_core::config::CostCurve;
use takerate_core::types::Series;

/// One acquisition-cost curve, e.g. riders `(10, 10)` or drivers `(200, 400)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcquisitionCost {
    fixed: f64,
    floor: f64,
}

impl AcquisitionCost {
    pub const fn new(fixed: f64, floor: f64) -> Self {
        Self { fixed, floor }
    }

    /// Cost of acquiring each unit when acquiring `units` of them.
    ///
    /// `None` at zero units, where the per-unit cost is undefined.
    ///
    /// # Examples
    ///
    /// ```
    /// use takerate_model::AcquisitionCost;
    /// let riders = AcquisitionCost::new(10.0, 10.0);
    /// assert_eq!(riders.unit_cost(1.0), Some(20.0));
    /// assert_eq!(riders.unit_cost(0.0), None);
    /// ```
    pub fn unit_cost(&self, units: f64) -> Option<f64> {
        if units == 0.0 {
            return None;
        }
        Some(self.fixed / units + self.floor)
    }

    /// Total spend to acquire `units`. Exactly 0.0 when `units` is 0.
    pub fn total_cost(&self, units: f64) -> f64 {
        if units == 0.0 {
            return 0.0;
        }
        self.fixed + self.floor * units
    }

    /// Total spend at every sweep point.
    pub fn total_costs(&self, units: &Series) -> Series {
        units.map(|u| self.total_cost(u))
    }
}

impl From<CostCurve> for AcquisitionCost {
    fn from(curve: CostCurve) -> Self {
        Self::new(curve.fixed, curve.floor)
    }
}
