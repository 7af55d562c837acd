//! Profit, cost, and revenue aggregation, and the revenue-maximizing take.
//!
//! Every combinator requires aligned series and fails on a length mismatch.

use takerate_core::error::SeriesError;
use takerate_core::types::{Optimum, Series};

/// Gross monthly profit: `riders * match_rate * take_rate` at each point.
pub fn gross_profit(
    take_rates: &Series,
    match_rates: &Series,
    riders: f64,
) -> Result<Series, SeriesError> {
    take_rates.zip_with(match_rates, |take, m| riders * m * take)
}

/// Rider plus driver acquisition spend at each point.
pub fn total_cost(rider_cost: &Series, driver_cost: &Series) -> Result<Series, SeriesError> {
    rider_cost.zip_with(driver_cost, |r, d| r + d)
}

/// Net revenue: profit minus total cost at each point.
pub fn net_revenue(profit: &Series, cost: &Series) -> Result<Series, SeriesError> {
    profit.zip_with(cost, |p, c| p - c)
}

/// The sweep point of maximal revenue. Ties go to the lowest take rate.
pub fn find_optimum(take_rates: &Series, revenue: &Series) -> Result<Optimum, SeriesError> {
    take_rates.ensure_aligned(revenue)?;
    let index = revenue.argmax().ok_or(SeriesError::Empty)?;
    Ok(Optimum {
        index,
        take_rate: take_rates.as_slice()[index],
        revenue: revenue.as_slice()[index],
    })
}
