//! Take-rate sweep construction.

use takerate_core::config::SweepConfig;
use takerate_core::error::ConfigError;
use takerate_core::types::Series;

/// Evenly spaced take rates from `lower` to `upper`, both ends included.
///
/// A single-sample sweep holds only `lower`. The last point is pinned to
/// `upper` exactly so accumulated rounding never overshoots the bound.
///
/// # Examples
///
/// ```
/// use takerate_core::config::SweepConfig;
/// use takerate_model::take_rate_sweep;
/// let sweep = take_rate_sweep(&SweepConfig::new(0.0, 15.0, 2)).unwrap();
/// assert_eq!(sweep.as_slice(), &[0.0, 15.0]);
/// ```
pub fn take_rate_sweep(config: &SweepConfig) -> Result<Series, ConfigError> {
    config.validate()?;

    let n = config.samples;
    if n == 1 {
        return Ok(Series::new(vec![config.lower]));
    }

    let step = (config.upper - config.lower) / (n - 1) as f64;
    let mut values: Vec<f64> = (0..n).map(|i| config.lower + i as f64 * step).collect();
    values[n - 1] = config.upper;
    Ok(Series::new(values))
}
