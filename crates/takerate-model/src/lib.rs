//! # takerate-model — Take-rate pricing model for a ride-hailing marketplace.
//!
//! Every function is pure; a whole sweep is evaluated in one call with no state
//! carried between months.
//!
//! The pipeline runs one way:
//! - **Match rate**: take rate → probability a request finds a driver, fitted
//!   either as a straight line or as an inverse-affine curve through two
//!   calibration points, clamped to `[0, 1]`.
//! - **Churn**: match rate → riders lost this month; a constant number of
//!   drivers lost.
//! - **Acquisition cost**: units lost → replacement spend with a per-unit cost
//!   of `a/units + b`.
//! - **Revenue**: gross profit minus acquisition spend, and the take rate that
//!   maximizes it.

pub mod acquisition;
pub mod churn;
pub mod engine;
pub mod match_rate;
pub mod revenue;
pub mod sweep;

pub use acquisition::AcquisitionCost;
pub use engine::{evaluate, MarketModel};
pub use match_rate::{InverseAffineFit, LinearFit, MatchCurve};
pub use sweep::take_rate_sweep;
