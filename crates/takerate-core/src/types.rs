//! Core data types: aligned numeric series and the model report.
//!
//! Every series in a report is indexed by the same take-rate sweep. Element-wise
//! combinators refuse to pair series of different lengths instead of
//! truncating or broadcasting.

use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// A fixed-length, ordered sequence of model values indexed by the sweep.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<f64>);

impl Series {
    /// Wrap raw values.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// A series of `len` copies of `value`.
    pub fn full(len: usize, value: f64) -> Self {
        Self(vec![value; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Apply a scalar function to every element.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.iter().map(|&x| f(x)).collect())
    }

    /// Fail with [`SeriesError::LengthMismatch`] unless both series have the same length.
    pub fn ensure_aligned(&self, other: &Series) -> Result<(), SeriesError> {
        if self.len() != other.len() {
            return Err(SeriesError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    /// Combine two aligned series element by element.
    pub fn zip_with(
        &self,
        other: &Series,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, SeriesError> {
        self.ensure_aligned(other)?;
        Ok(Self(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }

    /// Index of the largest value. Ties resolve to the lowest index; NaN never wins
    /// against a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use takerate_core::types::Series;
    /// let revenue = Series::new(vec![1.0, 5.0, 5.0, 3.0]);
    /// assert_eq!(revenue.argmax(), Some(1));
    /// assert_eq!(Series::default().argmax(), None);
    /// ```
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, value) in self.0.iter().copied().enumerate() {
            let better = match best {
                None => true,
                Some((_, current)) => value > current || (current.is_nan() && !value.is_nan()),
            };
            if better {
                best = Some((index, value));
            }
        }
        best.map(|(index, _)| index)
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The sweep point with the highest net revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Optimum {
    /// Position in the sweep.
    pub index: usize,
    /// Take rate at that position, in dollars per ride.
    pub take_rate: f64,
    /// Net monthly revenue at that take rate.
    pub revenue: f64,
}

/// Everything the pipeline produces for one sweep. All series share the sweep's length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    pub take_rates: Series,
    pub match_rates: Series,
    pub fail_rates: Series,
    pub riders_lost: Series,
    pub drivers_lost: Series,
    pub rider_cost: Series,
    pub driver_cost: Series,
    pub total_cost: Series,
    pub profit: Series,
    pub revenue: Series,
    pub optimum: Optimum,
}

impl ModelReport {
    /// Number of sweep points.
    pub fn len(&self) -> usize {
        self.take_rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.take_rates.is_empty()
    }
}
