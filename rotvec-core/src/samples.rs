//! Per-parameter medians of flattened sampler output.
//!
//! Samplers typically return draws as a flat row-major matrix of shape
//! `(n_draws, n_params)`. [`column_medians`] reduces it to one median per
//! parameter, the values a corner or triangle plot marks as its reference lines.
//!
//! ```
//! use rotvec_core::samples::SampleSummary;
//!
//! let draws = [
//!     1.0, 10.0,
//!     3.0, 30.0,
//!     2.0, 20.0,
//! ];
//! let summary = SampleSummary::from_flat(&draws, &["a", "b"])?;
//! assert_eq!(summary.median("b"), Some(20.0));
//! # Ok::<(), rotvec_core::GeomError>(())
//! ```

use tracing::trace;

use crate::{GeomError, GeomResult};

const OPERATION: &str = "column_medians";

/// Median of every column of a flat row-major `samples` matrix with `n_params` columns.
///
/// An even number of draws yields the mean of the two middle values. NaN
/// entries sort after every number.
pub fn column_medians(samples: &[f64], n_params: usize) -> GeomResult<Vec<f64>> {
    if n_params == 0 {
        return Err(GeomError::shape_mismatch(OPERATION, "n_params must be at least 1"));
    }
    if samples.is_empty() {
        return Err(GeomError::shape_mismatch(OPERATION, "sample matrix is empty"));
    }
    if samples.len() % n_params != 0 {
        return Err(GeomError::shape_mismatch(
            OPERATION,
            &format!("{} values is not a multiple of {} parameters", samples.len(), n_params),
        ));
    }

    let n_draws = samples.len() / n_params;
    trace!(n_draws, n_params, "column_medians");

    let mut column = Vec::with_capacity(n_draws);
    Ok((0..n_params)
        .map(|p| {
            column.clear();
            column.extend(samples.iter().skip(p).step_by(n_params).copied());
            median_in_place(&mut column)
        })
        .collect())
}

fn median_in_place(values: &mut [f64]) -> f64 {
    values.sort_unstable_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        0.5 * (values[mid - 1] + values[mid])
    }
}

/// Parameter names paired with their medians.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleSummary {
    names: Vec<String>,
    medians: Vec<f64>,
}

impl SampleSummary {
    pub fn from_flat<S: AsRef<str>>(samples: &[f64], names: &[S]) -> GeomResult<Self> {
        let medians = column_medians(samples, names.len())?;
        Ok(Self {
            names: names.iter().map(|n| n.as_ref().to_owned()).collect(),
            medians,
        })
    }

    /// Pairs precomputed medians with names.
    pub fn new<S: AsRef<str>>(names: &[S], medians: Vec<f64>) -> GeomResult<Self> {
        if names.len() != medians.len() {
            return Err(GeomError::shape_mismatch(
                "SampleSummary::new",
                &format!("{} names for {} medians", names.len(), medians.len()),
            ));
        }
        Ok(Self {
            names: names.iter().map(|n| n.as_ref().to_owned()).collect(),
            medians,
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn medians(&self) -> &[f64] {
        &self.medians
    }

    pub fn median(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.medians[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.medians.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_and_even_draws() {
        let odd = [5.0, 1.0, 3.0];
        assert_eq!(column_medians(&odd, 1).unwrap(), vec![3.0]);

        let even = [4.0, -1.0, 1.0, -3.0, 2.0, -2.0, 3.0, -4.0];
        assert_eq!(column_medians(&even, 2).unwrap(), vec![2.5, -2.5]);
    }

    #[test]
    fn test_columns_are_independent() {
        let samples = [1.0, 100.0, -7.0, 2.0, 200.0, -8.0, 3.0, 300.0, -9.0];
        assert_eq!(column_medians(&samples, 3).unwrap(), vec![2.0, 200.0, -8.0]);
    }

    #[test]
    fn test_shape_errors() {
        assert!(matches!(
            column_medians(&[1.0, 2.0, 3.0], 2),
            Err(GeomError::ShapeMismatch { .. })
        ));
        assert!(matches!(column_medians(&[], 2), Err(GeomError::ShapeMismatch { .. })));
        assert!(matches!(column_medians(&[1.0], 0), Err(GeomError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_summary_lookup() {
        let summary = SampleSummary::from_flat(&[1.0, 4.0, 3.0, 6.0], &["mass", "spin"]).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.median("mass"), Some(2.0));
        assert_eq!(summary.median("spin"), Some(5.0));
        assert_eq!(summary.median("charge"), None);

        let pairs: Vec<_> = summary.iter().collect();
        assert_eq!(pairs, vec![("mass", 2.0), ("spin", 5.0)]);
    }

    #[test]
    fn test_summary_name_count_mismatch() {
        assert!(SampleSummary::new(&["a", "b"], vec![1.0]).is_err());
        assert!(SampleSummary::from_flat(&[1.0, 2.0, 3.0], &["a", "b"]).is_err());
    }
}
