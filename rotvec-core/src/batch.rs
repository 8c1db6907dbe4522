//! Batches of 3D vectors and per-pair angles.
//!
//! # Layouts
//!
//! Callers hand vector data over in one of two conventions:
//!
//! | [`Layout`] | Shape | Example for N = 2 |
//! |------------|-------|-------------------|
//! | `SampleMajor` | N rows of `[x, y, z]` | `[x0, y0, z0, x1, y1, z1]` |
//! | `DimensionMajor` | 3 rows of N values | `[x0, x1, y0, y1, z0, z1]` |
//!
//! Internally a [`VectorBatch`] always stores a `Vec<Vector3>`. The layout is
//! only a tag remembering how the data arrived, and it is used again when the
//! data leaves through [`to_flat`](VectorBatch::to_flat). No operation in this
//! crate transposes data behind the caller's back.
//!
//! ```
//! use rotvec_core::{Layout, VectorBatch};
//!
//! // Two vectors given dimension-major: xs, then ys, then zs
//! let batch = VectorBatch::from_flat(&[1.0, 4.0, 2.0, 5.0, 3.0, 6.0], Layout::DimensionMajor)?;
//! assert_eq!(batch.to_rows(), vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
//! assert_eq!(batch.to_flat(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
//! # Ok::<(), rotvec_core::GeomError>(())
//! ```
//!
//! Paired operations require both batches to carry the same layout tag;
//! mixing them is reported as [`GeomError::ShapeMismatch`].

use crate::{GeomError, GeomResult, Vector3};

/// How a batch's flat data is ordered at the public boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// One `[x, y, z]` triple per sample (N × 3).
    #[default]
    SampleMajor,
    /// All x values, then all y values, then all z values (3 × N).
    DimensionMajor,
}

/// An ordered collection of 3D vectors processed together.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorBatch {
    vectors: Vec<Vector3>,
    layout: Layout,
}

impl VectorBatch {
    /// Creates a sample-major batch from vectors.
    pub fn new(vectors: Vec<Vector3>) -> Self {
        Self::from_vectors(vectors, Layout::SampleMajor)
    }

    pub fn from_vectors(vectors: Vec<Vector3>, layout: Layout) -> Self {
        Self { vectors, layout }
    }

    /// Creates a batch holding one vector, used for broadcasting.
    pub fn single(vector: Vector3) -> Self {
        Self::new(vec![vector])
    }

    /// Creates a sample-major batch from `[x, y, z]` rows.
    pub fn from_rows(rows: &[[f64; 3]]) -> Self {
        Self::new(rows.iter().copied().map(Vector3::from_array).collect())
    }

    /// Creates a dimension-major batch from three component slices.
    ///
    /// Fails with [`GeomError::ShapeMismatch`] if the slices differ in length.
    pub fn from_columns(xs: &[f64], ys: &[f64], zs: &[f64]) -> GeomResult<Self> {
        if xs.len() != ys.len() || xs.len() != zs.len() {
            return Err(GeomError::shape_mismatch(
                "VectorBatch::from_columns",
                &format!(
                    "component lengths differ: x={}, y={}, z={}",
                    xs.len(),
                    ys.len(),
                    zs.len()
                ),
            ));
        }

        let vectors = xs
            .iter()
            .zip(ys)
            .zip(zs)
            .map(|((&x, &y), &z)| Vector3::new(x, y, z))
            .collect();
        Ok(Self::from_vectors(vectors, Layout::DimensionMajor))
    }

    /// Creates a batch from flat data in the given layout.
    ///
    /// Fails with [`GeomError::ShapeMismatch`] if `data.len()` is not a multiple of 3.
    pub fn from_flat(data: &[f64], layout: Layout) -> GeomResult<Self> {
        if data.len() % 3 != 0 {
            return Err(GeomError::shape_mismatch(
                "VectorBatch::from_flat",
                &format!("{} values is not a multiple of 3", data.len()),
            ));
        }

        match layout {
            Layout::SampleMajor => {
                let vectors = data
                    .chunks_exact(3)
                    .map(|c| Vector3::new(c[0], c[1], c[2]))
                    .collect();
                Ok(Self::from_vectors(vectors, layout))
            }
            Layout::DimensionMajor => {
                let n = data.len() / 3;
                Self::from_columns(&data[..n], &data[n..2 * n], &data[2 * n..])
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn vectors(&self) -> &[Vector3] {
        &self.vectors
    }

    pub fn get(&self, index: usize) -> Option<&Vector3> {
        self.vectors.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector3> {
        self.vectors.iter()
    }

    pub fn into_vectors(self) -> Vec<Vector3> {
        self.vectors
    }

    /// Returns the same vectors tagged with another layout.
    pub fn to_layout(&self, layout: Layout) -> Self {
        Self::from_vectors(self.vectors.clone(), layout)
    }

    /// Returns the vectors as `[x, y, z]` rows, regardless of layout tag.
    pub fn to_rows(&self) -> Vec<[f64; 3]> {
        self.vectors.iter().map(Vector3::to_array).collect()
    }

    /// Returns the vectors as `[xs, ys, zs]`, regardless of layout tag.
    pub fn to_columns(&self) -> [Vec<f64>; 3] {
        [
            self.vectors.iter().map(|v| v.x).collect(),
            self.vectors.iter().map(|v| v.y).collect(),
            self.vectors.iter().map(|v| v.z).collect(),
        ]
    }

    /// Flattens the batch in its own layout.
    pub fn to_flat(&self) -> Vec<f64> {
        match self.layout {
            Layout::SampleMajor => self.vectors.iter().flat_map(Vector3::to_array).collect(),
            Layout::DimensionMajor => self.to_columns().concat(),
        }
    }

    /// A new batch with the same layout tag as `self`.
    pub(crate) fn with_vectors(&self, vectors: Vec<Vector3>) -> Self {
        Self::from_vectors(vectors, self.layout)
    }
}

impl std::ops::Index<usize> for VectorBatch {
    type Output = Vector3;

    fn index(&self, index: usize) -> &Vector3 {
        &self.vectors[index]
    }
}

impl FromIterator<Vector3> for VectorBatch {
    fn from_iter<I: IntoIterator<Item = Vector3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VectorBatch {
    type Item = &'a Vector3;
    type IntoIter = std::slice::Iter<'a, Vector3>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

/// One angle in radians per vector pair.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleBatch {
    angles: Vec<f64>,
}

impl AngleBatch {
    pub fn new(angles: Vec<f64>) -> Self {
        Self { angles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.angles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.angles.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.angles
    }

    /// Returns the angles converted to degrees.
    pub fn to_degrees(&self) -> Vec<f64> {
        self.angles.iter().map(|a| a.to_degrees()).collect()
    }
}

impl std::ops::Index<usize> for AngleBatch {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.angles[index]
    }
}

impl From<Vec<f64>> for AngleBatch {
    fn from(angles: Vec<f64>) -> Self {
        Self::new(angles)
    }
}

/// Checks that two batches can be processed pair-wise.
pub(crate) fn check_paired(operation: &str, a: &VectorBatch, b: &VectorBatch) -> GeomResult<()> {
    if a.len() != b.len() {
        return Err(GeomError::shape_mismatch(
            operation,
            &format!("batch lengths differ: {} vs {}", a.len(), b.len()),
        ));
    }
    if a.layout() != b.layout() {
        return Err(GeomError::shape_mismatch(
            operation,
            &format!("layouts differ: {:?} vs {:?}", a.layout(), b.layout()),
        ));
    }
    Ok(())
}

/// Output length for two sides that must be equal or have a singleton side.
pub(crate) fn broadcast_len(operation: &str, left: usize, right: usize) -> GeomResult<usize> {
    if left == right {
        Ok(left)
    } else if left == 1 {
        Ok(right)
    } else if right == 1 {
        Ok(left)
    } else {
        Err(GeomError::shape_mismatch(
            operation,
            &format!(
                "cannot broadcast {} against {}: sizes must match or one must be 1",
                left, right
            ),
        ))
    }
}

/// Index into a side of a broadcast, repeating a singleton.
#[inline]
pub(crate) fn broadcast_index(len: usize, i: usize) -> usize {
    if len == 1 {
        0
    } else {
        i
    }
}
