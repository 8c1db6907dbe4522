//! A configured entry point to the batch operations.
//!
//! [`RotationEngine`] carries an [`EngineConfig`] so that a caller who needs
//! non-default thresholds sets them once. The engine holds no other state;
//! every call is independent and the engine can be shared freely across threads.
//!
//! ```
//! use rotvec_core::{EngineConfig, RotationEngine, VectorBatch};
//!
//! let engine = RotationEngine::new(EngineConfig::default().with_parallel_epsilon(1e-6))?;
//!
//! let v1 = VectorBatch::from_rows(&[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
//! let v2 = VectorBatch::from_rows(&[[0.0, 1.0, 0.0], [1.0, 0.0, 1.0]]);
//! let rotations = engine.compute_rotation(&v1, &v2)?;
//! let rotated = engine.apply_rotation(&v1, &rotations)?;
//! assert_eq!(rotated.len(), 2);
//! # Ok::<(), rotvec_core::GeomError>(())
//! ```

use crate::angle::{compute_angle_with, compute_signed_angle_with};
use crate::normalize::normalize_with;
use crate::rotation::compute_rotation_with;
use crate::{apply_rotation, AngleBatch, EngineConfig, GeomResult, RotationBatch, VectorBatch};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationEngine {
    config: EngineConfig,
}

impl RotationEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: EngineConfig) -> GeomResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn normalize(&self, batch: &VectorBatch) -> GeomResult<VectorBatch> {
        normalize_with(batch, &self.config)
    }

    pub fn compute_angle(&self, batch1: &VectorBatch, batch2: &VectorBatch) -> GeomResult<AngleBatch> {
        compute_angle_with(batch1, batch2, &self.config)
    }

    pub fn compute_signed_angle(
        &self,
        batch1: &VectorBatch,
        batch2: &VectorBatch,
        normals: &VectorBatch,
    ) -> GeomResult<AngleBatch> {
        compute_signed_angle_with(batch1, batch2, normals, &self.config)
    }

    pub fn compute_rotation(
        &self,
        batch1: &VectorBatch,
        batch2: &VectorBatch,
    ) -> GeomResult<RotationBatch> {
        compute_rotation_with(batch1, batch2, &self.config)
    }

    /// Applying a rotation has no thresholds; this forwards to [`apply_rotation`].
    pub fn apply_rotation(
        &self,
        vectors: &VectorBatch,
        rotations: &RotationBatch,
    ) -> GeomResult<VectorBatch> {
        apply_rotation(vectors, rotations)
    }
}
