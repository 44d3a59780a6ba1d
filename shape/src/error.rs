use math::hcm::Vec3;
use thiserror::Error;

use crate::ObjectKind;

/// Errors reported by shape construction and queries.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    /// The query has no implementation for this kind of object. Distinct from a miss.
    #[error("{operation} is not implemented for a {kind}")]
    Unsupported {
        kind: ObjectKind,
        operation: &'static str,
    },

    #[error("invalid sphere radius: {0}")]
    InvalidRadius(f32),

    #[error("invalid cuboid half-extents: {0}")]
    InvalidHalfExtents(Vec3),

    #[error("plane normal must be unit length, got norm {norm}")]
    NonUnitNormal { norm: f32 },
}
