//! Numeric thresholds used by the shape queries.

/// A cuboid distance below this is treated as a point inside the box.
pub const INSIDE_EPSILON: f32 = 1e-6;

/// Rays whose direction has a smaller dot product with a plane normal are parallel to it.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Allowed deviation of a plane normal's length from 1 before it is reported.
pub const UNIT_LENGTH_TOLERANCE: f32 = 1e-3;
