/// Defines small helpers for `f32` comparisons, and macros to check if two math quantities are
/// less than / greater than (or equal to) each other, or close to each other.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points `Point3` and vectors `Vec3`, kept distinct so that point - point = vector.
/// - Functions `vec3()` and `point3()` as short constructors.
/// - Conversions to and from `glam::Vec3` for callers built on glam.
pub mod hcm;
