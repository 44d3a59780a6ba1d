mod error;
mod hit;
mod simple;
pub mod tolerance;

use std::fmt::{Display, Formatter};

use enum_dispatch::enum_dispatch;
use geometry::ray::Ray;
use math::hcm::Point3;
use radiometry::Color;

pub use error::ShapeError;
pub use hit::RayHit;
pub use simple::*;

/// Discriminant of a scene object. Fixed at construction; it is metadata only, the `Object`
/// enum is what selects the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Sphere,
    Cuboid,
    Plane,
}

impl Display for ObjectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ObjectKind::Sphere => "sphere",
            ObjectKind::Cuboid => "cuboid",
            ObjectKind::Plane => "plane",
        };
        f.write_str(name)
    }
}

/// Represents the queries a synthetic scene object answers:
/// - distance from a point to its surface, used to build ground-truth distance fields;
/// - first intersection with a ray, used to simulate range measurements.
///
/// See `simple.rs` for the implementations: `Sphere`, `Cuboid` and `Plane`. Distance conventions
/// differ between them, see each type's documentation.
#[enum_dispatch]
pub trait Shape: Send + Sync {
    fn kind(&self) -> ObjectKind;
    /// Center of a solid, or the reference point of a plane.
    fn center(&self) -> Point3;
    /// Color given to points simulated on this object.
    fn color(&self) -> Color;
    fn summary(&self) -> String;
    fn distance_to(&self, point: Point3) -> f32;
    /// Returns the nearest hit within the ray's extent, `Ok(None)` for a miss, or
    /// `Err(ShapeError::Unsupported)` if the shape cannot be ray-cast.
    fn intersect_ray(&self, r: &Ray) -> Result<Option<RayHit>, ShapeError>;
}

/// A scene object: the closed set of shapes a simulated scene is made of.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Sphere,
    Cuboid,
    Plane,
}
