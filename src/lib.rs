//! Analytic scene objects for sensor simulation.
//!
//! Every object answers two queries: the distance from a point to its surface, and the first
//! intersection of a range-bounded ray with its surface. Simulated sensors and ground-truth map
//! generators hold a collection of [`shape::Object`]s and aggregate over it themselves.
//!
//! ```
//! use voxsim::prelude::*;
//!
//! let scene: Vec<Object> = vec![
//!     Sphere::new(point3(0.0, 0.0, 1.0), 1.0).with_color(Color::RED).into(),
//!     Plane::new(Point3::ORIGIN, Vec3::Z).into(),
//! ];
//! let ray = Ray::new(point3(0.0, 0.0, 5.0), -Vec3::Z).with_extent(10.0);
//! let nearest = scene
//!     .iter()
//!     .filter_map(|o| o.intersect_ray(&ray).ok().flatten().map(|hit| (hit, o.color())))
//!     .min_by(|(a, _), (b, _)| a.distance.total_cmp(&b.distance));
//! let (hit, color) = nearest.unwrap();
//! assert_eq!(hit.distance, 3.0);
//! assert_eq!(color, Color::RED);
//! ```

pub use geometry;
pub use math;
pub use radiometry;
pub use shape;

/// The names most callers need.
pub mod prelude {
    pub use geometry::ray::Ray;
    pub use math::hcm::{point3, vec3, Point3, Vec3};
    pub use radiometry::Color;
    pub use shape::{Cuboid, Object, ObjectKind, Plane, RayHit, Shape, ShapeError, Sphere};
}
