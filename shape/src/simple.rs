use geometry::ray::Ray;
use log::{debug, warn};
use math::float::Float;
use math::hcm::{Point3, Vec3};
use radiometry::Color;

use crate::tolerance::{INSIDE_EPSILON, PARALLEL_EPSILON, UNIT_LENGTH_TOLERANCE};
use crate::{ObjectKind, RayHit, Shape, ShapeError};

/// A solid ball. Its distance is signed: negative inside, zero on the surface, positive outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    color: Color,
}

impl Sphere {
    /// Makes a white sphere. `radius` should be non-negative; this is not enforced.
    pub fn new(center: Point3, radius: f32) -> Sphere {
        if radius < 0.0 {
            warn!("Sphere at {} built with negative radius {}", center, radius);
        }
        Sphere {
            center,
            radius,
            color: Color::default(),
        }
    }
    pub fn try_new(center: Point3, radius: f32) -> Result<Sphere, ShapeError> {
        if !radius.is_nonnegative() {
            debug!("Rejecting sphere at {} with radius {}", center, radius);
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Self::new(center, radius))
    }
    pub fn with_color(self, color: Color) -> Sphere {
        Sphere { color, ..self }
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// An axis-aligned box given by its center and per-axis half-size.
///
/// The distance is zero on the surface and positive outside. Inside, the (non-positive) depth
/// along the least-penetrated axis is returned instead. The two cases are not continuous where
/// they meet.
///
/// Ray intersection is not implemented: `intersect_ray()` always returns
/// `ShapeError::Unsupported`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    center: Point3,
    half_extents: Vec3,
    color: Color,
}

impl Cuboid {
    pub fn new(center: Point3, half_extents: Vec3) -> Cuboid {
        if half_extents.min_coeff() < 0.0 {
            warn!(
                "Cuboid at {} built with negative half-extents {}",
                center, half_extents
            );
        }
        Cuboid {
            center,
            half_extents,
            color: Color::default(),
        }
    }
    pub fn try_new(center: Point3, half_extents: Vec3) -> Result<Cuboid, ShapeError> {
        let (x, y, z) = half_extents.as_triple();
        if !(x.is_nonnegative() && y.is_nonnegative() && z.is_nonnegative()) {
            debug!(
                "Rejecting cuboid at {} with half-extents {}",
                center, half_extents
            );
            return Err(ShapeError::InvalidHalfExtents(half_extents));
        }
        Ok(Self::new(center, half_extents))
    }
    pub fn with_color(self, color: Color) -> Cuboid {
        Cuboid { color, ..self }
    }
    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }
}

/// An infinite plane through `center`. The distance is signed, positive on the side `normal`
/// points to.
///
/// `normal` is required to be unit length already; it is not normalized on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    center: Point3,
    normal: Vec3,
    color: Color,
}

impl Plane {
    pub fn new(center: Point3, normal: Vec3) -> Plane {
        if !normal.norm().is_close(1.0, UNIT_LENGTH_TOLERANCE) {
            warn!(
                "Plane through {} built with non-unit normal {} (norm = {})",
                center,
                normal,
                normal.norm()
            );
        }
        Plane {
            center,
            normal,
            color: Color::default(),
        }
    }
    pub fn try_new(center: Point3, normal: Vec3) -> Result<Plane, ShapeError> {
        let norm = normal.norm();
        if !norm.is_close(1.0, UNIT_LENGTH_TOLERANCE) {
            debug!("Rejecting plane through {} with normal {}", center, normal);
            return Err(ShapeError::NonUnitNormal { norm });
        }
        Ok(Self::new(center, normal))
    }
    pub fn with_color(self, color: Color) -> Plane {
        Plane { color, ..self }
    }
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

// Implementation of the `Shape` trait for the shape implementations.

impl Shape for Sphere {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Sphere
    }
    fn center(&self) -> Point3 {
        self.center
    }
    fn color(&self) -> Color {
        self.color
    }
    fn summary(&self) -> String {
        format!("Sphere{{ {}, radius = {} }}", self.center, self.radius)
    }
    fn distance_to(&self, point: Point3) -> f32 {
        self.center.distance_to(point) - self.radius
    }
    fn intersect_ray(&self, r: &Ray) -> Result<Option<RayHit>, ShapeError> {
        // r = o + td, |d| = 1
        // sphere: (p-c)(p-c) = radius^2
        // t^2 + 2t d*(o-c) + (o-c)^2 - radius^2 = 0
        // t = -b -/+ sqrt(b^2 - c), where b = d*(o-c), c = (o-c)^2 - radius^2
        let f = r.origin - self.center; // vector connecting the sphere center to ray origin.
        let b = r.dir.dot(f);
        let c = f.norm_squared() - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return Ok(None);
        }
        // Only the entry point is reported. If it's behind the origin there is no hit, even when
        // the exit point is in front of it.
        let t_near = -b - discriminant.sqrt();
        Ok(r.truncated_t(t_near).map(|t| RayHit::new(r.position_at(t), t)))
    }
}

impl Shape for Cuboid {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Cuboid
    }
    fn center(&self) -> Point3 {
        self.center
    }
    fn color(&self) -> Color {
        self.color
    }
    fn summary(&self) -> String {
        format!(
            "Cuboid{{ {}, half_extents = {} }}",
            self.center, self.half_extents
        )
    }
    fn distance_to(&self, point: Point3) -> f32 {
        // Per axis, how far the point is below the min face and above the max face. At most one
        // of the two is positive; both are negative inside the slab of that axis.
        let below = (self.center - self.half_extents) - point;
        let above = point - (self.center + self.half_extents);
        let outside = below.cw_max(Vec3::ZERO).cw_max(above);
        let distance = outside.norm();
        if distance < INSIDE_EPSILON {
            // Inside (or on the surface).
            below.cw_max(above).max_coeff()
        } else {
            distance
        }
    }
    fn intersect_ray(&self, _r: &Ray) -> Result<Option<RayHit>, ShapeError> {
        Err(ShapeError::Unsupported {
            kind: ObjectKind::Cuboid,
            operation: "ray intersection",
        })
    }
}

impl Shape for Plane {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Plane
    }
    fn center(&self) -> Point3 {
        self.center
    }
    fn color(&self) -> Color {
        self.color
    }
    fn summary(&self) -> String {
        format!("Plane{{ {}, normal = {} }}", self.center, self.normal)
    }
    fn distance_to(&self, point: Point3) -> f32 {
        // Implicit form: ax + by + cz + d = 0 with (a, b, c) = normal.
        let d = -self.normal.dot(Vec3::from(self.center));
        (self.normal.dot(Vec3::from(point)) + d) / self.normal.norm()
    }
    fn intersect_ray(&self, r: &Ray) -> Result<Option<RayHit>, ShapeError> {
        // Ray:    r = o + td
        // Plane: (p-c) dot n = 0
        //        (o + td - c) dot n = (o-c) dot n + t d dot n = 0
        //        (c - o) dot n = t * d dot n
        let denominator = r.dir.dot(self.normal);
        if denominator.abs() < PARALLEL_EPSILON {
            // Parallel, including rays lying in the plane.
            return Ok(None);
        }
        let t = (self.center - r.origin).dot(self.normal) / denominator;
        Ok(r.truncated_t(t).map(|t| RayHit::new(r.position_at(t), t)))
    }
}
