use math::hcm::Point3;
use std::fmt::{Display, Formatter, Result};

/// A ray-surface intersection:
///  - `point`: position of the intersection in world coordinates.
///  - `distance`: distance along the ray from its origin to `point`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Point3,
    pub distance: f32,
}

impl RayHit {
    pub fn new(point: Point3, distance: f32) -> RayHit {
        RayHit { point, distance }
    }
}

impl Display for RayHit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "point = {}, distance = {:.2}", self.point, self.distance)
    }
}
