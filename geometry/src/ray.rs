use std::fmt::{Display, Formatter, Result};

use math::hcm;

/// Represents a ray cast by a range sensor:
///
///   origin + t * direction
///
/// where t is in `[0, max_distance]`.
///
/// `dir` is expected to be unit length so that `t` is a metric distance. It is never renormalized.
/// The extent of the ray is by default infinite, and is usually set to the sensor's maximum range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: hcm::Point3,
    pub dir: hcm::Vec3,
    pub max_distance: f32,
}

impl Ray {
    pub fn new(origin: hcm::Point3, dir: hcm::Vec3) -> Self {
        Ray {
            origin,
            dir,
            max_distance: f32::INFINITY,
        }
    }

    pub fn with_extent(self, max_distance: f32) -> Self {
        Ray {
            max_distance,
            ..self
        }
    }

    /// Returns `Some(t)` if the given `t` lies within the ray's extent `[0.0, max_distance]`,
    /// `None` otherwise. A ray with a non-positive extent accepts nothing, and NaN is never
    /// accepted.
    ///
    /// The lower bound is closed: a ray starting on a surface and heading into it hits at `t = 0`.
    /// ```
    /// use geometry::ray::Ray;
    /// use math::hcm::{Point3, Vec3};
    /// let r = Ray::new(Point3::ORIGIN, Vec3::X).with_extent(2.0);
    /// assert_eq!(r.truncated_t(0.0), Some(0.0));
    /// assert_eq!(r.truncated_t(2.0), Some(2.0));
    /// assert_eq!(r.truncated_t(2.5), None);
    /// assert_eq!(r.truncated_t(-0.1), None);
    /// assert_eq!(r.with_extent(0.0).truncated_t(0.0), None);
    /// ```
    pub fn truncated_t(&self, t: f32) -> Option<f32> {
        if self.max_distance <= 0.0 || t.is_nan() || t < 0.0 || t > self.max_distance {
            None
        } else {
            Some(t)
        }
    }

    pub fn position_at(&self, t: f32) -> hcm::Point3 {
        self.origin + t * self.dir
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.precision$} + t{:.precision$}, t <= {:.precision$}",
            self.origin,
            self.dir,
            self.max_distance,
            precision = precision
        )
    }
}

#[cfg(test)]
mod test {
    use super::Ray;
    use math::hcm::{point3, vec3};

    #[test]
    fn test_position_at() {
        let r = Ray::new(point3(1.0, 2.0, 3.0), vec3(0.0, 0.0, -1.0));
        assert_eq!(r.position_at(0.0), point3(1.0, 2.0, 3.0));
        assert_eq!(r.position_at(3.0), point3(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_default_extent_is_unbounded() {
        let r = Ray::new(point3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        assert!(r.max_distance.is_infinite());
        assert_eq!(r.truncated_t(1e30), Some(1e30));
        assert_eq!(r.truncated_t(f32::NAN), None);
    }

    #[test]
    fn test_negative_extent_accepts_nothing() {
        let r = Ray::new(point3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)).with_extent(-1.0);
        for t in [-2.0, -1.0, 0.0, 1.0] {
            assert_eq!(r.truncated_t(t), None, "t = {}", t);
        }
    }

    #[test]
    fn test_display() {
        let r = Ray::new(point3(0.0, 1.0, 0.0), vec3(1.0, 0.0, 0.0)).with_extent(5.0);
        assert_eq!(format!("{}", r), "[0.00, 1.00, 0.00] + t(1.00, 0.00, 0.00), t <= 5.00");
    }
}
