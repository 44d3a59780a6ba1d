/// Extension methods on `f32` used when comparing geometric quantities.
pub trait Float: Sized {
    /// Returns the absolute difference between `self` and `other`.
    fn dist_to(self, other: Self) -> Self;
    /// Returns true iff `self` and `other` differ by at most `tolerance`.
    fn is_close(self, other: Self, tolerance: Self) -> bool;
    /// Returns true iff the value is neither NaN nor negative.
    fn is_nonnegative(self) -> bool;
}

impl Float for f32 {
    /// ```
    /// use math::float::Float;
    /// assert_eq!(1.5f32.dist_to(-0.5), 2.0);
    /// assert_eq!((-0.5f32).dist_to(1.5), 2.0);
    /// ```
    fn dist_to(self, other: f32) -> f32 {
        (self - other).abs()
    }

    /// ```
    /// use math::float::Float;
    /// assert!(1.0f32.is_close(1.0005, 1e-3));
    /// assert!(!1.0f32.is_close(1.01, 1e-3));
    /// assert!(!f32::NAN.is_close(f32::NAN, 1.0));
    /// ```
    fn is_close(self, other: f32, tolerance: f32) -> bool {
        self.dist_to(other) <= tolerance
    }

    /// ```
    /// use math::float::Float;
    /// assert!(0.0f32.is_nonnegative());
    /// assert!(!(-1e-9f32).is_nonnegative());
    /// assert!(!f32::NAN.is_nonnegative());
    /// ```
    fn is_nonnegative(self) -> bool {
        self >= 0.0
    }
}

#[macro_export]
macro_rules! assert_le {
    ($left:expr, $right:expr) => {
        if $left > $right {
            panic!(
                "Assertion failed: {} <= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_lt {
    ($left:expr, $right:expr) => {
        if $left >= $right {
            panic!(
                "Assertion failed: {} < {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}
