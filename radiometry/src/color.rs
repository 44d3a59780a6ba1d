/// 8-bit RGBA color. Has no behavior besides construction and formatting; a simulated sensor
/// copies it onto the points it generates from hits on an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::rgba(r, g, b, 255)
    }
    pub const fn gray(level: u8) -> Color {
        Color::rgb(level, level, level)
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 127, 0);
    pub const PURPLE: Color = Color::rgb(127, 0, 255);
    pub const TEAL: Color = Color::rgb(0, 255, 255);
    pub const PINK: Color = Color::rgb(255, 0, 127);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    #[test]
    fn test_default_is_opaque_white() {
        assert_eq!(Color::default(), Color::WHITE);
        assert_eq!(Color::default().a, 255);
        assert_eq!(Color::gray(255), Color::WHITE);
    }

    #[test]
    fn test_formatting() {
        let c = Color::rgba(255, 0, 127, 16);
        assert_eq!(format!("{}", c), "rgba(255, 0, 127, 16)");
        assert_eq!(format!("{}", Color::gray(128)), "rgba(128, 128, 128, 255)");
    }
}
