/// RGBA colors attached to scene objects and used to color simulated hits.
pub mod color;

pub use color::Color;
