/// Defines the `Ray` type passed to ray-intersection queries.
pub mod ray;

pub use ray::Ray;
