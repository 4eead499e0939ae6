//! Floating-point geometric primitives.

mod circle;
mod point;

pub use circle::Circle;
pub use point::Point;
