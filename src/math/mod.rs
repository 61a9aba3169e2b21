//! Small value types for 2D screen points and 3D positions/directions.

pub mod vec2;
pub mod vec3;
