//! Spatial primitives for the 3D scene
//!
//! Uses a right-handed coordinate system:
//! - X: Right (+) / Left (-)
//! - Y: Up (+) / Down (-)
//! - Z: towards the viewer (+) / away (-)

mod point3d;
mod vector3d;
mod camera;

pub use point3d::Point3D;
pub use vector3d::Vector3D;
pub use camera::FirstPersonCamera;
