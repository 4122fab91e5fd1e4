//! Offline sphere ray tracer following the
//! [Ray Tracing in One Weekend](https://raytracing.github.io/) book series.

pub mod camera;
pub mod frame;
pub mod interval;
pub mod materials;
pub mod ray;
pub mod render;
pub mod scatter;
pub mod scenes;
pub mod sphere;
pub mod surface;
pub mod util;
pub mod world;

/// Linear RGB colour, channels conventionally in `[0, 1]`.
pub type Color = glam::Vec3;
