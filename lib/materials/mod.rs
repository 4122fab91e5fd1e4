mod dielectric;
mod lambertian;
mod metal;

pub use dielectric::{DielectricMaterial, VACUUM_INDEX};
pub use lambertian::LambertianMaterial;
pub use metal::MetalMaterial;
