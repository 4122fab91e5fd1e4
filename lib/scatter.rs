use crate::materials::{DielectricMaterial, LambertianMaterial, MetalMaterial};
use crate::ray::Ray;
use crate::surface::SurfaceIntersection;
use crate::Color;
use rand::Rng;

pub trait Scatter: Send + Sync {
    /// Decides how `r` continues after striking `intersection`. `None` means
    /// the path is absorbed.
    fn scatter<R: Rng + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        rng: &mut R,
    ) -> Option<(Color, Ray)>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    Lambertian(LambertianMaterial),
    Metal(MetalMaterial),
    Dielectric(DielectricMaterial),
}

impl Material {
    pub fn lambertian(albedo: Color) -> Material {
        Material::Lambertian(LambertianMaterial::new(albedo))
    }

    pub fn metal(albedo: Color, fuzz: f32) -> Material {
        Material::Metal(MetalMaterial::new(albedo, fuzz))
    }

    pub fn dielectric(index_of_refraction: f32) -> Material {
        Material::Dielectric(DielectricMaterial::new(index_of_refraction))
    }

    pub fn tinted_dielectric(index_of_refraction: f32, albedo: Color) -> Material {
        Material::Dielectric(DielectricMaterial::tinted(index_of_refraction, albedo))
    }
}

impl Scatter for Material {
    fn scatter<R: Rng + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        rng: &mut R,
    ) -> Option<(Color, Ray)> {
        match self {
            Material::Lambertian(m) => m.scatter(r, intersection, rng),
            Material::Metal(m) => m.scatter(r, intersection, rng),
            Material::Dielectric(m) => m.scatter(r, intersection, rng),
        }
    }
}

impl From<LambertianMaterial> for Material {
    fn from(m: LambertianMaterial) -> Material {
        Material::Lambertian(m)
    }
}

impl From<MetalMaterial> for Material {
    fn from(m: MetalMaterial) -> Material {
        Material::Metal(m)
    }
}

impl From<DielectricMaterial> for Material {
    fn from(m: DielectricMaterial) -> Material {
        Material::Dielectric(m)
    }
}
