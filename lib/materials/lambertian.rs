use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{is_near_zero, rand_on_unit_sphere};
use crate::Color;
use glam::*;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct LambertianMaterial {
    albedo: Color,
}

impl LambertianMaterial {
    pub fn new(albedo: Color) -> LambertianMaterial {
        LambertianMaterial { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    /// Scatters around the normal using the given unit `perturbation`.
    pub fn scatter_with(&self, intersection: &SurfaceIntersection, perturbation: Vec3) -> (Color, Ray) {
        let mut scattered_direction = intersection.normal + perturbation;

        if is_near_zero(scattered_direction) {
            scattered_direction = intersection.normal
        }

        let scattered = Ray::new(intersection.point, scattered_direction);

        return (self.albedo, scattered);
    }
}

impl Scatter for LambertianMaterial {
    fn scatter<R: Rng + ?Sized>(
        &self,
        _r: &Ray,
        intersection: &SurfaceIntersection,
        rng: &mut R,
    ) -> Option<(Color, Ray)> {
        return Some(self.scatter_with(intersection, rand_on_unit_sphere(rng)));
    }
}
