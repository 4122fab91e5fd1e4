use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{rand_on_unit_sphere, reflect};
use crate::Color;
use glam::*;
use rand::Rng;

/// Specular reflector. `fuzz` is used as given; values above 1 push more
/// rays below the surface, where they are absorbed.
#[derive(Clone, Debug, PartialEq)]
pub struct MetalMaterial {
    albedo: Color,
    fuzz: f32,
}

impl MetalMaterial {
    pub fn new(albedo: Color, fuzz: f32) -> MetalMaterial {
        MetalMaterial { albedo, fuzz }
    }

    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }

    pub fn scatter_with(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        perturbation: Vec3,
    ) -> Option<(Color, Ray)> {
        let reflected_direction = reflect(r.direction.normalize(), intersection.normal);
        let scattered_direction = reflected_direction + perturbation * self.fuzz;
        let scattered = Ray::new(intersection.point, scattered_direction);

        return if scattered.direction.dot(intersection.normal) > 0.0 { Some((self.albedo, scattered)) } else { None };
    }
}

impl Scatter for MetalMaterial {
    fn scatter<R: Rng + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        rng: &mut R,
    ) -> Option<(Color, Ray)> {
        self.scatter_with(r, intersection, rand_on_unit_sphere(rng))
    }
}
