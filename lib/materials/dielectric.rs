use crate::ray::Ray;
use crate::scatter::Scatter;
use crate::surface::SurfaceIntersection;
use crate::util::{reflect, refract};
use crate::Color;
use glam::*;
use rand::Rng;

pub const VACUUM_INDEX: f32 = 1.0;

/// Clear (or tinted) refractive medium. Rays either refract or, past the
/// critical angle, reflect; there is no partial Fresnel reflection.
#[derive(Clone, Debug, PartialEq)]
pub struct DielectricMaterial {
    index_of_refraction: f32,
    albedo: Color,
}

impl DielectricMaterial {
    pub fn new(index_of_refraction: f32) -> DielectricMaterial {
        DielectricMaterial { index_of_refraction, albedo: Color::ONE }
    }

    pub fn tinted(index_of_refraction: f32, albedo: Color) -> DielectricMaterial {
        DielectricMaterial { index_of_refraction, albedo }
    }

    pub fn index_of_refraction(&self) -> f32 {
        self.index_of_refraction
    }

    fn scattered_direction(&self, r: &Ray, intersection: &SurfaceIntersection) -> Vec3 {
        let refraction_ratio = if intersection.front_face {
            VACUUM_INDEX / self.index_of_refraction
        } else {
            self.index_of_refraction
        };

        let r_direction_norm = r.direction.normalize();

        let cos_theta = intersection.normal.dot(-r_direction_norm).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        if refraction_ratio * sin_theta > 1.0 {
            reflect(r_direction_norm, intersection.normal) // total internal reflection
        } else {
            refract(r_direction_norm, intersection.normal, refraction_ratio)
        }
    }
}

impl Scatter for DielectricMaterial {
    fn scatter<R: Rng + ?Sized>(
        &self,
        r: &Ray,
        intersection: &SurfaceIntersection,
        _rng: &mut R,
    ) -> Option<(Color, Ray)> {
        let scattered = Ray::new(intersection.point, self.scattered_direction(r, intersection));

        Some((self.albedo, scattered))
    }
}
