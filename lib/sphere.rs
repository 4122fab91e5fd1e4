use std::sync::Arc;

use crate::interval::Interval;
use crate::ray::Ray;
use crate::scatter::Material;
use crate::surface::{Surface, SurfaceIntersection};
use glam::Vec3;

/// A sphere with a signed radius. A negative radius keeps the same surface
/// but turns the outward normal inwards, which is how hollow glass shells
/// are built.
#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Sphere {
        return Sphere { center, radius, material };
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Geometric normal at a surface point `p`, scaled by the signed radius.
    pub fn outward_normal(&self, p: Vec3) -> Vec3 {
        (p - self.center) / self.radius
    }
}

impl Surface for Sphere {
    fn raycast(&self, r: &Ray, interval: Interval) -> Option<SurfaceIntersection<'_>> {
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let half_b = oc.dot(r.direction);
        let c = oc.length_squared() - (self.radius * self.radius);

        let discriminant = (half_b * half_b) - (a * c);

        if discriminant < 0.0 {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();

        let root_lower = (-half_b - discriminant_sqrt) / a;
        let root_upper = (-half_b + discriminant_sqrt) / a;

        let t = if interval.surrounds(root_lower) {
            root_lower
        } else if interval.surrounds(root_upper) {
            root_upper
        } else {
            return None;
        };

        let p = r.at(t);

        return Some(SurfaceIntersection::new(r, p, self.outward_normal(p), t, &self.material));
    }
}
