use crate::interval::Interval;
use crate::ray::Ray;
use crate::scatter::Material;
use glam::*;

pub trait Surface: Send + Sync {
    /// Nearest intersection of `r` with a parameter strictly inside `interval`.
    fn raycast(&self, r: &Ray, interval: Interval) -> Option<SurfaceIntersection<'_>>;
}

#[derive(Clone, Copy, Debug)]
pub struct SurfaceIntersection<'a> {
    pub point: Vec3,
    /// Unit length, always facing against the incoming ray.
    pub normal: Vec3,
    pub t: f32,
    pub front_face: bool,
    pub material: &'a Material,
}

impl<'a> SurfaceIntersection<'a> {
    /// Builds a record from the geometric outward normal, flipping it when
    /// the ray arrives from the inside.
    pub fn new(r: &Ray, point: Vec3, outward_normal: Vec3, t: f32, material: &'a Material) -> Self {
        let front_face = r.direction.dot(outward_normal) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };

        SurfaceIntersection { point, normal, t, front_face, material }
    }
}
