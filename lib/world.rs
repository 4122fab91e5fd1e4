use crate::interval::Interval;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::surface::{Surface, SurfaceIntersection};

#[derive(Clone, Debug)]
pub enum Object {
    Sphere(Sphere),
    List(World),
}

impl Surface for Object {
    fn raycast(&self, r: &Ray, interval: Interval) -> Option<SurfaceIntersection<'_>> {
        match self {
            Object::Sphere(sphere) => sphere.raycast(r, interval),
            Object::List(world) => world.raycast(r, interval),
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Object {
        Object::Sphere(sphere)
    }
}

impl From<World> for Object {
    fn from(world: World) -> Object {
        Object::List(world)
    }
}

/// Ordered scene aggregate. When two members report the same `t`, the one
/// added first wins.
#[derive(Clone, Debug, Default)]
pub struct World {
    pub objects: Vec<Object>,
}

impl World {
    pub fn new() -> World {
        World { objects: Vec::new() }
    }

    pub fn add(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Surface for World {
    fn raycast(&self, r: &Ray, interval: Interval) -> Option<SurfaceIntersection<'_>> {
        let mut result = None;
        let mut t_nearest = interval.max;

        for obj in &self.objects {
            if let Some(intersection) = obj.raycast(r, interval.with_max(t_nearest)) {
                t_nearest = intersection.t;
                result = Some(intersection);
            }
        }

        return result;
    }
}
