use std::sync::Arc;

use glam::*;
use rand::Rng;

use crate::camera::CameraConfig;
use crate::scatter::Material;
use crate::sphere::Sphere;
use crate::util::rand_on_unit_sphere;
use crate::world::World;
use crate::Color;

/// Ground, a matte center sphere, a hollow glass sphere on the left and a
/// polished metal sphere on the right.
pub fn materials_showcase() -> World {
    let mut world = World::new();

    let material_ground = Arc::new(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
    let material_center = Arc::new(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
    let material_left = Arc::new(Material::dielectric(1.5));
    let material_right = Arc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 0.0));

    world.add(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, material_ground));
    world.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, material_center));
    world.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, material_left.clone()));
    world.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), -0.4, material_left));
    world.add(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, material_right));

    return world;
}

pub fn materials_showcase_camera() -> CameraConfig {
    CameraConfig::default()
}

/// Field of small random spheres around three large ones.
pub fn random_spheres<R: Rng + ?Sized>(rng: &mut R) -> World {
    let mut world = World::new();

    world.add({
        let mat = Arc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
        Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, mat)
    });

    for a in -11..11 {
        for b in -11..11 {
            let choose: f32 = rng.gen();

            let center = Vec3::new((a as f32) + rng.gen_range(0.0..0.9), 0.2, (b as f32) + rng.gen_range(0.0..0.9));

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let mat = if choose < 0.8 {
                let albedo = (rand_on_unit_sphere(rng) * rand_on_unit_sphere(rng)).abs();
                Material::lambertian(albedo)
            } else if choose < 0.95 {
                let albedo = Vec3::splat(0.5) + rand_on_unit_sphere(rng).abs() * 0.5;
                let fuzz = rng.gen_range(0.0..0.5);
                Material::metal(albedo, fuzz)
            } else {
                Material::dielectric(1.5)
            };

            world.add(Sphere::new(center, 0.2, Arc::new(mat)));
        }
    }

    world.add({
        let mat = Arc::new(Material::dielectric(1.5));
        Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, mat)
    });

    world.add({
        let mat = Arc::new(Material::lambertian(Color::new(0.4, 0.2, 0.1)));
        Sphere::new(Vec3::new(-4.0, 1.0, 0.0), 1.0, mat)
    });

    world.add({
        let mat = Arc::new(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0));
        Sphere::new(Vec3::new(4.0, 1.0, 0.0), 1.0, mat)
    });

    return world;
}

pub fn random_spheres_camera() -> CameraConfig {
    let focus_distance: f32 = 10.0;
    let aperture: f32 = 0.1;

    CameraConfig {
        aspect_ratio: 3.0 / 2.0,
        image_width: 400,
        samples_per_pixel: 20,
        max_depth: 5,
        vertical_fov: 20.0,
        look_from: Vec3::new(13.0, 2.0, 3.0),
        look_at: Vec3::ZERO,
        up: Vec3::Y,
        defocus_angle: 2.0 * (aperture * 0.5 / focus_distance).atan().to_degrees(),
        focus_distance,
    }
}
