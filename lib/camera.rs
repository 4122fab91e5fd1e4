use glam::*;
use rand::Rng;

use crate::ray::Ray;
use crate::util::rand_in_unit_disc;

/// Everything needed to place the camera and drive the sampler.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub aspect_ratio: f32,
    pub image_width: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    /// Vertical field of view in degrees.
    pub vertical_fov: f32,
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Cone angle in degrees of rays through each pixel; 0 disables depth of field.
    pub defocus_angle: f32,
    pub focus_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            aspect_ratio: 16.0 / 9.0,
            image_width: 400,
            samples_per_pixel: 100,
            max_depth: 50,
            vertical_fov: 90.0,
            look_from: Vec3::new(-2.0, 2.0, 1.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            defocus_angle: 10.0,
            focus_distance: 1.0,
        }
    }
}

impl CameraConfig {
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f32 / self.aspect_ratio) as u32).max(1)
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    pub origin: Vec3,
    llc: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    cu: Vec3,
    cv: Vec3,
    lens_radius: f32,
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Camera {
        let image_width = config.image_width.max(1);
        let image_height = config.image_height();
        let aspect_ratio = image_width as f32 / image_height as f32;

        let theta = config.vertical_fov.to_radians();

        let viewport_h = 2.0 * (theta * 0.5).tan();
        let viewport_w = viewport_h * aspect_ratio;

        let cw = (config.look_from - config.look_at).normalize();
        let cu = config.up.cross(cw).normalize();
        let cv = cw.cross(cu);

        let focus = config.focus_distance;
        let h = focus * viewport_w * cu;
        let v = focus * viewport_h * cv;

        let origin = config.look_from;
        let llc = origin - (h * 0.5) - (v * 0.5) - focus * cw;
        let lens_radius = focus * (config.defocus_angle.to_radians() * 0.5).tan();

        return Camera {
            origin,
            llc,
            horizontal: h,
            vertical: v,
            cu,
            cv,
            lens_radius,
            image_width,
            image_height,
            samples_per_pixel: config.samples_per_pixel.max(1),
            max_depth: config.max_depth,
        };
    }

    /// Ray through viewport coordinates `s` (left to right) and `t` (bottom
    /// to top), both in `[0, 1]`, starting from a random point on the lens.
    pub fn create_ray<R: Rng + ?Sized>(&self, s: f32, t: f32, rng: &mut R) -> Ray {
        let rand_in_lens_disc = rand_in_unit_disc(rng) * self.lens_radius;
        let offset = self.cu * rand_in_lens_disc.x + self.cv * rand_in_lens_disc.y;

        return Ray::new(
            self.origin + offset,
            self.llc + s * self.horizontal + t * self.vertical - self.origin - offset,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pinhole() -> CameraConfig {
        CameraConfig {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            defocus_angle: 0.0,
            focus_distance: 1.0,
            ..CameraConfig::default()
        }
    }

    #[test]
    fn image_height_follows_aspect_ratio() {
        let config = CameraConfig::default();
        assert_eq!(config.image_height(), 225);

        let thin = CameraConfig { image_width: 1, aspect_ratio: 4.0, ..CameraConfig::default() };
        assert_eq!(thin.image_height(), 1);
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = Camera::new(&pinhole());
        let mut rng = StdRng::seed_from_u64(1);

        let r = camera.create_ray(0.5, 0.5, &mut rng);

        assert_eq!(r.origin, Vec3::ZERO);
        assert!(r.direction.normalize().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn corners_span_field_of_view() {
        let camera = Camera::new(&CameraConfig { aspect_ratio: 1.0, image_width: 100, ..pinhole() });
        let mut rng = StdRng::seed_from_u64(1);

        let top = camera.create_ray(0.5, 1.0, &mut rng).direction;
        let right = camera.create_ray(1.0, 0.5, &mut rng).direction;

        // 90 degree fov puts the edges at 45 degrees
        assert!((top.y / -top.z - 1.0).abs() < 1e-5);
        assert!((right.x / -right.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn defocus_jitters_origin_within_lens() {
        let config = CameraConfig { defocus_angle: 10.0, focus_distance: 2.0, ..pinhole() };
        let camera = Camera::new(&config);
        let mut rng = StdRng::seed_from_u64(9);
        let lens_radius = 2.0 * (5f32).to_radians().tan();

        for _ in 0..50 {
            let r = camera.create_ray(0.5, 0.5, &mut rng);
            assert!(r.origin.length() <= lens_radius + 1e-6);
            assert!(r.origin.z.abs() < 1e-6);
            // every lens sample still converges on the focus plane
            assert!(r.at(1.0).abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), 1e-5));
        }
    }
}
