use glam::*;
use rand::Rng;
use rand_distr::*;

pub fn is_near_zero(v: Vec3) -> bool {
    return v.abs_diff_eq(Vec3::ZERO, f32::EPSILON);
}

pub fn rand_in_unit_disc<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    return Vec2::from(UnitDisc.sample(rng));
}

pub fn rand_on_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    return Vec3::from(UnitSphere.sample(rng));
}

pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    return v - (2.0 * v.dot(normal) * normal);
}

pub fn refract(v: Vec3, normal: Vec3, ratio: f32) -> Vec3 {
    let cos_theta = (-v).dot(normal).min(1.0);
    let r_perp = (v + cos_theta * normal) * ratio;
    let r_para = -(1.0 - r_perp.length_squared()).abs().sqrt() * normal;
    return r_perp + r_para;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn reflect_mirrors_about_normal() {
        let v = Vec3::new(1.0, -1.0, 0.0);

        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn refract_with_unit_ratio_passes_straight_through() {
        let v = Vec3::new(1.0, -1.0, 0.0).normalize();
        let out = refract(v, Vec3::Y, 1.0);

        assert!(out.abs_diff_eq(v, 1e-6));
    }

    #[test]
    fn refract_bends_towards_normal_entering_denser_medium() {
        let v = Vec3::new(1.0, -1.0, 0.0).normalize();
        let out = refract(v, Vec3::Y, 1.0 / 1.5);

        // Snell: sin_out = sin_in / 1.5
        let sin_in = v.x;
        assert!((out.x - sin_in / 1.5).abs() < 1e-6);
        assert!((out.length() - 1.0).abs() < 1e-5);
        assert!(out.y < 0.0);
    }

    #[test]
    fn unit_sphere_samples_are_unit_length() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            assert!((rand_on_unit_sphere(&mut rng).length() - 1.0).abs() < 1e-5);
            assert!(rand_in_unit_disc(&mut rng).length_squared() <= 1.0);
        }
    }

    #[test]
    fn near_zero_only_for_tiny_vectors() {
        assert!(is_near_zero(Vec3::splat(1e-9)));
        assert!(!is_near_zero(Vec3::new(0.0, 1e-3, 0.0)));
    }
}
