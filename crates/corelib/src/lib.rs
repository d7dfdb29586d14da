//! Core types: math re-exports and cameras.

pub use glam::{Mat4, Vec3, vec3};

pub mod camera;

pub use camera::{Camera, OrbitCamera};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_pv_is_finite() {
        let cam = Camera::new_perspective(
            vec3(0.0, 0.0, 4.0),
            vec3(0.0, 0.0, 0.0),
            Vec3::Y,
            60f32.to_radians(),
            0.1,
            100.0,
            16.0 / 9.0,
        );
        let pv = cam.proj_view();
        let a = pv.to_cols_array();
        assert!(a.iter().all(|f| f.is_finite()));
    }

    #[test]
    fn orbit_starts_on_positive_z() {
        let rig = OrbitCamera::new(5.0, 1.5);
        let cam = rig.camera_at(0.0, 1.0);
        // Без поворота камера стоит на +Z.
        assert!((cam.eye.x - 0.0).abs() < 1e-6);
        assert!((cam.eye.y - 1.5).abs() < 1e-6);
        assert!((cam.eye.z - 5.0).abs() < 1e-6);
    }

    #[test]
    fn orbit_keeps_its_radius() {
        let rig = OrbitCamera::new(5.0, 1.5);
        for step in 0..8 {
            let cam = rig.camera_at(step as f32 * 0.7, 1.0);
            let flat = (cam.eye.x * cam.eye.x + cam.eye.z * cam.eye.z).sqrt();
            assert!((flat - 5.0).abs() < 1e-4);
            assert!((cam.eye.y - 1.5).abs() < 1e-6);
        }
    }

    #[test]
    fn quarter_turn_lands_on_positive_x() {
        let rig = OrbitCamera::new(2.0, 0.0);
        let cam = rig.camera_at(std::f32::consts::FRAC_PI_2, 1.0);
        assert!((cam.eye.x - 2.0).abs() < 1e-4);
        assert!(cam.eye.z.abs() < 1e-4);
    }
}
