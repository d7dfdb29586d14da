use crate::{Mat4, Vec3, vec3};

/// Simple perspective camera (right-handed).
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_rad: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub aspect: f32,
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new_perspective(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y_rad: f32,
        z_near: f32,
        z_far: f32,
        aspect: f32,
    ) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y_rad,
            z_near,
            z_far,
            aspect,
        }
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection with the 0..1 depth range wgpu expects.
    #[inline]
    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_rad,
            self.aspect.max(1e-6),
            self.z_near,
            self.z_far,
        )
    }

    #[inline]
    pub fn proj_view(&self) -> Mat4 {
        self.proj() * self.view()
    }

    #[inline]
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }
}

/// Camera rig circling the origin at a fixed height and radius, looking at
/// the origin with +Y up.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub radius: f32,
    pub height: f32,
    /// Radians per second.
    pub angular_speed: f32,
    pub fov_y_rad: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl OrbitCamera {
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            radius,
            height,
            angular_speed: 1.0,
            fov_y_rad: 45f32.to_radians(),
            z_near: 0.1,
            z_far: 100.0,
        }
    }

    /// Camera for the given elapsed time. Angle zero sits on +Z looking
    /// down the -Z axis.
    pub fn camera_at(&self, seconds: f32, aspect: f32) -> Camera {
        let angle = seconds * self.angular_speed;
        let eye = vec3(
            self.radius * angle.sin(),
            self.height,
            self.radius * angle.cos(),
        );
        Camera::new_perspective(
            eye,
            Vec3::ZERO,
            Vec3::Y,
            self.fov_y_rad,
            self.z_near,
            self.z_far,
            aspect,
        )
    }
}
