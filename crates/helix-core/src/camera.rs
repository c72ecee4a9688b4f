//! Camera description and the slow orbit/zoom rig that frames the scene.
//!
//! These types avoid any windowing or GPU API; the frontend only reads the
//! matrices and the billboard basis vectors.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_BASE_DISTANCE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
    /// World-space right and up vectors of the view plane, for billboards.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }
}

/// Width over height, guarding minimized windows.
#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Orbiting camera with a slow breathing zoom.
///
/// - `base_distance`: minimum eye distance from the target before zoom
/// - `height_ratio`: eye height as a fraction of the current distance
/// - `orbit_speed`: radians per second around the Y axis
/// - `zoom_amplitude`: relative distance swing (0.2 = ±20%)
/// - `zoom_speed`: radians per second of the zoom oscillation
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub base_distance: f32,
    pub height_ratio: f32,
    pub orbit_speed: f32,
    pub zoom_amplitude: f32,
    pub zoom_speed: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            base_distance: CAMERA_BASE_DISTANCE,
            height_ratio: CAMERA_HEIGHT_RATIO,
            orbit_speed: CAMERA_ORBIT_SPEED,
            zoom_amplitude: CAMERA_ZOOM_AMPLITUDE,
            zoom_speed: CAMERA_ZOOM_SPEED,
        }
    }
}

impl CameraRig {
    /// Zoom factor at `time`, in `[1 - amplitude, 1 + amplitude]`.
    #[inline]
    pub fn zoom(&self, time: f32) -> f32 {
        1.0 + self.zoom_amplitude * (time * self.zoom_speed).sin()
    }

    /// Eye distance that keeps a scene of `scene_radius` in view at `time`.
    pub fn distance(&self, time: f32, scene_radius: f32) -> f32 {
        let half_fov_tan = (CAMERA_FOVY_RADIANS * 0.5).tan();
        // distance at which the radius fills the vertical half-fov
        let framing = scene_radius.max(1.0) / half_fov_tan;
        self.base_distance.max(framing) * self.zoom(time)
    }

    pub fn camera_at(&self, time: f32, aspect: f32, scene_radius: f32) -> Camera {
        let distance = self.distance(time, scene_radius);
        let angle = time * self.orbit_speed;
        let eye = Vec3::new(
            distance * angle.sin(),
            distance * self.height_ratio,
            distance * angle.cos(),
        );
        Camera {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR.max(distance * 4.0),
        }
    }
}
