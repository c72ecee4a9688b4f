//! GPU-facing data layouts shared with the frontend.
//!
//! Only `bytemuck` layouts live here; creating buffers and pipelines is the
//! frontend's job.

use crate::camera::Camera;
use crate::constants::GLOW_HALO_EXTENT;

/// Per-instance data for one particle billboard.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
    pub glow: f32,
    pub _pad: [f32; 3],
}

impl ParticleVertex {
    // Byte offsets of each attribute, matching the WGSL vertex inputs.
    pub const OFFSET_POSITION: u64 = 0;
    pub const OFFSET_SIZE: u64 = 12;
    pub const OFFSET_COLOR: u64 = 16;
    pub const OFFSET_GLOW: u64 = 32;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_right: [f32; 4],
    pub camera_up: [f32; 4],
    pub time: f32,
    pub halo_extent: f32,
    pub _pad: [f32; 2],
}

impl Uniforms {
    pub fn from_camera(camera: &Camera, time: f32) -> Self {
        let (right, up) = camera.billboard_axes();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_right: right.extend(0.0).to_array(),
            camera_up: up.extend(0.0).to_array(),
            time,
            halo_extent: GLOW_HALO_EXTENT,
            _pad: [0.0; 2],
        }
    }
}

/// Two triangles covering a unit quad centered on the origin.
pub const QUAD_CORNERS: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];
