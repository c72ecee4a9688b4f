//! Explicit simulation state threaded through a per-frame `update`.
//!
//! The frontend owns one `SimulationState`, calls `update(dt)` once per frame
//! and uploads `particles()` as-is. Particle `i` of instance `k` always lands
//! in slot `k * particle_count + i`.

use crate::camera::{aspect_ratio, Camera, CameraRig};
use crate::color::{shade, ColorParams};
use crate::constants::*;
use crate::error::{ensure_positive, Result};
use crate::gpu::ParticleVertex;
use crate::grid::{build_instances, GridLayout, HelixInstance};
use crate::helix::HelixParams;
use std::time::Duration;

/// Everything needed to build a scene.
///
/// - `flow_speed`: progress units per second fed to the mapper as its time offset (any sign)
/// - `particle_size`: billboard size of an unlit particle
/// - `glow_size_multiplier`: extra size at full glow
/// - `seed`: base seed for per-instance variation
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub helix: HelixParams,
    pub color: ColorParams,
    pub grid: GridLayout,
    pub camera: CameraRig,
    pub flow_speed: f64,
    pub particle_size: f32,
    pub glow_size_multiplier: f32,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            helix: HelixParams::default(),
            color: ColorParams::default(),
            grid: GridLayout::default(),
            camera: CameraRig::default(),
            flow_speed: DEFAULT_FLOW_SPEED,
            particle_size: BASE_PARTICLE_SIZE,
            glow_size_multiplier: GLOW_SIZE_MULTIPLIER,
            seed: DEFAULT_GRID_SEED,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<()> {
        self.helix.validate()?;
        self.grid.validate()?;
        ensure_positive("particle_size", self.particle_size as f64)?;
        Ok(())
    }

    pub fn total_particles(&self) -> usize {
        self.helix.particle_count as usize * self.grid.instance_count() as usize
    }

    /// Radius of a sphere around the origin enclosing every instance.
    pub fn scene_radius(&self) -> f32 {
        self.grid.extent() + self.helix.outer_radius() as f32
    }
}

pub struct SimulationState {
    config: SceneConfig,
    instances: Vec<HelixInstance>,
    particles: Vec<ParticleVertex>,
    camera: Camera,
    time: f64,
    time_scale: f32,
    aspect: f32,
    paused: bool,
}

impl SimulationState {
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let instances = build_instances(&config.grid, config.seed);
        let particles = vec![ParticleVertex::default(); config.total_particles()];
        let mut state = Self {
            config,
            instances,
            particles,
            camera: Camera::default(),
            time: 0.0,
            time_scale: 1.0,
            aspect: Camera::default().aspect,
            paused: false,
        };
        state.refresh();
        log::info!(
            "[sim] instances={} particles/instance={} total={}",
            state.instances.len(),
            state.config.helix.particle_count,
            state.particles.len()
        );
        Ok(state)
    }

    /// Advance animation time (unless paused) and recompute every particle.
    pub fn update(&mut self, dt: Duration) {
        if !self.paused {
            self.time += dt.as_secs_f64() * self.time_scale as f64;
        }
        self.refresh();
    }

    /// Recompute the particle buffer and camera for the current time.
    pub fn refresh(&mut self) {
        let time = self.time as f32;
        let per_instance = self.config.helix.particle_count as usize;
        let helix = &self.config.helix;
        let color = &self.config.color;
        for (slots, instance) in self
            .particles
            .chunks_mut(per_instance)
            .zip(self.instances.iter())
        {
            let offset = self.time * self.config.flow_speed + instance.time_shift;
            for (i, slot) in slots.iter_mut().enumerate() {
                let point = helix.map(i as u32, offset);
                let (rgba, glow) = shade(&point, time, color);
                let world = instance.apply(point.position.as_vec3(), time);
                *slot = ParticleVertex {
                    position: world.to_array(),
                    size: self.config.particle_size * (1.0 + glow * self.config.glow_size_multiplier),
                    color: rgba.to_array(),
                    glow,
                    _pad: [0.0; 3],
                };
            }
        }
        self.camera = self
            .config
            .camera
            .camera_at(time, self.aspect, self.config.scene_radius());
    }

    /// Swap in a new configuration, rebuilding instances and buffers.
    pub fn set_config(&mut self, config: SceneConfig) -> Result<()> {
        config.validate()?;
        self.instances = build_instances(&config.grid, config.seed);
        self.particles = vec![ParticleVertex::default(); config.total_particles()];
        self.config = config;
        self.refresh();
        log::debug!("[sim] rebuilt with {} particles", self.particles.len());
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
        self.camera.aspect = self.aspect;
        log::info!("[sim] resize {width}x{height} aspect={:.3}", self.aspect);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.clamp(TIME_SCALE_MIN, TIME_SCALE_MAX);
    }

    pub fn adjust_time_scale(&mut self, delta: f32) {
        self.set_time_scale(self.time_scale + delta);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn instances(&self) -> &[HelixInstance] {
        &self.instances
    }

    pub fn particles(&self) -> &[ParticleVertex] {
        &self.particles
    }

    pub fn total_particles(&self) -> usize {
        self.particles.len()
    }
}
