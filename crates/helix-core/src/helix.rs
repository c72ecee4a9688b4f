//! Double-helix position mapping.
//!
//! A particle is nothing more than an index. Even indices ride strand A, odd
//! indices ride strand B, and `i / 2` is the particle's rank along its strand.
//! The rank is turned into a normalized progress `t` in `[0, 1)`, which then
//! places the particle on a spiral of radius `minor_radius` whose axis is a
//! circle of radius `height / 2π` in the XZ plane.
//!
//! Everything here is stateless and evaluated in `f64`; callers narrow to
//! `f32` when filling GPU buffers.

use crate::error::{ensure_positive, HelixError, Result};
use glam::{DVec3, Vec3};
use std::f64::consts::{PI, TAU};

/// One of the two interleaved helical paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    A,
    B,
}

impl Strand {
    #[inline]
    pub fn from_index(index: u32) -> Self {
        if index % 2 == 0 {
            Strand::A
        } else {
            Strand::B
        }
    }

    /// Numeric strand id (0 or 1).
    #[inline]
    pub fn id(self) -> u32 {
        match self {
            Strand::A => 0,
            Strand::B => 1,
        }
    }

    /// Spiral phase offset: strand B runs half a turn behind strand A.
    #[inline]
    pub fn phase_offset(self) -> f64 {
        self.id() as f64 * PI
    }
}

/// How a strand's final particle relates to its first one.
///
/// `Wraparound` spaces ranks evenly over `[0, 1)` so the last particle sits
/// one step short of the first. `Exact` stretches ranks over `[0, 1]` so the
/// last particle lands on `t = 1 ≡ 0` and coincides with the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClosureMode {
    #[default]
    Wraparound,
    Exact,
}

/// Result of mapping one particle index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelixPoint {
    pub position: DVec3,
    pub strand: Strand,
    /// Normalized progress along the strand after the time offset, in `[0, 1)`.
    pub progress: f64,
}

impl HelixPoint {
    /// Offset from the local spiral axis. Its length is always the minor radius.
    pub fn axis_offset(&self, major_radius: f64) -> DVec3 {
        self.position - axis_point(self.progress, major_radius)
    }
}

/// Wrap any real value into `[0, 1)` using a true modulo.
///
/// `rem_euclid` can round tiny negative inputs up to exactly `1.0`; that case
/// folds back to `0.0`.
#[inline]
pub fn wrap_unit(value: f64) -> f64 {
    let w = value.rem_euclid(1.0);
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

/// Radius of the circle the whole double helix is wrapped around.
#[inline]
pub fn major_radius(height: f64) -> f64 {
    height / TAU
}

/// Point on the local spiral axis at the given progress.
#[inline]
pub fn axis_point(progress: f64, major_radius: f64) -> DVec3 {
    let angle = progress * TAU;
    DVec3::new(major_radius * angle.cos(), 0.0, major_radius * angle.sin())
}

/// Rank-based progress before the time offset is applied.
#[inline]
fn base_progress(rank: u32, per_strand: f64, closure: ClosureMode) -> f64 {
    match closure {
        ClosureMode::Wraparound => rank as f64 / per_strand,
        ClosureMode::Exact if per_strand > 1.0 => rank as f64 / (per_strand - 1.0),
        ClosureMode::Exact => 0.0,
    }
}

/// Place a strand at the given progress.
#[inline]
fn position_at(progress: f64, strand: Strand, minor_radius: f64, major: f64, turns: f64) -> DVec3 {
    let major_angle = progress * TAU;
    let helix_angle = progress * turns * TAU + strand.phase_offset();
    let local_radial = helix_angle.cos() * minor_radius;
    let y = helix_angle.sin() * minor_radius;
    let effective = major + local_radial;
    DVec3::new(effective * major_angle.cos(), y, effective * major_angle.sin())
}

fn map_with_closure(
    index: u32,
    particle_count: u32,
    minor_radius: f64,
    height: f64,
    turns: f64,
    time_offset: f64,
    closure: ClosureMode,
) -> HelixPoint {
    let strand = Strand::from_index(index);
    let rank = index / 2;
    // Float division keeps a zero count a NaN instead of a panic.
    let per_strand = particle_count as f64 / 2.0;
    let progress = wrap_unit(base_progress(rank, per_strand, closure) + time_offset);
    HelixPoint {
        position: position_at(progress, strand, minor_radius, major_radius(height), turns),
        strand,
        progress,
    }
}

/// Map a particle index to its position on the double helix.
///
/// Preconditions (checked by [`HelixParams::validate`], not here):
/// `particle_count` positive and even, `index < particle_count`, and
/// `minor_radius`, `height`, `turns` positive. Violations produce
/// meaningless but finite-or-NaN output, never a panic.
pub fn map_particle(
    index: u32,
    particle_count: u32,
    minor_radius: f64,
    height: f64,
    turns: f64,
    time_offset: f64,
) -> HelixPoint {
    map_with_closure(
        index,
        particle_count,
        minor_radius,
        height,
        turns,
        time_offset,
        ClosureMode::Wraparound,
    )
}

/// Geometric parameters for one double helix.
#[derive(Clone, Debug, PartialEq)]
pub struct HelixParams {
    pub particle_count: u32,
    pub minor_radius: f64,
    pub height: f64,
    pub turns: f64,
    pub closure: ClosureMode,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            particle_count: crate::constants::DEFAULT_PARTICLE_COUNT,
            minor_radius: crate::constants::DEFAULT_MINOR_RADIUS,
            height: crate::constants::DEFAULT_HEIGHT,
            turns: crate::constants::DEFAULT_TURNS,
            closure: ClosureMode::Wraparound,
        }
    }
}

impl HelixParams {
    pub fn new(particle_count: u32, minor_radius: f64, height: f64, turns: f64) -> Self {
        Self {
            particle_count,
            minor_radius,
            height,
            turns,
            closure: ClosureMode::Wraparound,
        }
    }

    pub fn with_closure(mut self, closure: ClosureMode) -> Self {
        self.closure = closure;
        self
    }

    /// Check the mapper's preconditions.
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(HelixError::ZeroParticleCount);
        }
        if self.particle_count % 2 != 0 {
            return Err(HelixError::OddParticleCount(self.particle_count));
        }
        ensure_positive("minor_radius", self.minor_radius)?;
        ensure_positive("height", self.height)?;
        ensure_positive("turns", self.turns)?;
        Ok(())
    }

    #[inline]
    pub fn major_radius(&self) -> f64 {
        major_radius(self.height)
    }

    #[inline]
    pub fn particles_per_strand(&self) -> u32 {
        self.particle_count / 2
    }

    /// Outer extent of the torus in the XZ plane.
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.major_radius() + self.minor_radius
    }

    #[inline]
    pub fn map(&self, index: u32, time_offset: f64) -> HelixPoint {
        map_with_closure(
            index,
            self.particle_count,
            self.minor_radius,
            self.height,
            self.turns,
            time_offset,
            self.closure,
        )
    }

    /// Every particle in index order.
    pub fn points(&self, time_offset: f64) -> impl Iterator<Item = HelixPoint> + '_ {
        (0..self.particle_count).map(move |i| self.map(i, time_offset))
    }

    /// Write each particle's position into its own slot of `out`.
    ///
    /// Slots past `particle_count` are left untouched, as are particles past
    /// the end of `out`.
    pub fn fill_positions(&self, out: &mut [Vec3], time_offset: f64) {
        for (i, slot) in out
            .iter_mut()
            .enumerate()
            .take(self.particle_count as usize)
        {
            *slot = self.map(i as u32, time_offset).position.as_vec3();
        }
    }
}
