//! Grid replication of the helix.
//!
//! Each instance evaluates the same stateless mapper; the per-instance spin,
//! tilt and offsets are layered on top of its output and never feed back
//! into it.

use crate::constants::*;
use crate::error::{ensure_positive, HelixError, Result};
use glam::{Mat4, Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

/// Rectangular layout of helix instances on the XZ plane, centered on the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub spacing: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_COLUMNS,
            rows: DEFAULT_GRID_ROWS,
            spacing: DEFAULT_GRID_SPACING,
        }
    }
}

impl GridLayout {
    /// A single helix at the origin.
    pub fn single() -> Self {
        Self {
            columns: 1,
            rows: 1,
            spacing: DEFAULT_GRID_SPACING,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.instance_count() == 0 {
            return Err(HelixError::EmptyGrid);
        }
        if self.instance_count() > 1 {
            ensure_positive("spacing", self.spacing as f64)?;
        }
        Ok(())
    }

    #[inline]
    pub fn instance_count(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }

    /// Cell centers, row-major.
    pub fn offsets(&self) -> Vec<Vec3> {
        let half_cols = (self.columns.max(1) - 1) as f32 * 0.5;
        let half_rows = (self.rows.max(1) - 1) as f32 * 0.5;
        let mut out = Vec::with_capacity(self.instance_count() as usize);
        for row in 0..self.rows {
            for col in 0..self.columns {
                out.push(Vec3::new(
                    (col as f32 - half_cols) * self.spacing,
                    0.0,
                    (row as f32 - half_rows) * self.spacing,
                ));
            }
        }
        out
    }

    /// Distance from the origin to the farthest cell center.
    pub fn extent(&self) -> f32 {
        let half_w = (self.columns.max(1) - 1) as f32 * 0.5 * self.spacing;
        let half_d = (self.rows.max(1) - 1) as f32 * 0.5 * self.spacing;
        (half_w * half_w + half_d * half_d).sqrt()
    }
}

/// Placement and slight variation of one replicated helix.
///
/// - `offset`: world-space cell center
/// - `spin_speed`: rotation about the local Y axis (radians per second)
/// - `tilt`: fixed lean about the X axis (radians)
/// - `phase`: initial spin angle (radians)
/// - `time_shift`: progress added to the animation time so instances don't march in lockstep
#[derive(Clone, Debug, PartialEq)]
pub struct HelixInstance {
    pub offset: Vec3,
    pub spin_speed: f32,
    pub tilt: f32,
    pub phase: f32,
    pub time_shift: f64,
}

impl HelixInstance {
    /// Untransformed instance at the origin.
    pub fn identity() -> Self {
        Self {
            offset: Vec3::ZERO,
            spin_speed: 0.0,
            tilt: 0.0,
            phase: 0.0,
            time_shift: 0.0,
        }
    }

    #[inline]
    pub fn rotation(&self, time: f32) -> Quat {
        Quat::from_rotation_x(self.tilt) * Quat::from_rotation_y(self.phase + self.spin_speed * time)
    }

    pub fn transform(&self, time: f32) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(time), self.offset)
    }

    /// Move a helix-local position into world space.
    #[inline]
    pub fn apply(&self, local: Vec3, time: f32) -> Vec3 {
        self.offset + self.rotation(time) * local
    }
}

/// Build one instance per grid cell with deterministic variation.
///
/// Each cell's RNG is seeded from its `(row, col)` coordinates, so adding rows
/// or columns never reshuffles the variation of cells that already existed.
pub fn build_instances(layout: &GridLayout, seed: u64) -> Vec<HelixInstance> {
    let columns = layout.columns.max(1) as usize;
    layout
        .offsets()
        .into_iter()
        .enumerate()
        .map(|(i, offset)| {
            let mut rng = StdRng::seed_from_u64(cell_seed(seed, i / columns, i % columns));
            HelixInstance {
                offset,
                spin_speed: SPIN_SPEED_BASE + rng.gen_range(-SPIN_SPEED_JITTER..=SPIN_SPEED_JITTER),
                tilt: rng.gen_range(-TILT_MAX_RADIANS..=TILT_MAX_RADIANS),
                phase: rng.gen_range(0.0..TAU),
                time_shift: rng.gen::<f64>(),
            }
        })
        .collect()
}

#[inline]
fn cell_seed(seed: u64, row: usize, col: usize) -> u64 {
    seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (col as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
}
