//! Per-particle color and the travelling glow highlight.

use crate::constants::*;
use crate::helix::{wrap_unit, HelixPoint, Strand};
use glam::{Vec3, Vec4};

/// Tuning for hue cycling and glow.
///
/// - `saturation`, `value`: base HSV color of an unlit particle
/// - `hue_speed`: hue wheel turns per second
/// - `glow_speed`: how fast the highlight travels along a strand (progress/s)
/// - `glow_width`: gaussian width of the highlight in progress units
/// - `glow_brighten`: value added at full glow
#[derive(Clone, Debug, PartialEq)]
pub struct ColorParams {
    pub saturation: f32,
    pub value: f32,
    pub hue_speed: f32,
    pub glow_speed: f32,
    pub glow_width: f32,
    pub glow_brighten: f32,
}

impl Default for ColorParams {
    fn default() -> Self {
        Self {
            saturation: DEFAULT_SATURATION,
            value: DEFAULT_VALUE,
            hue_speed: HUE_SPEED,
            glow_speed: GLOW_SPEED,
            glow_width: GLOW_WIDTH,
            glow_brighten: GLOW_BRIGHTEN,
        }
    }
}

/// HSV to linear RGB. Hue wraps, so any real value is accepted.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let h6 = h.rem_euclid(1.0) * 6.0;
    let c = v * s;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match h6 as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Vec3::new(r + m, g + m, b + m)
}

/// Shortest distance between two progress values on the unit circle.
#[inline]
pub fn wrapped_distance(a: f64, b: f64) -> f64 {
    let d = wrap_unit(a - b);
    d.min(1.0 - d)
}

/// Hue in `[0, 1)`: cycles once along each strand, drifts over time, and
/// puts strand B on the opposite side of the wheel.
pub fn particle_hue(progress: f64, strand: Strand, time: f32, hue_speed: f32) -> f32 {
    let strand_shift = strand.id() as f64 * STRAND_HUE_OFFSET as f64;
    wrap_unit(progress + strand_shift + time as f64 * hue_speed as f64) as f32
}

/// Progress currently highlighted on a strand. Strand B's highlight trails by
/// half a loop so the two never overlap.
#[inline]
pub fn glow_head(strand: Strand, time: f32, glow_speed: f32) -> f64 {
    wrap_unit(time as f64 * glow_speed as f64 + strand.id() as f64 * 0.5)
}

/// Glow in `[0, 1]`, peaking at the highlight head.
pub fn glow_intensity(progress: f64, strand: Strand, time: f32, params: &ColorParams) -> f32 {
    if params.glow_width <= 0.0 {
        return 0.0;
    }
    let head = glow_head(strand, time, params.glow_speed);
    let d = wrapped_distance(progress, head) / params.glow_width as f64;
    (-d * d).exp() as f32
}

/// Final color and glow for one mapped particle.
pub fn shade(point: &HelixPoint, time: f32, params: &ColorParams) -> (Vec4, f32) {
    let glow = glow_intensity(point.progress, point.strand, time, params);
    let hue = particle_hue(point.progress, point.strand, time, params.hue_speed);
    // Highlighted particles wash out toward white.
    let saturation = params.saturation * (1.0 - 0.5 * glow);
    let value = params.value + params.glow_brighten * glow;
    let rgb = hsv_to_rgb(hue, saturation, value);
    (rgb.extend(1.0), glow)
}
