use crate::constants::MAX_FRAME_DT_SEC;
use instant::Instant;
use std::time::Duration;

/// Measures the time between frames.
///
/// Long gaps (window drags, suspended laptops) are clamped so the animation
/// resumes smoothly instead of jumping.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    max_dt: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            max_dt: Duration::from_secs_f32(MAX_FRAME_DT_SEC),
        }
    }

    /// Time since the previous call (or construction), clamped.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        clamp_frame_dt(dt, self.max_dt)
    }
}

#[inline]
pub fn clamp_frame_dt(dt: Duration, max_dt: Duration) -> Duration {
    dt.min(max_dt)
}
