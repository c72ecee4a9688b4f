// Shared visual tuning constants used by the core and the native frontend.

// Helix geometry
pub const DEFAULT_PARTICLE_COUNT: u32 = 2000;
pub const DEFAULT_MINOR_RADIUS: f64 = 0.8; // spiral radius around the moving axis
pub const DEFAULT_HEIGHT: f64 = 6.0; // span mapped onto one loop; major radius = height / 2π
pub const DEFAULT_TURNS: f64 = 4.0; // spiral revolutions per loop

// Animation
pub const DEFAULT_FLOW_SPEED: f64 = 0.05; // progress units per second
pub const TIME_SCALE_MIN: f32 = 0.0;
pub const TIME_SCALE_MAX: f32 = 4.0;
pub const TIME_SCALE_STEP: f32 = 0.25;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp for stalls (window drag, suspend)

// Particle sizing
pub const BASE_PARTICLE_SIZE: f32 = 0.06;
pub const GLOW_SIZE_MULTIPLIER: f32 = 1.5; // how much a full glow enlarges the solid core (CPU side)
// Extra quad room the shader adds around a glowing core for its halo. The core
// keeps the CPU-computed size; only the billboard grows, by `1 + extent * glow`.
pub const GLOW_HALO_EXTENT: f32 = 2.0;

// Color
pub const DEFAULT_SATURATION: f32 = 0.75;
pub const DEFAULT_VALUE: f32 = 0.85;
pub const HUE_SPEED: f32 = 0.03; // hue wheel turns per second
pub const STRAND_HUE_OFFSET: f32 = 0.5; // strand B sits opposite on the wheel
pub const GLOW_BRIGHTEN: f32 = 0.8; // extra brightness at full glow

// Glow highlight travelling along each strand
pub const GLOW_SPEED: f32 = 0.12; // progress units per second
pub const GLOW_WIDTH: f32 = 0.04; // gaussian width in progress units

// Grid replication
pub const DEFAULT_GRID_COLUMNS: u32 = 3;
pub const DEFAULT_GRID_ROWS: u32 = 3;
pub const DEFAULT_GRID_SPACING: f32 = 4.5;
pub const DEFAULT_GRID_SEED: u64 = 42;
pub const SPIN_SPEED_BASE: f32 = 0.15; // radians per second
pub const SPIN_SPEED_JITTER: f32 = 0.1;
pub const TILT_MAX_RADIANS: f32 = 0.35;

// Camera
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const CAMERA_BASE_DISTANCE: f32 = 7.0;
pub const CAMERA_HEIGHT_RATIO: f32 = 0.45; // eye height relative to distance
pub const CAMERA_ORBIT_SPEED: f32 = 0.08; // radians per second
pub const CAMERA_ZOOM_AMPLITUDE: f32 = 0.2; // fraction of distance
pub const CAMERA_ZOOM_SPEED: f32 = 0.25; // radians per second

// Clear color
pub const BACKGROUND_RGB: [f64; 3] = [0.01, 0.01, 0.03];
