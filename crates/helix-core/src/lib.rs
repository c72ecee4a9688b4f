pub mod camera;
pub mod clock;
pub mod color;
pub mod constants;
pub mod error;
pub mod gpu;
pub mod grid;
pub mod helix;
pub mod simulation;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use camera::*;
pub use clock::*;
pub use color::*;
pub use constants::*;
pub use error::HelixError;
pub use gpu::*;
pub use grid::*;
pub use helix::*;
pub use simulation::*;
