use helix_core::{FrameClock, SceneConfig, SimulationState, TIME_SCALE_STEP};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

mod render;

use render::GpuState;

fn handle_key(key: &Key, sim: &mut SimulationState) -> bool {
    match key {
        Key::Named(NamedKey::Escape) => return false,
        Key::Named(NamedKey::Space) => {
            sim.toggle_pause();
            log::info!("[input] paused={}", sim.is_paused());
        }
        Key::Character(c) if c.as_str() == "+" || c.as_str() == "=" => {
            sim.adjust_time_scale(TIME_SCALE_STEP);
            log::info!("[input] time scale {:.2}", sim.time_scale());
        }
        Key::Character(c) if c.as_str() == "-" => {
            sim.adjust_time_scale(-TIME_SCALE_STEP);
            log::info!("[input] time scale {:.2}", sim.time_scale());
        }
        _ => {}
    }
    true
}

/// What the event loop does after a failed frame acquire.
#[derive(Debug, PartialEq, Eq)]
enum SurfaceAction {
    Reconfigure,
    Exit,
    Skip,
}

fn surface_action(err: &wgpu::SurfaceError) -> SurfaceAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceAction::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => SurfaceAction::Exit,
        _ => SurfaceAction::Skip,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut sim = SimulationState::new(SceneConfig::default())?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Helix Torus (native)")
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window, sim.total_particles()))?;
    let (width, height) = gpu.size();
    sim.resize(width, height);
    let mut clock = FrameClock::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            gpu.resize(size);
            sim.resize(size.width, size.height);
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                },
            ..
        } => {
            if !handle_key(&logical_key, &mut sim) {
                elwt.exit();
            }
        }
        Event::AboutToWait => {
            sim.update(clock.tick());
            match gpu.render(&sim) {
                Ok(_) => gpu.window.request_redraw(),
                Err(e) => match surface_action(&e) {
                    // Zero-sized (minimized) windows are skipped inside `resize`.
                    SurfaceAction::Reconfigure => gpu.resize(gpu.window.inner_size()),
                    SurfaceAction::Exit => {
                        log::error!("[gpu] {e:?}");
                        elwt.exit();
                    }
                    SurfaceAction::Skip => log::debug!("[gpu] skipped frame: {e:?}"),
                },
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_surfaces_are_reconfigured() {
        assert_eq!(surface_action(&wgpu::SurfaceError::Lost), SurfaceAction::Reconfigure);
        assert_eq!(surface_action(&wgpu::SurfaceError::Outdated), SurfaceAction::Reconfigure);
    }

    #[test]
    fn out_of_memory_exits() {
        assert_eq!(surface_action(&wgpu::SurfaceError::OutOfMemory), SurfaceAction::Exit);
    }

    #[test]
    fn timeouts_skip_the_frame() {
        assert_eq!(surface_action(&wgpu::SurfaceError::Timeout), SurfaceAction::Skip);
    }
}
