// Host-side tests for the simulation state and its per-frame update.

use helix_core::*;
use std::time::Duration;

fn small_config() -> SceneConfig {
    SceneConfig {
        helix: HelixParams::new(100, 0.8, 6.0, 4.0),
        grid: GridLayout {
            columns: 2,
            rows: 2,
            spacing: 5.0,
        },
        ..SceneConfig::default()
    }
}

#[test]
fn default_scene_builds_full_buffer() {
    let sim = SimulationState::new(SceneConfig::default()).expect("default config is valid");
    let cfg = sim.config();
    assert_eq!(
        sim.total_particles(),
        cfg.helix.particle_count as usize * cfg.grid.instance_count() as usize
    );
    assert_eq!(sim.particles().len(), sim.total_particles());
    assert_eq!(sim.instances().len(), 9);
    assert_eq!(sim.time(), 0.0);
    assert!(!sim.is_paused());
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = small_config();
    cfg.helix.particle_count = 101;
    assert_eq!(
        SimulationState::new(cfg).err(),
        Some(HelixError::OddParticleCount(101))
    );

    let mut cfg = small_config();
    cfg.particle_size = 0.0;
    assert!(SimulationState::new(cfg).is_err());

    let mut sim = SimulationState::new(small_config()).expect("valid");
    let mut bad = small_config();
    bad.grid.rows = 0;
    assert_eq!(sim.set_config(bad), Err(HelixError::EmptyGrid));
    // A rejected config leaves the running scene alone.
    assert_eq!(sim.total_particles(), 400);
}

#[test]
fn every_particle_lands_in_its_own_slot() {
    let mut sim = SimulationState::new(small_config()).expect("valid");
    sim.update(Duration::from_millis(1250));
    let cfg = sim.config();
    let pc = cfg.helix.particle_count as usize;
    let time = sim.time() as f32;
    for (k, inst) in sim.instances().iter().enumerate() {
        let offset = sim.time() * cfg.flow_speed + inst.time_shift;
        for i in (0..pc).step_by(7) {
            let local = cfg.helix.map(i as u32, offset).position.as_vec3();
            let expected = inst.apply(local, time);
            let got = glam::Vec3::from(sim.particles()[k * pc + i].position);
            assert!(
                (got - expected).length() < 1e-4,
                "instance {k} particle {i}: {got:?} vs {expected:?}"
            );
        }
    }
}

#[test]
fn particles_stay_on_their_instance_torus() {
    let sim = SimulationState::new(small_config()).expect("valid");
    let cfg = sim.config();
    let pc = cfg.helix.particle_count as usize;
    let reach = cfg.helix.outer_radius() as f32 + 1e-3;
    for (k, inst) in sim.instances().iter().enumerate() {
        for p in &sim.particles()[k * pc..(k + 1) * pc] {
            let d = (glam::Vec3::from(p.position) - inst.offset).length();
            assert!(d <= reach, "instance {k}: particle {d} from center");
        }
    }
}

#[test]
fn update_advances_time_and_moves_particles() {
    let mut sim = SimulationState::new(small_config()).expect("valid");
    let before = sim.particles().to_vec();
    sim.update(Duration::from_millis(500));
    assert!((sim.time() - 0.5).abs() < 1e-9);
    assert_ne!(before, sim.particles());
}

#[test]
fn paused_state_holds_time() {
    let mut sim = SimulationState::new(small_config()).expect("valid");
    sim.update(Duration::from_millis(200));
    sim.toggle_pause();
    assert!(sim.is_paused());
    let frozen = sim.particles().to_vec();
    let t = sim.time();
    sim.update(Duration::from_secs(3));
    assert_eq!(sim.time(), t);
    assert_eq!(frozen, sim.particles());
    sim.set_paused(false);
    sim.update(Duration::from_millis(100));
    assert!(sim.time() > t);
}

#[test]
fn time_scale_is_clamped_and_applied() {
    let mut sim = SimulationState::new(small_config()).expect("valid");
    sim.set_time_scale(2.0);
    sim.update(Duration::from_secs(1));
    assert!((sim.time() - 2.0).abs() < 1e-9);

    sim.set_time_scale(100.0);
    assert_eq!(sim.time_scale(), TIME_SCALE_MAX);
    sim.adjust_time_scale(-1000.0);
    assert_eq!(sim.time_scale(), TIME_SCALE_MIN);
}

#[test]
fn identical_inputs_give_identical_frames() {
    let mut a = SimulationState::new(small_config()).expect("valid");
    let mut b = SimulationState::new(small_config()).expect("valid");
    for _ in 0..5 {
        a.update(Duration::from_millis(16));
        b.update(Duration::from_millis(16));
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn glow_enlarges_highlighted_particles() {
    let sim = SimulationState::new(small_config()).expect("valid");
    let cfg = sim.config();
    let mut max_glow = 0.0f32;
    for p in sim.particles() {
        assert!(p.size >= cfg.particle_size - 1e-6);
        let expected = cfg.particle_size * (1.0 + p.glow * cfg.glow_size_multiplier);
        assert!((p.size - expected).abs() < 1e-5);
        assert_eq!(p.color[3], 1.0);
        max_glow = max_glow.max(p.glow);
    }
    assert!(max_glow > 0.9, "no particle near the glow head: {max_glow}");
}

#[test]
fn resize_updates_camera_aspect() {
    let mut sim = SimulationState::new(small_config()).expect("valid");
    sim.resize(800, 400);
    assert!((sim.camera().aspect - 2.0).abs() < 1e-6);
    sim.update(Duration::from_millis(16));
    assert!((sim.camera().aspect - 2.0).abs() < 1e-6);
}

#[test]
fn set_config_resizes_buffers() {
    let mut sim = SimulationState::new(small_config()).expect("valid");
    let mut bigger = small_config();
    bigger.grid = GridLayout::default();
    bigger.helix.particle_count = 60;
    sim.set_config(bigger).expect("valid");
    assert_eq!(sim.total_particles(), 60 * 9);
    assert_eq!(sim.instances().len(), 9);
}

#[test]
fn frame_clock_clamps_long_frames() {
    let max = Duration::from_millis(100);
    assert_eq!(clamp_frame_dt(Duration::from_secs(5), max), max);
    assert_eq!(
        clamp_frame_dt(Duration::from_millis(16), max),
        Duration::from_millis(16)
    );
    let mut clock = FrameClock::new();
    assert!(clock.tick() <= Duration::from_secs_f32(MAX_FRAME_DT_SEC));
}
