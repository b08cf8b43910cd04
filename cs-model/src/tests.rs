use std::time::Duration;

use bevy::math::Vec3;

use crate::anim::{Channel, body_scale};
use crate::config::{ConfigError, CreeperConfig};
use crate::creeper::Creeper;
use crate::explosion::{EXPLOSION_LAYOUT, Explosion, ExplosionSpec};
use crate::host::SceneHost;
use crate::model::{
    BODY, CREEPER_MODEL, FOOT_BACK_LEFT, FOOT_BACK_RIGHT, FOOT_FRONT_LEFT, FOOT_FRONT_RIGHT,
    GAIT_PAIR_A, GAIT_PAIR_B, HEAD, Rig, RootPose, creeper_ground_clearance,
};
use crate::sequencer::TriggerOutcome;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, PartialEq)]
enum HostCall {
    Attach(Vec3),
    Detach,
    Spawn(usize, ExplosionSpec),
    Destroy(usize),
}

#[derive(Default)]
struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    fn spawned(&self) -> Vec<ExplosionSpec> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Spawn(_, spec) => Some(*spec),
                _ => None,
            })
            .collect()
    }

    fn count(&self, f: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|c| f(c)).count()
    }
}

impl SceneHost for RecordingHost {
    fn attach_model(&mut self, root: &RootPose) {
        self.calls.push(HostCall::Attach(root.translation));
    }

    fn detach_model(&mut self) {
        self.calls.push(HostCall::Detach);
    }

    fn spawn_explosion(&mut self, slot: usize, explosion: &Explosion) {
        self.calls.push(HostCall::Spawn(slot, *explosion.spec()));
    }

    fn destroy_explosion(&mut self, slot: usize) {
        self.calls.push(HostCall::Destroy(slot));
    }
}

fn spawned() -> (Creeper, RecordingHost) {
    let mut host = RecordingHost::default();
    let creeper = Creeper::spawn(&CreeperConfig::default(), &mut host);
    (creeper, host)
}

fn blow_up(creeper: &mut Creeper, host: &mut RecordingHost) {
    for _ in 0..3 {
        creeper.trigger();
    }
    creeper.tick(Duration::from_millis(150), host);
    assert!(creeper.is_exploded());
}

#[test]
fn built_rig_matches_model_table() {
    let rig = Rig::build(&CREEPER_MODEL);
    assert_eq!(rig.parts.len(), 7);
    assert_eq!(rig.part(HEAD).offset, Vec3::new(0.0, 6.0, 0.0));
    assert_eq!(rig.part(BODY).offset, Vec3::ZERO);
    assert_eq!(rig.part(FOOT_FRONT_LEFT).offset, Vec3::new(-1.0, -5.5, 2.0));
    assert_eq!(rig.part(FOOT_BACK_LEFT).offset, Vec3::new(-1.0, -5.5, -2.0));
    assert_eq!(rig.part(FOOT_FRONT_RIGHT).offset, Vec3::new(1.0, -5.5, 2.0));
    assert_eq!(rig.part(FOOT_BACK_RIGHT).offset, Vec3::new(1.0, -5.5, -2.0));
    for foot in GAIT_PAIR_A.iter().chain(GAIT_PAIR_B.iter()) {
        assert_eq!(CREEPER_MODEL.parts[*foot].cubes[0].size, [2.0, 3.0, 2.0]);
        assert_eq!(rig.part(*foot).parent, Some(CREEPER_MODEL.part_index("feet").unwrap()));
    }
    assert_eq!(CREEPER_MODEL.parts[HEAD].cubes[0].size, [4.0, 4.0, 4.0]);
    assert_eq!(CREEPER_MODEL.parts[BODY].cubes[0].size, [4.0, 8.0, 2.0]);
    assert_eq!(rig.root, RootPose::default());
    assert_eq!(creeper_ground_clearance(), 7.0);
}

#[test]
fn spawn_self_registers_and_new_does_not() {
    let (creeper, host) = spawned();
    assert!(creeper.is_attached());
    assert_eq!(host.calls, vec![HostCall::Attach(Vec3::ZERO)]);

    let detached = Creeper::new(&CreeperConfig::default());
    assert!(!detached.is_attached());
}

#[test]
fn gait_pairs_mirror_every_tick() {
    let (mut creeper, mut host) = spawned();
    creeper.toggle_animate();
    for n in 1..=500 {
        creeper.tick(FRAME, &mut host);
        let rig = creeper.rig();
        let a = rig.part(GAIT_PAIR_A[0]).rotation.x;
        assert_eq!(rig.part(GAIT_PAIR_A[1]).rotation.x, a);
        for idx in GAIT_PAIR_B {
            assert_eq!(rig.part(idx).rotation.x, -a);
        }
        let expected = (0.04 * n as f32).sin() / 4.0;
        assert!((a - expected).abs() < 1e-3, "tick {n}: {a} vs {expected}");
    }
}

#[test]
fn head_swings_about_vertical_axis() {
    let (mut creeper, mut host) = spawned();
    creeper.toggle_animate();
    for _ in 0..10 {
        creeper.tick(FRAME, &mut host);
    }
    let head = creeper.rig().part(HEAD);
    let phase = creeper.animation().phase(Channel::HeadSwing);
    assert!((head.rotation.y - phase.sin()).abs() < 1e-6);
    assert_eq!(head.rotation.x, 0.0);
}

#[test]
fn toggle_twice_restores_channels() {
    let (mut creeper, _host) = spawned();
    let before: Vec<bool> = Channel::ALL
        .iter()
        .map(|c| creeper.animation().is_active(*c))
        .collect();
    creeper.toggle_animate();
    assert!(Channel::ALL.iter().all(|c| creeper.animation().is_active(*c)));
    creeper.toggle_animate();
    let after: Vec<bool> = Channel::ALL
        .iter()
        .map(|c| creeper.animation().is_active(*c))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn idle_channels_hold_pose_and_phase() {
    let (mut creeper, mut host) = spawned();
    creeper.toggle_animate();
    for _ in 0..25 {
        creeper.tick(FRAME, &mut host);
    }
    creeper.toggle_animate();
    let rig = creeper.rig().clone();
    let walk_phase = creeper.animation().phase(Channel::Walk);
    for _ in 0..25 {
        creeper.tick(FRAME, &mut host);
    }
    assert_eq!(creeper.rig(), &rig);
    assert_eq!(creeper.animation().phase(Channel::Walk), walk_phase);

    creeper.toggle_animate();
    creeper.tick(FRAME, &mut host);
    assert!((creeper.animation().phase(Channel::Walk) - (walk_phase + 0.04)).abs() < 1e-6);
}

#[test]
fn body_scale_stays_in_bounds() {
    let mut phase = -50.0_f32;
    while phase < 50.0 {
        let s = body_scale(phase);
        assert!((1.0..=1.0625).contains(&s), "phase {phase}: {s}");
        phase += 0.013;
    }

    let (mut creeper, mut host) = spawned();
    creeper.toggle_animate();
    for _ in 0..1000 {
        creeper.tick(FRAME, &mut host);
        let s = creeper.rig().root.scale;
        assert!((1.0..=1.0625).contains(&s));
    }
}

#[test]
fn one_or_two_triggers_change_nothing() {
    let (mut creeper, mut host) = spawned();
    let calls = host.calls.clone();

    assert_eq!(creeper.trigger(), TriggerOutcome::Counted(1));
    creeper.tick(Duration::from_secs(1), &mut host);
    assert_eq!(creeper.trigger(), TriggerOutcome::Counted(2));
    creeper.tick(Duration::from_secs(1), &mut host);

    assert_eq!(creeper.trigger_count(), 2);
    assert!(!creeper.is_exploded());
    assert!(creeper.is_attached());
    assert_eq!(host.calls, calls);
}

#[test]
fn third_trigger_explodes_once_after_delay() {
    let (mut creeper, mut host) = spawned();
    creeper.toggle_animate();
    creeper.trigger();
    creeper.trigger();
    assert_eq!(creeper.trigger(), TriggerOutcome::Armed);

    creeper.tick(Duration::from_millis(50), &mut host);
    assert!(!creeper.is_exploded());
    assert!(host.spawned().is_empty());

    creeper.tick(Duration::from_millis(60), &mut host);
    assert!(creeper.is_exploded());
    assert!(!creeper.is_attached());
    assert_eq!(creeper.trigger_count(), 0);
    assert!(!creeper.animation().any_active());
    for channel in Channel::ALL {
        assert_eq!(creeper.animation().phase(channel), 0.0);
    }

    for _ in 0..60 {
        creeper.tick(FRAME, &mut host);
    }
    assert_eq!(host.count(|c| *c == HostCall::Detach), 1);
    assert_eq!(host.spawned(), EXPLOSION_LAYOUT.to_vec());
    assert_eq!(creeper.explosions().len(), 5);
    assert!(creeper.explosions().iter().all(|e| e.age() == 60));
}

#[test]
fn explosion_layout_positions_and_colors() {
    let expected = [
        (Vec3::new(0.0, 0.0, 0.0), 0x000000, [0, 0, 0]),
        (Vec3::new(5.0, 5.0, 5.0), 0x333333, [0x33, 0x33, 0x33]),
        (Vec3::new(-5.0, 5.0, 10.0), 0x666666, [0x66, 0x66, 0x66]),
        (Vec3::new(-5.0, 5.0, 5.0), 0x999999, [0x99, 0x99, 0x99]),
        (Vec3::new(5.0, 5.0, -5.0), 0xcccccc, [0xcc, 0xcc, 0xcc]),
    ];
    for (spec, (origin, color, rgb)) in EXPLOSION_LAYOUT.iter().zip(expected) {
        assert_eq!(spec.origin, origin);
        assert_eq!(spec.color, color);
        assert_eq!(spec.rgb(), rgb);
    }
}

#[test]
fn triggers_while_pending_or_exploded_do_not_rearm() {
    let (mut creeper, mut host) = spawned();
    for _ in 0..3 {
        creeper.trigger();
    }
    assert_eq!(creeper.trigger(), TriggerOutcome::AlreadyArmed(4));
    assert_eq!(creeper.trigger(), TriggerOutcome::AlreadyArmed(5));
    creeper.tick(Duration::from_millis(200), &mut host);
    assert!(creeper.is_exploded());
    assert_eq!(creeper.trigger_count(), 0);

    for _ in 0..6 {
        assert_eq!(creeper.trigger(), TriggerOutcome::Ignored);
    }
    creeper.tick(Duration::from_secs(1), &mut host);
    assert_eq!(host.spawned().len(), 5);
}

#[test]
fn reset_when_idle_is_a_no_op() {
    let (mut creeper, mut host) = spawned();
    creeper.trigger();
    let rig = creeper.rig().clone();
    let calls = host.calls.clone();

    assert!(!creeper.reset(&mut host));
    assert_eq!(host.calls, calls);
    assert_eq!(creeper.rig(), &rig);
    assert_eq!(creeper.trigger_count(), 1);
}

#[test]
fn reset_puts_out_a_burning_fuse() {
    let (mut creeper, mut host) = spawned();
    for _ in 0..3 {
        creeper.trigger();
    }
    creeper.tick(Duration::from_millis(40), &mut host);
    assert!(creeper.reset(&mut host));
    assert_eq!(creeper.trigger_count(), 0);

    creeper.tick(Duration::from_secs(2), &mut host);
    assert!(!creeper.is_exploded());
    assert!(creeper.is_attached());
    assert!(host.spawned().is_empty());
}

#[test]
fn reset_after_explosion_restores_rest_state() {
    let (mut creeper, mut host) = spawned();
    creeper.toggle_animate();
    for _ in 0..40 {
        creeper.tick(FRAME, &mut host);
    }
    blow_up(&mut creeper, &mut host);
    host.calls.clear();

    assert!(creeper.reset(&mut host));
    assert_eq!(
        host.calls,
        vec![
            HostCall::Destroy(0),
            HostCall::Destroy(1),
            HostCall::Destroy(2),
            HostCall::Destroy(3),
            HostCall::Destroy(4),
            HostCall::Attach(Vec3::ZERO),
        ]
    );
    assert!(!creeper.is_exploded());
    assert!(creeper.is_attached());
    assert!(creeper.explosions().is_empty());
    assert_eq!(creeper.rig(), &Rig::build(&CREEPER_MODEL));
    for channel in Channel::ALL {
        assert!(!creeper.animation().is_active(channel));
        assert_eq!(creeper.animation().phase(channel), 0.0);
    }

    assert!(!creeper.reset(&mut host));
}

#[test]
fn explode_reset_explode_repeats_layout() {
    let (mut creeper, mut host) = spawned();
    blow_up(&mut creeper, &mut host);
    let first: Vec<ExplosionSpec> = creeper.explosions().iter().map(|e| *e.spec()).collect();

    creeper.reset(&mut host);
    assert_eq!(creeper.trigger(), TriggerOutcome::Counted(1));
    blow_up(&mut creeper, &mut host);
    let second: Vec<ExplosionSpec> = creeper.explosions().iter().map(|e| *e.spec()).collect();

    assert_eq!(first, second);
    assert_eq!(first, EXPLOSION_LAYOUT.to_vec());
    assert_eq!(host.count(|c| *c == HostCall::Detach), 2);
}

#[test]
fn direct_explosion_is_guarded() {
    let (mut creeper, mut host) = spawned();
    assert!(creeper.explosion(&mut host));
    assert!(!creeper.explosion(&mut host));
    assert_eq!(host.spawned().len(), 5);
}

#[test]
fn particles_fly_out_from_origin() {
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut burst = Explosion::new(EXPLOSION_LAYOUT[1], 32, 2.0, &mut rng);
    assert_eq!(burst.particles().len(), 32);
    assert!(burst.particles().iter().all(|p| p.position == EXPLOSION_LAYOUT[1].origin));
    assert!(
        burst
            .particles()
            .iter()
            .all(|p| p.velocity.abs().max_element() <= 1.0)
    );

    burst.update();
    burst.update();
    for p in burst.particles() {
        let expected = EXPLOSION_LAYOUT[1].origin + p.velocity * 2.0;
        assert!((p.position - expected).length() < 1e-5);
    }
}

#[test]
fn config_defaults_and_partial_toml() {
    let config = CreeperConfig::default();
    assert_eq!(config.trigger_threshold, 3);
    assert_eq!(config.explosion_delay(), Duration::from_millis(100));
    assert_eq!(config.phase_step, 0.04);

    let parsed = CreeperConfig::from_toml_str(
        r#"
        trigger_threshold = 5
        explosion_delay_ms = 250
        self_register = false
        "#,
    )
    .unwrap();
    assert_eq!(parsed.trigger_threshold, 5);
    assert_eq!(parsed.explosion_delay(), Duration::from_millis(250));
    assert!(!parsed.self_register);
    assert_eq!(parsed.skin_texture, config.skin_texture);

    assert!(matches!(
        CreeperConfig::from_toml_str("trigger_threshold = \"three\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        CreeperConfig::load(std::path::Path::new("/nonexistent/creeper.toml")),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn custom_threshold_is_honoured() {
    let config = CreeperConfig {
        trigger_threshold: 1,
        explosion_delay_ms: 0,
        ..Default::default()
    };
    let mut host = RecordingHost::default();
    let mut creeper = Creeper::spawn(&config, &mut host);
    assert_eq!(creeper.trigger(), TriggerOutcome::Armed);
    creeper.tick(Duration::ZERO, &mut host);
    assert!(creeper.is_exploded());
}

#[test]
fn config_rejects_non_finite_or_negative_floats() {
    for raw in [
        "particle_speed = inf",
        "phase_step = nan",
        "particle_size = -0.5",
        "particle_speed = -inf\nphase_step = 0.1",
    ] {
        assert!(
            matches!(
                CreeperConfig::from_toml_str(raw),
                Err(ConfigError::Invalid { .. })
            ),
            "accepted {raw:?}"
        );
    }

    let err = CreeperConfig::from_toml_str("phase_step = nan").unwrap_err();
    assert!(err.to_string().contains("phase_step"));
    assert!(CreeperConfig::from_toml_str("particle_speed = 0.0").is_ok());
}

#[test]
fn infinite_particle_speed_still_explodes() {
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let burst = Explosion::new(EXPLOSION_LAYOUT[0], 4, f32::INFINITY, &mut rng);
    assert!(burst.particles().iter().all(|p| p.velocity == Vec3::ZERO));

    let config = CreeperConfig {
        particle_speed: f32::INFINITY,
        trigger_threshold: 1,
        explosion_delay_ms: 0,
        ..Default::default()
    };
    let mut host = RecordingHost::default();
    let mut creeper = Creeper::spawn(&config, &mut host);
    creeper.toggle_animate();
    creeper.trigger();
    creeper.tick(Duration::ZERO, &mut host);
    assert!(creeper.is_exploded());
    assert_eq!(host.spawned().len(), EXPLOSION_LAYOUT.len());
}
