//! Integration tests for weft-scenes.

use weft_cloth::IntegrationScheme;
use weft_render::{HeadlessRenderer, Renderer};
use weft_scenes::metrics::RunMetrics;
use weft_scenes::presets::{AnchorLayout, SceneConfig, ScenePreset};
use weft_scenes::runner::SceneRunner;
use weft_scenes::scene::Scene;
use weft_telemetry::{EventBus, EventKind, VecSink};
use weft_types::WeftError;

fn anchored_count(scene: &Scene) -> usize {
    scene
        .network()
        .nodes()
        .iter()
        .filter(|n| n.physical().is_anchor())
        .count()
}

// ─── Preset Tests ─────────────────────────────────────────────

#[test]
fn all_presets() {
    assert_eq!(ScenePreset::all().len(), 5);
    for &preset in ScenePreset::all() {
        let config = preset.config();
        config.validate().unwrap();
        assert_eq!(config.name, preset.name());
        assert_eq!(config.network.integration, IntegrationScheme::Legacy);
        assert_eq!(config.network.time_quantum, 0.01);
        assert_eq!(config.network.specularity, 0.99);
    }
}

#[test]
fn flag_setup() {
    let scene = Scene::from_preset(ScenePreset::Flag).unwrap();
    let net = scene.network();
    assert_eq!((net.columns(), net.rows()), (10, 10));
    assert_eq!(anchored_count(&scene), 10);
    assert!((0..10).all(|y| net.node_at(0, y).unwrap().physical().is_anchor()));
    assert!(!net.node_at(1, 0).unwrap().physical().is_anchor());
    assert_eq!(scene.forces().names(), vec!["gravity", "wind", "viscous"]);

    let origin = net.node_at(0, 0).unwrap().physical().position();
    assert_eq!(origin.to_array(), [-4.5, -1.0, 0.0]);
    assert_eq!(net.node_at(0, 0).unwrap().physical().mass(), 0.02);
}

#[test]
fn anchor_layouts_per_preset() {
    let expected = [
        (ScenePreset::Flag, 10),
        (ScenePreset::RisingCloth, 10),
        (ScenePreset::Tapestry, 10),
        (ScenePreset::TetheredCloth, 4),
        (ScenePreset::Trampoline, 36),
    ];
    for (preset, count) in expected {
        let scene = Scene::from_preset(preset).unwrap();
        assert_eq!(anchored_count(&scene), count, "{preset}");
    }

    let tapestry = Scene::from_preset(ScenePreset::Tapestry).unwrap();
    assert!(tapestry.network().node_at(3, 9).unwrap().physical().is_anchor());
    let rising = Scene::from_preset(ScenePreset::RisingCloth).unwrap();
    assert!(rising.network().node_at(3, 0).unwrap().physical().is_anchor());
    let tethered = Scene::from_preset(ScenePreset::TetheredCloth).unwrap();
    assert!(tethered.network().node_at(4, 9).unwrap().physical().is_anchor());
}

// ─── Scene Tests ──────────────────────────────────────────────

#[test]
fn stepping_keeps_anchors_fixed() {
    for &preset in ScenePreset::all() {
        let mut scene = Scene::from_preset(preset).unwrap();
        let before = scene.network().positions();
        for tick in 0..40 {
            let report = scene.step(tick).unwrap();
            assert_eq!(report.external_failures, 0);
            assert_eq!(report.spring_failures, 0);
        }
        let after = scene.network().positions();
        for (i, node) in scene.network().nodes().iter().enumerate() {
            if node.physical().is_anchor() {
                assert_eq!(after[i], before[i], "{preset} node {i}");
            }
        }
        assert!(after.iter().all(|p| p.to_array().iter().all(|c| c.is_finite())));
        assert_ne!(after, before, "{preset} did not move");
    }
}

#[test]
fn scene_steps_are_deterministic() {
    let run = || {
        let mut scene = Scene::from_preset(ScenePreset::Flag).unwrap();
        for tick in 100..160 {
            scene.step(tick).unwrap();
        }
        scene.network().positions()
    };
    assert_eq!(run(), run());
}

#[test]
fn clock_tick_reaches_the_wind() {
    let mut early = Scene::from_preset(ScenePreset::Tapestry).unwrap();
    let mut late = Scene::from_preset(ScenePreset::Tapestry).unwrap();
    early.step(0).unwrap();
    late.step(5_000).unwrap();
    assert_ne!(early.network().positions(), late.network().positions());
}

#[test]
fn scene_mesh_carries_preset_shading() {
    let scene = Scene::from_preset(ScenePreset::RisingCloth).unwrap();
    let mesh = scene.mesh().unwrap();
    assert_eq!(mesh.triangle_count(), 2 * 9 * 9);
    assert_eq!(mesh.shading.base_color.to_array(), [0.7, 0.7, 0.3]);
    assert_eq!(mesh.shading.specularity, 0.99);
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn scene_config_toml_roundtrip() {
    let config = ScenePreset::Trampoline.config();
    let text = config.to_toml_string().unwrap();
    let back = SceneConfig::from_toml_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn scene_config_from_minimal_toml() {
    let text = r#"
name = "pinned_corner"
anchors = { cells = [[0, 0], [3, 0]] }

[network]
columns = 4
rows = 3
width = 4.0
height = 3.0

[forces]
wind_magnitude = 0.5
wind_direction = [0.0, 0.0, 1.0]
"#;
    let config = SceneConfig::from_toml_str(text).unwrap();
    assert_eq!(config.anchors, AnchorLayout::Cells(vec![[0, 0], [3, 0]]));
    assert_eq!(config.forces.gravity, 9.8);

    let scene = Scene::build(&config).unwrap();
    assert_eq!(anchored_count(&scene), 2);
}

#[test]
fn scene_config_rejects_bad_values() {
    let mut config = ScenePreset::Flag.config();
    config.anchors = AnchorLayout::Cells(vec![[10, 0]]);
    assert!(matches!(
        config.validate(),
        Err(WeftError::NodeOutOfBounds { column: 10, row: 0, .. })
    ));

    let mut config = ScenePreset::Flag.config();
    config.forces.wind_magnitude = -1.0;
    assert!(Scene::build(&config).is_err());

    let mut config = ScenePreset::Flag.config();
    config.forces.viscous_coefficient = -0.5;
    assert!(config.validate().is_err());

    assert!(SceneConfig::from_toml_str("name = 3").is_err());
}

#[test]
fn strip_config_is_rejected_before_running() {
    let mut config = ScenePreset::Tapestry.config();
    config.network.columns = 1;
    config.network.rows = 5;
    assert!(matches!(config.validate(), Err(WeftError::InvalidConfig(_))));
    assert!(Scene::build(&config).is_err());

    config.network.columns = 5;
    config.network.rows = 1;
    assert!(config.validate().is_err());
}

#[test]
fn smallest_scene_runs_with_renderer() {
    let mut config = ScenePreset::Tapestry.config();
    config.network.columns = 2;
    config.network.rows = 2;
    let mut scene = Scene::build(&config).unwrap();
    let mut renderer = HeadlessRenderer::new();
    let metrics = SceneRunner::new()
        .with_renderer(&mut renderer)
        .run(&mut scene, 4)
        .unwrap();
    assert_eq!(metrics.node_count, 4);
    assert_eq!(renderer.frame_count(), 4);
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_flag() {
    let mut scene = Scene::from_preset(ScenePreset::Flag).unwrap();
    let metrics = SceneRunner::new().run(&mut scene, 25).unwrap();

    assert_eq!(metrics.scene, "flag");
    assert_eq!(metrics.ticks, 25);
    assert_eq!(metrics.node_count, 100);
    assert_eq!(metrics.spring_count, 180 + 162 + 160);
    assert_eq!(metrics.force_failures, 0);
    assert!(metrics.max_displacement > 0.0);
    assert!(metrics.final_kinetic_energy > 0.0);
    assert!(metrics.min_tick_time <= metrics.max_tick_time);
}

#[test]
fn runner_feeds_renderer() {
    let mut scene = Scene::from_preset(ScenePreset::TetheredCloth).unwrap();
    let mut renderer = HeadlessRenderer::new();
    SceneRunner::new()
        .with_renderer(&mut renderer)
        .run(&mut scene, 12)
        .unwrap();
    assert_eq!(renderer.frame_count(), 12);
}

#[test]
fn runner_emits_telemetry() {
    let mut scene = Scene::from_preset(ScenePreset::Trampoline).unwrap();
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.events();
    bus.add_sink(Box::new(sink));

    SceneRunner::new()
        .starting_at(500)
        .with_bus(&mut bus)
        .run(&mut scene, 3)
        .unwrap();

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 12);
    assert_eq!(events[0].tick, 500);
    assert_eq!(events[0].kind, EventKind::TickBegin { sim_time: 0.0 });
    assert!(matches!(events[1].kind, EventKind::Forces { evaluated: 100, .. }));
    assert_eq!(events[11].tick, 502);
    assert_eq!(events[11].label(), "tick_end");
}

#[test]
fn zero_tick_run() {
    let mut scene = Scene::from_preset(ScenePreset::Flag).unwrap();
    let metrics = SceneRunner::new().run(&mut scene, 0).unwrap();
    assert_eq!(metrics.ticks, 0);
    assert_eq!(metrics.avg_tick_time, 0.0);
    assert_eq!(metrics.min_tick_time, 0.0);
    assert_eq!(metrics.max_displacement, 0.0);
}

#[test]
fn run_all_presets_to_csv() {
    let results = SceneRunner::run_presets(3).unwrap();
    assert_eq!(results.len(), 5);

    let csv = RunMetrics::to_csv(&results);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("scene,node_count"));
    assert!(lines[4].starts_with("tethered_cloth,50,"));
}

#[test]
fn clock_overflow_is_an_error() {
    let mut scene = Scene::from_preset(ScenePreset::Flag).unwrap();
    let before = scene.network().positions();

    let err = SceneRunner::new()
        .starting_at(u64::MAX)
        .run(&mut scene, 2)
        .unwrap_err();
    assert!(matches!(err, WeftError::InvalidConfig(_)));
    assert!(SceneRunner::new()
        .starting_at(1)
        .run(&mut scene, u64::MAX)
        .is_err());
    // rejected runs never touch the scene
    assert_eq!(scene.network().positions(), before);
}

#[test]
fn clock_may_end_at_its_maximum() {
    let mut scene = Scene::from_preset(ScenePreset::Flag).unwrap();
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let events = sink.events();
    bus.add_sink(Box::new(sink));

    let metrics = SceneRunner::new()
        .starting_at(u64::MAX - 2)
        .with_bus(&mut bus)
        .run(&mut scene, 2)
        .unwrap();
    assert_eq!(metrics.ticks, 2);
    let events = events.lock().unwrap();
    assert_eq!(events.last().unwrap().tick, u64::MAX - 1);
}

#[test]
fn metrics_json_roundtrip() {
    let mut scene = Scene::from_preset(ScenePreset::RisingCloth).unwrap();
    let metrics = SceneRunner::new().run(&mut scene, 5).unwrap();
    let json = serde_json::to_string(&metrics).unwrap();
    let back: RunMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back.scene, metrics.scene);
    assert_eq!(back.ticks, 5);
    assert_eq!(back.node_count, metrics.node_count);
    assert_eq!(back.spring_count, metrics.spring_count);
    assert_eq!(back.force_failures, metrics.force_failures);
    let close = |a: f64, b: f64| (a - b).abs() <= 1e-12 * b.abs().max(1.0);
    assert!(close(back.total_wall_time, metrics.total_wall_time));
    assert!(close(back.final_kinetic_energy, metrics.final_kinetic_energy));
    assert!((back.max_displacement - metrics.max_displacement).abs() < 1e-6);
}
