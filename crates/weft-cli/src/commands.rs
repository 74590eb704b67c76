//! CLI command implementations.

use weft_cloth::{ClothNodeNetwork, SpringKind};
use weft_render::{HeadlessRenderer, JsonFrameExporter, Renderer};
use weft_scenes::{RunMetrics, Scene, SceneConfig, ScenePreset, SceneRunner};
use weft_telemetry::{EventBus, TracingSink};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Options of `weft run`.
pub struct RunOptions<'a> {
    pub scene: Option<&'a str>,
    pub config: Option<&'a str>,
    pub ticks: u64,
    pub start_tick: u64,
    pub csv: Option<&'a str>,
    pub frames: Option<&'a str>,
    pub telemetry: bool,
}

/// Print the preset scenes.
pub fn list() -> CmdResult {
    println!("weft Scene Presets");
    println!("──────────────────");
    println!();
    for &preset in ScenePreset::all() {
        let config = preset.config();
        let net = &config.network;
        println!("{:<16} {}", preset.name(), preset.description());
        println!(
            "{:<16} {}x{} nodes, {} x {} m, mass {} kg, anchors: {:?}",
            "", net.columns, net.rows, net.width, net.height, net.node_mass, config.anchors
        );
    }
    Ok(())
}

/// Run one scene (or every preset) and print metrics.
pub fn run(options: RunOptions<'_>) -> CmdResult {
    println!("weft Scene Runner");
    println!("═════════════════");
    println!();

    let configs: Vec<SceneConfig> = match (options.config, options.scene) {
        (Some(path), _) => vec![SceneConfig::load(path)?],
        (None, Some("all")) => ScenePreset::all().iter().map(|p| p.config()).collect(),
        (None, Some(name)) => vec![name.parse::<ScenePreset>()?.config()],
        (None, None) => vec![ScenePreset::Flag.config()],
    };

    if options.frames.is_some() && configs.len() > 1 {
        return Err("--frames needs a single scene".into());
    }

    let mut all_metrics = Vec::with_capacity(configs.len());
    for config in &configs {
        let mut scene = Scene::build(config)?;
        println!(
            "Running: {} ({} nodes, {} springs, {} ticks)",
            scene.name(),
            scene.network().node_count(),
            scene.network().spring_count(),
            options.ticks,
        );

        let mut renderer: Box<dyn Renderer> = match options.frames {
            Some(path) => Box::new(JsonFrameExporter::new(path)),
            None => Box::new(HeadlessRenderer::new()),
        };
        let mut bus = EventBus::new();
        bus.set_enabled(options.telemetry);
        bus.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));

        let metrics = SceneRunner::new()
            .starting_at(options.start_tick)
            .with_renderer(renderer.as_mut())
            .with_bus(&mut bus)
            .run(&mut scene, options.ticks)
            .map_err(|e| format!("Scene '{}' failed: {e}", scene.name()))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg tick:      {:.3}ms", metrics.avg_tick_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}m", metrics.max_displacement);
        if metrics.force_failures > 0 {
            println!("  Failures:      {}", metrics.force_failures);
        }
        if let Some(path) = options.frames {
            println!("  Frames:        {} → {path}", renderer.frame_count());
        }
        println!();

        all_metrics.push(metrics);
    }

    let csv = RunMetrics::to_csv(&all_metrics);
    match options.csv {
        Some(path) => {
            std::fs::write(path, &csv)?;
            println!("Results written to: {path}");
        }
        None => {
            println!("CSV Output:");
            println!("{csv}");
        }
    }
    Ok(())
}

/// Validate a scene config and report the network it would build.
pub fn validate(path: &str) -> CmdResult {
    println!("weft Validator");
    println!("──────────────");
    println!();

    if !path.ends_with(".toml") {
        println!("Unsupported file format. Use .toml (scene config).");
        return Ok(());
    }

    println!("Validating scene config: {path}");
    let config = SceneConfig::load(path)?;
    if let Err(e) = config.validate() {
        println!("❌ Config is invalid: {e}");
        return Err(e.into());
    }

    let network = ClothNodeNetwork::build(&config.network)?;
    let anchors = config.anchors.cells(network.columns(), network.rows()).len();
    println!("✅ Config is valid.");
    println!("  Scene:       {}", config.name);
    println!("  Nodes:       {} ({}x{})", network.node_count(), network.columns(), network.rows());
    println!(
        "  Springs:     {} structural, {} shear, {} flexion",
        network.spring_count_of(SpringKind::Structural),
        network.spring_count_of(SpringKind::Shear),
        network.spring_count_of(SpringKind::Flexion),
    );
    println!("  Anchors:     {anchors}");
    println!("  Integration: {:?}", config.network.integration);
    Ok(())
}
