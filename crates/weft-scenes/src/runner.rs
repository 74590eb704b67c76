//! Scene runner: drives the clock, collects metrics, feeds telemetry and renderers.

use std::time::Instant;

use weft_math::Point;
use weft_render::{HeadlessRenderer, RenderFrame, Renderer};
use weft_telemetry::{EventBus, EventKind};
use weft_types::{WeftError, WeftResult};

use crate::metrics::RunMetrics;
use crate::presets::ScenePreset;
use crate::scene::Scene;

/// Upper bound on per-tick timing slots reserved up front.
const MAX_PREALLOCATED_TICKS: u64 = 1 << 16;

/// Runs scenes tick by tick.
///
/// ```text
/// for tick in start .. start + n:
///     scene.step(tick)            // wind phase = tick
///     bus   <- TickBegin, Forces, Energy, TickEnd
///     renderer <- exported mesh
/// ```
#[derive(Default)]
pub struct SceneRunner<'a> {
    start_tick: u64,
    renderer: Option<&'a mut dyn Renderer>,
    bus: Option<&'a mut EventBus>,
}

impl<'a> SceneRunner<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// First clock tick fed to the scene (default 0).
    pub fn starting_at(mut self, tick: u64) -> Self {
        self.start_tick = tick;
        self
    }

    /// Submits the exported mesh to `renderer` after every tick.
    pub fn with_renderer(mut self, renderer: &'a mut dyn Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Emits per-tick events on `bus`.
    pub fn with_bus(mut self, bus: &'a mut EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Runs `ticks` ticks of `scene` and returns metrics for the run.
    ///
    /// Fails before the first tick if `start + ticks` does not fit the clock.
    pub fn run(&mut self, scene: &mut Scene, ticks: u64) -> WeftResult<RunMetrics> {
        if self.start_tick.checked_add(ticks).is_none() {
            return Err(WeftError::InvalidConfig(format!(
                "{ticks} ticks starting at {} overflow the scene clock",
                self.start_tick
            )));
        }
        let initial: Vec<Point> = scene.network().positions();
        let dt = f64::from(scene.network().time_quantum());

        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.init(&scene.mesh()?)?;
        }

        let mut tick_times: Vec<f64> =
            Vec::with_capacity(ticks.min(MAX_PREALLOCATED_TICKS) as usize);
        let mut force_failures = 0usize;
        let total_start = Instant::now();

        for offset in 0..ticks {
            let tick = self.start_tick + offset;
            self.emit(tick, EventKind::TickBegin { sim_time: offset as f64 * dt });

            let tick_start = Instant::now();
            let report = scene.step(tick)?;
            let wall_time = tick_start.elapsed().as_secs_f64();
            tick_times.push(wall_time);
            force_failures += report.external_failures + report.spring_failures;

            self.emit(
                tick,
                EventKind::Forces {
                    evaluated: report.nodes_evaluated,
                    moved: report.nodes_moved,
                    external_failures: report.external_failures,
                    spring_failures: report.spring_failures,
                },
            );
            self.emit(
                tick,
                EventKind::Energy { kinetic: f64::from(scene.network().kinetic_energy()) },
            );
            self.emit(tick, EventKind::TickEnd { wall_time });

            if let Some(renderer) = self.renderer.as_deref_mut() {
                renderer.submit_frame(&RenderFrame::from_mesh(tick, &scene.mesh()?))?;
            }
            if let Some(bus) = self.bus.as_deref_mut() {
                bus.flush();
            }
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();

        if let Some(renderer) = self.renderer.as_deref_mut() {
            renderer.finalize()?;
        }
        if let Some(bus) = self.bus.as_deref_mut() {
            bus.finalize();
        }

        let max_displacement = scene
            .network()
            .positions()
            .iter()
            .zip(&initial)
            .map(|(now, start)| now.distance(*start))
            .fold(0.0f32, f32::max);

        let avg_tick_time = if tick_times.is_empty() {
            0.0
        } else {
            tick_times.iter().sum::<f64>() / tick_times.len() as f64
        };
        let min_tick_time = tick_times.iter().copied().fold(f64::INFINITY, f64::min);
        let max_tick_time = tick_times.iter().copied().fold(0.0, f64::max);

        let metrics = RunMetrics {
            scene: scene.name().to_string(),
            ticks,
            total_wall_time,
            avg_tick_time,
            min_tick_time: if min_tick_time.is_finite() { min_tick_time } else { 0.0 },
            max_tick_time,
            final_kinetic_energy: f64::from(scene.network().kinetic_energy()),
            max_displacement,
            force_failures,
            node_count: scene.network().node_count(),
            spring_count: scene.network().spring_count(),
        };
        tracing::debug!(?metrics, "scene run finished");
        Ok(metrics)
    }

    fn emit(&self, tick: u64, kind: EventKind) {
        if let Some(bus) = self.bus.as_deref() {
            bus.emit_at(tick, kind);
        }
    }

    /// Runs every preset for `ticks` ticks with a headless renderer.
    pub fn run_presets(ticks: u64) -> WeftResult<Vec<RunMetrics>> {
        let mut results = Vec::new();
        for &preset in ScenePreset::all() {
            let mut scene = Scene::from_preset(preset)?;
            let mut renderer = HeadlessRenderer::new();
            let metrics = SceneRunner::new()
                .with_renderer(&mut renderer)
                .run(&mut scene, ticks)?;
            results.push(metrics);
        }
        Ok(results)
    }
}
