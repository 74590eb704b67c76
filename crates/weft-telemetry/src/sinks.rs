//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, SimulationEvent};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the run ends.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// The buffer is shared, so a caller can keep a [`VecSink::events`] handle
/// after boxing the sink into a bus.
#[derive(Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the collected events.
    pub fn events(&self) -> Arc<Mutex<Vec<SimulationEvent>>> {
        Arc::clone(&self.events)
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Logs events through `tracing` at a fixed level.
///
/// `Forces` events with failures are always logged at `WARN`.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(tracing::Level::DEBUG)
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        if let EventKind::Forces {
            external_failures,
            spring_failures,
            ..
        } = event.kind
        {
            if external_failures + spring_failures > 0 {
                tracing::warn!(
                    tick = event.tick,
                    external_failures,
                    spring_failures,
                    "force evaluation had failures"
                );
                return;
            }
        }

        let tick = event.tick;
        let kind = &event.kind;
        match self.level {
            tracing::Level::ERROR => tracing::error!(tick, event = ?kind, "simulation_event"),
            tracing::Level::WARN => tracing::warn!(tick, event = ?kind, "simulation_event"),
            tracing::Level::INFO => tracing::info!(tick, event = ?kind, "simulation_event"),
            tracing::Level::DEBUG => tracing::debug!(tick, event = ?kind, "simulation_event"),
            _ => tracing::trace!(tick, event = ?kind, "simulation_event"),
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
