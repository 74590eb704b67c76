//! Simulation event types.
//!
//! Events are small value types tagged with the clock tick that produced
//! them.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the scene runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Clock tick the event belongs to.
    pub tick: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Tick started.
    TickBegin {
        /// Simulated time at the start of the tick (seconds).
        sim_time: f64,
    },

    /// Tick completed.
    TickEnd {
        /// Wall-clock time spent in the tick (seconds).
        wall_time: f64,
    },

    /// Force accumulation and integration summary.
    Forces {
        evaluated: usize,
        moved: usize,
        external_failures: usize,
        spring_failures: usize,
    },

    /// Energy snapshot after integration.
    Energy {
        /// Kinetic energy `Σ ½·m·|v|²`.
        kinetic: f64,
    },

    /// Custom event for extensibility.
    Custom {
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }

    /// Short name of the event kind.
    pub fn label(&self) -> &str {
        match &self.kind {
            EventKind::TickBegin { .. } => "tick_begin",
            EventKind::TickEnd { .. } => "tick_end",
            EventKind::Forces { .. } => "forces",
            EventKind::Energy { .. } => "energy",
            EventKind::Custom { label, .. } => label,
        }
    }
}
