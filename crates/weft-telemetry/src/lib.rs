//! # weft-telemetry
//!
//! Event bus for per-tick simulation telemetry. The scene runner emits
//! structured events (tick timing, force evaluation counts, energy)
//! that pluggable sinks consume.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
