//! Tick-scoped event queue.
//!
//! `emit` only enqueues, so it is safe to call from inside a tick; sinks
//! run when the owner calls [`EventBus::flush`], which the scene runner
//! does once after every tick.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::events::{EventKind, SimulationEvent};
use crate::sinks::EventSink;

/// Queue of simulation events plus the sinks that consume them.
pub struct EventBus {
    queue: Sender<SimulationEvent>,
    pending: Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    muted: bool,
    delivered: u64,
}

impl EventBus {
    pub fn new() -> Self {
        let (queue, pending) = channel();
        Self {
            queue,
            pending,
            sinks: Vec::new(),
            muted: false,
            delivered: 0,
        }
    }

    /// Builder form of [`add_sink`](Self::add_sink).
    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.add_sink(sink);
        self
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// A disabled bus discards events at `emit`.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.muted = !enabled;
    }

    pub fn is_enabled(&self) -> bool {
        !self.muted
    }

    pub fn emit(&self, event: SimulationEvent) {
        if self.muted {
            return;
        }
        // `pending` is owned by `self`, so the channel is never closed here.
        self.queue.send(event).ok();
    }

    /// Stamps `kind` with `tick` and queues it.
    pub fn emit_at(&self, tick: u64, kind: EventKind) {
        self.emit(SimulationEvent::new(tick, kind));
    }

    /// Hands every queued event to every sink, oldest first.
    ///
    /// Returns the number of events delivered by this call.
    pub fn flush(&mut self) -> usize {
        let mut count = 0;
        for event in self.pending.try_iter() {
            for sink in self.sinks.iter_mut() {
                sink.handle(&event);
            }
            count += 1;
        }
        self.delivered += count as u64;
        count
    }

    /// Final flush, then `finalize` on every sink.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in self.sinks.iter_mut() {
            sink.finalize();
        }
        tracing::debug!(delivered = self.delivered, sinks = self.sinks.len(), "telemetry finalized");
    }

    /// Events delivered since the bus was created.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
