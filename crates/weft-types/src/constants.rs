//! Physical constants and simulation defaults.

/// Gravitational acceleration used by the scene presets (m/s²).
pub const GRAVITY: f32 = 9.8;

/// Default force time quantum (seconds).
pub const DEFAULT_TIME_QUANTUM: f32 = 0.01;

/// Lower bound of the cloth specularity range.
pub const MIN_SPECULARITY: f32 = 0.0;

/// Upper bound of the cloth specularity range.
pub const MAX_SPECULARITY: f32 = 1.0;

/// Upper bound of a color channel.
pub const MAX_COLOR_COMPONENT: f32 = 1.0;
