//! # weft-scenes
//!
//! The five preset cloth scenes, the scene loop that feeds a clock into
//! the force generators, and metric collection with CSV export.

pub mod metrics;
pub mod presets;
pub mod runner;
pub mod scene;

pub use metrics::RunMetrics;
pub use presets::{AnchorLayout, ForceConfig, SceneConfig, ScenePreset};
pub use runner::SceneRunner;
pub use scene::Scene;
