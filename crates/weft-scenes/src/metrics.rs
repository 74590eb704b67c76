//! Run metrics: data collected while a scene runs.

use serde::{Deserialize, Serialize};

/// Metrics collected from one scene run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Scene name.
    pub scene: String,
    /// Number of ticks executed.
    pub ticks: u64,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per tick (seconds).
    pub avg_tick_time: f64,
    pub min_tick_time: f64,
    pub max_tick_time: f64,
    /// Kinetic energy after the last tick.
    pub final_kinetic_energy: f64,
    /// Largest distance any node moved from its starting position.
    pub max_displacement: f32,
    /// External and spring evaluation failures summed over all ticks.
    pub force_failures: usize,
    pub node_count: usize,
    pub spring_count: usize,
}

impl RunMetrics {
    pub fn to_csv_header() -> String {
        "scene,node_count,spring_count,ticks,total_wall_time_s,avg_tick_ms,min_tick_ms,max_tick_ms,final_ke,max_displacement,force_failures".to_string()
    }

    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6},{}",
            self.scene,
            self.node_count,
            self.spring_count,
            self.ticks,
            self.total_wall_time,
            self.avg_tick_time * 1000.0,
            self.min_tick_time * 1000.0,
            self.max_tick_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.force_failures,
        )
    }

    /// Header plus one row per run.
    pub fn to_csv(metrics: &[RunMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
