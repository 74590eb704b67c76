//! Network configuration.
//!
//! Everything needed to build a [`ClothNodeNetwork`](crate::ClothNodeNetwork):
//! grid shape, physical extent, node mass, spring stiffnesses, the
//! force time quantum and the surface attributes carried into mesh export.

use serde::{Deserialize, Serialize};
use weft_math::Color;
use weft_types::constants::{
    DEFAULT_TIME_QUANTUM, MAX_COLOR_COMPONENT, MAX_SPECULARITY, MIN_SPECULARITY,
};
use weft_types::{WeftError, WeftResult};

/// Explicit integration formula used by [`PhysicalNode::apply_force`](crate::PhysicalNode::apply_force).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationScheme {
    /// Displacement `v·dt + a·dt²`, i.e. `x + (v + a·dt)·dt`: semi-implicit
    /// Euler. Stable for `ω·dt < 2`; the preset scenes are tuned against it.
    #[default]
    Legacy,
    /// Displacement `v·dt + ½·a·dt²`. Gains energy on undamped springs.
    Kinematic,
}

impl IntegrationScheme {
    /// Coefficient applied to `a·dt²` in the displacement term.
    #[inline]
    pub fn acceleration_factor(self) -> f32 {
        match self {
            Self::Legacy => 1.0,
            Self::Kinematic => 0.5,
        }
    }
}

/// Which stiffness the two-cell flexion springs use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexionSource {
    /// `flexion_stiffness`.
    #[default]
    Dedicated,
    /// `structural_stiffness`, reproducing the legacy wiring.
    Structural,
}

/// Configuration for a cloth node network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Nodes per row.
    pub columns: usize,
    /// Nodes per column.
    pub rows: usize,
    /// Physical width of the grid at build time.
    pub width: f32,
    /// Physical height of the grid at build time.
    pub height: f32,
    /// Origin offset added to every node position.
    pub offset: [f32; 3],
    /// Mass of every node (kg).
    pub node_mass: f32,
    /// Stiffness of springs between direct neighbours.
    pub structural_stiffness: f32,
    /// Stiffness of the diagonal springs.
    pub shear_stiffness: f32,
    /// Stiffness of springs spanning two cells.
    pub flexion_stiffness: f32,
    /// Integration time step (seconds).
    pub time_quantum: f32,
    pub integration: IntegrationScheme,
    pub flexion_source: FlexionSource,
    /// Specular exponent of the exported mesh, in `[0, 1]`.
    pub specularity: f32,
    /// Base color of the exported mesh.
    pub base_color: Color,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
            width: 10.0,
            height: 7.0,
            offset: [-4.5, -2.5, 0.0],
            node_mass: 0.03,
            structural_stiffness: 10.0,
            shear_stiffness: 1.0,
            flexion_stiffness: 1.0,
            time_quantum: DEFAULT_TIME_QUANTUM,
            integration: IntegrationScheme::default(),
            flexion_source: FlexionSource::default(),
            specularity: MAX_SPECULARITY,
            base_color: Color::WHITE,
        }
    }
}

impl NetworkConfig {
    /// A small, stiff grid for quick experiments and tests.
    pub fn debug() -> Self {
        Self {
            columns: 4,
            rows: 4,
            width: 4.0,
            height: 4.0,
            offset: [0.0; 3],
            ..Default::default()
        }
    }

    /// Stiffness actually used for flexion springs.
    pub fn effective_flexion_stiffness(&self) -> f32 {
        match self.flexion_source {
            FlexionSource::Dedicated => self.flexion_stiffness,
            FlexionSource::Structural => self.structural_stiffness,
        }
    }

    /// Node spacing along x and y: `dimension / count`.
    pub fn spacing(&self) -> (f32, f32) {
        (
            self.width / self.columns as f32,
            self.height / self.rows as f32,
        )
    }

    /// Validates the configuration.
    pub fn validate(&self) -> WeftResult<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(WeftError::InvalidConfig(format!(
                "grid must have at least one node per axis, got {}x{}",
                self.columns, self.rows
            )));
        }
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "width and height must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        if !(self.node_mass >= 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "node mass must be non-negative, got {}",
                self.node_mass
            )));
        }
        if !(self.time_quantum > 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "time quantum must be positive, got {}",
                self.time_quantum
            )));
        }
        for (name, k) in [
            ("structural", self.structural_stiffness),
            ("shear", self.shear_stiffness),
            ("flexion", self.flexion_stiffness),
        ] {
            if !k.is_finite() {
                return Err(WeftError::InvalidConfig(format!(
                    "{name} stiffness must be finite, got {k}"
                )));
            }
        }
        if !(MIN_SPECULARITY..=MAX_SPECULARITY).contains(&self.specularity) {
            return Err(WeftError::InvalidConfig(format!(
                "specularity must lie in [{MIN_SPECULARITY}, {MAX_SPECULARITY}], got {}",
                self.specularity
            )));
        }
        let c = self.base_color;
        if [c.r, c.g, c.b]
            .iter()
            .any(|v| !(0.0..=MAX_COLOR_COMPONENT).contains(v))
        {
            return Err(WeftError::InvalidConfig(format!(
                "color components must lie in [0, {MAX_COLOR_COMPONENT}], got {:?}",
                c.to_array()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(NetworkConfig::default().validate().is_ok());
        assert!(NetworkConfig::debug().validate().is_ok());
    }

    #[test]
    fn zero_columns_rejected() {
        let cfg = NetworkConfig { columns: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn nan_width_rejected() {
        let cfg = NetworkConfig { width: f32::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn flexion_source_selects_stiffness() {
        let mut cfg = NetworkConfig::default();
        cfg.structural_stiffness = 12.0;
        cfg.flexion_stiffness = 2.0;
        assert_eq!(cfg.effective_flexion_stiffness(), 2.0);
        cfg.flexion_source = FlexionSource::Structural;
        assert_eq!(cfg.effective_flexion_stiffness(), 12.0);
    }
}
