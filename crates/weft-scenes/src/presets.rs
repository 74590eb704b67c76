//! Scene presets: network, forces and anchors for each canonical scene.
//!
//! 1. **Flag**: anchored along the left edge, blown sideways
//! 2. **Rising cloth**: anchored along the bottom edge, wind lifts it
//! 3. **Tapestry**: hung from the top edge, light breeze from below and behind
//! 4. **Tethered cloth**: held by its four corners, gravity along −z
//! 5. **Trampoline**: every edge anchored, strong wind pushes the middle
//!
//! All presets step with `dt = 0.01` and the legacy integration formula,
//! which their stiffnesses and masses are tuned for.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use weft_cloth::{FlexionSource, IntegrationScheme, NetworkConfig};
use weft_math::Color;
use weft_types::constants::{DEFAULT_TIME_QUANTUM, GRAVITY};
use weft_types::{WeftError, WeftResult};

const PRESET_SPECULARITY: f32 = 0.99;

/// Which preset scene to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePreset {
    Flag,
    RisingCloth,
    Tapestry,
    TetheredCloth,
    Trampoline,
}

impl ScenePreset {
    pub fn all() -> &'static [ScenePreset] {
        &[
            ScenePreset::Flag,
            ScenePreset::RisingCloth,
            ScenePreset::Tapestry,
            ScenePreset::TetheredCloth,
            ScenePreset::Trampoline,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenePreset::Flag => "flag",
            ScenePreset::RisingCloth => "rising_cloth",
            ScenePreset::Tapestry => "tapestry",
            ScenePreset::TetheredCloth => "tethered_cloth",
            ScenePreset::Trampoline => "trampoline",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScenePreset::Flag => "flag anchored on its left edge, waving in a sideways wind",
            ScenePreset::RisingCloth => "cloth anchored on its bottom edge, lifted by wind",
            ScenePreset::Tapestry => "tapestry hanging from its top edge in a light breeze",
            ScenePreset::TetheredCloth => "cloth tethered at its four corners",
            ScenePreset::Trampoline => "sheet anchored on every edge, pushed by wind",
        }
    }

    /// Full configuration of this preset.
    pub fn config(&self) -> SceneConfig {
        let preset = |columns, rows, size: (f32, f32), offset, mass, stiffness: (f32, f32, f32)| {
            NetworkConfig {
                columns,
                rows,
                width: size.0,
                height: size.1,
                offset,
                node_mass: mass,
                structural_stiffness: stiffness.0,
                shear_stiffness: stiffness.1,
                flexion_stiffness: stiffness.2,
                time_quantum: DEFAULT_TIME_QUANTUM,
                integration: IntegrationScheme::Legacy,
                flexion_source: FlexionSource::Dedicated,
                specularity: PRESET_SPECULARITY,
                base_color: Color::new(0.7, 0.7, 0.7),
            }
        };
        let forces = |gravity_direction, wind_magnitude, wind_direction, viscous_coefficient| {
            ForceConfig {
                gravity: GRAVITY,
                gravity_direction,
                wind_magnitude,
                wind_direction,
                viscous_coefficient,
            }
        };

        match self {
            ScenePreset::Flag => SceneConfig {
                name: self.name().into(),
                anchors: AnchorLayout::LeftColumn,
                network: preset(10, 10, (10.0, 5.0), [-4.5, -1.0, 0.0], 0.02, (10.0, 3.5, 1.0)),
                forces: forces([0.0, -1.0, 0.0], 0.8, [1.0, 0.0, 0.0], 0.03),
            },
            ScenePreset::RisingCloth => SceneConfig {
                name: self.name().into(),
                anchors: AnchorLayout::BottomRow,
                network: NetworkConfig {
                    base_color: Color::new(0.7, 0.7, 0.3),
                    ..preset(10, 10, (10.0, 7.0), [-4.5, -2.5, 0.0], 0.03, (7.0, 0.2, 0.2))
                },
                forces: forces([0.0, -1.0, 0.0], 1.0, [0.0, 1.0, 0.0], 0.01),
            },
            ScenePreset::Tapestry => SceneConfig {
                name: self.name().into(),
                anchors: AnchorLayout::TopRow,
                network: preset(10, 10, (10.0, 7.0), [-4.5, -2.5, 0.0], 0.03, (10.0, 1.0, 1.0)),
                forces: forces([0.0, -1.0, 0.0], 0.4, [0.0, 1.0, 1.0], 0.01),
            },
            ScenePreset::TetheredCloth => SceneConfig {
                name: self.name().into(),
                anchors: AnchorLayout::Corners,
                network: preset(5, 10, (10.0, 10.0), [-4.0, -4.5, 0.0], 0.01, (20.0, 15.0, 3.0)),
                forces: forces([0.0, 0.0, -1.0], 0.8, [0.0, 0.0, 1.0], 0.001),
            },
            ScenePreset::Trampoline => SceneConfig {
                name: self.name().into(),
                anchors: AnchorLayout::Edges,
                network: NetworkConfig {
                    base_color: Color::new(0.5, 0.5, 0.5),
                    ..preset(10, 10, (12.0, 10.0), [-4.5, -2.5, 0.0], 0.04, (15.0, 3.0, 3.0))
                },
                forces: forces([0.0, 0.0, -1.0], 1.7, [0.0, 0.0, 1.0], 0.02),
            },
        }
    }
}

impl std::fmt::Display for ScenePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenePreset {
    type Err = WeftError;

    /// Accepts `rising_cloth`, `rising-cloth` and `RisingCloth` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name().replace('_', "") == wanted)
            .ok_or_else(|| WeftError::InvalidConfig(format!("unknown scene preset '{s}'")))
    }
}

/// Which grid cells are anchored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorLayout {
    #[default]
    None,
    /// Column `x = 0`.
    LeftColumn,
    /// Row `y = 0`.
    BottomRow,
    /// Row `y = rows − 1`.
    TopRow,
    /// The four corner nodes.
    Corners,
    /// Every node on the border.
    Edges,
    /// Explicit `[column, row]` pairs.
    Cells(Vec<[usize; 2]>),
}

impl AnchorLayout {
    /// Cells to anchor on a `columns × rows` grid, without duplicates.
    pub fn cells(&self, columns: usize, rows: usize) -> Vec<(usize, usize)> {
        if columns == 0 || rows == 0 {
            return Vec::new();
        }
        let (last_x, last_y) = (columns - 1, rows - 1);
        let mut cells: Vec<(usize, usize)> = match self {
            AnchorLayout::None => Vec::new(),
            AnchorLayout::LeftColumn => (0..rows).map(|y| (0, y)).collect(),
            AnchorLayout::BottomRow => (0..columns).map(|x| (x, 0)).collect(),
            AnchorLayout::TopRow => (0..columns).map(|x| (x, last_y)).collect(),
            AnchorLayout::Corners => vec![(0, 0), (last_x, 0), (0, last_y), (last_x, last_y)],
            AnchorLayout::Edges => (0..rows)
                .flat_map(|y| (0..columns).map(move |x| (x, y)))
                .filter(|&(x, y)| x == 0 || y == 0 || x == last_x || y == last_y)
                .collect(),
            AnchorLayout::Cells(list) => list.iter().map(|&[x, y]| (x, y)).collect(),
        };
        let mut seen = std::collections::HashSet::new();
        cells.retain(|cell| seen.insert(*cell));
        cells
    }
}

/// External force parameters of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    /// Gravitational acceleration (m/s²).
    pub gravity: f32,
    /// Gravity direction; normalized when the generator is built.
    pub gravity_direction: [f32; 3],
    /// Maximum wind force magnitude (N). Zero disables wind.
    pub wind_magnitude: f32,
    /// Base wind direction.
    pub wind_direction: [f32; 3],
    /// Viscous drag coefficient (kg/s).
    pub viscous_coefficient: f32,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            gravity_direction: [0.0, -1.0, 0.0],
            wind_magnitude: 0.0,
            wind_direction: [1.0, 0.0, 0.0],
            viscous_coefficient: 0.01,
        }
    }
}

impl ForceConfig {
    pub fn validate(&self) -> WeftResult<()> {
        if !self.gravity.is_finite() {
            return Err(WeftError::InvalidConfig(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !(self.wind_magnitude >= 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "wind magnitude must be non-negative, got {}",
                self.wind_magnitude
            )));
        }
        if !(self.viscous_coefficient >= 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "viscous coefficient must be non-negative, got {}",
                self.viscous_coefficient
            )));
        }
        Ok(())
    }
}

/// Everything needed to build a [`Scene`](crate::Scene).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    #[serde(default)]
    pub anchors: AnchorLayout,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub forces: ForceConfig,
}

impl SceneConfig {
    /// Checks network and force parameters and that every anchor is on the grid.
    ///
    /// Scenes export a mesh every tick, so the grid needs at least one cell.
    pub fn validate(&self) -> WeftResult<()> {
        self.network.validate()?;
        self.forces.validate()?;
        let (columns, rows) = (self.network.columns, self.network.rows);
        if columns < 2 || rows < 2 {
            return Err(WeftError::InvalidConfig(format!(
                "a scene needs at least 2x2 nodes to export a mesh, got {columns}x{rows}"
            )));
        }
        if let Some(&(column, row)) = self
            .anchors
            .cells(columns, rows)
            .iter()
            .find(|&&(x, y)| x >= columns || y >= rows)
        {
            return Err(WeftError::NodeOutOfBounds { column, row, columns, rows });
        }
        Ok(())
    }

    /// Parses a TOML document.
    pub fn from_toml_str(text: &str) -> WeftResult<Self> {
        toml::from_str(text).map_err(|e| WeftError::Serialization(format!("invalid scene TOML: {e}")))
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> WeftResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> WeftResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| WeftError::Serialization(format!("TOML serialization failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for &preset in ScenePreset::all() {
            assert_eq!(preset.name().parse::<ScenePreset>().unwrap(), preset);
        }
        assert_eq!("Rising-Cloth".parse::<ScenePreset>().unwrap(), ScenePreset::RisingCloth);
        assert!("curtain".parse::<ScenePreset>().is_err());
    }

    #[test]
    fn corners_dedup_on_single_column() {
        let cells = AnchorLayout::Corners.cells(1, 3);
        assert_eq!(cells, vec![(0, 0), (0, 2)]);
    }

    #[test]
    fn edges_count() {
        // 10x10 border has 36 nodes
        assert_eq!(AnchorLayout::Edges.cells(10, 10).len(), 36);
        assert_eq!(AnchorLayout::Edges.cells(5, 10).len(), 26);
    }
}
