//! The cloth node network: a fixed grid of nodes joined by springs.
//!
//! Nodes are stored row-major (`id = row * columns + column`). Topology is
//! fixed by [`ClothNodeNetwork::build`]; afterwards only anchors, the time
//! quantum and the surface attributes can change.
//!
//! Each tick runs two full passes over the grid:
//!
//! ```text
//! pass 1: pending = Σ external(node) ; pending += Σ springs(node)
//! pass 2: integrate every node, clear pending
//! ```
//!
//! No node moves before every node's force has been computed, so the two
//! ends of a spring always see the same geometry within one tick.

use serde::{Deserialize, Serialize};
use weft_math::{Color, Point, Vector};
use weft_mesh::{SurfaceShading, TriangleMesh};
use weft_types::constants::{MAX_SPECULARITY, MIN_SPECULARITY};
use weft_types::{NodeId, Scalar, SpringId, WeftError, WeftResult};

use crate::cloth_node::ClothNode;
use crate::config::NetworkConfig;
use crate::force::ExternalForceCollection;
use crate::spring::{SpringKind, SpringLink};

/// Outcome of one [`ClothNodeNetwork::evaluate_forces`] tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Nodes that went through both passes.
    pub nodes_evaluated: usize,
    /// Nodes for which no external generator produced a force.
    pub external_failures: usize,
    /// Attached springs that could not produce a force.
    pub spring_failures: usize,
    /// Nodes whose position was integrated.
    pub nodes_moved: usize,
}

/// A built mass-spring grid.
#[derive(Debug, Clone)]
pub struct ClothNodeNetwork {
    config: NetworkConfig,
    nodes: Vec<ClothNode>,
    springs: Vec<SpringLink>,
}

impl ClothNodeNetwork {
    /// Builds the grid and links its springs.
    ///
    /// Node `(x, y)` starts at `(x·width/columns, y·height/rows, 0) + offset`.
    /// For every cell, in column-major order:
    /// - structural springs to `(x+1, y)` and `(x, y+1)`
    /// - shear springs `(x, y)–(x+1, y+1)` and `(x, y+1)–(x+1, y)`
    /// - flexion springs to `(x+2, y)` and `(x, y+2)`
    ///
    /// Either the whole network is returned or nothing is.
    pub fn build(config: &NetworkConfig) -> WeftResult<Self> {
        config.validate()?;

        let (columns, rows) = (config.columns, config.rows);
        let node_count = columns
            .checked_mul(rows)
            .filter(|&n| u32::try_from(n).is_ok())
            .ok_or_else(|| {
                WeftError::InvalidConfig(format!("{columns}x{rows} grid is too large"))
            })?;

        let (x_spacing, y_spacing) = config.spacing();
        let offset = Vector::from(config.offset);

        let mut nodes = Vec::with_capacity(node_count);
        for y in 0..rows {
            for x in 0..columns {
                let base = Point::new(x as Scalar * x_spacing, y as Scalar * y_spacing, 0.0);
                nodes.push(ClothNode::new(base + offset, config.node_mass, false));
            }
        }

        let mut network = Self {
            config: config.clone(),
            nodes,
            springs: Vec::new(),
        };
        network.link_springs()?;

        tracing::debug!(
            columns,
            rows,
            nodes = network.nodes.len(),
            springs = network.springs.len(),
            "cloth network built"
        );
        Ok(network)
    }

    fn link_springs(&mut self) -> WeftResult<()> {
        let (columns, rows) = (self.config.columns, self.config.rows);
        let structural = self.config.structural_stiffness;
        let shear = self.config.shear_stiffness;
        let flexion = self.config.effective_flexion_stiffness();

        for x in 0..columns {
            for y in 0..rows {
                if x + 1 < columns {
                    self.link((x, y), (x + 1, y), structural, SpringKind::Structural)?;
                }
                if y + 1 < rows {
                    self.link((x, y), (x, y + 1), structural, SpringKind::Structural)?;
                }
                if x + 1 < columns && y + 1 < rows {
                    self.link((x, y), (x + 1, y + 1), shear, SpringKind::Shear)?;
                    self.link((x, y + 1), (x + 1, y), shear, SpringKind::Shear)?;
                }
                if x + 2 < columns {
                    self.link((x, y), (x + 2, y), flexion, SpringKind::Flexion)?;
                }
                if y + 2 < rows {
                    self.link((x, y), (x, y + 2), flexion, SpringKind::Flexion)?;
                }
            }
        }
        Ok(())
    }

    fn link(
        &mut self,
        head: (usize, usize),
        tail: (usize, usize),
        stiffness: Scalar,
        kind: SpringKind,
    ) -> WeftResult<()> {
        let head = self.require_id(head.0, head.1)?;
        let tail = self.require_id(tail.0, tail.1)?;
        let id = SpringId(self.springs.len() as u32);

        let mut spring = SpringLink::between(
            self.nodes[head.index()].physical(),
            self.nodes[tail.index()].physical(),
            stiffness,
            kind,
        );
        if !spring.link_cloth_nodes(id, &mut self.nodes, head, tail) {
            return Err(WeftError::InvalidNetwork(format!(
                "failed to link {kind:?} spring between nodes {} and {}",
                head.0, tail.0
            )));
        }
        self.springs.push(spring);
        Ok(())
    }

    // ─── Queries ─────────────────────────────────────────────

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.config.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Row-major id of grid cell `(column, row)`, if in bounds.
    pub fn node_id(&self, column: usize, row: usize) -> Option<NodeId> {
        (column < self.columns() && row < self.rows())
            .then(|| NodeId((row * self.columns() + column) as u32))
    }

    fn require_id(&self, column: usize, row: usize) -> WeftResult<NodeId> {
        self.node_id(column, row).ok_or(WeftError::NodeOutOfBounds {
            column,
            row,
            columns: self.columns(),
            rows: self.rows(),
        })
    }

    pub fn node(&self, id: NodeId) -> Option<&ClothNode> {
        self.nodes.get(id.index())
    }

    pub fn node_at(&self, column: usize, row: usize) -> Option<&ClothNode> {
        self.node_id(column, row).and_then(|id| self.node(id))
    }

    pub fn nodes(&self) -> &[ClothNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn spring(&self, id: SpringId) -> Option<&SpringLink> {
        self.springs.get(id.index())
    }

    pub fn springs(&self) -> &[SpringLink] {
        &self.springs
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    /// Number of springs of one kind.
    pub fn spring_count_of(&self, kind: SpringKind) -> usize {
        self.springs.iter().filter(|s| s.kind() == kind).count()
    }

    /// Current node positions, row-major.
    pub fn positions(&self) -> Vec<Point> {
        self.nodes.iter().map(|n| n.physical().position()).collect()
    }

    /// Total kinetic energy of all nodes.
    pub fn kinetic_energy(&self) -> Scalar {
        self.nodes
            .iter()
            .map(|n| n.physical().kinetic_energy())
            .sum()
    }

    /// Mass is non-negative, the grid is non-empty and the time quantum is positive.
    pub fn is_valid(&self) -> bool {
        self.config.node_mass >= 0.0
            && !self.nodes.is_empty()
            && self.nodes.len() == self.columns() * self.rows()
            && self.config.time_quantum > 0.0
    }

    #[inline]
    pub fn time_quantum(&self) -> Scalar {
        self.config.time_quantum
    }

    pub fn base_color(&self) -> Color {
        self.config.base_color
    }

    pub fn specularity(&self) -> Scalar {
        self.config.specularity
    }

    // ─── Configuration setters ───────────────────────────────

    /// Marks the node at `(column, row)` as anchored (or frees it).
    pub fn set_anchor_node(&mut self, column: usize, row: usize, anchor: bool) -> WeftResult<()> {
        let id = self.require_id(column, row).inspect_err(|e| {
            tracing::warn!(error = %e, "anchor update ignored");
        })?;
        self.nodes[id.index()].physical_mut().set_anchor(anchor);
        Ok(())
    }

    /// Sets the integration step. Must be positive.
    pub fn set_force_time_quantum(&mut self, dt: Scalar) -> WeftResult<()> {
        if !(dt > 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "time quantum must be positive, got {dt}"
            )));
        }
        self.config.time_quantum = dt;
        Ok(())
    }

    pub fn set_cloth_base_color(&mut self, color: Color) {
        self.config.base_color = color;
    }

    /// Sets the specular exponent. Must lie in `[0, 1]`.
    pub fn set_cloth_specularity(&mut self, specularity: Scalar) -> WeftResult<()> {
        if !(MIN_SPECULARITY..=MAX_SPECULARITY).contains(&specularity) {
            return Err(WeftError::InvalidConfig(format!(
                "specularity must lie in [{MIN_SPECULARITY}, {MAX_SPECULARITY}], got {specularity}"
            )));
        }
        self.config.specularity = specularity;
        Ok(())
    }

    // ─── Simulation ──────────────────────────────────────────

    /// Adds the attached spring forces on node `id` to its pending force.
    ///
    /// Returns `true` if the node has springs and every one produced a force.
    pub fn sum_attached_spring_forces(&mut self, id: NodeId) -> bool {
        let attached = self.node(id).map_or(0, |n| n.attached_springs().len());
        matches!(self.accumulate_spring_forces(id), Some(0)) && attached > 0
    }

    /// Adds the spring sum to node `id` and returns how many springs failed.
    fn accumulate_spring_forces(&mut self, id: NodeId) -> Option<usize> {
        let node = self.nodes.get(id.index())?;
        let (sum, failures) = node.spring_force_sum(id, &self.springs, &self.nodes);
        self.nodes[id.index()].physical_mut().add_force(sum);
        Some(failures)
    }

    /// Runs one tick: accumulate every node's force, then integrate every node.
    ///
    /// A node whose forces cannot be evaluated is skipped, never aborting
    /// the tick. Fails only if the network itself is invalid.
    pub fn evaluate_forces(&mut self, forces: &ExternalForceCollection) -> WeftResult<StepReport> {
        if !self.is_valid() {
            return Err(WeftError::InvalidNetwork(format!(
                "cannot evaluate: mass {}, dt {}",
                self.config.node_mass, self.config.time_quantum
            )));
        }

        let dt = self.config.time_quantum;
        let scheme = self.config.integration;
        let mut report = StepReport::default();

        for i in 0..self.nodes.len() {
            let id = NodeId(i as u32);
            let external = forces.evaluate(self.nodes[i].physical(), dt);
            if external.is_none() && !forces.is_empty() {
                report.external_failures += 1;
            }
            self.nodes[i]
                .physical_mut()
                .set_force(external.unwrap_or(Vector::ZERO));

            report.spring_failures += self.accumulate_spring_forces(id).unwrap_or(0);
        }

        for node in &mut self.nodes {
            if node.physical_mut().apply_force(dt, scheme) {
                report.nodes_moved += 1;
            }
            report.nodes_evaluated += 1;
        }

        tracing::trace!(?report, "cloth network tick");
        Ok(report)
    }

    // ─── Mesh export ─────────────────────────────────────────

    /// Exports the current node positions as a triangle mesh.
    ///
    /// Every node becomes one vertex with UV `(x/(C−1), y/(R−1))` and normal
    /// `(0, 0, 1)`. Each grid cell yields the triangles (UL, LR, LL) and
    /// (UL, UR, LR). Fails if the network is invalid or has fewer than two
    /// nodes along either axis.
    pub fn generate_mesh(&self) -> WeftResult<TriangleMesh> {
        if !self.is_valid() {
            return Err(WeftError::InvalidNetwork(
                "cannot export mesh from an invalid network".into(),
            ));
        }
        let (columns, rows) = (self.columns(), self.rows());
        if columns < 2 || rows < 2 {
            return Err(WeftError::InvalidMesh(format!(
                "a {columns}x{rows} grid produces no triangles"
            )));
        }

        let cells = (columns - 1) * (rows - 1);
        let mut mesh = TriangleMesh::with_capacity(self.nodes.len(), cells * 2);
        mesh.shading = SurfaceShading {
            base_color: self.config.base_color,
            specularity: self.config.specularity,
        };

        let normal = Vector::new(0.0, 0.0, 1.0);
        let u_step = (columns - 1) as Scalar;
        let v_step = (rows - 1) as Scalar;
        for (i, node) in self.nodes.iter().enumerate() {
            let (x, y) = (i % columns, i / columns);
            let uv = [x as Scalar / u_step, y as Scalar / v_step];
            mesh.push_vertex(node.physical().position(), normal, uv);
        }

        let index = |x: usize, y: usize| (y * columns + x) as u32;
        for x in 0..columns - 1 {
            for y in 0..rows - 1 {
                let upper_left = index(x, y);
                let upper_right = index(x + 1, y);
                let lower_left = index(x, y + 1);
                let lower_right = index(x + 1, y + 1);
                mesh.push_triangle(upper_left, lower_right, lower_left);
                mesh.push_triangle(upper_left, upper_right, lower_right);
            }
        }

        Ok(mesh)
    }
}
