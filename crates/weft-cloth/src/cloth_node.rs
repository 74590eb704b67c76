//! Physical node plus its attached springs.

use serde::{Deserialize, Serialize};
use weft_math::{Point, Vector};
use weft_types::{NodeId, Scalar, SpringId};

use crate::node::PhysicalNode;
use crate::spring::SpringLink;

/// A grid node: a [`PhysicalNode`] with a set of attached springs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothNode {
    physical: PhysicalNode,
    attached: Vec<SpringId>,
}

impl ClothNode {
    pub fn new(position: Point, mass: Scalar, anchor: bool) -> Self {
        Self {
            physical: PhysicalNode::new(position, mass, anchor),
            attached: Vec::new(),
        }
    }

    #[inline]
    pub fn physical(&self) -> &PhysicalNode {
        &self.physical
    }

    #[inline]
    pub fn physical_mut(&mut self) -> &mut PhysicalNode {
        &mut self.physical
    }

    /// Attached springs, in attachment order.
    pub fn attached_springs(&self) -> &[SpringId] {
        &self.attached
    }

    /// Needs at least one spring and positive mass.
    pub fn is_valid(&self) -> bool {
        !self.attached.is_empty() && self.physical.is_valid()
    }

    /// Attaches a spring. Returns `false` if it was already attached.
    pub fn add_attached_spring(&mut self, spring: SpringId) -> bool {
        if self.attached.contains(&spring) {
            return false;
        }
        self.attached.push(spring);
        true
    }

    /// Detaches a spring. Returns `false` if it was not attached.
    pub fn remove_attached_spring(&mut self, spring: SpringId) -> bool {
        match self.attached.iter().position(|&s| s == spring) {
            Some(i) => {
                self.attached.remove(i);
                true
            }
            None => false,
        }
    }

    /// Sum of all attached spring forces on this node (`id`), together with
    /// the number of springs that could not produce a force.
    ///
    /// Read-only; the caller adds the sum to the pending force so that the
    /// node arena can be borrowed immutably while springs are evaluated.
    pub fn spring_force_sum(
        &self,
        id: NodeId,
        springs: &[SpringLink],
        nodes: &[ClothNode],
    ) -> (Vector, usize) {
        let mut sum = Vector::ZERO;
        let mut failures = 0;
        for spring_id in &self.attached {
            match springs
                .get(spring_id.index())
                .and_then(|s| s.force_on_node(id, nodes))
            {
                Some(force) => sum += force,
                None => failures += 1,
            }
        }
        (sum, failures)
    }
}
