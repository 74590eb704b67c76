//! Hookean spring between two cloth nodes.
//!
//! Springs live in the network's spring arena and refer to their endpoints
//! by [`NodeId`]; each endpoint lists the spring's [`SpringId`] in its
//! attachment set. Operations that touch endpoints take the node arena.

use serde::{Deserialize, Serialize};
use weft_math::Vector;
use weft_types::{NodeId, Scalar, SpringId};

use crate::cloth_node::ClothNode;
use crate::node::PhysicalNode;

/// Role of a spring in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringKind {
    /// Direct horizontal or vertical neighbours. Resists stretch.
    Structural,
    /// Diagonal neighbours. Resists shear.
    Shear,
    /// Neighbours two cells apart. Resists bending.
    Flexion,
}

impl SpringKind {
    pub fn all() -> &'static [SpringKind] {
        &[Self::Structural, Self::Shear, Self::Flexion]
    }
}

/// A spring with a fixed rest length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringLink {
    stiffness: Scalar,
    rest_length: Scalar,
    kind: SpringKind,
    /// `(head, tail)` once linked.
    endpoints: Option<(NodeId, NodeId)>,
}

impl SpringLink {
    /// Spring whose rest length is the current distance between two nodes.
    ///
    /// The spring is not yet linked; see [`link_cloth_nodes`](Self::link_cloth_nodes).
    pub fn between(
        head: &PhysicalNode,
        tail: &PhysicalNode,
        stiffness: Scalar,
        kind: SpringKind,
    ) -> Self {
        Self::with_rest_length(stiffness, head.position().distance(tail.position()), kind)
    }

    /// Unlinked spring with an explicit rest length.
    pub fn with_rest_length(stiffness: Scalar, rest_length: Scalar, kind: SpringKind) -> Self {
        Self {
            stiffness,
            rest_length,
            kind,
            endpoints: None,
        }
    }

    #[inline]
    pub fn stiffness(&self) -> Scalar {
        self.stiffness
    }

    #[inline]
    pub fn rest_length(&self) -> Scalar {
        self.rest_length
    }

    #[inline]
    pub fn kind(&self) -> SpringKind {
        self.kind
    }

    #[inline]
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        self.endpoints
    }

    pub fn is_linked_to(&self, node: NodeId) -> bool {
        matches!(self.endpoints, Some((head, tail)) if head == node || tail == node)
    }

    /// Linked to two existing, valid nodes with a non-negative rest length.
    pub fn is_valid(&self, nodes: &[ClothNode]) -> bool {
        let Some((head, tail)) = self.endpoints else {
            return false;
        };
        self.rest_length >= 0.0
            && nodes.get(head.index()).is_some_and(ClothNode::is_valid)
            && nodes.get(tail.index()).is_some_and(ClothNode::is_valid)
    }

    /// Sets both endpoints and registers `id` with each node.
    ///
    /// Returns `false` if either endpoint does not exist or already lists
    /// this spring.
    pub fn link_cloth_nodes(
        &mut self,
        id: SpringId,
        nodes: &mut [ClothNode],
        head: NodeId,
        tail: NodeId,
    ) -> bool {
        if head == tail || head.index() >= nodes.len() || tail.index() >= nodes.len() {
            return false;
        }
        self.endpoints = Some((head, tail));
        let head_added = nodes[head.index()].add_attached_spring(id);
        let tail_added = nodes[tail.index()].add_attached_spring(id);
        head_added && tail_added
    }

    /// Drops the back-reference on both endpoints and clears them.
    ///
    /// Idempotent: returns `false` if the spring was already unlinked.
    pub fn unlink(&mut self, id: SpringId, nodes: &mut [ClothNode]) -> bool {
        let Some((head, tail)) = self.endpoints.take() else {
            return false;
        };
        for end in [head, tail] {
            if let Some(node) = nodes.get_mut(end.index()) {
                node.remove_attached_spring(id);
            }
        }
        true
    }

    /// Current distance between the endpoints.
    pub fn current_length(&self, nodes: &[ClothNode]) -> Option<Scalar> {
        let (head, tail) = self.endpoints?;
        let head = nodes.get(head.index())?.physical().position();
        let tail = nodes.get(tail.index())?.physical().position();
        Some(head.distance(tail))
    }

    /// Hooke force this spring exerts on `target`.
    ///
    /// Stretched springs pull each endpoint toward the other; compressed
    /// springs push them apart. Returns `None` if `target` is not an
    /// endpoint or the spring is invalid.
    pub fn force_on_node(&self, target: NodeId, nodes: &[ClothNode]) -> Option<Vector> {
        if !self.is_linked_to(target) || !self.is_valid(nodes) {
            return None;
        }
        let (head, tail) = self.endpoints?;
        let head_pos = nodes[head.index()].physical().position();
        let tail_pos = nodes[tail.index()].physical().position();

        let stretch = head_pos.distance(tail_pos) - self.rest_length;
        let magnitude = self.stiffness * stretch;
        let direction = Vector::displacement(head_pos, tail_pos).normalized();

        Some(if target == head {
            direction * -magnitude
        } else {
            direction * magnitude
        })
    }
}
