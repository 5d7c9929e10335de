//! Springs over the node ring.
//!
//! Springs reference nodes by index, so they stay valid however the node
//! storage is moved or reallocated.

use crate::float::Float;
use crate::node::Node;

/// Which family a spring belongs to. Families differ only in stiffness.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpringKind {
    /// Adjacent pair `(i, i+1)`: keeps the outline.
    Edge,
    /// Pair two apart `(i, i+2)`: a little shape rigidity.
    Skip,
    /// Roughly opposite pair: stops total collapse, allows deep squish.
    Diameter,
}

/// Distance constraint between two nodes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    /// Captured once at creation, never recomputed.
    pub rest_length: F,
    pub stiffness: F,
    pub kind: SpringKind,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F, kind: SpringKind) -> Self {
        Spring { a, b, rest_length, stiffness, kind }
    }

    /// Spring whose rest length is the nodes' current distance.
    pub fn from_nodes(a: usize, b: usize, nodes: &[Node<F>], stiffness: F, kind: SpringKind) -> Self {
        let rest_length = nodes[a].pos.distance(nodes[b].pos);
        Spring { a, b, rest_length, stiffness, kind }
    }

    /// Current endpoint distance.
    pub fn length(&self, nodes: &[Node<F>]) -> F {
        nodes[self.a].pos.distance(nodes[self.b].pos)
    }

    /// Move both endpoints toward the rest length. Corrections are equal and
    /// opposite, so the pair's center does not move.
    pub fn solve(&self, nodes: &mut [Node<F>]) {
        let delta = nodes[self.b].pos - nodes[self.a].pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return; // coincident endpoints have no direction
        }

        let error = dist - self.rest_length;
        let correction = delta.scale(error * self.stiffness * F::half() / dist);
        nodes[self.a].pos += correction;
        nodes[self.b].pos -= correction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn stretched_spring_contracts_symmetrically() {
        let mut nodes = [Node::new(Vec2::new(0.0f32, 0.0)), Node::new(Vec2::new(20.0, 0.0))];
        let s = Spring::new(0, 1, 10.0, 1.0, SpringKind::Edge);
        s.solve(&mut nodes);
        assert!((nodes[0].pos.x - 5.0).abs() < 1e-5);
        assert!((nodes[1].pos.x - 15.0).abs() < 1e-5);
    }

    #[test]
    fn soft_spring_moves_partially() {
        let mut nodes = [Node::new(Vec2::new(0.0f32, 0.0)), Node::new(Vec2::new(0.0, 4.0))];
        let s = Spring::new(0, 1, 10.0, 0.5, SpringKind::Diameter);
        s.solve(&mut nodes);
        let len = s.length(&nodes);
        assert!(len > 4.0 && len < 10.0, "len = {}", len);
    }

    #[test]
    fn coincident_nodes_are_left_alone() {
        let mut nodes = [Node::new(Vec2::new(3.0f32, 3.0)), Node::new(Vec2::new(3.0, 3.0))];
        Spring::new(0, 1, 10.0, 1.0, SpringKind::Edge).solve(&mut nodes);
        assert!(nodes.iter().all(|n| n.pos.is_finite()));
    }
}
