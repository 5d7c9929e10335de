//! Boundary resolvers: monitor containment, window walls, the hard clamp
//! and the cursor-stick constraint used while dragging.

use crate::float::Float;
use crate::node::Node;
use crate::rect::Rect;
use crate::vec::Vec2;

/// Which face of a window rectangle a node was pushed onto.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
}

/// How a window rectangle acts on the body this iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WallMode {
    /// Centroid inside: the body bounces off the inner faces.
    Cavity,
    /// Centroid outside: the rectangle is solid.
    Obstacle,
}

impl WallMode {
    /// Only the centroid decides; individual nodes never do.
    pub fn for_centroid<F: Float>(rect: &Rect<F>, centroid: Vec2<F>) -> Self {
        if rect.contains_strict(centroid) {
            WallMode::Cavity
        } else {
            WallMode::Obstacle
        }
    }
}

/// Keep one coordinate in `[min, max]`. A clamped coordinate gets its
/// previous value reflected with `bounce`, and the rebound can never exceed
/// the span of the interval.
fn bounce_axis<F: Float>(pos: &mut F, prev: &mut F, min: F, max: F, bounce: F) {
    let span = (max - min).max(F::zero());
    if *pos < min {
        let speed = (*pos - *prev).abs();
        *pos = min;
        *prev = (min - speed * bounce).max(min - span);
    } else if *pos > max {
        let speed = (*pos - *prev).abs();
        *pos = max;
        *prev = (max + speed * bounce).min(max + span);
    }
}

/// Contain every node in `bounds`, bouncing on contact.
pub fn resolve_bounds<F: Float>(nodes: &mut [Node<F>], bounds: &Rect<F>, bounce: F) {
    for n in nodes.iter_mut() {
        bounce_axis(&mut n.pos.x, &mut n.prev_pos.x, bounds.left(), bounds.right(), bounce);
        bounce_axis(&mut n.pos.y, &mut n.prev_pos.y, bounds.top(), bounds.bottom(), bounce);
    }
}

/// Snap a node found strictly inside `rect` to the nearest face and reflect
/// its velocity off it. Ties go to top, bottom, left, right in that order.
pub fn push_out<F: Float>(node: &mut Node<F>, rect: &Rect<F>, bounce: F) -> Option<Face> {
    if !rect.contains_strict(node.pos) {
        return None;
    }
    let p = node.pos;
    let candidates = [
        (Face::Top, p.y - rect.top()),
        (Face::Bottom, rect.bottom() - p.y),
        (Face::Left, p.x - rect.left()),
        (Face::Right, rect.right() - p.x),
    ];
    let mut best = candidates[0];
    for c in &candidates[1..] {
        if c.1 < best.1 {
            best = *c;
        }
    }

    let v = node.velocity_raw();
    match best.0 {
        Face::Top => {
            node.pos.y = rect.top();
            node.prev_pos.y = rect.top() + v.y.abs() * bounce;
        }
        Face::Bottom => {
            node.pos.y = rect.bottom();
            node.prev_pos.y = rect.bottom() - v.y.abs() * bounce;
        }
        Face::Left => {
            node.pos.x = rect.left();
            node.prev_pos.x = rect.left() + v.x.abs() * bounce;
        }
        Face::Right => {
            node.pos.x = rect.right();
            node.prev_pos.x = rect.right() - v.x.abs() * bounce;
        }
    }
    Some(best.0)
}

/// Apply one window rectangle to the ring, choosing cavity or obstacle
/// behavior from the centroid.
pub fn resolve_window<F: Float>(nodes: &mut [Node<F>], centroid: Vec2<F>, rect: &Rect<F>, bounce: F) -> WallMode {
    let mode = WallMode::for_centroid(rect, centroid);
    match mode {
        WallMode::Cavity => resolve_bounds(nodes, rect, bounce),
        WallMode::Obstacle => {
            for n in nodes.iter_mut() {
                push_out(n, rect, bounce);
            }
        }
    }
    mode
}

/// Windows are resolved one after another in snapshot order; overlapping
/// windows are not solved simultaneously.
pub fn resolve_windows<F: Float>(nodes: &mut [Node<F>], centroid: Vec2<F>, windows: &[Rect<F>], bounce: F) {
    for rect in windows {
        resolve_window(nodes, centroid, rect, bounce);
    }
}

/// Last-resort containment: positions and previous positions both end up
/// inside `bounds`, whatever the solver did.
pub fn hard_clamp<F: Float>(nodes: &mut [Node<F>], bounds: &Rect<F>) {
    for n in nodes.iter_mut() {
        n.clamp_to(bounds);
    }
}

/// Treat `pointer` as a minimum radial extent in its direction from the
/// centroid. Nodes facing the pointer are pushed out toward that extent,
/// weighted by `cos^exponent` of their angle to it; nodes facing away are
/// untouched.
pub fn cursor_stick<F: Float>(nodes: &mut [Node<F>], centroid: Vec2<F>, pointer: Vec2<F>, exponent: i32, strength: F) {
    let eps = F::from_f32(1e-6);
    let to_pointer = pointer - centroid;
    let reach = to_pointer.length();
    let pointer_dir = match to_pointer.try_normalize(eps) {
        Some(d) => d,
        None => return,
    };
    for n in nodes.iter_mut() {
        let offset = n.pos - centroid;
        let len = offset.length();
        let dir = offset.try_normalize(eps).unwrap_or(pointer_dir);
        let cos = dir.dot(pointer_dir);
        if cos <= F::zero() || len >= reach {
            continue;
        }
        let weight = cos.powi(exponent);
        n.push(dir.scale((reach - len) * weight * strength));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_reverses_and_decays() {
        let bounds = Rect::new(0.0f32, 0.0, 100.0, 100.0);
        let mut nodes = [Node { pos: Vec2::new(105.0, 50.0), prev_pos: Vec2::new(95.0, 50.0) }];
        resolve_bounds(&mut nodes, &bounds, 0.5);
        assert_eq!(nodes[0].pos.x, 100.0);
        assert!((nodes[0].velocity_raw().x + 5.0).abs() < 1e-5);
    }

    #[test]
    fn rebound_capped_by_span() {
        let bounds = Rect::new(0.0f32, 0.0, 10.0, 10.0);
        let mut nodes = [Node { pos: Vec2::new(-500.0, 5.0), prev_pos: Vec2::new(500.0, 5.0) }];
        resolve_bounds(&mut nodes, &bounds, 0.9);
        assert_eq!(nodes[0].pos.x, 0.0);
        assert!(nodes[0].velocity_raw().x <= 10.0 + 1e-5);
    }

    #[test]
    fn push_out_tie_prefers_top() {
        let rect = Rect::new(0.0f32, 0.0, 10.0, 10.0);
        let mut n = Node::new(Vec2::new(5.0, 5.0));
        assert_eq!(push_out(&mut n, &rect, 0.5), Some(Face::Top));
        assert_eq!(n.pos.y, 0.0);
    }

    #[test]
    fn push_out_reflects_with_less_speed() {
        let rect = Rect::new(0.0f32, 0.0, 100.0, 100.0);
        let mut n = Node { pos: Vec2::new(50.0, 3.0), prev_pos: Vec2::new(50.0, -5.0) };
        let before = n.velocity_raw().length();
        assert_eq!(push_out(&mut n, &rect, 0.5), Some(Face::Top));
        let after = n.velocity_raw();
        assert!(after.y < 0.0, "velocity not reflected: {:?}", after);
        assert!(after.length() < before);
    }

    #[test]
    fn push_out_ignores_boundary_points() {
        let rect = Rect::new(0.0f32, 0.0, 10.0, 10.0);
        let mut n = Node::new(Vec2::new(10.0, 5.0));
        assert_eq!(push_out(&mut n, &rect, 0.5), None);
    }

    #[test]
    fn cavity_traps_nodes_inside() {
        let rect = Rect::new(0.0f32, 0.0, 200.0, 200.0);
        let mut nodes = [Node { pos: Vec2::new(-3.0, 100.0), prev_pos: Vec2::new(1.0, 100.0) }];
        let mode = resolve_window(&mut nodes, Vec2::new(100.0, 100.0), &rect, 0.5);
        assert_eq!(mode, WallMode::Cavity);
        assert_eq!(nodes[0].pos.x, 0.0);
        assert!(nodes[0].velocity_raw().x > 0.0);
    }

    #[test]
    fn cursor_stick_only_pulls_facing_nodes() {
        let c = Vec2::new(0.0f32, 0.0);
        let mut nodes = [Node::new(Vec2::new(10.0, 0.0)), Node::new(Vec2::new(-10.0, 0.0))];
        cursor_stick(&mut nodes, c, Vec2::new(30.0, 0.0), 8, 1.0);
        assert!((nodes[0].pos.x - 30.0).abs() < 1e-4);
        assert_eq!(nodes[1].pos.x, -10.0);
    }
}
