//! Verlet point masses forming the body's perimeter.

use crate::float::Float;
use crate::rect::Rect;
use crate::vec::Vec2;

/// A Verlet node: velocity is implicit as `pos - prev_pos` per tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Node<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
}

impl<F: Float> Node<F> {
    /// A node at rest at `pos`.
    pub fn new(pos: Vec2<F>) -> Self {
        Node { pos, prev_pos: pos }
    }

    /// Per-tick displacement.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Overwrite the implicit velocity, keeping the current position.
    pub fn set_velocity(&mut self, v: Vec2<F>) {
        self.prev_pos = self.pos - v;
    }

    /// Move position and previous position together: no velocity change.
    pub fn translate(&mut self, offset: Vec2<F>) {
        self.pos += offset;
        self.prev_pos += offset;
    }

    /// Move the position only; the offset becomes velocity next tick.
    pub fn push(&mut self, offset: Vec2<F>) {
        self.pos += offset;
    }

    /// One Verlet step. `accel_step` is the acceleration already multiplied
    /// by dt², and the resulting displacement is capped at `max_step`.
    pub fn integrate(&mut self, damping: F, accel_step: Vec2<F>, max_step: F) {
        let velocity = (self.velocity_raw().scale(damping) + accel_step).clamp_length(max_step);
        self.prev_pos = self.pos;
        self.pos += velocity;
    }

    /// Force both positions into `bounds`.
    pub fn clamp_to(&mut self, bounds: &Rect<F>) {
        self.pos = bounds.clamp_point(self.pos);
        self.prev_pos = bounds.clamp_point(self.prev_pos);
    }
}
