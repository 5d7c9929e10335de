//! Axis-aligned rectangles for monitors and windows.

use crate::float::Float;
use crate::vec::Vec2;

/// Axis-aligned bounds `(x, y, width, height)` in desktop pixels.
///
/// Monitors and windows both arrive as plain snapshots of this type; the
/// engine never tracks rectangle identity between ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<F: Float> {
    pub x: F,
    pub y: F,
    pub width: F,
    pub height: F,
}

impl<F: Float> Rect<F> {
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Rect { x, y, width, height }
    }

    pub fn left(&self) -> F { self.x }
    pub fn right(&self) -> F { self.x + self.width }
    pub fn top(&self) -> F { self.y }
    pub fn bottom(&self) -> F { self.y + self.height }

    pub fn area(&self) -> F {
        self.width.max(F::zero()) * self.height.max(F::zero())
    }

    /// Inclusive containment (points on the boundary count as inside).
    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Exclusive containment (points on the boundary count as outside).
    pub fn contains_strict(&self, p: Vec2<F>) -> bool {
        p.x > self.left() && p.x < self.right() && p.y > self.top() && p.y < self.bottom()
    }

    /// Grow every side by `margin` (shrink when negative).
    pub fn expand(&self, margin: F) -> Self {
        Rect {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * F::two(),
            height: self.height + margin * F::two(),
        }
    }

    /// Closest point of the rectangle (boundary or interior) to `p`.
    pub fn clamp_point(&self, p: Vec2<F>) -> Vec2<F> {
        Vec2::new(p.x.clamp(self.left(), self.right()), p.y.clamp(self.top(), self.bottom()))
    }

    /// Distance from `p` to the rectangle; zero when `p` is inside.
    pub fn distance_to(&self, p: Vec2<F>) -> F {
        p.distance(self.clamp_point(p))
    }

    /// Overlap area with `other`.
    pub fn intersection_area(&self, other: &Rect<F>) -> F {
        let w = self.right().min(other.right()) - self.left().max(other.left());
        let h = self.bottom().min(other.bottom()) - self.top().max(other.top());
        w.max(F::zero()) * h.max(F::zero())
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect<F>) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect { x: left, y: top, width: right - left, height: bottom - top }
    }
}

/// Index of the rectangle containing `p`, or else the one nearest to it.
///
/// Returns `None` only for an empty slice.
pub fn containing_or_nearest<F: Float>(rects: &[Rect<F>], p: Vec2<F>) -> Option<usize> {
    rects.iter().position(|r| r.contains(p)).or_else(|| nearest(rects, p))
}

/// Index of the rectangle nearest to `p` (zero distance when inside).
pub fn nearest<F: Float>(rects: &[Rect<F>], p: Vec2<F>) -> Option<usize> {
    let mut best: Option<(usize, F)> = None;
    for (i, r) in rects.iter().enumerate() {
        let d = r.distance_to(p);
        match best {
            Some((_, bd)) if bd <= d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}
