//! Planar vector type used for node positions, offsets and normals.

use crate::float::Float;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// 2D vector in screen space (x right, y down).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Unit vector at `angle` radians.
    pub fn from_angle(angle: F) -> Self { Vec2 { x: angle.cos(), y: angle.sin() } }

    pub fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }

    /// 2D cross product (returns scalar): self.x * other.y - self.y * other.x
    pub fn cross(self, other: Self) -> F { self.x * other.y - self.y * other.x }

    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    pub fn length_sq(self) -> F { self.dot(self) }

    pub fn length(self) -> F { self.length_sq().sqrt() }

    pub fn distance(self, other: Self) -> F { (self - other).length() }

    pub fn distance_sq(self, other: Self) -> F { (self - other).length_sq() }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Unit vector, or `None` when the length is below `epsilon`.
    pub fn try_normalize(self, epsilon: F) -> Option<Self> {
        let len = self.length();
        if len < epsilon {
            None
        } else {
            Some(self.scale(F::one() / len))
        }
    }

    /// Scale down so the length does not exceed `max`.
    pub fn clamp_length(self, max: F) -> Self {
        let len_sq = self.length_sq();
        if len_sq > max * max && len_sq > F::zero() {
            self.scale(max / len_sq.sqrt())
        } else {
            self
        }
    }

    /// Perpendicular vector (rotated 90 degrees counter-clockwise).
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
