//! Floating-point abstraction so the engine runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Scalar operations the body simulation needs.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the crate stays
/// `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Default
    + core::fmt::Debug
{
    fn zero() -> Self;
    fn one() -> Self;
    fn half() -> Self;
    fn two() -> Self;
    fn pi() -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn abs(self) -> Self;
    /// `self` raised to an integer power.
    fn powi(self, n: i32) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    fn is_finite(self) -> bool;

    /// Clamp self to [min, max]. When `min > max` the result is `min`.
    fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    /// `self`, or `epsilon` when `|self|` is below it. Keeps divisions finite.
    fn or_epsilon(self, epsilon: Self) -> Self {
        if self.abs() < epsilon {
            epsilon
        } else {
            self
        }
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn powi(self, n: i32) -> Self { libm::powf(self, n as f32) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn powi(self, n: i32) -> Self { libm::pow(self, n as f64) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}
