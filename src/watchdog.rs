//! Coarse safety net: respawn a body that has left every monitor.

use crate::float::Float;
use crate::rect::Rect;
use crate::vec::Vec2;

/// Checks the centroid once per `interval` of accumulated frame time.
#[derive(Clone, Debug, PartialEq)]
pub struct Watchdog<F: Float> {
    /// Seconds between checks. Default: 1.
    pub interval: F,
    /// How far outside a monitor still counts as on it. Default: 100.
    pub margin: F,
    elapsed: F,
}

impl<F: Float> Watchdog<F> {
    pub fn new(interval: F, margin: F) -> Self {
        Watchdog { interval, margin, elapsed: F::zero() }
    }

    /// True when `centroid` is outside every monitor grown by the margin.
    /// An empty monitor list never counts as lost.
    pub fn is_lost(&self, centroid: Vec2<F>, monitors: &[Rect<F>]) -> bool {
        !monitors.is_empty() && !monitors.iter().any(|m| m.expand(self.margin).contains(centroid))
    }

    /// Accumulate `dt`; on each elapsed interval report whether the body is
    /// lost.
    pub fn tick(&mut self, dt: F, centroid: Vec2<F>, monitors: &[Rect<F>]) -> bool {
        self.elapsed += dt.max(F::zero());
        if self.elapsed < self.interval {
            return false;
        }
        self.elapsed = F::zero();
        self.is_lost(centroid, monitors)
    }
}

impl<F: Float> Default for Watchdog<F> {
    fn default() -> Self {
        Self::new(F::one(), F::from_f32(100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_checks_on_interval() {
        let monitors = [Rect::new(0.0f32, 0.0, 1920.0, 1080.0)];
        let far = Vec2::new(5000.0, 5000.0);
        let mut dog = Watchdog::default();
        assert!(!dog.tick(0.5, far, &monitors));
        assert!(dog.tick(0.5, far, &monitors));
        assert!(!dog.tick(0.1, far, &monitors));
    }

    #[test]
    fn margin_tolerates_small_excursions() {
        let monitors = [Rect::new(0.0f32, 0.0, 1920.0, 1080.0)];
        let dog = Watchdog::default();
        assert!(!dog.is_lost(Vec2::new(-50.0, 500.0), &monitors));
        assert!(dog.is_lost(Vec2::new(-150.0, 500.0), &monitors));
        assert!(!dog.is_lost(Vec2::new(-150.0, 500.0), &[]));
    }
}
