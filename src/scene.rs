//! Desktop snapshots: monitor fallback, desktop span, window filtering and
//! the polling cadence for window snapshots.

use crate::float::Float;
use crate::rect::Rect;
use alloc::vec::Vec as AllocVec;

/// Monitor assumed when the platform reports none.
pub fn fallback_monitor<F: Float>() -> Rect<F> {
    Rect::new(F::zero(), F::zero(), F::from_f32(1920.0), F::from_f32(1080.0))
}

/// `monitors`, or the single fallback monitor when the list is empty.
pub fn monitors_or_fallback<F: Float>(monitors: AllocVec<Rect<F>>) -> AllocVec<Rect<F>> {
    if monitors.is_empty() {
        tracing::warn!("no monitors reported, using fallback geometry");
        alloc::vec![fallback_monitor()]
    } else {
        monitors
    }
}

/// Bounding rectangle of every monitor: the area the overlay must cover.
pub fn desktop_span<F: Float>(monitors: &[Rect<F>]) -> Option<Rect<F>> {
    let (first, rest) = monitors.split_first()?;
    Some(rest.iter().fold(*first, |acc, m| acc.union(m)))
}

/// Which windows count as surfaces for the body.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowFilter<F: Float> {
    pub min_width: F,
    pub min_height: F,
    /// Share of a window's area that must lie on a single monitor.
    pub min_visible_fraction: F,
    pub max_windows: usize,
}

impl<F: Float> Default for WindowFilter<F> {
    fn default() -> Self {
        WindowFilter {
            min_width: F::from_f32(50.0),
            min_height: F::from_f32(10.0),
            min_visible_fraction: F::from_f32(0.2),
            max_windows: 30,
        }
    }
}

impl<F: Float> WindowFilter<F> {
    pub fn accepts(&self, window: &Rect<F>, monitors: &[Rect<F>]) -> bool {
        if window.width < self.min_width || window.height < self.min_height {
            return false;
        }
        let area = window.area();
        area > F::zero()
            && monitors
                .iter()
                .any(|m| window.intersection_area(m) >= area * self.min_visible_fraction)
    }

    /// Keep accepted windows in their original order, up to `max_windows`.
    pub fn apply(&self, windows: &[Rect<F>], monitors: &[Rect<F>]) -> AllocVec<Rect<F>> {
        windows
            .iter()
            .filter(|w| self.accepts(w, monitors))
            .take(self.max_windows)
            .copied()
            .collect()
    }
}

/// Window polling interval: grows while snapshots repeat, snaps back to the
/// minimum as soon as something moves.
#[derive(Clone, Debug, PartialEq)]
pub struct PollBackoff<F: Float> {
    pub min_interval: F,
    pub max_interval: F,
    pub factor: F,
    interval: F,
}

impl<F: Float> PollBackoff<F> {
    pub fn new(min_interval: F, max_interval: F, factor: F) -> Self {
        PollBackoff { min_interval, max_interval, factor, interval: min_interval }
    }

    /// Seconds until the next poll.
    pub fn interval(&self) -> F {
        self.interval
    }

    /// Record a poll result and return the next interval.
    pub fn record(&mut self, changed: bool) -> F {
        self.interval = if changed {
            self.min_interval
        } else {
            (self.interval * self.factor).min(self.max_interval)
        };
        self.interval
    }
}

impl<F: Float> Default for PollBackoff<F> {
    fn default() -> Self {
        Self::new(F::from_f32(0.25), F::from_f32(2.0), F::two())
    }
}
