//! Frame-driver façade: owns the body, the desktop snapshot and the queue of
//! pointer intents.

use crate::config::BodyConfig;
use crate::error::BodyError;
use crate::float::Float;
use crate::intent::Intent;
use crate::observer::StepObserver;
use crate::rect::Rect;
use crate::scene::WindowFilter;
use crate::softbody::Body;
use crate::vec::Vec2;
use crate::watchdog::Watchdog;
use alloc::collections::VecDeque;
use alloc::vec::Vec as AllocVec;

/// Owns one body for the frame loop.
///
/// UI handlers only enqueue [`Intent`]s; [`Companion::tick`] applies them in
/// order before stepping, so an event can never land halfway through a step.
#[derive(Clone, Debug)]
pub struct Companion<F: Float> {
    body: Body<F>,
    monitors: AllocVec<Rect<F>>,
    intents: VecDeque<Intent<F>>,
    watchdog: Watchdog<F>,
    filter: WindowFilter<F>,
    config: BodyConfig<F>,
    respawns: usize,
}

impl<F: Float> Companion<F> {
    /// Spawn a body on the first monitor.
    pub fn try_new(monitors: AllocVec<Rect<F>>, config: BodyConfig<F>) -> Result<Self, BodyError> {
        let primary = monitors.first().ok_or(BodyError::NoMonitor)?;
        let body = Body::try_spawn(primary, config.clone())?;
        Ok(Companion {
            body,
            monitors,
            intents: VecDeque::new(),
            watchdog: Watchdog::default(),
            filter: WindowFilter::default(),
            config,
            respawns: 0,
        })
    }

    pub fn with_watchdog(mut self, watchdog: Watchdog<F>) -> Self {
        self.watchdog = watchdog;
        self
    }

    pub fn with_window_filter(mut self, filter: WindowFilter<F>) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the monitor snapshot. An empty list freezes the body; a body
    /// stranded on a monitor that went away is respawned on the first one.
    pub fn set_monitors(&mut self, monitors: AllocVec<Rect<F>>) {
        self.monitors = monitors;
        if self.watchdog.is_lost(self.body.centroid(), &self.monitors) {
            self.respawn();
        }
    }

    /// Filter and install a window snapshot. Returns whether it differs from
    /// the previous one, for poll backoff.
    pub fn set_windows(&mut self, windows: &[Rect<F>]) -> bool {
        let filtered = self.filter.apply(windows, &self.monitors);
        let changed = filtered.as_slice() != self.body.windows();
        if changed {
            tracing::trace!(count = filtered.len(), "window snapshot changed");
            self.body.set_windows(filtered);
        }
        changed
    }

    pub fn drag_start(&mut self, x: F, y: F) {
        self.intents.push_back(Intent::DragStart(Vec2::new(x, y)));
    }

    /// Queue a pointer move. Consecutive moves collapse into the latest one,
    /// so a drag held while frozen keeps the queue short.
    pub fn drag_move(&mut self, x: F, y: F) {
        let pointer = Vec2::new(x, y);
        match self.intents.back_mut() {
            Some(Intent::DragMove(last)) => *last = pointer,
            _ => self.intents.push_back(Intent::DragMove(pointer)),
        }
    }

    pub fn drag_end(&mut self) {
        self.intents.push_back(Intent::DragEnd);
    }

    /// Apply queued intents, step the body, then run the respawn check.
    /// Without monitors nothing happens and intents stay queued.
    pub fn tick<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        if self.monitors.is_empty() {
            return;
        }
        while let Some(intent) = self.intents.pop_front() {
            self.body.apply(intent, observer);
        }
        self.body.step(dt, &self.monitors, observer);

        if self.watchdog.tick(dt, self.body.centroid(), &self.monitors) {
            self.respawn();
        }
    }

    fn respawn(&mut self) {
        let lost_at = self.body.centroid();
        tracing::warn!(x = ?lost_at.x, y = ?lost_at.y, "body left every monitor, respawning");
        let windows = self.body.windows().to_vec();
        self.body = Body::spawn(&self.monitors[0], self.config.clone());
        self.body.set_windows(windows);
        self.respawns += 1;
    }

    pub fn body(&self) -> &Body<F> {
        &self.body
    }

    /// Direct body access for tools and tests; bypasses the intent queue.
    pub fn body_mut(&mut self) -> &mut Body<F> {
        &mut self.body
    }

    pub fn monitors(&self) -> &[Rect<F>] {
        &self.monitors
    }

    pub fn pending_intents(&self) -> usize {
        self.intents.len()
    }

    /// How many times the watchdog has replaced the body.
    pub fn respawns(&self) -> usize {
        self.respawns
    }
}
