//! Step observer trait for watching the per-frame pipeline.

use crate::behavior::Mode;

/// Hooks into [`Body::step`](crate::Body::step).
///
/// Implement this to debug, visualize or profile the solver. All methods
/// have default no-op implementations.
pub trait StepObserver {
    /// Called after all nodes have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each constraint relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when the behavior changes mode or tracked edge, including a
    /// walk turning a corner (`Walking` to `Walking`).
    fn on_transition(&mut self, _from: Mode, _to: Mode) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
