//! Pointer intents submitted by the UI layer between frames.

use crate::float::Float;
use crate::vec::Vec2;

/// A drag gesture event. Intents are queued and applied at the start of the
/// next step, never in the middle of one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Intent<F: Float> {
    /// Pointer pressed over the body at this desktop position.
    DragStart(Vec2<F>),
    /// Pointer moved while held.
    DragMove(Vec2<F>),
    /// Pointer released; the body is thrown with the last pointer motion.
    DragEnd,
}
