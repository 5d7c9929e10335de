//! A pressurized soft-body desktop companion.
//!
//! `squish` simulates a closed ring of Verlet nodes that floats over the
//! desktop, clings to and walks along window edges, and can be grabbed and
//! thrown with the pointer. Monitor and window rectangles come in as plain
//! snapshots; node positions come out for rendering and hit testing.
//!
//! # Features
//!
//! - **Soft body**: 14-node ring with edge, skip and diameter springs plus
//!   area-based pressure and a gentle breathing pulse
//! - **Collisions**: monitor containment, windows as cavities or obstacles,
//!   and a hard clamp that guarantees containment
//! - **Behavior**: Idle, Walking, Floating, Dragging and Free as an explicit
//!   state machine
//! - **Intents**: drag events are queued and applied between steps
//! - **Observable**: monitor steps via the `StepObserver` trait and `tracing`
//! - **`no_std` compatible**: works in WASM webviews

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod rect;
pub mod geometry;
pub mod node;
pub mod constraint;
pub mod collision;
pub mod behavior;
pub mod intent;
pub mod softbody;
pub mod scene;
pub mod watchdog;
pub mod companion;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use rect::Rect;
pub use node::Node;
pub use constraint::{Spring, SpringKind};
pub use collision::{Face, WallMode};
pub use behavior::{Behavior, Drag, Edge, Heading, Mode};
pub use intent::Intent;
pub use softbody::{Body, NODE_COUNT};
pub use scene::{PollBackoff, WindowFilter};
pub use watchdog::Watchdog;
pub use companion::Companion;
pub use config::BodyConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::BodyError;
