//! Behavior state machine: which force generator drives the body.
//!
//! Each variant carries only the bookkeeping its mode needs, and
//! [`Behavior::transition`] is the single place that picks the next variant.

use crate::config::BodyConfig;
use crate::float::Float;
use crate::rect::{self, Rect};
use crate::vec::Vec2;
use rand::Rng;

/// One of the four faces of a window, as seen from outside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Unit vector along which walking on this edge moves (positive direction).
    pub fn axis<F: Float>(self) -> Vec2<F> {
        match self {
            Edge::Top | Edge::Bottom => Vec2::new(F::one(), F::zero()),
            Edge::Left | Edge::Right => Vec2::new(F::zero(), F::one()),
        }
    }

    /// Unit vector pointing away from the window.
    pub fn outward<F: Float>(self) -> Vec2<F> {
        match self {
            Edge::Top => Vec2::new(F::zero(), -F::one()),
            Edge::Bottom => Vec2::new(F::zero(), F::one()),
            Edge::Left => Vec2::new(-F::one(), F::zero()),
            Edge::Right => Vec2::new(F::one(), F::zero()),
        }
    }
}

/// Direction of travel along an edge's axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    /// Increasing x (Top/Bottom) or increasing y (Left/Right).
    Forward,
    Backward,
}

impl Heading {
    pub fn sign<F: Float>(self) -> F {
        match self {
            Heading::Forward => F::one(),
            Heading::Backward => -F::one(),
        }
    }
}

/// Corner table: the edge and heading taken when a walk runs off the end of
/// `edge`. Walks go around the outside of the window without reversing.
pub fn turn_corner(edge: Edge, heading: Heading) -> (Edge, Heading) {
    use Edge::*;
    use Heading::*;
    match (edge, heading) {
        (Top, Forward) => (Right, Forward),
        (Right, Forward) => (Bottom, Backward),
        (Bottom, Backward) => (Left, Backward),
        (Left, Backward) => (Top, Forward),
        (Top, Backward) => (Left, Forward),
        (Left, Forward) => (Bottom, Forward),
        (Bottom, Forward) => (Right, Backward),
        (Right, Backward) => (Top, Backward),
    }
}

/// True once the centroid has passed the walkable extent of `edge`.
pub fn at_corner<F: Float>(window: &Rect<F>, edge: Edge, heading: Heading, centroid: Vec2<F>, radius: F) -> bool {
    let (coord, lo, hi) = match edge {
        Edge::Top | Edge::Bottom => (centroid.x, window.left(), window.right()),
        Edge::Left | Edge::Right => (centroid.y, window.top(), window.bottom()),
    };
    match heading {
        Heading::Forward => coord > hi - radius,
        Heading::Backward => coord < lo + radius,
    }
}

/// Clamp into `[lo, hi]`, or the midpoint when the span is too short.
fn span_clamp<F: Float>(v: F, lo: F, hi: F) -> F {
    if lo > hi {
        (lo + hi) * F::half()
    } else {
        v.clamp(lo, hi)
    }
}

/// Centroid position for a body of `radius` resting just outside `edge`,
/// as close to `centroid` as the edge's span allows.
pub fn anchor<F: Float>(window: &Rect<F>, edge: Edge, centroid: Vec2<F>, radius: F) -> Vec2<F> {
    let along_x = span_clamp(centroid.x, window.left() + radius, window.right() - radius);
    let along_y = span_clamp(centroid.y, window.top() + radius, window.bottom() - radius);
    match edge {
        Edge::Top => Vec2::new(along_x, window.top() - radius),
        Edge::Bottom => Vec2::new(along_x, window.bottom() + radius),
        Edge::Left => Vec2::new(window.left() - radius, along_y),
        Edge::Right => Vec2::new(window.right() + radius, along_y),
    }
}

/// Edge whose anchor is closest to `centroid`.
pub fn nearest_edge<F: Float>(window: &Rect<F>, centroid: Vec2<F>, radius: F) -> Edge {
    let mut best = (Edge::Top, anchor(window, Edge::Top, centroid, radius).distance_sq(centroid));
    for edge in &Edge::ALL[1..] {
        let d = anchor(window, *edge, centroid, radius).distance_sq(centroid);
        if d < best.1 {
            best = (*edge, d);
        }
    }
    best.0
}

/// Pick where to float: the nearest of the four anchors of `window` that
/// lies within `monitor` shrunk by `radius`.
pub fn float_target<F: Float>(window: &Rect<F>, monitor: &Rect<F>, centroid: Vec2<F>, radius: F) -> Option<(Vec2<F>, Edge)> {
    let reachable = monitor.expand(-radius);
    let mut best: Option<(Vec2<F>, Edge, F)> = None;
    for edge in Edge::ALL {
        let target = anchor(window, edge, centroid, radius);
        if !reachable.contains(target) {
            continue;
        }
        let d = target.distance_sq(centroid);
        match best {
            Some((_, _, bd)) if bd <= d => {}
            _ => best = Some((target, edge, d)),
        }
    }
    best.map(|(t, e, _)| (t, e))
}

/// Pointer bookkeeping while the body is held.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Drag<F: Float> {
    /// Pointer position minus centroid at grab time.
    pub grab_offset: Vec2<F>,
    /// Latest pointer position.
    pub pointer: Vec2<F>,
    /// Pointer position as of the previous tick.
    pub last_pointer: Vec2<F>,
    /// Pointer displacement over the previous tick.
    pub pointer_velocity: Vec2<F>,
    /// Node closest to the grab point.
    pub grabbed: usize,
}

impl<F: Float> Drag<F> {
    /// Pointer motion to turn into a throw: movement not yet seen by a tick,
    /// or else the last tick's movement.
    pub fn release_motion(&self) -> Vec2<F> {
        let pending = self.pointer - self.last_pointer;
        if pending.length_sq() > F::zero() {
            pending
        } else {
            self.pointer_velocity
        }
    }
}

/// The body's current behavior.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Behavior<F: Float> {
    /// Resting; clings to `edge` when one is known.
    Idle { edge: Option<Edge> },
    /// Translating along an edge of the nearest window.
    Walking { edge: Edge, heading: Heading, speed: F },
    /// Gliding to `target` outside `edge` of `window`; gives up when `timer`
    /// runs out.
    Floating { target: Vec2<F>, edge: Edge, window: Rect<F>, timer: F },
    /// Held by the pointer.
    Dragging(Drag<F>),
    /// Thrown; settles once `cooldown` has elapsed and motion has died down.
    Free { cooldown: F },
}

/// Variant tag without payload, for observers and logs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Walking,
    Floating,
    Dragging,
    Free,
}

/// Post-step facts the transition function decides on.
pub struct Context<'a, F: Float> {
    pub centroid: Vec2<F>,
    pub radius: F,
    pub windows: &'a [Rect<F>],
    pub monitor: &'a Rect<F>,
    /// Mean squared per-node displacement this tick.
    pub kinetic_energy: F,
    pub config: &'a BodyConfig<F>,
}

impl<F: Float> Behavior<F> {
    pub fn mode(&self) -> Mode {
        match self {
            Behavior::Idle { .. } => Mode::Idle,
            Behavior::Walking { .. } => Mode::Walking,
            Behavior::Floating { .. } => Mode::Floating,
            Behavior::Dragging(_) => Mode::Dragging,
            Behavior::Free { .. } => Mode::Free,
        }
    }

    /// Idle and Walking cling to windows: no gravity, edge adhesion instead.
    pub fn clings(&self) -> bool {
        matches!(self, Behavior::Idle { .. } | Behavior::Walking { .. })
    }

    /// Edge currently tracked for adhesion, if any.
    pub fn tracked_edge(&self) -> Option<Edge> {
        match self {
            Behavior::Idle { edge } => *edge,
            Behavior::Walking { edge, .. } => Some(*edge),
            _ => None,
        }
    }

    /// Decide the next behavior, or `None` to stay. A roll is drawn on every
    /// call whatever the mode, so runs with the same seed stay in lockstep.
    pub fn transition<R: Rng>(&self, ctx: &Context<'_, F>, rng: &mut R) -> Option<Behavior<F>> {
        let roll = F::from_f32(rng.gen::<f32>());
        let cfg = ctx.config;
        let nearest = rect::nearest(ctx.windows, ctx.centroid).map(|i| &ctx.windows[i]);

        match *self {
            Behavior::Idle { edge } => {
                let window = nearest?;
                if roll >= cfg.walk_chance {
                    return None;
                }
                let edge = edge.unwrap_or_else(|| nearest_edge(window, ctx.centroid, ctx.radius));
                let heading = if rng.gen::<bool>() { Heading::Forward } else { Heading::Backward };
                Some(Behavior::Walking { edge, heading, speed: cfg.walk_speed })
            }
            Behavior::Walking { edge, heading, speed } => {
                let window = match nearest {
                    Some(w) => w,
                    None => return Some(Behavior::Idle { edge: None }),
                };
                if roll < cfg.rest_chance {
                    return Some(Behavior::Idle { edge: Some(edge) });
                }
                if at_corner(window, edge, heading, ctx.centroid, ctx.radius) {
                    let (edge, heading) = turn_corner(edge, heading);
                    return Some(Behavior::Walking { edge, heading, speed });
                }
                None
            }
            Behavior::Floating { target, edge, timer, .. } => {
                if ctx.centroid.distance(target) <= cfg.arrive_distance {
                    Some(Behavior::Idle { edge: Some(edge) })
                } else if timer <= F::zero() || nearest.is_none() {
                    Some(Behavior::Idle { edge: None })
                } else {
                    None
                }
            }
            Behavior::Dragging(_) => None,
            Behavior::Free { cooldown } => {
                if cooldown > F::zero() || ctx.kinetic_energy >= cfg.rest_energy {
                    return None;
                }
                let next = nearest
                    .and_then(|w| {
                        float_target(w, ctx.monitor, ctx.centroid, ctx.radius)
                            .map(|(target, edge)| Behavior::Floating { target, edge, window: *w, timer: cfg.float_timeout })
                    })
                    .unwrap_or(Behavior::Idle { edge: None });
                Some(next)
            }
        }
    }
}
