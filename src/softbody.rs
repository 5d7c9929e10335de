//! The companion body: a pressurized ring of Verlet nodes and its per-frame
//! step.

use crate::behavior::{self, Behavior, Context, Drag, Edge, Mode};
use crate::collision;
use crate::config::BodyConfig;
use crate::constraint::{Spring, SpringKind};
use crate::error::BodyError;
use crate::float::Float;
use crate::geometry;
use crate::intent::Intent;
use crate::node::Node;
use crate::observer::StepObserver;
use crate::rect::{self, Rect};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Nodes on the perimeter ring.
pub const NODE_COUNT: usize = 14;

/// A soft body made of a fixed ring of nodes held together by three spring
/// families and an internal pressure.
///
/// Node order is the perimeter winding order and never changes, so the ring
/// can be drawn and hit-tested directly from [`Body::nodes`].
#[derive(Clone, Debug)]
pub struct Body<F: Float> {
    nodes: AllocVec<Node<F>>,
    springs: AllocVec<Spring<F>>,
    normals: AllocVec<Vec2<F>>,
    centroid: Vec2<F>,
    radius: F,
    rest_area: F,
    breath_phase: F,
    pressure: F,
    behavior: Behavior<F>,
    windows: AllocVec<Rect<F>>,
    monitor: Option<Rect<F>>,
    config: BodyConfig<F>,
    rng: SmallRng,
}

impl<F: Float> Body<F> {
    /// Spawn a body resting near the bottom center of `monitor`.
    pub fn spawn(monitor: &Rect<F>, config: BodyConfig<F>) -> Self {
        let radius = config.radius;
        let center = Vec2::new(
            monitor.x + monitor.width * F::half(),
            monitor.bottom() - radius - config.spawn_lift,
        );
        let step = F::two() * F::pi() / F::from_f32(NODE_COUNT as f32);
        let nodes: AllocVec<Node<F>> = (0..NODE_COUNT)
            .map(|i| Node::new(center + Vec2::from_angle(step * F::from_f32(i as f32)).scale(radius)))
            .collect();

        let half = NODE_COUNT / 2;
        let mut springs = AllocVec::with_capacity(NODE_COUNT * 2 + half);
        for i in 0..NODE_COUNT {
            springs.push(Spring::from_nodes(i, (i + 1) % NODE_COUNT, &nodes, config.edge_stiffness, SpringKind::Edge));
        }
        for i in 0..NODE_COUNT {
            springs.push(Spring::from_nodes(i, (i + 2) % NODE_COUNT, &nodes, config.skip_stiffness, SpringKind::Skip));
        }
        for i in 0..half {
            springs.push(Spring::from_nodes(i, i + half, &nodes, config.diameter_stiffness, SpringKind::Diameter));
        }

        let rest_area = geometry::signed_area_by(NODE_COUNT, |i| nodes[i].pos).abs();
        let centroid = geometry::centroid_by(NODE_COUNT, |i| nodes[i].pos);
        tracing::debug!(x = ?centroid.x, y = ?centroid.y, radius = ?radius, "body spawned");

        Body {
            nodes,
            springs,
            normals: alloc::vec![Vec2::zero(); NODE_COUNT],
            centroid,
            radius,
            rest_area,
            breath_phase: F::zero(),
            pressure: config.pressure,
            behavior: Behavior::Idle { edge: None },
            windows: AllocVec::new(),
            monitor: Some(*monitor),
            rng: SmallRng::seed_from_u64(config.seed),
            config,
        }
    }

    /// Spawn with default tuning, optionally overriding the radius.
    pub fn create(monitor: &Rect<F>, radius: Option<F>) -> Self {
        let mut config = BodyConfig::new();
        if let Some(r) = radius {
            config.radius = r;
        }
        Self::spawn(monitor, config)
    }

    /// Spawn after validating `config`.
    pub fn try_spawn(monitor: &Rect<F>, config: BodyConfig<F>) -> Result<Self, BodyError> {
        config.validate()?;
        Ok(Self::spawn(monitor, config))
    }

    /// Replace the window snapshot used from the next step on.
    pub fn set_windows(&mut self, windows: AllocVec<Rect<F>>) {
        self.windows = windows;
    }

    /// Apply a pointer intent. Moves and releases outside a drag are ignored.
    pub fn apply<O: StepObserver>(&mut self, intent: Intent<F>, observer: &mut O) {
        match intent {
            Intent::DragStart(pointer) => {
                let drag = Drag {
                    grab_offset: pointer - self.centroid,
                    pointer,
                    last_pointer: pointer,
                    pointer_velocity: Vec2::zero(),
                    grabbed: self.nearest_node(pointer),
                };
                self.set_behavior(Behavior::Dragging(drag), observer);
            }
            Intent::DragMove(pointer) => match &mut self.behavior {
                Behavior::Dragging(drag) => drag.pointer = pointer,
                _ => tracing::trace!("drag move ignored outside a drag"),
            },
            Intent::DragEnd => {
                let drag = match self.behavior {
                    Behavior::Dragging(drag) => drag,
                    _ => {
                        tracing::trace!("drag end ignored outside a drag");
                        return;
                    }
                };
                let throw = drag
                    .release_motion()
                    .scale(self.config.throw_scale)
                    .clamp_length(self.config.max_throw);
                for n in self.nodes.iter_mut() {
                    n.set_velocity(throw);
                }
                self.set_behavior(Behavior::Free { cooldown: self.config.free_cooldown }, observer);
            }
        }
    }

    /// Advance one frame. With no monitors the body is left untouched.
    pub fn step<O: StepObserver>(&mut self, dt: F, monitors: &[Rect<F>], observer: &mut O) {
        if monitors.is_empty() {
            return;
        }
        let dt = dt.clamp(F::zero(), self.config.max_dt);

        self.breathe(dt);
        let clinging = self.behavior.clings() && !self.windows.is_empty();
        self.drive(dt);
        if clinging {
            self.adhere();
        } else if self.behavior.mode() != Mode::Dragging {
            self.attract();
        }
        self.integrate(dt, clinging);
        observer.on_integrate();

        self.centroid = self.compute_centroid();
        let monitor = match rect::containing_or_nearest(monitors, self.centroid) {
            Some(i) => monitors[i],
            None => return,
        };
        self.relax(&monitor, observer);
        collision::hard_clamp(&mut self.nodes, &monitor);
        self.monitor = Some(monitor);
        self.centroid = self.compute_centroid();

        self.advance_behavior(&monitor, observer);
        observer.on_step_complete();
    }

    fn breathe(&mut self, dt: F) {
        let two_pi = F::two() * F::pi();
        self.breath_phase += dt * self.config.breath_rate;
        if self.breath_phase > two_pi {
            self.breath_phase -= two_pi;
        }
        let swing = F::one() + self.config.breath_amplitude * self.breath_phase.sin();
        self.pressure = self.config.pressure * swing;
    }

    /// Behavior-specific force generators.
    fn drive(&mut self, dt: F) {
        let cfg = &self.config;
        match &mut self.behavior {
            Behavior::Idle { .. } => {}
            Behavior::Walking { edge, heading, speed } => {
                let offset = edge.axis::<F>().scale(heading.sign::<F>() * *speed * dt);
                for n in self.nodes.iter_mut() {
                    n.translate(offset);
                }
            }
            Behavior::Floating { target, timer, .. } => {
                *timer -= dt;
                let offset = (*target - self.centroid).clamp_length(cfg.float_speed * dt);
                for n in self.nodes.iter_mut() {
                    n.set_velocity(Vec2::zero());
                    n.translate(offset);
                }
            }
            Behavior::Dragging(drag) => {
                let moved = drag.pointer - drag.last_pointer;
                let ramp = (moved.length() / cfg.drag_speed_threshold.or_epsilon(F::from_f32(1e-6)))
                    .clamp(F::zero(), F::one());
                let goal = drag.pointer - drag.grab_offset;
                let pull = (goal - self.centroid).scale(cfg.drag_follow * ramp);
                drag.pointer_velocity = moved;
                drag.last_pointer = drag.pointer;
                for n in self.nodes.iter_mut() {
                    n.push(pull);
                }
            }
            Behavior::Free { cooldown } => *cooldown -= dt,
        }
    }

    /// Soft pull toward the tracked window edge. Moves positions and
    /// previous positions together, so it adds no velocity.
    fn adhere(&mut self) {
        let window = match rect::nearest(&self.windows, self.centroid) {
            Some(i) => self.windows[i],
            None => return,
        };
        let edge = self
            .behavior
            .tracked_edge()
            .unwrap_or_else(|| behavior::nearest_edge(&window, self.centroid, self.radius));
        let mut target = behavior::anchor(&window, edge, self.centroid, self.radius);
        if let Some(monitor) = &self.monitor {
            target = monitor.expand(-self.radius).clamp_point(target);
        }
        let offset = (target - self.centroid).scale(self.config.adhesion);
        for n in self.nodes.iter_mut() {
            n.translate(offset);
        }
    }

    /// Gentle pull toward every nearby window, fading to zero at
    /// `attraction_range`.
    fn attract(&mut self) {
        let eps = F::from_f32(1e-6);
        let range = self.config.attraction_range;
        let mut pull = Vec2::zero();
        for w in &self.windows {
            let to = w.clamp_point(self.centroid) - self.centroid;
            let d = to.length();
            if d > eps && d < range {
                pull += to.scale(self.config.attraction * (F::one() - d / range) / d);
            }
        }
        for n in self.nodes.iter_mut() {
            n.push(pull);
        }
    }

    fn integrate(&mut self, dt: F, clinging: bool) {
        let accel = if clinging {
            Vec2::zero()
        } else {
            Vec2::new(F::zero(), self.config.gravity * dt * dt)
        };
        let speed = match self.behavior {
            Behavior::Free { .. } => self.config.max_free_speed,
            _ => self.config.max_speed,
        };
        for n in self.nodes.iter_mut() {
            n.integrate(self.config.damping, accel, speed * dt);
        }
    }

    /// Constraint relaxation: springs, pressure, cursor stick, windows and
    /// monitor, repeated `iterations` times.
    fn relax<O: StepObserver>(&mut self, monitor: &Rect<F>, observer: &mut O) {
        let pointer = match self.behavior {
            Behavior::Dragging(drag) => Some(drag.pointer),
            _ => None,
        };
        let bounce = self.config.bounce;
        for i in 0..self.config.iterations {
            for s in self.springs.iter() {
                s.solve(&mut self.nodes);
            }
            self.apply_pressure();

            let centroid = self.compute_centroid();
            if let Some(p) = pointer {
                collision::cursor_stick(
                    &mut self.nodes,
                    centroid,
                    p,
                    self.config.stick_exponent,
                    self.config.stick_strength,
                );
            }
            collision::resolve_windows(&mut self.nodes, centroid, &self.windows, bounce);
            collision::resolve_bounds(&mut self.nodes, monitor, bounce);
            observer.on_constraint_iteration(i);
        }
    }

    /// Push every node along its outward normal, harder the smaller the
    /// enclosed area is.
    fn apply_pressure(&mut self) {
        let n = self.nodes.len();
        let eps = F::from_f32(1e-6);
        let signed = geometry::signed_area_by(n, |i| self.nodes[i].pos);
        let area = signed.abs().max(F::one());
        let push = (self.pressure * self.rest_area / area).min(self.config.pressure_cap * self.radius);
        let orientation = if signed < F::zero() { -F::one() } else { F::one() };
        let centroid = self.compute_centroid();
        let step = F::two() * F::pi() / F::from_f32(n as f32);

        for i in 0..n {
            let tangent = self.nodes[(i + 1) % n].pos - self.nodes[(i + n - 1) % n].pos;
            // Degenerate neighbors: fall back to radial, then to the spawn angle.
            self.normals[i] = Vec2::new(tangent.y, -tangent.x)
                .scale(orientation)
                .try_normalize(eps)
                .or_else(|| (self.nodes[i].pos - centroid).try_normalize(eps))
                .unwrap_or_else(|| Vec2::from_angle(step * F::from_f32(i as f32)));
        }
        for (node, normal) in self.nodes.iter_mut().zip(self.normals.iter()) {
            node.push(normal.scale(push));
        }
    }

    fn advance_behavior<O: StepObserver>(&mut self, monitor: &Rect<F>, observer: &mut O) {
        let ctx = Context {
            centroid: self.centroid,
            radius: self.radius,
            windows: &self.windows,
            monitor,
            kinetic_energy: self.kinetic_energy(),
            config: &self.config,
        };
        if let Some(next) = self.behavior.transition(&ctx, &mut self.rng) {
            self.set_behavior(next, observer);
        }
    }

    fn set_behavior<O: StepObserver>(&mut self, next: Behavior<F>, observer: &mut O) {
        let from = self.behavior;
        self.behavior = next;
        if let (Behavior::Floating { edge, window, .. }, Behavior::Idle { edge: Some(_) }) = (from, next) {
            self.snap_flush(&window, edge);
        }
        if from.mode() == next.mode() && from.tracked_edge() == next.tracked_edge() {
            tracing::trace!(?next, "behavior updated");
            return;
        }
        tracing::debug!(from = ?from.mode(), to = ?next.mode(), edge = ?next.tracked_edge(), "behavior transition");
        observer.on_transition(from.mode(), next.mode());
    }

    /// Move the body so its extreme node touches `edge` of `window`, and
    /// stop it.
    fn snap_flush(&mut self, window: &Rect<F>, edge: Edge) {
        let bounds = match geometry::bounding_box(&self.positions()) {
            Some(b) => b,
            None => return,
        };
        let offset = match edge {
            Edge::Top => Vec2::new(F::zero(), window.top() - bounds.bottom()),
            Edge::Bottom => Vec2::new(F::zero(), window.bottom() - bounds.top()),
            Edge::Left => Vec2::new(window.left() - bounds.right(), F::zero()),
            Edge::Right => Vec2::new(window.right() - bounds.left(), F::zero()),
        };
        for n in self.nodes.iter_mut() {
            n.translate(offset);
            n.set_velocity(Vec2::zero());
        }
        if let Some(monitor) = &self.monitor {
            collision::hard_clamp(&mut self.nodes, monitor);
        }
        self.centroid = self.compute_centroid();
    }

    fn compute_centroid(&self) -> Vec2<F> {
        geometry::centroid_by(self.nodes.len(), |i| self.nodes[i].pos)
    }

    fn nearest_node(&self, point: Vec2<F>) -> usize {
        let mut best = (0, self.nodes[0].pos.distance_sq(point));
        for (i, n) in self.nodes.iter().enumerate().skip(1) {
            let d = n.pos.distance_sq(point);
            if d < best.1 {
                best = (i, d);
            }
        }
        best.0
    }

    /// Mean squared per-node displacement over the last tick.
    pub fn kinetic_energy(&self) -> F {
        let mut sum = F::zero();
        for n in &self.nodes {
            sum += n.velocity_raw().length_sq();
        }
        sum / F::from_f32(self.nodes.len() as f32)
    }

    /// Enclosed area (shoelace).
    pub fn area(&self) -> F {
        geometry::signed_area_by(self.nodes.len(), |i| self.nodes[i].pos).abs()
    }

    /// Point-in-body test against the ring, optionally padded outward.
    pub fn contains(&self, point: Vec2<F>, padding: F) -> bool {
        geometry::point_in_polygon_padded(&self.positions(), point, padding)
    }

    /// Bounding box of the ring grown by `padding`: the interactive region
    /// outside which the overlay lets clicks through.
    pub fn hit_region(&self, padding: F) -> Rect<F> {
        geometry::bounding_box(&self.positions())
            .map(|b| b.expand(padding))
            .unwrap_or_default()
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.nodes.iter().map(|n| n.pos).collect()
    }

    pub fn nodes(&self) -> &[Node<F>] {
        &self.nodes
    }

    /// Mutable node access. The ring's length cannot change through it.
    pub fn nodes_mut(&mut self) -> &mut [Node<F>] {
        &mut self.nodes
    }

    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    /// Centroid as of the end of the last step.
    pub fn centroid(&self) -> Vec2<F> {
        self.centroid
    }

    pub fn radius(&self) -> F {
        self.radius
    }

    pub fn behavior(&self) -> &Behavior<F> {
        &self.behavior
    }

    pub fn mode(&self) -> Mode {
        self.behavior.mode()
    }

    /// Node closest to the grab point while dragging.
    pub fn grabbed_node(&self) -> Option<usize> {
        match self.behavior {
            Behavior::Dragging(drag) => Some(drag.grabbed),
            _ => None,
        }
    }

    pub fn windows(&self) -> &[Rect<F>] {
        &self.windows
    }

    /// Monitor the last step resolved the body onto.
    pub fn monitor(&self) -> Option<&Rect<F>> {
        self.monitor.as_ref()
    }

    /// Target pressure after breathing modulation.
    pub fn pressure(&self) -> F {
        self.pressure
    }

    pub fn config(&self) -> &BodyConfig<F> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;

    fn monitor() -> Rect<f32> {
        Rect::new(0.0, 0.0, 1920.0, 1080.0)
    }

    #[test]
    fn spring_families_counted() {
        let body = Body::create(&monitor(), None);
        let count = |k: SpringKind| body.springs().iter().filter(|s| s.kind == k).count();
        assert_eq!(count(SpringKind::Edge), NODE_COUNT);
        assert_eq!(count(SpringKind::Skip), NODE_COUNT);
        assert_eq!(count(SpringKind::Diameter), NODE_COUNT / 2);
    }

    #[test]
    fn ring_winds_positively() {
        let body = Body::create(&monitor(), None);
        assert!(geometry::signed_area(&body.positions()) > 0.0);
    }

    #[test]
    fn drag_start_grabs_nearest_node() {
        let mut body = Body::create(&monitor(), None);
        let node3 = body.nodes()[3].pos;
        body.apply(Intent::DragStart(node3), &mut NoOpStepObserver);
        assert_eq!(body.mode(), Mode::Dragging);
        assert_eq!(body.grabbed_node(), Some(3));
    }

    #[test]
    fn stray_release_is_ignored() {
        let mut body = Body::create(&monitor(), None);
        body.apply(Intent::DragEnd, &mut NoOpStepObserver);
        body.apply(Intent::DragMove(Vec2::new(5.0, 5.0)), &mut NoOpStepObserver);
        assert_eq!(body.mode(), Mode::Idle);
    }

    #[test]
    fn breathing_modulates_pressure() {
        let mut body = Body::create(&monitor(), None);
        let monitors = [monitor()];
        body.step(1.0 / 60.0, &monitors, &mut NoOpStepObserver);
        let base = body.config().pressure;
        let p = body.pressure();
        assert!(p > base && p <= base * 1.05 + 1e-6, "pressure = {}", p);
    }
}
