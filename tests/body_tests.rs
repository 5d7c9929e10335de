use squish::geometry;
use squish::{Body, Intent, Mode, NoOpStepObserver, Rect, SpringKind, Vec2, NODE_COUNT};

const DT: f64 = 1.0 / 60.0;

fn monitor() -> Rect<f64> {
    Rect::new(0.0, 0.0, 1920.0, 1080.0)
}

fn assert_inside(body: &Body<f64>, bounds: &Rect<f64>) {
    for (i, n) in body.nodes().iter().enumerate() {
        assert!(
            bounds.contains(n.pos),
            "node {} at ({}, {}) escaped {:?}",
            i,
            n.pos.x,
            n.pos.y,
            bounds,
        );
        assert!(
            bounds.contains(n.prev_pos),
            "node {} previous position ({}, {}) escaped {:?}",
            i,
            n.prev_pos.x,
            n.prev_pos.y,
            bounds,
        );
    }
}

#[test]
fn spawns_near_bottom_center() {
    let body = Body::create(&monitor(), None);
    let c = body.centroid();
    assert!((c.x - 960.0).abs() < 1e-3, "centroid x = {}", c.x);
    assert!((c.y - 1012.0).abs() < 1e-3, "centroid y = {}", c.y);
    assert_eq!(body.nodes().len(), NODE_COUNT);
    assert_eq!(body.mode(), Mode::Idle);
    assert_inside(&body, &monitor());
}

#[test]
fn rest_lengths_captured_from_spawn_shape() {
    let body = Body::create(&monitor(), Some(30.0));
    let chord = 2.0 * 30.0 * (core::f64::consts::PI / NODE_COUNT as f64).sin();
    for s in body.springs() {
        match s.kind {
            SpringKind::Edge => assert!((s.rest_length - chord).abs() < 1e-9),
            SpringKind::Diameter => assert!((s.rest_length - 60.0).abs() < 1e-9),
            SpringKind::Skip => assert!(s.rest_length > chord && s.rest_length < 60.0),
        }
    }
    assert_eq!(body.springs().len(), NODE_COUNT * 2 + NODE_COUNT / 2);
}

#[test]
fn empty_monitor_list_leaves_body_untouched() {
    let mut body = Body::create(&monitor(), None);
    let before = body.positions();
    body.step(DT, &[], &mut NoOpStepObserver);
    assert_eq!(body.positions(), before);
}

#[test]
fn stays_on_monitor_through_wild_drags() {
    let mut body = Body::create(&monitor(), None);
    let monitors = [monitor()];
    let c = body.centroid();
    body.apply(Intent::DragStart(c), &mut NoOpStepObserver);

    let targets = [
        Vec2::new(5000.0, -3000.0),
        Vec2::new(-800.0, 400.0),
        Vec2::new(960.0, 2400.0),
        Vec2::new(1919.0, 1.0),
    ];
    for t in targets {
        body.apply(Intent::DragMove(t), &mut NoOpStepObserver);
        for _ in 0..30 {
            body.step(DT, &monitors, &mut NoOpStepObserver);
            assert_inside(&body, &monitor());
        }
    }
    body.apply(Intent::DragEnd, &mut NoOpStepObserver);
    for _ in 0..300 {
        body.step(DT, &monitors, &mut NoOpStepObserver);
        assert_inside(&body, &monitor());
    }
}

#[test]
fn throw_velocity_is_capped() {
    let mut body = Body::create(&monitor(), None);
    let c = body.centroid();
    body.apply(Intent::DragStart(c), &mut NoOpStepObserver);
    body.apply(Intent::DragMove(c + Vec2::new(1000.0, -1000.0)), &mut NoOpStepObserver);
    body.apply(Intent::DragEnd, &mut NoOpStepObserver);

    assert_eq!(body.mode(), Mode::Free);
    let max_throw = body.config().max_throw;
    for n in body.nodes() {
        assert!(n.velocity_raw().length() <= max_throw + 1e-9);
    }
}

#[test]
fn thrown_body_settles_to_idle_without_windows() {
    let mut body = Body::create(&monitor(), None);
    let monitors = [monitor()];
    let c = body.centroid();
    body.apply(Intent::DragStart(c), &mut NoOpStepObserver);
    body.apply(Intent::DragMove(c + Vec2::new(30.0, -30.0)), &mut NoOpStepObserver);
    body.apply(Intent::DragEnd, &mut NoOpStepObserver);
    assert_eq!(body.mode(), Mode::Free);

    let mut ticks = 0;
    while body.mode() == Mode::Free && ticks < 1200 {
        body.step(DT, &monitors, &mut NoOpStepObserver);
        ticks += 1;
    }
    assert_eq!(body.mode(), Mode::Idle, "still free after {} ticks", ticks);
}

#[test]
fn falling_body_loses_energy_on_the_floor() {
    let mut body = Body::create(&monitor(), None);
    let monitors = [monitor()];
    body.apply(Intent::DragStart(body.centroid()), &mut NoOpStepObserver);
    body.apply(Intent::DragEnd, &mut NoOpStepObserver);

    let mut peak: f64 = 0.0;
    for _ in 0..30 {
        body.step(DT, &monitors, &mut NoOpStepObserver);
        peak = peak.max(body.kinetic_energy());
    }
    for _ in 0..300 {
        body.step(DT, &monitors, &mut NoOpStepObserver);
    }
    assert!(peak > 0.0);
    assert!(body.kinetic_energy() < peak * 0.5, "energy {} vs peak {}", body.kinetic_energy(), peak);
}

#[test]
fn pressure_reinflates_a_collapsed_ring() {
    let mut body = Body::create(&monitor(), None);
    let monitors = [monitor()];
    let rest = body.area();
    let c = body.centroid();
    for n in body.nodes_mut() {
        n.pos = c;
        n.prev_pos = c;
    }
    assert!(body.area() < 1e-9);

    let mut last = body.area();
    for tick in 0..2 {
        body.step(DT, &monitors, &mut NoOpStepObserver);
        let area = body.area();
        assert!(area > last, "tick {}: area {} did not grow past {}", tick, area, last);
        last = area;
    }
    for _ in 0..240 {
        body.step(DT, &monitors, &mut NoOpStepObserver);
    }
    let area = body.area();
    assert!(area > rest * 0.5 && area < rest * 2.0, "area {} vs rest {}", area, rest);
}

#[test]
fn hit_testing_follows_the_ring() {
    let body = Body::create(&monitor(), None);
    let c = body.centroid();
    let r = body.radius();

    assert!(body.contains(c, 0.0));
    let beside = c + Vec2::new(r + 5.0, 0.5);
    assert!(!body.contains(beside, 0.0));
    assert!(body.contains(beside, 10.0));

    let region = body.hit_region(8.0);
    assert!((region.width - (2.0 * r + 16.0)).abs() < 1e-9);
    for p in body.positions() {
        assert!(region.contains(p));
    }
    assert!(geometry::signed_area(&body.positions()) > 0.0);
}

#[test]
fn drag_follow_ramps_with_pointer_speed() {
    let monitors = [monitor()];

    let mut held = Body::create(&monitor(), None);
    let start = held.centroid();
    held.apply(Intent::DragStart(start), &mut NoOpStepObserver);
    for _ in 0..20 {
        held.step(DT, &monitors, &mut NoOpStepObserver);
    }
    assert!((held.centroid().x - start.x).abs() < 1.0, "stationary pointer moved body to x = {}", held.centroid().x);

    let mut pulled = Body::create(&monitor(), None);
    pulled.apply(Intent::DragStart(start), &mut NoOpStepObserver);
    for i in 1..=20 {
        let pointer = start + Vec2::new(10.0 * i as f64, 0.0);
        pulled.apply(Intent::DragMove(pointer), &mut NoOpStepObserver);
        pulled.step(DT, &monitors, &mut NoOpStepObserver);
    }
    assert!(pulled.centroid().x - start.x > 50.0, "fast pointer left body at x = {}", pulled.centroid().x);
    assert_eq!(pulled.mode(), Mode::Dragging);
}
