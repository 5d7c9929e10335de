use squish::{BodyConfig, BodyError, Companion, Mode, NoOpStepObserver, Rect, StepObserver, Vec2};

const DT: f64 = 1.0 / 60.0;

fn primary() -> Rect<f64> {
    Rect::new(0.0, 0.0, 1920.0, 1080.0)
}

fn secondary() -> Rect<f64> {
    Rect::new(1920.0, 0.0, 1920.0, 1080.0)
}

#[derive(Default)]
struct Transitions(Vec<(Mode, Mode)>);

impl StepObserver for Transitions {
    fn on_transition(&mut self, from: Mode, to: Mode) {
        self.0.push((from, to));
    }
}

#[test]
fn requires_a_monitor() {
    let err = Companion::<f64>::try_new(vec![], BodyConfig::new()).unwrap_err();
    assert_eq!(err, BodyError::NoMonitor);
}

#[test]
fn rejects_invalid_config() {
    let config = BodyConfig::new().with_radius(-1.0);
    assert!(Companion::try_new(vec![primary()], config).is_err());
}

#[test]
fn intents_apply_in_order_on_tick() {
    let mut companion = Companion::try_new(vec![primary()], BodyConfig::new()).unwrap();
    let c = companion.body().centroid();
    companion.drag_start(c.x, c.y);
    companion.drag_move(c.x + 50.0, c.y - 80.0);
    assert_eq!(companion.pending_intents(), 2);
    assert_eq!(companion.body().mode(), Mode::Idle);

    let mut seen = Transitions::default();
    companion.tick(DT, &mut seen);
    assert_eq!(companion.pending_intents(), 0);
    assert_eq!(companion.body().mode(), Mode::Dragging);

    companion.drag_end();
    companion.tick(DT, &mut seen);
    assert_eq!(companion.body().mode(), Mode::Free);
    assert_eq!(seen.0, vec![(Mode::Idle, Mode::Dragging), (Mode::Dragging, Mode::Free)]);
}

#[test]
fn no_monitors_freezes_everything() {
    let mut companion = Companion::try_new(vec![primary()], BodyConfig::new()).unwrap();
    companion.set_monitors(vec![]);
    let before = companion.body().positions();

    companion.drag_start(10.0, 10.0);
    for _ in 0..10 {
        companion.tick(DT, &mut NoOpStepObserver);
    }
    assert_eq!(companion.body().positions(), before);
    assert_eq!(companion.pending_intents(), 1);
    assert_eq!(companion.respawns(), 0);
}

#[test]
fn frozen_drag_keeps_queue_short() {
    let mut companion = Companion::try_new(vec![primary()], BodyConfig::new()).unwrap();
    companion.set_monitors(vec![]);
    companion.drag_start(960.0, 1012.0);
    for i in 0..10_000 {
        companion.drag_move(960.0 + i as f64 * 0.01, 1012.0);
        companion.tick(DT, &mut NoOpStepObserver);
    }
    assert_eq!(companion.pending_intents(), 2);

    companion.set_monitors(vec![primary()]);
    companion.tick(DT, &mut NoOpStepObserver);
    assert_eq!(companion.pending_intents(), 0);
    assert_eq!(companion.body().mode(), Mode::Dragging);
}

#[test]
fn respawns_when_its_monitor_goes_away() {
    let mut companion = Companion::try_new(vec![primary(), secondary()], BodyConfig::new()).unwrap();
    for n in companion.body_mut().nodes_mut() {
        let shift = Vec2::new(1920.0, 0.0);
        n.pos += shift;
        n.prev_pos += shift;
    }
    companion.tick(DT, &mut NoOpStepObserver);
    assert!(companion.body().centroid().x > 2500.0);
    assert_eq!(companion.respawns(), 0);
    companion.set_windows(&[Rect::new(300.0, 300.0, 400.0, 300.0)]);

    companion.set_monitors(vec![primary()]);
    assert_eq!(companion.respawns(), 1);
    let c = companion.body().centroid();
    assert!((c.x - 960.0).abs() < 1e-3 && (c.y - 1012.0).abs() < 1e-3);
    assert_eq!(companion.body().windows().len(), 1);
}

#[test]
fn window_snapshot_is_filtered_and_diffed() {
    let mut companion = Companion::try_new(vec![primary()], BodyConfig::new()).unwrap();
    let windows = [
        Rect::new(100.0, 100.0, 800.0, 600.0),
        Rect::new(10.0, 10.0, 30.0, 5.0),
        Rect::new(5000.0, 5000.0, 800.0, 600.0),
    ];
    assert!(companion.set_windows(&windows));
    assert_eq!(companion.body().windows(), &windows[..1]);
    assert!(!companion.set_windows(&windows));
}
