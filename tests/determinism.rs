use squish::{Body, BodyConfig, Intent, NoOpStepObserver, Rect, Vec2};

fn run(seed: u64) -> Vec<Vec2<f32>> {
    let monitor = Rect::new(0.0f32, 0.0, 1920.0, 1080.0);
    let config = BodyConfig::new().with_seed(seed).with_walk_chances(0.05, 0.01);
    let mut body = Body::spawn(&monitor, config);
    body.set_windows(vec![
        Rect::new(700.0, 700.0, 500.0, 200.0),
        Rect::new(1300.0, 300.0, 400.0, 500.0),
    ]);
    let monitors = [monitor];
    for frame in 0..600 {
        if frame == 120 {
            let c = body.centroid();
            body.apply(Intent::DragStart(c), &mut NoOpStepObserver);
        }
        if (121..150).contains(&frame) {
            let c = body.centroid();
            body.apply(Intent::DragMove(c + Vec2::new(6.0, -9.0)), &mut NoOpStepObserver);
        }
        if frame == 150 {
            body.apply(Intent::DragEnd, &mut NoOpStepObserver);
        }
        body.step(1.0 / 60.0, &monitors, &mut NoOpStepObserver);
    }
    body.positions()
}

#[test]
fn same_seed_same_trajectory() {
    let results: Vec<_> = (0..3).map(|_| run(7)).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn trajectories_stay_finite() {
    for seed in [1, 2, 3] {
        for p in run(seed) {
            assert!(p.is_finite());
        }
    }
}
