use squish::{scene, BodyConfig, Companion, Mode, NoOpStepObserver, PollBackoff, Rect, Vec2};
use wasm_bindgen::prelude::*;

fn rects(flat: &[f32]) -> Vec<Rect<f32>> {
    flat.chunks_exact(4)
        .map(|r| Rect::new(r[0], r[1], r[2], r[3]))
        .collect()
}

fn flatten(points: &[Vec2<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

// ---- Companion Demo ----

#[wasm_bindgen]
pub struct CompanionDemo {
    companion: Companion<f32>,
    backoff: PollBackoff<f32>,
}

#[wasm_bindgen]
impl CompanionDemo {
    /// Start on a single monitor; a non-positive size falls back to 1920x1080.
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<CompanionDemo, JsValue> {
        let monitor = if width > 0.0 && height > 0.0 {
            Rect::new(x, y, width, height)
        } else {
            scene::fallback_monitor()
        };
        Companion::try_new(vec![monitor], BodyConfig::new())
            .map(|companion| CompanionDemo { companion, backoff: PollBackoff::default() })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Monitors as flat [x, y, w, h, ...]. An empty list installs the
    /// fallback monitor.
    pub fn set_monitors(&mut self, flat: &[f32]) {
        self.companion.set_monitors(scene::monitors_or_fallback(rects(flat)));
    }

    /// Returns [x, y, w, h] spanning every monitor, for sizing the overlay.
    pub fn desktop_span(&self) -> Vec<f32> {
        let r = scene::desktop_span(self.companion.monitors()).unwrap_or_else(scene::fallback_monitor);
        vec![r.x, r.y, r.width, r.height]
    }

    /// Windows as flat [x, y, w, h, ...] in front-to-back order. Returns
    /// the delay in seconds before the next poll.
    pub fn set_windows(&mut self, flat: &[f32]) -> f32 {
        let changed = self.companion.set_windows(&rects(flat));
        self.backoff.record(changed)
    }

    pub fn drag_start(&mut self, x: f32, y: f32) {
        self.companion.drag_start(x, y);
    }

    pub fn drag_move(&mut self, x: f32, y: f32) {
        self.companion.drag_move(x, y);
    }

    pub fn drag_end(&mut self) {
        self.companion.drag_end();
    }

    pub fn update(&mut self, dt: f32) {
        self.companion.tick(dt, &mut NoOpStepObserver);
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions in ring order
    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.companion.body().positions())
    }

    pub fn centroid(&self) -> Vec<f32> {
        let c = self.companion.body().centroid();
        vec![c.x, c.y]
    }

    pub fn contains(&self, x: f32, y: f32, padding: f32) -> bool {
        self.companion.body().contains(Vec2::new(x, y), padding)
    }

    /// Returns [x, y, w, h] of the region that should capture the pointer.
    pub fn hit_region(&self, padding: f32) -> Vec<f32> {
        let r = self.companion.body().hit_region(padding);
        vec![r.x, r.y, r.width, r.height]
    }

    pub fn mode(&self) -> String {
        match self.companion.body().mode() {
            Mode::Idle => "idle",
            Mode::Walking => "walking",
            Mode::Floating => "floating",
            Mode::Dragging => "dragging",
            Mode::Free => "free",
        }
        .to_string()
    }
}
