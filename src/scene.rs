use geom::{
    prelude::*,
    v2,
};
use platform::{Backend, Buffer, Key, MouseButton, Pixel, Window};
use utils::map_range;

const SQUARE_HALF_SIDE: f32 = 0.3;
const EDGE_SAMPLES: u32 = 64;
const RADIANS_PER_SEC: f32 = 1.5;

const BACKGROUND: Pixel = Pixel::hex(0xFF10_1018);
const SQUARE: Pixel = Pixel::hex(0xFFFF_C040);
const CURSOR: Pixel = Pixel::WHITE;
const PAINT: Pixel = Pixel::hex(0xFF40_A0FF);

/// Spinning square, a cursor and whatever the left mouse button painted.
pub struct Scene {
    angle: f32,
    paused: bool,
    zoom: f32,
    cursor: Option<V2i>,
    painted: Vec<V2i>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            paused: false,
            zoom: 1.0,
            cursor: None,
            painted: Vec::new(),
        }
    }

    pub fn update<B: Backend>(&mut self, window: &Window<B>, buffer: &Buffer, dt: f32) {
        if window.key(Key::Space).pressed() {
            self.paused = !self.paused;
        }
        if window.key(Key::Up).is_down() {
            self.zoom = (self.zoom + dt).min(3.0);
        }
        if window.key(Key::Down).is_down() {
            self.zoom = (self.zoom - dt).max(0.1);
        }
        if window.key(Key::C).pressed() {
            self.painted.clear();
        }
        if !self.paused {
            self.angle += RADIANS_PER_SEC * dt;
        }

        self.cursor = window_to_buffer(window, buffer);
        if let (Some(cursor), true) = (self.cursor, window.button(MouseButton::Left).is_down()) {
            self.painted.push(cursor);
        }
    }

    pub fn draw(&self, buffer: &mut Buffer) {
        buffer.set_clear_color(BACKGROUND);
        buffer.clear();

        let (width, height) = (buffer.width() as f32, buffer.height() as f32);
        let center = v2!(width / 2.0, height / 2.0);
        // unit square around the origin -> spun, sized and centred in buffer pixels
        let transform = Mat3f::translate_v(center)
            * Mat3f::rotate(self.angle)
            * Mat3f::scale_v(V2f::diag(width.min(height) * self.zoom));

        let corners = [
            v2!(-SQUARE_HALF_SIDE, -SQUARE_HALF_SIDE),
            v2!(SQUARE_HALF_SIDE, -SQUARE_HALF_SIDE),
            v2!(SQUARE_HALF_SIDE, SQUARE_HALF_SIDE),
            v2!(-SQUARE_HALF_SIDE, SQUARE_HALF_SIDE),
        ];
        for i in 0..corners.len() {
            let from = corners[i];
            let to = corners[(i + 1) % corners.len()];
            for step in 0..EDGE_SAMPLES {
                let t = step as f32 / EDGE_SAMPLES as f32;
                let p = transform.transform_point(from + (to - from) * t).floor();
                buffer.put_pixel(p.x as i32, p.y as i32, SQUARE);
            }
        }

        for p in &self.painted {
            buffer.put_pixel(p.x, p.y, PAINT);
        }
        if let Some(c) = self.cursor {
            for &(dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)].iter() {
                buffer.put_pixel(c.x + dx, c.y + dy, CURSOR);
            }
        }
    }
}

/// Maps the window's mouse position onto buffer pixels. `None` while the
/// window has no area.
fn window_to_buffer<B: Backend>(window: &Window<B>, buffer: &Buffer) -> Option<V2i> {
    let (win_w, win_h) = window.size();
    if win_w == 0 || win_h == 0 {
        return None;
    }
    let (mx, my) = window.mouse_coords();
    let x = map_range(mx as f32, (0.0, win_w as f32), (0.0, buffer.width() as f32));
    let y = map_range(my as f32, (0.0, win_h as f32), (0.0, buffer.height() as f32));
    Some(V2f::new(x, y).floor().into())
}
