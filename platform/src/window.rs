use std::mem;
use crate::{
    backend::{Backend, Event, NativeBackend},
    error::{InputError, WindowError},
    graphics::Buffer,
    input::{DigitalKey, Key, KeyboardState, MouseButton, MouseState},
};

/// Titles longer than this (in bytes, terminator included) are truncated.
pub const TITLE_CAPACITY: usize = 128;

/// An on-screen surface plus the input state seen on it.
///
/// State accessors return what the last [`Window::tick`] observed.
pub struct Window<B: Backend = NativeBackend> {
    backend: B,
    title: String,
    width: u32,
    height: u32,
    keyboard: KeyboardState,
    mouse: MouseState,
    open: bool,
    events: Vec<Event>,
}

impl<B: Backend> Window<B> {
    pub fn create(title: &str, width: u32, height: u32) -> Result<Self, WindowError> {
        let title = bounded_title(title);
        let backend = B::open(&title, width, height)?;
        log::info!("opened window {:?} ({}x{})", title, width, height);

        Ok(Self {
            backend,
            title,
            width,
            height,
            keyboard: KeyboardState::default(),
            mouse: MouseState::default(),
            open: true,
            events: Vec::new(),
        })
    }

    /// Drains pending events without blocking. Call once per frame.
    pub fn tick(&mut self) {
        self.keyboard.age();
        self.mouse.age();

        let mut events = mem::take(&mut self.events);
        self.backend.poll_events(&mut events);
        for event in events.drain(..) {
            self.apply(event);
        }
        self.events = events;
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::Close => {
                if self.open {
                    log::info!("window {:?} asked to close", self.title);
                }
                self.open = false;
            }
            Event::Resized { width, height } => {
                log::debug!("window {:?} resized to {}x{}", self.title, width, height);
                self.width = width;
                self.height = height;
            }
            Event::Key { key, down } => self.keyboard[key].set(down),
            Event::Button { button, down } => self.mouse[button].set(down),
            Event::MouseMoved { x, y } => {
                self.mouse.x = x;
                self.mouse.y = y;
            }
        }
    }

    /// Stretches `buffer` over the whole client area.
    pub fn put_buffer(&mut self, buffer: &Buffer) {
        if buffer.is_empty() || self.width == 0 || self.height == 0 {
            return;
        }
        self.backend.present(buffer, self.width, self.height);
    }

    /// Requests a new client size. [`Window::size`] changes once the
    /// backend reports the resize on a later tick, if it does at all.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.backend.request_size(width, height);
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = bounded_title(title);
        self.backend.set_title(&self.title);
    }

    #[inline(always)] pub fn is_open(&self) -> bool { self.open }
    #[inline(always)] pub fn size(&self) -> (u32, u32) { (self.width, self.height) }
    #[inline(always)] pub fn mouse_coords(&self) -> (i32, i32) { self.mouse.pos() }
    #[inline(always)] pub fn key(&self, key: Key) -> DigitalKey { self.keyboard[key] }
    #[inline(always)] pub fn button(&self, button: MouseButton) -> DigitalKey { self.mouse[button] }
    pub fn title(&self) -> &str { &self.title }

    pub fn key_code(&self, index: usize) -> Result<DigitalKey, InputError> {
        self.keyboard.by_index(index)
    }

    pub fn button_code(&self, index: usize) -> Result<DigitalKey, InputError> {
        self.mouse.by_index(index)
    }

    pub fn backend(&self) -> &B { &self.backend }
    pub fn backend_mut(&mut self) -> &mut B { &mut self.backend }
}

impl<B: Backend> Drop for Window<B> {
    fn drop(&mut self) {
        log::debug!("destroying window {:?}", self.title);
    }
}

/// Cuts `title` at the first NUL and to at most `TITLE_CAPACITY - 1` bytes
/// without splitting a character.
fn bounded_title(title: &str) -> String {
    let title = title.split('\0').next().unwrap_or_default();
    let mut end = title.len().min(TITLE_CAPACITY - 1);
    while !title.is_char_boundary(end) {
        end -= 1;
    }
    if end < title.len() {
        log::warn!("window title truncated to {} bytes", end);
    }
    title[..end].to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{headless::Headless, pixel::Pixel};

    type TestWindow = Window<Headless>;

    fn window() -> TestWindow {
        TestWindow::create("test", 8, 6).unwrap()
    }

    #[test]
    fn create_starts_open_and_idle() {
        let w = window();
        assert!(w.is_open());
        assert_eq!(w.size(), (8, 6));
        assert_eq!(w.mouse_coords(), (0, 0));
        assert_eq!(w.title(), "test");
        assert_eq!(w.backend().title(), "test");
        for &key in Key::variants() {
            assert!(w.key(key).is_up());
        }
        for i in 0..MouseButton::COUNT {
            assert!(w.button_code(i).unwrap().is_up());
        }
    }

    #[test]
    fn title_is_bounded() {
        let long = "x".repeat(300);
        let w = TestWindow::create(&long, 1, 1).unwrap();
        assert_eq!(w.title().len(), TITLE_CAPACITY - 1);

        // 'é' is two bytes, so the cut has to back off to a char boundary
        let accented = "é".repeat(100);
        assert_eq!(bounded_title(&accented).len(), TITLE_CAPACITY - 2);

        assert_eq!(bounded_title("abc\0def"), "abc");
    }

    #[test]
    fn tick_applies_close() {
        let mut w = window();
        w.tick();
        assert!(w.is_open());

        w.backend_mut().request_close();
        assert!(w.is_open(), "state only changes on tick");
        w.tick();
        assert!(!w.is_open());
    }

    #[test]
    fn tick_applies_keys_with_edges() {
        let mut w = window();
        w.backend_mut().push_event(Event::Key { key: Key::A, down: true });
        w.tick();
        assert!(w.key(Key::A).is_down());
        assert!(w.key(Key::A).pressed());
        assert!(w.key_code(Key::A as usize).unwrap().is_down());

        w.tick();
        assert!(w.key(Key::A).is_down());
        assert!(!w.key(Key::A).pressed());

        w.backend_mut().push_event(Event::Key { key: Key::A, down: false });
        w.tick();
        assert!(w.key(Key::A).is_up());
        assert!(w.key(Key::A).released());
        assert!(w.key(Key::B).is_up());
    }

    #[test]
    fn tick_applies_buttons_and_mouse() {
        let mut w = window();
        let backend = w.backend_mut();
        backend.push_event(Event::Button { button: MouseButton::Left, down: true });
        backend.push_event(Event::Button { button: MouseButton::Right, down: true });
        backend.push_event(Event::Button { button: MouseButton::Right, down: false });
        backend.push_event(Event::MouseMoved { x: 3, y: 4 });
        backend.push_event(Event::MouseMoved { x: -2, y: 5 });
        w.tick();

        assert!(w.button(MouseButton::Left).is_down());
        assert!(w.button(MouseButton::Right).is_up());
        assert!(w.button_code(0).unwrap().is_down());
        assert_eq!(w.mouse_coords(), (-2, 5));
    }

    #[test]
    fn out_of_range_codes_are_errors() {
        let w = window();
        assert_eq!(
            w.key_code(512),
            Err(InputError::KeyOutOfRange { index: 512, count: Key::COUNT }),
        );
        assert_eq!(
            w.button_code(MouseButton::COUNT),
            Err(InputError::ButtonOutOfRange { index: MouseButton::COUNT, count: MouseButton::COUNT }),
        );
    }

    #[test]
    fn resize_is_observed_on_tick() {
        let mut w = window();
        w.set_size(20, 10);
        assert_eq!(w.size(), (8, 6));
        w.tick();
        assert_eq!(w.size(), (20, 10));

        w.backend_mut().push_event(Event::Resized { width: 4, height: 4 });
        w.tick();
        assert_eq!(w.size(), (4, 4));
    }

    #[test]
    fn put_buffer_stretches_to_client_area() {
        let mut w = TestWindow::create("stretch", 4, 2).unwrap();
        let mut buf = Buffer::new(2, 1);
        buf.put_pixel(0, 0, Pixel::RED);
        buf.put_pixel(1, 0, Pixel::BLUE);
        w.put_buffer(&buf);

        let frame = w.backend().last_frame().unwrap();
        assert_eq!((frame.width, frame.height), (4, 2));
        for y in 0..2 {
            assert_eq!(frame.pixel(0, y), Some(Pixel::RED));
            assert_eq!(frame.pixel(1, y), Some(Pixel::RED));
            assert_eq!(frame.pixel(2, y), Some(Pixel::BLUE));
            assert_eq!(frame.pixel(3, y), Some(Pixel::BLUE));
        }
    }

    #[test]
    fn put_buffer_keeps_row_zero_on_top() {
        let mut w = TestWindow::create("rows", 3, 3).unwrap();
        let mut buf = Buffer::new(1, 3);
        buf.put_pixel(0, 0, Pixel::RED);
        buf.put_pixel(0, 2, Pixel::GREEN);
        w.put_buffer(&buf);

        let frame = w.backend().last_frame().unwrap();
        assert_eq!(frame.pixel(1, 0), Some(Pixel::RED));
        assert_eq!(frame.pixel(1, 2), Some(Pixel::GREEN));
    }

    #[test]
    fn put_buffer_follows_resize() {
        let mut w = window();
        let mut buf = Buffer::new(1, 1);
        buf.set_clear_color(Pixel::WHITE);
        buf.clear();

        w.backend_mut().push_event(Event::Resized { width: 5, height: 3 });
        w.tick();
        w.put_buffer(&buf);
        let frame = w.backend().last_frame().unwrap();
        assert_eq!((frame.width, frame.height), (5, 3));
        assert!(frame.pixels.iter().all(|&p| p == Pixel::WHITE));
    }

    #[test]
    fn put_buffer_skips_empty_areas() {
        let mut w = window();
        w.put_buffer(&Buffer::new(0, 0));
        assert_eq!(w.backend().frames_presented(), 0);

        w.backend_mut().push_event(Event::Resized { width: 0, height: 0 });
        w.tick();
        w.put_buffer(&Buffer::new(2, 2));
        assert_eq!(w.backend().frames_presented(), 0);
    }

    #[test]
    fn set_title_reaches_backend() {
        let mut w = window();
        w.set_title("frame: 16.6 ms");
        assert_eq!(w.title(), "frame: 16.6 ms");
        assert_eq!(w.backend().title(), "frame: 16.6 ms");
    }
}
