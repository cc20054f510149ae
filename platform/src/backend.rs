use crate::{
    error::WindowError,
    graphics::Buffer,
    input::{Key, MouseButton},
};

/// Something that happened to a native window since the last poll.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Event {
    Close,
    Resized { width: u32, height: u32 },
    Key { key: Key, down: bool },
    Button { button: MouseButton, down: bool },
    MouseMoved { x: i32, y: i32 },
}

/// One native windowing system.
///
/// A backend owns the OS resources of exactly one window and releases them on drop.
pub trait Backend: Sized {
    /// Creates and shows a window whose client area is `width x height`.
    fn open(title: &str, width: u32, height: u32) -> Result<Self, WindowError>;

    /// Appends every pending event to `out` without blocking.
    fn poll_events(&mut self, out: &mut Vec<Event>);

    /// Stretches `buffer` over a `width x height` client area, row 0 on top.
    fn present(&mut self, buffer: &Buffer, width: u32, height: u32);

    /// Asks for a new client size. The window reports the outcome as [`Event::Resized`].
    fn request_size(&mut self, width: u32, height: u32);

    fn set_title(&mut self, title: &str);
}

#[cfg(windows)]
pub type NativeBackend = crate::win32::Win32;

#[cfg(not(windows))]
pub type NativeBackend = Unsupported;

/// Backend for systems without a native implementation. It cannot be constructed.
#[derive(Debug)]
pub enum Unsupported {}

impl Backend for Unsupported {
    fn open(_title: &str, _width: u32, _height: u32) -> Result<Self, WindowError> {
        Err(WindowError::UnsupportedPlatform(std::env::consts::OS))
    }

    fn poll_events(&mut self, _out: &mut Vec<Event>) {
        match *self {}
    }

    fn present(&mut self, _buffer: &Buffer, _width: u32, _height: u32) {
        match *self {}
    }

    fn request_size(&mut self, _width: u32, _height: u32) {
        match *self {}
    }

    fn set_title(&mut self, _title: &str) {
        match *self {}
    }
}
