//! Open a native window, read its input, and blit a software pixel buffer onto it.

#[cfg(windows)]
pub mod debug;
#[cfg(windows)]
pub mod win32;

pub mod backend;
pub mod error;
pub mod graphics;
pub mod headless;
pub mod input;
pub mod pixel;
pub mod snapshot;
pub mod time;
pub mod window;

pub use backend::{Backend, Event, NativeBackend};
pub use error::{InputError, WindowError};
pub use graphics::{Buffer, BufferInfo};
pub use input::{DigitalKey, Key, MouseButton};
pub use pixel::Pixel;
pub use window::Window;
