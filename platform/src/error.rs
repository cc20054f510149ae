use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("windowing is not implemented on {0}")]
    UnsupportedPlatform(&'static str),
    #[error("{call} failed: {message}")]
    Creation {
        call: &'static str,
        message: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("key index {index} out of range (0..{count})")]
    KeyOutOfRange { index: usize, count: usize },
    #[error("mouse button index {index} out of range (0..{count})")]
    ButtonOutOfRange { index: usize, count: usize },
}
