use std::collections::VecDeque;
use crate::{
    backend::{Backend, Event},
    error::WindowError,
    graphics::Buffer,
    pixel::Pixel,
};

/// A presented image at window resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pixel>,
}

impl Frame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }
}

/// Offscreen backend: events are scripted with [`Headless::push_event`] and
/// presented buffers are stretched in software into [`Headless::last_frame`].
#[derive(Debug, Default)]
pub struct Headless {
    title: String,
    width: u32,
    height: u32,
    pending: VecDeque<Event>,
    last_frame: Option<Frame>,
    frames_presented: usize,
}

impl Headless {
    pub fn push_event(&mut self, event: Event) {
        if let Event::Resized { width, height } = event {
            self.width = width;
            self.height = height;
        }
        self.pending.push_back(event);
    }

    /// Same as the user clicking the close button.
    pub fn request_close(&mut self) {
        self.push_event(Event::Close);
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn size(&self) -> (u32, u32) { (self.width, self.height) }
    pub fn last_frame(&self) -> Option<&Frame> { self.last_frame.as_ref() }
    pub fn frames_presented(&self) -> usize { self.frames_presented }
}

impl Backend for Headless {
    fn open(title: &str, width: u32, height: u32) -> Result<Self, WindowError> {
        Ok(Self {
            title: title.to_owned(),
            width,
            height,
            ..Default::default()
        })
    }

    fn poll_events(&mut self, out: &mut Vec<Event>) {
        out.extend(self.pending.drain(..));
    }

    fn present(&mut self, buffer: &Buffer, width: u32, height: u32) {
        let mut pixels = vec![Pixel::TRANSPARENT; width as usize * height as usize];
        buffer.stretch_into(&mut pixels, width, height);
        self.last_frame = Some(Frame { width, height, pixels });
        self.frames_presented += 1;
    }

    fn request_size(&mut self, width: u32, height: u32) {
        self.push_event(Event::Resized { width, height });
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }
}
