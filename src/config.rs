use std::path::PathBuf;
use clap::Parser;
use log::LevelFilter;

/// Opens a window and draws a spinning square into a low-resolution pixel buffer.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Config {
    /// Window title
    #[clap(long, default_value = "pixels")]
    pub title: String,

    /// Client area width in window pixels
    #[clap(long, default_value_t = 960)]
    pub width: u32,

    /// Client area height in window pixels
    #[clap(long, default_value_t = 540)]
    pub height: u32,

    /// Window pixels per buffer pixel
    #[clap(long, default_value_t = 4, validator = positive)]
    pub scale: u32,

    /// Run offscreen for this many frames instead of opening a window
    #[clap(long)]
    pub headless_frames: Option<u32>,

    /// PNG written on F12, or after the last offscreen frame
    #[clap(long)]
    pub snapshot: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[clap(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn buffer_size(&self) -> (u32, u32) {
        (self.width / self.scale, self.height / self.scale)
    }
}

fn positive(s: &str) -> Result<(), String> {
    match s.parse::<u32>() {
        Ok(0) => Err("must be at least 1".to_owned()),
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}
