mod config;
mod logger;
mod scene;

use std::{error::Error, process};
use clap::Parser;
use platform::{
    headless::Headless,
    snapshot,
    time,
    Backend, Buffer, Key, NativeBackend, Window,
};
use crate::{config::Config, scene::Scene};

/* TODO: what is missing
 - pick the window size from the monitor when --width/--height are not given
*/

fn main() {
    let config = Config::parse();
    logger::init(config.log_level);

    let result = match config.headless_frames {
        Some(frames) => run_headless(&config, frames),
        None => run_native(&config),
    };
    if let Err(error) = result {
        log::error!("{}", error);
        process::exit(1);
    }
}

fn run_native(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut window = Window::<NativeBackend>::create(&config.title, config.width, config.height)?;
    run(&mut window, config, None)?;
    Ok(())
}

/// Same loop without a display; the last presented frame becomes the snapshot.
fn run_headless(config: &Config, frames: u32) -> Result<(), Box<dyn Error>> {
    let mut window = Window::<Headless>::create(&config.title, config.width, config.height)?;
    run(&mut window, config, Some(frames))?;

    match (&config.snapshot, window.backend().last_frame()) {
        (Some(path), Some(frame)) => {
            snapshot::save_frame(frame, path)?;
            log::info!("wrote {}x{} frame to {}", frame.width, frame.height, path.display());
        }
        (Some(_), None) => log::warn!("nothing was presented, no snapshot written"),
        (None, _) => {}
    }
    log::info!("presented {} frames", window.backend().frames_presented());
    Ok(())
}

fn run<B: Backend>(
    window: &mut Window<B>,
    config: &Config,
    max_frames: Option<u32>,
) -> Result<(), Box<dyn Error>> {
    let (buffer_width, buffer_height) = config.buffer_size();
    let mut buffer = Buffer::new(buffer_width, buffer_height);
    let mut scene = Scene::new();
    log::info!("buffer {}x{}, window {:?}", buffer_width, buffer_height, window.size());

    let mut dt = 1.0 / 60.0;
    let mut frame_index: u32 = 0;
    while max_frames.map_or(true, |max| frame_index < max) {
        let frame_counter = time::Counter::start();

        window.tick();
        if !window.is_open() || window.key(Key::Escape).pressed() {
            break;
        }

        scene.update(window, &buffer, dt);
        scene.draw(&mut buffer);
        window.put_buffer(&buffer);

        if window.key(Key::F12).pressed() {
            match &config.snapshot {
                Some(path) => {
                    snapshot::save_png(&buffer, path)?;
                    log::info!("saved snapshot to {}", path.display());
                }
                None => log::warn!("F12 pressed but no --snapshot path was given"),
            }
        }

        let frame_elapsed = frame_counter.end();
        // offscreen frames advance the scene at a fixed 60 Hz
        if max_frames.is_none() {
            dt = frame_elapsed.as_secs() as f32;
        }
        if frame_index % 30 == 0 {
            window.set_title(&format!(
                "{} | frame: {:>6.3} ms, {:>5.1} fps",
                config.title,
                frame_elapsed.as_ms(),
                frame_elapsed.as_secs().recip(),
            ));
        }
        frame_index += 1;
    }

    Ok(())
}
