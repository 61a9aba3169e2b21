use rastery::prelude::*;
use rastery::window::{FrameLimiter, Window};
use thiserror::Error;

const SNAPSHOT_PATH: &str = "rastery-frame.png";

#[derive(Debug, Error)]
enum AppError {
    #[error("usage: rastery <window_title> [path_to_obj_file]")]
    Usage,
    #[error("failed to load mesh: {0}")]
    Mesh(#[from] MeshError),
    #[error("window error: {0}")]
    Window(String),
}

fn run() -> Result<(), AppError> {
    let mut args = std::env::args().skip(1);
    let title = args.next().ok_or(AppError::Usage)?;
    let mesh = match args.next() {
        Some(path) => Mesh::from_obj(path)?,
        None => {
            log::info!("no OBJ path given, showing the cube");
            Mesh::cube()
        }
    };

    let config = RenderConfig::default();
    let mut window =
        Window::new(&title, config.width, config.height).map_err(AppError::Window)?;
    let mut engine = Engine::new(config);
    engine.add_mesh(mesh);

    let mut context = FrameContext::default();
    let mut frame_limiter = FrameLimiter::new(&window);
    let mut frames: u64 = 0;

    'running: loop {
        frame_limiter.wait(&window);

        for command in window.poll_commands() {
            if command == Command::Snapshot {
                if let Err(e) = engine.save_snapshot(SNAPSHOT_PATH) {
                    log::warn!("snapshot failed: {e}");
                }
            }
            if !command.apply(&mut context) {
                break 'running;
            }
        }

        engine.tick(&context);
        window
            .present(engine.frame_buffer())
            .map_err(AppError::Window)?;
        frames += 1;
    }

    log::info!("exiting after {frames} frames");
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
