use dapper_dasher::{Game, GameConfig, GameError};
use std::path::Path;

mod sdl_backend;
mod text;

use sdl_backend::{create_window, SdlBackend};

const CONFIG_PATH: &str = "assets/config/dasher.json";

/// Reads the tuning file if there is one; a broken file is fatal, a missing
/// one just means defaults.
fn load_config(path: &Path) -> Result<GameConfig, GameError> {
    if path.exists() {
        let config = GameConfig::load_from_file(path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    } else {
        log::warn!("No config at {}, using built-in defaults", path.display());
        Ok(GameConfig::default())
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config(Path::new(CONFIG_PATH))
        .inspect_err(|e| log::error!("{}", e))?;

    let sdl_context = sdl2::init()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let canvas = create_window(
        &sdl_context,
        config.window.width,
        config.window.height,
        &config.window.title,
    )?;
    let texture_creator = canvas.texture_creator();
    let event_pump = sdl_context.event_pump()?;

    log::info!(
        "Window {}x{} at {} fps",
        config.window.width,
        config.window.height,
        config.window.target_fps
    );
    println!("Controls:");
    println!("SPACE - Jump");
    println!("ESC - Quit");

    let backend = SdlBackend::new(canvas, event_pump, &texture_creator);
    let mut game = Game::new(backend, &config)
        .inspect_err(|e| log::error!("Startup failed: {}", e))?;

    game.run()?;

    Ok(())
}
