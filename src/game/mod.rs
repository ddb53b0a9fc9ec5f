// Game module - Contains the game loop and all per-run state
//
// This module contains:
// - world.rs: GameState struct, assets and world construction
// - types.rs: Outcome and per-frame input
// - update.rs: Simulation phases and outcome evaluation
// - rendering.rs: Drawing and visual rendering

pub mod rendering;
pub mod types;
pub mod update;
pub mod world;

pub use types::*;
pub use world::{GameAssets, GameState};

use crate::backend::{Key, PresentationBackend};
use crate::config::GameConfig;
use crate::error::GameError;

/// Owns the backend and the world, and drives them one frame at a time
pub struct Game<B: PresentationBackend> {
    backend: B,
    state: GameState,
    assets: GameAssets,
}

impl<B: PresentationBackend> Game<B> {
    /// Validates the config and loads every asset before any frame runs.
    pub fn new(mut backend: B, config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        backend.set_target_fps(config.window.target_fps);

        let assets = GameAssets::load(&mut backend, config)?;
        let state = GameState::from_config(config, &assets);

        log::info!(
            "World ready: {} obstacles, finish line at x {}",
            state.obstacles.len(),
            state.finish_line
        );

        Ok(Game {
            backend,
            state,
            assets,
        })
    }

    /// Runs frames until the backend asks to close.
    pub fn run(&mut self) -> Result<(), GameError> {
        while !self.backend.should_close() {
            self.frame()?;
        }

        log::info!("Closing after {} frames, outcome {:?}", self.state.frame, self.state.outcome);
        Ok(())
    }

    /// Update (skipped once the run is over), then render.
    pub fn frame(&mut self) -> Result<(), GameError> {
        let dt = self.backend.frame_time();
        let input = FrameInput {
            jump_held: self.backend.is_key_down(Key::Jump),
        };

        update::update(&mut self.state, &input, dt);

        self.backend.begin_frame();
        rendering::render(&mut self.backend, &self.state, &self.assets)?;
        self.backend.end_frame()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
