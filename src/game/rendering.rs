// Drawing and visual rendering
//
// Reads the already-updated GameState and turns it into backend draw calls.
// Nothing in here mutates the world.

use crate::backend::{Color, PresentationBackend};
use crate::error::GameError;
use glam::Vec2;

use super::{GameAssets, GameState, Outcome};

pub const CLEAR_COLOR: Color = Color::RAYWHITE;
pub const OVERLAY_TEXT_SIZE: u32 = 40;
pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const WIN_TEXT: &str = "You Win!";

/// Draws one complete frame: background, then either the actors or the
/// game-over overlay, then the win overlay.
///
/// The two overlay checks are independent `if`s rather than one match on the
/// outcome.
pub fn render<B: PresentationBackend>(
    backend: &mut B,
    state: &GameState,
    assets: &GameAssets,
) -> Result<(), GameError> {
    backend.clear(CLEAR_COLOR)?;

    render_background(backend, state)?;

    if state.outcome == Outcome::Collided {
        render_overlay(backend, state, GAME_OVER_TEXT, Color::RED)?;
    } else {
        render_actors(backend, state, assets)?;
    }

    if state.outcome == Outcome::Won {
        render_overlay(backend, state, WIN_TEXT, Color::GREEN)?;
    }

    Ok(())
}

fn render_background<B: PresentationBackend>(backend: &mut B, state: &GameState) -> Result<(), GameError> {
    for layer in state.background.layers() {
        for x in layer.draw_positions() {
            backend.draw_image_scaled(&layer.image, Vec2::new(x, 0.0), layer.scale, Color::WHITE)?;
        }
    }
    Ok(())
}

fn render_actors<B: PresentationBackend>(
    backend: &mut B,
    state: &GameState,
    assets: &GameAssets,
) -> Result<(), GameError> {
    for obstacle in state.obstacles.obstacles() {
        let entity = &obstacle.entity;
        backend.draw_image_region(&assets.obstacle, entity.frame, entity.position, entity.tint)?;
    }

    let player = &state.player.entity;
    backend.draw_image_region(&assets.player, player.frame, player.position, player.tint)
}

fn render_overlay<B: PresentationBackend>(
    backend: &mut B,
    state: &GameState,
    text: &str,
    color: Color,
) -> Result<(), GameError> {
    backend.draw_text(
        text,
        state.screen.x / 4.0,
        state.screen.y / 2.0,
        OVERLAY_TEXT_SIZE,
        color,
    )
}
