// Per-frame simulation phases
//
// Every phase takes the GameState by exclusive reference and nothing else
// from the outside world, so a frame can be stepped without a window.

use crate::collision::collides_with_any;
use crate::kinematics::integrate;
use crate::obstacle::ObstacleSet;
use crate::player::Player;

use super::{FrameInput, GameState, Outcome};

/// Decides the outcome from the current positions.
///
/// Collision is checked before the finish line, so a frame that trips both
/// counts as a loss.
pub fn evaluate_outcome(player: &Player, obstacles: &ObstacleSet, finish_line: f32) -> Outcome {
    if collides_with_any(player, obstacles.obstacles()) {
        Outcome::Collided
    } else if player.position().x >= finish_line {
        Outcome::Won
    } else {
        Outcome::Playing
    }
}

/// Steps the world forward by `dt` seconds.
///
/// Does nothing once the outcome is terminal: the world stays frozen exactly
/// as it was on the frame the run ended.
pub fn update(state: &mut GameState, input: &FrameInput, dt: f32) {
    if state.outcome.is_terminal() {
        return;
    }
    state.frame += 1;

    integrate(&mut state.player, &state.kinematics, input.jump_held, dt);

    // Obstacles and the finish line scroll together
    state.obstacles.update(dt);
    state.finish_line -= state.obstacles.speed() * dt;

    state.outcome = evaluate_outcome(&state.player, &state.obstacles, state.finish_line);
    match state.outcome {
        Outcome::Collided => log::info!(
            "Collision on frame {} at player x {}",
            state.frame,
            state.player.position().x
        ),
        Outcome::Won => log::info!(
            "Finish line reached on frame {} (line at {})",
            state.frame,
            state.finish_line
        ),
        Outcome::Playing => {}
    }

    state.player.animate(dt);
    state.obstacles.animate(dt);
    state.background.advance(dt);
}
