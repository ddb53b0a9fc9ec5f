// GameState struct and world construction
//
// This module contains the GameState struct which owns every entity and the
// outcome for one play session, plus the assets it is drawn with.

use crate::backend::{ImageHandle, PresentationBackend};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::kinematics::Kinematics;
use crate::obstacle::{ObstacleParams, ObstacleSet};
use crate::parallax::{BackgroundLayer, ParallaxScroller};
use crate::player::Player;
use crate::sprite::SheetLayout;
use glam::Vec2;

use super::Outcome;

/// Image handles the render phase draws with
pub struct GameAssets {
    pub player: ImageHandle,
    pub obstacle: ImageHandle,
    /// Back to front, matching the config's layer order
    pub background: Vec<ImageHandle>,
}

impl GameAssets {
    /// Loads every texture up front. Any missing file aborts startup.
    pub fn load<B: PresentationBackend>(backend: &mut B, config: &GameConfig) -> Result<Self, GameError> {
        let player = backend.load_image(&config.player.sheet.texture)?;
        let obstacle = backend.load_image(&config.obstacles.sheet.texture)?;
        let background = config
            .background
            .layers
            .iter()
            .map(|layer| backend.load_image(&layer.texture))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("Loaded {} textures", 2 + background.len());
        Ok(GameAssets {
            player,
            obstacle,
            background,
        })
    }
}

/// GameState owns everything that changes during a run
pub struct GameState {
    pub player: Player,
    pub obstacles: ObstacleSet,
    pub background: ParallaxScroller,
    pub kinematics: Kinematics,
    /// Virtual line scrolling toward the player; reaching it wins
    pub finish_line: f32,
    pub outcome: Outcome,
    /// Frames simulated while playing
    pub frame: u64,
    /// Window size in pixels
    pub screen: Vec2,
}

impl GameState {
    /// The finish line starts where the farthest obstacle starts.
    pub fn new(
        player: Player,
        obstacles: ObstacleSet,
        background: ParallaxScroller,
        kinematics: Kinematics,
        screen: Vec2,
    ) -> Self {
        let finish_line = obstacles.rightmost_x();
        GameState {
            player,
            obstacles,
            background,
            kinematics,
            finish_line,
            outcome: Outcome::Playing,
            frame: 0,
            screen,
        }
    }

    pub fn from_config(config: &GameConfig, assets: &GameAssets) -> Self {
        let width = config.window.width as f32;
        let height = config.window.height as f32;

        let player_sheet = &config.player.sheet;
        let player_layout = SheetLayout::from_image(
            &assets.player,
            player_sheet.columns,
            player_sheet.rows,
            player_sheet.frame_count,
        );
        let player = Player::spawn(width, height, &player_layout, player_sheet.update_time);

        let obstacle_sheet = &config.obstacles.sheet;
        let obstacle_layout = SheetLayout::from_image(
            &assets.obstacle,
            obstacle_sheet.columns,
            obstacle_sheet.rows,
            obstacle_sheet.frame_count,
        );
        let obstacles = ObstacleSet::new(
            width,
            height,
            &obstacle_layout,
            &ObstacleParams {
                count: config.obstacles.count,
                speed: config.obstacles.speed,
                padding: config.obstacles.padding,
                update_time: obstacle_sheet.update_time,
            },
        );

        let layers = config
            .background
            .layers
            .iter()
            .zip(&assets.background)
            .map(|(layer, image)| BackgroundLayer::new(*image, layer.speed, config.background.scale))
            .collect();

        let kinematics = Kinematics {
            gravity: config.physics.gravity,
            jump_velocity: config.physics.jump_velocity,
            floor_y: height,
        };

        GameState::new(
            player,
            obstacles,
            ParallaxScroller::new(layers),
            kinematics,
            Vec2::new(width, height),
        )
    }
}

/// Recording backend stocked with every texture the default config names.
#[cfg(test)]
pub(crate) fn default_backend() -> crate::backend::recording::RecordingBackend {
    crate::backend::recording::RecordingBackend::new(1.0 / 60.0)
        .with_image("textures/scarfy.png", 768, 128)
        .with_image("textures/12_nebula_spritesheet.png", 800, 800)
        .with_image("textures/far-buildings.png", 256, 192)
        .with_image("textures/back-buildings.png", 256, 192)
        .with_image("textures/foreground.png", 352, 192)
}
