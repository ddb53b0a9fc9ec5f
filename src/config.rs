//! Game configuration
//!
//! Every tunable lives here with a compiled-in default. A JSON file can
//! override any subset of fields; missing fields keep their defaults.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub obstacles: ObstacleConfig,
    pub background: BackgroundConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 512,
            height: 380,
            title: "Dapper Dasher".to_string(),
            target_fps: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Pixels/second²
    pub gravity: f32,
    /// Pixels/second, negative is up
    pub jump_velocity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravity: 1600.0,
            jump_velocity: -800.0,
        }
    }
}

/// Where a sprite sheet lives and how its frames are laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub texture: String,
    pub columns: u32,
    pub rows: u32,
    /// Frames cycled along the first row
    pub frame_count: usize,
    /// Seconds per frame
    pub update_time: f32,
}

impl SheetConfig {
    fn validate(&self, name: &str) -> Result<(), GameError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(GameError::InvalidConfig(format!(
                "{} sheet needs at least one column and row",
                name
            )));
        }
        if self.frame_count == 0 || self.frame_count > self.columns as usize {
            return Err(GameError::InvalidConfig(format!(
                "{} frame count {} must be between 1 and {}",
                name, self.frame_count, self.columns
            )));
        }
        if self.update_time <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "{} update time must be positive",
                name
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub sheet: SheetConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            sheet: SheetConfig {
                texture: "textures/scarfy.png".to_string(),
                columns: 6,
                rows: 1,
                frame_count: 6,
                update_time: 1.0 / 12.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub sheet: SheetConfig,
    pub count: usize,
    /// Pixels/second, shared by every obstacle and the finish line
    pub speed: f32,
    /// Hitbox inset on each side
    pub padding: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        ObstacleConfig {
            sheet: SheetConfig {
                texture: "textures/12_nebula_spritesheet.png".to_string(),
                columns: 8,
                rows: 8,
                frame_count: 8,
                update_time: 1.0 / 16.0,
            },
            count: 6,
            speed: 200.0,
            padding: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub texture: String,
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Back to front
    pub layers: Vec<LayerConfig>,
    pub scale: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        let layer = |texture: &str, speed: f32| LayerConfig {
            texture: texture.to_string(),
            speed,
        };

        BackgroundConfig {
            layers: vec![
                layer("textures/far-buildings.png", 20.0),
                layer("textures/back-buildings.png", 40.0),
                layer("textures/foreground.png", 80.0),
            ],
            scale: 2.0,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, GameError> {
        let config: GameConfig =
            serde_json::from_str(content).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the game loop can't run with.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(GameError::InvalidConfig("window must have a non-zero size".to_string()));
        }

        if self.physics.gravity <= 0.0 {
            return Err(GameError::InvalidConfig("gravity must pull downward".to_string()));
        }

        self.player.sheet.validate("player")?;
        self.obstacles.sheet.validate("obstacle")?;

        if self.obstacles.count == 0 {
            return Err(GameError::InvalidConfig("level needs at least one obstacle".to_string()));
        }
        if self.obstacles.speed <= 0.0 {
            return Err(GameError::InvalidConfig("obstacle speed must be positive".to_string()));
        }
        if self.obstacles.padding < 0.0 {
            return Err(GameError::InvalidConfig("obstacle padding can't be negative".to_string()));
        }
        if self.background.scale <= 0.0 {
            return Err(GameError::InvalidConfig("background scale must be positive".to_string()));
        }

        // Depth only reads if every layer moves at its own speed
        let layers = &self.background.layers;
        for (index, layer) in layers.iter().enumerate() {
            // Offsets only wrap on the left
            if layer.speed <= 0.0 {
                return Err(GameError::InvalidConfig(format!(
                    "background layer {} must scroll left",
                    layer.texture
                )));
            }
            if layers[..index].iter().any(|other| other.speed == layer.speed) {
                return Err(GameError::InvalidConfig(format!(
                    "background layer {} repeats speed {}",
                    layer.texture, layer.speed
                )));
            }
        }

        Ok(())
    }
}
