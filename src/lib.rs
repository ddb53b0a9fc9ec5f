//! Dapper Dasher - a side-scrolling dodge-the-nebula game
//!
//! Core modules:
//! - `game`: Game loop orchestrator, world state, update and render phases
//! - `sprite`: Animated sprite entities and sheet layout
//! - `kinematics`: Gravity, jumping and ground contact
//! - `obstacle`: The level's fixed line-up of moving obstacles
//! - `collision`: AABB rectangles and hit tests
//! - `parallax`: Scrolling background layers
//! - `backend`: Presentation backend trait the loop draws through
//! - `config`: Data-driven tuning with compiled-in defaults
//!
//! Nothing in this library opens a window; the binary supplies the SDL2
//! backend.

pub mod backend;
pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod kinematics;
pub mod obstacle;
pub mod parallax;
pub mod player;
pub mod sprite;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Game, Outcome};
