//! Presentation Backend
//!
//! Everything the game needs from the outside world goes through
//! [`PresentationBackend`]: frame timing, input, image loading and drawing.
//! The simulation never touches a window directly, which keeps every
//! gameplay phase runnable without one.
//!
//! # Available Backends
//!
//! - `SdlBackend` (binary only) - SDL2 window, textures and bitmap text
//! - [`recording::RecordingBackend`] (tests only) - scripted input, logged draw calls
//!
//! Creating the window is the backend's constructor and closing it is its `Drop`.

#[cfg(test)]
pub mod recording;

use crate::collision::Rect;
use crate::error::GameError;
use glam::Vec2;

/// RGBA color used for tints, clears and text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const PURPLE: Color = Color::rgb(200, 122, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }
}

/// Logical keys the game asks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Jump,
}

/// A loaded image, identified by the backend that loaded it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHandle {
    pub id: usize,
    pub width: u32,
    pub height: u32,
}

/// Capabilities the game loop consumes from a windowing/rendering layer.
///
/// Drawing calls are only valid between [`begin_frame`](Self::begin_frame)
/// and [`end_frame`](Self::end_frame). `end_frame` presents the frame and
/// performs the frame-rate pacing wait.
pub trait PresentationBackend {
    fn set_target_fps(&mut self, fps: u32);

    /// Seconds taken by the previous frame.
    fn frame_time(&mut self) -> f32;

    /// True once the user asked to close the window.
    fn should_close(&mut self) -> bool;

    fn is_key_down(&mut self, key: Key) -> bool;

    /// Loads an image from disk. A failure here is fatal to startup.
    fn load_image(&mut self, path: &str) -> Result<ImageHandle, GameError>;

    fn begin_frame(&mut self);

    fn clear(&mut self, color: Color) -> Result<(), GameError>;

    /// Draws `source` (pixels within the image) at `dest`, unscaled.
    fn draw_image_region(
        &mut self,
        image: &ImageHandle,
        source: Rect,
        dest: Vec2,
        tint: Color,
    ) -> Result<(), GameError>;

    /// Draws the whole image at `dest`, scaled uniformly.
    fn draw_image_scaled(
        &mut self,
        image: &ImageHandle,
        dest: Vec2,
        scale: f32,
        tint: Color,
    ) -> Result<(), GameError>;

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: u32,
        color: Color,
    ) -> Result<(), GameError>;

    fn end_frame(&mut self) -> Result<(), GameError>;
}
