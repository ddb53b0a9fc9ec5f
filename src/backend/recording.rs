//! Headless backend that records every draw call.
//!
//! Images are registered up front with fake dimensions; loading a path that
//! was never registered fails the same way a missing file would.

use super::{Color, ImageHandle, Key, PresentationBackend};
use crate::collision::Rect;
use crate::error::GameError;
use glam::Vec2;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    ImageRegion {
        image: usize,
        source: Rect,
        dest: Vec2,
        tint: Color,
    },
    ImageScaled {
        image: usize,
        dest: Vec2,
        scale: f32,
        tint: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: u32,
        color: Color,
    },
}

pub struct RecordingBackend {
    images: HashMap<String, (u32, u32)>,
    loaded: Vec<String>,
    frame_time: f32,
    pub jump_held: bool,
    close_after: Option<usize>,
    pub target_fps: Option<u32>,
    current: Vec<DrawCall>,
    in_frame: bool,
    pub frames: Vec<Vec<DrawCall>>,
}

impl RecordingBackend {
    pub fn new(frame_time: f32) -> Self {
        RecordingBackend {
            images: HashMap::new(),
            loaded: Vec::new(),
            frame_time,
            jump_held: false,
            close_after: None,
            target_fps: None,
            current: Vec::new(),
            in_frame: false,
            frames: Vec::new(),
        }
    }

    pub fn with_image(mut self, path: &str, width: u32, height: u32) -> Self {
        self.images.insert(path.to_string(), (width, height));
        self
    }

    /// Requests termination once `frames` frames have been presented.
    pub fn close_after(mut self, frames: usize) -> Self {
        self.close_after = Some(frames);
        self
    }

    pub fn loaded_paths(&self) -> &[String] {
        &self.loaded
    }

    pub fn last_frame(&self) -> &[DrawCall] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn texts_in_last_frame(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, call: DrawCall) -> Result<(), GameError> {
        if !self.in_frame {
            return Err(GameError::Render("draw outside of frame".to_string()));
        }
        self.current.push(call);
        Ok(())
    }
}

impl PresentationBackend for RecordingBackend {
    fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = Some(fps);
    }

    fn frame_time(&mut self) -> f32 {
        self.frame_time
    }

    fn should_close(&mut self) -> bool {
        self.close_after
            .is_some_and(|limit| self.frames.len() >= limit)
    }

    fn is_key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Jump => self.jump_held,
        }
    }

    fn load_image(&mut self, path: &str) -> Result<ImageHandle, GameError> {
        let (width, height) = self.images.get(path).copied().ok_or_else(|| {
            GameError::AssetLoad {
                path: path.to_string(),
                reason: "no such file".to_string(),
            }
        })?;

        self.loaded.push(path.to_string());
        Ok(ImageHandle {
            id: self.loaded.len() - 1,
            width,
            height,
        })
    }

    fn begin_frame(&mut self) {
        self.in_frame = true;
        self.current.clear();
    }

    fn clear(&mut self, color: Color) -> Result<(), GameError> {
        self.record(DrawCall::Clear(color))
    }

    fn draw_image_region(
        &mut self,
        image: &ImageHandle,
        source: Rect,
        dest: Vec2,
        tint: Color,
    ) -> Result<(), GameError> {
        self.record(DrawCall::ImageRegion {
            image: image.id,
            source,
            dest,
            tint,
        })
    }

    fn draw_image_scaled(
        &mut self,
        image: &ImageHandle,
        dest: Vec2,
        scale: f32,
        tint: Color,
    ) -> Result<(), GameError> {
        self.record(DrawCall::ImageScaled {
            image: image.id,
            dest,
            scale,
            tint,
        })
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: u32,
        color: Color,
    ) -> Result<(), GameError> {
        self.record(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        })
    }

    fn end_frame(&mut self) -> Result<(), GameError> {
        self.in_frame = false;
        self.frames.push(std::mem::take(&mut self.current));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_outside_frame_are_rejected() {
        let mut backend = RecordingBackend::new(1.0 / 60.0);

        assert!(matches!(backend.clear(Color::RAYWHITE), Err(GameError::Render(_))));
        assert!(matches!(
            backend.draw_text("late", 0.0, 0.0, 10, Color::RED),
            Err(GameError::Render(_))
        ));
        assert!(backend.frames.is_empty());
    }

    #[test]
    fn test_clear_inside_frame_is_recorded() {
        let mut backend = RecordingBackend::new(1.0 / 60.0);

        backend.begin_frame();
        backend.clear(Color::RAYWHITE).expect("clear in frame");
        backend.end_frame().expect("end frame");

        assert_eq!(backend.last_frame(), &[DrawCall::Clear(Color::RAYWHITE)]);
    }
}
