use crate::backend::{Color, ImageHandle};
use crate::collision::Rect;
use glam::Vec2;

/// Frame grid of a sprite sheet, derived from the loaded image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub frame_width: f32,
    pub frame_height: f32,
    /// Frames cycled by the animation, taken left to right along row 0
    pub frame_count: usize,
}

impl SheetLayout {
    pub fn new(frame_width: f32, frame_height: f32, frame_count: usize) -> Self {
        SheetLayout {
            frame_width,
            frame_height,
            frame_count,
        }
    }

    /// Splits an image into `columns` x `rows` equally sized frames.
    pub fn from_image(image: &ImageHandle, columns: u32, rows: u32, frame_count: usize) -> Self {
        SheetLayout {
            frame_width: image.width as f32 / columns as f32,
            frame_height: image.height as f32 / rows as f32,
            frame_count,
        }
    }
}

/// An animated sprite placed on screen.
///
/// `frame` does double duty: `x`/`y` are the source offset into the sheet and
/// `width`/`height` are both the drawn size and the collision size.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub position: Vec2,
    pub frame: Rect,
    pub frame_index: usize,
    /// Seconds accumulated toward the next frame
    pub running_time: f32,
    /// Seconds each frame stays on screen
    pub update_time: f32,
    pub tint: Color,
}

impl Entity {
    pub fn new(position: Vec2, layout: &SheetLayout, update_time: f32, tint: Color) -> Self {
        Entity {
            position,
            frame: Rect::new(0.0, 0.0, layout.frame_width, layout.frame_height),
            frame_index: 0,
            running_time: 0.0,
            update_time,
            tint,
        }
    }

    /// Rectangle the entity covers on screen.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.frame.width,
            self.frame.height,
        )
    }
}

/// Advances the entity's animation by `dt` seconds.
///
/// At most one frame is advanced per call. Time beyond one period is
/// dropped, not carried into the next frame.
pub fn advance_animation(entity: &mut Entity, frame_count: usize, dt: f32) {
    if frame_count == 0 {
        return;
    }

    entity.running_time += dt;
    if entity.running_time >= entity.update_time {
        entity.running_time = 0.0;
        entity.frame_index = (entity.frame_index + 1) % frame_count;
        entity.frame.x = entity.frame_index as f32 * entity.frame.width;
    }
}
