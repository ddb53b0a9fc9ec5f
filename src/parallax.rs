//! Parallax Background
//!
//! Each layer is one horizontally tileable image scrolled leftward at its own
//! speed. Slower layers read as farther away. The layer is drawn twice, the
//! second copy butted against the first, so the wrap back to offset zero is
//! invisible.
//!
//! Layers are purely cosmetic and never feed back into gameplay.

use crate::backend::ImageHandle;

/// Returns the layer offset after scrolling for `dt` seconds.
///
/// Once a full scaled tile has scrolled past, the offset snaps back to zero,
/// keeping it within `(-(tile_width * scale), 0]`.
pub fn advance_layer(offset: f32, speed: f32, dt: f32, tile_width: f32, scale: f32) -> f32 {
    let next = offset - speed * dt;
    if next <= -(tile_width * scale) {
        log::trace!("Parallax layer wrapped at offset {}", next);
        0.0
    } else {
        next
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayer {
    pub image: ImageHandle,
    pub offset: f32,
    /// Scroll speed in pixels/second
    pub speed: f32,
    pub scale: f32,
    /// Unscaled width of one tile, from the source image
    pub tile_width: f32,
}

impl BackgroundLayer {
    pub fn new(image: ImageHandle, speed: f32, scale: f32) -> Self {
        BackgroundLayer {
            image,
            offset: 0.0,
            speed,
            scale,
            tile_width: image.width as f32,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.offset = advance_layer(self.offset, self.speed, dt, self.tile_width, self.scale);
    }

    /// Width of one tile as drawn.
    pub fn span(&self) -> f32 {
        self.tile_width * self.scale
    }

    /// X positions of the two copies that cover the viewport.
    pub fn draw_positions(&self) -> [f32; 2] {
        [self.offset, self.offset + self.span()]
    }
}

/// Background layers ordered back to front.
#[derive(Debug, Clone, Default)]
pub struct ParallaxScroller {
    layers: Vec<BackgroundLayer>,
}

impl ParallaxScroller {
    pub fn new(layers: Vec<BackgroundLayer>) -> Self {
        for (index, layer) in layers.iter().enumerate() {
            log::debug!(
                "Background layer {}: speed {} px/s, span {} px",
                index,
                layer.speed,
                layer.span()
            );
        }
        ParallaxScroller { layers }
    }

    pub fn advance(&mut self, dt: f32) {
        for layer in &mut self.layers {
            layer.advance(dt);
        }
    }

    pub fn layers(&self) -> &[BackgroundLayer] {
        &self.layers
    }
}
