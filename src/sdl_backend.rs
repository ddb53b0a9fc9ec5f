//! SDL2 implementation of the presentation backend.
//!
//! Textures borrow the `TextureCreator`, so the creator lives in `main` and
//! the backend holds a reference to it. Dropping the backend frees every
//! texture; dropping the canvas closes the window.

use crate::text::{draw_simple_text, scale_for_size};
use dapper_dasher::backend::{Color, ImageHandle, Key, PresentationBackend};
use dapper_dasher::collision::Rect;
use dapper_dasher::error::GameError;
use glam::Vec2;
use sdl2::event::Event;
use sdl2::image::LoadTexture;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl};
use std::time::{Duration, Instant};

/// Opens a centered window and returns its accelerated canvas.
pub fn create_window(sdl_context: &Sdl, width: u32, height: u32, title: &str) -> Result<Canvas<Window>, String> {
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(title, width, height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    window.into_canvas().build().map_err(|e| e.to_string())
}

fn to_sdl_color(color: Color) -> sdl2::pixels::Color {
    sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a)
}

fn to_sdl_rect(x: f32, y: f32, width: f32, height: f32) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(x.floor() as i32, y.floor() as i32, width as u32, height as u32)
}

pub struct SdlBackend<'a> {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    texture_creator: &'a TextureCreator<WindowContext>,
    textures: Vec<Texture<'a>>,
    frame_duration: Option<Duration>,
    frame_start: Instant,
    last_frame_time: f32,
    quit_requested: bool,
}

impl<'a> SdlBackend<'a> {
    pub fn new(
        canvas: Canvas<Window>,
        event_pump: EventPump,
        texture_creator: &'a TextureCreator<WindowContext>,
    ) -> Self {
        SdlBackend {
            canvas,
            event_pump,
            texture_creator,
            textures: Vec::new(),
            frame_duration: None,
            frame_start: Instant::now(),
            last_frame_time: 0.0,
            quit_requested: false,
        }
    }

    fn texture_mut(&mut self, image: &ImageHandle) -> Result<&mut Texture<'a>, GameError> {
        self.textures
            .get_mut(image.id)
            .ok_or_else(|| GameError::Render(format!("unknown image {}", image.id)))
    }
}

impl PresentationBackend for SdlBackend<'_> {
    fn set_target_fps(&mut self, fps: u32) {
        self.frame_duration = (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64));
    }

    fn frame_time(&mut self) -> f32 {
        self.last_frame_time
    }

    fn should_close(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => self.quit_requested = true,
                _ => {}
            }
        }
        self.quit_requested
    }

    fn is_key_down(&mut self, key: Key) -> bool {
        let scancode = match key {
            Key::Jump => Scancode::Space,
        };
        self.event_pump.keyboard_state().is_scancode_pressed(scancode)
    }

    fn load_image(&mut self, path: &str) -> Result<ImageHandle, GameError> {
        let texture = self
            .texture_creator
            .load_texture(path)
            .map_err(|e| GameError::AssetLoad {
                path: path.to_string(),
                reason: e,
            })?;

        let query = texture.query();
        log::info!("Loaded {} ({}x{})", path, query.width, query.height);

        self.textures.push(texture);
        Ok(ImageHandle {
            id: self.textures.len() - 1,
            width: query.width,
            height: query.height,
        })
    }

    fn begin_frame(&mut self) {}

    fn clear(&mut self, color: Color) -> Result<(), GameError> {
        self.canvas.set_draw_color(to_sdl_color(color));
        self.canvas.clear();
        Ok(())
    }

    fn draw_image_region(
        &mut self,
        image: &ImageHandle,
        source: Rect,
        dest: Vec2,
        tint: Color,
    ) -> Result<(), GameError> {
        let src = to_sdl_rect(source.x, source.y, source.width, source.height);
        let dst = to_sdl_rect(dest.x, dest.y, source.width, source.height);

        let texture = self.texture_mut(image)?;
        texture.set_color_mod(tint.r, tint.g, tint.b);
        texture.set_alpha_mod(tint.a);

        let texture = &self.textures[image.id];
        self.canvas
            .copy(texture, Some(src), Some(dst))
            .map_err(GameError::Render)
    }

    fn draw_image_scaled(
        &mut self,
        image: &ImageHandle,
        dest: Vec2,
        scale: f32,
        tint: Color,
    ) -> Result<(), GameError> {
        let dst = to_sdl_rect(
            dest.x,
            dest.y,
            image.width as f32 * scale,
            image.height as f32 * scale,
        );

        let texture = self.texture_mut(image)?;
        texture.set_color_mod(tint.r, tint.g, tint.b);
        texture.set_alpha_mod(tint.a);

        let texture = &self.textures[image.id];
        self.canvas
            .copy(texture, None, Some(dst))
            .map_err(GameError::Render)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: u32,
        color: Color,
    ) -> Result<(), GameError> {
        draw_simple_text(
            &mut self.canvas,
            text,
            x as i32,
            y as i32,
            to_sdl_color(color),
            scale_for_size(size),
        )
        .map_err(GameError::Render)
    }

    fn end_frame(&mut self) -> Result<(), GameError> {
        self.canvas.present();

        // Cap the frame rate, then measure the whole frame including the wait
        if let Some(target) = self.frame_duration {
            let elapsed = self.frame_start.elapsed();
            if elapsed < target {
                std::thread::sleep(target - elapsed);
            }
        }

        let now = Instant::now();
        self.last_frame_time = now.duration_since(self.frame_start).as_secs_f32();
        self.frame_start = now;
        Ok(())
    }
}
