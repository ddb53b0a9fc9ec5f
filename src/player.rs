use crate::backend::Color;
use crate::collision::{Collidable, Rect};
use crate::sprite::{advance_animation, Entity, SheetLayout};
use glam::Vec2;

pub struct Player {
    pub entity: Entity,
    /// Vertical velocity in pixels/second, negative is up
    pub velocity: f32,
    pub grounded: bool,
    pub frame_count: usize,
}

impl Player {
    pub fn new(position: Vec2, layout: &SheetLayout, update_time: f32) -> Self {
        Player {
            entity: Entity::new(position, layout, update_time, Color::WHITE),
            velocity: 0.0,
            grounded: true,
            frame_count: layout.frame_count,
        }
    }

    /// Places the player centered horizontally, standing on the bottom edge.
    pub fn spawn(window_width: f32, window_height: f32, layout: &SheetLayout, update_time: f32) -> Self {
        let position = Vec2::new(
            window_width / 2.0 - layout.frame_width / 2.0,
            window_height - layout.frame_height,
        );
        Player::new(position, layout, update_time)
    }

    /// Runs the run-cycle only while on the ground; airborne holds the frame.
    pub fn animate(&mut self, dt: f32) {
        if self.grounded {
            advance_animation(&mut self.entity, self.frame_count, dt);
        }
    }

    pub fn position(&self) -> Vec2 {
        self.entity.position
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Rect {
        self.entity.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SheetLayout {
        SheetLayout::new(128.0, 128.0, 6)
    }

    #[test]
    fn test_spawn_centered_on_floor() {
        let player = Player::spawn(512.0, 380.0, &layout(), 1.0 / 12.0);

        assert_eq!(player.position(), Vec2::new(192.0, 252.0));
        assert!(player.grounded);
        assert_eq!(player.velocity, 0.0);
    }

    #[test]
    fn test_bounds_use_frame_size() {
        let player = Player::spawn(512.0, 380.0, &layout(), 1.0 / 12.0);

        assert_eq!(player.get_bounds(), Rect::new(192.0, 252.0, 128.0, 128.0));
    }

    #[test]
    fn test_airborne_player_holds_frame() {
        let mut player = Player::spawn(512.0, 380.0, &layout(), 0.25);
        player.grounded = false;
        player.animate(1.0);

        assert_eq!(player.entity.frame_index, 0);
        assert_eq!(player.entity.running_time, 0.0);

        player.grounded = true;
        player.animate(0.25);
        assert_eq!(player.entity.frame_index, 1);
    }
}
