use crate::backend::Color;
use crate::collision::{Collidable, Rect};
use crate::sprite::{advance_animation, Entity, SheetLayout};
use glam::Vec2;

/// Tints cycled through by position in the set
pub const OBSTACLE_PALETTE: [Color; 4] = [Color::WHITE, Color::RED, Color::BLUE, Color::PURPLE];

/// A nebula drifting left across the level.
pub struct Obstacle {
    pub entity: Entity,
    /// Leftward speed in pixels/second
    pub speed: f32,
    /// Inset applied to every side of the drawn rect to get the hitbox
    pub padding: f32,
}

impl Obstacle {
    pub fn new(entity: Entity, speed: f32, padding: f32) -> Self {
        Obstacle {
            entity,
            speed,
            padding,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.entity.position.x -= self.speed * dt;
    }

    pub fn hitbox(&self) -> Rect {
        self.entity.bounds().deflate(self.padding)
    }
}

impl Collidable for Obstacle {
    fn get_bounds(&self) -> Rect {
        self.hitbox()
    }
}

/// Settings shared by every obstacle in a set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleParams {
    pub count: usize,
    pub speed: f32,
    pub padding: f32,
    pub update_time: f32,
}

/// The level's fixed line-up of obstacles.
///
/// Obstacles are created once, spaced one window width apart, and only ever
/// move left. Nothing wraps: once the last one has passed, the level is over.
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
    frame_count: usize,
    speed: f32,
}

impl ObstacleSet {
    /// Lines obstacles up on the floor at `window_width * (index + 1)`.
    pub fn new(window_width: f32, window_height: f32, layout: &SheetLayout, params: &ObstacleParams) -> Self {
        let obstacles = (0..params.count)
            .map(|index| {
                let position = Vec2::new(
                    window_width * (index + 1) as f32,
                    window_height - layout.frame_height,
                );
                let tint = OBSTACLE_PALETTE[index % OBSTACLE_PALETTE.len()];
                let entity = Entity::new(position, layout, params.update_time, tint);
                Obstacle::new(entity, params.speed, params.padding)
            })
            .collect();

        Self::from_obstacles(obstacles, layout.frame_count, params.speed)
    }

    pub fn from_obstacles(obstacles: Vec<Obstacle>, frame_count: usize, speed: f32) -> Self {
        log::debug!("Obstacle set: {} obstacles at {} px/s", obstacles.len(), speed);
        ObstacleSet {
            obstacles,
            frame_count,
            speed,
        }
    }

    /// Moves every obstacle left.
    pub fn update(&mut self, dt: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.update(dt);
        }
    }

    pub fn animate(&mut self, dt: f32) {
        for obstacle in &mut self.obstacles {
            advance_animation(&mut obstacle.entity, self.frame_count, dt);
        }
    }

    /// Starting x of the farthest obstacle, where the finish line begins.
    pub fn rightmost_x(&self) -> f32 {
        self.obstacles
            .iter()
            .map(|obstacle| obstacle.entity.position.x)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nebula() -> SheetLayout {
        SheetLayout::new(100.0, 100.0, 8)
    }

    fn params(count: usize) -> ObstacleParams {
        ObstacleParams {
            count,
            speed: 200.0,
            padding: 50.0,
            update_time: 0.25,
        }
    }

    #[test]
    fn test_staggered_by_window_width() {
        let set = ObstacleSet::new(512.0, 380.0, &nebula(), &params(3));
        let xs: Vec<f32> = set.obstacles().iter().map(|o| o.entity.position.x).collect();

        assert_eq!(xs, vec![512.0, 1024.0, 1536.0]);
        assert!(set.obstacles().iter().all(|o| o.entity.position.y == 280.0));
        assert_eq!(set.rightmost_x(), 1536.0);
    }

    #[test]
    fn test_palette_cycles_by_index() {
        let set = ObstacleSet::new(512.0, 380.0, &nebula(), &params(6));
        let tints: Vec<Color> = set.obstacles().iter().map(|o| o.entity.tint).collect();

        assert_eq!(tints[0], OBSTACLE_PALETTE[0]);
        assert_eq!(tints[3], OBSTACLE_PALETTE[3]);
        assert_eq!(tints[4], OBSTACLE_PALETTE[0]);
        assert_eq!(tints[5], OBSTACLE_PALETTE[1]);
    }

    #[test]
    fn test_update_moves_left_without_wrapping() {
        let mut set = ObstacleSet::new(512.0, 380.0, &nebula(), &params(1));
        set.update(1.0);
        assert_eq!(set.obstacles()[0].entity.position.x, 312.0);

        set.update(5.0);
        assert_eq!(set.obstacles()[0].entity.position.x, -688.0);
    }

    #[test]
    fn test_hitbox_is_padded() {
        let set = ObstacleSet::new(512.0, 380.0, &nebula(), &ObstacleParams { padding: 20.0, ..params(1) });

        assert_eq!(set.obstacles()[0].hitbox(), Rect::new(532.0, 300.0, 60.0, 60.0));
        assert_eq!(set.obstacles()[0].get_bounds(), set.obstacles()[0].hitbox());
    }

    #[test]
    fn test_animate_advances_every_obstacle() {
        let mut set = ObstacleSet::new(512.0, 380.0, &nebula(), &params(3));
        set.animate(0.25);

        assert!(set.obstacles().iter().all(|o| o.entity.frame_index == 1));
        assert!(set.obstacles().iter().all(|o| o.entity.frame.x == 100.0));
    }
}
