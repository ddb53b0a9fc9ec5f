//! Vertical motion for the player: gravity, jumping and ground contact.
//!
//! The floor is soft. Landing zeroes the velocity but never snaps the
//! position, so a falling sprite may sink a fraction of a pixel below the
//! floor line before it comes to rest.

use crate::player::Player;

/// World constants for vertical motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// Downward acceleration in pixels/second²
    pub gravity: f32,
    /// Velocity added on jump, negative is up
    pub jump_velocity: f32,
    /// Y coordinate of the floor line
    pub floor_y: f32,
}

/// An entity is grounded when its bottom edge is at or below the floor.
pub fn is_grounded(y: f32, height: f32, floor_y: f32) -> bool {
    y + height >= floor_y
}

/// Steps the player's vertical state forward by `dt` seconds.
///
/// Order matters: gravity only applies while airborne, and the jump impulse
/// is added after the ground check, so a player can jump on the frame it lands.
pub fn integrate(player: &mut Player, kinematics: &Kinematics, jump_held: bool, dt: f32) {
    let entity = &mut player.entity;

    player.grounded = is_grounded(entity.position.y, entity.frame.height, kinematics.floor_y);
    if player.grounded {
        player.velocity = 0.0;
    } else {
        player.velocity += kinematics.gravity * dt;
    }

    if player.grounded && jump_held {
        player.velocity += kinematics.jump_velocity;
    }

    entity.position.y += player.velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::SheetLayout;
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn world() -> Kinematics {
        Kinematics {
            gravity: 1600.0,
            jump_velocity: -800.0,
            floor_y: 380.0,
        }
    }

    fn player_at(y: f32) -> Player {
        let layout = SheetLayout::new(80.0, 80.0, 6);
        Player::new(Vec2::new(131.0, y), &layout, 1.0 / 12.0)
    }

    #[test]
    fn test_grounded_at_floor() {
        assert!(is_grounded(300.0, 80.0, 380.0));
        assert!(is_grounded(300.5, 80.0, 380.0));
        assert!(!is_grounded(299.5, 80.0, 380.0));
    }

    #[test]
    fn test_resting_player_stays_put_for_two_seconds() {
        let mut player = player_at(300.0);

        for _ in 0..120 {
            integrate(&mut player, &world(), false, DT);
            assert_eq!(player.entity.position.y, 300.0);
            assert_eq!(player.velocity, 0.0);
            assert!(player.grounded);
        }
    }

    #[test]
    fn test_jump_from_ground() {
        let mut player = player_at(300.0);
        integrate(&mut player, &world(), true, DT);

        assert_eq!(player.velocity, -800.0);
        assert_eq!(player.entity.position.y, 300.0 + -800.0 * DT);
    }

    #[test]
    fn test_jump_ignored_in_air() {
        let mut player = player_at(100.0);
        player.velocity = -200.0;
        integrate(&mut player, &world(), true, DT);

        assert!(!player.grounded);
        assert_eq!(player.velocity, -200.0 + 1600.0 * DT);
    }

    #[test]
    fn test_landing_zeroes_velocity_without_snapping() {
        let mut player = player_at(300.4);
        player.velocity = 500.0;
        integrate(&mut player, &world(), false, DT);

        assert!(player.grounded);
        assert_eq!(player.velocity, 0.0);
        assert_eq!(player.entity.position.y, 300.4);
    }

    #[test]
    fn test_full_jump_returns_to_ground() {
        let mut player = player_at(300.0);
        integrate(&mut player, &world(), true, DT);

        assert!(player.entity.position.y < 300.0);

        let mut frames = 0;
        loop {
            integrate(&mut player, &world(), false, DT);
            frames += 1;
            if player.grounded {
                break;
            }
            assert!(frames < 600, "player never landed");
        }

        // Soft floor: may rest slightly past the line, never above it
        assert!(player.entity.position.y + 80.0 >= 380.0);
    }

    proptest! {
        #[test]
        fn test_grounded_without_input_is_static(dt in 0.0f32..1.0, sink in 0.0f32..5.0) {
            let mut player = player_at(300.0 + sink);
            let before = player.entity.position.y;
            integrate(&mut player, &world(), false, dt);

            prop_assert_eq!(player.velocity, 0.0);
            prop_assert_eq!(player.entity.position.y, before);
        }

        #[test]
        fn test_airborne_velocity_gains_gravity(
            y in -500.0f32..290.0,
            velocity in -900.0f32..900.0,
            dt in 0.0f32..0.1,
            jump in any::<bool>(),
        ) {
            let mut player = player_at(y);
            player.velocity = velocity;
            integrate(&mut player, &world(), jump, dt);

            prop_assert!(!player.grounded);
            prop_assert_eq!(player.velocity, velocity + 1600.0 * dt);
        }
    }
}
