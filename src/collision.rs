//! Collision detection for Dapper Dasher
//!
//! This module provides a trait-based collision system with AABB (Axis-Aligned Bounding Box)
//! detection over floating-point rectangles in screen pixels.
//!
//! # Architecture
//!
//! - `Rect`: Position and size of anything that can be drawn or hit
//! - `Collidable` trait: Implemented by entities that expose a collision rectangle
//! - AABB functions: Pure functions for rectangle intersection detection
//!
//! The player collides with its full drawn rectangle, while obstacles report a
//! hitbox inset by their padding (see `Rect::deflate`). The difference is a
//! fairness margin and is part of the game's feel.

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrinks the rectangle by `pad` on every side.
    ///
    /// The origin moves by `+pad` and each dimension loses `2 * pad`.
    pub fn deflate(&self, pad: f32) -> Rect {
        Rect {
            x: self.x + pad,
            y: self.y + pad,
            width: self.width - 2.0 * pad,
            height: self.height - 2.0 * pad,
        }
    }
}

/// Trait for entities that participate in collision detection.
///
/// # Example
///
/// ```rust
/// use dapper_dasher::collision::{Collidable, Rect};
///
/// struct Crate {
///     bounds: Rect,
/// }
///
/// impl Collidable for Crate {
///     fn get_bounds(&self) -> Rect {
///         self.bounds
///     }
/// }
///
/// let crate_box = Crate { bounds: Rect::new(0.0, 0.0, 16.0, 16.0) };
/// assert_eq!(crate_box.get_bounds().right(), 16.0);
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box used for hit tests.
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes. The
/// comparisons are strict, so rectangles that only share an edge do not
/// intersect.
///
/// # Example
///
/// ```rust
/// use dapper_dasher::collision::{aabb_intersect, Rect};
///
/// let player_bounds = Rect::new(10.0, 10.0, 32.0, 32.0);
/// let nebula_hitbox = Rect::new(20.0, 20.0, 32.0, 32.0);
///
/// assert!(aabb_intersect(&player_bounds, &nebula_hitbox));
/// ```
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x < b.right() && a.right() > b.x;
    let y_overlap = a.y < b.bottom() && a.bottom() > b.y;

    x_overlap && y_overlap
}

/// Checks whether `entity` overlaps any member of `entities`.
///
/// Stops at the first hit and allocates nothing.
pub fn collides_with_any<T: Collidable>(entity: &impl Collidable, entities: &[T]) -> bool {
    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .any(|other| aabb_intersect(&entity_bounds, &other.get_bounds()))
}
