//! Hit-testing and target-zone geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Circle;

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        crate::midpoint(self.min, self.max)
    }

    /// Inclusive on all four edges
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// The target strip: full width, `band_height` tall, flush with the bottom
pub fn target_zone(width: f32, height: f32, band_height: f32) -> Rect {
    Rect::new(
        Vec2::new(0.0, height - band_height),
        Vec2::new(width, height),
    )
}

/// Whether a circle counts as dropped into the target zone.
///
/// Only the center is tested, not the circle's extent: a circle hanging
/// halfway over the top edge of the strip does not count.
pub fn is_in_target_zone(circle: &Circle, width: f32, height: f32, band_height: f32) -> bool {
    target_zone(width, height, band_height).contains(circle.center)
}

/// Signed distance from `p` to a circle's edge (negative inside)
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}
