//! Board state and core simulation types
//!
//! Everything a round owns lives here. Nothing is persisted; a new round
//! discards the previous board wholesale.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, is_in_target_zone, sd_circle, target_zone};
use super::placement::{LayoutParams, PlacementError, place_circles};
use crate::consts::*;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    pub const LIGHT_GRAY: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random color, every channel over its full range
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }

    /// Normalized RGBA for vertex colors
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

/// A draggable colored token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Held by the pointer right now (view-only)
    #[serde(skip)]
    pub dragging: bool,
}

impl Circle {
    pub fn new(id: u32, center: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            id,
            center,
            radius,
            color,
            dragging: false,
        }
    }

    /// Point-in-circle test, boundary inclusive
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        sd_circle(point, self.center, self.radius) <= 0.0
    }
}

/// What a drop did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Center outside the target zone; circle stays where it was dropped
    Missed,
    /// Circle removed, round continues
    Removed { remaining: usize },
    /// Last circle removed, round is over
    Cleared,
    /// Round already over or circle unknown
    Ignored,
}

/// Circles, target pointer and round flag for the current round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Circles in insertion order
    pub circles: Vec<Circle>,
    /// Index of the circle whose color is shown in the target zone
    target: usize,
    round_over: bool,
    /// Play area (width, height)
    area: Vec2,
    /// Height of the target strip at the bottom of the area
    band_height: f32,
    next_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            circles: Vec::new(),
            target: 0,
            round_over: true,
            area: Vec2::new(DEFAULT_AREA_WIDTH, DEFAULT_AREA_HEIGHT),
            band_height: TARGET_BAND_HEIGHT,
            next_id: 1,
        }
    }
}

impl Board {
    /// Empty board; call [`Board::generate`] to start a round
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the circles with a fresh non-overlapping layout.
    ///
    /// On error the board is left exactly as it was.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        params: &LayoutParams,
    ) -> Result<(), PlacementError> {
        let circles = place_circles(rng, params, self.next_id)?;
        self.next_id += circles.len() as u32;

        self.circles = circles;
        self.target = 0;
        self.round_over = self.circles.is_empty();
        self.area = Vec2::new(params.width, params.height);
        self.band_height = params.band_height;

        log::info!(
            "New round: {} circles in {}x{} (band {})",
            self.circles.len(),
            params.width,
            params.height,
            params.band_height
        );
        Ok(())
    }

    /// Host resized the view; the target zone follows, circles stay put
    pub fn set_area(&mut self, width: f32, height: f32) {
        self.area = Vec2::new(width, height);
    }

    pub fn area(&self) -> Vec2 {
        self.area
    }

    pub fn band_height(&self) -> f32 {
        self.band_height
    }

    pub fn target_index(&self) -> usize {
        self.target
    }

    pub fn is_round_over(&self) -> bool {
        self.round_over
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Circle whose color the target zone currently asks for
    pub fn target_circle(&self) -> Option<&Circle> {
        self.circles.get(self.target)
    }

    pub fn target_color(&self) -> Option<Rgb> {
        self.target_circle().map(|c| c.color)
    }

    /// Bottom strip of the play area
    pub fn target_zone(&self) -> Rect {
        target_zone(self.area.x, self.area.y, self.band_height)
    }

    pub fn circle(&self, id: u32) -> Option<&Circle> {
        self.circles.iter().find(|c| c.id == id)
    }

    pub fn circle_mut(&mut self, id: u32) -> Option<&mut Circle> {
        self.circles.iter_mut().find(|c| c.id == id)
    }

    /// First circle in collection order containing `point`
    pub fn hit_test(&self, point: Vec2) -> Option<u32> {
        self.circles.iter().find(|c| c.contains(point)).map(|c| c.id)
    }

    /// Remove the circle if its center was released inside the target zone
    pub fn resolve_drop(&mut self, id: u32) -> DropOutcome {
        if self.round_over {
            return DropOutcome::Ignored;
        }
        let Some(index) = self.circles.iter().position(|c| c.id == id) else {
            return DropOutcome::Ignored;
        };

        if !is_in_target_zone(&self.circles[index], self.area.x, self.area.y, self.band_height) {
            return DropOutcome::Missed;
        }

        self.circles.remove(index);
        if self.circles.is_empty() {
            self.round_over = true;
            self.target = 0;
            log::info!("Round cleared");
            DropOutcome::Cleared
        } else {
            self.target = (self.target + 1) % self.circles.len();
            DropOutcome::Removed {
                remaining: self.circles.len(),
            }
        }
    }
}
