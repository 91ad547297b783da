//! Random non-overlapping circle layout
//!
//! Rejection sampling: draw a center uniformly over the playable rectangle
//! (area minus the target band, inset by the radius) and keep it only if it
//! clears every circle placed so far. Each circle gets a bounded number of
//! draws so an overcrowded layout fails instead of spinning forever.

use glam::Vec2;
use rand::Rng;

use super::state::{Circle, Rgb};
use crate::circles_overlap;
use crate::consts::PLACEMENT_ATTEMPTS_PER_CIRCLE;

/// Layout could not be produced
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlacementError {
    #[error(
        "placed {placed} of {requested} circles before running out of attempts ({attempts} tried)"
    )]
    Infeasible {
        placed: usize,
        requested: usize,
        attempts: u32,
    },
}

/// Inputs for one layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    pub count: usize,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    /// Height reserved at the bottom for the target strip
    pub band_height: f32,
    /// Candidate draws allowed per circle
    pub attempts_per_circle: u32,
}

impl LayoutParams {
    pub fn new(count: usize, width: f32, height: f32, radius: f32, band_height: f32) -> Self {
        Self {
            count,
            width,
            height,
            radius,
            band_height,
            attempts_per_circle: PLACEMENT_ATTEMPTS_PER_CIRCLE,
        }
    }

    pub fn with_attempts(mut self, attempts_per_circle: u32) -> Self {
        self.attempts_per_circle = attempts_per_circle;
        self
    }

    /// Same layout with a different circle count
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Range of valid centers as (min, max); `None` if not even one circle fits
    pub fn center_bounds(&self) -> Option<(Vec2, Vec2)> {
        let min = Vec2::splat(self.radius);
        let max = Vec2::new(
            self.width - self.radius,
            self.height - self.band_height - self.radius,
        );
        // Written this way so NaN inputs also land in `None`
        if min.is_finite() && max.is_finite() && max.x >= min.x && max.y >= min.y {
            Some((min, max))
        } else {
            None
        }
    }
}

/// Produce `params.count` non-overlapping circles with ids starting at `first_id`
pub fn place_circles<R: Rng + ?Sized>(
    rng: &mut R,
    params: &LayoutParams,
    first_id: u32,
) -> Result<Vec<Circle>, PlacementError> {
    let mut circles: Vec<Circle> = Vec::with_capacity(params.count);
    if params.count == 0 {
        return Ok(circles);
    }

    let Some((min, max)) = params.center_bounds() else {
        log::warn!(
            "No room for a radius {} circle in {}x{} with band {}",
            params.radius,
            params.width,
            params.height,
            params.band_height
        );
        return Err(PlacementError::Infeasible {
            placed: 0,
            requested: params.count,
            attempts: 0,
        });
    };

    let mut total_attempts = 0u32;
    for i in 0..params.count {
        let mut accepted = None;
        for _ in 0..params.attempts_per_circle {
            total_attempts = total_attempts.saturating_add(1);
            let candidate = Vec2::new(
                rng.random_range(min.x..=max.x),
                rng.random_range(min.y..=max.y),
            );
            if circles
                .iter()
                .all(|c| !circles_overlap(candidate, c.center, params.radius))
            {
                accepted = Some(candidate);
                break;
            }
        }

        let Some(center) = accepted else {
            log::warn!(
                "Placement gave up after {} attempts with {}/{} circles placed",
                total_attempts,
                circles.len(),
                params.count
            );
            return Err(PlacementError::Infeasible {
                placed: circles.len(),
                requested: params.count,
                attempts: total_attempts,
            });
        };

        let color = Rgb::random(rng);
        circles.push(Circle::new(first_id + i as u32, center, params.radius, color));
    }

    log::debug!("Placed {} circles in {} attempts", circles.len(), total_attempts);
    Ok(circles)
}
