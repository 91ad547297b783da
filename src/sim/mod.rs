//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG passed in explicitly
//! - Stable iteration order (insertion order of circles)
//! - No rendering or platform dependencies

pub mod collision;
pub mod interaction;
pub mod placement;
pub mod state;

pub use collision::{Rect, is_in_target_zone, sd_circle, target_zone};
pub use interaction::{Controller, DragState, EventResponse, InteractionPhase, PointerEvent};
pub use placement::{LayoutParams, PlacementError, place_circles};
pub use state::{Board, Circle, DropOutcome, Rgb};
