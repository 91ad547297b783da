//! Host-facing game facade
//!
//! Owns the board, the drag controller and the seeded RNG. The host feeds it
//! layout passes and pointer events and pulls snapshots back out.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::renderer::{Frame, Snapshot, build_frame};
use crate::settings::Settings;
use crate::sim::{Board, Controller, EventResponse, InteractionPhase, PlacementError, PointerEvent};

/// Circle count to retry with after a failed layout of `count` circles.
///
/// Always strictly smaller than `count`; `None` once a single circle fails.
fn fallback_count(count: usize, err: &PlacementError) -> Option<usize> {
    let PlacementError::Infeasible { placed, .. } = *err;
    (count > 1).then(|| placed.clamp(1, count - 1))
}

/// One running game
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    /// Run seed for reproducibility
    seed: u64,
    rng: Pcg32,
    board: Board,
    controller: Controller,
    /// Current play area reported by the host
    area: Vec2,
}

impl Game {
    /// Start a game with the first round already laid out
    pub fn new(settings: Settings, seed: u64) -> Result<Self, PlacementError> {
        let area = Vec2::new(settings.area_width, settings.area_height);
        let mut game = Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            board: Board::new(),
            controller: Controller::new(),
            area,
        };
        game.restart()?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(game)
    }

    /// Throw away the current round and lay out a new one.
    ///
    /// If the configured count does not fit, retries with as many circles as
    /// the failed attempt managed to place. Returns the number placed.
    pub fn restart(&mut self) -> Result<usize, PlacementError> {
        self.controller.reset();
        self.generate_with_fallback().map(|(placed, _)| placed)
    }

    /// Returns (circles placed, layouts tried)
    fn generate_with_fallback(&mut self) -> Result<(usize, u32), PlacementError> {
        let mut params = self.settings.layout(self.area.x, self.area.y);
        let mut layouts = 0u32;
        loop {
            layouts += 1;
            match self.board.generate(&mut self.rng, &params) {
                Ok(()) => {
                    if params.count < self.settings.circle_count {
                        log::warn!(
                            "Round started with {} of {} circles after {} layouts",
                            params.count,
                            self.settings.circle_count,
                            layouts
                        );
                    }
                    return Ok((params.count, layouts));
                }
                Err(err) => match fallback_count(params.count, &err) {
                    Some(next) => {
                        log::warn!("{}; retrying with {} circles", err, next);
                        params = params.with_count(next);
                    }
                    None => {
                        log::error!("Cannot start a round: {}", err);
                        return Err(err);
                    }
                },
            }
        }
    }

    /// Host layout pass
    pub fn resize(&mut self, width: f32, height: f32) {
        self.area = Vec2::new(width, height);
        self.board.set_area(width, height);
    }

    /// Feed one pointer event
    pub fn pointer(&mut self, event: PointerEvent) -> EventResponse {
        self.controller.handle(&mut self.board, event)
    }

    pub fn phase(&self) -> InteractionPhase {
        self.controller.phase(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn area(&self) -> Vec2 {
        self.area
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.board,
            self.settings.background,
            &self.settings.overlay_text,
            self.settings.overlay_text_size,
        )
    }

    pub fn frame(&self) -> Frame {
        build_frame(&self.snapshot(), self.settings.circle_segments)
    }
}
