//! Pointer-driven drag and drop
//!
//! Press picks up a circle, move drags it, release drops it. Events are
//! applied synchronously in arrival order against the board.

use glam::Vec2;

use super::state::{Board, DropOutcome};

/// A pointer event in play-area coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Vec2),
    Move(Vec2),
    Release(Vec2),
}

impl PointerEvent {
    pub fn pos(&self) -> Vec2 {
        match *self {
            PointerEvent::Press(p) | PointerEvent::Move(p) | PointerEvent::Release(p) => p,
        }
    }
}

/// What the controller is holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Circle identified by its board id, never by index
    Dragging { circle_id: u32 },
}

/// Observable interaction phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    Dragging(u32),
    /// Board is frozen until the round is restarted
    RoundOver,
}

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventResponse {
    /// Always true: the game swallows every pointer event
    pub consumed: bool,
    /// Host should repaint
    pub redraw: bool,
    /// Set when the event was a release that resolved a drop
    pub drop: Option<DropOutcome>,
}

impl EventResponse {
    fn consumed() -> Self {
        Self {
            consumed: true,
            redraw: false,
            drop: None,
        }
    }

    fn redraw(mut self) -> Self {
        self.redraw = true;
        self
    }
}

/// Drag/drop state machine over a [`Board`]
#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: DragState,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn phase(&self, board: &Board) -> InteractionPhase {
        if board.is_round_over() {
            return InteractionPhase::RoundOver;
        }
        match self.state {
            DragState::Idle => InteractionPhase::Idle,
            DragState::Dragging { circle_id } => InteractionPhase::Dragging(circle_id),
        }
    }

    /// Forget any in-progress drag (board is about to be replaced)
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Pick up the first circle under `pos`, if any
    fn press(&mut self, board: &mut Board, pos: Vec2) -> EventResponse {
        if let Some(id) = board.hit_test(pos) {
            if let Some(circle) = board.circle_mut(id) {
                circle.dragging = true;
            }
            log::debug!("Picked up circle {} at ({}, {})", id, pos.x, pos.y);
            self.state = DragState::Dragging { circle_id: id };
        }
        EventResponse::consumed()
    }

    /// Apply one pointer event
    pub fn handle(&mut self, board: &mut Board, event: PointerEvent) -> EventResponse {
        if board.is_round_over() {
            self.state = DragState::Idle;
            return EventResponse::consumed();
        }

        match (self.state, event) {
            (DragState::Idle, PointerEvent::Press(pos)) => self.press(board, pos),

            // Held circle vanished (board regenerated without a reset)
            (DragState::Dragging { circle_id }, PointerEvent::Press(pos))
                if board.circle(circle_id).is_none() =>
            {
                self.state = DragState::Idle;
                self.press(board, pos)
            }

            (DragState::Dragging { circle_id }, PointerEvent::Move(pos)) => {
                match board.circle_mut(circle_id) {
                    Some(circle) => {
                        circle.center = pos;
                        EventResponse::consumed().redraw()
                    }
                    None => {
                        // Board regenerated underneath us
                        self.state = DragState::Idle;
                        EventResponse::consumed()
                    }
                }
            }

            (DragState::Dragging { circle_id }, PointerEvent::Release(_)) => {
                let outcome = board.resolve_drop(circle_id);
                // Still present only if the drop missed
                if let Some(circle) = board.circle_mut(circle_id) {
                    circle.dragging = false;
                }
                self.state = DragState::Idle;
                log::debug!("Released circle {}: {:?}", circle_id, outcome);

                let mut response = EventResponse::consumed().redraw();
                response.drop = Some(outcome);
                response
            }

            // Second press mid-drag, or move/release with nothing held
            _ => EventResponse::consumed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Rgb;
    use crate::sim::state::tests::board_with;

    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn test_drag_into_zone_removes_circle() {
        let mut board = board_with(&[(10.0, 10.0, Rgb::RED), (500.0, 500.0, BLUE)]);
        let mut ctl = Controller::new();

        let r = ctl.handle(&mut board, PointerEvent::Press(Vec2::new(10.0, 10.0)));
        assert!(r.consumed);
        assert_eq!(ctl.phase(&board), InteractionPhase::Dragging(1));
        assert!(board.circle(1).unwrap().dragging);

        let r = ctl.handle(&mut board, PointerEvent::Move(Vec2::new(10.0, 960.0)));
        assert!(r.redraw);
        assert_eq!(board.circle(1).unwrap().center, Vec2::new(10.0, 960.0));

        let r = ctl.handle(&mut board, PointerEvent::Release(Vec2::new(10.0, 960.0)));
        assert!(r.redraw);
        assert_eq!(r.drop, Some(DropOutcome::Removed { remaining: 1 }));
        assert_eq!(board.len(), 1);
        assert_eq!(board.target_index(), 0);
        assert_eq!(board.target_color(), Some(BLUE));
        assert!(!board.is_round_over());
        assert_eq!(ctl.phase(&board), InteractionPhase::Idle);
    }

    #[test]
    fn test_last_drop_enters_round_over() {
        let mut board = board_with(&[(10.0, 10.0, Rgb::RED)]);
        let mut ctl = Controller::new();

        ctl.handle(&mut board, PointerEvent::Press(Vec2::new(10.0, 10.0)));
        ctl.handle(&mut board, PointerEvent::Move(Vec2::new(10.0, 960.0)));
        let r = ctl.handle(&mut board, PointerEvent::Release(Vec2::new(10.0, 960.0)));

        assert_eq!(r.drop, Some(DropOutcome::Cleared));
        assert!(board.is_round_over());
        assert_eq!(ctl.phase(&board), InteractionPhase::RoundOver);
    }

    #[test]
    fn test_press_on_empty_space_stays_idle() {
        let mut board = board_with(&[(10.0, 10.0, Rgb::RED), (500.0, 500.0, BLUE)]);
        let before = board.circles.clone();
        let mut ctl = Controller::new();

        let r = ctl.handle(&mut board, PointerEvent::Press(Vec2::new(999.0, 999.0)));
        assert!(r.consumed);
        assert!(!r.redraw);
        assert_eq!(ctl.state(), DragState::Idle);
        assert_eq!(board.circles, before);
    }

    #[test]
    fn test_first_match_wins_over_nearest() {
        // Overlapping circles (hand placed); the press is nearer to the second
        let mut board = board_with(&[(100.0, 100.0, Rgb::RED), (160.0, 100.0, BLUE)]);
        let mut ctl = Controller::new();

        ctl.handle(&mut board, PointerEvent::Press(Vec2::new(140.0, 100.0)));
        assert_eq!(ctl.state(), DragState::Dragging { circle_id: 1 });
    }

    #[test]
    fn test_missed_drop_leaves_circle_where_released() {
        let mut board = board_with(&[(10.0, 10.0, Rgb::RED), (500.0, 500.0, BLUE)]);
        let mut ctl = Controller::new();

        ctl.handle(&mut board, PointerEvent::Press(Vec2::new(500.0, 500.0)));
        ctl.handle(&mut board, PointerEvent::Move(Vec2::new(-200.0, 3000.0)));
        let r = ctl.handle(&mut board, PointerEvent::Release(Vec2::new(-200.0, 3000.0)));

        assert_eq!(r.drop, Some(DropOutcome::Missed));
        let circle = board.circle(2).unwrap();
        // No clamping to the play area
        assert_eq!(circle.center, Vec2::new(-200.0, 3000.0));
        assert!(!circle.dragging);
        assert_eq!(board.len(), 2);
        assert_eq!(board.target_index(), 0);
    }

    #[test]
    fn test_move_and_release_while_idle_do_nothing() {
        let mut board = board_with(&[(10.0, 960.0, Rgb::RED)]);
        let mut ctl = Controller::new();

        let r = ctl.handle(&mut board, PointerEvent::Move(Vec2::new(10.0, 960.0)));
        assert_eq!(r, EventResponse { consumed: true, redraw: false, drop: None });
        let r = ctl.handle(&mut board, PointerEvent::Release(Vec2::new(10.0, 960.0)));
        assert_eq!(r.drop, None);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_second_press_keeps_current_drag() {
        let mut board = board_with(&[(10.0, 10.0, Rgb::RED), (500.0, 500.0, BLUE)]);
        let mut ctl = Controller::new();

        ctl.handle(&mut board, PointerEvent::Press(Vec2::new(10.0, 10.0)));
        ctl.handle(&mut board, PointerEvent::Press(Vec2::new(500.0, 500.0)));
        assert_eq!(ctl.state(), DragState::Dragging { circle_id: 1 });
        assert!(!board.circle(2).unwrap().dragging);
    }

    #[test]
    fn test_round_over_freezes_board() {
        let mut board = board_with(&[(10.0, 960.0, Rgb::RED)]);
        assert_eq!(board.resolve_drop(1), DropOutcome::Cleared);
        let mut ctl = Controller::new();

        for event in [
            PointerEvent::Press(Vec2::new(10.0, 960.0)),
            PointerEvent::Move(Vec2::new(20.0, 20.0)),
            PointerEvent::Release(Vec2::new(20.0, 20.0)),
        ] {
            let r = ctl.handle(&mut board, event);
            assert!(r.consumed);
            assert!(!r.redraw);
        }
        assert!(board.is_empty());
        assert!(board.is_round_over());
    }

    #[test]
    fn test_stale_drag_falls_back_to_idle() {
        let mut board = board_with(&[(10.0, 10.0, Rgb::RED), (500.0, 500.0, BLUE)]);
        let mut ctl = Controller::new();
        ctl.handle(&mut board, PointerEvent::Press(Vec2::new(10.0, 10.0)));

        board.circles.retain(|c| c.id != 1);
        let r = ctl.handle(&mut board, PointerEvent::Move(Vec2::new(50.0, 50.0)));
        assert!(!r.redraw);
        assert_eq!(ctl.state(), DragState::Idle);
    }

    #[test]
    fn test_press_after_regenerate_without_reset() {
        let mut board = board_with(&[(10.0, 10.0, Rgb::RED)]);
        let mut ctl = Controller::new();
        ctl.handle(&mut board, PointerEvent::Press(Vec2::new(10.0, 10.0)));

        // Host swaps the board but never calls reset
        board = board_with(&[(500.0, 500.0, BLUE)]);
        board.circles[0].id = 7;
        ctl.handle(&mut board, PointerEvent::Press(Vec2::new(500.0, 500.0)));
        assert_eq!(ctl.state(), DragState::Dragging { circle_id: 7 });
        assert!(board.circle(7).unwrap().dragging);
    }

    #[test]
    fn test_press_after_regenerate_on_empty_space() {
        let mut board = board_with(&[(10.0, 10.0, Rgb::RED)]);
        let mut ctl = Controller::new();
        ctl.handle(&mut board, PointerEvent::Press(Vec2::new(10.0, 10.0)));

        board.circles[0].id = 9;
        ctl.handle(&mut board, PointerEvent::Press(Vec2::new(900.0, 300.0)));
        assert_eq!(ctl.state(), DragState::Idle);
    }

    #[test]
    fn test_event_pos() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(PointerEvent::Press(p).pos(), p);
        assert_eq!(PointerEvent::Move(p).pos(), p);
        assert_eq!(PointerEvent::Release(p).pos(), p);
    }
}
