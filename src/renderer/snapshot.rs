//! What the host needs to draw one frame

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Board, Rect, Rgb};

/// One circle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleSprite {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub dragging: bool,
}

/// Text the host should render on top of the frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOverlay {
    pub text: String,
    /// Center of the text baseline
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgb,
}

/// Read-only view of the board for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub area: Vec2,
    pub background: Rgb,
    /// In collection order
    pub circles: Vec<CircleSprite>,
    pub target_zone: Rect,
    /// Color asked for by the target zone; `None` once the round is over
    pub target_color: Option<Rgb>,
    pub round_over: bool,
    pub overlay: Option<TextOverlay>,
}

impl Snapshot {
    /// Capture the board. `overlay_text` is shown centered once the round is over.
    pub fn capture(board: &Board, background: Rgb, overlay_text: &str, overlay_size: f32) -> Self {
        let area = board.area();
        let overlay = board.is_round_over().then(|| TextOverlay {
            text: overlay_text.to_string(),
            pos: area * 0.5,
            size: overlay_size,
            color: Rgb::RED,
        });

        Self {
            area,
            background,
            circles: board
                .circles
                .iter()
                .map(|c| CircleSprite {
                    center: c.center,
                    radius: c.radius,
                    color: c.color,
                    dragging: c.dragging,
                })
                .collect(),
            target_zone: board.target_zone(),
            target_color: board.target_color(),
            round_over: board.is_round_over(),
            overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::tests::board_with;

    #[test]
    fn test_capture_live_round() {
        let board = board_with(&[(10.0, 10.0, Rgb::RED), (500.0, 500.0, Rgb::WHITE)]);
        let snap = Snapshot::capture(&board, Rgb::LIGHT_GRAY, "Game Over!", 50.0);

        assert_eq!(snap.circles.len(), 2);
        assert_eq!(snap.circles[0].center, Vec2::new(10.0, 10.0));
        assert_eq!(snap.target_color, Some(Rgb::RED));
        assert_eq!(snap.target_zone.min, Vec2::new(0.0, 900.0));
        assert!(!snap.round_over);
        assert!(snap.overlay.is_none());
    }

    #[test]
    fn test_capture_round_over_has_overlay() {
        let mut board = board_with(&[(10.0, 960.0, Rgb::RED)]);
        board.resolve_drop(1);
        let snap = Snapshot::capture(&board, Rgb::LIGHT_GRAY, "Game Over!", 50.0);

        assert!(snap.round_over);
        assert!(snap.circles.is_empty());
        assert_eq!(snap.target_color, None);
        let overlay = snap.overlay.unwrap();
        assert_eq!(overlay.text, "Game Over!");
        assert_eq!(overlay.pos, Vec2::new(500.0, 500.0));
        assert_eq!(overlay.color, Rgb::RED);
    }

    #[test]
    fn test_snapshot_serializes() {
        let board = board_with(&[(10.0, 10.0, Rgb::RED)]);
        let snap = Snapshot::capture(&board, Rgb::LIGHT_GRAY, "Game Over!", 50.0);
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["round_over"], false);
        assert_eq!(json["circles"][0]["color"]["r"], 255);
    }
}
