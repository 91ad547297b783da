//! Host-facing rendering
//!
//! The game never touches a GPU or canvas. It hands the host a [`Snapshot`]
//! and, for hosts that draw triangles, a tessellated [`Frame`].

pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use snapshot::{CircleSprite, Snapshot, TextOverlay};
pub use vertex::Vertex;

use glam::Vec2;

use vertex::colors;

/// Outline width around the dragged circle
const DRAG_RING_WIDTH: f32 = 4.0;

/// Triangles for one frame plus any text the host must draw itself
#[derive(Debug, Clone)]
pub struct Frame {
    /// Triangle list in play-area coordinates, back to front
    pub vertices: Vec<Vertex>,
    pub overlay: Option<TextOverlay>,
}

impl Frame {
    /// Raw vertex bytes ready for a host vertex buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Map play-area coordinates (origin top-left, y down) to NDC (-1..1, y up)
    pub fn to_ndc(&self, area: Vec2) -> Vec<Vertex> {
        if area.x <= 0.0 || area.y <= 0.0 {
            return Vec::new();
        }
        self.vertices
            .iter()
            .map(|v| {
                let x = v.position[0] / area.x * 2.0 - 1.0;
                let y = 1.0 - v.position[1] / area.y * 2.0;
                Vertex::new(x, y, v.color)
            })
            .collect()
    }
}

/// Tessellate a snapshot: background, circles, dragged circle on top, target band
pub fn build_frame(snapshot: &Snapshot, segments: u32) -> Frame {
    let mut vertices = shapes::rect(
        &crate::sim::Rect::new(Vec2::ZERO, snapshot.area),
        snapshot.background.to_rgba(1.0),
    );

    let (dragged, resting): (Vec<&CircleSprite>, Vec<&CircleSprite>) =
        snapshot.circles.iter().partition(|c| c.dragging);

    for c in resting {
        vertices.extend(shapes::circle(c.center, c.radius, c.color.to_rgba(1.0), segments));
    }

    let zone_color = snapshot
        .target_color
        .map(|c| c.to_rgba(1.0))
        .unwrap_or(colors::TARGET_IDLE);
    vertices.extend(shapes::rect(&snapshot.target_zone, zone_color));

    // Dragged circle stays visible while it passes over the band
    for c in dragged {
        vertices.extend(shapes::circle(c.center, c.radius, c.color.to_rgba(1.0), segments));
        vertices.extend(shapes::ring(
            c.center,
            c.radius,
            c.radius + DRAG_RING_WIDTH,
            colors::DRAG_HIGHLIGHT,
            segments,
        ));
    }

    Frame {
        vertices,
        overlay: snapshot.overlay.clone(),
    }
}
