//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride for a host vertex buffer layout
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` within a vertex
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();
}

/// Colors for fixed game elements
pub mod colors {
    /// Target band once nothing is left to match
    pub const TARGET_IDLE: [f32; 4] = [0.27, 0.27, 0.27, 1.0];
    /// Outline around the circle being dragged
    pub const DRAG_HIGHLIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
}
