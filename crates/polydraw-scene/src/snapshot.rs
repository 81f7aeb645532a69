//! Draw-time data handed to the render collaborator.
//!
//! The scene never draws. Once per frame the host takes a snapshot and
//! renders it however it likes; everything in here is plain geometry and
//! display state.

use crate::scene::PointColor;
use polydraw_core::Vec2;

/// Draw data for one placed point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSnapshot {
    /// Marker position.
    pub position: Vec2,
    /// Current display color.
    pub color: PointColor,
}

/// Draw data for one authored shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSnapshot {
    /// Shape center.
    pub center: Vec2,
    /// Vertices in construction order.
    pub vertices: Vec<Vec2>,
    /// Edges in construction order.
    pub edges: Vec<(Vec2, Vec2)>,
}

/// Everything the host needs to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    /// Canvas width, in canvas units.
    pub canvas_width: f64,
    /// Canvas height, in canvas units.
    pub canvas_height: f64,
    /// Marker diameter for drawing points.
    pub point_size: f64,
    /// Placed points in placement order.
    pub points: Vec<PointSnapshot>,
    /// Edges between placed points, resolved to position pairs, in the
    /// order they were linked.
    pub point_edges: Vec<(Vec2, Vec2)>,
    /// Authored background shapes in authoring order.
    pub shapes: Vec<ShapeSnapshot>,
}
