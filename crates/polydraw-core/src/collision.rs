//! Bounding-circle proximity testing between world shapes.

use crate::shape::Shape;
use crate::vec2::Vec2;

/// Diameter of a bare point marker, in canvas units.
pub const POINT_SIZE: f64 = 10.0;

/// Collision radius of a bare point: half the marker size.
pub const POINT_RADIUS: f64 = POINT_SIZE / 2.0;

/// Anything that can take part in a proximity query: a bare point (the
/// cursor, or a placed scene point) or a full shape.
#[derive(Debug, Clone, Copy)]
pub enum WorldShape<'a> {
    /// A bare point; its bounding radius is the fixed marker radius.
    Point(Vec2),
    /// A polygonal shape; its bounding radius is its circumscribing
    /// circle. The shape must have at least one vertex.
    Shape(&'a Shape),
}

impl WorldShape<'_> {
    /// Center of the bounding circle.
    pub fn center(&self) -> Vec2 {
        match self {
            WorldShape::Point(p) => *p,
            WorldShape::Shape(s) => s.center(),
        }
    }

    /// Radius of the bounding circle.
    pub fn bounding_radius(&self) -> f64 {
        match self {
            WorldShape::Point(_) => POINT_RADIUS,
            WorldShape::Shape(s) => s.bounding_radius(),
        }
    }
}

/// Returns true when the bounding circles of `a` and `b` touch or
/// overlap.
///
/// Boundary-inclusive policy: circles whose center distance exactly
/// equals the sum of their radii count as touching. The same policy
/// backs both click dedup and hover highlighting in the scene layer.
///
/// Pure predicate: no state is read beyond the arguments and none is
/// mutated.
pub fn overlaps(a: &WorldShape<'_>, b: &WorldShape<'_>) -> bool {
    let d = a.center().distance_to(b.center());
    a.bounding_radius() + b.bounding_radius() >= d
}
