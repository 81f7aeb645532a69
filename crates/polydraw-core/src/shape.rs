//! Polygonal shapes: vertex/edge collections with a known center.

use crate::error::{Error, Result};
use crate::vec2::Vec2;
use smallvec::{smallvec, SmallVec};

/// How a shape was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Arbitrary vertex/edge collection supplied by the caller.
    Freeform,
    /// Axis-aligned rectangle built from a corner position and a size.
    AxisAlignedRect,
}

/// A collection of vertices with a center and an explicit edge list.
///
/// Vertices and edges keep the exact order they were constructed with:
/// edge pairs reference vertices by value, and the render collaborator
/// depends on stable ordering for visual consistency across frames.
/// Shapes are built once at scene-authoring time and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    center: Vec2,
    vertices: SmallVec<[Vec2; 4]>,
    edges: SmallVec<[(Vec2, Vec2); 4]>,
}

impl Shape {
    /// Creates a free-form shape from an explicit center, vertex list, and
    /// edge list. Edges may duplicate and need not close a loop.
    pub fn freeform(
        center: Vec2,
        vertices: impl IntoIterator<Item = Vec2>,
        edges: impl IntoIterator<Item = (Vec2, Vec2)>,
    ) -> Self {
        Self {
            kind: ShapeKind::Freeform,
            center,
            vertices: vertices.into_iter().collect(),
            edges: edges.into_iter().collect(),
        }
    }

    /// Creates an axis-aligned rectangle from its top-left corner and a
    /// size vector.
    ///
    /// The four corners are derived from `position` and `size`, and the
    /// center is computed by intersecting the two diagonals in
    /// slope-intercept form. The algebra makes no axis-alignment
    /// assumption beyond how the corners are labeled, so the same solve
    /// carries over to general quadrilaterals.
    ///
    /// The stored edges are the four sides (TL-TR, TL-BL, TR-BR, BL-BR).
    /// The diagonals are used only for the center solve.
    ///
    /// Fails with [`Error::InvalidGeometry`] when either size component is
    /// zero: zero width makes both diagonal slopes non-finite, zero
    /// height makes the diagonals coincident horizontal lines.
    pub fn axis_aligned_rect(position: Vec2, size: Vec2) -> Result<Self> {
        let v1 = Vec2::new(position.x, position.y);
        let v2 = Vec2::new(position.x + size.x, position.y);
        let v3 = Vec2::new(position.x, position.y + size.y);
        let v4 = Vec2::new(position.x + size.x, position.y + size.y);

        let center = diagonal_intersection(v1, v2, v3, v4)?;

        Ok(Self {
            kind: ShapeKind::AxisAlignedRect,
            center,
            vertices: smallvec![v1, v2, v3, v4],
            edges: smallvec![(v1, v2), (v1, v3), (v2, v4), (v3, v4)],
        })
    }

    /// How this shape was constructed.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The shape's center.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Vertices in construction order.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Edge pairs in construction order.
    pub fn edges(&self) -> &[(Vec2, Vec2)] {
        &self.edges
    }

    /// Radius of the circumscribing circle: the maximum distance from the
    /// center to any vertex. Zero for a shape with no vertices.
    pub fn bounding_radius(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| self.center.distance_to(*v))
            .fold(0.0, f64::max)
    }
}

/// Intersects the diagonals (v1-v4) and (v2-v3) of a quadrilateral using
/// the line equations `y = m*x + b`.
fn diagonal_intersection(v1: Vec2, v2: Vec2, v3: Vec2, v4: Vec2) -> Result<Vec2> {
    let d0 = v4 - v1;
    let m0 = d0.y / d0.x;
    let b0 = v1.y - m0 * v1.x;

    let d1 = v3 - v2;
    let m1 = d1.y / d1.x;
    let b1 = v2.y - m1 * v2.x;

    // A vertical diagonal has no slope-intercept form; letting the
    // infinities through would yield a NaN center.
    if !m0.is_finite() || !m1.is_finite() {
        return Err(Error::invalid_geometry("vertical diagonal (zero width)"));
    }

    let dm = m0 - m1;
    if dm == 0.0 {
        return Err(Error::invalid_geometry(
            "parallel diagonals (zero height)",
        ));
    }

    let x = (b1 - b0) / dm;
    let y = m0 * x + b0;
    Ok(Vec2::new(x, y))
}
