//! # Polydraw Core
//!
//! Geometric model and collision-detection subsystem for the Polydraw
//! scene editor.
//!
//! ## Core Components
//!
//! - **Vec2**: immutable 2D point/vector value with difference and
//!   Euclidean-distance operations
//! - **Shape**: a vertex/edge collection with a known center, tagged by
//!   how it was constructed
//! - **Rectangle factory**: builds an axis-aligned rectangle from a corner
//!   and a size, deriving the center by intersecting the two diagonals
//! - **WorldShape**: the common input type for proximity queries — either
//!   a bare point or a full shape
//! - **overlaps**: the bounding-circle touch-or-overlap predicate
//!
//! Everything here is pure data and pure functions. Rendering, event
//! delivery, and scene mutation live in the `polydraw-scene` crate and in
//! the host canvas runtime.

pub mod collision;
pub mod error;
pub mod shape;
pub mod vec2;

pub use collision::{overlaps, WorldShape, POINT_RADIUS, POINT_SIZE};
pub use error::{Error, Result};
pub use shape::{Shape, ShapeKind};
pub use vec2::Vec2;
