//! # Polydraw Scene
//!
//! The scene collaborator for the Polydraw editor: owns the list of
//! placed points and the edges linking them, decides what a pointer
//! click means (reuse an existing point, create a new one, or nothing),
//! and manages hover feedback with deferred self-validating reverts.
//!
//! The host canvas runtime drives this crate: it forwards pointer events
//! as they arrive, calls [`Scene::tick`] once per frame, and renders the
//! pure data returned by [`Scene::snapshot`]. Nothing here draws, blocks,
//! or spawns threads.

pub mod error;
pub mod scene;
pub mod settings;
pub mod snapshot;

pub use error::{Result, SceneError};
pub use scene::{ClickOutcome, PointColor, Scene, ScenePoint};
pub use settings::SceneSettings;
pub use snapshot::{PointSnapshot, SceneSnapshot, ShapeSnapshot};
