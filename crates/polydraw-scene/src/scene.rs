//! Scene authoring state: placed points, the edges linking them, and
//! hover feedback with deferred self-validating reverts.

use crate::error::Result;
use crate::settings::SceneSettings;
use crate::snapshot::{PointSnapshot, SceneSnapshot, ShapeSnapshot};
use polydraw_core::{overlaps, Shape, Vec2, WorldShape};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Display state of a placed point. Cosmetic only; never consulted by
/// collision logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointColor {
    /// Resting state.
    Default,
    /// Pointer is (or was recently) over the point.
    Hover,
}

/// A point placed by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePoint {
    /// Scene-assigned identity; edges reference points by this id.
    pub id: u64,
    /// Where the point sits on the canvas.
    pub position: Vec2,
    /// Current display color.
    pub color: PointColor,
}

/// What a pointer click did to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click landed on an existing point, which was reused as the
    /// chain endpoint.
    Reused(u64),
    /// A new point was created.
    Created(u64),
    /// Nothing was hit and new-point creation was gated off.
    Ignored,
}

/// A scheduled hover revert. Reverts are never cancelled; they re-check
/// the hover condition when they come due and no-op if it still holds.
#[derive(Debug, Clone, Copy)]
struct HoverRevert {
    point_id: u64,
    due: Instant,
}

/// Mutable scene state, driven by the host canvas runtime.
///
/// The host forwards pointer events to [`Scene::handle_click`] and
/// [`Scene::handle_pointer_move`], calls [`Scene::tick`] once per frame,
/// and renders [`Scene::snapshot`]. All calls arrive on one thread.
#[derive(Debug, Clone)]
pub struct Scene {
    settings: SceneSettings,
    shapes: Vec<Shape>,
    points: Vec<ScenePoint>,
    edges: Vec<(u64, u64)>,
    active_point: Option<u64>,
    pending_reverts: Vec<HoverRevert>,
    next_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty scene with default settings.
    pub fn new() -> Self {
        Self {
            settings: SceneSettings::default(),
            shapes: Vec::new(),
            points: Vec::new(),
            edges: Vec::new(),
            active_point: None,
            pending_reverts: Vec::new(),
            next_id: 0,
        }
    }

    /// Creates an empty scene with the given settings.
    pub fn with_settings(settings: SceneSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::new()
        })
    }

    /// The scene's settings.
    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Adds an authored background shape (e.g. a rectangle placed at
    /// scene setup).
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Authored shapes in authoring order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Placed points in placement order.
    pub fn points(&self) -> &[ScenePoint] {
        &self.points
    }

    /// Looks up a placed point by id.
    pub fn point(&self, id: u64) -> Option<&ScenePoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Point-to-point edges as id pairs, in link order.
    pub fn edges(&self) -> &[(u64, u64)] {
        &self.edges
    }

    /// The current chain endpoint, if any.
    pub fn active_point(&self) -> Option<u64> {
        self.active_point
    }

    /// Ends the current point chain: the next created point will not be
    /// linked to the previous one.
    pub fn end_chain(&mut self) {
        self.active_point = None;
    }

    /// Returns the id of the first placed point whose marker the given
    /// position touches, if any.
    pub fn hit_point(&self, pos: Vec2) -> Option<u64> {
        let cursor = WorldShape::Point(pos);
        self.points
            .iter()
            .find(|p| overlaps(&cursor, &WorldShape::Point(p.position)))
            .map(|p| p.id)
    }

    /// Handles a pointer click at `pos`.
    ///
    /// A click on an existing point reuses that point as the chain
    /// endpoint instead of creating a duplicate. A click on empty canvas
    /// creates a new point when `allow_new` is set (the "new-shape mode"
    /// gate, owned by the host UI) and links it to the previous endpoint.
    pub fn handle_click(&mut self, pos: Vec2, allow_new: bool) -> ClickOutcome {
        match self.hit_point(pos) {
            Some(id) => {
                if let Some(prev) = self.active_point {
                    if prev != id {
                        self.edges.push((prev, id));
                        debug!(from = prev, to = id, "linked to existing point");
                    }
                }
                self.active_point = Some(id);
                ClickOutcome::Reused(id)
            }
            None if allow_new => {
                let id = self.next_id;
                self.next_id += 1;
                self.points.push(ScenePoint {
                    id,
                    position: pos,
                    color: PointColor::Default,
                });
                if let Some(prev) = self.active_point {
                    self.edges.push((prev, id));
                    debug!(from = prev, to = id, "linked new point");
                }
                self.active_point = Some(id);
                debug!(id, x = pos.x, y = pos.y, "placed point");
                ClickOutcome::Created(id)
            }
            None => {
                trace!(x = pos.x, y = pos.y, "click ignored, new points gated off");
                ClickOutcome::Ignored
            }
        }
    }

    /// Handles a pointer move to `pos` at time `now`.
    ///
    /// Every point the pointer touches is highlighted, and a revert is
    /// scheduled one delay out the moment a point enters hover. The
    /// revert is not cancelled when the pointer leaves; it re-validates
    /// itself in [`Scene::tick`].
    pub fn handle_pointer_move(&mut self, pos: Vec2, now: Instant) {
        let cursor = WorldShape::Point(pos);
        let delay = self.hover_delay();
        for i in 0..self.points.len() {
            let hit = overlaps(&cursor, &WorldShape::Point(self.points[i].position));
            if hit && self.points[i].color == PointColor::Default {
                self.points[i].color = PointColor::Hover;
                let point_id = self.points[i].id;
                trace!(point = point_id, "hover acquired");
                self.pending_reverts.push(HoverRevert {
                    point_id,
                    due: now + delay,
                });
            }
        }
    }

    /// Advances scene time to `now`, firing due hover reverts.
    ///
    /// Each due revert re-runs the collision test against the current
    /// pointer position before touching state: if the point is still
    /// hovered the revert no-ops and reschedules itself, so a stale
    /// revert never clobbers a freshly reacquired hover. Called once per
    /// frame by the host.
    pub fn tick(&mut self, now: Instant, pointer: Vec2) {
        let cursor = WorldShape::Point(pointer);
        let delay = self.hover_delay();
        let mut i = 0;
        while i < self.pending_reverts.len() {
            if self.pending_reverts[i].due > now {
                i += 1;
                continue;
            }
            let revert = self.pending_reverts.swap_remove(i);
            let Some(idx) = self.points.iter().position(|p| p.id == revert.point_id) else {
                continue;
            };
            let still_hovered =
                overlaps(&cursor, &WorldShape::Point(self.points[idx].position));
            if still_hovered {
                self.pending_reverts.push(HoverRevert {
                    point_id: revert.point_id,
                    due: now + delay,
                });
            } else {
                self.points[idx].color = PointColor::Default;
                trace!(point = revert.point_id, "hover reverted");
            }
        }
    }

    /// Takes the draw-time snapshot for the render collaborator.
    pub fn snapshot(&self) -> SceneSnapshot {
        let position_of =
            |id: u64| self.points.iter().find(|p| p.id == id).map(|p| p.position);
        let point_edges = self
            .edges
            .iter()
            .filter_map(|&(a, b)| Some((position_of(a)?, position_of(b)?)))
            .collect();

        SceneSnapshot {
            canvas_width: self.settings.canvas_width,
            canvas_height: self.settings.canvas_height,
            point_size: self.settings.point_size,
            points: self
                .points
                .iter()
                .map(|p| PointSnapshot {
                    position: p.position,
                    color: p.color,
                })
                .collect(),
            point_edges,
            shapes: self
                .shapes
                .iter()
                .map(|s| ShapeSnapshot {
                    center: s.center(),
                    vertices: s.vertices().to_vec(),
                    edges: s.edges().to_vec(),
                })
                .collect(),
        }
    }

    fn hover_delay(&self) -> Duration {
        Duration::from_millis(self.settings.hover_revert_ms)
    }
}
