//! Wall and target-edge collision queries
//!
//! Walls are thin static strips sitting just outside the arena edges, so a
//! ball box overlaps one exactly when it has crossed the corresponding
//! bound. Target hits are resolved against 2-unit strips flanking each
//! edge of the target rectangle; the matched edge determines which
//! velocity component reflects.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

/// Which wall the ball ran into, in resolution priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    Left,
    Right,
    Top,
    Bottom,
}

/// The four static wall strips bounding the play field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Walls {
    left: Aabb,
    right: Aabb,
    top: Aabb,
    bottom: Aabb,
}

impl Walls {
    pub fn new() -> Self {
        Self {
            left: Aabb::from_origin(
                DVec2::new(-WALL_THICKNESS, 0.0),
                WALL_THICKNESS,
                ARENA_HEIGHT,
            ),
            right: Aabb::from_origin(DVec2::new(ARENA_WIDTH, 0.0), WALL_THICKNESS, ARENA_HEIGHT),
            top: Aabb::from_origin(
                DVec2::new(0.0, -WALL_THICKNESS),
                ARENA_WIDTH,
                WALL_THICKNESS,
            ),
            bottom: Aabb::from_origin(DVec2::new(0.0, ARENA_HEIGHT), ARENA_WIDTH, WALL_THICKNESS),
        }
    }

    /// Classify a ball box against the walls. First match wins, in left,
    /// right, top, bottom order; simultaneous multi-edge contact therefore
    /// resolves a single axis per tick.
    pub fn classify(&self, ball_box: &Aabb) -> Option<WallContact> {
        if ball_box.intersects(&self.left) {
            Some(WallContact::Left)
        } else if ball_box.intersects(&self.right) {
            Some(WallContact::Right)
        } else if ball_box.intersects(&self.top) {
            Some(WallContact::Top)
        } else if ball_box.intersects(&self.bottom) {
            Some(WallContact::Bottom)
        } else {
            None
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge of a target rectangle, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl TargetEdge {
    pub const CHECK_ORDER: [TargetEdge; 4] = [
        TargetEdge::Top,
        TargetEdge::Bottom,
        TargetEdge::Left,
        TargetEdge::Right,
    ];

    /// Horizontal edges reflect the vertical velocity component
    pub fn reflects_y(&self) -> bool {
        matches!(self, TargetEdge::Top | TargetEdge::Bottom)
    }
}

/// The 2-unit strip flanking one edge of `rect`. Horizontal strips extend
/// downward from the edge line, vertical strips extend rightward.
pub fn edge_strip(rect: &Aabb, edge: TargetEdge) -> Aabb {
    match edge {
        TargetEdge::Top => Aabb::from_origin(rect.min, rect.width(), TARGET_EDGE_STRIP),
        TargetEdge::Bottom => Aabb::from_origin(
            DVec2::new(rect.min.x, rect.max.y),
            rect.width(),
            TARGET_EDGE_STRIP,
        ),
        TargetEdge::Left => Aabb::from_origin(rect.min, TARGET_EDGE_STRIP, rect.height()),
        TargetEdge::Right => Aabb::from_origin(
            DVec2::new(rect.max.x, rect.min.y),
            TARGET_EDGE_STRIP,
            rect.height(),
        ),
    }
}

/// First edge of `rect` whose strip overlaps `ball_box`, in top, bottom,
/// left, right order. A target is hit through at most one edge per tick.
pub fn hit_edge(rect: &Aabb, ball_box: &Aabb) -> Option<TargetEdge> {
    TargetEdge::CHECK_ORDER
        .into_iter()
        .find(|edge| ball_box.intersects(&edge_strip(rect, *edge)))
}
