//! Axis-aligned box geometry for the rectangular arena
//!
//! Everything the ball can touch — walls, paddle, targets, the ball
//! itself — is tested through axis-aligned bounding boxes. Boxes are
//! stored as min/max corners in arena coordinates (y grows downward).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box, stored as min/max corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Box of the given size centered on `center`
    pub fn from_center(center: DVec2, width: f64, height: f64) -> Self {
        let half = DVec2::new(width / 2.0, height / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Box from its top-left corner and size
    pub fn from_origin(origin: DVec2, width: f64, height: f64) -> Self {
        Self {
            min: origin,
            max: origin + DVec2::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    /// Overlap test, inclusive of touching edges
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Check if a point lies inside the box (inclusive)
    pub fn contains_point(&self, point: DVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Capability shared by every entity that takes part in collision tests
///
/// Each implementor reports its own box; the overlap test itself is common.
pub trait Collider {
    fn bounding_box(&self) -> Aabb;

    /// Box-overlap test against any other collider
    fn collides_with<C: Collider + ?Sized>(&self, other: &C) -> bool {
        self.bounding_box().intersects(&other.bounding_box())
    }
}
