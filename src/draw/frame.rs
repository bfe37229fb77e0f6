//! Frame container for the finished polygons of a session.

use crate::geometry::Point;
use serde::Serialize;

/// A finished, closed polygon stored as a ring.
///
/// The last point repeats the first one, so a triangle holds four points.
/// Rings are only produced by the drawing state when a sketch closes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Polygon {
    ring: Vec<Point>,
}

impl Polygon {
    /// Closes `vertices` into a ring by appending the first vertex.
    ///
    /// Callers guarantee at least three vertices.
    pub(crate) fn close(mut vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= 3, "a polygon needs three vertices");
        if let Some(&start) = vertices.first() {
            vertices.push(start);
        }
        Self { ring: vertices }
    }

    /// All ring points, closing point included.
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// The distinct vertices, closing point excluded.
    pub fn vertices(&self) -> &[Point] {
        &self.ring[..self.ring.len().saturating_sub(1)]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}

/// Container for all finished polygons in the current drawing session.
///
/// Append-only: polygons are added in the order they close (first = bottom
/// layer, last = top layer) and never edited afterwards.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Frame {
    polygons: Vec<Polygon>,
}

impl Frame {
    /// Creates a new empty frame with no polygons.
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// Adds a finished polygon on top of existing ones and returns its index.
    pub fn push(&mut self, polygon: Polygon) -> usize {
        self.polygons.push(polygon);
        self.polygons.len() - 1
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
