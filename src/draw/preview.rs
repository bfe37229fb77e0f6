//! Live preview geometry for the sketch in progress.

use crate::geometry::{Point, Segment};
use serde::Serialize;

/// Read-only projection of the sketch in progress.
///
/// Holds the polyline through the placed vertices and the dashed "rubber-band"
/// guide from the last vertex to the pointer. Both are empty while idle.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Preview {
    pub polyline: Vec<Point>,
    pub guide: Option<Segment>,
}

impl Preview {
    /// Projects `current` vertices and the `pointer` position into preview geometry.
    pub fn project(current: &[Point], pointer: Point) -> Self {
        let guide = current.last().map(|&last| Segment::new(last, pointer));
        Self {
            polyline: current.to_vec(),
            guide,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.polyline.is_empty() && self.guide.is_none()
    }
}
