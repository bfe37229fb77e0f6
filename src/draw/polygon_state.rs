//! Polygon sketching state machine.
//!
//! A sketch starts with the first vertex and grows one vertex per click. A
//! click that lands close enough to the first vertex, once at least three
//! vertices exist, closes the sketch into a [`Polygon`] instead of adding a
//! vertex. Both outcomes go through [`PolygonDrawState::add_vertex`]; there is
//! no separate "finish" entry point.

use super::frame::{Frame, Polygon};
use crate::geometry::Point;
use log::{debug, info};

/// Default distance (drawing-space units) under which a click closes the sketch.
pub const DEFAULT_CLOSE_THRESHOLD: f64 = 10.0;

/// Minimum vertices already placed before a click may close the sketch.
const MIN_VERTICES_TO_CLOSE: usize = 3;

/// Current sketching state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawingState {
    /// No sketch in progress
    #[default]
    Idle,
    /// A sketch is in progress
    Drawing {
        /// Vertices placed so far, in click order (never empty)
        points: Vec<Point>,
    },
}

/// Coarse status for UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStatus {
    Idle,
    Drawing,
}

/// What a call to [`PolygonDrawState::add_vertex`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexOutcome {
    /// First vertex of a new sketch
    Started,
    /// Vertex appended to the sketch in progress
    Added,
    /// Sketch closed into the polygon at `index` in the frame
    Closed { index: usize },
}

/// Holds the sketch in progress and the finished polygons.
#[derive(Debug, Clone)]
pub struct PolygonDrawState {
    state: DrawingState,
    frame: Frame,
    close_threshold: f64,
}

impl Default for PolygonDrawState {
    fn default() -> Self {
        Self::new(DEFAULT_CLOSE_THRESHOLD)
    }
}

impl PolygonDrawState {
    /// Creates an idle state with no polygons.
    ///
    /// `close_threshold` is expected to be finite and non-negative; config
    /// loading clamps user values before they get here.
    pub fn new(close_threshold: f64) -> Self {
        Self {
            state: DrawingState::Idle,
            frame: Frame::new(),
            close_threshold,
        }
    }

    pub fn close_threshold(&self) -> f64 {
        self.close_threshold
    }

    /// Records a click at drawing-space point `p`.
    ///
    /// # Behavior
    /// - Idle: starts a sketch with `p` as its first vertex
    /// - Drawing, `|p - start| < close_threshold` and more than two vertices
    ///   placed: appends the first vertex to close the ring, pushes the ring to
    ///   the frame and returns to Idle (`p` itself is not recorded)
    /// - Drawing otherwise: appends `p`
    pub fn add_vertex(&mut self, p: Point) -> VertexOutcome {
        let points = match &mut self.state {
            DrawingState::Idle => {
                debug!("Starting polygon at ({:.1}, {:.1})", p.x, p.y);
                self.state = DrawingState::Drawing { points: vec![p] };
                return VertexOutcome::Started;
            }
            DrawingState::Drawing { points } => points,
        };

        let start = points[0];
        let distance = p.distance_to(start);

        if distance < self.close_threshold && points.len() >= MIN_VERTICES_TO_CLOSE {
            let vertices = std::mem::take(points);
            self.state = DrawingState::Idle;
            let polygon = Polygon::close(vertices);
            let vertex_count = polygon.vertex_count();
            let index = self.frame.push(polygon);
            info!("Closed polygon #{index} with {vertex_count} vertices");
            VertexOutcome::Closed { index }
        } else {
            points.push(p);
            VertexOutcome::Added
        }
    }

    /// Finished polygons in closing order.
    pub fn polygons(&self) -> &[Polygon] {
        self.frame.polygons()
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Vertices of the sketch in progress (empty when idle).
    pub fn current_polygon(&self) -> &[Point] {
        match &self.state {
            DrawingState::Idle => &[],
            DrawingState::Drawing { points } => points,
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn status(&self) -> DrawStatus {
        match self.state {
            DrawingState::Idle => DrawStatus::Idle,
            DrawingState::Drawing { .. } => DrawStatus::Drawing,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.status() == DrawStatus::Drawing
    }
}
