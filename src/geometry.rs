//! Geometry primitives shared by the mapper, the drawing state and the renderer.
//!
//! This module provides:
//! - [`Point`]: a drawing-space (or screen-space) coordinate pair
//! - [`Segment`]: a straight line between two points
//! - [`Transform`]: a 2D affine matrix mapping drawing space to screen space

use serde::{Deserialize, Serialize};

// ============================================================================
// Points and Segments
// ============================================================================

/// A 2D coordinate pair.
///
/// Once recorded by the drawing state a point is never mutated; it is `Copy`
/// so vertex lists can hand out values freely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Straight line between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}

// ============================================================================
// Affine Transform
// ============================================================================

/// 2D affine transform in the `[a b c d e f]` layout used by SVG/Cairo matrices.
///
/// Maps a point `(x, y)` to:
/// ```text
/// x' = a*x + c*y + e
/// y' = b*x + d*y + f
/// ```
///
/// For the drawing surface this is the drawing-space to screen-space transform
/// (offset of the surface on screen, plus any scroll or scale).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 6]", into = "[f64; 6]")]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 6]> for Transform {
    fn from([a, b, c, d, e, f]: [f64; 6]) -> Self {
        Self { a, b, c, d, e, f }
    }
}

impl From<Transform> for [f64; 6] {
    fn from(t: Transform) -> Self {
        [t.a, t.b, t.c, t.d, t.e, t.f]
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Pure translation by `(tx, ty)`.
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    /// Uniform scale around the origin followed by a translation.
    pub fn scale_translate(scale: f64, tx: f64, ty: f64) -> Self {
        Self {
            a: scale,
            d: scale,
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Applies the transform to a point.
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }

    /// Returns the inverse transform, or `None` if the matrix is singular or
    /// either it or its inverse holds non-finite entries.
    ///
    /// Small but non-zero scales are invertible; only an exactly zero
    /// determinant, or one so small its reciprocal overflows, is rejected.
    pub fn inverse(&self) -> Option<Transform> {
        if !self.is_finite() {
            return None;
        }
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }

        let inv_det = 1.0 / det;
        let a = self.d * inv_det;
        let b = -self.b * inv_det;
        let c = -self.c * inv_det;
        let d = self.a * inv_det;
        let inverse = Transform {
            a,
            b,
            c,
            d,
            e: -(a * self.e + c * self.f),
            f: -(b * self.e + d * self.f),
        };
        inverse.is_finite().then_some(inverse)
    }
}
