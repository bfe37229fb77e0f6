//! Screen-space to drawing-space coordinate mapping.

use crate::geometry::{Point, Transform};
use thiserror::Error;

/// Reasons a pointer position could not be mapped into drawing space.
///
/// Every variant means "drop this event"; none of them is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MapError {
    #[error("drawing surface has no screen transform yet")]
    NoTransform,

    #[error("drawing surface transform is not invertible")]
    Singular,

    #[error("pointer position ({x}, {y}) does not map to a finite point")]
    NonFinite { x: f64, y: f64 },
}

/// Converts pointer positions into drawing-space coordinates.
///
/// Holds the drawing-space to screen-space transform of the surface (its
/// current screen CTM) and applies the inverse. The inverse is cached when
/// the transform is set so each pointer event is a single matrix apply.
#[derive(Debug, Clone, Default)]
pub struct CoordinateMapper {
    transform: Option<Transform>,
    inverse: Option<Transform>,
}

impl CoordinateMapper {
    /// Updates the surface transform; `None` marks the surface as not laid out.
    pub fn set_transform(&mut self, transform: Option<Transform>) {
        self.transform = transform;
        self.inverse = transform.and_then(|t| t.inverse());
        if transform.is_some() && self.inverse.is_none() {
            log::warn!("Surface transform {:?} is not invertible", transform);
        }
    }

    /// Maps a screen-space position to drawing space.
    ///
    /// Both the screen position and the mapped result must be finite; a huge
    /// position pushed through a shrinking transform can overflow.
    pub fn map(&self, screen: Point) -> Result<Point, MapError> {
        let non_finite = MapError::NonFinite {
            x: screen.x,
            y: screen.y,
        };
        if !screen.is_finite() {
            return Err(non_finite);
        }
        let inverse = match (self.transform, self.inverse) {
            (None, _) => return Err(MapError::NoTransform),
            (Some(_), None) => return Err(MapError::Singular),
            (Some(_), Some(inverse)) => inverse,
        };
        let point = inverse.apply(screen);
        if !point.is_finite() {
            return Err(non_finite);
        }
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(transform: Transform) -> CoordinateMapper {
        let mut mapper = CoordinateMapper::default();
        mapper.set_transform(Some(transform));
        mapper
    }

    #[test]
    fn unset_transform_is_an_error() {
        let mapper = CoordinateMapper::default();
        assert_eq!(
            mapper.map(Point::new(10.0, 10.0)),
            Err(MapError::NoTransform)
        );
    }

    #[test]
    fn offset_surface_subtracts_offset() {
        let mapper = laid_out(Transform::translate(1.0, 51.0));
        assert_eq!(
            mapper.map(Point::new(101.0, 151.0)),
            Ok(Point::new(100.0, 100.0))
        );
    }

    #[test]
    fn scaled_surface_divides_scale() {
        let mapper = laid_out(Transform::scale_translate(2.0, 0.0, 50.0));
        assert_eq!(
            mapper.map(Point::new(20.0, 70.0)),
            Ok(Point::new(10.0, 10.0))
        );
    }

    #[test]
    fn map_round_trips_through_transform() {
        let transform = Transform::scale_translate(0.5, 3.0, 4.0);
        let mapper = laid_out(transform);
        let drawing = mapper.map(Point::new(13.0, 24.0)).unwrap();
        assert_eq!(transform.apply(drawing), Point::new(13.0, 24.0));
    }

    #[test]
    fn singular_transform_is_an_error() {
        let mapper = laid_out(Transform::scale_translate(0.0, 0.0, 0.0));
        assert_eq!(mapper.map(Point::new(1.0, 1.0)), Err(MapError::Singular));
    }

    #[test]
    fn non_finite_pointer_is_rejected() {
        let mapper = laid_out(Transform::IDENTITY);
        assert!(matches!(
            mapper.map(Point::new(f64::INFINITY, 0.0)),
            Err(MapError::NonFinite { .. })
        ));
    }

    #[test]
    fn overflowing_result_is_rejected() {
        let mapper = laid_out(Transform::scale_translate(1e-3, 0.0, 0.0));
        assert_eq!(
            mapper.map(Point::new(1e308, 0.0)),
            Err(MapError::NonFinite { x: 1e308, y: 0.0 })
        );
    }

    #[test]
    fn tiny_scale_still_maps() {
        let mapper = laid_out(Transform::scale_translate(1e-7, 0.0, 0.0));
        let point = mapper.map(Point::new(1e-6, 2e-7)).unwrap();
        assert!(point.distance_to(Point::new(10.0, 2.0)) < 1e-9);
    }

    #[test]
    fn clearing_transform_disables_mapping() {
        let mut mapper = laid_out(Transform::IDENTITY);
        mapper.set_transform(None);
        assert_eq!(mapper.map(Point::ORIGIN), Err(MapError::NoTransform));
    }
}
