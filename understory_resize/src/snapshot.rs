// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable starting metrics for a resize session.

use kurbo::{Point, Size};

use crate::config::{DegeneratePolicy, ResizeConfig};
use crate::error::StartError;

/// Geometry sampled at pointer-down.
///
/// The size comes from the element as currently rendered, not from its
/// declared attributes, so `auto`-sized elements resize from what the user
/// actually sees. The aspect ratio is fixed for the lifetime of the session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometrySnapshot {
    start_pointer_x: f64,
    start_size: Size,
    aspect_ratio: f64,
}

impl GeometrySnapshot {
    /// Captures the starting geometry of a session.
    ///
    /// `rendered` is `None` when the host has not mounted the element. A
    /// non-finite rendered dimension is read as `0`.
    ///
    /// # Errors
    ///
    /// - [`StartError::NotMounted`] when `rendered` is `None`.
    /// - [`StartError::DegenerateGeometry`] when no finite, positive aspect
    ///   ratio can be derived and `config.degenerate` is
    ///   [`DegeneratePolicy::Reject`].
    pub fn capture(
        rendered: Option<Size>,
        pointer: Point,
        config: &ResizeConfig,
    ) -> Result<Self, StartError> {
        let rendered = rendered.ok_or(StartError::NotMounted)?;
        let width = finite_or_zero(rendered.width);
        let height = finite_or_zero(rendered.height);

        if width > 0.0 && height > 0.0 {
            let aspect_ratio = width / height;
            if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
                return Ok(Self {
                    start_pointer_x: pointer.x,
                    start_size: Size::new(width, height),
                    aspect_ratio,
                });
            }
        }

        match config.degenerate {
            DegeneratePolicy::Reject => Err(StartError::DegenerateGeometry { width, height }),
            DegeneratePolicy::Square => {
                let side = width.max(height).max(config.min_size);
                Ok(Self {
                    start_pointer_x: pointer.x,
                    start_size: Size::new(side, side),
                    aspect_ratio: 1.0,
                })
            }
        }
    }

    /// Pointer x-coordinate at pointer-down.
    #[must_use]
    pub const fn start_pointer_x(&self) -> f64 {
        self.start_pointer_x
    }

    /// Rendered size at pointer-down.
    #[must_use]
    pub const fn start_size(&self) -> Size {
        self.start_size
    }

    /// `start_size.width / start_size.height`; always finite and positive.
    #[must_use]
    pub const fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(
        width: f64,
        height: f64,
        config: &ResizeConfig,
    ) -> Result<GeometrySnapshot, StartError> {
        GeometrySnapshot::capture(
            Some(Size::new(width, height)),
            Point::new(40.0, 7.0),
            config,
        )
    }

    #[test]
    fn records_rendered_size_and_ratio() {
        let snapshot = capture(200.0, 100.0, &ResizeConfig::default()).unwrap();
        assert_eq!(snapshot.start_pointer_x(), 40.0);
        assert_eq!(snapshot.start_size(), Size::new(200.0, 100.0));
        assert_eq!(snapshot.aspect_ratio(), 2.0);
    }

    #[test]
    fn unmounted_element_cannot_start() {
        let result = GeometrySnapshot::capture(None, Point::ZERO, &ResizeConfig::default());
        assert_eq!(result, Err(StartError::NotMounted));
    }

    #[test]
    fn zero_height_is_rejected_by_default() {
        assert_eq!(
            capture(200.0, 0.0, &ResizeConfig::default()),
            Err(StartError::DegenerateGeometry {
                width: 200.0,
                height: 0.0
            })
        );
        assert!(capture(0.0, 50.0, &ResizeConfig::default()).is_err());
        assert!(capture(f64::NAN, 50.0, &ResizeConfig::default()).is_err());
    }

    #[test]
    fn square_policy_substitutes_unit_ratio() {
        let config = ResizeConfig::new().with_degenerate(DegeneratePolicy::Square);

        let snapshot = capture(200.0, 0.0, &config).unwrap();
        assert_eq!(snapshot.aspect_ratio(), 1.0);
        assert_eq!(snapshot.start_size(), Size::new(200.0, 200.0));

        let snapshot = capture(0.0, 0.0, &config).unwrap();
        assert_eq!(snapshot.start_size(), Size::new(1.0, 1.0));
    }

    #[test]
    fn subnormal_height_does_not_produce_infinite_ratio() {
        let tiny = f64::MIN_POSITIVE / 4.0;
        assert!(matches!(
            capture(1.0e10, tiny, &ResizeConfig::default()),
            Err(StartError::DegenerateGeometry { .. })
        ));
    }
}
