//! Geometry for drawing angles and vectors.
//!
//! Nothing here renders. [`arc_points`] and [`arrow`] produce the points a
//! plotting front end needs to draw the angle between two vectors and a vector
//! with an arrowhead.

use crate::constants::{DEGENERATE_EPSILON, PARALLEL_EPSILON};
use crate::{GeomError, GeomResult, RotationMatrix3, Vector3};

const ARC_OPERATION: &str = "arc_points";
const ARROW_OPERATION: &str = "arrow";

/// Points of a circular arc of `radius` centred on `origin`.
///
/// The arc starts along `v1` and sweeps `angle` radians about the normal
/// `v1 × v2`, so a positive angle turns `v1` toward `v2`. When the two vectors
/// are parallel (or `v2` is zero) the normal falls back to `v1 × ŷ`, or to the
/// x-axis when `v1` lies along y. `num_points` samples are spaced evenly over
/// `[0, angle]`, both ends included.
///
/// # Errors
///
/// [`GeomError::DegenerateVector`] when `v1` is zero or either vector is not
/// finite; [`GeomError::ShapeMismatch`] when `angle` or `radius` is not finite.
pub fn arc_points(
    origin: Vector3,
    v1: Vector3,
    v2: Vector3,
    angle: f64,
    num_points: usize,
    radius: f64,
) -> GeomResult<Vec<Vector3>> {
    check_finite(ARC_OPERATION, "angle", angle)?;
    check_finite(ARC_OPERATION, "radius", radius)?;
    let u1 = v1
        .try_normalize(DEGENERATE_EPSILON)
        .ok_or_else(|| GeomError::degenerate_vector(ARC_OPERATION, vec![0], DEGENERATE_EPSILON))?;
    if !v2.is_finite() {
        return Err(GeomError::degenerate_vector(ARC_OPERATION, vec![1], DEGENERATE_EPSILON));
    }

    let normal = arc_normal(&u1, &v2);
    let step = if num_points > 1 {
        angle / (num_points - 1) as f64
    } else {
        0.0
    };

    Ok((0..num_points)
        .map(|i| {
            let theta = if i + 1 == num_points && num_points > 1 {
                angle
            } else {
                step * i as f64
            };
            let rotated = RotationMatrix3::from_axis_angle(&normal, theta) * u1;
            origin + rotated * radius
        })
        .collect())
}

fn check_finite(operation: &str, name: &str, value: f64) -> GeomResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeomError::shape_mismatch(
            operation,
            &format!("{} must be finite, got {}", name, value),
        ))
    }
}

fn arc_normal(u1: &Vector3, v2: &Vector3) -> Vector3 {
    if let Some(n) = u1.cross(v2).try_normalize(PARALLEL_EPSILON) {
        return n;
    }
    // -y also lands here since its cross with ŷ vanishes.
    u1.cross(&Vector3::y_axis())
        .try_normalize(PARALLEL_EPSILON)
        .unwrap_or_else(Vector3::x_axis)
}

/// A drawable vector: the shaft from `start` to `end` and the two barb
/// endpoints of its arrowhead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrow {
    pub start: Vector3,
    pub end: Vector3,
    pub barbs: [Vector3; 2],
}

impl Arrow {
    /// Line segments to draw, shaft first, then one per barb (each from the tip).
    pub fn segments(&self) -> [(Vector3, Vector3); 3] {
        [
            (self.start, self.end),
            (self.end, self.barbs[0]),
            (self.end, self.barbs[1]),
        ]
    }
}

/// Builds the arrow for `vector` placed at `position`.
///
/// The barbs sit `arrow_size` back from the tip along the vector and
/// `arrow_size / 2` to either side, in the plane containing the vector and
/// `û × ẑ` (`û × x̂` when the vector lies along z). A non-finite `arrow_size`
/// is a [`GeomError::ShapeMismatch`].
pub fn arrow(position: Vector3, vector: Vector3, arrow_size: f64) -> GeomResult<Arrow> {
    check_finite(ARROW_OPERATION, "arrow_size", arrow_size)?;
    let unit = vector
        .try_normalize(DEGENERATE_EPSILON)
        .ok_or_else(|| GeomError::degenerate_vector(ARROW_OPERATION, vec![0], DEGENERATE_EPSILON))?;

    let side = unit
        .cross(&Vector3::z_axis())
        .try_normalize(PARALLEL_EPSILON)
        .unwrap_or_else(|| unit.cross(&Vector3::x_axis()));

    let end = position + vector;
    let tip_base = end - unit * arrow_size;
    let offset = side * (0.5 * arrow_size);

    Ok(Arrow {
        start: position,
        end,
        barbs: [tip_base + offset, tip_base - offset],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_quarter_arc_in_xy_plane() {
        let points = arc_points(
            Vector3::zeros(),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 3.0, 0.0),
            HALF_PI,
            5,
            0.5,
        )
        .unwrap();

        assert_eq!(points.len(), 5);
        assert!(points[0].max_difference(&Vector3::new(0.5, 0.0, 0.0)) < 1e-15);
        assert!(points[4].max_difference(&Vector3::new(0.0, 0.5, 0.0)) < 1e-15);
        for p in &points {
            assert!((p.magnitude() - 0.5).abs() < 1e-15);
            assert!(p.z.abs() < 1e-15);
        }
    }

    #[test]
    fn test_arc_is_offset_by_origin() {
        let origin = Vector3::new(1.0, -1.0, 4.0);
        let points =
            arc_points(origin, Vector3::x_axis(), Vector3::z_axis(), HALF_PI, 3, 1.0).unwrap();
        for p in &points {
            assert!(((*p - origin).magnitude() - 1.0).abs() < 1e-14);
        }
    }

    #[test]
    fn test_point_counts() {
        let empty = arc_points(Vector3::zeros(), Vector3::x_axis(), Vector3::y_axis(), 1.0, 0, 1.0);
        assert!(empty.unwrap().is_empty());

        let single =
            arc_points(Vector3::zeros(), Vector3::x_axis(), Vector3::y_axis(), 1.0, 1, 2.0).unwrap();
        assert_eq!(single, vec![Vector3::new(2.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_parallel_vectors_use_fallback_normal() {
        // x̂ × ŷ = ẑ, so a positive sweep from x̂ heads toward ŷ.
        let points =
            arc_points(Vector3::zeros(), Vector3::x_axis(), Vector3::x_axis(), HALF_PI, 2, 1.0)
                .unwrap();
        assert!(points[1].max_difference(&Vector3::y_axis()) < 1e-15);

        let along_y =
            arc_points(Vector3::zeros(), Vector3::y_axis(), Vector3::y_axis(), HALF_PI, 2, 1.0)
                .unwrap();
        assert!(along_y[1].max_difference(&Vector3::z_axis()) < 1e-15);

        let along_minus_y =
            arc_points(Vector3::zeros(), -Vector3::y_axis(), Vector3::zeros(), HALF_PI, 2, 1.0)
                .unwrap();
        assert!((along_minus_y[1].magnitude() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_degenerate_start_vector() {
        let err = arc_points(Vector3::zeros(), Vector3::zeros(), Vector3::y_axis(), 1.0, 4, 1.0)
            .unwrap_err();
        assert_eq!(err.offending_indices(), Some(&[0][..]));

        let err = arc_points(
            Vector3::zeros(),
            Vector3::x_axis(),
            Vector3::new(f64::NAN, 0.0, 0.0),
            1.0,
            4,
            1.0,
        )
        .unwrap_err();
        assert_eq!(err.offending_indices(), Some(&[1][..]));
    }

    #[test]
    fn test_non_finite_angle_or_radius() {
        let arc = |angle, radius| {
            arc_points(Vector3::zeros(), Vector3::x_axis(), Vector3::y_axis(), angle, 4, radius)
        };
        assert!(matches!(arc(f64::NAN, 1.0), Err(GeomError::ShapeMismatch { .. })));
        assert!(matches!(arc(1.0, f64::INFINITY), Err(GeomError::ShapeMismatch { .. })));
        assert!(arc(1.0, 1.0).is_ok());

        let err = arrow(Vector3::zeros(), Vector3::x_axis(), f64::NAN).unwrap_err();
        assert!(err.to_string().contains("arrow_size must be finite"));
    }

    #[test]
    fn test_arrow_along_x() {
        let arrow = arrow(Vector3::new(1.0, 1.0, 0.0), Vector3::new(2.0, 0.0, 0.0), 0.2).unwrap();

        assert_eq!(arrow.start, Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(arrow.end, Vector3::new(3.0, 1.0, 0.0));
        // x̂ × ẑ = -ŷ
        assert!(arrow.barbs[0].max_difference(&Vector3::new(2.8, 0.9, 0.0)) < 1e-15);
        assert!(arrow.barbs[1].max_difference(&Vector3::new(2.8, 1.1, 0.0)) < 1e-15);
    }

    #[test]
    fn test_arrow_along_z_uses_x_reference() {
        let arrow = arrow(Vector3::zeros(), Vector3::new(0.0, 0.0, 1.0), 0.2).unwrap();
        // ẑ × x̂ = ŷ
        assert!(arrow.barbs[0].max_difference(&Vector3::new(0.0, 0.1, 0.8)) < 1e-15);
        assert!(arrow.barbs[1].max_difference(&Vector3::new(0.0, -0.1, 0.8)) < 1e-15);
        assert_eq!(arrow.segments()[0], (Vector3::zeros(), Vector3::z_axis()));
    }

    #[test]
    fn test_arrow_degenerate() {
        let err = arrow(Vector3::zeros(), Vector3::zeros(), 0.2).unwrap_err();
        assert!(matches!(err, GeomError::DegenerateVector { .. }));
    }
}
