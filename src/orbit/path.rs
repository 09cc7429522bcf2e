//! Static orbit path sampling for rendering.
//!
//! Samples a conic section from the orbital elements and orients it in the
//! ecliptic frame. This is a rendering-only code path: time propagation in
//! the parent module supports bound orbits exclusively, while the path
//! sampler also covers parabolic and hyperbolic shapes.

use bevy::math::DVec3;
use std::f64::consts::PI;
use thiserror::Error;

use super::{orbital_rotation, OrbitalElements};

/// Conic shape classified from the eccentricity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitShape {
    Circular,
    Elliptical,
    Parabolic,
    Hyperbolic,
}

/// Failure to sample an orbit path.
#[derive(Debug, Error, PartialEq)]
pub enum OrbitPathError {
    /// Negative or non-finite eccentricity; no conic section exists.
    #[error("invalid eccentricity {0}: orbit path cannot be generated")]
    InvalidEccentricity(f64),
}

/// Classify the conic shape for an eccentricity.
pub fn classify(e: f64) -> Result<OrbitShape, OrbitPathError> {
    if !e.is_finite() || e < 0.0 {
        return Err(OrbitPathError::InvalidEccentricity(e));
    }
    Ok(if e == 0.0 {
        OrbitShape::Circular
    } else if e < 1.0 {
        OrbitShape::Elliptical
    } else if e == 1.0 {
        OrbitShape::Parabolic
    } else {
        OrbitShape::Hyperbolic
    })
}

/// Sample an orbit path in render space.
///
/// Returns the classified shape and a polyline of `segments + 1` points,
/// rotated by the element orientation and scaled by `space_scale`. Bound
/// orbits produce a closed loop; parabolic and hyperbolic paths cover a
/// limited true-anomaly arc around perihelion (matching what an orrery can
/// usefully display of an unbound trajectory).
pub fn sample_path(
    elements: &OrbitalElements,
    segments: usize,
    space_scale: f64,
) -> Result<(OrbitShape, Vec<DVec3>), OrbitPathError> {
    let shape = classify(elements.e)?;
    let (a, e) = (elements.a, elements.e);
    let segments = segments.max(16);

    let mut points = Vec::with_capacity(segments + 1);

    match shape {
        OrbitShape::Circular | OrbitShape::Elliptical => {
            // Full ellipse via true-anomaly sweep from the focus
            let p = a * (1.0 - e * e); // semi-latus rectum
            for step in 0..=segments {
                let nu = step as f64 / segments as f64 * 2.0 * PI;
                let r = p / (1.0 + e * nu.cos());
                points.push(super::orbital_plane_position(r, nu));
            }
        }
        OrbitShape::Parabolic => {
            // r = p / (1 + cos θ), θ ∈ (-π/2, π/2)
            let p = a * (1.0 + e); // latus rectum
            for step in 0..=segments {
                let theta = -PI / 2.0 + step as f64 / segments as f64 * PI;
                let r = p / (1.0 + theta.cos());
                points.push(super::orbital_plane_position(r, theta));
            }
        }
        OrbitShape::Hyperbolic => {
            // r = a(e² − 1) / (1 + e cos θ), θ ∈ (-π/4, π/4)
            let p = a * (e * e - 1.0);
            for step in 0..=segments {
                let theta = -PI / 4.0 + step as f64 / segments as f64 * (PI / 2.0);
                let r = p / (1.0 + e * theta.cos());
                points.push(super::orbital_plane_position(r, theta));
            }
        }
    }

    let rotation = orbital_rotation(elements.i, elements.om, elements.w);
    let points = points
        .into_iter()
        .map(|p| rotation.transform_point3(p) * space_scale)
        .collect();

    Ok((shape, points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::J2000_JD;
    use approx::assert_relative_eq;

    fn elements_with_e(e: f64) -> OrbitalElements {
        OrbitalElements {
            a: 1.0,
            e,
            i: 0.0,
            om: 0.0,
            w: 0.0,
            ma: 0.0,
            epoch: J2000_JD,
        }
    }

    #[test]
    fn test_classify_shapes() {
        assert_eq!(classify(0.0), Ok(OrbitShape::Circular));
        assert_eq!(classify(0.5), Ok(OrbitShape::Elliptical));
        assert_eq!(classify(1.0), Ok(OrbitShape::Parabolic));
        assert_eq!(classify(1.5), Ok(OrbitShape::Hyperbolic));
        assert!(matches!(
            classify(-0.2),
            Err(OrbitPathError::InvalidEccentricity(_))
        ));
        assert!(matches!(
            classify(f64::NAN),
            Err(OrbitPathError::InvalidEccentricity(_))
        ));
    }

    #[test]
    fn test_circular_path_has_constant_radius() {
        let (shape, points) = sample_path(&elements_with_e(0.0), 64, 20.0).unwrap();
        assert_eq!(shape, OrbitShape::Circular);
        for p in &points {
            assert_relative_eq!(p.length(), 20.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_elliptical_path_closes() {
        let (shape, points) = sample_path(&elements_with_e(0.4), 128, 1.0).unwrap();
        assert_eq!(shape, OrbitShape::Elliptical);
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert!((*first - *last).length() < 1e-9, "ellipse should close");
    }

    #[test]
    fn test_invalid_eccentricity_leaves_path_uncreated() {
        let err = sample_path(&elements_with_e(-1.0), 64, 1.0).unwrap_err();
        assert_eq!(err, OrbitPathError::InvalidEccentricity(-1.0));
    }

    #[test]
    fn test_hyperbolic_path_is_open_and_finite() {
        let (shape, points) = sample_path(&elements_with_e(1.5), 64, 1.0).unwrap();
        assert_eq!(shape, OrbitShape::Hyperbolic);
        assert!(points.iter().all(|p| p.is_finite()));
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert!((*first - *last).length() > 0.1, "hyperbola must not close");
    }
}
