//! Keplerian orbital mechanics.
//!
//! Pure, stateless functions converting orbital elements plus elapsed time
//! into a heliocentric 3D position. No rendering dependency; deterministic
//! given inputs.
//!
//! Units and conventions:
//! - Distances in AU, time in Julian years, angular elements in degrees.
//! - Kepler's 3rd law in normalized units (GM_sun = 1 in AU³/yr²), so a
//!   body's period is √a³ years. Valid only around a one-solar-mass primary.
//! - Orbits are computed flat in their own plane (x = r·cos ν, z = −r·sin ν,
//!   y = 0) and then rotated into the ecliptic frame.
//!
//! Time propagation assumes bound elliptical orbits (0 ≤ e < 1). Parabolic
//! and hyperbolic shapes are only supported for static path sampling in
//! [`path`]; propagating them through these functions is undefined.

pub mod path;

#[cfg(test)]
mod proptest_orbit;

use bevy::math::{DMat4, DVec3};
use std::f64::consts::TAU;

/// Newton-Raphson convergence tolerance for Kepler's equation.
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Iteration cap for the Kepler solver.
///
/// Newton's method has no convergence guarantee near e = 1; the cap keeps a
/// near-parabolic orbit from looping forever at the cost of a stale anomaly.
pub const KEPLER_MAX_ITERATIONS: usize = 50;

/// Keplerian orbital elements, immutable per update cycle.
///
/// Angles in degrees, `a` in AU, `epoch` as a Julian Date.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (AU, > 0 for a defined period)
    pub a: f64,
    /// Eccentricity (0 = circle, (0,1) = ellipse, 1 = parabola, >1 = hyperbola)
    pub e: f64,
    /// Inclination (degrees)
    pub i: f64,
    /// Longitude of ascending node Ω (degrees)
    pub om: f64,
    /// Longitude of perihelion ϖ (degrees)
    pub w: f64,
    /// Mean anomaly at epoch M₀ (degrees)
    pub ma: f64,
    /// Reference instant (Julian Date)
    pub epoch: f64,
}

impl OrbitalElements {
    /// Whether the elements describe a propagatable bound orbit.
    ///
    /// Requires `a > 0` and `e ≥ 0`, both finite. Callers must check this
    /// before deriving a period; the propagation functions themselves do
    /// not guard against degenerate input.
    pub fn is_valid(&self) -> bool {
        self.a.is_finite() && self.a > 0.0 && self.e.is_finite() && self.e >= 0.0
    }

    /// Orbital period in years, if the elements are valid.
    pub fn period(&self) -> Option<f64> {
        self.is_valid().then(|| orbital_period(self.a))
    }
}

/// Propagate the mean anomaly linearly: M = M₀ + (2π/T)·t, wrapped to [0, 2π).
///
/// `mean_anomaly_epoch` is in radians. Fails silently on `period_years = 0`
/// (the result is NaN); callers guard against a degenerate semi-major axis
/// upstream via [`OrbitalElements::is_valid`].
pub fn mean_anomaly_at(period_years: f64, mean_anomaly_epoch: f64, elapsed_years: f64) -> f64 {
    let mean_motion = TAU / period_years; // rad per year
    (mean_anomaly_epoch + mean_motion * elapsed_years).rem_euclid(TAU)
}

/// Solve Kepler's equation M = E − e·sin(E) for the eccentric anomaly E.
///
/// Newton-Raphson with initial guess E₀ = M, stopping when the iteration
/// step falls below [`KEPLER_TOLERANCE`] or after [`KEPLER_MAX_ITERATIONS`].
pub fn eccentric_anomaly(e: f64, mean_anomaly: f64) -> f64 {
    let m = mean_anomaly;
    let mut e_anomaly = m;

    for _ in 0..KEPLER_MAX_ITERATIONS {
        // f(E) = E - e*sin(E) - M, f'(E) = 1 - e*cos(E)
        let delta = (e_anomaly - e * e_anomaly.sin() - m) / (1.0 - e * e_anomaly.cos());
        e_anomaly -= delta;

        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }

    e_anomaly
}

/// True anomaly ν from eccentric anomaly E.
///
/// ν = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2)); atan2 keeps full
/// quadrant coverage across the whole orbit.
pub fn true_anomaly(e: f64, eccentric_anomaly: f64) -> f64 {
    let half_e = eccentric_anomaly / 2.0;
    let y = (1.0 + e).sqrt() * half_e.sin();
    let x = (1.0 - e).sqrt() * half_e.cos();
    2.0 * y.atan2(x)
}

/// Radial distance r = a(1−e²)/(1+e·cos ν) for an elliptical orbit.
pub fn radial_distance(a: f64, e: f64, nu: f64) -> f64 {
    a * (1.0 - e * e) / (1.0 + e * nu.cos())
}

/// Polar coordinates (r, ν) to Cartesian in the orbital plane.
///
/// The orbit is computed flat (y = 0) before the orientation rotation.
pub fn orbital_plane_position(r: f64, nu: f64) -> DVec3 {
    DVec3::new(r * nu.cos(), 0.0, -r * nu.sin())
}

/// Orbital period in years by Kepler's 3rd law: T = √a³ (normalized units).
pub fn orbital_period(a: f64) -> f64 {
    (a * a * a).sqrt()
}

/// Orientation of the orbit in the ecliptic frame.
///
/// Composed as R_y(Ω) · R_x(i) · R_y(ω) with ω = ϖ − Ω; the order matters
/// and matches the standard orbital-element convention. Inputs in degrees.
pub fn orbital_rotation(i: f64, om: f64, w: f64) -> DMat4 {
    let omega = w - om; // argument of perihelion from longitude of perihelion
    DMat4::from_rotation_y(om.to_radians())
        * DMat4::from_rotation_x(i.to_radians())
        * DMat4::from_rotation_y(omega.to_radians())
}

/// Heliocentric position at `elapsed_years` since J2000.
///
/// The single entry point bodies call each tick: propagates the anomalies,
/// places the point in the orbital plane, applies the orientation rotation,
/// and scales into render space.
pub fn position(
    elapsed_years: f64,
    elements: &OrbitalElements,
    period_years: f64,
    space_scale: f64,
) -> DVec3 {
    let m0 = elements.ma.to_radians();

    let m = mean_anomaly_at(period_years, m0, elapsed_years);
    let e_anom = eccentric_anomaly(elements.e, m);
    let nu = true_anomaly(elements.e, e_anom);

    let r = radial_distance(elements.a, elements.e, nu);
    let plane = orbital_plane_position(r, nu);

    let rotated = orbital_rotation(elements.i, elements.om, elements.w).transform_point3(plane);
    rotated * space_scale
}
