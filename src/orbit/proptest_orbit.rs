//! Property-based tests for the orbital mechanics library using proptest.
//!
//! These tests verify that propagation maintains expected properties
//! across a wide range of elements and times.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::{
    eccentric_anomaly, mean_anomaly_at, orbital_period, position, radial_distance, true_anomaly,
    OrbitalElements,
};
use crate::types::J2000_JD;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The Kepler solver converges for all bound eccentricities:
    /// |E - e·sin(E) - M| stays below tolerance within the iteration cap.
    #[test]
    fn prop_kepler_solver_convergence(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.95,
    ) {
        let m = mean_anomaly_normalized * TAU;
        let e_anom = eccentric_anomaly(eccentricity, m);

        let residual = (e_anom - eccentricity * e_anom.sin() - m).abs();
        prop_assert!(
            residual < 1e-5,
            "Kepler solver failed: M={}, e={}, E={}, residual={}",
            m, eccentricity, e_anom, residual
        );
    }

    /// Mean anomaly is unchanged (mod 2π) at zero elapsed time and after
    /// exactly one period.
    #[test]
    fn prop_mean_anomaly_periodicity(
        m0_normalized in 0.0f64..1.0,
        semi_major_axis in 0.1f64..40.0,
    ) {
        let m0 = m0_normalized * TAU;
        let period = orbital_period(semi_major_axis);

        let at_epoch = mean_anomaly_at(period, m0, 0.0);
        prop_assert!((at_epoch - m0).abs() < 1e-9);

        let after_period = mean_anomaly_at(period, m0, period);
        let wrap_error = (after_period - m0).abs().min(TAU - (after_period - m0).abs());
        prop_assert!(
            wrap_error < 1e-6,
            "M after one period drifted by {}",
            wrap_error
        );
    }

    /// Circular orbits keep a constant radius for every true anomaly.
    #[test]
    fn prop_circular_radius_constant(
        semi_major_axis in 0.1f64..40.0,
        nu_normalized in 0.0f64..1.0,
    ) {
        let nu = nu_normalized * TAU;
        let r = radial_distance(semi_major_axis, 0.0, nu);
        prop_assert!((r - semi_major_axis).abs() < 1e-9);
    }

    /// Radial distance stays within the perihelion/aphelion bracket for
    /// bound orbits.
    #[test]
    fn prop_radius_bracketed_by_apsides(
        semi_major_axis in 0.1f64..40.0,
        eccentricity in 0.0f64..0.9,
        nu_normalized in 0.0f64..1.0,
    ) {
        let nu = nu_normalized * TAU;
        let r = radial_distance(semi_major_axis, eccentricity, nu);
        let perihelion = semi_major_axis * (1.0 - eccentricity);
        let aphelion = semi_major_axis * (1.0 + eccentricity);
        prop_assert!(r >= perihelion - 1e-9 && r <= aphelion + 1e-9,
            "r = {} outside [{}, {}]", r, perihelion, aphelion);
    }

    /// M → E → ν round trip: recovering M from the solved E reproduces
    /// the input mean anomaly.
    #[test]
    fn prop_anomaly_round_trip(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.9,
    ) {
        let m = mean_anomaly_normalized * TAU;
        let e_anom = eccentric_anomaly(eccentricity, m);
        let nu = true_anomaly(eccentricity, e_anom);
        prop_assert!(nu.is_finite());

        let m_back = (e_anom - eccentricity * e_anom.sin()).rem_euclid(TAU);
        let wrap_error = (m_back - m).abs().min(TAU - (m_back - m).abs());
        prop_assert!(wrap_error < 1e-5, "M round trip drifted by {}", wrap_error);
    }

    /// Position repeats after one full period for bound orbits.
    #[test]
    fn prop_position_periodic(
        semi_major_axis in 0.3f64..30.0,
        eccentricity in 0.0f64..0.6,
        start_years in -50.0f64..50.0,
    ) {
        let elements = OrbitalElements {
            a: semi_major_axis,
            e: eccentricity,
            i: 7.0,
            om: 48.3,
            w: 77.5,
            ma: 174.8,
            epoch: J2000_JD,
        };
        let period = elements.period().unwrap();

        let p0 = position(start_years, &elements, period, 1.0);
        let p1 = position(start_years + period, &elements, period, 1.0);

        // Tolerance driven by the solver tolerance, generous for long periods
        prop_assert!(
            (p1 - p0).length() < 1e-3 * semi_major_axis,
            "position drifted {} AU after one period",
            (p1 - p0).length()
        );
    }
}
