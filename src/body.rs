//! Celestial body entity: per-body orbital state and trace history.
//!
//! A body is either Sun-like (fixed at the origin, never traced) or
//! orbiting (propagated every tick). The distinction is made once at
//! construction from the category and never re-evaluated.

use std::collections::VecDeque;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::data::BodyRecord;
use crate::orbit::{self, OrbitalElements};
use crate::types::{BodyCategory, SPACE_SCALE};

/// Maximum samples retained in a body's trace ring buffer.
pub const MAX_TRACE_POINTS: usize = 1000;

/// Propagation mode, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitMode {
    /// Pinned at the origin (the Sun); tick is a no-op.
    Fixed,
    /// Propagated along its Keplerian orbit every tick.
    Orbiting,
}

/// A celestial body in the simulation.
///
/// Owns its orbital elements, derived period, current position in render
/// space, and a bounded trace of past positions (newest appended, oldest
/// evicted FIFO once [`MAX_TRACE_POINTS`] is reached).
#[derive(Component, Clone, Debug)]
pub struct CelestialBody {
    pub name: String,
    /// Radius in Earth radii (display sizing only)
    pub radius: f64,
    pub color: Color,
    pub opacity: f32,
    pub category: BodyCategory,
    pub elements: Option<OrbitalElements>,
    /// Orbital period in years; None when the elements are invalid, in
    /// which case the body stays frozen at its initial position.
    pub period: Option<f64>,
    pub mode: OrbitMode,
    pub is_traced: bool,
    pub trace: VecDeque<DVec3>,
    /// Heliocentric position in render space (scaled AU)
    pub current_position: DVec3,
}

impl CelestialBody {
    /// Construct a body from a catalog record.
    ///
    /// Derives the period from the semi-major axis. Malformed elements
    /// (`a` or `e` not a valid number) log a diagnostic and leave the
    /// period unset; construction never fails, the body just stays put.
    pub fn from_record(record: &BodyRecord) -> Self {
        let mode = if record.category.is_fixed() {
            OrbitMode::Fixed
        } else {
            OrbitMode::Orbiting
        };

        let period = match (mode, record.elements.as_ref()) {
            (OrbitMode::Fixed, _) => None,
            (OrbitMode::Orbiting, Some(elements)) => {
                let period = elements.period();
                if period.is_none() {
                    warn!(
                        "Invalid orbital elements for {}: a = {} or e = {} is not a valid number",
                        record.name, elements.a, elements.e
                    );
                }
                period
            }
            (OrbitMode::Orbiting, None) => {
                warn!("Missing orbital elements for {}", record.name);
                None
            }
        };

        let current_position = match (period, record.elements.as_ref()) {
            (Some(period), Some(elements)) => orbit::position(0.0, elements, period, SPACE_SCALE),
            _ => DVec3::ZERO,
        };

        Self {
            name: record.name.clone(),
            radius: record.radius,
            color: record.color,
            opacity: record.opacity,
            category: record.category,
            elements: record.elements,
            period,
            mode,
            is_traced: false,
            trace: VecDeque::new(),
            current_position,
        }
    }

    /// Advance the body to `elapsed_years` since J2000.
    ///
    /// Recomputes the current position and, when traced, appends it to the
    /// trace buffer, evicting the oldest sample past the cap. A body with
    /// no valid period is left untouched (frozen, not an error).
    pub fn tick(&mut self, elapsed_years: f64) {
        if self.mode == OrbitMode::Fixed {
            return;
        }
        let (Some(elements), Some(period)) = (self.elements.as_ref(), self.period) else {
            return;
        };

        self.current_position = orbit::position(elapsed_years, elements, period, SPACE_SCALE);

        if self.is_traced {
            self.trace.push_back(self.current_position);
            if self.trace.len() > MAX_TRACE_POINTS {
                self.trace.pop_front();
            }
        }
    }

    /// Enable or disable tracing.
    ///
    /// Enabling starts from an empty trace (no backfill); disabling clears
    /// the buffer immediately.
    pub fn set_traced(&mut self, traced: bool) {
        self.is_traced = traced;
        self.trace.clear();
    }

    /// Drop all trace history, keeping the tracing flag.
    /// Used when the clock jumps to an arbitrary date.
    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{planets, sun, BodyRecord};
    use crate::types::J2000_JD;

    fn earth_record() -> BodyRecord {
        planets().into_iter().find(|p| p.name == "Earth").unwrap()
    }

    fn broken_record() -> BodyRecord {
        BodyRecord {
            name: "Broken".to_string(),
            radius: 0.2,
            color: Color::WHITE,
            opacity: 1.0,
            category: BodyCategory::Custom,
            elements: Some(OrbitalElements {
                a: f64::NAN,
                e: 0.1,
                i: 0.0,
                om: 0.0,
                w: 0.0,
                ma: 0.0,
                epoch: J2000_JD,
            }),
        }
    }

    #[test]
    fn test_sun_is_fixed_and_never_moves() {
        let mut body = CelestialBody::from_record(&sun());
        assert_eq!(body.mode, OrbitMode::Fixed);
        assert_eq!(body.current_position, DVec3::ZERO);

        body.tick(5.0);
        assert_eq!(body.current_position, DVec3::ZERO);
        assert!(body.trace.is_empty());
    }

    #[test]
    fn test_orbiting_body_moves_on_tick() {
        let mut body = CelestialBody::from_record(&earth_record());
        assert_eq!(body.mode, OrbitMode::Orbiting);
        assert!(body.period.is_some());

        let start = body.current_position;
        body.tick(0.25); // quarter year
        assert!(
            (body.current_position - start).length() > 1.0,
            "Earth should move substantially over a quarter orbit"
        );
    }

    #[test]
    fn test_invalid_elements_freeze_body_without_panic() {
        let mut body = CelestialBody::from_record(&broken_record());
        assert!(body.period.is_none());
        assert_eq!(body.current_position, DVec3::ZERO);

        body.tick(1.0);
        assert_eq!(body.current_position, DVec3::ZERO, "frozen at initial position");
    }

    #[test]
    fn test_trace_is_bounded_fifo() {
        let mut body = CelestialBody::from_record(&earth_record());
        body.set_traced(true);

        for step in 0..(MAX_TRACE_POINTS + 100) {
            body.tick(step as f64 * 1e-4);
        }
        assert_eq!(body.trace.len(), MAX_TRACE_POINTS);

        // Oldest entries evicted first: the front must match the sample
        // taken 100 steps in, not the very first one.
        let expected_front = {
            let elements = body.elements.unwrap();
            orbit::position(100.0 * 1e-4, &elements, body.period.unwrap(), SPACE_SCALE)
        };
        let front = *body.trace.front().unwrap();
        assert!((front - expected_front).length() < 1e-9);
    }

    #[test]
    fn test_untraced_body_records_nothing() {
        let mut body = CelestialBody::from_record(&earth_record());
        body.tick(0.1);
        body.tick(0.2);
        assert!(body.trace.is_empty());
    }

    #[test]
    fn test_set_traced_starts_empty_and_clears() {
        let mut body = CelestialBody::from_record(&earth_record());
        body.set_traced(true);
        body.tick(0.1);
        body.tick(0.2);
        assert_eq!(body.trace.len(), 2);

        body.set_traced(false);
        assert!(body.trace.is_empty());

        body.set_traced(true);
        assert!(body.trace.is_empty(), "re-enabling must not backfill");
    }
}
