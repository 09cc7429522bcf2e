//! Swept-area accumulator demonstrating Kepler's second law.
//!
//! The tracked body's orbit is discretized into [`PHASE_COUNT`] phases by
//! elapsed orbital fraction. Each tick adds the triangle formed by the Sun,
//! the previous sample, and the current sample to the active phase bucket
//! and emits a wedge for display. Equal areas per equal times means the
//! buckets converge to the same value for any bound orbit.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::body::CelestialBody;
use crate::time::SetDateEvent;
use crate::types::{ScheduleSet, SimulationClock};

/// Number of discrete orbital phases.
pub const PHASE_COUNT: usize = 8;

/// One display wedge: Sun-previous-current triangle with its phase index.
/// Even phases render magenta, odd phases cyan.
#[derive(Clone, Copy, Debug)]
pub struct Wedge {
    pub previous: DVec3,
    pub current: DVec3,
    pub phase: usize,
}

/// Accumulator state for the equal-areas overlay.
///
/// Reset whenever the tracked body changes or a full period completes.
#[derive(Resource, Default, Debug)]
pub struct SweptAreaAccumulator {
    tracked: Option<Entity>,
    previous_point: Option<DVec3>,
    previous_phase: Option<usize>,
    /// Accumulated area per phase, in render-space units squared.
    pub phase_area: [f64; PHASE_COUNT],
    /// Wedges accumulated over the current period, for display.
    pub wedges: Vec<Wedge>,
}

impl SweptAreaAccumulator {
    /// Which body the overlay follows, if any.
    pub fn tracked(&self) -> Option<Entity> {
        self.tracked
    }

    /// Switch the tracked body, resetting all accumulated state.
    pub fn set_tracked(&mut self, entity: Option<Entity>) {
        if self.tracked != entity {
            self.tracked = entity;
            self.reset();
        }
    }

    /// Drop the previous point, phase, buckets, and wedges.
    pub fn reset(&mut self) {
        self.previous_point = None;
        self.previous_phase = None;
        self.phase_area = [0.0; PHASE_COUNT];
        self.wedges.clear();
    }

    /// Total accumulated area over the current period.
    pub fn total_area(&self) -> f64 {
        self.phase_area.iter().sum()
    }

    /// Feed one position sample at the given phase index.
    ///
    /// The first sample only seeds the previous point (two samples are
    /// needed to form a triangle). A phase wrap in either direction
    /// (7 to 0 running forward, 0 to 7 running backward) starts a fresh
    /// period: wedges and buckets are cleared.
    pub fn observe(&mut self, point: DVec3, phase: usize) {
        debug_assert!(phase < PHASE_COUNT);

        let forward_wrap = self.previous_phase == Some(PHASE_COUNT - 1) && phase == 0;
        let backward_wrap = self.previous_phase == Some(0) && phase == PHASE_COUNT - 1;
        if forward_wrap || backward_wrap {
            self.wedges.clear();
            self.phase_area = [0.0; PHASE_COUNT];
        }

        if let Some(previous) = self.previous_point {
            self.phase_area[phase] += triangle_area(DVec3::ZERO, previous, point);
            self.wedges.push(Wedge {
                previous,
                current: point,
                phase,
            });
        }

        self.previous_point = Some(point);
        self.previous_phase = Some(phase);
    }
}

/// Phase index for an elapsed time: ⌊PHASE_COUNT·t/T⌋ mod PHASE_COUNT.
/// `rem_euclid` keeps the index in range for dates before the epoch.
pub fn phase_index(elapsed_years: f64, period_years: f64) -> usize {
    let raw = (PHASE_COUNT as f64 * elapsed_years / period_years).floor() as i64;
    raw.rem_euclid(PHASE_COUNT as i64) as usize
}

/// Area of the triangle spanned by three points.
fn triangle_area(a: DVec3, b: DVec3, c: DVec3) -> f64 {
    0.5 * (b - a).cross(c - a).length()
}

/// Plugin wiring the accumulator into the simulation step.
pub struct SweptAreaPlugin;

impl Plugin for SweptAreaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SweptAreaAccumulator>().add_systems(
            Update,
            (reset_on_jump, accumulate_swept_area)
                .chain()
                .in_set(ScheduleSet::Simulate)
                .after(crate::time::jump_to_date),
        );
    }
}

/// Restart accumulation after a date jump.
///
/// A jump invalidates the period in progress the same way it invalidates
/// traces: pairing the pre-jump sample with the post-jump position would
/// sweep one huge chord triangle into an arbitrary bucket.
fn reset_on_jump(
    mut events: EventReader<SetDateEvent>,
    mut accumulator: ResMut<SweptAreaAccumulator>,
) {
    if events.read().last().is_some() {
        accumulator.reset();
    }
}

/// Accumulate swept area for the tracked body once per simulation step.
///
/// Needs a known last trace point; bodies without a trace (or a valid
/// period) contribute nothing. A vanished entity untracks itself.
fn accumulate_swept_area(
    clock: Res<SimulationClock>,
    mut accumulator: ResMut<SweptAreaAccumulator>,
    bodies: Query<&CelestialBody>,
) {
    if !clock.playing {
        return;
    }
    let Some(entity) = accumulator.tracked() else {
        return;
    };
    let Ok(body) = bodies.get(entity) else {
        accumulator.set_tracked(None);
        return;
    };
    let Some(period) = body.period else {
        return;
    };
    let Some(&point) = body.trace.back() else {
        return;
    };

    let phase = phase_index(clock.elapsed_years(), period);
    accumulator.observe(point, phase);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_phase_index_partitions_period() {
        let period = 2.0;
        assert_eq!(phase_index(0.0, period), 0);
        assert_eq!(phase_index(0.24, period), 0);
        assert_eq!(phase_index(0.26, period), 1);
        assert_eq!(phase_index(1.99, period), 7);
        // Wraps into the next period
        assert_eq!(phase_index(2.01, period), 0);
    }

    #[test]
    fn test_phase_index_negative_elapsed() {
        // Dates before J2000 still map into [0, PHASE_COUNT)
        let period = 1.0;
        let phase = phase_index(-0.1, period);
        assert!(phase < PHASE_COUNT);
        assert_eq!(phase, 7);
    }

    #[test]
    fn test_first_sample_only_seeds() {
        let mut acc = SweptAreaAccumulator::default();
        acc.observe(DVec3::new(1.0, 0.0, 0.0), 0);
        assert_eq!(acc.total_area(), 0.0);
        assert!(acc.wedges.is_empty());
    }

    #[test]
    fn test_triangle_accumulation() {
        let mut acc = SweptAreaAccumulator::default();
        acc.observe(DVec3::new(1.0, 0.0, 0.0), 0);
        acc.observe(DVec3::new(0.0, 0.0, 1.0), 0);
        // Right triangle with legs of length 1: area 0.5
        assert!((acc.phase_area[0] - 0.5).abs() < 1e-12);
        assert_eq!(acc.wedges.len(), 1);
        assert_eq!(acc.wedges[0].phase, 0);
    }

    #[test]
    fn test_phase_wrap_clears_state() {
        let mut acc = SweptAreaAccumulator::default();
        acc.observe(DVec3::new(1.0, 0.0, 0.0), 6);
        acc.observe(DVec3::new(0.0, 0.0, 1.0), 7);
        assert_eq!(acc.wedges.len(), 1);

        // 7 -> 0 wrap starts a fresh period
        acc.observe(DVec3::new(1.0, 0.0, 0.0), 0);
        assert!(acc.wedges.is_empty());
        assert_eq!(acc.total_area(), 0.0);
    }

    #[test]
    fn test_backward_phase_wrap_clears_state() {
        let mut acc = SweptAreaAccumulator::default();
        acc.observe(DVec3::new(1.0, 0.0, 0.0), 1);
        acc.observe(DVec3::new(0.0, 0.0, 1.0), 0);
        assert_eq!(acc.wedges.len(), 1);

        // 0 -> 7 under backward playback also starts a fresh period
        acc.observe(DVec3::new(-1.0, 0.0, 0.0), 7);
        assert!(acc.wedges.is_empty());
        assert_eq!(acc.total_area(), 0.0);
    }

    #[test]
    fn test_reset_discards_the_seed_point() {
        let mut acc = SweptAreaAccumulator::default();
        acc.observe(DVec3::new(1.0, 0.0, 0.0), 0);
        acc.observe(DVec3::new(0.0, 0.0, 1.0), 0);
        assert!(acc.total_area() > 0.0);

        acc.reset();
        // The next sample must seed again, not pair with stale state
        acc.observe(DVec3::new(-1.0, 0.0, 0.0), 4);
        assert_eq!(acc.total_area(), 0.0);
        assert!(acc.wedges.is_empty());
    }

    #[test]
    fn test_switching_tracked_body_resets() {
        let mut world = World::new();
        let mut acc = SweptAreaAccumulator::default();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        acc.set_tracked(Some(first));
        acc.observe(DVec3::new(1.0, 0.0, 0.0), 0);
        acc.observe(DVec3::new(0.0, 0.0, 1.0), 0);
        assert!(acc.total_area() > 0.0);

        acc.set_tracked(Some(second));
        assert_eq!(acc.total_area(), 0.0);
        assert!(acc.wedges.is_empty());
    }

    #[test]
    fn test_full_circle_sweep_approximates_disk_area() {
        // Sweep a unit circle over one period in 8 phases; the buckets
        // must tile the disk (sum ≈ π) and be equal by symmetry.
        let mut acc = SweptAreaAccumulator::default();
        let steps = 800;
        for step in 0..=steps {
            let t = step as f64 / steps as f64; // one full period
            let angle = t * 2.0 * PI;
            let phase = phase_index(t * 0.999_999, 1.0); // stay shy of the wrap
            acc.observe(DVec3::new(angle.cos(), 0.0, -angle.sin()), phase);
        }

        let total = acc.total_area();
        assert!(
            (total - PI).abs() < 1e-3,
            "swept total {} should approximate π",
            total
        );
        for (phase, area) in acc.phase_area.iter().enumerate() {
            assert!(
                (area - PI / PHASE_COUNT as f64).abs() < 0.02,
                "phase {} area {} should be ~π/8",
                phase,
                area
            );
        }
    }
}
