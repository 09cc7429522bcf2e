//! Time advancement for the orrery.
//!
//! The clock owns simulated time and fans each tick out to every
//! registered body in registration order. Render cadence is decoupled from
//! simulation cadence by a frame limiter resource.

use bevy::prelude::*;

use crate::body::CelestialBody;
use crate::types::{
    ScheduleSet, SimulationClock, Updatables, MAX_DATE_JD, MAX_FPS, MIN_DATE_JD,
};

/// Event requesting a jump to an arbitrary Julian Date.
///
/// Handled even while paused: the clock re-ticks every body once at the new
/// date and clears all traces, since a trace interpolated across a time
/// discontinuity would be misleading.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetDateEvent(pub f64);

/// Gate for render-side systems.
///
/// Accumulates real elapsed time and releases a render frame only once
/// 1/target_fps has accumulated; simulation ticks run every update
/// regardless.
#[derive(Resource, Debug)]
pub struct FrameLimiter {
    accumulator: f32,
    interval: f32,
    ready: bool,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self {
            accumulator: 0.0,
            interval: (1.0 / MAX_FPS) as f32,
            ready: false,
        }
    }
}

impl FrameLimiter {
    /// Feed real elapsed seconds; returns whether a render frame is due.
    pub fn advance(&mut self, delta_secs: f32) -> bool {
        self.accumulator += delta_secs;
        self.ready = self.accumulator >= self.interval;
        if self.ready {
            self.accumulator %= self.interval;
        }
        self.ready
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Run condition for render-side systems.
pub fn render_frame_ready(limiter: Res<FrameLimiter>) -> bool {
    limiter.is_ready()
}

/// Plugin providing time advancement and date jumps.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Updatables>()
            .init_resource::<FrameLimiter>()
            .add_event::<SetDateEvent>()
            .configure_sets(Update, ScheduleSet::Render.after(ScheduleSet::Simulate))
            .add_systems(
                Update,
                (pace_renderer, advance_time, jump_to_date)
                    .chain()
                    .in_set(ScheduleSet::Simulate),
            );
    }
}

/// Advance the frame limiter with real elapsed time.
fn pace_renderer(mut limiter: ResMut<FrameLimiter>, time: Res<Time>) {
    limiter.advance(time.delta_secs());
}

/// Advance simulated time by one tick and propagate every registered body.
///
/// Only mutates state while playing. The date is hard-clamped to the
/// supported range: at a boundary the simulation freezes there while play
/// continues, and the direction is left unchanged (no bounce).
pub(crate) fn advance_time(
    mut clock: ResMut<SimulationClock>,
    updatables: Res<Updatables>,
    mut bodies: Query<&mut CelestialBody>,
) {
    if !clock.playing {
        return;
    }

    let step_days = clock.scale * clock.direction.signum();
    clock.current_jd = (clock.current_jd + step_days).clamp(MIN_DATE_JD, MAX_DATE_JD);

    tick_all(&clock, &updatables, &mut bodies);
}

/// Handle date jumps: clamp, clear every trace, re-tick once immediately.
pub(crate) fn jump_to_date(
    mut events: EventReader<SetDateEvent>,
    mut clock: ResMut<SimulationClock>,
    updatables: Res<Updatables>,
    mut bodies: Query<&mut CelestialBody>,
) {
    let Some(SetDateEvent(target_jd)) = events.read().last().copied() else {
        return;
    };

    clock.current_jd = target_jd.clamp(MIN_DATE_JD, MAX_DATE_JD);
    info!("Jumped to {}", crate::types::format_julian_date(clock.current_jd));

    for entity in updatables.iter() {
        if let Ok(mut body) = bodies.get_mut(entity) {
            body.clear_trace();
        }
    }

    tick_all(&clock, &updatables, &mut bodies);
}

/// Tick every registered body at the clock's current date, in registration
/// order. A body whose entity has despawned is skipped; the registry is
/// cleaned up by the scene code that removed it.
fn tick_all(
    clock: &SimulationClock,
    updatables: &Updatables,
    bodies: &mut Query<&mut CelestialBody>,
) {
    let elapsed_years = clock.elapsed_years();
    for entity in updatables.iter() {
        if let Ok(mut body) = bodies.get_mut(entity) {
            body.tick(elapsed_years);
        }
    }
}
