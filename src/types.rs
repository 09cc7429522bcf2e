//! Core simulation types and constants for the orrery.

use bevy::math::DVec3;
use bevy::prelude::*;

/// System sets ordering one simulation step.
///
/// All registered bodies must be ticked before any render-side system
/// reads their positions, so overlays never observe a half-updated frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScheduleSet {
    /// Clock advance and body propagation (runs first)
    Simulate,
    /// Overlays, position sync, traces (runs after simulation)
    Render,
}

/// Julian Date of the J2000 epoch (January 1, 2000, 12:00 UT)
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (January 1, 1970, 00:00 UT)
pub const J1970_JD: f64 = 2_440_587.5;

/// Days per Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Earliest simulated date: 1900-01-01 00:00 UT
pub const MIN_DATE_JD: f64 = 2_415_020.5;

/// Latest simulated date: 2100-12-31 00:00 UT
pub const MAX_DATE_JD: f64 = 2_488_433.5;

/// Render units per astronomical unit
pub const SPACE_SCALE: f64 = 20.0;

/// Render units per body radius unit (radii are catalogued in Earth radii)
pub const RADIUS_SCALE: f64 = 0.5;

/// Renderer cadence cap; the simulation may tick faster than this
pub const MAX_FPS: f64 = 45.0;

/// Direction of simulated time flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeDirection {
    #[default]
    Forward,
    Backward,
}

impl TimeDirection {
    /// +1.0 for forward, -1.0 for backward
    pub fn signum(&self) -> f64 {
        match self {
            TimeDirection::Forward => 1.0,
            TimeDirection::Backward => -1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            TimeDirection::Forward => TimeDirection::Backward,
            TimeDirection::Backward => TimeDirection::Forward,
        }
    }
}

/// Category of a celestial body.
///
/// Fixed once at construction; determines whether the body is propagated
/// (orbiting) or pinned at the origin (the Sun).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyCategory {
    Sun,
    Planet,
    NearEarthObject,
    Custom,
    Artificial,
}

impl BodyCategory {
    /// Whether bodies of this category stay fixed at the origin.
    pub fn is_fixed(&self) -> bool {
        matches!(self, BodyCategory::Sun)
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyCategory::Sun => "Sun",
            BodyCategory::Planet => "Planet",
            BodyCategory::NearEarthObject => "NEO",
            BodyCategory::Custom => "Custom",
            BodyCategory::Artificial => "Artificial",
        }
    }
}

/// Simulation clock resource: the sole owner of simulated time.
///
/// `current_jd` is a Julian Date clamped to [`MIN_DATE_JD`, `MAX_DATE_JD`].
/// `scale` is how many simulated days pass per simulation tick.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Current simulated instant as a Julian Date
    pub current_jd: f64,
    /// Direction of time flow
    pub direction: TimeDirection,
    /// Simulated days advanced per tick
    pub scale: f64,
    /// Whether the clock advances on tick
    pub playing: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::at_julian_date(current_julian_date())
    }
}

impl SimulationClock {
    /// Create a clock starting at a specific Julian Date (clamped to range).
    pub fn at_julian_date(jd: f64) -> Self {
        Self {
            current_jd: jd.clamp(MIN_DATE_JD, MAX_DATE_JD),
            direction: TimeDirection::Forward,
            scale: 1.0,
            playing: true,
        }
    }

    /// Years elapsed since the J2000 epoch at the current simulated date.
    /// Negative before 2000.
    pub fn elapsed_years(&self) -> f64 {
        julian_date_to_elapsed_years(self.current_jd)
    }
}

/// Registration-order registry of entities ticked by the clock.
///
/// The clock owns this collection; scene code adds and removes entities
/// through it instead of aliasing a shared list. Removal filters the
/// backing vector, which is safe against removal-during-iteration.
#[derive(Resource, Default, Debug)]
pub struct Updatables(Vec<Entity>);

impl Updatables {
    pub fn add(&mut self, entity: Entity) {
        if !self.0.contains(&entity) {
            self.0.push(entity);
        }
    }

    pub fn remove(&mut self, entity: Entity) {
        self.0.retain(|&e| e != entity);
    }

    /// Entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Convert Julian years since J2000 from a Julian Date.
pub fn julian_date_to_elapsed_years(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_YEAR
}

/// Convert a Unix timestamp in seconds to a Julian Date.
pub fn unix_to_julian_date(unix_seconds: f64) -> f64 {
    unix_seconds / SECONDS_PER_DAY + J1970_JD
}

/// Current wall-clock instant as a Julian Date (system clock).
pub fn current_julian_date() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let unix_now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    unix_to_julian_date(unix_now)
}

/// Julian Date of a civil date at 00:00 UT.
pub fn ymd_to_julian_date(year: i32, month: u32, day: u32) -> f64 {
    days_from_civil(year, month, day) as f64 + J1970_JD
}

/// Civil date (year, month, day) of a Julian Date, truncated to 00:00 UT.
pub fn julian_date_to_ymd(jd: f64) -> (i32, u32, u32) {
    let days = (jd - J1970_JD).floor() as i64;
    days_to_ymd(days)
}

/// Format a Julian Date as "YYYY-MM-DD" for the control panel readout.
pub fn format_julian_date(jd: f64) -> String {
    let (year, month, day) = julian_date_to_ymd(jd);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Convert a civil date to days since the Unix epoch (Gregorian calendar).
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as i64;
    let mp = if month > 2 { month - 3 } else { month + 9 } as i64;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Convert days since the Unix epoch to year, month, day.
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    let remaining_days = days + 719468; // Days from year 0 to 1970

    let era = if remaining_days >= 0 {
        remaining_days / 146097
    } else {
        (remaining_days - 146096) / 146097
    };

    let day_of_era = (remaining_days - era * 146097) as u32;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let year = (year_of_era as i64 + era * 400) as i32;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    (year, month, day)
}

/// A position sample in render space (scaled AU, ecliptic y-up frame).
pub type Position = DVec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_constants() {
        assert_eq!(ymd_to_julian_date(1900, 1, 1), MIN_DATE_JD);
        assert_eq!(ymd_to_julian_date(2100, 12, 31), MAX_DATE_JD);
    }

    #[test]
    fn test_j2000_round_trip() {
        // J2000 is 2000-01-01 12:00 UT; truncation lands on the civil date
        assert_eq!(julian_date_to_ymd(J2000_JD), (2000, 1, 1));
        assert_eq!(ymd_to_julian_date(2000, 1, 1), J2000_JD - 0.5);
    }

    #[test]
    fn test_unix_epoch_julian_date() {
        assert_eq!(unix_to_julian_date(0.0), J1970_JD);
        assert_eq!(unix_to_julian_date(SECONDS_PER_DAY), J1970_JD + 1.0);
    }

    #[test]
    fn test_elapsed_years() {
        assert_eq!(julian_date_to_elapsed_years(J2000_JD), 0.0);
        assert_eq!(julian_date_to_elapsed_years(J2000_JD + DAYS_PER_YEAR), 1.0);
        assert!(julian_date_to_elapsed_years(MIN_DATE_JD) < 0.0);
    }

    #[test]
    fn test_format_julian_date() {
        assert_eq!(format_julian_date(J2000_JD), "2000-01-01");
        assert_eq!(format_julian_date(MIN_DATE_JD), "1900-01-01");
        assert_eq!(format_julian_date(MAX_DATE_JD), "2100-12-31");
    }

    #[test]
    fn test_civil_round_trip_across_leap_years() {
        for &(y, m, d) in &[
            (1900, 2, 28),
            (2000, 2, 29),
            (2024, 2, 29),
            (2100, 2, 28),
            (1970, 1, 1),
            (2099, 12, 31),
        ] {
            let jd = ymd_to_julian_date(y, m, d);
            assert_eq!(julian_date_to_ymd(jd), (y, m, d), "round trip for {y}-{m}-{d}");
        }
    }

    #[test]
    fn test_clock_default_scale_and_state() {
        let clock = SimulationClock::at_julian_date(J2000_JD);
        assert!(clock.playing);
        assert_eq!(clock.scale, 1.0);
        assert_eq!(clock.direction, TimeDirection::Forward);
        assert_eq!(clock.elapsed_years(), 0.0);
    }

    #[test]
    fn test_clock_clamps_out_of_range_start() {
        let clock = SimulationClock::at_julian_date(MAX_DATE_JD + 1000.0);
        assert_eq!(clock.current_jd, MAX_DATE_JD);
    }

    #[test]
    fn test_updatables_registration_order_and_removal() {
        let mut world = World::new();
        let mut reg = Updatables::default();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let c = world.spawn_empty().id();

        reg.add(a);
        reg.add(b);
        reg.add(c);
        reg.add(b); // duplicate ignored
        assert_eq!(reg.iter().collect::<Vec<_>>(), vec![a, b, c]);

        reg.remove(b);
        assert_eq!(reg.iter().collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_direction_signum() {
        assert_eq!(TimeDirection::Forward.signum(), 1.0);
        assert_eq!(TimeDirection::Backward.signum(), -1.0);
        assert_eq!(TimeDirection::Forward.reversed(), TimeDirection::Backward);
    }
}
