//! Distance, mean speed and calorie formulas.
//!
//! Every workout shares the distance and speed rules; only the calorie formula
//! (and, for swimming, the distance) differs per kind.

use crate::report::SummaryReport;
use crate::types::{RunningRecord, SwimmingRecord, WalkingRecord, WorkoutKind, WorkoutRecord};
use crate::utils::duration_hours;
use chrono::Duration;

/// Average step length in meters.
pub const LEN_STEP: f64 = 0.65;
/// Length of one swimming stroke in meters.
pub const SWIMMING_LEN_STEP: f64 = 1.38;

pub const M_IN_KM: f64 = 1000.0;
pub const MINS_IN_HOUR: f64 = 60.0;
/// km/h to m/s.
pub const KMH_IN_MSEC: f64 = 0.278;
pub const CM_IN_M: f64 = 100.0;

const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
const RUNNING_SPEED_SHIFT: f64 = 1.79;

const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIMMING_SPEED_SHIFT: f64 = 1.1;
const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Distance in km covered by `repetitions` units of `step_length_m` meters.
pub fn distance_km(repetitions: u32, step_length_m: f64) -> f64 {
    f64::from(repetitions) * step_length_m / M_IN_KM
}

/// Mean speed in km/h. Zero duration yields zero.
pub fn mean_speed_kmh(distance_km: f64, duration: Duration) -> f64 {
    let hours = duration_hours(duration);
    if hours <= 0.0 {
        return 0.0;
    }
    distance_km / hours
}

/// Shared behavior of all workouts. Implementors provide the base record and
/// their calorie formula; swimming also overrides the distance.
pub trait CaloriesCalculator {
    fn base(&self) -> &WorkoutRecord;

    fn kind(&self) -> WorkoutKind;

    /// Calories burned in kcal.
    fn calories_kcal(&self) -> f64;

    fn distance_km(&self) -> f64 {
        let base = self.base();
        distance_km(base.repetitions(), base.step_length_m())
    }

    fn mean_speed_kmh(&self) -> f64 {
        mean_speed_kmh(self.distance_km(), self.base().duration())
    }

    fn summary(&self) -> SummaryReport {
        let base = self.base();
        let report = SummaryReport {
            workout_type: base.label().to_string(),
            duration: base.duration(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        };
        tracing::debug!(
            kind = ?self.kind(),
            distance_km = report.distance_km,
            mean_speed_kmh = report.mean_speed_kmh,
            calories_kcal = report.calories_kcal,
            "computed summary"
        );
        report
    }
}

impl CaloriesCalculator for RunningRecord {
    fn base(&self) -> &WorkoutRecord {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn calories_kcal(&self) -> f64 {
        let duration = self.base.duration();
        if duration.is_zero() {
            tracing::trace!("running: zero duration, no calories");
            return 0.0;
        }
        let hours = duration_hours(duration);
        (RUNNING_SPEED_MULTIPLIER * self.mean_speed_kmh() + RUNNING_SPEED_SHIFT)
            * self.base.weight_kg()
            / M_IN_KM
            * hours
            * MINS_IN_HOUR
    }
}

impl CaloriesCalculator for WalkingRecord {
    fn base(&self) -> &WorkoutRecord {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn calories_kcal(&self) -> f64 {
        if self.height_cm() <= 0.0 {
            tracing::trace!("walking: zero height, no calories");
            return 0.0;
        }
        let speed_ms = self.mean_speed_kmh() * KMH_IN_MSEC;
        let height_m = self.height_cm() / CM_IN_M;
        let weight = self.base.weight_kg();
        let hours = duration_hours(self.base.duration());

        (WALKING_WEIGHT_MULTIPLIER * weight + speed_ms.powi(2) / height_m)
            * WALKING_SPEED_HEIGHT_MULTIPLIER
            * weight
            * hours
            * MINS_IN_HOUR
    }
}

impl CaloriesCalculator for SwimmingRecord {
    fn base(&self) -> &WorkoutRecord {
        &self.base
    }

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    /// Pool length times crossings; stroke count and length are ignored.
    fn distance_km(&self) -> f64 {
        f64::from(self.pool_length_m()) * f64::from(self.pool_crossings()) / M_IN_KM
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + SWIMMING_SPEED_SHIFT)
            * SWIMMING_WEIGHT_MULTIPLIER
            * self.base.weight_kg()
            * duration_hours(self.base.duration())
    }
}
