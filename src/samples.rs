use crate::error::RecordError;
use crate::metrics::{CaloriesCalculator, LEN_STEP, SWIMMING_LEN_STEP};
use crate::types::{RunningRecord, SwimmingRecord, WalkingRecord, WorkoutKind, WorkoutRecord};
use chrono::Duration;

const WEIGHT_KG: f64 = 85.0;

pub fn swimming() -> Result<SwimmingRecord, RecordError> {
    let base = WorkoutRecord::new(
        WorkoutKind::Swimming.label(),
        2000,
        SWIMMING_LEN_STEP,
        Duration::minutes(90),
        WEIGHT_KG,
    )?;
    Ok(SwimmingRecord::new(base, 50, 5))
}

pub fn walking() -> Result<WalkingRecord, RecordError> {
    let base = WorkoutRecord::new(
        WorkoutKind::Walking.label(),
        20_000,
        LEN_STEP,
        Duration::hours(3) + Duration::minutes(45),
        WEIGHT_KG,
    )?;
    WalkingRecord::new(base, 185.0)
}

pub fn running() -> Result<RunningRecord, RecordError> {
    let base = WorkoutRecord::new(
        WorkoutKind::Running.label(),
        5000,
        LEN_STEP,
        Duration::minutes(30),
        WEIGHT_KG,
    )?;
    Ok(RunningRecord::new(base))
}

/// The built-in workouts in print order: swimming, walking, running.
pub fn sample_workouts() -> Result<Vec<Box<dyn CaloriesCalculator>>, RecordError> {
    let workouts: Vec<Box<dyn CaloriesCalculator>> = vec![
        Box::new(swimming()?),
        Box::new(walking()?),
        Box::new(running()?),
    ];
    Ok(workouts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_come_in_print_order() {
        let kinds: Vec<WorkoutKind> = sample_workouts()
            .unwrap()
            .iter()
            .map(|w| w.kind())
            .collect();
        assert_eq!(
            kinds,
            [WorkoutKind::Swimming, WorkoutKind::Walking, WorkoutKind::Running]
        );
    }

    #[test]
    fn swimming_sample_matches_pool() {
        let swim = swimming().unwrap();
        assert_eq!(swim.pool_length_m(), 50);
        assert_eq!(swim.pool_crossings(), 5);
        assert_eq!(swim.base.repetitions(), 2000);
    }
}
