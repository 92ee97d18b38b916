use chrono::Duration;
use fitcalc::metrics::{LEN_STEP, distance_km, mean_speed_kmh};
use fitcalc::samples;
use fitcalc::{
    CaloriesCalculator, RunningRecord, SwimmingRecord, WalkingRecord, WorkoutKind, WorkoutRecord,
};
use proptest::prelude::*;

fn base(reps: u32, step: f64, duration: Duration, weight: f64) -> WorkoutRecord {
    WorkoutRecord::new("test", reps, step, duration, weight).unwrap()
}

#[test]
fn sample_reports_render_in_order() {
    let text: Vec<String> = samples::sample_workouts()
        .unwrap()
        .iter()
        .map(|w| w.summary().render())
        .collect();

    assert_eq!(
        text[0],
        "Workout type: Swimming\nDuration: 90 min\nDistance: 0.25 km.\n\
         Mean speed: 0.17 km/h\nCalories burned: 323.00\n"
    );
    assert_eq!(
        text[1],
        "Workout type: Walking\nDuration: 225 min\nDistance: 13.00 km.\n\
         Mean speed: 3.47 km/h\nCalories burned: 1928.46\n"
    );
    assert_eq!(
        text[2],
        "Workout type: Running\nDuration: 30 min\nDistance: 3.25 km.\n\
         Mean speed: 6.50 km/h\nCalories burned: 302.91\n"
    );
}

#[test]
fn swimming_sample_follows_pool_formula() {
    let swim = samples::swimming().unwrap();
    let report = swim.summary();
    assert!((report.distance_km - 0.25).abs() < 1e-9);

    let speed = 0.25 / 1.5;
    let expected = (speed + 1.1) * 2.0 * 85.0 * 1.5;
    assert!((report.calories_kcal - expected).abs() < 1e-9);
}

#[test]
fn json_output_lists_every_sample() {
    let reports: Vec<_> = samples::sample_workouts()
        .unwrap()
        .iter()
        .map(|w| w.summary())
        .collect();
    let json: serde_json::Value = serde_json::to_value(&reports).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1]["workout_type"], WorkoutKind::Walking.label());
    assert_eq!(items[1]["duration_minutes"], 225.0);
}

proptest! {
    #[test]
    fn zero_reps_means_zero_distance(step in 0.0f64..5.0) {
        prop_assert_eq!(distance_km(0, step), 0.0);
    }

    #[test]
    fn zero_duration_means_zero_speed_for_all_kinds(
        reps in 0u32..100_000,
        weight in 0.0f64..200.0,
        height in 0.0f64..250.0,
        pool in 0u32..100,
        crossings in 0u32..200,
    ) {
        prop_assert_eq!(mean_speed_kmh(reps as f64, Duration::zero()), 0.0);

        let run = RunningRecord::new(base(reps, LEN_STEP, Duration::zero(), weight));
        let walk = WalkingRecord::new(base(reps, LEN_STEP, Duration::zero(), weight), height).unwrap();
        let swim = SwimmingRecord::new(base(reps, 1.38, Duration::zero(), weight), pool, crossings);

        prop_assert_eq!(run.mean_speed_kmh(), 0.0);
        prop_assert_eq!(walk.mean_speed_kmh(), 0.0);
        prop_assert_eq!(swim.mean_speed_kmh(), 0.0);
        prop_assert_eq!(run.calories_kcal(), 0.0);
    }

    #[test]
    fn zero_height_means_zero_walking_calories(
        reps in 0u32..100_000,
        minutes in 0i64..600,
        weight in 0.0f64..200.0,
    ) {
        let walk = WalkingRecord::new(base(reps, LEN_STEP, Duration::minutes(minutes), weight), 0.0)
            .unwrap();
        prop_assert_eq!(walk.calories_kcal(), 0.0);
    }

    #[test]
    fn rendering_twice_is_identical(
        reps in 0u32..100_000,
        minutes in 0i64..600,
        weight in 1.0f64..200.0,
    ) {
        let report = RunningRecord::new(base(reps, LEN_STEP, Duration::minutes(minutes), weight))
            .summary();
        prop_assert_eq!(report.render(), report.render());
    }

    #[test]
    fn negative_duration_never_builds(seconds in 1i64..100_000) {
        prop_assert!(
            WorkoutRecord::new("test", 10, LEN_STEP, Duration::seconds(-seconds), 70.0).is_err()
        );
    }
}

#[test]
fn record_fields_read_through_the_calculator() {
    let walk = samples::walking().unwrap();
    let base = CaloriesCalculator::base(&walk);
    assert_eq!(base.repetitions(), 20_000);
    assert_eq!(base.duration(), Duration::minutes(225));
    assert!((walk.height_cm() - 185.0).abs() < f64::EPSILON);
}
