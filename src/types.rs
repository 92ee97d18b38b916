use crate::error::{RecordError, check_measurement};
use chrono::Duration;
use clap::ValueEnum;

/// The fixed set of supported workouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        }
    }
}

/// Fields shared by every workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    label: String,
    repetitions: u32,
    step_length_m: f64,
    duration: Duration,
    weight_kg: f64,
}

impl WorkoutRecord {
    /// Builds a record, rejecting negative durations and negative or non-finite
    /// step lengths and weights.
    pub fn new(
        label: impl Into<String>,
        repetitions: u32,
        step_length_m: f64,
        duration: Duration,
        weight_kg: f64,
    ) -> Result<Self, RecordError> {
        if duration < Duration::zero() {
            return Err(RecordError::NegativeDuration {
                seconds: duration.num_seconds(),
            });
        }

        Ok(Self {
            label: label.into(),
            repetitions,
            step_length_m: check_measurement("step length", step_length_m)?,
            duration,
            weight_kg: check_measurement("weight", weight_kg)?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Steps, or strokes when swimming.
    pub const fn repetitions(&self) -> u32 {
        self.repetitions
    }

    pub const fn step_length_m(&self) -> f64 {
        self.step_length_m
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunningRecord {
    pub(crate) base: WorkoutRecord,
}

impl RunningRecord {
    pub const fn new(base: WorkoutRecord) -> Self {
        Self { base }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalkingRecord {
    pub(crate) base: WorkoutRecord,
    height_cm: f64,
}

impl WalkingRecord {
    pub fn new(base: WorkoutRecord, height_cm: f64) -> Result<Self, RecordError> {
        Ok(Self {
            base,
            height_cm: check_measurement("height", height_cm)?,
        })
    }

    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwimmingRecord {
    pub(crate) base: WorkoutRecord,
    pool_length_m: u32,
    pool_crossings: u32,
}

impl SwimmingRecord {
    pub const fn new(base: WorkoutRecord, pool_length_m: u32, pool_crossings: u32) -> Self {
        Self {
            base,
            pool_length_m,
            pool_crossings,
        }
    }

    pub const fn pool_length_m(&self) -> u32 {
        self.pool_length_m
    }

    /// Number of times the pool length was swum.
    pub const fn pool_crossings(&self) -> u32 {
        self.pool_crossings
    }
}
