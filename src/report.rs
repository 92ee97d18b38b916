use crate::utils::duration_minutes;
use chrono::Duration;
use serde::{Serialize, Serializer};
use std::fmt;

/// Computed statistics for one workout, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub workout_type: String,
    #[serde(rename = "duration_minutes", serialize_with = "serialize_minutes")]
    pub duration: Duration,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl SummaryReport {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workout type: {}", self.workout_type)?;
        writeln!(f, "Duration: {} min", duration_minutes(self.duration))?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Mean speed: {:.2} km/h", self.mean_speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories_kcal)
    }
}

fn serialize_minutes<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(duration_minutes(*d))
}
