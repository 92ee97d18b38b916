pub mod cli;
pub mod error;
pub mod metrics;
pub mod report;
pub mod samples;
pub mod types;
pub mod utils;

pub use error::RecordError;
pub use metrics::CaloriesCalculator;
pub use report::SummaryReport;
pub use types::{RunningRecord, SwimmingRecord, WalkingRecord, WorkoutKind, WorkoutRecord};
