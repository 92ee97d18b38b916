use crate::types::WorkoutKind;
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Print distance, mean speed and calories for the sample running, walking and swimming workouts"
)]
pub struct Cli {
    /// Only report these workout kinds (repeatable). Defaults to all.
    #[arg(long, value_enum, value_name = "KIND")]
    pub only: Vec<WorkoutKind>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

impl Cli {
    /// Whether `kind` passes the `--only` filter.
    pub fn wants(&self, kind: WorkoutKind) -> bool {
        self.only.is_empty() || self.only.contains(&kind)
    }
}
