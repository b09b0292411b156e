use crate::consts::{DEFAULT_CONTEXT_RADIUS, DEFAULT_HOURLY_COST, DEFAULT_TYPIST, DEFAULT_WORKING_DAYS};
use crate::digits::DigitScript;
use crate::layouts::LayoutName;
use crate::scorer::{CostPolicy, ScoringMode};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything that shapes one scenario matrix run.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Typist profile name, or `all`
    #[arg(long, default_value = DEFAULT_TYPIST)]
    pub typist: String,

    /// Restrict to these digit scripts (repeatable)
    #[arg(long = "script", value_enum, ignore_case = true)]
    pub scripts: Vec<DigitScript>,

    /// Restrict to these layouts (repeatable)
    #[arg(long = "layout", value_enum, ignore_case = true)]
    pub layouts: Vec<LayoutName>,

    #[arg(long, value_enum, default_value_t = ScoringMode::Unweighted)]
    pub scoring: ScoringMode,

    #[arg(long, value_enum, default_value_t = CostPolicy::DigitsOnly)]
    pub policy: CostPolicy,

    /// Include a per-character cost breakdown in every scenario
    #[arg(long, default_value_t = false)]
    pub breakdown: bool,

    #[arg(long, default_value_t = DEFAULT_CONTEXT_RADIUS)]
    pub context_radius: usize,

    /// CSV of typist profiles replacing the built-in four
    #[arg(long)]
    pub typists_file: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            typist: DEFAULT_TYPIST.to_string(),
            scripts: Vec::new(),
            layouts: Vec::new(),
            scoring: ScoringMode::Unweighted,
            policy: CostPolicy::DigitsOnly,
            breakdown: false,
            context_radius: DEFAULT_CONTEXT_RADIUS,
            typists_file: None,
        }
    }
}

/// Assumptions behind the annual impact projections.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    #[arg(long, default_value_t = DEFAULT_WORKING_DAYS)]
    pub working_days: u32,
    /// Labour cost per hour, in dollars
    #[arg(long, default_value_t = DEFAULT_HOURLY_COST)]
    pub hourly_cost: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            working_days: DEFAULT_WORKING_DAYS,
            hourly_cost: DEFAULT_HOURLY_COST,
        }
    }
}
