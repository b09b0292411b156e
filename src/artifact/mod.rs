//! Portable analysis artifact.
//!
//! An [`AnalysisReport`] wraps one [`AnalysisResult`] with metadata, headline
//! findings and labour-cost projections. It is written once as JSON and every
//! renderer (markdown, console, CSV) consumes it without recomputing.

pub mod export;
pub mod markdown;

pub use self::export::write_scenarios_csv;
pub use self::markdown::render_markdown;

pub use crate::config::ProjectionParams;
use crate::consts::DEFAULT_TYPIST;
use crate::error::DcResult;
use crate::matrix::{
    safe_percentage, AnalysisResult, ScenarioKey, ScoringSettings, TypistComparison,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Adoption scales used for impact projections: (name, documents per day).
pub const PROJECTION_SCALES: [(&str, u32); 4] = [
    ("Small Ministry", 50),
    ("Large Ministry", 200),
    ("Government-wide", 1000),
    ("Full National Scale", 5000),
];

/// Report metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Generation timestamp, RFC 3339 in UTC
    pub generated_at: String,
    /// Version of the tool that produced the report
    pub tool_version: String,
    /// File name (or label) of the analysed document
    pub document_name: String,
    pub scoring: ScoringSettings,
}

/// Time for one scenario of the reference typist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSummary {
    pub scenario: ScenarioKey,
    pub description: String,
    pub time_minutes: f64,
    pub time_hours: f64,
}

impl StateSummary {
    fn new(scenario: ScenarioKey, seconds: f64) -> Self {
        Self {
            scenario,
            description: scenario.label(),
            time_minutes: seconds / 60.0,
            time_hours: seconds / 3600.0,
        }
    }
}

/// Headline numbers for the reference typist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFindings {
    pub typist: String,
    /// Missing when the current scenario was filtered out
    pub current_state: Option<StateSummary>,
    pub optimal_state: StateSummary,
    pub time_saved_minutes: f64,
    pub efficiency_gain_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleProjection {
    pub scale: String,
    pub docs_per_day: u32,
    pub annual_hours_saved: f64,
    pub annual_cost_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactProjections {
    pub per_document_minutes_saved: f64,
    pub per_document_hours_saved: f64,
    pub assumptions: ProjectionParams,
    pub scales: Vec<ScaleProjection>,
}

impl ImpactProjections {
    pub fn new(seconds_saved_per_doc: f64, params: ProjectionParams) -> Self {
        let hours_per_doc = seconds_saved_per_doc / 3600.0;
        let scales = PROJECTION_SCALES
            .iter()
            .map(|&(name, docs_per_day)| {
                let annual_hours = docs_per_day as f64 * params.working_days as f64 * hours_per_doc;
                ScaleProjection {
                    scale: name.to_string(),
                    docs_per_day,
                    annual_hours_saved: annual_hours,
                    annual_cost_savings: annual_hours * params.hourly_cost,
                }
            })
            .collect();

        Self {
            per_document_minutes_saved: seconds_saved_per_doc / 60.0,
            per_document_hours_saved: hours_per_doc,
            assumptions: params,
            scales,
        }
    }
}

/// Complete analysis artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub analysis: AnalysisResult,
    pub key_findings: KeyFindings,
    pub impact_projections: ImpactProjections,
}

impl AnalysisReport {
    pub fn new(analysis: AnalysisResult, document_name: &str, params: ProjectionParams) -> Self {
        let metadata = ReportMetadata {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            document_name: document_name.to_string(),
            scoring: analysis.scoring,
        };

        let key_findings = key_findings(&analysis);
        let lost = reference_comparison(&analysis)
            .and_then(|c| c.baseline)
            .map_or(0.0, |b| b.lost_seconds);
        let impact_projections = ImpactProjections::new(lost, params);

        Self {
            metadata,
            analysis,
            key_findings,
            impact_projections,
        }
    }

    /// Writes pretty JSON, creating parent directories as needed.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> DcResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        info!("Saved analysis report to {}", path.display());
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DcResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn reference_comparison(analysis: &AnalysisResult) -> Option<&TypistComparison> {
    analysis
        .comparison(DEFAULT_TYPIST)
        .or_else(|| analysis.comparisons.first())
}

fn key_findings(analysis: &AnalysisResult) -> KeyFindings {
    // The builder never returns an empty comparison list.
    let Some(cmp) = reference_comparison(analysis) else {
        return KeyFindings {
            typist: String::new(),
            current_state: None,
            optimal_state: StateSummary::new(ScenarioKey::CURRENT, 0.0),
            time_saved_minutes: 0.0,
            efficiency_gain_percent: 0.0,
        };
    };

    let current_state = cmp
        .baseline
        .map(|b| StateSummary::new(ScenarioKey::CURRENT, b.current_seconds));
    let (saved, gain) = cmp.baseline.map_or((0.0, 0.0), |b| {
        (b.lost_seconds, safe_percentage(b.lost_seconds, b.current_seconds))
    });

    KeyFindings {
        typist: cmp.typist.clone(),
        current_state,
        optimal_state: StateSummary::new(cmp.optimal, cmp.optimal_seconds),
        time_saved_minutes: saved / 60.0,
        efficiency_gain_percent: gain,
    }
}
