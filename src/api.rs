use crate::config::{AnalysisConfig, ProjectionParams};
use crate::error::DcResult;
use crate::layouts::LayoutSet;
use crate::matrix::{AnalysisResult, ScenarioMatrixBuilder};
use crate::artifact::AnalysisReport;
use crate::typist::{TypistRegistry, TypistSelection};
use std::fs;
use std::path::Path;
use tracing::info;

/// Service: Resolve the typist registry (built-in or CSV file).
pub fn load_registry(config: &AnalysisConfig) -> DcResult<TypistRegistry> {
    match &config.typists_file {
        Some(path) => TypistRegistry::load_from_file(path),
        None => Ok(TypistRegistry::standard()),
    }
}

/// Service: Build the scenario matrix for an in-memory document.
pub fn analyze_text(document: &str, config: &AnalysisConfig) -> DcResult<AnalysisResult> {
    let registry = load_registry(config)?;
    // Unknown profiles fail here, before any document walk.
    let selection: TypistSelection = config.typist.parse()?;
    let typists = registry.select(&selection)?;

    let mut builder = ScenarioMatrixBuilder::new(LayoutSet::standard()?)
        .with_scoring(config.scoring)
        .with_policy(config.policy)
        .with_breakdown(config.breakdown)
        .with_context_radius(config.context_radius);
    if !config.scripts.is_empty() {
        builder = builder.with_scripts(config.scripts.clone());
    }
    if !config.layouts.is_empty() {
        builder = builder.with_layouts(config.layouts.clone());
    }

    builder.build(document, &typists)
}

/// Service: Read a UTF-8 document and wrap its analysis in a report.
pub fn analyze_document<P: AsRef<Path>>(
    path: P,
    config: &AnalysisConfig,
    projection: &ProjectionParams,
) -> DcResult<AnalysisReport> {
    let path = path.as_ref();
    info!("Reading document {}", path.display());
    let document = fs::read_to_string(path)?;

    let result = analyze_text(&document, config)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(AnalysisReport::new(result, &name, *projection))
}
