pub mod analyze;
pub mod layouts;
pub mod render;
pub mod typists;

use crate::reports;
use chrono::Utc;
use clap::ValueEnum;
use digitcost::error::DcResult;
use digitcost::artifact::{render_markdown, AnalysisReport};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Markdown,
    Json,
}

/// Presents a finished report in the requested format.
pub fn emit(report: &AnalysisReport, format: OutputFormat, output_dir: &Path) -> DcResult<()> {
    match format {
        OutputFormat::Console => reports::print_report(report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => {
            fs::create_dir_all(output_dir)?;
            let name = format!("analysis_report_{}.md", Utc::now().format("%Y%m%d_%H%M%S"));
            let path = output_dir.join(name);
            fs::write(&path, render_markdown(report))?;
            info!("Markdown report written to {}", path.display());
            println!("📝 {}", path.display());
        }
    }
    Ok(())
}
