use super::{emit, OutputFormat};
use clap::Args;
use digitcost::api;
use digitcost::config::{AnalysisConfig, ProjectionParams};
use digitcost::error::DcResult;
use digitcost::artifact::write_scenarios_csv;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// UTF-8 text document to analyze
    pub document: PathBuf,

    #[command(flatten)]
    pub config: AnalysisConfig,

    #[command(flatten)]
    pub projection: ProjectionParams,

    /// Directory receiving analysis.json and markdown reports
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Extra copy of the JSON report
    #[arg(long)]
    pub output_json: Option<PathBuf>,

    /// Scenario matrix as CSV
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
}

pub fn run(args: AnalyzeArgs) -> DcResult<()> {
    let report = api::analyze_document(&args.document, &args.config, &args.projection)?;

    fs::create_dir_all(&args.output)?;
    report.save_to_file(args.output.join("analysis.json"))?;
    if let Some(path) = &args.output_json {
        report.save_to_file(path)?;
    }
    if let Some(path) = &args.output_csv {
        write_scenarios_csv(&report.analysis, BufWriter::new(File::create(path)?))?;
        info!("Scenario CSV written to {}", path.display());
    }

    emit(&report, args.format, &args.output)
}
