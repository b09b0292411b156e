use super::{emit, OutputFormat};
use clap::Args;
use digitcost::error::DcResult;
use digitcost::artifact::AnalysisReport;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// JSON report produced by `analyze`
    pub report: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,
}

pub fn run(args: RenderArgs) -> DcResult<()> {
    info!("Loading report {}", args.report.display());
    let report = AnalysisReport::load_from_file(&args.report)?;
    emit(&report, args.format, &args.output)
}
