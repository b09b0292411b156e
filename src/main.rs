use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Typing cost of Thai vs. international digits", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a document across every scenario
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Re-render a saved JSON report
    Render(cmd::render::RenderArgs),
    /// Show layout summaries and per-digit costs
    Layouts(cmd::layouts::LayoutsArgs),
    /// List typist profiles
    Typists(cmd::typists::TypistsArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Render(args) => cmd::render::run(args),
        Commands::Layouts(args) => cmd::layouts::run(args),
        Commands::Typists(args) => cmd::typists::run(args),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
