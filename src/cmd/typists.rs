use crate::reports;
use clap::Args;
use digitcost::error::DcResult;
use digitcost::typist::TypistRegistry;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct TypistsArgs {
    /// CSV of typist profiles to list instead of the built-in ones
    #[arg(long)]
    pub typists_file: Option<PathBuf>,
}

pub fn run(args: TypistsArgs) -> DcResult<()> {
    let registry = match &args.typists_file {
        Some(path) => TypistRegistry::load_from_file(path)?,
        None => TypistRegistry::standard(),
    };
    reports::print_typists(registry.all());
    println!("   Default: {}", registry.default_profile().name);
    Ok(())
}
