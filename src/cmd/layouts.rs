use crate::reports;
use clap::Args;
use digitcost::error::DcResult;
use digitcost::layouts::LayoutSet;
use digitcost::typist::{TypistProfile, TypistRegistry};

#[derive(Args, Debug, Clone)]
pub struct LayoutsArgs {
    /// Seconds per keystroke for the digit table (default: the average typist)
    #[arg(long)]
    pub keystroke_seconds: Option<f64>,
}

pub fn run(args: LayoutsArgs) -> DcResult<()> {
    let layouts = LayoutSet::standard()?;
    let registry = match args.keystroke_seconds {
        // Same positivity rules as a typists file.
        Some(s) => TypistRegistry::from_profiles(vec![TypistProfile::new(
            "custom",
            s,
            "Custom",
            "--keystroke-seconds",
        )])?,
        None => TypistRegistry::standard(),
    };
    let secs = registry.default_profile().keystroke_seconds;

    let infos: Vec<_> = layouts.iter().map(|l| l.info()).collect();
    reports::print_layout_summary(&infos);
    reports::print_digit_comparison(&layouts, secs);
    Ok(())
}
