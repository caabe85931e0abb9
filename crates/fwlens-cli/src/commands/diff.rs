//! Rule diff command

use clap::{Args, ValueEnum};
use fwlens_core::diff::{diff_rule_sets, render_human_summary};
use fwlens_core::flatten_policies;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Summary,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Baseline export JSON file
    #[arg(long)]
    pub baseline: String,

    /// Current export JSON file
    #[arg(long)]
    pub current: String,

    /// Label for the baseline side (defaults to the given path)
    #[arg(long)]
    pub baseline_label: Option<String>,

    /// Label for the current side (defaults to the given path)
    #[arg(long)]
    pub current_label: Option<String>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    pub format: ReportFormat,
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let baseline_rows = flatten_policies(&fwlens_source::load_export(&args.baseline)?);
    let current_rows = flatten_policies(&fwlens_source::load_export(&args.current)?);

    let report = diff_rule_sets(&current_rows, &baseline_rows).with_labels(
        args.baseline_label.unwrap_or(args.baseline),
        args.current_label.unwrap_or(args.current),
    );

    match args.format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Summary => print!("{}", render_human_summary(&report)),
    }
    Ok(())
}
