//! Rule listing command

use clap::{Args, ValueEnum};
use fwlens_core::filter::{apply_filters, RuleFilters};
use fwlens_core::flatten_policies;
use fwlens_core::model::RuleRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Export JSON file
    #[arg(long, conflicts_with = "url")]
    pub input: Option<String>,

    /// Export HTTP(S) endpoint
    #[arg(long, conflicts_with = "input")]
    pub url: Option<String>,

    /// Keep only rules of this policy id
    #[arg(long)]
    pub policy: Option<String>,

    /// Keep only rules with this action (e.g. ALLOW)
    #[arg(long)]
    pub action: Option<String>,

    /// Keep only enabled rules
    #[arg(long)]
    pub enabled_only: bool,

    /// Case-insensitive text search over names, comments and references
    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn execute(args: RulesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let export = super::acquire_export(args.input.as_deref(), args.url.as_deref())?;
    let rows = flatten_policies(&export);
    let filters = RuleFilters {
        search: args.search,
        policy_id: args.policy,
        action: args.action,
        enabled_only: args.enabled_only,
    };
    let rows = apply_filters(&rows, &filters);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => print_table(&rows),
    }
    Ok(())
}

fn print_table(rows: &[RuleRow]) {
    println!(
        "{:<24} {:<28} {:<8} {:<8} {}",
        "POLICY", "RULE", "ACTION", "ENABLED", "SECTION"
    );
    for row in rows {
        println!(
            "{:<24} {:<28} {:<8} {:<8} {}",
            row.policy_name,
            row.rule_name,
            row.action,
            if row.enabled { "yes" } else { "no" },
            row.section
        );
    }
    println!("{} rules", rows.len());
}
