//! CLI commands.

pub mod diff;
pub mod rules;

use fwlens_core::model::RawPolicyExport;

/// Load an export from a local file, or fetch it when a URL was given.
///
/// Fetching runs on a private current-thread runtime; the commands themselves
/// stay synchronous.
pub fn acquire_export(
    input: Option<&str>,
    url: Option<&str>,
) -> Result<Vec<RawPolicyExport>, Box<dyn std::error::Error>> {
    match (input, url) {
        (Some(path), None) => Ok(fwlens_source::load_export(path)?),
        (None, Some(url)) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            Ok(runtime.block_on(fwlens_source::fetch_export(url))?)
        }
        _ => Err("specify exactly one of --input or --url".into()),
    }
}
