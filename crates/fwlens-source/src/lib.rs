//! Export document acquisition for FWLens.
//!
//! The I/O boundary in front of the pure core: load an export document from a
//! local file or fetch it from an HTTP endpoint, parse it into the raw model,
//! and surface acquisition failures as structured errors. Parsing tolerance
//! lives in the raw model itself; this crate only fails when the bytes cannot
//! be obtained or are not a JSON array at the top level.

use fwlens_core::errors::{LensError, LensErrorKind};
use fwlens_core::model::RawPolicyExport;
use std::path::{Path, PathBuf};

/// Acquisition-boundary error: why an export document could not be obtained
/// or parsed into the raw model.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read export file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("export document is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl From<SourceError> for LensError {
    fn from(err: SourceError) -> Self {
        let kind = match &err {
            SourceError::Io { .. } => LensErrorKind::Io,
            SourceError::InvalidBody(_) => LensErrorKind::InvalidDocument,
            SourceError::Request { .. } | SourceError::HttpStatus { .. } => {
                LensErrorKind::ExternalService
            }
        };
        LensError::new(kind)
            .with_op("acquire_export")
            .with_message(err.to_string())
    }
}

/// Load and parse an export document from a local JSON file.
pub fn load_export(path: impl AsRef<Path>) -> Result<Vec<RawPolicyExport>, SourceError> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let export = parse_export(&body)?;
    tracing::debug!(path = %path.display(), policies = export.len(), "loaded export file");
    Ok(export)
}

/// Fetch and parse an export document from an HTTP endpoint.
///
/// Sends `Cache-Control: no-cache` so an intermediary never serves a stale
/// snapshot; a non-success status is an error even when a body is present.
pub async fn fetch_export(url: &str) -> Result<Vec<RawPolicyExport>, SourceError> {
    let response = reqwest::Client::new()
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(|source| SourceError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| SourceError::Request {
        url: url.to_string(),
        source,
    })?;
    let export = parse_export(&body)?;
    tracing::debug!(url, policies = export.len(), "fetched export document");
    Ok(export)
}

/// Parse the raw body. A single export entry (bare object) is accepted and
/// wrapped; anything else must be a JSON array of entries.
fn parse_export(body: &str) -> Result<Vec<RawPolicyExport>, SourceError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let export = if value.is_object() {
        vec![serde_json::from_value(value)?]
    } else {
        serde_json::from_value(value)?
    };
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_export_parses_array_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "export.json",
            r#"[{"policy": {"id": "p1", "name": "Edge"}, "rules": [{"id": "r1"}]}]"#,
        );
        let export = load_export(&path).unwrap();
        assert_eq!(export.len(), 1);
        assert_eq!(
            export[0].policy.as_ref().and_then(|p| p.id.as_deref()),
            Some("p1")
        );
    }

    #[test]
    fn test_load_export_wraps_bare_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "export.json", r#"{"policy": {"id": "p1"}}"#);
        let export = load_export(&path).unwrap();
        assert_eq!(export.len(), 1);
    }

    #[test]
    fn test_missing_file_maps_to_io_kind() {
        let err = load_export("/nonexistent/export.json").unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        let lens: LensError = err.into();
        assert_eq!(lens.kind(), LensErrorKind::Io);
        assert_eq!(lens.op(), Some("acquire_export"));
    }

    #[test]
    fn test_malformed_json_maps_to_invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "export.json", "not json at all");
        let err = load_export(&path).unwrap_err();
        assert!(matches!(err, SourceError::InvalidBody(_)));
        let lens: LensError = err.into();
        assert_eq!(lens.kind(), LensErrorKind::InvalidDocument);
    }

    #[test]
    fn test_non_entry_top_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "export.json", "42");
        assert!(load_export(&path).is_err());
    }
}
