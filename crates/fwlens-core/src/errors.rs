//! Canonical error facility for FWLens.
//!
//! The normalizer and diff engine are total and never return errors; this
//! facility serves the layers around them (document acquisition, CLI). Each
//! kind maps to a stable error code for programmatic handling and tests.

/// Result type alias using LensError
pub type Result<T> = std::result::Result<T, LensError>;

/// Canonical error kind taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LensErrorKind {
    /// The export document could not be parsed as the expected JSON shape
    InvalidDocument,
    /// Filesystem error while reading an export
    Io,
    /// HTTP retrieval of an export failed
    ExternalService,
    /// JSON encoding/decoding failure outside of document parsing
    Serialization,
    /// Generic internal error
    Internal,
}

impl LensErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LensErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            LensErrorKind::Io => "ERR_IO",
            LensErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            LensErrorKind::Serialization => "ERR_SERIALIZATION",
            LensErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for classification plus optional operation and message
/// context for debugging.
#[derive(Debug, Clone)]
pub struct LensError {
    kind: LensErrorKind,
    op: Option<String>,
    message: String,
}

impl LensError {
    /// Create a new error with the specified kind
    pub fn new(kind: LensErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> LensErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for LensError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for LensError {}

impl From<serde_json::Error> for LensError {
    fn from(err: serde_json::Error) -> Self {
        LensError::new(LensErrorKind::Serialization).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (LensErrorKind::InvalidDocument, "ERR_INVALID_DOCUMENT"),
            (LensErrorKind::Io, "ERR_IO"),
            (LensErrorKind::ExternalService, "ERR_EXTERNAL_SERVICE"),
            (LensErrorKind::Serialization, "ERR_SERIALIZATION"),
            (LensErrorKind::Internal, "ERR_INTERNAL"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_op_and_message() {
        let err = LensError::new(LensErrorKind::Io)
            .with_op("load_export")
            .with_message("no such file");
        let rendered = err.to_string();
        assert!(rendered.contains("ERR_IO"));
        assert!(rendered.contains("load_export"));
        assert!(rendered.contains("no such file"));
    }
}
