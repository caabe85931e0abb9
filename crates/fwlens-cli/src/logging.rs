//! Logging initialization.
//!
//! Single initialization point for the tracing subscriber. Events go to
//! stderr so stdout stays reserved for command output (JSON reports must
//! remain pipeable).

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Initialize the tracing subscriber once.
///
/// Filter precedence: explicit `--log-level` directive, then `RUST_LOG`,
/// then the `fwlens=info` default. Later calls are no-ops.
pub fn init(directive: Option<&str>) {
    INIT_ONCE.call_once(|| {
        let filter = match directive {
            Some(directive) => EnvFilter::new(directive),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fwlens=info")),
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(None);
        init(Some("fwlens=debug"));
        init(None);
    }
}
