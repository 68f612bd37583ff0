use thiserror::Error;

/// Failure taxonomy for a data source invocation.
///
/// Nothing here is fatal to the process: every variant degrades to
/// "no discoveries this round" for the affected source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{0}: credentials not configured")]
    ConfigMissing(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("No enumerable pattern for domain: {0}")]
    PatternUnavailable(String),
}
