use std::path::PathBuf;

/// Failures of the fallible helpers around envelopes.
///
/// Building an envelope never fails; these errors come from converting
/// arbitrary values into payloads and from loading message catalogs.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Payload could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid message catalog: {0}")]
    Catalog(#[source] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
