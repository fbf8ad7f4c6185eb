//! Load and parse the configuration document from disk.

use crate::config::ConfigDocument;
use crate::error::ConfigError;
use std::path::Path;

/// Read the document at `path` and parse it. YAML is the configured format;
/// JSON documents parse as well since the parser accepts both.
pub async fn load_document(path: &Path) -> Result<ConfigDocument, ConfigError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
    let doc = serde_yaml::from_str(&raw)?;
    Ok(doc)
}
