//! Zero-downtime reload: build the whole replacement table off to the side,
//! then publish it in one atomic swap. A failed build leaves the previous
//! table serving. Signal delivery is decoupled from the reload work through a
//! channel so the handler stays fast regardless of config or file latency.

use crate::config::{load_document, normalize};
use crate::error::ConfigError;
use crate::registry::RouteRegistry;
use crate::table::{compile, RouteTable};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Load, normalize, and compile the table from the document at `path`.
/// Used both at startup (failure is fatal) and per reload trigger (failure
/// aborts that reload).
pub async fn build_table(path: &Path) -> Result<RouteTable, ConfigError> {
    let doc = load_document(path).await?;
    let specs = normalize(&doc)?;
    Ok(compile(specs))
}

/// Rebuild from `path` and publish on success. The registry is untouched on
/// any failure, so previously active routes keep serving.
pub async fn reload(registry: &RouteRegistry, path: &Path) -> Result<(), ConfigError> {
    let table = build_table(path).await?;
    let routes = table.len();
    registry.publish(table);
    tracing::info!(routes, "config reloaded");
    Ok(())
}

/// Dedicated reload worker: drains trigger events and performs one reload per
/// event. Runs until every sender is dropped.
pub fn spawn_reload_worker(
    registry: Arc<RouteRegistry>,
    config_path: PathBuf,
    mut triggers: mpsc::UnboundedReceiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while triggers.recv().await.is_some() {
            if let Err(e) = reload(&registry, &config_path).await {
                tracing::error!(error = %e, "reload failed, keeping current route table");
            }
        }
    })
}

/// Forward SIGHUP deliveries into the trigger channel.
#[cfg(unix)]
pub fn spawn_sighup_listener(triggers: mpsc::UnboundedSender<()>) -> std::io::Result<JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hup = signal(SignalKind::hangup())?;
    Ok(tokio::spawn(async move {
        while hup.recv().await.is_some() {
            tracing::info!("SIGHUP received, scheduling reload");
            if triggers.send(()).is_err() {
                break;
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{content}").unwrap();
        f
    }

    #[tokio::test]
    async fn failed_reload_keeps_previous_table() {
        let good = write_config(
            "endpoints:\n  - path: /users\n    query: SELECT 1\n  - path: /orders\n    query: SELECT 2\n",
        );
        let registry = RouteRegistry::empty();
        reload(&registry, good.path()).await.unwrap();

        let bad = write_config("neither_section: true\n");
        let err = reload(&registry, bad.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::MissingSection));

        // Every previously active path is still reachable and unchanged.
        assert_eq!(registry.lookup("/users").unwrap().query, "SELECT 1");
        assert_eq!(registry.lookup("/orders").unwrap().query, "SELECT 2");
        assert_eq!(registry.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn unparseable_reload_keeps_previous_table() {
        let good = write_config("endpoints:\n  - path: /users\n    query: SELECT 1\n");
        let registry = RouteRegistry::empty();
        reload(&registry, good.path()).await.unwrap();

        let bad = write_config("endpoints: [unclosed\n");
        assert!(reload(&registry, bad.path()).await.is_err());
        assert!(registry.lookup("/users").is_some());
    }

    #[tokio::test]
    async fn successful_reload_fully_replaces_table() {
        let first = write_config("endpoints:\n  - path: /old\n    query: SELECT 1\n");
        let registry = RouteRegistry::empty();
        reload(&registry, first.path()).await.unwrap();

        let second = write_config(
            "mappings:\n  - api_endpoint: /new\n    query: SELECT 2\n    columns:\n      id: newId\n",
        );
        reload(&registry, second.path()).await.unwrap();

        assert!(registry.lookup("/old").is_none());
        let entry = registry.lookup("/new").unwrap();
        assert_eq!(entry.query, "SELECT 2");
        assert_eq!(
            entry.mapping,
            vec![("newId".to_string(), "id".to_string())]
        );
    }

    #[tokio::test]
    async fn worker_publishes_on_trigger() {
        let config = write_config("endpoints:\n  - path: /users\n    query: SELECT 1\n");
        let registry = Arc::new(RouteRegistry::empty());
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = spawn_reload_worker(
            Arc::clone(&registry),
            config.path().to_path_buf(),
            rx,
        );

        tx.send(()).unwrap();
        drop(tx);
        worker.await.unwrap();

        assert!(registry.lookup("/users").is_some());
    }
}
