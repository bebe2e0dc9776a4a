use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "analyst=info";

/// The terminal belongs to the UI, so logs go to `~/.cache/analyst/analyst.log`.
pub fn log_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".cache");
        path.push("analyst");
        path.push("analyst.log");
        path
    })
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() -> Result<PathBuf> {
    let path = log_path().context("could not determine home directory")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("could not open {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_lives_under_cache() {
        if let Some(path) = log_path() {
            assert!(path.ends_with(".cache/analyst/analyst.log"));
        }
    }
}
