use std::path::{Path, PathBuf};

use crate::error::AppError;

const DEFAULT_DATASET_PATH: &str = "electronics_dataset.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `ADVISOR_DATASET_PATH` (default: "electronics_dataset.csv")
    /// - `MCP_TCP_LISTEN_ADDR` (serve on TCP instead of stdio)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let dataset_path = PathBuf::from(
            lookup("ADVISOR_DATASET_PATH").unwrap_or_else(|| DEFAULT_DATASET_PATH.to_string()),
        );
        if !dataset_path.exists() {
            return Err(AppError::Config(format!(
                "dataset not found: {} (set ADVISOR_DATASET_PATH)",
                dataset_path.display()
            )));
        }

        Ok(Self {
            dataset_path,
            tcp_listen_addr: lookup("MCP_TCP_LISTEN_ADDR").filter(|s| !s.trim().is_empty()),
        })
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }
}
