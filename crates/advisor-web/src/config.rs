use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const DEFAULT_DATASET_PATH: &str = "electronics_dataset.csv";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Optional:
    /// - `ADVISOR_DATASET_PATH` (default: "electronics_dataset.csv")
    /// - `ADVISOR_BIND_ADDR` (default: "127.0.0.1:5000")
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

        let raw_addr =
            lookup("ADVISOR_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!("ADVISOR_BIND_ADDR is not a socket address ({raw_addr}): {e}"))
        })?;

        Ok(Self {
            dataset_path,
            bind_addr,
        })
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }
}
