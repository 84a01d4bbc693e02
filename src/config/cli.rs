use crate::config::BASE_DIR;
use crate::core::Storage;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Takes no options; clap still provides `--help` and `--version`.
#[derive(Debug, Clone, Parser)]
#[command(name = "results-clean", version)]
#[command(about = "Strip `profile` from every entry of input.json's `results` into output.json")]
pub struct Cli {}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(BASE_DIR)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.full_path(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        tokio::fs::write(self.full_path(path), data).await?;
        Ok(())
    }
}
