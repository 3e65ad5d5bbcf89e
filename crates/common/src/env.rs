//! Environment/runtime helpers
//!
//! Sanity checks on the data file path at startup.

use std::path::Path;

use tracing::{info, warn};

/// Check the data file path; warn if the file is absent (the store seeds it on open).
pub async fn ensure_env(data_file: &Path) -> anyhow::Result<()> {
    match tokio::fs::metadata(data_file).await {
        Ok(meta) if meta.is_dir() => {
            Err(anyhow::anyhow!("{} is a directory, not a data file", data_file.display()))
        }
        Ok(_) => {
            info!(data_file = %data_file.display(), "using existing data file");
            Ok(())
        }
        Err(_) => {
            warn!(data_file = %data_file.display(), "data file not found; an empty collection will be created");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_env_only_checks_the_path() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("form_env_{}", uuid::Uuid::new_v4()));

        // missing file is fine and nothing gets created
        ensure_env(&root.join("db.json")).await?;
        assert!(tokio::fs::metadata(&root).await.is_err());

        // a directory where the file should be is rejected
        tokio::fs::create_dir_all(root.join("db.json")).await?;
        assert!(ensure_env(&root.join("db.json")).await.is_err());

        tokio::fs::write(root.join("other.json"), b"[]").await?;
        ensure_env(&root.join("other.json")).await?;

        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }
}
