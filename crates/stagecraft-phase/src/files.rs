//! Local filesystem implementation of the file loader port

use crate::error::Result;
use crate::ports::FileLoader;
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

/// Loads asset files from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFiles;

#[async_trait]
impl FileLoader for LocalFiles {
    async fn load_file(&self, path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            tracing::debug!("File not found: {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(path).await?;
        Ok(Some(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn loads_existing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("template.yml");
        std::fs::write(&path, "Resources: {}").unwrap();

        let content = LocalFiles.load_file(&path).await.unwrap();
        assert_eq!(content.as_deref(), Some("Resources: {}"));
    }

    #[tokio::test]
    async fn missing_file_is_none() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nope.yml");

        let content = LocalFiles.load_file(&path).await.unwrap();
        assert!(content.is_none());
    }
}
