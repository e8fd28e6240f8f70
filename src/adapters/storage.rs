use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Files under a base directory on local disk.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(self.resolve(path)).await?)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tracing::debug!("Writing {} bytes to {}", data.len(), target.display());
        tokio::fs::write(&target, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_dirs_and_reads_back() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("nested/export.bin", b"abc").await.unwrap();
        assert_eq!(storage.read_file("nested/export.bin").await.unwrap(), b"abc");
        assert!(storage.read_file("missing.bin").await.is_err());
    }
}
