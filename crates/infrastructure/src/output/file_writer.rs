use async_trait::async_trait;
use ferrous_dnsmap_application::ports::HierarchyWriter;
use ferrous_dnsmap_domain::DomainError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes the hierarchy document to a file, replacing any previous content.
pub struct MarkdownFileWriter {
    path: PathBuf,
}

impl MarkdownFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HierarchyWriter for MarkdownFileWriter {
    async fn write(&self, document: &str) -> Result<(), DomainError> {
        tokio::fs::write(&self.path, document)
            .await
            .map_err(|e| DomainError::OutputError {
                destination: self.destination(),
                reason: e.to_string(),
            })?;

        debug!(path = %self.path.display(), bytes = document.len(), "Document written");
        Ok(())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}
