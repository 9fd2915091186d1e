use async_trait::async_trait;
use ferrous_dnsmap_application::ports::HierarchyWriter;
use ferrous_dnsmap_domain::DomainError;
use tokio::io::AsyncWriteExt;

/// Prints the document to stdout, terminated by a newline.
#[derive(Debug, Default)]
pub struct StdoutWriter;

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HierarchyWriter for StdoutWriter {
    async fn write(&self, document: &str) -> Result<(), DomainError> {
        let mut stdout = tokio::io::stdout();
        let to_error = |e: std::io::Error| DomainError::OutputError {
            destination: "stdout".to_string(),
            reason: e.to_string(),
        };

        stdout.write_all(document.as_bytes()).await.map_err(to_error)?;
        stdout.write_all(b"\n").await.map_err(to_error)?;
        stdout.flush().await.map_err(to_error)
    }

    fn destination(&self) -> String {
        "stdout".to_string()
    }
}
