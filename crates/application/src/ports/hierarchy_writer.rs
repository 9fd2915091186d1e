use async_trait::async_trait;
use ferrous_dnsmap_domain::DomainError;

/// Port for persisting the rendered hierarchy document.
#[async_trait]
pub trait HierarchyWriter: Send + Sync {
    async fn write(&self, document: &str) -> Result<(), DomainError>;

    /// Human-readable target, used in log messages.
    fn destination(&self) -> String;
}
