use async_trait::async_trait;
use ferrous_dnsmap_domain::{DnsRecord, DomainError, Zone};

/// Source of zones and their records (e.g. a provider REST API).
#[async_trait]
pub trait DnsRecordProvider: Send + Sync {
    async fn list_zones(&self) -> Result<Vec<Zone>, DomainError>;

    async fn list_records(&self, zone: &Zone) -> Result<Vec<DnsRecord>, DomainError>;
}
