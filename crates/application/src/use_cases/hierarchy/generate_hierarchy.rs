use std::sync::Arc;

use ferrous_dnsmap_domain::{DnsRecord, DomainError, Hierarchy, RecordFilter};
use tracing::{debug, info, instrument};

use crate::ports::{DnsRecordProvider, HierarchyWriter};

#[derive(Debug, Clone)]
pub struct HierarchyReport {
    pub zones: usize,
    pub records: usize,
    pub filtered: usize,
    pub edges: usize,
    pub roots: usize,
    pub document: String,
}

/// Fetches every zone's records, builds the hierarchy and writes it out.
pub struct GenerateHierarchyUseCase {
    provider: Arc<dyn DnsRecordProvider>,
    writer: Arc<dyn HierarchyWriter>,
    filter: Option<RecordFilter>,
}

impl GenerateHierarchyUseCase {
    pub fn new(provider: Arc<dyn DnsRecordProvider>, writer: Arc<dyn HierarchyWriter>) -> Self {
        Self {
            provider,
            writer,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: Option<RecordFilter>) -> Self {
        self.filter = filter;
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<HierarchyReport, DomainError> {
        info!("Fetching zones...");
        let zones = self.provider.list_zones().await?;
        info!(count = zones.len(), "Found {} zone(s)", zones.len());

        let mut records: Vec<DnsRecord> = Vec::new();
        for zone in &zones {
            info!(zone = %zone.name, "Fetching DNS records for {}...", zone.name);
            let zone_records = self.provider.list_records(zone).await?;
            info!(
                zone = %zone.name,
                count = zone_records.len(),
                "  Found {} record(s)",
                zone_records.len()
            );
            records.extend(zone_records);
        }

        let (records, filtered) = self.apply_filter(records);
        info!(total = records.len(), "Total records: {}", records.len());

        info!("Building hierarchy...");
        let hierarchy = Hierarchy::build(&records);
        debug!(
            edges = hierarchy.edge_count(),
            initial_roots = hierarchy.initial_roots.len(),
            synthetic_roots = hierarchy.layout.ip_parents.len(),
            "Hierarchy built"
        );
        info!(
            roots = hierarchy.root_count(),
            "Found {} root record(s)",
            hierarchy.root_count()
        );

        let document = hierarchy.render_document();
        let destination = self.writer.destination();
        info!(destination = %destination, "Writing to {}...", destination);
        self.writer.write(&document).await?;

        Ok(HierarchyReport {
            zones: zones.len(),
            records: records.len(),
            filtered,
            edges: hierarchy.edge_count(),
            roots: hierarchy.root_count(),
            document,
        })
    }

    fn apply_filter(&self, records: Vec<DnsRecord>) -> (Vec<DnsRecord>, usize) {
        let Some(filter) = &self.filter else {
            return (records, 0);
        };

        let outcome = filter.apply(records);
        if outcome.removed > 0 {
            info!(
                count = outcome.removed,
                "  Filtered out {} TXT/verification record(s)",
                outcome.removed
            );
        }
        (outcome.kept, outcome.removed)
    }
}
