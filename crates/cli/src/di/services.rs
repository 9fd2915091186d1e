use ferrous_dnsmap_application::ports::{DnsRecordProvider, HierarchyWriter};
use ferrous_dnsmap_application::use_cases::GenerateHierarchyUseCase;
use ferrous_dnsmap_domain::Config;
use ferrous_dnsmap_infrastructure::cloudflare::CloudflareClient;
use ferrous_dnsmap_infrastructure::output::{MarkdownFileWriter, StdoutWriter};
use std::sync::Arc;

pub struct Services {
    pub generate_hierarchy: GenerateHierarchyUseCase,
    pub destination: String,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let provider: Arc<dyn DnsRecordProvider> =
            Arc::new(CloudflareClient::new(&config.provider)?);

        let writer: Arc<dyn HierarchyWriter> = if config.output.is_stdout() {
            Arc::new(StdoutWriter::new())
        } else {
            Arc::new(MarkdownFileWriter::new(&config.output.path))
        };
        let destination = writer.destination();

        let generate_hierarchy = GenerateHierarchyUseCase::new(provider, writer)
            .with_filter(config.filter.record_filter());

        Ok(Self {
            generate_hierarchy,
            destination,
        })
    }
}
