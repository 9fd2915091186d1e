mod dns_record_provider;
mod hierarchy_writer;

pub use dns_record_provider::DnsRecordProvider;
pub use hierarchy_writer::HierarchyWriter;
