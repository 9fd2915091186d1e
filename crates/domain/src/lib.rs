//! Ferrous DNS Mapper Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod hierarchy;
pub mod record_filter;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{DnsName, DnsRecord, RecordType};
pub use errors::DomainError;
pub use hierarchy::{
    find_roots, render, render_document, reroot, resolve, Hierarchy, NameIndex, RelationshipMap,
    RootLayout, RootSet, DOCUMENT_TITLE,
};
pub use record_filter::{FilterOutcome, RecordFilter};
pub use zone::Zone;
