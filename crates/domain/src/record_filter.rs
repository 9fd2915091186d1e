use crate::{DnsRecord, RecordType};

pub const DEFAULT_EXCLUDED_TYPES: &[&str] = &["TXT", "SPF", "DKIM", "DMARC"];

pub const DEFAULT_EXCLUDED_NAME_TOKENS: &[&str] =
    &["_dmarc", "_domainkey", "_acme", "_verification"];

/// Drops text and verification records before the hierarchy is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    excluded_types: Vec<RecordType>,
    excluded_name_tokens: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub kept: Vec<DnsRecord>,
    pub removed: usize,
}

impl RecordFilter {
    pub fn new<T, N>(excluded_types: &[T], excluded_name_tokens: &[N]) -> Self
    where
        T: AsRef<str>,
        N: AsRef<str>,
    {
        Self {
            excluded_types: excluded_types
                .iter()
                .map(|t| RecordType::parse(t.as_ref()))
                .collect(),
            excluded_name_tokens: excluded_name_tokens
                .iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    pub fn excludes(&self, record: &DnsRecord) -> bool {
        if self.excluded_types.contains(&record.record_type) {
            return true;
        }
        let name = record.name.as_str();
        self.excluded_name_tokens
            .iter()
            .any(|token| name.contains(token.as_str()))
    }

    pub fn apply(&self, records: Vec<DnsRecord>) -> FilterOutcome {
        let total = records.len();
        let kept: Vec<DnsRecord> = records.into_iter().filter(|r| !self.excludes(r)).collect();
        FilterOutcome {
            removed: total - kept.len(),
            kept,
        }
    }
}

impl Default for RecordFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_TYPES, DEFAULT_EXCLUDED_NAME_TOKENS)
    }
}
