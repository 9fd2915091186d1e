use super::{DnsName, RecordType};

/// One DNS entry as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: DnsName,

    pub record_type: RecordType,

    /// Raw provider payload; its shape depends on `record_type`.
    pub content: String,
}

impl DnsRecord {
    pub fn new(name: &str, record_type: RecordType, content: impl Into<String>) -> Self {
        Self {
            name: DnsName::new(name),
            record_type,
            content: content.into(),
        }
    }

    /// The whole content as a normalized name, `None` when it is empty.
    pub fn content_name(&self) -> Option<DnsName> {
        DnsName::non_empty(&self.content)
    }

    /// The name this record references, if its type carries one.
    ///
    /// MX content is `priority host`, SRV content is
    /// `priority weight port target`. Content with too few tokens yields
    /// `None`.
    pub fn target(&self) -> Option<DnsName> {
        let content = self.content_name()?;
        match &self.record_type {
            t if t.is_alias() => Some(content),
            RecordType::MX => Self::token(&content, 1),
            RecordType::SRV => Self::token(&content, 3),
            _ => None,
        }
    }

    fn token(content: &DnsName, index: usize) -> Option<DnsName> {
        content
            .as_str()
            .split_whitespace()
            .nth(index)
            .and_then(DnsName::non_empty)
    }
}
