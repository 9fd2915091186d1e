use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A normalized node name in the record graph.
///
/// Record names, content targets and synthetic IP parents all go through
/// [`DnsName::new`], so two spellings that differ only by case, surrounding
/// whitespace or one trailing dot compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DnsName(Arc<str>);

impl DnsName {
    pub fn new(raw: &str) -> Self {
        Self(Arc::from(normalize(raw).as_str()))
    }

    /// Normalizes `raw`, returning `None` when nothing is left.
    pub fn non_empty(raw: &str) -> Option<Self> {
        let name = Self::new(raw);
        (!name.is_empty()).then_some(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match lowered.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DnsName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DnsName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DnsName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
