use std::sync::Arc;

/// A provider-managed collection of records under one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: Arc<str>,
    pub name: Arc<str>,
}

impl Zone {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: Arc::from(id),
            name: Arc::from(name),
        }
    }
}
