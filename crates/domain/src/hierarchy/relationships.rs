use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{DnsName, DnsRecord};

/// Record name → record, last write wins on duplicate names.
#[derive(Debug, Default)]
pub struct NameIndex<'a> {
    records: HashMap<DnsName, &'a DnsRecord>,
}

impl<'a> NameIndex<'a> {
    pub fn build(records: &'a [DnsRecord]) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for record in records {
            index.insert(record.name.clone(), record);
        }
        Self { records: index }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&'a DnsRecord> {
        self.records.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &DnsName> {
        self.records.keys()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parent → children edges inferred from record content.
///
/// Children are kept in a sorted set, so inserting the same edge twice is a
/// no-op and iteration order is already lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipMap {
    children: BTreeMap<DnsName, BTreeSet<DnsName>>,
}

impl RelationshipMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the edge was not present yet.
    pub fn insert(&mut self, parent: DnsName, child: DnsName) -> bool {
        self.children.entry(parent).or_default().insert(child)
    }

    pub fn children(&self, parent: &str) -> impl Iterator<Item = &DnsName> {
        self.children.get(parent).into_iter().flatten()
    }

    pub fn contains_edge(&self, parent: &str, child: &str) -> bool {
        self.children
            .get(parent)
            .is_some_and(|c| c.contains(child))
    }

    /// Every name that has a parent, sorted.
    pub fn child_names(&self) -> BTreeSet<&DnsName> {
        self.children.values().flatten().collect()
    }

    pub fn edge_count(&self) -> usize {
        self.children.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Builds the name index and the relationship map for `records`.
///
/// An edge `target → record.name` is added only when the target is itself a
/// known record name; references leaving the fetched set are ignored.
pub fn resolve(records: &[DnsRecord]) -> (RelationshipMap, NameIndex<'_>) {
    let index = NameIndex::build(records);
    let mut relationships = RelationshipMap::new();

    for record in records {
        let Some(parent) = record.target() else {
            continue;
        };
        if index.contains(parent.as_str()) {
            relationships.insert(parent, record.name.clone());
        }
    }

    (relationships, index)
}
