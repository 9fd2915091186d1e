use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::{NameIndex, RelationshipMap};
use crate::{DnsName, DnsRecord};

pub type RootSet = BTreeSet<DnsName>;

/// Final top-level ordering after re-rooting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootLayout {
    /// Sorted, deduplicated top-level names.
    pub roots: Vec<DnsName>,

    /// Synthetic parent (IP or external target) → domains grouped under it.
    pub ip_parents: BTreeMap<DnsName, BTreeSet<DnsName>>,
}

impl RootLayout {
    pub fn is_synthetic(&self, root: &str) -> bool {
        self.ip_parents.contains_key(root)
    }

    pub fn grouped_under(&self, root: &str) -> impl Iterator<Item = &DnsName> {
        self.ip_parents.get(root).into_iter().flatten()
    }
}

/// Names with no incoming edge.
pub fn find_roots(relationships: &RelationshipMap, index: &NameIndex<'_>) -> RootSet {
    let children = relationships.child_names();

    index
        .names()
        .filter(|name| !children.contains(name))
        .cloned()
        .collect()
}

/// Moves root-level address and alias records under the value they point at.
///
/// Every record is considered, so a root with several A records is grouped
/// under each of its addresses.
pub fn reroot(records: &[DnsRecord], initial_roots: &RootSet) -> RootLayout {
    let mut ip_parents: BTreeMap<DnsName, BTreeSet<DnsName>> = BTreeMap::new();
    let mut moved: HashSet<&DnsName> = HashSet::new();

    for record in records {
        if !initial_roots.contains(&record.name) || !record.record_type.is_reroot_candidate() {
            continue;
        }
        let Some(target) = record.content_name() else {
            continue;
        };
        ip_parents
            .entry(target)
            .or_default()
            .insert(record.name.clone());
        moved.insert(&record.name);
    }

    let roots: BTreeSet<DnsName> = initial_roots
        .iter()
        .filter(|name| !moved.contains(name))
        .cloned()
        .chain(ip_parents.keys().cloned())
        .collect();

    RootLayout {
        roots: roots.into_iter().collect(),
        ip_parents,
    }
}
