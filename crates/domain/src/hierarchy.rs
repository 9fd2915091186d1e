//! Record graph reconstruction.
//!
//! Records flow one way: [`resolve`] infers parent → child edges from record
//! content, [`find_roots`] and [`reroot`] pick the top-level nodes, and
//! [`render`] walks the resulting forest into an indented outline.

pub mod outline;
pub mod relationships;
pub mod roots;

pub use outline::{render, render_document, DOCUMENT_TITLE};
pub use relationships::{resolve, NameIndex, RelationshipMap};
pub use roots::{find_roots, reroot, RootLayout, RootSet};

use crate::DnsRecord;

/// The fully built graph for one record set.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    pub relationships: RelationshipMap,
    pub initial_roots: RootSet,
    pub layout: RootLayout,
}

impl Hierarchy {
    pub fn build(records: &[DnsRecord]) -> Self {
        let (relationships, index) = resolve(records);
        let initial_roots = find_roots(&relationships, &index);
        let layout = reroot(records, &initial_roots);

        Self {
            relationships,
            initial_roots,
            layout,
        }
    }

    pub fn root_count(&self) -> usize {
        self.layout.roots.len()
    }

    pub fn edge_count(&self) -> usize {
        self.relationships.edge_count()
    }

    pub fn render_lines(&self) -> Vec<String> {
        render(&self.layout, &self.relationships)
    }

    pub fn render_document(&self) -> String {
        render_document(&self.render_lines())
    }
}
