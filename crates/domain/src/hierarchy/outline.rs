use std::collections::HashSet;

use super::{RelationshipMap, RootLayout};
use crate::DnsName;

pub const DOCUMENT_TITLE: &str = "# DNS Record Hierarchy";

const INDENT: &str = "  ";

/// Renders the forest as Markdown bullet lines, two spaces per level.
///
/// One visited set spans the whole pass: a name reachable from several
/// roots is emitted once, under whichever root comes first. Pure cycles
/// have no root at all; they are emitted last, each entered at its
/// smallest member.
pub fn render(layout: &RootLayout, relationships: &RelationshipMap) -> Vec<String> {
    let mut walker = OutlineWalker {
        relationships,
        visited: HashSet::new(),
        lines: Vec::new(),
    };

    for root in &layout.roots {
        if layout.is_synthetic(root.as_str()) {
            walker.visited.insert(root.clone());
            walker.emit(root, 0);
            for domain in layout.grouped_under(root.as_str()) {
                walker.walk(domain, 1);
            }
        } else {
            walker.walk(root, 0);
        }
    }

    for name in relationships.child_names() {
        if !walker.visited.contains(name) && walker.on_cycle(name) {
            walker.walk(name, 0);
        }
    }

    walker.lines
}

struct OutlineWalker<'a> {
    relationships: &'a RelationshipMap,
    visited: HashSet<DnsName>,
    lines: Vec<String>,
}

impl<'a> OutlineWalker<'a> {
    /// Pre-order depth-first walk with an explicit stack.
    fn walk(&mut self, start: &DnsName, depth: usize) {
        let mut stack: Vec<(&'a DnsName, usize)> = Vec::new();

        if !self.visit(start, depth) {
            return;
        }
        self.push_children(&mut stack, start, depth + 1);

        while let Some((name, depth)) = stack.pop() {
            if self.visit(name, depth) {
                self.push_children(&mut stack, name, depth + 1);
            }
        }
    }

    fn visit(&mut self, name: &DnsName, depth: usize) -> bool {
        if !self.visited.insert(name.clone()) {
            return false;
        }
        self.emit(name, depth);
        true
    }

    fn push_children(
        &self,
        stack: &mut Vec<(&'a DnsName, usize)>,
        parent: &DnsName,
        depth: usize,
    ) {
        // Reversed so the smallest sibling is popped first.
        let children: Vec<&'a DnsName> = self.relationships.children(parent.as_str()).collect();
        stack.extend(children.into_iter().rev().map(|child| (child, depth)));
    }

    fn on_cycle(&self, start: &DnsName) -> bool {
        let mut seen: HashSet<&DnsName> = HashSet::new();
        let mut stack: Vec<&DnsName> = self.relationships.children(start.as_str()).collect();

        while let Some(name) = stack.pop() {
            if name == start {
                return true;
            }
            if seen.insert(name) {
                stack.extend(self.relationships.children(name.as_str()));
            }
        }
        false
    }

    fn emit(&mut self, name: &DnsName, depth: usize) {
        self.lines.push(format!("{}- {}", INDENT.repeat(depth), name));
    }
}

/// Title, blank line, then the outline; no trailing newline.
pub fn render_document(lines: &[String]) -> String {
    let mut document = String::from(DOCUMENT_TITLE);
    document.push('\n');
    for line in lines {
        document.push('\n');
        document.push_str(line);
    }
    document
}
