//! Visit-order recording.

use std::fmt;

use crate::domain::node::{Committee, Department, Faculty, NodeKind, University};
use crate::domain::visitor::Visitor;

/// One visited node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visited {
    pub kind: NodeKind,
    pub name: String,
    pub depth: usize,
}

impl fmt::Display for Visited {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.depth, self.kind, self.name)
    }
}

/// Records every node in the order the traversal reaches it.
#[derive(Debug, Default, Clone)]
pub struct CollectVisitor {
    visited: Vec<Visited>,
}

impl CollectVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[Visited] {
        &self.visited
    }

    pub fn names(&self) -> Vec<&str> {
        self.visited.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn into_visited(self) -> Vec<Visited> {
        self.visited
    }

    fn record(&mut self, kind: NodeKind, name: &str, depth: usize) {
        self.visited.push(Visited {
            kind,
            name: name.to_string(),
            depth,
        });
    }
}

impl<'a> Visitor<'a> for CollectVisitor {
    fn visit_university(&mut self, university: &'a University, depth: usize) {
        self.record(NodeKind::University, university.name(), depth);
    }

    fn visit_faculty(&mut self, faculty: &'a Faculty, depth: usize) {
        self.record(NodeKind::Faculty, faculty.name(), depth);
    }

    fn visit_department(&mut self, department: &'a Department, depth: usize) {
        self.record(NodeKind::Department, department.name(), depth);
    }

    fn visit_committee(&mut self, committee: &'a Committee, depth: usize) {
        self.record(NodeKind::Committee, committee.name(), depth);
    }
}
