//! Organizational chart nodes.
//!
//! A chart is a strict containment tree: a university owns faculties, a
//! faculty owns departments and committees, a department owns committees and
//! committees nest recursively. Children are moved into their parent, so a
//! node can never become its own ancestor.

use std::fmt;

use crate::domain::visitor::{traverse, Visitor};

/// Kind of a chart node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    University,
    Faculty,
    Department,
    Committee,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::University => "university",
            NodeKind::Faculty => "faculty",
            NodeKind::Department => "department",
            NodeKind::Committee => "committee",
        };
        f.write_str(label)
    }
}

/// Root of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct University {
    name: String,
    faculties: Vec<Faculty>,
}

impl University {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faculties: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_faculty(&mut self, faculty: Faculty) {
        self.faculties.push(faculty);
    }

    /// Faculties in insertion order.
    pub fn faculties(&self) -> &[Faculty] {
        &self.faculties
    }

    pub fn accept<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) {
        traverse(OrgNode::University(self), visitor);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    name: String,
    departments: Vec<Department>,
    committees: Vec<Committee>,
}

impl Faculty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            departments: Vec::new(),
            committees: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_department(&mut self, department: Department) {
        self.departments.push(department);
    }

    pub fn add_committee(&mut self, committee: Committee) {
        self.committees.push(committee);
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Committees owned directly by the faculty, not by its departments.
    pub fn committees(&self) -> &[Committee] {
        &self.committees
    }

    pub fn accept<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) {
        traverse(OrgNode::Faculty(self), visitor);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    name: String,
    committees: Vec<Committee>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            committees: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_committee(&mut self, committee: Committee) {
        self.committees.push(committee);
    }

    pub fn committees(&self) -> &[Committee] {
        &self.committees
    }

    pub fn accept<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) {
        traverse(OrgNode::Department(self), visitor);
    }
}

/// Committee with an arbitrary number of nested sub-committees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committee {
    name: String,
    committees: Vec<Committee>,
}

impl Committee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            committees: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_committee(&mut self, committee: Committee) {
        self.committees.push(committee);
    }

    /// Sub-committees in insertion order.
    pub fn committees(&self) -> &[Committee] {
        &self.committees
    }

    pub fn accept<'a, V: Visitor<'a> + ?Sized>(&'a self, visitor: &mut V) {
        traverse(OrgNode::Committee(self), visitor);
    }
}

/// Borrowed view of any chart node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgNode<'a> {
    University(&'a University),
    Faculty(&'a Faculty),
    Department(&'a Department),
    Committee(&'a Committee),
}

impl<'a> OrgNode<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            OrgNode::University(u) => u.name(),
            OrgNode::Faculty(f) => f.name(),
            OrgNode::Department(d) => d.name(),
            OrgNode::Committee(c) => c.name(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            OrgNode::University(_) => NodeKind::University,
            OrgNode::Faculty(_) => NodeKind::Faculty,
            OrgNode::Department(_) => NodeKind::Department,
            OrgNode::Committee(_) => NodeKind::Committee,
        }
    }

    pub fn accept<V: Visitor<'a> + ?Sized>(self, visitor: &mut V) {
        traverse(self, visitor);
    }
}

impl fmt::Display for OrgNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
