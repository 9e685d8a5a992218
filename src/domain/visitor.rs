//! Visitor protocol and the traversal driver.
//!
//! Recursion lives in [`traverse`] alone. Visitors only react to the node
//! they are handed, so overriding a hook can never cut off the descendants
//! of that node.

use tracing::{instrument, trace};

use crate::domain::node::{Committee, Department, Faculty, OrgNode, University};

/// Operation dispatched per node kind.
///
/// `depth` is the distance from the node the traversal started on (0).
/// All hooks default to no-ops.
pub trait Visitor<'a> {
    fn visit_university(&mut self, _university: &'a University, _depth: usize) {}

    fn visit_faculty(&mut self, _faculty: &'a Faculty, _depth: usize) {}

    fn visit_department(&mut self, _department: &'a Department, _depth: usize) {}

    fn visit_committee(&mut self, _committee: &'a Committee, _depth: usize) {}
}

/// Visitor that only walks the chart.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultVisitor;

impl<'a> Visitor<'a> for DefaultVisitor {}

/// Walk `node` and its descendants depth-first, pre-order.
///
/// Children are visited in insertion order. A faculty's departments are
/// walked in their entirety before the faculty's own committees.
#[instrument(level = "trace", skip(node, visitor), fields(node = %node.name(), kind = %node.kind()))]
pub fn traverse<'a, V: Visitor<'a> + ?Sized>(node: OrgNode<'a>, visitor: &mut V) {
    walk(node, visitor, 0);
}

fn walk<'a, V: Visitor<'a> + ?Sized>(node: OrgNode<'a>, visitor: &mut V, depth: usize) {
    trace!(depth, kind = %node.kind(), name = node.name(), "visit");
    match node {
        OrgNode::University(university) => {
            visitor.visit_university(university, depth);
            for faculty in university.faculties() {
                walk(OrgNode::Faculty(faculty), visitor, depth + 1);
            }
        }
        OrgNode::Faculty(faculty) => {
            visitor.visit_faculty(faculty, depth);
            for department in faculty.departments() {
                walk(OrgNode::Department(department), visitor, depth + 1);
            }
            for committee in faculty.committees() {
                walk(OrgNode::Committee(committee), visitor, depth + 1);
            }
        }
        OrgNode::Department(department) => {
            visitor.visit_department(department, depth);
            for committee in department.committees() {
                walk(OrgNode::Committee(committee), visitor, depth + 1);
            }
        }
        OrgNode::Committee(committee) => {
            visitor.visit_committee(committee, depth);
            for sub in committee.committees() {
                walk(OrgNode::Committee(sub), visitor, depth + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        hits: usize,
        max_depth: usize,
    }

    impl<'a> Visitor<'a> for Counter {
        fn visit_committee(&mut self, _committee: &'a Committee, depth: usize) {
            self.hits += 1;
            self.max_depth = self.max_depth.max(depth);
        }
    }

    #[test]
    fn test_overriding_hook_still_reaches_nested_committees() {
        let mut inner = Committee::new("inner");
        inner.add_committee(Committee::new("innermost"));
        let mut outer = Committee::new("outer");
        outer.add_committee(inner);

        let mut counter = Counter::default();
        outer.accept(&mut counter);

        assert_eq!(counter.hits, 3);
        assert_eq!(counter.max_depth, 2);
    }

    #[test]
    fn test_default_visitor_on_empty_university_terminates() {
        let university = University::new("Empty");
        university.accept(&mut DefaultVisitor);
    }
}
