//! Box-drawing rendering of a chart via `termtree`.

use termtree::Tree;
use tracing::instrument;

use crate::domain::{Committee, Department, Faculty, OrgNode, University, Visitor};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

/// Assembles a `Tree` from the visit order of [`crate::domain::traverse`].
///
/// Open nodes sit on a stack with their depth. A node at depth `d` closes
/// every open node at depth `d` or deeper, attaching each to the one below it.
#[derive(Default)]
struct TreeVisitor {
    open: Vec<(usize, Tree<String>)>,
}

impl TreeVisitor {
    fn enter(&mut self, depth: usize, name: &str) {
        self.close_to(depth);
        self.open.push((depth, Tree::new(name.to_string())));
    }

    fn close_to(&mut self, depth: usize) {
        while self.open.len() > 1 && self.open.last().is_some_and(|(d, _)| *d >= depth) {
            if let Some((_, child)) = self.open.pop() {
                if let Some((_, parent)) = self.open.last_mut() {
                    parent.push(child);
                }
            }
        }
    }

    fn finish(mut self) -> Option<Tree<String>> {
        self.close_to(1);
        self.open.pop().map(|(_, root)| root)
    }
}

impl<'a> Visitor<'a> for TreeVisitor {
    fn visit_university(&mut self, university: &'a University, depth: usize) {
        self.enter(depth, university.name());
    }

    fn visit_faculty(&mut self, faculty: &'a Faculty, depth: usize) {
        self.enter(depth, faculty.name());
    }

    fn visit_department(&mut self, department: &'a Department, depth: usize) {
        self.enter(depth, department.name());
    }

    fn visit_committee(&mut self, committee: &'a Committee, depth: usize) {
        self.enter(depth, committee.name());
    }
}

impl TreeNodeConvert for OrgNode<'_> {
    #[instrument(level = "trace", skip(self), fields(node = %self.name()))]
    fn to_tree_string(&self) -> Tree<String> {
        let mut visitor = TreeVisitor::default();
        self.accept(&mut visitor);
        visitor
            .finish()
            .unwrap_or_else(|| Tree::new(self.name().to_string()))
    }
}

impl TreeNodeConvert for University {
    fn to_tree_string(&self) -> Tree<String> {
        OrgNode::University(self).to_tree_string()
    }
}
