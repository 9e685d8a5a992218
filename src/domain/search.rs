//! Committee search by exact name.

use tracing::debug;

use crate::domain::node::Committee;
use crate::domain::visitor::Visitor;

/// Finds a committee whose name equals the query.
///
/// The walk is never cut short: every match overwrites the previous one, so
/// when several committees share a name the one visited last in pre-order
/// wins. Callers relying on "first match" semantics must not use this
/// visitor. [`SearchVisitor::matches`] tells how many candidates were seen.
#[derive(Debug, Clone)]
pub struct SearchVisitor<'a> {
    query: String,
    result: Option<&'a Committee>,
    matches: usize,
}

impl<'a> SearchVisitor<'a> {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            result: None,
            matches: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matched committee, `None` if no committee carries the queried name.
    pub fn result(&self) -> Option<&'a Committee> {
        self.result
    }

    pub fn matches(&self) -> usize {
        self.matches
    }
}

impl<'a> Visitor<'a> for SearchVisitor<'a> {
    fn visit_committee(&mut self, committee: &'a Committee, depth: usize) {
        if committee.name() == self.query {
            debug!(depth, name = committee.name(), "committee matched");
            self.result = Some(committee);
            self.matches += 1;
        }
    }
}
