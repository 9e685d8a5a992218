//! Indented text rendering of a chart.

use crate::domain::node::{Committee, Department, Faculty, University};
use crate::domain::visitor::Visitor;

pub const DEFAULT_INDENT: &str = "   ";
pub const DEFAULT_COMMITTEE_PREFIX: &str = "C: ";

/// Layout of the printed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintStyle {
    /// Repeated once per level of depth
    pub indent: String,
    /// Prepended to committee names
    pub committee_prefix: String,
}

impl Default for PrintStyle {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            committee_prefix: DEFAULT_COMMITTEE_PREFIX.to_string(),
        }
    }
}

/// Emits one line per node, indented by the node's depth.
#[derive(Debug, Default, Clone)]
pub struct PrintVisitor {
    style: PrintStyle,
    output: String,
}

impl PrintVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: PrintStyle) -> Self {
        Self {
            style,
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn line(&mut self, depth: usize, committee: bool, name: &str) {
        for _ in 0..depth {
            self.output.push_str(&self.style.indent);
        }
        let prefix = if committee {
            self.style.committee_prefix.as_str()
        } else {
            ""
        };
        self.output.push_str(prefix);
        self.output.push_str(name);
        self.output.push('\n');
    }
}

impl<'a> Visitor<'a> for PrintVisitor {
    fn visit_university(&mut self, university: &'a University, depth: usize) {
        self.line(depth, false, university.name());
    }

    fn visit_faculty(&mut self, faculty: &'a Faculty, depth: usize) {
        self.line(depth, false, faculty.name());
    }

    fn visit_department(&mut self, department: &'a Department, depth: usize) {
        self.line(depth, false, department.name());
    }

    fn visit_committee(&mut self, committee: &'a Committee, depth: usize) {
        self.line(depth, true, committee.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_nested_committees() {
        let mut department = Department::new("CS");
        let mut msc = Committee::new("MSc");
        msc.add_committee(Committee::new("Web"));
        department.add_committee(msc);

        let mut printer = PrintVisitor::new();
        department.accept(&mut printer);

        assert_eq!(printer.output(), "CS\n   C: MSc\n      C: Web\n");
    }

    #[test]
    fn test_print_with_custom_style() {
        let mut faculty = Faculty::new("Arts");
        faculty.add_committee(Committee::new("Students"));

        let mut printer = PrintVisitor::with_style(PrintStyle {
            indent: "--".into(),
            committee_prefix: "* ".into(),
        });
        faculty.accept(&mut printer);

        assert_eq!(printer.into_output(), "Arts\n--* Students\n");
    }
}
