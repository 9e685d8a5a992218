//! Domain layer: chart model, visitors and traversal
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod collect;
pub mod definition;
pub mod error;
pub mod node;
pub mod print;
pub mod sample;
pub mod search;
pub mod visitor;

pub use builder::{ChartBuilder, DEFAULT_MAX_DEPTH};
pub use collect::{CollectVisitor, Visited};
pub use definition::{ChartDef, CommitteeDef, DepartmentDef, FacultyDef};
pub use error::DomainError;
pub use node::{Committee, Department, Faculty, NodeKind, OrgNode, University};
pub use print::{PrintStyle, PrintVisitor};
pub use search::SearchVisitor;
pub use visitor::{traverse, DefaultVisitor, Visitor};
