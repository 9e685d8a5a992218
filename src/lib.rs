//! Organizational charts with visitor-based traversal.
//!
//! A chart is a university owning faculties, departments and (nested)
//! committees. Behavior is added through [`domain::Visitor`]s; the single
//! [`domain::traverse`] driver walks the tree depth-first, pre-order.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;
