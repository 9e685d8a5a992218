//! Chart builder: turns a [`ChartDef`] into an owned node tree.

use tracing::{debug, instrument};

use crate::domain::definition::{ChartDef, CommitteeDef, DepartmentDef, FacultyDef};
use crate::domain::error::DomainError;
use crate::domain::node::{Committee, Department, Faculty, NodeKind, University};

/// Result type for chart construction.
pub type BuildResult<T> = Result<T, DomainError>;

/// Default limit for committee nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Validates a chart definition and constructs its tree.
///
/// Names must be non-blank. Committee nesting is limited to `max_depth`
/// levels, counting a top-level committee as level 1; a limit of 0 disables
/// the check.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    max_depth: usize,
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl ChartBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    #[instrument(level = "debug", skip(self, def), fields(chart = %def.name))]
    pub fn build(&self, def: &ChartDef) -> BuildResult<University> {
        let mut university = University::new(validated_name(&def.name, NodeKind::University)?);
        for faculty in &def.faculties {
            university.add_faculty(self.build_faculty(faculty)?);
        }
        debug!(faculties = university.faculties().len(), "chart built");
        Ok(university)
    }

    fn build_faculty(&self, def: &FacultyDef) -> BuildResult<Faculty> {
        let mut faculty = Faculty::new(validated_name(&def.name, NodeKind::Faculty)?);
        for department in &def.departments {
            faculty.add_department(self.build_department(department)?);
        }
        for committee in &def.committees {
            faculty.add_committee(self.build_committee(committee, 1)?);
        }
        Ok(faculty)
    }

    fn build_department(&self, def: &DepartmentDef) -> BuildResult<Department> {
        let mut department = Department::new(validated_name(&def.name, NodeKind::Department)?);
        for committee in &def.committees {
            department.add_committee(self.build_committee(committee, 1)?);
        }
        Ok(department)
    }

    fn build_committee(&self, def: &CommitteeDef, level: usize) -> BuildResult<Committee> {
        if self.max_depth > 0 && level > self.max_depth {
            return Err(DomainError::DepthExceeded {
                name: def.name.clone(),
                limit: self.max_depth,
            });
        }
        let mut committee = Committee::new(validated_name(&def.name, NodeKind::Committee)?);
        for sub in &def.committees {
            committee.add_committee(self.build_committee(sub, level + 1)?);
        }
        Ok(committee)
    }
}

fn validated_name(name: &str, kind: NodeKind) -> BuildResult<&str> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyName { kind });
    }
    Ok(name)
}
