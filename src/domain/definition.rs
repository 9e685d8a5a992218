//! Serializable chart definition.
//!
//! ```toml
//! name = "McGill"
//!
//! [[faculties]]
//! name = "Science"
//!
//! [[faculties.departments]]
//! name = "Computer Science"
//! committees = [{ name = "MSc", committees = [{ name = "Web" }] }]
//!
//! [[faculties.committees]]
//! name = "Academic"
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::node::{Committee, Department, Faculty, University};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faculties: Vec<FacultyDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacultyDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<DepartmentDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub committees: Vec<CommitteeDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub committees: Vec<CommitteeDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitteeDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub committees: Vec<CommitteeDef>,
}

impl ChartDef {
    /// Parse a TOML chart definition.
    pub fn from_toml(content: &str) -> Result<Self, DomainError> {
        toml::from_str(content).map_err(|e| DomainError::InvalidDefinition {
            message: e.to_string(),
        })
    }

    pub fn to_toml(&self) -> Result<String, DomainError> {
        toml::to_string_pretty(self).map_err(|e| DomainError::InvalidDefinition {
            message: e.to_string(),
        })
    }
}

impl From<&University> for ChartDef {
    fn from(university: &University) -> Self {
        Self {
            name: university.name().to_string(),
            faculties: university.faculties().iter().map(FacultyDef::from).collect(),
        }
    }
}

impl From<&Faculty> for FacultyDef {
    fn from(faculty: &Faculty) -> Self {
        Self {
            name: faculty.name().to_string(),
            departments: faculty
                .departments()
                .iter()
                .map(DepartmentDef::from)
                .collect(),
            committees: faculty.committees().iter().map(CommitteeDef::from).collect(),
        }
    }
}

impl From<&Department> for DepartmentDef {
    fn from(department: &Department) -> Self {
        Self {
            name: department.name().to_string(),
            committees: department
                .committees()
                .iter()
                .map(CommitteeDef::from)
                .collect(),
        }
    }
}

impl From<&Committee> for CommitteeDef {
    fn from(committee: &Committee) -> Self {
        Self {
            name: committee.name().to_string(),
            committees: committee.committees().iter().map(CommitteeDef::from).collect(),
        }
    }
}
