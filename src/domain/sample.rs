//! Built-in demo chart.

use crate::domain::node::{Committee, Department, Faculty, University};

/// McGill with two faculties, three departments and five committees.
///
/// ```text
/// McGill
///    Science
///       Computer Science
///          C: MSc
///             C: Web
///       Physics
///       C: Academic
///       C: Scholarship
///    Arts
///       History and Classical Studies
///       C: Students
/// ```
pub fn mcgill() -> University {
    let mut msc = Committee::new("MSc");
    msc.add_committee(Committee::new("Web"));

    let mut cs = Department::new("Computer Science");
    cs.add_committee(msc);

    let mut science = Faculty::new("Science");
    science.add_department(cs);
    science.add_department(Department::new("Physics"));
    science.add_committee(Committee::new("Academic"));
    science.add_committee(Committee::new("Scholarship"));

    let mut arts = Faculty::new("Arts");
    arts.add_department(Department::new("History and Classical Studies"));
    arts.add_committee(Committee::new("Students"));

    let mut mcgill = University::new("McGill");
    mcgill.add_faculty(science);
    mcgill.add_faculty(arts);
    mcgill
}
