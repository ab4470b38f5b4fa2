//! Fixed-width text tables for the listing commands.
//!
//! Every function returns the finished block without a trailing newline;
//! callers write it out as one line.

use crate::model::{Course, Student};
use crate::store::RecordStore;

const STUDENT_RULE: usize = 45;
const COURSE_RULE: usize = 40;
const MARKS_RULE: usize = 50;

/// Text shown in place of a mark that was never recorded.
pub const MISSING_MARK: &str = "N/A";

fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// A mark with two decimals, or `N/A` if absent.
pub fn format_mark(mark: Option<f64>) -> String {
    match mark {
        Some(value) => format!("{value:.2}"),
        None => MISSING_MARK.to_string(),
    }
}

/// The `## Student List` table.
pub fn student_table(students: &[Student]) -> String {
    let mut out = String::new();
    out.push_str("\n## Student List\n");
    out.push_str(&format!("{}\n", rule(STUDENT_RULE)));
    out.push_str(&format!("{:<10} {:<25} {:<10}\n", "ID", "Full Name", "DoB"));
    out.push_str(&format!("{}\n", rule(STUDENT_RULE)));
    for s in students {
        out.push_str(&format!(
            "{:<10} {:<25} {:<10}\n",
            s.id(),
            s.name(),
            s.date_of_birth()
        ));
    }
    out.push_str(&rule(STUDENT_RULE));
    out
}

/// The `## Course List` table.
pub fn course_table(courses: &[Course]) -> String {
    let mut out = String::new();
    out.push_str("\n## Course List\n");
    out.push_str(&format!("{}\n", rule(COURSE_RULE)));
    out.push_str(&format!("{:<10} {:<30}\n", "ID", "Course Name"));
    out.push_str(&format!("{}\n", rule(COURSE_RULE)));
    for c in courses {
        out.push_str(&format!("{:<10} {:<30}\n", c.id(), c.name()));
    }
    out.push_str(&rule(COURSE_RULE));
    out
}

/// Every student's mark in `course`, in student insertion order.
pub fn course_marks_table(store: &RecordStore, course: &Course) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n## Marks for Course: {}\n", course.name()));
    out.push_str(&format!("{}\n", rule(MARKS_RULE)));
    out.push_str(&format!(
        "{:<15} {:<20} {:<10}\n",
        "Student ID", "Student Name", "Mark"
    ));
    out.push_str(&format!("{}\n", rule(MARKS_RULE)));
    for s in store.students() {
        let mark = format_mark(store.mark(s.id(), course.id()));
        out.push_str(&format!("{:<15} {:<20} {:<10}\n", s.id(), s.name(), mark));
    }
    out.push_str(&rule(MARKS_RULE));
    out
}
