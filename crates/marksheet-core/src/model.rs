//! Core data model types for marksheet.
//!
//! Students and courses are immutable once built: identifiers and names are
//! only reachable through read-only accessors.

use std::fmt;

/// A student enrolled in the class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: String,
    name: String,
    date_of_birth: String,
}

impl Student {
    /// Create a student. The date of birth is kept verbatim.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// Unique student identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date of birth in whatever format the operator typed.
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }
}

/// A course marks can be recorded for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: String,
    name: String,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Unique course identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Course name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One recorded mark for a (student, course) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub student_id: String,
    pub course_id: String,
    pub value: f64,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student {} in course {}: {:.2}",
            self.student_id, self.course_id, self.value
        )
    }
}

/// Inclusive bounds a mark must fall within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkRange {
    pub min: f64,
    pub max: f64,
}

impl MarkRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `true` if `value` is finite and inside the bounds.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(&value)
    }
}

impl Default for MarkRange {
    fn default() -> Self {
        Self::new(0.0, 20.0)
    }
}

impl fmt::Display for MarkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// A listable record, tagged by kind.
#[derive(Debug, Clone, Copy)]
pub enum Record<'a> {
    Student(&'a Student),
    Course(&'a Course),
}

impl Record<'_> {
    /// One-line summary, e.g. `S1 - Ann - 01/01/2000` or `C1 - Math`.
    pub fn summary(&self) -> String {
        match self {
            Record::Student(s) => format!("{} - {} - {}", s.id, s.name, s.date_of_birth),
            Record::Course(c) => format!("{} - {}", c.id, c.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_summaries() {
        let student = Student::new("S1", "Ann", "01/01/2000");
        let course = Course::new("C1", "Math");
        assert_eq!(Record::Student(&student).summary(), "S1 - Ann - 01/01/2000");
        assert_eq!(Record::Course(&course).summary(), "C1 - Math");
    }

    #[test]
    fn mark_display() {
        let mark = Mark {
            student_id: "S1".into(),
            course_id: "C1".into(),
            value: 15.0,
        };
        assert_eq!(mark.to_string(), "Student S1 in course C1: 15.00");
    }

    #[test]
    fn mark_range_bounds() {
        let range = MarkRange::default();
        assert!(range.contains(0.0));
        assert!(range.contains(20.0));
        assert!(range.contains(12.75));
        assert!(!range.contains(-0.01));
        assert!(!range.contains(20.01));
        assert!(!range.contains(f64::NAN));
        assert!(!range.contains(f64::INFINITY));
        assert_eq!(range.to_string(), "0-20");
    }

    #[test]
    fn accessors_expose_fields() {
        let student = Student::new("S2", "Bob Lee", "1999-12-31");
        assert_eq!(student.id(), "S2");
        assert_eq!(student.name(), "Bob Lee");
        assert_eq!(student.date_of_birth(), "1999-12-31");
    }
}
