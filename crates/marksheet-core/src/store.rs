//! In-memory record store: students, courses, and marks.

use std::collections::HashMap;

use tracing::debug;

use crate::error::StoreError;
use crate::lookup::find_by_id;
use crate::model::{Course, Mark, MarkRange, Record, Student};

/// Everything entered during one run of the program.
///
/// Students and courses keep insertion order. Marks are keyed by student
/// identifier, then course identifier.
#[derive(Debug, Default)]
pub struct RecordStore {
    students: Vec<Student>,
    courses: Vec<Course>,
    marks: HashMap<String, HashMap<String, f64>>,
    range: MarkRange,
}

impl RecordStore {
    /// Create an empty store accepting marks in the default 0–20 range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store accepting marks in `range`.
    pub fn with_range(range: MarkRange) -> Self {
        Self {
            range,
            ..Self::default()
        }
    }

    pub fn mark_range(&self) -> MarkRange {
        self.range
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        find_by_id(&self.students, id)
    }

    pub fn find_course(&self, id: &str) -> Option<&Course> {
        find_by_id(&self.courses, id)
    }

    /// Insert a student, refusing a duplicate identifier.
    pub fn add_student(&mut self, student: Student) -> Result<(), StoreError> {
        if self.find_student(student.id()).is_some() {
            return Err(StoreError::DuplicateStudent(student.id().to_string()));
        }
        debug!(record = %Record::Student(&student).summary(), "student added");
        self.marks.entry(student.id().to_string()).or_default();
        self.students.push(student);
        Ok(())
    }

    /// Insert a course, refusing a duplicate identifier.
    pub fn add_course(&mut self, course: Course) -> Result<(), StoreError> {
        if self.find_course(course.id()).is_some() {
            return Err(StoreError::DuplicateCourse(course.id().to_string()));
        }
        debug!(record = %Record::Course(&course).summary(), "course added");
        self.courses.push(course);
        Ok(())
    }

    /// Record a mark, replacing any earlier mark for the same pair.
    ///
    /// Both identifiers must exist and the value must lie in the store's
    /// range; otherwise nothing is written.
    pub fn record_mark(
        &mut self,
        student_id: &str,
        course_id: &str,
        value: f64,
    ) -> Result<Option<f64>, StoreError> {
        if self.find_student(student_id).is_none() {
            return Err(StoreError::UnknownStudent(student_id.to_string()));
        }
        if self.find_course(course_id).is_none() {
            return Err(StoreError::UnknownCourse(course_id.to_string()));
        }
        if !self.range.contains(value) {
            return Err(StoreError::MarkOutOfRange {
                value,
                min: self.range.min,
                max: self.range.max,
            });
        }

        let previous = self
            .marks
            .entry(student_id.to_string())
            .or_default()
            .insert(course_id.to_string(), value);
        debug!(student_id, course_id, value, ?previous, "mark recorded");
        Ok(previous)
    }

    /// The mark for a pair, if one was recorded.
    pub fn mark(&self, student_id: &str, course_id: &str) -> Option<f64> {
        self.marks
            .get(student_id)
            .and_then(|by_course| by_course.get(course_id))
            .copied()
    }

    /// All recorded marks, ordered by student then course insertion order.
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::new();
        for student in &self.students {
            for course in &self.courses {
                if let Some(value) = self.mark(student.id(), course.id()) {
                    out.push(Mark {
                        student_id: student.id().to_string(),
                        course_id: course.id().to_string(),
                        value,
                    });
                }
            }
        }
        out
    }
}
