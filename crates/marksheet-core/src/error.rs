//! Error types for the record store and the console reader.
//!
//! None of these are fatal to a session: the command handlers turn each
//! variant into an operator-facing message and carry on. Only
//! [`InputError::Closed`] ends the menu loop.

use thiserror::Error;

/// Errors raised by [`crate::store::RecordStore`] mutators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A student with this identifier is already stored.
    #[error("student ID already exists: {0}")]
    DuplicateStudent(String),

    /// A course with this identifier is already stored.
    #[error("course ID already exists: {0}")]
    DuplicateCourse(String),

    /// No student carries this identifier.
    #[error("student not found: {0}")]
    UnknownStudent(String),

    /// No course carries this identifier.
    #[error("course not found: {0}")]
    UnknownCourse(String),

    /// The mark is not a finite number inside the accepted range.
    #[error("mark {value} is outside {min}..={max}")]
    MarkOutOfRange { value: f64, min: f64, max: f64 },
}

/// Errors raised while talking to the operator.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input reached end of file before a value was supplied.
    #[error("input closed")]
    Closed,

    /// Reading the input or writing the prompt failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_messages_name_the_id() {
        assert_eq!(
            StoreError::DuplicateStudent("S1".into()).to_string(),
            "student ID already exists: S1"
        );
        assert_eq!(
            StoreError::DuplicateCourse("C1".into()).to_string(),
            "course ID already exists: C1"
        );
    }

    #[test]
    fn range_error_message() {
        let err = StoreError::MarkOutOfRange {
            value: 21.0,
            min: 0.0,
            max: 20.0,
        };
        assert_eq!(err.to_string(), "mark 21 is outside 0..=20");
    }
}
