//! Identifier lookup over insertion-ordered record slices.

use crate::model::{Course, Student};

/// Anything keyed by a string identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Student {
    fn id(&self) -> &str {
        Student::id(self)
    }
}

impl Identified for Course {
    fn id(&self) -> &str {
        Course::id(self)
    }
}

/// Return the first record whose identifier equals `id`.
///
/// A linear scan: collections hold tens of records, and the first match in
/// insertion order wins.
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_matching_record() {
        let courses = vec![Course::new("C1", "Math"), Course::new("C2", "Physics")];
        let found = find_by_id(&courses, "C2").unwrap();
        assert_eq!(found.name(), "Physics");
    }

    #[test]
    fn missing_id_is_none() {
        let students = vec![Student::new("S1", "Ann", "01/01/2000")];
        assert!(find_by_id(&students, "S9").is_none());
        assert!(find_by_id::<Student>(&[], "S1").is_none());
    }

    #[test]
    fn match_is_exact() {
        let students = vec![Student::new("S1", "Ann", "01/01/2000")];
        assert!(find_by_id(&students, "s1").is_none());
        assert!(find_by_id(&students, "S1 ").is_none());
    }
}
