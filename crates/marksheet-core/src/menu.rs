//! Top-level menu choices.

use std::fmt;
use std::str::FromStr;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    AddStudents,
    AddCourses,
    RecordMarks,
    ListStudents,
    ListCourses,
    ShowCourseMarks,
    Exit,
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [MenuAction; 7] = [
        MenuAction::AddStudents,
        MenuAction::AddCourses,
        MenuAction::RecordMarks,
        MenuAction::ListStudents,
        MenuAction::ListCourses,
        MenuAction::ShowCourseMarks,
        MenuAction::Exit,
    ];

    /// The key the operator types to select this entry.
    pub fn key(&self) -> char {
        match self {
            MenuAction::AddStudents => '1',
            MenuAction::AddCourses => '2',
            MenuAction::RecordMarks => '3',
            MenuAction::ListStudents => '4',
            MenuAction::ListCourses => '5',
            MenuAction::ShowCourseMarks => '6',
            MenuAction::Exit => '0',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuAction::AddStudents => "Input students",
            MenuAction::AddCourses => "Input courses",
            MenuAction::RecordMarks => "Input marks for a course",
            MenuAction::ListStudents => "List students",
            MenuAction::ListCourses => "List courses",
            MenuAction::ShowCourseMarks => "Show student marks for a given course",
            MenuAction::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.key(), self.description())
    }
}

impl FromStr for MenuAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => MenuAction::ALL
                .into_iter()
                .find(|action| action.key() == key)
                .ok_or_else(|| format!("unknown menu choice: {s}")),
            _ => Err(format!("unknown menu choice: {s}")),
        }
    }
}
