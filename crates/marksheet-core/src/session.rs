//! Interactive session: the menu loop and one handler per menu action.
//!
//! A [`Session`] owns the [`RecordStore`] for the lifetime of the run and
//! talks to the operator only through its [`Console`]. Every handler is a
//! single synchronous pass; records stored before the input runs out stay
//! stored.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::MarksheetConfig;
use crate::error::InputError;
use crate::input::Console;
use crate::menu::MenuAction;
use crate::model::{Course, Student};
use crate::render;
use crate::store::RecordStore;

const BANNER_WIDTH: usize = 50;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator chose Exit.
    Exited,
    /// The input ran out.
    InputClosed,
}

pub struct Session<R, W> {
    store: RecordStore,
    console: Console<R, W>,
    title: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: RecordStore, console: Console<R, W>, title: impl Into<String>) -> Self {
        Self {
            store,
            console,
            title: title.into(),
        }
    }

    /// Build a session with an empty store configured from `config`.
    pub fn from_config(config: &MarksheetConfig, input: R, output: W) -> Self {
        Self::new(
            RecordStore::with_range(config.mark_range()),
            Console::new(input, output),
            config.title.clone(),
        )
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Consume the session and hand back the output sink.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu loop until the operator exits or the input closes.
    pub fn run(&mut self) -> Result<SessionEnd, InputError> {
        info!("session started");
        let end = match self.menu_loop() {
            Ok(()) => SessionEnd::Exited,
            Err(InputError::Closed) => SessionEnd::InputClosed,
            Err(err) => return Err(err),
        };
        for mark in self.store.marks() {
            debug!(%mark, "final mark");
        }
        info!(
            ?end,
            students = self.store.students().len(),
            courses = self.store.courses().len(),
            "session finished"
        );
        Ok(end)
    }

    fn menu_loop(&mut self) -> Result<(), InputError> {
        loop {
            self.print_menu()?;
            let choice = self.console.read_line("Enter your choice: ")?;
            match choice.parse::<MenuAction>() {
                Ok(MenuAction::Exit) => {
                    self.console.say("\nExiting the program. Goodbye!")?;
                    return Ok(());
                }
                Ok(action) => self.dispatch(action)?,
                Err(_) => self.console.say("Invalid choice. Please try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), InputError> {
        let fat = "=".repeat(BANNER_WIDTH);
        self.console.say(&format!("\n{fat}"))?;
        self.console.say(&self.title)?;
        self.console.say(&fat)?;
        for action in MenuAction::ALL {
            self.console.say(&action.to_string())?;
        }
        self.console.say(&"-".repeat(BANNER_WIDTH))
    }

    /// Run the handler behind a menu entry. `Exit` is a no-op here.
    pub fn dispatch(&mut self, action: MenuAction) -> Result<(), InputError> {
        debug!(?action, "dispatching");
        match action {
            MenuAction::AddStudents => self.add_students(),
            MenuAction::AddCourses => self.add_courses(),
            MenuAction::RecordMarks => self.record_marks(),
            MenuAction::ListStudents => self.list_students(),
            MenuAction::ListCourses => self.list_courses(),
            MenuAction::ShowCourseMarks => self.show_course_marks(),
            MenuAction::Exit => Ok(()),
        }
    }

    /// Read a batch of students. Duplicate IDs are skipped, not re-prompted.
    pub fn add_students(&mut self) -> Result<(), InputError> {
        let count = self
            .console
            .read_int("Enter the number of students in the class: ")?;
        let mut added = 0usize;

        for i in 1..=count {
            self.console.say(&format!("\n--- Student {i} ---"))?;
            let id = self.console.read_line("Enter student ID: ")?;

            if self.store.find_student(&id).is_some() {
                warn!(id = %id, "duplicate student ID skipped");
                self.console
                    .say("Student ID already exists. Skipping this student.")?;
                continue;
            }

            let name = self.console.read_line("Enter student full name: ")?;
            let dob = self
                .console
                .read_line("Enter student DoB (e.g., DD/MM/YYYY): ")?;

            match self.store.add_student(Student::new(id, name, dob)) {
                Ok(()) => added += 1,
                Err(err) => warn!(%err, "student not stored"),
            }
        }

        self.console
            .say(&format!("\nSuccessfully added {added} student(s)."))
    }

    /// Read a batch of courses. Duplicate IDs are skipped, not re-prompted.
    pub fn add_courses(&mut self) -> Result<(), InputError> {
        let count = self.console.read_int("Enter the number of courses: ")?;
        let mut added = 0usize;

        for i in 1..=count {
            self.console.say(&format!("\n--- Course {i} ---"))?;
            let id = self.console.read_line("Enter course ID: ")?;

            if self.store.find_course(&id).is_some() {
                warn!(id = %id, "duplicate course ID skipped");
                self.console
                    .say("Course ID already exists. Skipping this course.")?;
                continue;
            }

            let name = self.console.read_line("Enter course name: ")?;

            match self.store.add_course(Course::new(id, name)) {
                Ok(()) => added += 1,
                Err(err) => warn!(%err, "course not stored"),
            }
        }

        self.console
            .say(&format!("\nSuccessfully added {added} course(s)."))
    }

    /// Ask for one course, then one mark per student, overwriting old marks.
    pub fn record_marks(&mut self) -> Result<(), InputError> {
        if self.store.courses().is_empty() {
            return self
                .console
                .say("No courses have been added yet. Please add a course first.");
        }
        if self.store.students().is_empty() {
            return self
                .console
                .say("No students have been added yet. Please add students first.");
        }

        let Some(course) = self.select_course("\nSelect a Course ID to input marks: ")? else {
            return Ok(());
        };

        self.console
            .say(&format!("\n--- Input Marks for {} ---", course.name()))?;

        let range = self.store.mark_range();
        let roster: Vec<(String, String)> = self
            .store
            .students()
            .iter()
            .map(|s| (s.id().to_string(), s.name().to_string()))
            .collect();

        for (student_id, name) in roster {
            let prompt = format!(
                "Enter mark for {name} (ID: {student_id}) in {} [{range}]: ",
                course.name()
            );
            let value = self.console.read_mark(&prompt, range)?;
            if let Err(err) = self.store.record_mark(&student_id, course.id(), value) {
                warn!(%err, "mark not stored");
            }
        }

        self.console
            .say("\nMarks successfully recorded for the selected course.")
    }

    pub fn list_students(&mut self) -> Result<(), InputError> {
        if self.store.students().is_empty() {
            return self.console.say("No students to list.");
        }
        let table = render::student_table(self.store.students());
        self.console.say(&table)
    }

    pub fn list_courses(&mut self) -> Result<(), InputError> {
        if self.store.courses().is_empty() {
            return self.console.say("No courses to list.");
        }
        let table = render::course_table(self.store.courses());
        self.console.say(&table)
    }

    /// Print every student's mark for one course, `N/A` where none exists.
    pub fn show_course_marks(&mut self) -> Result<(), InputError> {
        if self.store.courses().is_empty() || self.store.students().is_empty() {
            return self
                .console
                .say("Must have courses and students to show marks.");
        }

        let Some(course) =
            self.select_course("\nEnter the Course ID to display student marks: ")?
        else {
            return Ok(());
        };

        let table = render::course_marks_table(&self.store, &course);
        self.console.say(&table)
    }

    /// List courses, ask for an ID, and resolve it.
    fn select_course(&mut self, prompt: &str) -> Result<Option<Course>, InputError> {
        self.list_courses()?;
        let id = self.console.read_line(prompt)?;
        match self.store.find_course(&id) {
            Some(course) => Ok(Some(course.clone())),
            None => {
                warn!(id = %id, "course not found");
                self.console.say("Course not found.")?;
                Ok(None)
            }
        }
    }
}
