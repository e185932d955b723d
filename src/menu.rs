/// Menu Controller Module
///
/// The top-level interactive loop: show the menu, dispatch to display or
/// edit, quit on request. Every recoverable problem in the edit sub-flow
/// prints a one-line message and drops back to the menu with the stored data
/// untouched.
///
/// The reader and writer are generic so tests can script whole sessions
/// against an in-memory store; the binary passes locked stdin/stdout.
use crate::fields::EditableField;
use crate::format;
use crate::store::StudentStore;
use std::io::{BufRead, Write};
use tracing::debug;

pub struct Menu<'a, R, W> {
    store: &'a StudentStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a StudentStore, input: R, output: W) -> Self {
        Menu {
            store,
            input,
            output,
        }
    }

    /// Runs the menu loop until the operator quits or input ends.
    pub fn run(&mut self) -> crate::core::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- Student Database Menu ---")?;
            writeln!(self.output, "1) Display all students")?;
            writeln!(self.output, "2) Edit a student record")?;
            writeln!(self.output, "3) Quit")?;
            let choice = match self.prompt("Choose an option (1-3): ")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "1" => self.display_students()?,
                "2" => self.edit_student()?,
                "3" => break,
                _ => writeln!(self.output, "Invalid choice. Please enter 1, 2, or 3.")?,
            }
        }
        Ok(())
    }

    /// Writes a prompt, flushes, and reads one trimmed line.
    /// Returns `None` on end of input, which the caller treats as Quit.
    fn prompt(&mut self, text: &str) -> crate::core::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn display_students(&mut self) -> crate::core::Result<()> {
        writeln!(self.output, "\nContents of Students table:\n")?;
        let students = self.store.all_students()?;
        write!(self.output, "{}", format::roster_table(&students))?;
        Ok(())
    }

    /// The edit sub-flow: pick a student, pick one of the nine editable
    /// fields, validate the new value, persist, and redisplay. Each failure
    /// point aborts the whole operation without touching the record.
    fn edit_student(&mut self) -> crate::core::Result<()> {
        let raw_id = match self.prompt("Enter the StudentID to edit: ")? {
            Some(raw_id) => raw_id,
            None => return Ok(()),
        };
        let student_id: i64 = match raw_id.parse() {
            Ok(id) => id,
            Err(_) => {
                writeln!(self.output, "StudentID must be a number.")?;
                return Ok(());
            }
        };

        let student = match self.store.student(student_id)? {
            Some(student) => student,
            None => {
                writeln!(self.output, "No student found with ID {}.", student_id)?;
                return Ok(());
            }
        };

        writeln!(self.output, "\nCurrent record:")?;
        write!(self.output, "{}", format::record_detail(&student))?;

        writeln!(self.output, "\nWhich field do you want to edit?")?;
        for (i, field) in EditableField::ALL.iter().enumerate() {
            writeln!(self.output, "{}) {}", i + 1, field.column())?;
        }
        writeln!(self.output, "0) Cancel")?;

        let pick = match self.prompt("Enter a number (0-9): ")? {
            Some(pick) => pick,
            None => return Ok(()),
        };
        if pick == "0" {
            writeln!(self.output, "Edit canceled.")?;
            return Ok(());
        }
        let field = match pick.parse::<usize>().ok().and_then(EditableField::from_index) {
            Some(field) => field,
            None => {
                writeln!(self.output, "Invalid selection.")?;
                return Ok(());
            }
        };

        let raw_value = match self.prompt(&format!("Enter new value for {}: ", field.column()))? {
            Some(raw_value) => raw_value,
            None => return Ok(()),
        };
        let value = match field.convert(&raw_value) {
            Ok(value) => value,
            Err(e) => {
                writeln!(self.output, "Invalid value: {}", e)?;
                return Ok(());
            }
        };

        self.store.update_field(student_id, field, &value)?;
        debug!("Edited {} for StudentID {}", field.column(), student_id);

        writeln!(self.output, "\nRecord updated successfully.")?;
        if let Some(updated) = self.store.student(student_id)? {
            writeln!(self.output, "Updated record:")?;
            write!(self.output, "{}", format::record_detail(&updated))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Seeds an in-memory store, feeds `input` to the menu loop, and returns
    /// the store plus everything the session wrote.
    fn run_session(input: &str) -> (StudentStore, String) {
        let store = StudentStore::open_in_memory().unwrap();
        store.init_schema().unwrap();
        store.seed().unwrap();

        let mut output = Vec::new();
        {
            let mut menu = Menu::new(&store, Cursor::new(input.to_string()), &mut output);
            menu.run().unwrap();
        }
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_quit_immediately() {
        let (_, output) = run_session("3\n");
        assert!(output.contains("--- Student Database Menu ---"));
        assert!(output.contains("1) Display all students"));
        assert!(output.contains("Choose an option (1-3): "));
    }

    #[test]
    fn test_end_of_input_terminates_loop() {
        let (_, output) = run_session("");
        assert!(output.contains("--- Student Database Menu ---"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let (_, output) = run_session("7\n3\n");
        assert!(output.contains("Invalid choice. Please enter 1, 2, or 3."));
    }

    #[test]
    fn test_display_lists_all_seeded_students() {
        let (_, output) = run_session("1\n3\n");
        assert!(output.contains("Contents of Students table:"));
        assert!(output.contains("Alex Johnson"));
        assert!(output.contains("Faith Brown"));
        assert!(output.contains(&"-".repeat(80)));
    }

    #[test]
    fn test_edit_menu_offers_nine_fields_and_cancel() {
        let (_, output) = run_session("2\n1\n0\n3\n");
        assert!(output.contains("1) FirstName"));
        assert!(output.contains("9) GradYear"));
        assert!(output.contains("0) Cancel"));
        // StudentID is never an edit target, and the list stops at 9
        assert!(!output.contains(") StudentID"));
        assert!(!output.contains("10)"));
    }

    #[test]
    fn test_edit_rejects_non_numeric_student_id() {
        let (_, output) = run_session("2\nabc\n3\n");
        assert!(output.contains("StudentID must be a number."));
    }

    #[test]
    fn test_edit_missing_student_reports_not_found() {
        let (store, output) = run_session("2\n999\n3\n");
        assert!(output.contains("No student found with ID 999."));
        assert_eq!(store.all_students().unwrap().len(), 10);
    }

    #[test]
    fn test_cancel_leaves_record_unchanged() {
        let (store, output) = run_session("2\n5\n0\n3\n");
        assert!(output.contains("Edit canceled."));

        let ethan = store.student(5).unwrap().unwrap();
        assert_eq!(ethan.first_name, "Ethan");
        assert_eq!(ethan.major, "Engineering");
        assert_eq!(ethan.gpa, 3.1);
        assert_eq!(ethan.credits_completed, 60);
    }

    #[test]
    fn test_invalid_field_selection() {
        let (_, output) = run_session("2\n1\n42\n3\n");
        assert!(output.contains("Invalid selection."));

        let (_, output) = run_session("2\n1\nxyz\n3\n");
        assert!(output.contains("Invalid selection."));
    }

    #[test]
    fn test_edit_major_end_to_end() {
        // Field 3 is Major; record 3 starts as Business
        let (store, output) = run_session("2\n3\n3\nFinance\n3\n");
        assert!(output.contains("Record updated successfully."));
        assert!(output.contains("Updated record:"));

        let jamal = store.student(3).unwrap().unwrap();
        assert_eq!(jamal.major, "Finance");
        // The rest of the record is unchanged
        assert_eq!(jamal.first_name, "Jamal");
        assert_eq!(jamal.last_name, "Carter");
        assert_eq!(jamal.gpa, 2.8);
        assert_eq!(jamal.email, "jamal.carter@example.edu");
        assert_eq!(jamal.grad_year, 2028);
    }

    #[test]
    fn test_out_of_range_gpa_aborts_edit() {
        // Field 4 is GPA; 5.0 is outside [0.0, 4.0]
        let (store, output) = run_session("2\n1\n4\n5.0\n3\n");
        assert!(output.contains("Invalid value: GPA should be between 0.0 and 4.0."));
        assert!(!output.contains("Record updated successfully."));

        let alex = store.student(1).unwrap().unwrap();
        assert_eq!(alex.gpa, 3.6);
    }

    #[test]
    fn test_full_time_flag_edit_accepts_word_tokens() {
        // Field 8 is IsFullTime; student 6 is the only part-timer
        let (store, output) = run_session("2\n6\n8\nYES\n3\n");
        assert!(output.contains("Record updated successfully."));
        assert_eq!(store.student(6).unwrap().unwrap().is_full_time, 1);
    }

    #[test]
    fn test_bad_email_aborts_edit() {
        let (store, output) = run_session("2\n2\n6\nmaria.example.edu\n3\n");
        assert!(output.contains("Invalid value: Email must contain '@'."));
        assert_eq!(
            store.student(2).unwrap().unwrap().email,
            "maria.lopez@example.edu"
        );
    }
}
