/// Record Formatter Module
///
/// Renders students as human-readable text: a fixed-width roster table for
/// the display operation and a labeled per-attribute view for the edit flow.
/// Pure string builders; the menu decides where the text goes.
use crate::store::Student;

/// Renders the full roster as a fixed-width table: a header row, an 80-dash
/// separator, then one line per student in query order.
pub fn roster_table(students: &[Student]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<3} {:<25} {:<20} {:<5} {:<10} {}\n",
        "ID", "Name", "Major", "GPA", "Standing", "GradYear"
    ));
    out.push_str(&"-".repeat(80));
    out.push('\n');
    for student in students {
        let full_name = format!("{} {}", student.first_name, student.last_name);
        out.push_str(&format!(
            "{:<3} {:<25} {:<20} {:<5.2} {:<10} {}\n",
            student.id, full_name, student.major, student.gpa, student.standing, student.grad_year
        ));
    }
    out
}

/// Renders one student as a labeled line per attribute, all ten fields.
pub fn record_detail(student: &Student) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<18} {}\n", "StudentID:", student.id));
    out.push_str(&format!("{:<18} {}\n", "FirstName:", student.first_name));
    out.push_str(&format!("{:<18} {}\n", "LastName:", student.last_name));
    out.push_str(&format!("{:<18} {}\n", "Major:", student.major));
    out.push_str(&format!("{:<18} {}\n", "GPA:", student.gpa));
    out.push_str(&format!(
        "{:<18} {}\n",
        "CreditsCompleted:", student.credits_completed
    ));
    out.push_str(&format!("{:<18} {}\n", "Email:", student.email));
    out.push_str(&format!("{:<18} {}\n", "Standing:", student.standing));
    out.push_str(&format!(
        "{:<18} {}  (1=Yes, 0=No)\n",
        "IsFullTime:", student.is_full_time
    ));
    out.push_str(&format!("{:<18} {}\n", "GradYear:", student.grad_year));
    out
}
