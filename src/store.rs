//! Storage module for the student roster: one long-lived SQLite connection
//! plus schema setup, seeding, and the row-level operations the menu needs.
use crate::core::{Result, RosterError};
use crate::fields::{EditableField, FieldValue};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

const STUDENTS_TABLE_SQL: &str = r#"
CREATE TABLE Students (
    StudentID INTEGER PRIMARY KEY NOT NULL,
    FirstName TEXT,
    LastName TEXT,
    Major TEXT,
    GPA REAL,
    CreditsCompleted INTEGER,
    Email TEXT,
    Standing TEXT,
    IsFullTime INTEGER,
    GradYear INTEGER
)"#;

const STUDENT_COLUMNS: &str = "StudentID, FirstName, LastName, Major, GPA, \
     CreditsCompleted, Email, Standing, IsFullTime, GradYear";

/// Sample roster inserted after every schema reset.
const SEED_STUDENTS: [(i64, &str, &str, &str, f64, i64, &str, &str, i64, i64); 10] = [
    (1, "Alex", "Johnson", "Computer Science", 3.6, 45, "alex.johnson@example.edu", "Sophomore", 1, 2027),
    (2, "Maria", "Lopez", "Nursing", 3.9, 75, "maria.lopez@example.edu", "Junior", 1, 2026),
    (3, "Jamal", "Carter", "Business", 2.8, 30, "jamal.carter@example.edu", "Freshman", 1, 2028),
    (4, "Sofia", "Nguyen", "Psychology", 3.4, 90, "sofia.nguyen@example.edu", "Senior", 1, 2025),
    (5, "Ethan", "Kim", "Engineering", 3.1, 60, "ethan.kim@example.edu", "Junior", 1, 2026),
    (6, "Layla", "Patel", "Art", 3.7, 18, "layla.patel@example.edu", "Freshman", 0, 2029),
    (7, "Noah", "Williams", "Cybersecurity", 2.9, 33, "noah.williams@example.edu", "Sophomore", 1, 2027),
    (8, "Grace", "Miller", "Biology", 3.5, 105, "grace.miller@example.edu", "Senior", 1, 2025),
    (9, "Omar", "Ali", "Data Science", 3.2, 48, "omar.ali@example.edu", "Sophomore", 1, 2027),
    (10, "Faith", "Brown", "Theology", 3.8, 72, "faith.brown@example.edu", "Junior", 1, 2026),
];

/// One student's full set of attribute values, keyed by `id` (StudentID).
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub major: String,
    pub gpa: f64,
    pub credits_completed: i64,
    pub email: String,
    pub standing: String,
    pub is_full_time: i64,
    pub grad_year: i64,
}

/// Data-access gateway owning the single database connection.
///
/// All reads and writes go through this value; the connection stays in
/// autocommit mode, so each mutating call is committed immediately.
pub struct StudentStore {
    conn: Connection,
}

impl StudentStore {
    /// Opens (creating if necessary) the roster database at `path`.
    pub fn open(path: &str) -> Result<Self> {
        debug!("Opening roster database at {}", path);
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(StudentStore { conn })
    }

    /// Opens an in-memory roster database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(StudentStore { conn })
    }

    /// Drops any existing Students table and recreates it empty.
    ///
    /// This deliberately discards all data from prior sessions; every launch
    /// starts from the same known-clean schema.
    pub fn init_schema(&self) -> Result<()> {
        debug!("Recreating Students table");
        self.conn.execute("DROP TABLE IF EXISTS Students", [])?;
        self.conn.execute(STUDENTS_TABLE_SQL, [])?;
        Ok(())
    }

    /// Inserts the fixed ten-row sample roster into the freshly created table.
    ///
    /// Propagates any constraint violation (e.g. a duplicate StudentID if the
    /// table was not reset first).
    pub fn seed(&self) -> Result<()> {
        debug!("Seeding {} sample students", SEED_STUDENTS.len());
        let mut stmt = self.conn.prepare(&format!(
            "INSERT INTO Students ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            STUDENT_COLUMNS
        ))?;
        for row in SEED_STUDENTS {
            stmt.execute(params![
                row.0, row.1, row.2, row.3, row.4, row.5, row.6, row.7, row.8, row.9
            ])?;
        }
        Ok(())
    }

    /// Fetches every student. No ORDER BY clause; rows come back in the order
    /// SQLite stores them, which is insertion order for this table.
    pub fn all_students(&self) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM Students", STUDENT_COLUMNS))?;
        let students = stmt
            .query_map([], row_to_student)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(students)
    }

    /// Fetches a single student by StudentID, or `None` if no row matches.
    pub fn student(&self, id: i64) -> Result<Option<Student>> {
        let student = self
            .conn
            .query_row(
                &format!("SELECT {} FROM Students WHERE StudentID = ?1", STUDENT_COLUMNS),
                params![id],
                row_to_student,
            )
            .optional()?;
        Ok(student)
    }

    /// Updates one column of one student row and commits immediately.
    ///
    /// The column identifier comes from the closed `EditableField` set, never
    /// from raw user text, so the statement can only target one of the nine
    /// known editable columns.
    pub fn update_field(&self, id: i64, field: EditableField, value: &FieldValue) -> Result<()> {
        let sql = format!(
            "UPDATE Students SET {} = ?1 WHERE StudentID = ?2",
            field.column()
        );
        let changed = self.conn.execute(&sql, params![value, id])?;
        if changed == 0 {
            return Err(RosterError::NotFound(id));
        }
        debug!("Updated {} for StudentID {}", field.column(), id);
        Ok(())
    }
}

fn row_to_student(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        major: row.get(3)?,
        gpa: row.get(4)?,
        credits_completed: row.get(5)?,
        email: row.get(6)?,
        standing: row.get(7)?,
        is_full_time: row.get(8)?,
        grad_year: row.get(9)?,
    })
}
