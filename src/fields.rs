/// Editable Fields Module
///
/// This module defines the closed set of student attributes the edit flow may
/// touch, and the per-field conversion from raw terminal input to a typed
/// value. StudentID is deliberately absent: it is the immutable primary key
/// and is never offered as an edit target.
///
/// The field list doubles as the allow-list for column names in UPDATE
/// statements, so user input can only ever select one of these nine known
/// identifiers.
use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;
use thiserror::Error;

/// Validation failures reported by field conversion.
///
/// The messages are shown verbatim to the operator, prefixed with
/// "Invalid value: " by the edit flow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The input could not be parsed as the field's numeric type
    #[error("{0} must be a number.")]
    NotANumber(&'static str),

    /// GPA parsed but fell outside the inclusive [0.0, 4.0] range
    #[error("GPA should be between 0.0 and 4.0.")]
    GpaOutOfRange,

    /// IsFullTime input matched neither the affirmative nor negative token set
    #[error("IsFullTime must be 1/0 or yes/no.")]
    BadFullTimeFlag,

    /// Email input had no '@' character
    #[error("Email must contain '@'.")]
    EmailMissingAt,
}

/// A converted field value, typed to match its column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            FieldValue::Integer(i) => ToSqlOutput::from(*i),
            FieldValue::Real(f) => ToSqlOutput::from(*f),
            FieldValue::Text(s) => ToSqlOutput::from(s.as_str()),
        })
    }
}

/// The nine editable student attributes, in edit-menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    FirstName,
    LastName,
    Major,
    Gpa,
    CreditsCompleted,
    Email,
    Standing,
    IsFullTime,
    GradYear,
}

impl EditableField {
    /// All editable fields in the order they are numbered 1-9 in the menu.
    pub const ALL: [EditableField; 9] = [
        EditableField::FirstName,
        EditableField::LastName,
        EditableField::Major,
        EditableField::Gpa,
        EditableField::CreditsCompleted,
        EditableField::Email,
        EditableField::Standing,
        EditableField::IsFullTime,
        EditableField::GradYear,
    ];

    /// Resolves a 1-based menu selection to a field. Returns `None` for 0 or
    /// anything past the end of the list.
    pub fn from_index(index: usize) -> Option<EditableField> {
        if (1..=EditableField::ALL.len()).contains(&index) {
            Some(EditableField::ALL[index - 1])
        } else {
            None
        }
    }

    /// The SQL column identifier for this field.
    pub fn column(self) -> &'static str {
        match self {
            EditableField::FirstName => "FirstName",
            EditableField::LastName => "LastName",
            EditableField::Major => "Major",
            EditableField::Gpa => "GPA",
            EditableField::CreditsCompleted => "CreditsCompleted",
            EditableField::Email => "Email",
            EditableField::Standing => "Standing",
            EditableField::IsFullTime => "IsFullTime",
            EditableField::GradYear => "GradYear",
        }
    }

    /// Converts raw operator input into a typed value for this field.
    ///
    /// # Rules
    ///
    /// - `GPA`: floating point, inclusive range [0.0, 4.0]
    /// - `CreditsCompleted`, `GradYear`: integer
    /// - `IsFullTime`: case-insensitive 1/yes/y/true/t or 0/no/n/false/f,
    ///   stored as 1 or 0
    /// - `Email`: free text that must contain '@'
    /// - everything else: free text, accepted verbatim
    pub fn convert(self, raw: &str) -> Result<FieldValue, ValidationError> {
        match self {
            EditableField::Gpa => {
                let gpa: f64 = raw
                    .parse()
                    .map_err(|_| ValidationError::NotANumber("GPA"))?;
                if !(0.0..=4.0).contains(&gpa) {
                    return Err(ValidationError::GpaOutOfRange);
                }
                Ok(FieldValue::Real(gpa))
            }
            EditableField::CreditsCompleted | EditableField::GradYear => {
                let value: i64 = raw
                    .parse()
                    .map_err(|_| ValidationError::NotANumber(self.column()))?;
                Ok(FieldValue::Integer(value))
            }
            EditableField::IsFullTime => match raw.to_lowercase().as_str() {
                "1" | "yes" | "y" | "true" | "t" => Ok(FieldValue::Integer(1)),
                "0" | "no" | "n" | "false" | "f" => Ok(FieldValue::Integer(0)),
                _ => Err(ValidationError::BadFullTimeFlag),
            },
            EditableField::Email => {
                if !raw.contains('@') {
                    return Err(ValidationError::EmailMissingAt);
                }
                Ok(FieldValue::Text(raw.to_string()))
            }
            EditableField::FirstName
            | EditableField::LastName
            | EditableField::Major
            | EditableField::Standing => Ok(FieldValue::Text(raw.to_string())),
        }
    }
}
