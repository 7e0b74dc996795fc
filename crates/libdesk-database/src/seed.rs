//! Student roster provisioning.
//!
//! The directory is seeded out of band (CLI `seed`), never by the server.

use libdesk_core::error::AppError;
use libdesk_core::result::AppResult;

use crate::repositories::StudentRecord;

/// The roster shipped with LibDesk for first-run installs.
pub fn default_roster() -> Vec<StudentRecord> {
    [
        ("1", "prachi bhilare"),
        ("2", "mayank disale"),
        ("3", "sujay gawari"),
        ("4", "aditya mathpati"),
        ("5", "yogita khose"),
        ("6", "darshana gurav"),
        ("7", "pranjal patil"),
        ("8", "komal patil"),
        ("9", "komal kumari"),
    ]
    .into_iter()
    .map(|(roll_no, name)| StudentRecord::new(roll_no, name))
    .collect()
}

/// Parse a roster file with one `roll_no,name` pair per line.
///
/// Blank lines and lines starting with `#` are skipped. The name may itself
/// contain commas; only the first comma separates the fields.
pub fn parse_roster(contents: &str) -> AppResult<Vec<StudentRecord>> {
    let mut students = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (roll_no, name) = line.split_once(',').ok_or_else(|| {
            AppError::validation(format!(
                "Roster line {}: expected 'roll_no,name'",
                index + 1
            ))
        })?;

        let (roll_no, name) = (roll_no.trim(), name.trim());
        if roll_no.is_empty() || name.is_empty() {
            return Err(AppError::validation(format!(
                "Roster line {}: roll number and name must not be empty",
                index + 1
            )));
        }

        students.push(StudentRecord::new(roll_no, name));
    }

    Ok(students)
}
