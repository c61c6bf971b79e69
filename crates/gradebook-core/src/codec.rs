//! Flat-file record codec.
//!
//! One record per line, fields in the fixed order
//! `code,name,c1,c2,c3,exam`. There is no quoting, so codes and names may
//! not contain the delimiter; [`validate`] enforces that before a record
//! can be written.

use crate::error::{DecodeError, ValidationError};
use crate::model::{Grade, Record};

/// Field separator of the backing file.
pub const DELIMITER: char = ',';
/// Number of raw fields in an encoded record.
pub const FIELD_COUNT: usize = 6;
/// Highest mark for a single piece of coursework.
pub const MAX_COURSEWORK: u32 = 20;
/// Highest exam mark.
pub const MAX_EXAM: u32 = 100;
/// Highest overall score: three coursework marks plus the exam.
pub const MAX_OVERALL: u32 = 3 * MAX_COURSEWORK + MAX_EXAM;

const MARK_FIELDS: [&str; 4] = ["coursework 1", "coursework 2", "coursework 3", "exam"];

/// Decode one non-blank line into a record.
///
/// Fields are trimmed. Anything after the sixth field is ignored.
pub fn decode_line(line: &str) -> Result<Record, DecodeError> {
    let parts: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if parts.len() < FIELD_COUNT {
        return Err(DecodeError::MissingFields { found: parts.len() });
    }

    let mut marks = [0u32; 4];
    for (i, (slot, raw)) in marks.iter_mut().zip(&parts[2..FIELD_COUNT]).enumerate() {
        *slot = raw.parse().map_err(|_| DecodeError::InvalidNumber {
            field: MARK_FIELDS[i],
            value: (*raw).to_string(),
        })?;
    }

    Ok(Record {
        code: parts[0].to_string(),
        name: parts[1].to_string(),
        coursework: [marks[0], marks[1], marks[2]],
        exam: marks[3],
    })
}

/// Encode a record as a single line, without a trailing newline.
///
/// Derived fields are never written; they are recomputed on load.
pub fn encode_record(record: &Record) -> String {
    let [c1, c2, c3] = record.coursework;
    format!(
        "{code}{d}{name}{d}{c1}{d}{c2}{d}{c3}{d}{exam}",
        code = record.code,
        name = record.name,
        exam = record.exam,
        d = DELIMITER,
    )
}

/// Map a percentage to its letter grade. Each band includes its lower edge.
pub fn grade_of(percentage: f64) -> Grade {
    if percentage >= 70.0 {
        Grade::A
    } else if percentage >= 60.0 {
        Grade::B
    } else if percentage >= 50.0 {
        Grade::C
    } else if percentage >= 40.0 {
        Grade::D
    } else {
        Grade::F
    }
}

/// Check a record against the field invariants.
pub fn validate(record: &Record) -> Result<(), ValidationError> {
    if record.code.trim().is_empty() {
        return Err(ValidationError::EmptyCode);
    }
    if record.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !is_encodable(&record.code) {
        return Err(ValidationError::ForbiddenCharacter { field: "code" });
    }
    if !is_encodable(&record.name) {
        return Err(ValidationError::ForbiddenCharacter { field: "name" });
    }
    for (i, &value) in record.coursework.iter().enumerate() {
        if value > MAX_COURSEWORK {
            return Err(ValidationError::CourseworkOutOfRange {
                index: i + 1,
                value,
            });
        }
    }
    if record.exam > MAX_EXAM {
        return Err(ValidationError::ExamOutOfRange { value: record.exam });
    }
    Ok(())
}

fn is_encodable(field: &str) -> bool {
    !field.contains([DELIMITER, '\n', '\r'])
}
