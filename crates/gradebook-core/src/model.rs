//! Core data model types for gradebook.
//!
//! A `Record` stores only the raw marks a student was given. Everything else
//! (coursework total, overall score, percentage, grade) is derived on demand
//! so it can never drift from the marks it was computed from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec::{grade_of, MAX_OVERALL};

/// One student's academic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique student code. Immutable once the record is in a store.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Three coursework marks, each out of 20.
    pub coursework: [u32; 3],
    /// Exam mark out of 100.
    pub exam: u32,
}

impl Record {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        coursework: [u32; 3],
        exam: u32,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            coursework,
            exam,
        }
    }

    /// Sum of the three coursework marks (0–60).
    pub fn coursework_total(&self) -> u32 {
        self.coursework.iter().sum()
    }

    /// Coursework total plus exam (0–160).
    pub fn overall(&self) -> u32 {
        self.coursework_total() + self.exam
    }

    /// Overall score as a percentage of 160.
    pub fn percentage(&self) -> f64 {
        f64::from(self.overall()) / f64::from(MAX_OVERALL) * 100.0
    }

    pub fn grade(&self) -> Grade {
        grade_of(self.percentage())
    }

    /// Snapshot of this record with every derived field filled in.
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            code: self.code.clone(),
            name: self.name.clone(),
            coursework: self.coursework,
            coursework_total: self.coursework_total(),
            exam: self.exam,
            overall: self.overall(),
            percentage: self.percentage(),
            grade: self.grade(),
        }
    }

    /// Replace every field except the code.
    pub(crate) fn apply(&mut self, update: RecordUpdate) {
        self.name = update.name;
        self.coursework = update.coursework;
        self.exam = update.exam;
    }
}

/// Replacement fields for an existing record.
///
/// There is no `code` here: a student's code cannot be changed by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordUpdate {
    pub name: String,
    pub coursework: [u32; 3],
    pub exam: u32,
}

impl From<&Record> for RecordUpdate {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            coursework: record.coursework,
            exam: record.exam,
        }
    }
}

/// A record together with its derived fields, for display and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub code: String,
    pub name: String,
    pub coursework: [u32; 3],
    pub coursework_total: u32,
    pub exam: u32,
    pub overall: u32,
    pub percentage: f64,
    pub grade: Grade,
}

/// Letter grade bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All grades from best to worst.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Returns `true` for every grade except `F`.
    pub fn is_pass(self) -> bool {
        self != Grade::F
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            other => Err(format!("unknown grade: {other}")),
        }
    }
}

/// Direction for sorting records by percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_fields() {
        let alice = Record::new("S1", "Alice", [18, 16, 15], 80);
        assert_eq!(alice.coursework_total(), 49);
        assert_eq!(alice.overall(), 129);
        assert!((alice.percentage() - 80.625).abs() < 1e-9);
        assert_eq!(alice.grade(), Grade::A);

        let bob = Record::new("S2", "Bob", [10, 10, 10], 40);
        assert_eq!(bob.overall(), 70);
        assert!((bob.percentage() - 43.75).abs() < 1e-9);
        assert_eq!(bob.grade(), Grade::D);
    }

    #[test]
    fn extremes() {
        let perfect = Record::new("P", "Perfect", [20, 20, 20], 100);
        assert_eq!(perfect.overall(), 160);
        assert!((perfect.percentage() - 100.0).abs() < f64::EPSILON);

        let zero = Record::new("Z", "Zero", [0, 0, 0], 0);
        assert_eq!(zero.percentage(), 0.0);
        assert_eq!(zero.grade(), Grade::F);
    }

    #[test]
    fn apply_keeps_code() {
        let mut record = Record::new("S1", "Alice", [18, 16, 15], 80);
        record.apply(RecordUpdate {
            name: "Alicia".into(),
            coursework: [1, 2, 3],
            exam: 4,
        });
        assert_eq!(record.code, "S1");
        assert_eq!(record.name, "Alicia");
        assert_eq!(record.overall(), 10);
    }

    #[test]
    fn grade_display_and_parse() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!("b".parse::<Grade>().unwrap(), Grade::B);
        assert!("E".parse::<Grade>().is_err());
        assert!(Grade::D.is_pass());
        assert!(!Grade::F.is_pass());
    }

    #[test]
    fn summary_serializes_derived_fields() {
        let record = Record::new("S1", "Alice", [18, 16, 15], 80);
        let json = serde_json::to_value(record.summary()).unwrap();
        assert_eq!(json["overall"], 129);
        assert_eq!(json["coursework_total"], 49);
        assert_eq!(json["grade"], "A");
    }
}
