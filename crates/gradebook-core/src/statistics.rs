//! Aggregate statistics over a collection of records.
//!
//! All functions are pure and keep the collection's order meaningful: when
//! several records share the extreme percentage, the earliest one wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Grade, Record};

/// The record with the highest percentage, or `None` for an empty slice.
pub fn highest(records: &[Record]) -> Option<&Record> {
    records.iter().fold(None, |best: Option<&Record>, r| match best {
        Some(b) if r.percentage() <= b.percentage() => Some(b),
        _ => Some(r),
    })
}

/// The record with the lowest percentage, or `None` for an empty slice.
pub fn lowest(records: &[Record]) -> Option<&Record> {
    records.iter().fold(None, |worst: Option<&Record>, r| match worst {
        Some(w) if r.percentage() >= w.percentage() => Some(w),
        _ => Some(r),
    })
}

/// Class-wide summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Number of records.
    pub count: usize,
    /// Mean percentage across all records.
    pub mean_percentage: f64,
    pub min_percentage: f64,
    pub max_percentage: f64,
    /// Records per grade. Every grade is present, including empty bands.
    pub grade_distribution: BTreeMap<Grade, usize>,
    /// Records graded D or better.
    pub pass_count: usize,
}

impl ClassSummary {
    /// Share of records that passed, between 0.0 and 1.0.
    pub fn pass_rate(&self) -> f64 {
        self.pass_count as f64 / self.count.max(1) as f64
    }
}

/// Compute a class summary, or `None` for an empty slice.
pub fn summarize(records: &[Record]) -> Option<ClassSummary> {
    let top = highest(records)?;
    let bottom = lowest(records)?;

    let mut grade_distribution: BTreeMap<Grade, usize> =
        Grade::ALL.iter().map(|&g| (g, 0)).collect();
    let mut total = 0.0f64;
    for r in records {
        total += r.percentage();
        *grade_distribution.entry(r.grade()).or_default() += 1;
    }

    let pass_count = grade_distribution
        .iter()
        .filter(|(g, _)| g.is_pass())
        .map(|(_, n)| n)
        .sum();

    Some(ClassSummary {
        count: records.len(),
        mean_percentage: total / records.len() as f64,
        min_percentage: bottom.percentage(),
        max_percentage: top.percentage(),
        grade_distribution,
        pass_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class() -> Vec<Record> {
        vec![
            Record::new("S1", "Alice", [18, 16, 15], 80),
            Record::new("S2", "Bob", [10, 10, 10], 40),
            Record::new("S3", "Cara", [5, 5, 5], 20),
        ]
    }

    #[test]
    fn highest_and_lowest() {
        let records = class();
        assert_eq!(highest(&records).unwrap().code, "S1");
        assert_eq!(lowest(&records).unwrap().code, "S3");
    }

    #[test]
    fn empty_has_no_extremes() {
        assert!(highest(&[]).is_none());
        assert!(lowest(&[]).is_none());
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn ties_pick_first_in_order() {
        let records = vec![
            Record::new("A", "First", [10, 10, 10], 50),
            Record::new("B", "Second", [10, 10, 10], 50),
            Record::new("C", "Third", [20, 0, 10], 50),
        ];
        assert_eq!(highest(&records).unwrap().code, "A");
        assert_eq!(lowest(&records).unwrap().code, "A");
    }

    #[test]
    fn summary_counts_grades() {
        let summary = summarize(&class()).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.grade_distribution.len(), 5);
        assert_eq!(summary.grade_distribution[&Grade::A], 1);
        assert_eq!(summary.grade_distribution[&Grade::D], 1);
        assert_eq!(summary.grade_distribution[&Grade::F], 1);
        assert_eq!(summary.grade_distribution[&Grade::B], 0);
        assert_eq!(summary.pass_count, 2);
        assert!((summary.pass_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn summary_percentages() {
        let summary = summarize(&class()).unwrap();
        // 129, 70, 35 out of 160
        let expected_mean = (80.625 + 43.75 + 21.875) / 3.0;
        assert!((summary.mean_percentage - expected_mean).abs() < 1e-9);
        assert!((summary.max_percentage - 80.625).abs() < 1e-9);
        assert!((summary.min_percentage - 21.875).abs() < 1e-9);
    }
}
