//! Flat-file record store.
//!
//! The store owns the ordered collection of records and mirrors it to a
//! single text file. Every successful mutation rewrites the whole file.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::codec::{decode_line, encode_record, validate};
use crate::error::StoreError;
use crate::model::{Record, RecordUpdate, SortOrder};
use crate::statistics::{self, ClassSummary};

/// Load the collection from `path`.
///
/// A missing file is created empty. Lines that cannot be decoded, or that
/// break a record invariant, are skipped with a warning; they never fail the
/// load.
pub fn load(path: &Path) -> Result<Vec<Record>, StoreError> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            create_empty(path)?;
            tracing::debug!("created empty record file {}", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(StoreError::persist(path, e)),
    };

    let mut records = Vec::new();
    let mut seen = HashSet::new();
    for (index, raw) in content.split(|&b| b == b'\n').enumerate() {
        let line_no = index + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let Ok(line) = std::str::from_utf8(raw) else {
            tracing::warn!("skipping {}:{}: invalid UTF-8", path.display(), line_no);
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let record = match decode_line(line) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("skipping {}:{}: {}", path.display(), line_no, e);
                continue;
            }
        };
        if let Err(e) = validate(&record) {
            tracing::warn!("skipping {}:{}: {}", path.display(), line_no, e);
            continue;
        }
        if !seen.insert(record.code.clone()) {
            tracing::warn!(
                "skipping {}:{}: duplicate student code {}",
                path.display(),
                line_no,
                record.code
            );
            continue;
        }
        records.push(record);
    }

    tracing::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Rewrite `path` with the given records, one per line.
///
/// The content goes to a sibling temporary file first and is then renamed
/// over the target, so readers see either the old file or the new one.
pub fn save(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    let mut content = String::new();
    for record in records {
        content.push_str(&encode_record(record));
        content.push('\n');
    }

    let tmp = tmp_path(path);
    if let Err(e) = fs::write(&tmp, content) {
        return Err(StoreError::persist(path, e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::persist(path, e));
    }

    tracing::debug!("saved {} records to {}", records.len(), path.display());
    Ok(())
}

fn create_empty(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::persist(path, e))?;
    }
    fs::write(path, "").map_err(|e| StoreError::persist(path, e))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".tmp-{}", std::process::id()));
    path.with_file_name(name)
}

/// Trim the text fields and check every invariant except code uniqueness.
fn normalize(mut record: Record) -> Result<Record, StoreError> {
    record.code = record.code.trim().to_string();
    record.name = record.name.trim().to_string();
    validate(&record)?;
    Ok(record)
}

/// The authoritative collection of student records and its backing file.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    records: Vec<Record>,
}

impl Store {
    /// Open the store at `path`, creating an empty file if none exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = load(&path)?;
        Ok(Self { path, records })
    }

    /// Flush the collection one last time and release the store.
    pub fn close(self) -> Result<(), StoreError> {
        self.save()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current collection, in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Persist the whole collection.
    pub fn save(&self) -> Result<(), StoreError> {
        save(&self.path, &self.records)
    }

    /// Validate and append a new record, then persist.
    pub fn add(&mut self, record: Record) -> Result<(), StoreError> {
        let record = normalize(record)?;
        if self.position(&record.code).is_some() {
            return Err(StoreError::DuplicateCode(record.code));
        }

        tracing::info!("added student {}", record.code);
        self.records.push(record);
        self.save()
    }

    /// Replace every field but the code of an existing record, then persist.
    ///
    /// The record keeps its position in the collection.
    pub fn update(&mut self, code: &str, update: RecordUpdate) -> Result<(), StoreError> {
        let index = self
            .position(code)
            .ok_or_else(|| StoreError::NotFound(code.to_string()))?;

        let mut candidate = self.records[index].clone();
        candidate.apply(update);
        let candidate = normalize(candidate)?;

        tracing::info!("updated student {}", candidate.code);
        self.records[index] = candidate;
        self.save()
    }

    /// Remove a record, then persist. Returns the removed record.
    ///
    /// If the save fails the record stays removed from memory and is only
    /// reported in the warning log; the error carries no copy of it.
    pub fn delete(&mut self, code: &str) -> Result<Record, StoreError> {
        let index = self
            .position(code)
            .ok_or_else(|| StoreError::NotFound(code.to_string()))?;

        let removed = self.records.remove(index);
        tracing::info!("deleted student {}", removed.code);
        if let Err(e) = self.save() {
            tracing::warn!("student {} removed in memory but not saved", removed.code);
            return Err(e);
        }
        Ok(removed)
    }

    /// Exact-match lookup by student code.
    pub fn find(&self, code: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.code == code)
    }

    /// Records whose name contains `query` or whose code equals it, both
    /// case-insensitively. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query) || r.code.to_lowercase() == query)
            .collect()
    }

    /// Reorder the collection by percentage and persist the new order.
    ///
    /// The sort is stable: records with equal percentages keep their
    /// relative order in either direction.
    pub fn sort_by_percentage(&mut self, order: SortOrder) -> Result<(), StoreError> {
        match order {
            SortOrder::Ascending => self
                .records
                .sort_by(|a, b| a.percentage().total_cmp(&b.percentage())),
            SortOrder::Descending => self
                .records
                .sort_by(|a, b| b.percentage().total_cmp(&a.percentage())),
        }
        tracing::info!("sorted {} records ({order})", self.records.len());
        self.save()
    }

    pub fn highest(&self) -> Option<&Record> {
        statistics::highest(&self.records)
    }

    pub fn lowest(&self) -> Option<&Record> {
        statistics::lowest(&self.records)
    }

    pub fn summary(&self) -> Option<ClassSummary> {
        statistics::summarize(&self.records)
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.records.iter().position(|r| r.code == code)
    }
}
