//! # Entity Repositories
//!
//! One [`Repository`] per entity type owns the full in-memory record list
//! for that entity. The list is loaded once when the repository is opened
//! and rewritten to the backend in full after every mutation; between saves
//! it is the sole source of truth.
//!
//! Every mutation follows the same discipline: apply the change to the
//! in-memory list, save, and on save failure undo the in-memory change
//! before returning the error. The rollback covers this repository only;
//! coordinated two-entity updates live in [`crate::occupancy`] and are not
//! transactional.
//!
//! Malformed lines encountered during load are skipped, never fatal; each
//! skip is recorded in the [`LoadReport`] so callers can surface it.

use crate::codec::Record;
use crate::error::{InnkeepError, Result};
use crate::store::StorageBackend;
use tracing::warn;

pub mod payment;
pub mod room;
pub mod tenant;

pub use payment::PaymentRepository;
pub use room::RoomRepository;
pub use tenant::TenantRepository;

/// Width of the numeric suffix in generated ids ("R001").
const ID_WIDTH: usize = 3;

/// One line skipped during load, with its 1-based line number.
#[derive(Debug, Clone)]
pub struct SkippedLine {
    pub number: usize,
    pub line: String,
    pub reason: String,
}

/// Outcome of loading a record file.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

pub struct Repository<R: Record, B: StorageBackend> {
    /// Exposed as pub(crate) for failure injection in tests only.
    pub(crate) backend: B,
    records: Vec<R>,
    report: LoadReport,
}

impl<R: Record, B: StorageBackend> Repository<R, B> {
    /// Open the repository, loading every well-formed record from the
    /// backend.
    pub fn open(backend: B) -> Result<Self> {
        let mut repo = Self {
            backend,
            records: Vec::new(),
            report: LoadReport::default(),
        };
        repo.refresh()?;
        Ok(repo)
    }

    /// Discard the in-memory list and reload from the backend. Used when
    /// the backing file may have changed externally.
    pub fn refresh(&mut self) -> Result<&LoadReport> {
        let lines = self.backend.read_lines(R::FILE_NAME)?;
        let mut records = Vec::with_capacity(lines.len());
        let mut report = LoadReport::default();

        for (index, line) in lines.iter().enumerate() {
            match R::parse_line(line) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(
                        entity = R::ENTITY,
                        line = index + 1,
                        %err,
                        "skipping malformed line"
                    );
                    report.skipped.push(SkippedLine {
                        number: index + 1,
                        line: line.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        report.loaded = records.len();
        self.records = records;
        self.report = report;
        Ok(&self.report)
    }

    /// Diagnostics from the most recent load.
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// Owned copy of the full list; mutating it does not touch the
    /// repository.
    pub fn all(&self) -> Vec<R> {
        self.records.clone()
    }

    /// First record with the given id, if any.
    pub fn get(&self, id: &str) -> Option<R> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and persist the full list. On save failure the
    /// record is removed again and the error returned.
    pub fn create(&mut self, record: R) -> Result<()> {
        self.records.push(record);
        if let Err(err) = self.save() {
            self.records.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Replace the record with the same id. Fails with NotFound, leaving
    /// the list untouched, when the id is absent; restores the previous
    /// record on save failure.
    pub fn update(&mut self, record: R) -> Result<()> {
        let position = self
            .records
            .iter()
            .position(|r| r.id() == record.id())
            .ok_or_else(|| InnkeepError::not_found(R::ENTITY, record.id()))?;

        let previous = std::mem::replace(&mut self.records[position], record);
        if let Err(err) = self.save() {
            self.records[position] = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Remove the record with the given id and persist. On save failure
    /// the record is re-inserted at its original position.
    pub fn remove(&mut self, id: &str) -> Result<R> {
        let position = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| InnkeepError::not_found(R::ENTITY, id))?;

        let removed = self.records.remove(position);
        if let Err(err) = self.save() {
            self.records.insert(position, removed);
            return Err(err);
        }
        Ok(removed)
    }

    /// Next sequential id: the highest existing numeric suffix plus one,
    /// zero-padded behind the entity prefix.
    pub fn next_id(&self) -> String {
        let max = self
            .records
            .iter()
            .filter_map(|r| r.id().strip_prefix(R::ID_PREFIX))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{}{:0width$}", R::ID_PREFIX, max + 1, width = ID_WIDTH)
    }

    fn save(&mut self) -> Result<()> {
        let lines: Vec<String> = self.records.iter().map(Record::to_line).collect();
        self.backend.write_lines(R::FILE_NAME, &lines)
    }
}
