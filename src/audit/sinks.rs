//! Ready-made audit sink implementations
//!
//! Four sinks cover the deployment modes of the surrounding tool:
//! - [`NullSink`]: discards everything (headless use, benchmarks)
//! - [`ConsoleSink`]: one line per record on stdout
//! - [`RecordingSink`]: keeps records in memory for inspection (tests)
//! - [`FileSink`]: appends one tab-separated line per record to a log file
//!
//! # Error Handling
//!
//! Sinks never surface failures to the engine.  [`FileSink`] reports open and
//! write errors to stderr and keeps going; the structures it serves are
//! unaffected, which is the contract every sink must honor.

use super::{AuditRecord, AuditSink, StructureKind};
use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Sink that discards every record
#[derive(Debug, Default)]
pub struct NullSink;

impl AuditSink for NullSink {
    fn record(&self, _structure: StructureKind, _operation: &str, _value: Option<&str>) {}
}

/// Sink that prints each record to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl AuditSink for ConsoleSink {
    fn record(&self, structure: StructureKind, operation: &str, value: Option<&str>) {
        println!(
            "[audit] {}",
            AuditRecord::new(structure, operation, value)
        );
    }
}

/// Sink that accumulates records in memory
///
/// The test double for the audit contract: hand a structure an
/// `Rc<RecordingSink>`, drive it, then assert on [`RecordingSink::records`].
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: RefCell<Vec<AuditRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink {
            records: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of all records received so far, in arrival order
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.borrow().clone()
    }

    /// Number of records received so far
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Check if no records have been received
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// The most recent record, if any
    pub fn last(&self) -> Option<AuditRecord> {
        self.records.borrow().last().cloned()
    }
}

impl AuditSink for RecordingSink {
    fn record(&self, structure: StructureKind, operation: &str, value: Option<&str>) {
        self.records
            .borrow_mut()
            .push(AuditRecord::new(structure, operation, value));
    }
}

/// Sink that appends records to a log file
///
/// Each record becomes one line: `structure<TAB>operation<TAB>value`, with
/// `-` standing in for an absent value.  If the file cannot be opened the
/// sink degrades to a warning on stderr and discards records from then on.
#[derive(Debug)]
pub struct FileSink {
    file: RefCell<Option<File>>,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!(
                    "audit log '{}' could not be opened: {}",
                    path.as_ref().display(),
                    e
                );
                None
            }
        };
        FileSink {
            file: RefCell::new(file),
        }
    }

    /// Whether the log file was opened successfully
    pub fn is_connected(&self) -> bool {
        self.file.borrow().is_some()
    }
}

impl AuditSink for FileSink {
    fn record(&self, structure: StructureKind, operation: &str, value: Option<&str>) {
        if let Some(file) = self.file.borrow_mut().as_mut() {
            let line = format!(
                "{}\t{}\t{}",
                structure.name(),
                operation,
                value.unwrap_or("-")
            );
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("audit log write failed: {}", e);
            }
        }
    }
}
