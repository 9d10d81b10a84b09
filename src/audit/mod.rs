//! Audit trail for structure operations
//!
//! Every mutating operation (and BST search, hit or miss) emits one
//! [`AuditRecord`] to an [`AuditSink`] the structure received at
//! construction:
//! - [`AuditSink`]: the capability the engine holds a handle to
//! - [`AuditRecord`]: one completed operation as a structured tuple
//! - [`StructureKind`]: kind tag naming the emitting structure
//! - [`sinks`]: ready-made sinks (null, console, recording, file)
//!
//! # Fire and forget
//!
//! The engine never consults a sink's outcome: `record` returns nothing, and
//! a sink that fails internally (for example a file sink whose disk is full)
//! must swallow the failure itself.  A failed data-structure operation is
//! never audited - only successful mutations and lookups reach the sink.

pub mod sinks;

use std::fmt;

/// Kind tag for the five structure models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Stack,
    Queue,
    LinkedList,
    Bst,
    Graph,
}

impl StructureKind {
    /// Canonical name written into audit records
    pub fn name(&self) -> &'static str {
        match self {
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::LinkedList => "LinkedList",
            StructureKind::Bst => "BST",
            StructureKind::Graph => "Graph",
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One completed operation, as delivered to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub structure: StructureKind,
    pub operation: String,
    pub value: Option<String>,
}

impl AuditRecord {
    pub fn new(structure: StructureKind, operation: &str, value: Option<&str>) -> Self {
        AuditRecord {
            structure,
            operation: operation.to_string(),
            value: value.map(|v| v.to_string()),
        }
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {} '{}'", self.structure, self.operation, value),
            None => write!(f, "{} {}", self.structure, self.operation),
        }
    }
}

/// Destination for audit records
///
/// Implementations take `&self` and use interior mutability where they keep
/// state; the engine is single-threaded, so a `RefCell` suffices.
pub trait AuditSink {
    /// Accept one record.  Must not panic; failures stay inside the sink.
    fn record(&self, structure: StructureKind, operation: &str, value: Option<&str>);
}
