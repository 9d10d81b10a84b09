//! Operation error types for the data-structure engine
//!
//! This module defines [`OperationError`], which represents every failure a
//! structure operation can report to its caller (as opposed to panics or
//! system errors).
//!
//! All operation errors are recoverable - the structure is left exactly as it
//! was before the failed call, and the caller (normally the UI layer) renders
//! the message and carries on.  Errors are never written to the audit sink;
//! only successful operations are audited.

use crate::audit::StructureKind;
use std::fmt;

/// Errors that a structure operation can raise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// Insertion attempted on a structure already at its capacity bound
    CapacityExceeded {
        structure: StructureKind,
        value: String,
        capacity: usize,
    },

    /// Removal attempted on a structure with no elements
    Empty { structure: StructureKind },

    /// BST insertion of a key that is already present
    DuplicateKey { key: i32 },

    /// Graph node registration with an id that is already present
    DuplicateNode { id: String },

    /// Graph edge or traversal referencing an unregistered node id
    UnknownNode { id: String },
}

impl OperationError {
    /// The structure kind the failed operation belongs to
    pub fn structure(&self) -> StructureKind {
        match self {
            OperationError::CapacityExceeded { structure, .. } => *structure,
            OperationError::Empty { structure } => *structure,
            OperationError::DuplicateKey { .. } => StructureKind::Bst,
            OperationError::DuplicateNode { .. } => StructureKind::Graph,
            OperationError::UnknownNode { .. } => StructureKind::Graph,
        }
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::CapacityExceeded {
                structure,
                value,
                capacity,
            } => {
                write!(
                    f,
                    "{} is full (capacity {}). Cannot add '{}'",
                    structure.name(),
                    capacity,
                    value
                )
            }
            OperationError::Empty { structure } => {
                write!(f, "{} is empty. Cannot remove", structure.name())
            }
            OperationError::DuplicateKey { key } => {
                write!(f, "Value {} already exists in the tree", key)
            }
            OperationError::DuplicateNode { id } => {
                write!(f, "Node '{}' already exists", id)
            }
            OperationError::UnknownNode { id } => {
                write!(f, "Node '{}' does not exist", id)
            }
        }
    }
}

impl std::error::Error for OperationError {}
