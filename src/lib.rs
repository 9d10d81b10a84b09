//! # Introduction
//!
//! `structviz` is the data-structure engine behind an interactive teaching
//! tool: the user builds one of five classic structures step by step while a
//! rendering layer animates every operation.  This crate owns the structure
//! models, their capacity and ordering invariants, and the traversal
//! algorithms; rendering, menu flow, and log persistence live elsewhere and
//! talk to the engine through its public API.
//!
//! ## Operation pipeline
//!
//! ```text
//! User action → Structure operation → Audit record → Sink
//!                       ↓
//!            State / traversal result → Renderer
//! ```
//!
//! 1. [`structures`] — the five models: [`structures::stack::BoundedStack`],
//!    [`structures::queue::BoundedQueue`],
//!    [`structures::linked_list::LinkedList`],
//!    [`structures::bst::BinarySearchTree`], and
//!    [`structures::graph::DirectedGraph`].
//! 2. [`audit`] — the [`audit::AuditSink`] capability every structure holds a
//!    handle to, plus ready-made sinks (console, file, recording, null).
//! 3. [`error`] — [`error::OperationError`], the taxonomy of recoverable
//!    failures an operation can report.
//!
//! ## Contracts
//!
//! Bounded structures never exceed their construction-time capacity; a failed
//! operation never partially mutates state; successful mutations (and BST
//! searches, hit or miss) each emit exactly one audit record.  The engine is
//! single-threaded: one control thread drives one structure instance at a
//! time.

pub mod audit;
pub mod error;
pub mod structures;
