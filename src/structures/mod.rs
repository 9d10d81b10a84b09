//! The five structure models
//!
//! This module provides the engine's data structures:
//! - [`stack`]: [`stack::BoundedStack`], fixed-capacity LIFO
//! - [`queue`]: [`queue::BoundedQueue`], fixed-capacity circular FIFO
//! - [`linked_list`]: [`linked_list::LinkedList`], capacity-bounded singly
//!   linked chain
//! - [`bst`]: [`bst::BinarySearchTree`], capacity-bounded tree over unique
//!   integer keys
//! - [`graph`]: [`graph::DirectedGraph`], unbounded directed graph over
//!   string-identified nodes
//!
//! # Shared contracts
//!
//! Each structure is independent of the others; all five depend only on the
//! [`crate::audit::AuditSink`] handle passed at construction.  Construction
//! is itself audited (`Create`, with `"Capacity N"` for the bounded four).
//! Bounded structures hold `size <= capacity` at all times, `is_full()` iff
//! `size == capacity`, `is_empty()` iff `size == 0`.  A failed operation
//! leaves the structure untouched and emits nothing.

pub mod bst;
pub mod graph;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use bst::BinarySearchTree;
pub use graph::DirectedGraph;
pub use linked_list::LinkedList;
pub use queue::BoundedQueue;
pub use stack::BoundedStack;
