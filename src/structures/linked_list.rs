//! Singly linked list implementation
//!
//! [`LinkedList`] is a capacity-bounded singly linked sequence of string
//! payloads with insertion and removal at both ends.  Each node exclusively
//! owns its successor, so the chain is a plain `Option<Box<Node>>` ladder and
//! dropping the head drops everything behind it.
//!
//! No tail pointer is kept: `add_last` and `remove_last` walk the chain.
//! That O(n) walk mirrors how the structure is taught and rendered (the
//! animation steps node by node), so it stays.

use crate::audit::{AuditSink, StructureKind};
use crate::error::OperationError;
use std::rc::Rc;

/// A single list node owning its successor
#[derive(Debug)]
struct Node {
    value: String,
    next: Option<Box<Node>>,
}

/// Capacity-bounded singly linked list
pub struct LinkedList {
    head: Option<Box<Node>>,
    size: usize,
    capacity: usize,
    sink: Rc<dyn AuditSink>,
}

impl LinkedList {
    /// Create a list holding at most `capacity` values
    ///
    /// Emits `(LinkedList, Create, "Capacity N")`.
    pub fn new(capacity: usize, sink: Rc<dyn AuditSink>) -> Self {
        sink.record(
            StructureKind::LinkedList,
            "Create",
            Some(&format!("Capacity {}", capacity)),
        );
        LinkedList {
            head: None,
            size: 0,
            capacity,
            sink,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.size >= self.capacity
    }

    /// Insert a value at the head in O(1)
    pub fn add_first(&mut self, value: &str) -> Result<(), OperationError> {
        if self.is_full() {
            return Err(self.capacity_error(value));
        }
        self.head = Some(Box::new(Node {
            value: value.to_string(),
            next: self.head.take(),
        }));
        self.size += 1;
        self.sink
            .record(StructureKind::LinkedList, "AddFirst", Some(value));
        Ok(())
    }

    /// Insert a value at the tail, walking the chain to reach it
    pub fn add_last(&mut self, value: &str) -> Result<(), OperationError> {
        if self.is_full() {
            return Err(self.capacity_error(value));
        }
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node {
            value: value.to_string(),
            next: None,
        }));
        self.size += 1;
        self.sink
            .record(StructureKind::LinkedList, "AddLast", Some(value));
        Ok(())
    }

    /// Remove and return the head value
    pub fn remove_first(&mut self) -> Result<String, OperationError> {
        match self.head.take() {
            Some(node) => {
                self.head = node.next;
                self.size -= 1;
                self.sink
                    .record(StructureKind::LinkedList, "RemoveFirst", Some(&node.value));
                Ok(node.value)
            }
            None => Err(OperationError::Empty {
                structure: StructureKind::LinkedList,
            }),
        }
    }

    /// Remove and return the tail value, walking to the second-to-last node
    ///
    /// On a single-element list this removes the head.
    pub fn remove_last(&mut self) -> Result<String, OperationError> {
        if self.head.is_none() {
            return Err(OperationError::Empty {
                structure: StructureKind::LinkedList,
            });
        }
        // Walk until the cursor holds the link owning the last node, then
        // sever it.  A single-element list leaves the cursor at the head.
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.next.is_some()) {
            cursor = &mut cursor.as_mut().expect("guarded by loop condition").next;
        }
        let node = cursor.take().ok_or(OperationError::Empty {
            structure: StructureKind::LinkedList,
        })?;
        self.size -= 1;
        self.sink
            .record(StructureKind::LinkedList, "RemoveLast", Some(&node.value));
        Ok(node.value)
    }

    /// Iterate over payloads head-to-tail
    ///
    /// The iterator borrows the list; call again for a fresh pass.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            cursor: self.head.as_deref(),
        }
    }

    /// Current payloads head-to-tail as an owned snapshot, for rendering
    pub fn values(&self) -> Vec<String> {
        self.iter().map(|v| v.to_string()).collect()
    }

    /// Drop the whole chain back to the construction-time empty state
    ///
    /// Emits `(LinkedList, Reset, null)`.
    pub fn reset(&mut self) {
        self.head = None;
        self.size = 0;
        self.sink.record(StructureKind::LinkedList, "Reset", None);
    }

    fn capacity_error(&self, value: &str) -> OperationError {
        OperationError::CapacityExceeded {
            structure: StructureKind::LinkedList,
            value: value.to_string(),
            capacity: self.capacity,
        }
    }
}

/// Borrowing head-to-tail iterator over list payloads
pub struct Iter<'a> {
    cursor: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(&node.value)
    }
}
