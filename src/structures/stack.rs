//! Bounded stack implementation
//!
//! [`BoundedStack`] is a fixed-capacity LIFO over string payloads, backed by
//! a fixed-length array of slots plus a size cursor.  Capacity is immutable
//! after construction; `push` on a full stack and `pop` on an empty stack
//! fail without touching the contents.

use crate::audit::{AuditSink, StructureKind};
use crate::error::OperationError;
use std::rc::Rc;

/// Fixed-capacity LIFO stack
pub struct BoundedStack {
    buf: Vec<Option<String>>,
    size: usize,
    capacity: usize,
    sink: Rc<dyn AuditSink>,
}

impl BoundedStack {
    /// Create a stack holding at most `capacity` values
    ///
    /// Emits `(Stack, Create, "Capacity N")`.
    pub fn new(capacity: usize, sink: Rc<dyn AuditSink>) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        sink.record(
            StructureKind::Stack,
            "Create",
            Some(&format!("Capacity {}", capacity)),
        );
        BoundedStack {
            buf,
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
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    /// Push a value on top of the stack
    pub fn push(&mut self, value: &str) -> Result<(), OperationError> {
        if self.is_full() {
            return Err(OperationError::CapacityExceeded {
                structure: StructureKind::Stack,
                value: value.to_string(),
                capacity: self.capacity,
            });
        }
        self.buf[self.size] = Some(value.to_string());
        self.size += 1;
        self.sink.record(StructureKind::Stack, "Push", Some(value));
        Ok(())
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Result<String, OperationError> {
        if self.is_empty() {
            return Err(OperationError::Empty {
                structure: StructureKind::Stack,
            });
        }
        self.size -= 1;
        // Slot is occupied whenever size says so
        let value = self.buf[self.size].take().unwrap_or_default();
        self.sink.record(StructureKind::Stack, "Pop", Some(&value));
        Ok(value)
    }

    /// Read the top value without removing it
    pub fn peek(&self) -> Option<&str> {
        if self.size == 0 {
            None
        } else {
            self.buf[self.size - 1].as_deref()
        }
    }

    /// Current contents bottom-to-top, for rendering
    pub fn values(&self) -> Vec<String> {
        self.buf[..self.size]
            .iter()
            .filter_map(|slot| slot.clone())
            .collect()
    }

    /// Clear back to the construction-time empty state
    ///
    /// Emits `(Stack, Reset, null)`.
    pub fn reset(&mut self) {
        for slot in &mut self.buf {
            *slot = None;
        }
        self.size = 0;
        self.sink.record(StructureKind::Stack, "Reset", None);
    }
}
