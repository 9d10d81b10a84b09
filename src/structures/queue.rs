//! Bounded circular queue implementation
//!
//! [`BoundedQueue`] is a fixed-capacity FIFO over string payloads backed by a
//! circular buffer:
//!
//! ```text
//! buf  : fixed array of C slots
//! head : index of the next dequeue
//! tail : index of the next enqueue
//! size : current occupancy
//!
//! enqueue(x): buf[tail] = x,  tail = (tail + 1) mod C,  size += 1
//! dequeue():  x = buf[head],  head = (head + 1) mod C,  size -= 1
//! ```
//!
//! FIFO order holds across any number of wraparounds of the backing array;
//! this is the property that distinguishes it from a plain list-backed queue.

use crate::audit::{AuditSink, StructureKind};
use crate::error::OperationError;
use std::rc::Rc;

/// Fixed-capacity circular FIFO queue
pub struct BoundedQueue {
    buf: Vec<Option<String>>,
    head: usize,
    tail: usize,
    size: usize,
    capacity: usize,
    sink: Rc<dyn AuditSink>,
}

impl BoundedQueue {
    /// Create a queue holding at most `capacity` values
    ///
    /// Emits `(Queue, Create, "Capacity N")`.
    pub fn new(capacity: usize, sink: Rc<dyn AuditSink>) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        sink.record(
            StructureKind::Queue,
            "Create",
            Some(&format!("Capacity {}", capacity)),
        );
        BoundedQueue {
            buf,
            head: 0,
            tail: 0,
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

    /// Append a value at the tail
    pub fn enqueue(&mut self, value: &str) -> Result<(), OperationError> {
        if self.is_full() {
            return Err(OperationError::CapacityExceeded {
                structure: StructureKind::Queue,
                value: value.to_string(),
                capacity: self.capacity,
            });
        }
        self.buf[self.tail] = Some(value.to_string());
        self.tail = (self.tail + 1) % self.capacity;
        self.size += 1;
        self.sink
            .record(StructureKind::Queue, "Enqueue", Some(value));
        Ok(())
    }

    /// Remove and return the value at the head
    pub fn dequeue(&mut self) -> Result<String, OperationError> {
        if self.is_empty() {
            return Err(OperationError::Empty {
                structure: StructureKind::Queue,
            });
        }
        let value = self.buf[self.head].take().unwrap_or_default();
        self.head = (self.head + 1) % self.capacity;
        self.size -= 1;
        self.sink
            .record(StructureKind::Queue, "Dequeue", Some(&value));
        Ok(value)
    }

    /// Read the head value without removing it
    pub fn peek(&self) -> Option<&str> {
        if self.size == 0 {
            None
        } else {
            self.buf[self.head].as_deref()
        }
    }

    /// Current contents head-to-tail in logical FIFO order, for rendering
    pub fn values(&self) -> Vec<String> {
        (0..self.size)
            .filter_map(|i| self.buf[(self.head + i) % self.capacity].clone())
            .collect()
    }

    /// Clear back to the construction-time empty state
    ///
    /// Emits `(Queue, Reset, null)`.
    pub fn reset(&mut self) {
        for slot in &mut self.buf {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.size = 0;
        self.sink.record(StructureKind::Queue, "Reset", None);
    }
}
