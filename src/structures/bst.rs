//! Binary search tree implementation
//!
//! [`BinarySearchTree`] is a capacity-bounded BST over unique `i32` keys.
//! Each node owns its left and right subtrees independently, so the tree is
//! a ladder of `Option<Box<Node>>` links like the linked list, just with two
//! rungs per node.
//!
//! Supported operations are insert, search, and the three canonical
//! depth-first traversals (in-order, pre-order, post-order).  There is no
//! per-key deletion; `reset` discards the whole tree.
//!
//! # Ordering invariant
//!
//! For every node, all keys in its left subtree compare less than its key and
//! all keys in its right subtree compare greater; duplicates are rejected at
//! insert, so the in-order traversal always yields strictly ascending keys.

use crate::audit::{AuditSink, StructureKind};
use crate::error::OperationError;
use std::rc::Rc;

/// A single tree node owning both subtrees
#[derive(Debug)]
struct Node {
    key: i32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(key: i32) -> Box<Node> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// Capacity-bounded binary search tree over unique integer keys
pub struct BinarySearchTree {
    root: Option<Box<Node>>,
    size: usize,
    capacity: usize,
    sink: Rc<dyn AuditSink>,
}

impl BinarySearchTree {
    /// Create a tree holding at most `capacity` keys
    ///
    /// Emits `(BST, Create, "Capacity N")`.
    pub fn new(capacity: usize, sink: Rc<dyn AuditSink>) -> Self {
        sink.record(
            StructureKind::Bst,
            "Create",
            Some(&format!("Capacity {}", capacity)),
        );
        BinarySearchTree {
            root: None,
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
        self.root.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.size >= self.capacity
    }

    /// Insert a key as a new leaf
    ///
    /// The capacity check comes first: a full tree reports
    /// [`OperationError::CapacityExceeded`] even for a key it already holds.
    pub fn insert(&mut self, key: i32) -> Result<(), OperationError> {
        if self.is_full() {
            return Err(OperationError::CapacityExceeded {
                structure: StructureKind::Bst,
                value: key.to_string(),
                capacity: self.capacity,
            });
        }
        Self::insert_node(&mut self.root, key)?;
        self.size += 1;
        self.sink
            .record(StructureKind::Bst, "Insert", Some(&key.to_string()));
        Ok(())
    }

    fn insert_node(slot: &mut Option<Box<Node>>, key: i32) -> Result<(), OperationError> {
        match slot {
            None => {
                *slot = Some(Node::leaf(key));
                Ok(())
            }
            Some(node) if key < node.key => Self::insert_node(&mut node.left, key),
            Some(node) if key > node.key => Self::insert_node(&mut node.right, key),
            Some(_) => Err(OperationError::DuplicateKey { key }),
        }
    }

    /// Look a key up by comparison descent
    ///
    /// Always emits `(BST, Search, key)`, hit or miss; a miss returns
    /// `false` rather than an error.
    pub fn search(&self, key: i32) -> bool {
        self.sink
            .record(StructureKind::Bst, "Search", Some(&key.to_string()));
        Self::search_node(self.root.as_deref(), key)
    }

    fn search_node(node: Option<&Node>, key: i32) -> bool {
        match node {
            None => false,
            Some(n) if key == n.key => true,
            Some(n) if key < n.key => Self::search_node(n.left.as_deref(), key),
            Some(n) => Self::search_node(n.right.as_deref(), key),
        }
    }

    /// Keys in left-node-right order (strictly ascending)
    pub fn in_order(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.size);
        Self::walk_in_order(self.root.as_deref(), &mut keys);
        keys
    }

    fn walk_in_order(node: Option<&Node>, keys: &mut Vec<i32>) {
        if let Some(n) = node {
            Self::walk_in_order(n.left.as_deref(), keys);
            keys.push(n.key);
            Self::walk_in_order(n.right.as_deref(), keys);
        }
    }

    /// Keys in node-left-right order
    pub fn pre_order(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.size);
        Self::walk_pre_order(self.root.as_deref(), &mut keys);
        keys
    }

    fn walk_pre_order(node: Option<&Node>, keys: &mut Vec<i32>) {
        if let Some(n) = node {
            keys.push(n.key);
            Self::walk_pre_order(n.left.as_deref(), keys);
            Self::walk_pre_order(n.right.as_deref(), keys);
        }
    }

    /// Keys in left-right-node order
    pub fn post_order(&self) -> Vec<i32> {
        let mut keys = Vec::with_capacity(self.size);
        Self::walk_post_order(self.root.as_deref(), &mut keys);
        keys
    }

    fn walk_post_order(node: Option<&Node>, keys: &mut Vec<i32>) {
        if let Some(n) = node {
            Self::walk_post_order(n.left.as_deref(), keys);
            Self::walk_post_order(n.right.as_deref(), keys);
            keys.push(n.key);
        }
    }

    /// Discard the whole tree back to the construction-time empty state
    ///
    /// Emits `(BST, Reset, null)`.
    pub fn reset(&mut self) {
        self.root = None;
        self.size = 0;
        self.sink.record(StructureKind::Bst, "Reset", None);
    }
}
