// Contract tests for the five structure models

use std::rc::Rc;

use structviz::audit::sinks::NullSink;
use structviz::audit::{AuditSink, StructureKind};
use structviz::error::OperationError;
use structviz::structures::{
    BinarySearchTree, BoundedQueue, BoundedStack, DirectedGraph, LinkedList,
};

fn sink() -> Rc<dyn AuditSink> {
    Rc::new(NullSink)
}

// === STACK ===

#[test]
fn test_stack_lifo_order() {
    let mut stack = BoundedStack::new(5, sink());
    stack.push("a").unwrap();
    stack.push("b").unwrap();
    stack.push("c").unwrap();

    assert_eq!(stack.pop().unwrap(), "c");
    assert_eq!(stack.pop().unwrap(), "b");
    assert_eq!(stack.pop().unwrap(), "a");
    assert!(stack.is_empty());
}

#[test]
fn test_stack_push_on_full_fails_without_mutation() {
    let mut stack = BoundedStack::new(2, sink());
    stack.push("a").unwrap();
    stack.push("b").unwrap();
    assert!(stack.is_full());

    let err = stack.push("c").unwrap_err();
    assert!(matches!(
        err,
        OperationError::CapacityExceeded {
            structure: StructureKind::Stack,
            ref value,
            capacity: 2,
        } if value == "c"
    ));

    // Contents untouched by the failed push
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.values(), vec!["a", "b"]);
}

#[test]
fn test_stack_pop_on_empty_fails() {
    let mut stack = BoundedStack::new(3, sink());
    let err = stack.pop().unwrap_err();
    assert_eq!(
        err,
        OperationError::Empty {
            structure: StructureKind::Stack
        }
    );
}

#[test]
fn test_stack_size_never_exceeds_capacity() {
    let mut stack = BoundedStack::new(3, sink());
    for value in ["a", "b", "c", "d", "e"] {
        let _ = stack.push(value);
        assert!(stack.len() <= stack.capacity());
    }
    assert_eq!(stack.len(), 3);
}

#[test]
fn test_stack_peek_does_not_remove() {
    let mut stack = BoundedStack::new(3, sink());
    stack.push("a").unwrap();
    assert_eq!(stack.peek(), Some("a"));
    assert_eq!(stack.len(), 1);
}

// === QUEUE ===

#[test]
fn test_queue_fifo_order() {
    let mut queue = BoundedQueue::new(4, sink());
    queue.enqueue("first").unwrap();
    queue.enqueue("second").unwrap();
    queue.enqueue("third").unwrap();

    assert_eq!(queue.dequeue().unwrap(), "first");
    assert_eq!(queue.dequeue().unwrap(), "second");
    assert_eq!(queue.dequeue().unwrap(), "third");
}

#[test]
fn test_queue_wraparound_preserves_fifo() {
    // Capacity 3, one dequeue, then refill past the seam of the buffer.
    let mut queue = BoundedQueue::new(3, sink());
    queue.enqueue("A").unwrap();
    queue.enqueue("B").unwrap();
    queue.enqueue("C").unwrap();
    assert_eq!(queue.dequeue().unwrap(), "A");
    queue.enqueue("D").unwrap();

    assert_eq!(queue.dequeue().unwrap(), "B");
    assert_eq!(queue.dequeue().unwrap(), "C");
    assert_eq!(queue.dequeue().unwrap(), "D");
    assert!(queue.is_empty());
}

#[test]
fn test_queue_many_wraparounds() {
    let mut queue = BoundedQueue::new(2, sink());
    let mut expected = Vec::new();
    let mut actual = Vec::new();
    for i in 0..10 {
        let value = format!("v{}", i);
        queue.enqueue(&value).unwrap();
        expected.push(value);
        actual.push(queue.dequeue().unwrap());
    }
    assert_eq!(actual, expected);
}

#[test]
fn test_queue_enqueue_on_full_fails_without_mutation() {
    let mut queue = BoundedQueue::new(2, sink());
    queue.enqueue("a").unwrap();
    queue.enqueue("b").unwrap();

    let err = queue.enqueue("c").unwrap_err();
    assert!(matches!(
        err,
        OperationError::CapacityExceeded {
            structure: StructureKind::Queue,
            ..
        }
    ));
    assert_eq!(queue.values(), vec!["a", "b"]);
}

#[test]
fn test_queue_dequeue_on_empty_fails() {
    let mut queue = BoundedQueue::new(2, sink());
    assert_eq!(
        queue.dequeue().unwrap_err(),
        OperationError::Empty {
            structure: StructureKind::Queue
        }
    );
}

// === LINKED LIST ===

#[test]
fn test_list_add_first_then_add_last() {
    let mut list = LinkedList::new(5, sink());
    list.add_first("x").unwrap();
    list.add_last("y").unwrap();
    assert_eq!(list.values(), vec!["x", "y"]);
}

#[test]
fn test_list_add_first_prepends() {
    let mut list = LinkedList::new(5, sink());
    list.add_first("b").unwrap();
    list.add_first("a").unwrap();
    assert_eq!(list.values(), vec!["a", "b"]);
}

#[test]
fn test_list_remove_first_and_last() {
    let mut list = LinkedList::new(5, sink());
    for value in ["a", "b", "c", "d"] {
        list.add_last(value).unwrap();
    }
    assert_eq!(list.remove_first().unwrap(), "a");
    assert_eq!(list.remove_last().unwrap(), "d");
    assert_eq!(list.values(), vec!["b", "c"]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_list_full_rejects_both_ends() {
    let mut list = LinkedList::new(2, sink());
    list.add_last("a").unwrap();
    list.add_last("b").unwrap();

    assert!(matches!(
        list.add_first("c").unwrap_err(),
        OperationError::CapacityExceeded {
            structure: StructureKind::LinkedList,
            ..
        }
    ));
    assert!(matches!(
        list.add_last("d").unwrap_err(),
        OperationError::CapacityExceeded {
            structure: StructureKind::LinkedList,
            ..
        }
    ));
    assert_eq!(list.values(), vec!["a", "b"]);
}

#[test]
fn test_list_remove_on_empty_fails() {
    let mut list = LinkedList::new(3, sink());
    assert!(list.remove_first().is_err());
    assert!(list.remove_last().is_err());
}

// === BINARY SEARCH TREE ===

#[test]
fn test_bst_reference_traversals() {
    // insert 5,3,8,1 into capacity 10
    let mut tree = BinarySearchTree::new(10, sink());
    for key in [5, 3, 8, 1] {
        tree.insert(key).unwrap();
    }

    assert_eq!(tree.in_order(), vec![1, 3, 5, 8]);
    assert_eq!(tree.pre_order(), vec![5, 3, 1, 8]);
    assert_eq!(tree.post_order(), vec![1, 3, 8, 5]);
}

#[test]
fn test_bst_in_order_is_sorted() {
    let mut tree = BinarySearchTree::new(20, sink());
    for key in [42, 7, 19, 88, 3, 56, 21, 64] {
        tree.insert(key).unwrap();
    }
    let keys = tree.in_order();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn test_bst_duplicate_insert_fails_and_leaves_tree_unchanged() {
    let mut tree = BinarySearchTree::new(10, sink());
    tree.insert(5).unwrap();
    tree.insert(3).unwrap();

    assert_eq!(
        tree.insert(5).unwrap_err(),
        OperationError::DuplicateKey { key: 5 }
    );
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.in_order(), vec![3, 5]);
}

#[test]
fn test_bst_insert_on_full_fails() {
    let mut tree = BinarySearchTree::new(2, sink());
    tree.insert(1).unwrap();
    tree.insert(2).unwrap();

    assert!(matches!(
        tree.insert(3).unwrap_err(),
        OperationError::CapacityExceeded {
            structure: StructureKind::Bst,
            capacity: 2,
            ..
        }
    ));
    // Full wins over duplicate: the capacity check runs first
    assert!(matches!(
        tree.insert(1).unwrap_err(),
        OperationError::CapacityExceeded { .. }
    ));
}

#[test]
fn test_bst_search_miss_returns_false() {
    let mut tree = BinarySearchTree::new(10, sink());
    tree.insert(5).unwrap();
    assert!(tree.search(5));
    assert!(!tree.search(99));
}

// === DIRECTED GRAPH ===

#[test]
fn test_graph_reference_bfs_and_dfs() {
    // A → B, A → C, B → C
    let mut graph = DirectedGraph::new(sink());
    graph.add_node("A").unwrap();
    graph.add_node("B").unwrap();
    graph.add_node("C").unwrap();
    graph.add_edge("A", "B").unwrap();
    graph.add_edge("A", "C").unwrap();
    graph.add_edge("B", "C").unwrap();

    assert_eq!(graph.bfs("A").unwrap(), vec!["A", "B", "C"]);
    assert_eq!(graph.dfs("A").unwrap(), vec!["A", "B", "C"]);
}

#[test]
fn test_graph_duplicate_node_fails() {
    let mut graph = DirectedGraph::new(sink());
    graph.add_node("A").unwrap();
    assert_eq!(
        graph.add_node("A").unwrap_err(),
        OperationError::DuplicateNode {
            id: "A".to_string()
        }
    );
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_graph_edge_with_unknown_endpoint_adds_nothing() {
    let mut graph = DirectedGraph::new(sink());
    graph.add_node("A").unwrap();

    assert_eq!(
        graph.add_edge("A", "missing").unwrap_err(),
        OperationError::UnknownNode {
            id: "missing".to_string()
        }
    );
    assert_eq!(
        graph.add_edge("missing", "A").unwrap_err(),
        OperationError::UnknownNode {
            id: "missing".to_string()
        }
    );
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.neighbors("A").unwrap().is_empty());
}

#[test]
fn test_graph_traversal_from_unknown_start_fails() {
    let graph = DirectedGraph::new(sink());
    assert!(graph.bfs("A").is_err());
    assert!(graph.dfs("A").is_err());
}

#[test]
fn test_graph_bfs_ignores_unreachable_nodes() {
    let mut graph = DirectedGraph::new(sink());
    graph.add_node("A").unwrap();
    graph.add_node("B").unwrap();
    graph.add_node("island").unwrap();
    graph.add_edge("A", "B").unwrap();

    assert_eq!(graph.bfs("A").unwrap(), vec!["A", "B"]);
    assert_eq!(graph.dfs("island").unwrap(), vec!["island"]);
}

#[test]
fn test_graph_dfs_with_cycle_terminates() {
    let mut graph = DirectedGraph::new(sink());
    graph.add_node("A").unwrap();
    graph.add_node("B").unwrap();
    graph.add_edge("A", "B").unwrap();
    graph.add_edge("B", "A").unwrap();

    assert_eq!(graph.dfs("A").unwrap(), vec!["A", "B"]);
    assert_eq!(graph.bfs("B").unwrap(), vec!["B", "A"]);
}

// === RESET ===

#[test]
fn test_reset_restores_construction_state() {
    let mut stack = BoundedStack::new(3, sink());
    stack.push("a").unwrap();
    stack.reset();
    assert!(stack.is_empty());
    assert_eq!(stack.capacity(), 3);
    stack.push("again").unwrap();
    assert_eq!(stack.pop().unwrap(), "again");

    let mut queue = BoundedQueue::new(3, sink());
    queue.enqueue("a").unwrap();
    queue.enqueue("b").unwrap();
    queue.dequeue().unwrap();
    queue.reset();
    assert!(queue.is_empty());
    queue.enqueue("fresh").unwrap();
    assert_eq!(queue.dequeue().unwrap(), "fresh");

    let mut list = LinkedList::new(3, sink());
    list.add_first("a").unwrap();
    list.reset();
    assert!(list.is_empty());
    assert_eq!(list.values(), Vec::<String>::new());

    let mut tree = BinarySearchTree::new(3, sink());
    tree.insert(1).unwrap();
    tree.reset();
    assert!(tree.is_empty());
    assert_eq!(tree.in_order(), Vec::<i32>::new());

    let mut graph = DirectedGraph::new(sink());
    graph.add_node("A").unwrap();
    graph.reset();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.contains_node("A"));
}
