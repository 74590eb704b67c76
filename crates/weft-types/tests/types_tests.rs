//! Integration tests for weft-types.

use weft_types::{NodeId, SpringId, WeftError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn node_id_index() {
    let id = NodeId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn spring_id_index() {
    let id = SpringId::from(7);
    assert_eq!(id.index(), 7);
}

#[test]
fn ids_are_serializable() {
    let id = NodeId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: NodeId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = WeftError::InvalidConfig("time quantum must be positive".into());
    assert!(err.to_string().contains("time quantum"));
}

#[test]
fn out_of_bounds_display() {
    let err = WeftError::NodeOutOfBounds {
        column: 12,
        row: 3,
        columns: 10,
        rows: 10,
    };
    let msg = err.to_string();
    assert!(msg.contains("(12, 3)"));
    assert!(msg.contains("10x10"));
}
