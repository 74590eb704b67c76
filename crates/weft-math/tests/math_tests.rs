//! Integration tests for weft-math.

use weft_math::{Color, Point, Vector};

// ─── Vector Tests ─────────────────────────────────────────────

#[test]
fn add_and_subtract() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(0.5, -1.0, 2.0);
    assert_eq!(a + b, Vector::new(1.5, 1.0, 5.0));
    assert_eq!(a - b, Vector::new(0.5, 3.0, 1.0));
}

#[test]
fn scale_and_divide() {
    let v = Vector::new(2.0, -4.0, 6.0);
    assert_eq!(v * 0.5, Vector::new(1.0, -2.0, 3.0));
    assert_eq!(v / 2.0, Vector::new(1.0, -2.0, 3.0));
}

#[test]
fn normalized_has_unit_length() {
    let v = Vector::new(0.0, -3.0, 4.0).normalized();
    assert!((v.magnitude() - 1.0).abs() < 1e-6);
    assert!((v.y() + 0.6).abs() < 1e-6);
}

#[test]
fn negation() {
    assert_eq!(-Vector::new(1.0, 0.0, -2.0), Vector::new(-1.0, 0.0, 2.0));
}

// ─── Point Tests ──────────────────────────────────────────────

#[test]
fn point_distance() {
    let a = Point::new(0.0, 0.0, 0.0);
    let b = Point::new(2.0, 3.0, 6.0);
    assert!((a.distance(b) - 7.0).abs() < 1e-6);
    assert!((b.distance(a) - 7.0).abs() < 1e-6);
}

#[test]
fn point_plus_vector() {
    let p = Point::new(1.0, 1.0, 1.0) + Vector::new(0.0, -1.0, 2.0);
    assert_eq!(p, Point::new(1.0, 0.0, 3.0));
}

#[test]
fn point_difference_is_vector() {
    let v: Vector = Point::new(3.0, 2.0, 1.0) - Point::new(1.0, 1.0, 1.0);
    assert_eq!(v, Vector::new(2.0, 1.0, 0.0));
}

#[test]
fn primitives_are_serializable() {
    let v = Vector::new(1.0, 2.0, 3.0);
    let json = serde_json::to_string(&v).unwrap();
    let back: Vector = serde_json::from_str(&json).unwrap();
    assert_eq!(v, back);

    let c: Color = serde_json::from_str(r#"{"r":0.7,"g":0.7,"b":0.3}"#).unwrap();
    assert_eq!(c, Color::new(0.7, 0.7, 0.3));
}
