//! Integration tests for weft-mesh.

use weft_math::{Color, Point, Vector};
use weft_mesh::{SurfaceShading, TriangleMesh};

fn make_single_triangle() -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(3, 1);
    let n = Vector::new(0.0, 0.0, 1.0);
    let a = mesh.push_vertex(Point::new(0.0, 0.0, 0.0), n, [0.0, 0.0]);
    let b = mesh.push_vertex(Point::new(1.0, 0.0, 0.0), n, [1.0, 0.0]);
    let c = mesh.push_vertex(Point::new(0.0, 1.0, 0.0), n, [0.0, 1.0]);
    mesh.push_triangle(a, b, c);
    mesh
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn position_and_uv_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
    assert_eq!(mesh.uv(2), [0.0, 1.0]);
    assert_eq!(mesh.normal(0), Vector::new(0.0, 0.0, 1.0));
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
}

#[test]
fn validate_ok() {
    assert!(make_single_triangle().validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate() {
    let mut mesh = make_single_triangle();
    mesh.indices = vec![0, 0, 1];
    assert!(mesh.validate().is_err());
}

#[test]
fn interleaved_positions_order() {
    let mesh = make_single_triangle();
    assert_eq!(
        mesh.interleaved_positions(),
        vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
    );
}

#[test]
fn serde_roundtrip_keeps_shading() {
    let mut mesh = make_single_triangle();
    mesh.shading = SurfaceShading {
        base_color: Color::new(0.6, 0.0, 0.0),
        specularity: 0.5,
    };
    let json = serde_json::to_string(&mesh).unwrap();
    let back: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(back.shading, mesh.shading);
    assert_eq!(back.indices, mesh.indices);
}
