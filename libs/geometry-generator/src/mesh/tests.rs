//! Tests for the mesh buffer.

use super::*;
use glam::Vec2;

fn vertex_at(x: f32, y: f32, z: f32) -> Vertex {
    Vertex::new(Vec3::new(x, y, z), Vec3::Z, Vec3::X, Vec2::ZERO)
}

fn triangle_mesh() -> MeshData {
    let mut mesh = MeshData::new();
    mesh.add_vertex(vertex_at(0.0, 0.0, 0.0));
    mesh.add_vertex(vertex_at(1.0, 0.0, 0.0));
    mesh.add_vertex(vertex_at(0.0, 1.0, 0.0));
    mesh.add_triangle(0, 1, 2);
    mesh
}

#[test]
fn test_mesh_new() {
    let mesh = MeshData::new();
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.triangle_count(), 0);
    assert_eq!(mesh.bounding_box(), (Vec3::ZERO, Vec3::ZERO));
}

#[test]
fn test_mesh_add_vertex_returns_index() {
    let mut mesh = MeshData::new();
    assert_eq!(mesh.add_vertex(vertex_at(1.0, 2.0, 3.0)), 0);
    assert_eq!(mesh.add_vertex(vertex_at(4.0, 5.0, 6.0)), 1);
    assert_eq!(mesh.vertex(1).position, Vec3::new(4.0, 5.0, 6.0));
}

#[test]
fn test_mesh_triangles_iterator() {
    let mut mesh = triangle_mesh();
    mesh.add_vertex(vertex_at(1.0, 1.0, 0.0));
    mesh.add_triangle(2, 1, 3);
    let triangles: Vec<[u32; 3]> = mesh.triangles().collect();
    assert_eq!(triangles, vec![[0, 1, 2], [2, 1, 3]]);
    assert_eq!(mesh.indices32(), &[0, 1, 2, 2, 1, 3]);
}

#[test]
fn test_indices16_matches_narrowed_indices32() {
    let mesh = triangle_mesh();
    let narrow = mesh.indices16().unwrap();
    let expected: Vec<u16> = mesh.indices32().iter().map(|&i| i as u16).collect();
    assert_eq!(narrow, expected.as_slice());
}

/// Second request hands back the very same cached buffer.
#[test]
fn test_indices16_is_cached() {
    let mesh = triangle_mesh();
    let first = mesh.indices16().unwrap().as_ptr();
    let second = mesh.indices16().unwrap().as_ptr();
    assert_eq!(first, second);
}

#[test]
fn test_indices16_rejects_wide_index() {
    let mut mesh = triangle_mesh();
    mesh.add_triangle(0, 1, 70_000);
    assert_eq!(
        mesh.indices16(),
        Err(GeometryError::IndexOverflow {
            index: 70_000,
            max: 65_535
        })
    );
}

#[test]
fn test_indices16_accepts_boundary_index() {
    let mut mesh = MeshData::new();
    mesh.add_triangle(0, 65_535, 1);
    assert_eq!(mesh.indices16().unwrap(), &[0, 65_535, 1]);
}

#[test]
fn test_set_indices_drops_cached_view() {
    let mut mesh = triangle_mesh();
    assert_eq!(mesh.indices16().unwrap(), &[0, 1, 2]);
    mesh.set_indices(vec![2, 1, 0]);
    assert_eq!(mesh.indices16().unwrap(), &[2, 1, 0]);
}

#[test]
fn test_indices16_shared_across_threads() {
    let mesh = triangle_mesh();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| mesh.indices16().map(|s| s.to_vec())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), vec![0, 1, 2]);
        }
    });
}

#[test]
fn test_mesh_validate_valid() {
    assert!(triangle_mesh().validate().is_ok());
}

#[test]
fn test_mesh_validate_invalid_index() {
    let mut mesh = triangle_mesh();
    mesh.add_triangle(0, 1, 3);
    assert_eq!(
        mesh.validate(),
        Err(GeometryError::InvalidIndex {
            index: 3,
            vertex_count: 3
        })
    );
}

#[test]
fn test_mesh_bounding_box() {
    let mut mesh = MeshData::new();
    mesh.add_vertex(vertex_at(-1.0, -2.0, -3.0));
    mesh.add_vertex(vertex_at(4.0, 5.0, 6.0));
    mesh.add_vertex(vertex_at(0.0, 0.0, 0.0));
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(max, Vec3::new(4.0, 5.0, 6.0));
}

#[test]
fn test_interleaved_layout() {
    let mut mesh = MeshData::new();
    mesh.add_vertex(Vertex::from_components(
        1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.25, 0.75,
    ));
    assert_eq!(
        mesh.interleaved_f32(),
        vec![1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.25, 0.75]
    );
}

#[test]
fn test_mirror_y_reflects_and_rewinds() {
    let mut mesh = triangle_mesh();
    mesh.mirror_y();
    assert_eq!(mesh.indices32(), &[0, 2, 1]);
    assert_eq!(mesh.vertex(2).position, Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(mesh.vertex(0).normal, Vec3::Z);
}
