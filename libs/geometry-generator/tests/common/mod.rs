//! Helpers shared by the integration tests.

#![allow(dead_code)]

use approx::assert_relative_eq;
use glam::Vec3;
use geometry_generator::{
    create_box, create_cone, create_cylinder, create_diamond, create_geosphere, create_grid,
    create_pyramid, create_quad, create_sphere, create_triangular_prism, create_wedge, MeshData,
};

/// One mesh per builder, with moderate tessellation.
pub fn all_shapes() -> Vec<(&'static str, MeshData)> {
    vec![
        ("box", create_box(2.0, 3.0, 4.0, 1).unwrap()),
        ("sphere", create_sphere(1.5, 16, 8).unwrap()),
        ("geosphere", create_geosphere(2.0, 2).unwrap()),
        ("cylinder", create_cylinder(1.0, 0.5, 2.0, 12, 3).unwrap()),
        ("cone", create_cone(1.0, 2.0, 12, 3).unwrap()),
        ("wedge", create_wedge(1.0, 2.0, 3.0, 1).unwrap()),
        ("pyramid", create_pyramid(2.0, 0.0, 1.5, 1).unwrap()),
        ("frustum", create_pyramid(2.0, 1.0, 1.5, 0).unwrap()),
        ("triangular_prism", create_triangular_prism(1.0, 2.0, 3.0, 1).unwrap()),
        ("diamond", create_diamond(2.0, 1.0, 1).unwrap()),
        ("grid", create_grid(4.0, 2.0, 5, 6).unwrap()),
        ("quad", create_quad(-1.0, 1.0, 2.0, 2.0, 0.5).unwrap()),
    ]
}

/// Asserts that each non-degenerate triangle's edge cross product points the
/// same way as the normals stored at its corners.
pub fn assert_counter_clockwise(label: &str, mesh: &MeshData) {
    let vertices = mesh.vertices();
    for [a, b, c] in mesh.triangles() {
        let (va, vb, vc) = (&vertices[a as usize], &vertices[b as usize], &vertices[c as usize]);
        let face = (vb.position - va.position).cross(vc.position - va.position);
        if face.length() < 1.0e-7 {
            continue;
        }
        let stored = va.normal + vb.normal + vc.normal;
        assert!(
            face.dot(stored) > 0.0,
            "{label}: triangle [{a}, {b}, {c}] is wound clockwise"
        );
    }
}

/// Asserts that the normals of each non-degenerate triangle point away from
/// the mean vertex position. Only valid for convex solids.
pub fn assert_faces_away_from_center(label: &str, mesh: &MeshData) {
    let vertices = mesh.vertices();
    let center = vertices.iter().map(|v| v.position).sum::<Vec3>() / vertices.len() as f32;
    for [a, b, c] in mesh.triangles() {
        let (va, vb, vc) = (&vertices[a as usize], &vertices[b as usize], &vertices[c as usize]);
        let face = (vb.position - va.position).cross(vc.position - va.position);
        if face.length() < 1.0e-7 {
            continue;
        }
        let centroid = (va.position + vb.position + vc.position) / 3.0;
        let stored = va.normal + vb.normal + vc.normal;
        assert!(
            (centroid - center).dot(stored) > 0.0,
            "{label}: triangle [{a}, {b}, {c}] faces the interior"
        );
    }
}

/// Asserts every vertex lies `radius` away from the origin.
pub fn assert_on_sphere(mesh: &MeshData, radius: f32) {
    for v in mesh.vertices() {
        assert_relative_eq!(v.position.length(), radius, epsilon = 1.0e-4);
    }
}
