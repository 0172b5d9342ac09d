//! Tests for the box primitive.
//!
//! These tests verify that the box primitive:
//! - Emits 24 vertices and 12 triangles before subdivision
//! - Keeps axis-aligned face normals through subdivision
//! - Winds every face outward
//! - Rejects invalid inputs

use super::*;
use crate::error::GeometryError;
use crate::test_support::{
    assert_faces_point_away_from_center, assert_indices_in_range, assert_orthonormal_tangents,
    assert_outward_winding,
};
use glam::Vec2;

#[test]
fn test_box_counts() {
    let mesh = create_box(1.0, 1.0, 1.0, 0).unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
}

/// A box with size [2, 3, 4] spans [-1, -1.5, -2] to [1, 1.5, 2].
#[test]
fn test_box_bounding_box() {
    let mesh = create_box(2.0, 3.0, 4.0, 0).unwrap();
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, Vec3::new(-1.0, -1.5, -2.0));
    assert_eq!(max, Vec3::new(1.0, 1.5, 2.0));
}

#[test]
fn test_box_winding_and_frames() {
    let mesh = create_box(2.0, 3.0, 4.0, 0).unwrap();
    assert_indices_in_range(&mesh);
    assert_outward_winding(&mesh);
    assert_faces_point_away_from_center(&mesh);
    assert_orthonormal_tangents(&mesh);
}

/// Face normals are exactly the axis unit vectors.
#[test]
fn test_box_normals_are_exact_axes() {
    let mesh = create_box(1.0, 2.0, 3.0, 2).unwrap();
    let axes = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    for v in mesh.vertices() {
        assert!(axes.contains(&v.normal), "unexpected normal {:?}", v.normal);
    }
}

#[test]
fn test_box_faces_cover_unit_texture_square() {
    let mesh = create_box(1.0, 1.0, 1.0, 0).unwrap();
    for face in mesh.vertices().chunks_exact(4) {
        let coords: Vec<Vec2> = face.iter().map(|v| v.tex_coord).collect();
        assert_eq!(
            coords,
            vec![
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 0.0)
            ]
        );
    }
}

#[test]
fn test_box_subdivision_counts() {
    let mesh = create_box(1.0, 1.0, 1.0, 1).unwrap();
    assert_eq!(mesh.triangle_count(), 48);
    assert_eq!(mesh.vertex_count(), 24 + 36);
}

/// Subdivided faces stay flat: every vertex remains on the box surface.
#[test]
fn test_box_subdivision_stays_flat() {
    let mesh = create_box(2.0, 2.0, 2.0, 3).unwrap();
    for v in mesh.vertices() {
        assert_eq!(v.position.abs().max_element(), 1.0);
    }
    assert_outward_winding(&mesh);
    assert_faces_point_away_from_center(&mesh);
}

#[test]
fn test_box_subdivision_is_clamped() {
    let capped = create_box(1.0, 1.0, 1.0, 6).unwrap();
    let requested = create_box(1.0, 1.0, 1.0, 50).unwrap();
    assert_eq!(requested.triangle_count(), 12 * 4usize.pow(6));
    assert_eq!(requested.triangle_count(), capped.triangle_count());
    assert!(requested.indices16().is_ok());
}

#[test]
fn test_box_rejects_zero_size() {
    let result = create_box(0.0, 1.0, 1.0, 0);
    assert!(matches!(
        result,
        Err(GeometryError::InvalidDimension { name: "width", .. })
    ));
}

#[test]
fn test_box_rejects_negative_and_nan() {
    assert!(create_box(1.0, -1.0, 1.0, 0).is_err());
    assert!(create_box(1.0, 1.0, f32::NAN, 0).is_err());
}
