//! Shared assertions for builder tests.

use ::config::constants::EPSILON_TOLERANCE;
use approx::assert_relative_eq;
use glam::Vec3;

use crate::mesh::MeshData;

/// Every index must address an existing vertex.
pub(crate) fn assert_indices_in_range(mesh: &MeshData) {
    assert!(mesh.validate().is_ok(), "index out of range: {:?}", mesh.validate());
}

/// Zero-area triangles carry no orientation.
fn is_degenerate(e1: Vec3, e2: Vec3) -> bool {
    e1.cross(e2).length_squared() <= f32::EPSILON * e1.length_squared() * e2.length_squared()
}

/// Every non-degenerate triangle's geometric normal agrees with the stored
/// normals at its corners.
///
/// Zero-area triangles (cone apex slivers) carry no orientation and are
/// skipped.
pub(crate) fn assert_outward_winding(mesh: &MeshData) {
    for (t, [a, b, c]) in mesh.triangles().enumerate() {
        let (va, vb, vc) = (mesh.vertex(a), mesh.vertex(b), mesh.vertex(c));
        let e1 = vb.position - va.position;
        let e2 = vc.position - va.position;
        if is_degenerate(e1, e2) {
            continue;
        }
        let face = e1.cross(e2);
        let stored = va.normal + vb.normal + vc.normal;
        assert!(
            face.dot(stored) > 0.0,
            "triangle {t} [{a}, {b}, {c}] winds against its normals: \
             face {face:?}, stored {stored:?}"
        );
    }
}

/// Every non-degenerate triangle's stored normals point away from the mean
/// of all vertex positions.
///
/// Only meaningful for convex solids, where that mean lies strictly inside.
/// Unlike [`assert_outward_winding`] this does not rederive anything from the
/// face's own cross product, so a face table listed inside out fails here
/// even when its normal was computed from the same corners.
pub(crate) fn assert_faces_point_away_from_center(mesh: &MeshData) {
    let center = mesh.vertices().iter().map(|v| v.position).sum::<Vec3>()
        / mesh.vertex_count() as f32;
    for (t, [a, b, c]) in mesh.triangles().enumerate() {
        let (va, vb, vc) = (mesh.vertex(a), mesh.vertex(b), mesh.vertex(c));
        let e1 = vb.position - va.position;
        let e2 = vc.position - va.position;
        if is_degenerate(e1, e2) {
            continue;
        }
        let centroid = (va.position + vb.position + vc.position) / 3.0;
        let stored = va.normal + vb.normal + vc.normal;
        assert!(
            (centroid - center).dot(stored) > 0.0,
            "triangle {t} [{a}, {b}, {c}] faces the interior: \
             centroid {centroid:?}, center {center:?}, stored {stored:?}"
        );
    }
}

/// Every stored normal has unit length.
pub(crate) fn assert_unit_normals(mesh: &MeshData) {
    for v in mesh.vertices() {
        assert_relative_eq!(v.normal.length(), 1.0, epsilon = EPSILON_TOLERANCE);
    }
}

/// Every tangent is unit length and perpendicular to its normal.
pub(crate) fn assert_orthonormal_tangents(mesh: &MeshData) {
    for v in mesh.vertices() {
        assert_relative_eq!(v.tangent.length(), 1.0, epsilon = EPSILON_TOLERANCE);
        assert!(
            v.tangent.dot(v.normal).abs() < 1e-4,
            "tangent {:?} not perpendicular to normal {:?}",
            v.tangent,
            v.normal
        );
    }
}
