//! # Shape Descriptors
//!
//! A serializable description of any mesh the crate can generate, so that
//! scenes can be stored as data and turned into meshes in one call.
//!
//! ```rust
//! use geometry_generator::Shape;
//!
//! let shape: Shape = serde_json::from_str(
//!     r#"{ "type": "box", "width": 1.0, "height": 2.0, "depth": 3.0 }"#,
//! ).unwrap();
//! assert_eq!(shape.name(), "box");
//! assert_eq!(shape.build().unwrap().triangle_count(), 12);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{clamp_subdivisions, GeneratorConfig};
use crate::error::GeometryResult;
use crate::mesh::MeshData;
use crate::primitives::{
    create_box, create_cone, create_cylinder, create_diamond, create_geosphere, create_grid,
    create_pyramid, create_quad, create_sphere, create_triangular_prism, create_wedge,
};

/// Parameters for one generated mesh, tagged by shape kind.
///
/// Subdivision counts default to zero when omitted.
#[allow(missing_docs)] // fields carry the builder's parameter names
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// See [`create_box`].
    Box {
        width: f32,
        height: f32,
        depth: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    /// See [`create_sphere`].
    Sphere {
        radius: f32,
        slices: u32,
        stacks: u32,
    },
    /// See [`create_geosphere`].
    Geosphere {
        radius: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    /// See [`create_cylinder`].
    Cylinder {
        bottom_radius: f32,
        top_radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
    },
    /// See [`create_cone`].
    Cone {
        bottom_radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
    },
    /// See [`create_wedge`].
    Wedge {
        width: f32,
        height: f32,
        depth: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    /// See [`create_pyramid`].
    Pyramid {
        bottom_side: f32,
        top_side: f32,
        height: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    /// See [`create_triangular_prism`].
    TriangularPrism {
        width: f32,
        height: f32,
        depth: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    /// See [`create_diamond`].
    Diamond {
        width: f32,
        height: f32,
        #[serde(default)]
        subdivisions: u32,
    },
    /// See [`create_grid`].
    Grid {
        width: f32,
        depth: f32,
        rows: u32,
        columns: u32,
    },
    /// See [`create_quad`].
    Quad {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        #[serde(default)]
        depth: f32,
    },
}

impl Shape {
    /// Shape label used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Box { .. } => "box",
            Shape::Sphere { .. } => "sphere",
            Shape::Geosphere { .. } => "geosphere",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Cone { .. } => "cone",
            Shape::Wedge { .. } => "wedge",
            Shape::Pyramid { .. } => "pyramid",
            Shape::TriangularPrism { .. } => "triangular_prism",
            Shape::Diamond { .. } => "diamond",
            Shape::Grid { .. } => "grid",
            Shape::Quad { .. } => "quad",
        }
    }

    /// Generates the mesh with the default limits.
    pub fn build(&self) -> GeometryResult<MeshData> {
        self.build_with(&GeneratorConfig::default())
    }

    /// Generates the mesh, first clamping subdivision counts to `config`.
    pub fn build_with(&self, config: &GeneratorConfig) -> GeometryResult<MeshData> {
        let name = self.name();
        let flat = |requested: u32| clamp_subdivisions(name, requested, config.max_subdivisions);

        match *self {
            Shape::Box {
                width,
                height,
                depth,
                subdivisions,
            } => create_box(width, height, depth, flat(subdivisions)),
            Shape::Sphere {
                radius,
                slices,
                stacks,
            } => create_sphere(radius, slices, stacks),
            Shape::Geosphere {
                radius,
                subdivisions,
            } => {
                let passes =
                    clamp_subdivisions(name, subdivisions, config.max_geosphere_subdivisions);
                create_geosphere(radius, passes)
            }
            Shape::Cylinder {
                bottom_radius,
                top_radius,
                height,
                slices,
                stacks,
            } => create_cylinder(bottom_radius, top_radius, height, slices, stacks),
            Shape::Cone {
                bottom_radius,
                height,
                slices,
                stacks,
            } => create_cone(bottom_radius, height, slices, stacks),
            Shape::Wedge {
                width,
                height,
                depth,
                subdivisions,
            } => create_wedge(height, width, depth, flat(subdivisions)),
            Shape::Pyramid {
                bottom_side,
                top_side,
                height,
                subdivisions,
            } => create_pyramid(bottom_side, top_side, height, flat(subdivisions)),
            Shape::TriangularPrism {
                width,
                height,
                depth,
                subdivisions,
            } => create_triangular_prism(height, width, depth, flat(subdivisions)),
            Shape::Diamond {
                width,
                height,
                subdivisions,
            } => create_diamond(width, height, flat(subdivisions)),
            Shape::Grid {
                width,
                depth,
                rows,
                columns,
            } => create_grid(width, depth, rows, columns),
            Shape::Quad {
                x,
                y,
                width,
                height,
                depth,
            } => create_quad(x, y, width, height, depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn test_deserialize_tagged_shapes() {
        let shapes: Vec<Shape> = serde_json::from_str(
            r#"[
                { "type": "geosphere", "radius": 1.0, "subdivisions": 2 },
                { "type": "triangular_prism", "width": 1.0, "height": 1.0, "depth": 2.0 },
                { "type": "quad", "x": -1.0, "y": 1.0, "width": 2.0, "height": 2.0 }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            shapes[0],
            Shape::Geosphere {
                radius: 1.0,
                subdivisions: 2
            }
        );
        assert_eq!(shapes[1].name(), "triangular_prism");
        assert!(matches!(shapes[1], Shape::TriangularPrism { subdivisions: 0, .. }));
        assert!(matches!(shapes[2], Shape::Quad { depth, .. } if depth == 0.0));
    }

    #[test]
    fn test_serialize_uses_type_tag() {
        let json = serde_json::to_value(Shape::Grid {
            width: 2.0,
            depth: 2.0,
            rows: 3,
            columns: 3,
        })
        .unwrap();
        assert_eq!(json["type"], "grid");
        assert_eq!(json["rows"], 3);
    }

    #[test]
    fn test_build_matches_direct_call() {
        let shape = Shape::Cylinder {
            bottom_radius: 1.0,
            top_radius: 0.5,
            height: 2.0,
            slices: 8,
            stacks: 2,
        };
        let direct = create_cylinder(1.0, 0.5, 2.0, 8, 2).unwrap();
        let built = shape.build().unwrap();
        assert_eq!(built.vertices(), direct.vertices());
        assert_eq!(built.indices32(), direct.indices32());
    }

    #[test]
    fn test_build_with_clamps_subdivisions() {
        let config = GeneratorConfig::new(1, 0).unwrap();

        let box_mesh = Shape::Box {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            subdivisions: 4,
        }
        .build_with(&config)
        .unwrap();
        assert_eq!(box_mesh.triangle_count(), 12 * 4);

        let ball = Shape::Geosphere {
            radius: 1.0,
            subdivisions: 3,
        }
        .build_with(&config)
        .unwrap();
        assert_eq!(ball.triangle_count(), 20);
    }

    #[test]
    fn test_build_propagates_errors() {
        let err = Shape::Sphere {
            radius: 1.0,
            slices: 2,
            stacks: 4,
        }
        .build()
        .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidTessellation { shape: "sphere", .. }));
    }
}
