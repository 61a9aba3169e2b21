//! Triangle meshes: a vertex pool, 1-based face index triples, and the
//! cumulative spin applied each tick.

use std::io::BufReader;
use std::path::Path;

use crate::error::MeshError;
use crate::math::vec3::Vec3;

/// A triangle as three indices into a mesh's vertex pool.
///
/// Indices are 1-based, matching OBJ files. Subtract one before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// The three 0-based vertex indices. Only valid on a validated mesh.
    #[inline]
    pub fn zero_based(&self) -> [usize; 3] {
        [
            self.a as usize - 1,
            self.b as usize - 1,
            self.c as usize - 1,
        ]
    }
}

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

pub const CUBE_FACES: [Face; 12] = [
    // Front
    Face::new(1, 2, 3),
    Face::new(1, 3, 4),
    // Right
    Face::new(4, 3, 5),
    Face::new(4, 5, 6),
    // Back
    Face::new(6, 5, 7),
    Face::new(6, 7, 8),
    // Left
    Face::new(8, 7, 2),
    Face::new(8, 2, 1),
    // Top
    Face::new(2, 7, 5),
    Face::new(2, 5, 3),
    // Bottom
    Face::new(6, 8, 1),
    Face::new(6, 1, 4),
];

/// Geometry plus its own animation state.
///
/// A `Mesh` can only be built through [`Mesh::new`] (or the loaders that call
/// it), so every face index is known to be in range once the pipeline sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    rotation: Vec3,
}

impl Mesh {
    /// Builds a mesh, rejecting any face index outside `[1, vertices.len()]`.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self, MeshError> {
        let vertex_count = vertices.len();
        for (face_index, face) in faces.iter().enumerate() {
            for index in [face.a, face.b, face.c] {
                if index == 0 || index as usize > vertex_count {
                    return Err(MeshError::FaceIndexOutOfRange {
                        face: face_index,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        Ok(Self {
            vertices,
            faces,
            rotation: Vec3::ZERO,
        })
    }

    /// The unit cube centred on the origin.
    pub fn cube() -> Self {
        Self {
            vertices: CUBE_VERTICES.to_vec(),
            faces: CUBE_FACES.to_vec(),
            rotation: Vec3::ZERO,
        }
    }

    /// Load every object in an OBJ file and merge them into one mesh.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, MeshError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &load_options())?;
        let mesh = Self::from_models(&models)?;
        log::info!(
            "loaded {}: {} vertices, {} faces",
            path.display(),
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Parse OBJ text that is already in memory. Material libraries are ignored.
    pub fn from_obj_str(source: &str) -> Result<Self, MeshError> {
        let mut reader = BufReader::new(source.as_bytes());
        let (models, _materials) =
            tobj::load_obj_buf(&mut reader, &load_options(), |_| Ok(Default::default()))?;
        Self::from_models(&models)
    }

    fn from_models(models: &[tobj::Model]) -> Result<Self, MeshError> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            // tobj indices are 0-based and local to each model
            let base = vertices.len() as u32 + 1;
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            faces.extend(
                model
                    .mesh
                    .indices
                    .chunks_exact(3)
                    .map(|i| Face::new(base + i[0], base + i[1], base + i[2])),
            );
        }

        if faces.is_empty() {
            return Err(MeshError::Empty);
        }
        Self::new(vertices, faces)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The face's three source vertices, in face order.
    #[inline]
    pub fn face_vertices(&self, face: &Face) -> [Vec3; 3] {
        face.zero_based().map(|i| self.vertices[i])
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// Adds one tick of spin. A zero step leaves the mesh still.
    pub fn advance_rotation(&mut self, step: Vec3) {
        self.rotation += step;
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}
