//! Model space to screen space.
//!
//! For every face of every mesh this rotates the source vertices, pushes them
//! in front of the camera, optionally drops faces pointing away from the
//! viewer, and projects what is left onto the screen as [`Triangle`]s.

use crate::camera::Camera;
use crate::colors;
use crate::config::RenderConfig;
use crate::context::FrameContext;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::render::Triangle;

/// What happened to the faces seen during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub emitted: usize,
    pub culled: usize,
    /// Faces dropped because a vertex sat on the camera plane (`z == 0`).
    pub degenerate: usize,
}

/// Places one source vertex in camera space.
///
/// Two separate stages: the mesh spin turns the source vertex in model space
/// (x, then y, then z), then the camera orbit turns that world position about
/// the mesh centre the same way. Both are plain rotations, so the mesh keeps
/// its shape. The result is pushed `forward_offset` along +z.
pub fn transform_vertex(
    vertex: Vec3,
    mesh_rotation: Vec3,
    camera_rotation: Vec3,
    forward_offset: f32,
) -> Vec3 {
    world_to_view(model_to_world(vertex, mesh_rotation), camera_rotation, forward_offset)
}

/// Applies a mesh's spin to one of its source vertices.
#[inline]
pub fn model_to_world(vertex: Vec3, mesh_rotation: Vec3) -> Vec3 {
    vertex.rotate_xyz(mesh_rotation)
}

/// Orbits a world position by the camera rotation, then moves it in front of the camera.
#[inline]
pub fn world_to_view(vertex: Vec3, camera_rotation: Vec3, forward_offset: f32) -> Vec3 {
    let mut out = vertex.rotate_xyz(camera_rotation);
    out.z += forward_offset;
    out
}

/// Unnormalized face normal, `(v1 - v0) x (v2 - v0)`.
pub fn face_normal(vertices: &[Vec3; 3]) -> Vec3 {
    let ab = vertices[1] - vertices[0];
    let ac = vertices[2] - vertices[0];
    ab.cross(ac)
}

/// True when the face points away from `camera_position`.
///
/// Faces with `dot(normal, camera_ray) == 0` (edge-on) are kept.
pub fn is_backface(vertices: &[Vec3; 3], camera_position: Vec3) -> bool {
    let camera_ray = camera_position - vertices[0];
    face_normal(vertices).dot(camera_ray) < 0.0
}

/// Perspective divide, before the screen-centre offset is applied.
///
/// Returns `None` for a vertex on the camera plane, where the divide is undefined.
pub fn project(vertex: Vec3, fov_factor: f32) -> Option<Vec2> {
    if vertex.z == 0.0 {
        return None;
    }
    Some(Vec2::new(
        fov_factor * vertex.x / vertex.z,
        fov_factor * vertex.y / vertex.z,
    ))
}

/// How camera-space points are flattened onto the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Projection {
    /// `fov * x / z`. Far things shrink.
    #[default]
    Perspective,
    /// `fov * x`, depth ignored. Never rejects a point.
    Orthographic,
}

impl Projection {
    pub fn project(self, vertex: Vec3, fov_factor: f32) -> Option<Vec2> {
        match self {
            Projection::Perspective => project(vertex, fov_factor),
            Projection::Orthographic => Some(Vec2::new(fov_factor * vertex.x, fov_factor * vertex.y)),
        }
    }
}

/// Mean z of the camera-space vertices.
pub fn average_depth(vertices: &[Vec3; 3]) -> f32 {
    (vertices[0].z + vertices[1].z + vertices[2].z) / 3.0
}

/// A stable color for the `index`-th face of a mesh.
///
/// Walks a red/blue ramp in eight steps so neighbouring faces never match.
pub fn face_color(index: usize) -> u32 {
    const STEPS: usize = 8;
    const STEP: usize = 0xC0 / STEPS;
    let level = (0x40 + (index % STEPS) * STEP) as u8;
    colors::rgba(level, 0x30, 0xFF - level, 0xFF)
}

/// Builds the tick's triangle list into `out`, which is cleared first.
pub fn build_triangles(
    meshes: &[Mesh],
    context: &FrameContext,
    config: &RenderConfig,
    out: &mut Vec<Triangle>,
) -> TickStats {
    out.clear();
    let mut stats = TickStats::default();
    let camera = &context.camera;
    let culling = context.flags.culls_backfaces();
    let center = Vec2::new(config.width as f32 / 2.0, config.height as f32 / 2.0);

    for mesh in meshes {
        let mesh_rotation = mesh.rotation();
        for (index, face) in mesh.faces().iter().enumerate() {
            let transformed = mesh.face_vertices(face).map(|v| {
                transform_vertex(v, mesh_rotation, camera.rotation, config.forward_offset)
            });

            if culling && is_backface(&transformed, camera.position) {
                stats.culled += 1;
                continue;
            }

            let Some(points) = project_face(&transformed, camera, config.projection, center) else {
                log::debug!("face {index} touches the camera plane, skipped");
                stats.degenerate += 1;
                continue;
            };

            out.push(Triangle::new(
                points,
                face_color(index),
                average_depth(&transformed),
            ));
            stats.emitted += 1;
        }
    }

    stats
}

fn project_face(
    vertices: &[Vec3; 3],
    camera: &Camera,
    projection: Projection,
    center: Vec2,
) -> Option<[Vec2; 3]> {
    let mut points = [Vec2::ZERO; 3];
    for (point, vertex) in points.iter_mut().zip(vertices) {
        *point = projection.project(*vertex, camera.fov_factor)? + center;
    }
    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::DisplayFlags;
    use crate::mesh::{Face, CUBE_FACES};
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn config() -> RenderConfig {
        RenderConfig::default().with_size(800, 600)
    }

    fn context(flags: DisplayFlags) -> FrameContext {
        FrameContext::new(Camera::default(), flags)
    }

    fn transformed_cube_faces(mesh: &Mesh, camera: &Camera) -> Vec<[Vec3; 3]> {
        mesh.faces()
            .iter()
            .map(|f| {
                mesh.face_vertices(f)
                    .map(|v| transform_vertex(v, mesh.rotation(), camera.rotation, 5.0))
            })
            .collect()
    }

    #[test]
    fn projection_divides_by_depth() {
        for fov in [1.0, 3.5, 640.0, 1000.0] {
            let p = project(Vec3::new(1.0, 0.0, fov), fov).unwrap();
            assert_eq!(p.x, 1.0);
            assert_eq!(p.y, 0.0);
        }
        let p = project(Vec3::new(2.0, -4.0, 4.0), 640.0).unwrap();
        assert_relative_eq!(p.x, 320.0);
        assert_relative_eq!(p.y, -640.0);
    }

    #[test]
    fn projection_rejects_camera_plane() {
        assert_eq!(project(Vec3::new(1.0, 1.0, 0.0), 640.0), None);
    }

    #[test]
    fn orthographic_ignores_depth() {
        let near = Projection::Orthographic.project(Vec3::new(0.5, -0.25, 1.0), 640.0);
        let far = Projection::Orthographic.project(Vec3::new(0.5, -0.25, 9.0), 640.0);
        assert_eq!(near, far);
        assert_eq!(near, Some(Vec2::new(320.0, -160.0)));
        // the camera plane is no problem without a divide
        assert!(Projection::Orthographic.project(Vec3::new(1.0, 1.0, 0.0), 640.0).is_some());
        assert_eq!(Projection::Perspective.project(Vec3::new(1.0, 1.0, 0.0), 640.0), None);
    }

    #[test]
    fn orthographic_config_is_used_by_the_pipeline() {
        let mesh = Mesh::cube();
        let mut out = Vec::new();
        let config = config().with_projection(Projection::Orthographic);
        build_triangles(
            std::slice::from_ref(&mesh),
            &context(DisplayFlags::default()),
            &config,
            &mut out,
        );
        // vertex (-1, -1, -1): 640 * -1 from centre, whatever its depth
        let first = out[0].points[0];
        assert_relative_eq!(first.x, 400.0 - 640.0);
        assert_relative_eq!(first.y, 300.0 - 640.0);
    }

    #[test]
    fn transform_without_rotation_only_translates() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert_eq!(transform_vertex(v, Vec3::ZERO, Vec3::ZERO, 5.0), Vec3::new(1.0, -2.0, 5.5));
    }

    #[test]
    fn camera_orbit_is_applied_after_mesh_spin() {
        let v = Vec3::new(1.0, 0.0, 0.0);
        let mesh_rotation = Vec3::new(0.0, 0.0, FRAC_PI_2);
        let camera_rotation = Vec3::new(0.0, FRAC_PI_2, 0.0);

        let mesh_only = transform_vertex(v, mesh_rotation, Vec3::ZERO, 0.0);
        let camera_only = transform_vertex(v, Vec3::ZERO, camera_rotation, 0.0);
        let both = transform_vertex(v, mesh_rotation, camera_rotation, 0.0);

        assert_relative_eq!(mesh_only.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(camera_only.z, -1.0, epsilon = 1e-6);
        // +y lies on the y axis, so the orbit leaves it alone
        assert_relative_eq!(both.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(both.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(both.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn combined_rotation_keeps_mesh_shape() {
        let mesh = Mesh::cube();
        let mesh_rotation = Vec3::new(0.3, -1.2, FRAC_PI_2);
        let camera_rotation = Vec3::new(-0.7, FRAC_PI_2, 0.4);
        let place = |v: Vec3| transform_vertex(v, mesh_rotation, camera_rotation, 5.0);

        let corner = Vec3::ONE;
        assert_relative_eq!((place(corner) - Vec3::new(0.0, 0.0, 5.0)).len(), corner.len(), epsilon = 1e-5);
        for face in mesh.faces() {
            let source = mesh.face_vertices(face);
            let placed = source.map(place);
            for (a, b) in [(0, 1), (1, 2), (2, 0)] {
                assert_relative_eq!(
                    (placed[a] - placed[b]).len(),
                    (source[a] - source[b]).len(),
                    epsilon = 1e-5
                );
            }
        }
    }

    #[test]
    fn kept_faces_face_the_camera() {
        let mut mesh = Mesh::cube();
        let camera = Camera::default();
        for step in 0..40 {
            mesh.set_rotation(Vec3::new(0.37, 0.21, 0.11) * step as f32);
            for vertices in transformed_cube_faces(&mesh, &camera) {
                let dot = face_normal(&vertices).dot(camera.position - vertices[0]);
                assert_eq!(is_backface(&vertices, camera.position), dot < 0.0);
            }
        }
    }

    #[test]
    fn unrotated_cube_shows_only_its_front() {
        let mesh = Mesh::cube();
        let mut out = Vec::new();
        let stats = build_triangles(
            std::slice::from_ref(&mesh),
            &context(DisplayFlags::default()),
            &config(),
            &mut out,
        );
        assert_eq!(stats, TickStats { emitted: 2, culled: 10, degenerate: 0 });
        assert_eq!(out.len(), 2);
        for triangle in &out {
            assert_relative_eq!(triangle.avg_depth, 4.0);
        }
    }

    #[test]
    fn culling_off_emits_every_face() {
        let mesh = Mesh::cube();
        let mut out = Vec::new();
        let stats = build_triangles(
            std::slice::from_ref(&mesh),
            &context(DisplayFlags::POLYGON_FILL),
            &config(),
            &mut out,
        );
        assert_eq!(stats.emitted, CUBE_FACES.len());
        assert_eq!(stats.culled, 0);
    }

    #[test]
    fn retained_faces_have_non_negative_dot() {
        let mut mesh = Mesh::cube();
        mesh.set_rotation(Vec3::new(0.4, 1.3, -0.2));
        let ctx = context(DisplayFlags::BACKFACE_CULLING);
        let mut out = Vec::new();
        let stats = build_triangles(std::slice::from_ref(&mesh), &ctx, &config(), &mut out);

        let facing = transformed_cube_faces(&mesh, &ctx.camera)
            .iter()
            .filter(|v| face_normal(v).dot(ctx.camera.position - v[0]) >= 0.0)
            .count();
        assert_eq!(stats.emitted, facing);
        assert_eq!(stats.culled, CUBE_FACES.len() - facing);
    }

    #[test]
    fn front_face_is_centred_on_screen() {
        let mesh = Mesh::cube();
        let mut out = Vec::new();
        build_triangles(
            std::slice::from_ref(&mesh),
            &context(DisplayFlags::default()),
            &config(),
            &mut out,
        );
        // vertex (-1, -1, -1) lands at z = 4: 640 * -1 / 4 = -160 from centre
        let first = out[0].points[0];
        assert_relative_eq!(first.x, 400.0 - 160.0);
        assert_relative_eq!(first.y, 300.0 - 160.0);
    }

    #[test]
    fn face_on_camera_plane_is_skipped() {
        let vertices = vec![
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        let faces = vec![Face::new(1, 2, 3), Face::new(2, 4, 3)];
        let mesh = Mesh::new(vertices, faces).unwrap();
        let mut out = Vec::new();
        let stats = build_triangles(
            std::slice::from_ref(&mesh),
            &context(DisplayFlags::POLYGON_FILL),
            &config(),
            &mut out,
        );
        assert_eq!(stats.degenerate, 1);
        assert_eq!(stats.emitted, 1);
        assert!(out.iter().all(|t| t.points.iter().all(|p| p.x.is_finite())));
    }

    #[test]
    fn adjacent_faces_get_different_colors() {
        for i in 0..32 {
            assert_ne!(face_color(i), face_color(i + 1));
            assert_eq!(face_color(i) & 0xFF, 0xFF);
        }
        assert_eq!(face_color(3), face_color(3));
    }

    #[test]
    fn output_list_is_rebuilt_each_call() {
        let mesh = Mesh::cube();
        let mut out = Vec::new();
        let ctx = context(DisplayFlags::default());
        build_triangles(std::slice::from_ref(&mesh), &ctx, &config(), &mut out);
        build_triangles(std::slice::from_ref(&mesh), &ctx, &config(), &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn half_turn_camera_orbit_shows_back() {
        let mesh = Mesh::cube();
        let mut ctx = context(DisplayFlags::default());
        ctx.camera.rotation = Vec3::new(0.0, PI, 0.0);
        let mut out = Vec::new();
        let stats = build_triangles(std::slice::from_ref(&mesh), &ctx, &config(), &mut out);
        assert_eq!(stats.emitted, 2);
        // back faces are indices 4 and 5 in the cube
        assert_eq!(out[0].color, face_color(4));
        assert_eq!(out[1].color, face_color(5));
    }
}
