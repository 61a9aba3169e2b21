//! Error types surfaced by mesh loading and frame snapshots.
//!
//! The per-tick pipeline itself never fails: degenerate geometry is skipped
//! and out-of-range pixels are dropped.

use thiserror::Error;

/// Reasons a mesh is rejected before it ever reaches the pipeline.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices (indices are 1-based)")]
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("OBJ parse error: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("mesh contains no geometry")]
    Empty,
}

/// Failure writing the frame buffer out as an image.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
