//! CPU-side vertex buffers produced by the OBJ loaders.
//!
//! Both buffers are fully expanded: every triangle corner is written out in
//! draw order, nothing is shared through an index list. That trades memory
//! for a single-copy GPU upload and a plain non-indexed draw.

/// Position-only buffer: 3 floats (x, y, z) per vertex, whole triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionBuffer {
    floats: Vec<f32>,
}

impl PositionBuffer {
    pub const FLOATS_PER_VERTEX: usize = 3;

    /// Wrap a raw float buffer. Length must be a whole number of triangles.
    pub fn from_floats(floats: Vec<f32>) -> Self {
        assert_eq!(
            floats.len() % (Self::FLOATS_PER_VERTEX * 3),
            0,
            "position buffer does not hold whole triangles"
        );
        Self { floats }
    }

    pub fn floats(&self) -> &[f32] {
        &self.floats
    }

    pub fn into_floats(self) -> Vec<f32> {
        self.floats
    }

    /// Total float count, `triangles * 9`.
    pub fn float_count(&self) -> usize {
        self.floats.len()
    }

    /// Vertex count to hand to a draw call.
    pub fn vertex_count(&self) -> usize {
        self.floats.len() / Self::FLOATS_PER_VERTEX
    }

    pub fn triangle_count(&self) -> usize {
        self.floats.len() / (Self::FLOATS_PER_VERTEX * 3)
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty()
    }
}

/// Interleaved buffer: 6 floats (x, y, z, nx, ny, nz) per vertex, whole
/// triangles. Matches the vertex layout the renderer declares.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterleavedBuffer {
    floats: Vec<f32>,
}

impl InterleavedBuffer {
    pub const FLOATS_PER_VERTEX: usize = 6;

    /// Wrap a raw float buffer. Length must be a whole number of triangles.
    pub fn from_floats(floats: Vec<f32>) -> Self {
        assert_eq!(
            floats.len() % (Self::FLOATS_PER_VERTEX * 3),
            0,
            "interleaved buffer does not hold whole triangles"
        );
        Self { floats }
    }

    pub fn floats(&self) -> &[f32] {
        &self.floats
    }

    pub fn into_floats(self) -> Vec<f32> {
        self.floats
    }

    pub fn float_count(&self) -> usize {
        self.floats.len()
    }

    /// Vertex count to hand to a draw call.
    pub fn vertex_count(&self) -> usize {
        self.floats.len() / Self::FLOATS_PER_VERTEX
    }

    pub fn triangle_count(&self) -> usize {
        self.floats.len() / (Self::FLOATS_PER_VERTEX * 3)
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty()
    }
}
