//! Asset loading/parsers (meshes).
//! E1: minimal OBJ mesh loader producing flat GPU-ready vertex buffers.
//! E2: strict/lenient load policies with exact or growable allocation.

pub mod error;
pub mod mesh;
pub mod obj;

pub use error::{MeshError, MeshResult};
pub use mesh::{InterleavedBuffer, PositionBuffer};
pub use obj::{Allocation, LoadOptions, LoadPolicy};
