//! Load-failure kinds shared by the OBJ loaders.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a mesh load.
///
/// Under [`LoadPolicy::Strict`](crate::obj::LoadPolicy) every kind is fatal.
/// Under `Lenient` only `FileNotFound` and `Io` abort the load; the rest
/// degrade to a logged skip of the offending line or face.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("cannot open OBJ file {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read OBJ source: {0}")]
    Io(#[from] io::Error),

    /// The source defines no positions or no faces at all.
    #[error("OBJ source contains no usable geometry")]
    EmptyMesh,

    #[error("malformed vertex data on line {line}: '{text}'")]
    MalformedVertex { line: usize, text: String },

    #[error("malformed face on line {line}: '{text}'")]
    MalformedFace { line: usize, text: String },

    /// Valid OBJ syntax that this loader deliberately does not take,
    /// e.g. quads or texture-coordinate corners.
    #[error("unsupported face on line {line}: '{text}'")]
    UnsupportedFaceLine { line: usize, text: String },

    #[error("index {index} on line {line} outside 1..={count}")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        count: usize,
    },
}

pub type MeshResult<T> = Result<T, MeshError>;
