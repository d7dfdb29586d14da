//! Minimal OBJ parser producing flat GPU-ready vertex buffers.
//!
//! Supported subset: `v x y z`, `vn x y z`, and triangular `f` lines in
//! either `a b c` or `a//b` form. Every other directive is ignored. Indices
//! are 1-based in the file and resolved to 0-based slots after the whole
//! source is scanned, so in-range forward references are fine.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{MeshError, MeshResult};
use crate::mesh::{InterleavedBuffer, PositionBuffer};

/// Substituted when a source defines no normals, so lit shading still has
/// something to work with.
const DEFAULT_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// What happens on a line that fails to parse or resolve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadPolicy {
    /// Abort the whole load on the first bad line.
    Strict,
    /// Log and skip bad lines, drop faces that do not resolve.
    Lenient,
}

/// How scratch storage is sized.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Allocation {
    /// Two passes over the source: count `v`/`vn`/`f` lines first, then
    /// size every buffer from those counts.
    Exact,
    /// Single pass into growable vectors.
    Growable,
}

/// A policy/allocation pair. There is no default on purpose: callers name
/// the mode they want.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LoadOptions {
    pub policy: LoadPolicy,
    pub allocation: Allocation,
}

impl LoadOptions {
    /// Abort-on-anything mode with exact two-pass allocation.
    pub fn strict() -> Self {
        Self {
            policy: LoadPolicy::Strict,
            allocation: Allocation::Exact,
        }
    }

    /// Skip-bad-lines mode with growable buffers.
    pub fn lenient() -> Self {
        Self {
            policy: LoadPolicy::Lenient,
            allocation: Allocation::Growable,
        }
    }

    pub fn load_interleaved_from_path(
        &self,
        path: impl AsRef<Path>,
    ) -> MeshResult<InterleavedBuffer> {
        let text = read_source(path.as_ref())?;
        self.load_interleaved_from_str(&text)
    }

    pub fn load_interleaved_from_reader<R: Read>(
        &self,
        reader: R,
    ) -> MeshResult<InterleavedBuffer> {
        self.load_interleaved_from_str(&read_all(reader)?)
    }

    pub fn load_interleaved_from_str(&self, contents: &str) -> MeshResult<InterleavedBuffer> {
        let scratch = scan(contents, *self)?;
        assemble_interleaved(scratch, self.policy)
    }

    pub fn load_positions_from_path(&self, path: impl AsRef<Path>) -> MeshResult<PositionBuffer> {
        let text = read_source(path.as_ref())?;
        self.load_positions_from_str(&text)
    }

    pub fn load_positions_from_reader<R: Read>(&self, reader: R) -> MeshResult<PositionBuffer> {
        self.load_positions_from_str(&read_all(reader)?)
    }

    pub fn load_positions_from_str(&self, contents: &str) -> MeshResult<PositionBuffer> {
        let scratch = scan(contents, *self)?;
        assemble_positions(scratch, self.policy)
    }
}

/// Load an interleaved position+normal buffer from a file path.
///
/// Lenient: malformed lines are logged and skipped, faces that do not
/// resolve are dropped. Only failing to read the file is fatal.
pub fn load_interleaved_from_path(path: impl AsRef<Path>) -> MeshResult<InterleavedBuffer> {
    LoadOptions::lenient().load_interleaved_from_path(path)
}

/// Load an interleaved buffer from any [`Read`] implementation.
pub fn load_interleaved_from_reader<R: Read>(reader: R) -> MeshResult<InterleavedBuffer> {
    LoadOptions::lenient().load_interleaved_from_reader(reader)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_interleaved_from_str(contents: &str) -> MeshResult<InterleavedBuffer> {
    LoadOptions::lenient().load_interleaved_from_str(contents)
}

/// Load a position-only buffer from a file path.
///
/// Strict: the first malformed or unresolvable line aborts the load, and a
/// source without positions or without faces is [`MeshError::EmptyMesh`].
pub fn load_positions_from_path(path: impl AsRef<Path>) -> MeshResult<PositionBuffer> {
    LoadOptions::strict().load_positions_from_path(path)
}

/// Load a position-only buffer from any [`Read`] implementation.
pub fn load_positions_from_reader<R: Read>(reader: R) -> MeshResult<PositionBuffer> {
    LoadOptions::strict().load_positions_from_reader(reader)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_positions_from_str(contents: &str) -> MeshResult<PositionBuffer> {
    LoadOptions::strict().load_positions_from_str(contents)
}

fn read_source(path: &Path) -> MeshResult<String> {
    let mut file = File::open(path).map_err(|source| MeshError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(text)
}

fn read_all<R: Read>(mut reader: R) -> MeshResult<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// One face line: source line number plus raw 1-based indices.
struct FaceRef {
    line: usize,
    positions: [i64; 3],
    /// `None` for bare `a b c` corners, which reference the first normal.
    normals: Option<[i64; 3]>,
}

/// Scratch state for a single load call, dropped on every exit path.
#[derive(Default)]
struct Scratch {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    faces: Vec<FaceRef>,
}

#[derive(Clone, Copy, Default)]
struct LineCounts {
    v: usize,
    vn: usize,
    f: usize,
}

/// Counting pass: classify lines by first token only, no element parsing.
fn count_lines(text: &str) -> LineCounts {
    let mut counts = LineCounts::default();
    for line in text.lines() {
        match line.split_whitespace().next() {
            Some("v") => counts.v += 1,
            Some("vn") => counts.vn += 1,
            Some("f") => counts.f += 1,
            _ => {}
        }
    }
    counts
}

fn scan(text: &str, options: LoadOptions) -> MeshResult<Scratch> {
    let mut scratch = match options.allocation {
        Allocation::Exact => {
            let counts = count_lines(text);
            if options.policy == LoadPolicy::Strict && (counts.v == 0 || counts.f == 0) {
                return Err(MeshError::EmptyMesh);
            }
            Scratch {
                positions: Vec::with_capacity(counts.v),
                // Room for the synthetic normal of normal-free sources.
                normals: Vec::with_capacity(counts.vn.max(1)),
                faces: Vec::with_capacity(counts.f),
            }
        }
        Allocation::Growable => Scratch::default(),
    };

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let mut tokens = raw.split_whitespace();
        match tokens.next() {
            Some("v") => match parse_triple(tokens) {
                Some(position) => scratch.positions.push(position),
                None => reject_vertex_data(options.policy, line, raw)?,
            },
            Some("vn") => match parse_triple(tokens) {
                Some(normal) => scratch.normals.push(normal),
                None => reject_vertex_data(options.policy, line, raw)?,
            },
            Some("f") => match parse_face(line, raw, tokens) {
                Ok(face) => scratch.faces.push(face),
                Err(error) => reject_face(options.policy, error)?,
            },
            // Comments, `vt`, groups, materials and the rest are ignored.
            _ => {}
        }
    }

    if options.policy == LoadPolicy::Strict
        && options.allocation == Allocation::Growable
        && (scratch.positions.is_empty() || scratch.faces.is_empty())
    {
        return Err(MeshError::EmptyMesh);
    }

    Ok(scratch)
}

fn reject_vertex_data(policy: LoadPolicy, line: usize, raw: &str) -> MeshResult<()> {
    let error = MeshError::MalformedVertex {
        line,
        text: raw.trim().to_string(),
    };
    match policy {
        LoadPolicy::Strict => Err(error),
        LoadPolicy::Lenient => {
            log::warn!("skipping line: {error}");
            Ok(())
        }
    }
}

fn reject_face(policy: LoadPolicy, error: MeshError) -> MeshResult<()> {
    match policy {
        LoadPolicy::Strict => Err(error),
        LoadPolicy::Lenient => {
            log::warn!("skipping face: {error}");
            Ok(())
        }
    }
}

/// Three floats from the remaining tokens. Trailing extras (the optional
/// OBJ `w` component) are ignored.
fn parse_triple<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<[f32; 3]> {
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let z = tokens.next()?.parse().ok()?;
    Some([x, y, z])
}

fn parse_face<'a>(
    line: usize,
    raw: &str,
    tokens: impl Iterator<Item = &'a str>,
) -> MeshResult<FaceRef> {
    let corners: Vec<&str> = tokens.collect();
    if corners.len() != 3 {
        // Points, edges, quads and n-gons are out of scope.
        return Err(MeshError::UnsupportedFaceLine {
            line,
            text: raw.trim().to_string(),
        });
    }

    // All three corners as `pos//norm` pairs.
    if let (Some(a), Some(b), Some(c)) = (
        parse_pair(corners[0]),
        parse_pair(corners[1]),
        parse_pair(corners[2]),
    ) {
        return Ok(FaceRef {
            line,
            positions: [a.0, b.0, c.0],
            normals: Some([a.1, b.1, c.1]),
        });
    }

    // Fall back to bare position indices.
    if let (Some(a), Some(b), Some(c)) = (
        parse_index(corners[0]),
        parse_index(corners[1]),
        parse_index(corners[2]),
    ) {
        return Ok(FaceRef {
            line,
            positions: [a, b, c],
            normals: None,
        });
    }

    if corners.iter().any(|corner| has_texcoord(corner)) {
        // `a/b` and `a/b/c` are real OBJ syntax, just not taken here.
        return Err(MeshError::UnsupportedFaceLine {
            line,
            text: raw.trim().to_string(),
        });
    }
    Err(MeshError::MalformedFace {
        line,
        text: raw.trim().to_string(),
    })
}

/// `a//b`: position and normal index with no texture coordinate.
fn parse_pair(corner: &str) -> Option<(i64, i64)> {
    let (position, normal) = corner.split_once("//")?;
    if normal.contains('/') {
        return None;
    }
    Some((position.parse().ok()?, normal.parse().ok()?))
}

fn parse_index(corner: &str) -> Option<i64> {
    corner.parse().ok()
}

/// `a/b` or `a/b/c`: carries a texture-coordinate reference.
fn has_texcoord(corner: &str) -> bool {
    let mut parts = corner.split('/');
    let _ = parts.next();
    matches!(parts.next(), Some(middle) if !middle.is_empty())
}

/// Convert a raw 1-based source index into a 0-based slot, or fail.
fn resolve(raw: i64, count: usize, line: usize) -> MeshResult<usize> {
    if raw < 1 || raw as u64 > count as u64 {
        return Err(MeshError::IndexOutOfRange {
            line,
            index: raw,
            count,
        });
    }
    Ok((raw - 1) as usize)
}

/// Resolve a whole face before emitting anything: a face is never written
/// partially.
fn resolve_interleaved(face: &FaceRef, scratch: &Scratch) -> MeshResult<[([f32; 3], [f32; 3]); 3]> {
    let mut corners = [([0.0; 3], [0.0; 3]); 3];
    for (slot, corner) in corners.iter_mut().enumerate() {
        let position =
            scratch.positions[resolve(face.positions[slot], scratch.positions.len(), face.line)?];
        let normal = match face.normals {
            Some(normals) => {
                scratch.normals[resolve(normals[slot], scratch.normals.len(), face.line)?]
            }
            // Bare corners reference the first normal, synthetic or not.
            None => scratch.normals[0],
        };
        *corner = (position, normal);
    }
    Ok(corners)
}

fn resolve_positions(face: &FaceRef, scratch: &Scratch) -> MeshResult<[[f32; 3]; 3]> {
    let mut corners = [[0.0; 3]; 3];
    for (slot, corner) in corners.iter_mut().enumerate() {
        *corner =
            scratch.positions[resolve(face.positions[slot], scratch.positions.len(), face.line)?];
    }
    Ok(corners)
}

fn assemble_interleaved(
    mut scratch: Scratch,
    policy: LoadPolicy,
) -> MeshResult<InterleavedBuffer> {
    if scratch.normals.is_empty() {
        scratch.normals.push(DEFAULT_NORMAL);
    }

    let mut floats =
        Vec::with_capacity(scratch.faces.len() * InterleavedBuffer::FLOATS_PER_VERTEX * 3);
    let mut dropped = 0usize;

    for face in &scratch.faces {
        match resolve_interleaved(face, &scratch) {
            Ok(corners) => {
                for (position, normal) in corners {
                    floats.extend_from_slice(&position);
                    floats.extend_from_slice(&normal);
                }
            }
            Err(error) if policy == LoadPolicy::Lenient => {
                log::warn!("dropping face: {error}");
                dropped += 1;
            }
            Err(error) => return Err(error),
        }
    }

    log::info!(
        "OBJ loaded: {} positions, {} normals, {} faces ({} dropped)",
        scratch.positions.len(),
        scratch.normals.len(),
        scratch.faces.len() - dropped,
        dropped
    );
    Ok(InterleavedBuffer::from_floats(floats))
}

fn assemble_positions(scratch: Scratch, policy: LoadPolicy) -> MeshResult<PositionBuffer> {
    let mut floats =
        Vec::with_capacity(scratch.faces.len() * PositionBuffer::FLOATS_PER_VERTEX * 3);
    let mut dropped = 0usize;

    for face in &scratch.faces {
        match resolve_positions(face, &scratch) {
            Ok(corners) => {
                for position in corners {
                    floats.extend_from_slice(&position);
                }
            }
            Err(error) if policy == LoadPolicy::Lenient => {
                log::warn!("dropping face: {error}");
                dropped += 1;
            }
            Err(error) => return Err(error),
        }
    }

    log::info!(
        "OBJ loaded: {} positions, {} faces ({} dropped)",
        scratch.positions.len(),
        scratch.faces.len() - dropped,
        dropped
    );
    Ok(PositionBuffer::from_floats(floats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_triangle_positions_in_file_order() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let buffer = load_positions_from_str(src).expect("parse triangle");
        assert_eq!(buffer.float_count(), 9);
        assert_eq!(buffer.vertex_count(), 3);
        assert_eq!(
            buffer.floats(),
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn forward_references_resolve_after_the_scan() {
        // Faces may name vertices that only appear later in the file.
        let src = "f 1 2 3\nv 0 0 0\nv 1 0 0\nv 0 1 0\n";
        let positions = load_positions_from_str(src).expect("forward positions");
        assert_eq!(
            positions.floats(),
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );

        let interleaved = load_interleaved_from_str(src).expect("forward interleaved");
        assert_eq!(interleaved.triangle_count(), 1);
        let floats = interleaved.floats();
        assert_eq!(&floats[..3], &[0.0, 0.0, 0.0]);
        assert_eq!(&floats[6..9], &[1.0, 0.0, 0.0]);
        assert_eq!(&floats[12..15], &[0.0, 1.0, 0.0]);
        for vertex in floats.chunks_exact(6) {
            assert_eq!(&vertex[3..], &[0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn position_floats_scale_with_face_count() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
f 1 2 3
f 1 3 4
f 1 4 2
f 2 4 3
";
        let buffer = load_positions_from_str(src).expect("parse tetrahedron");
        assert_eq!(buffer.float_count(), 4 * 9);
        assert_eq!(buffer.triangle_count(), 4);
    }

    #[test]
    fn no_positions_is_empty_mesh() {
        let result = load_positions_from_str("f 1 2 3\n");
        assert!(matches!(result, Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn no_faces_is_empty_mesh() {
        let result = load_positions_from_str("v 0 0 0\nv 1 0 0\nv 0 1 0\n");
        assert!(matches!(result, Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn empty_mesh_applies_to_growable_allocation_too() {
        let options = LoadOptions {
            policy: LoadPolicy::Strict,
            allocation: Allocation::Growable,
        };
        let result = options.load_positions_from_str("v 0 0 0\nv 1 0 0\nv 0 1 0\n");
        assert!(matches!(result, Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn index_one_past_the_end_is_out_of_range() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n";
        let result = load_positions_from_str(src);
        assert!(matches!(
            result,
            Err(MeshError::IndexOutOfRange {
                index: 4,
                count: 3,
                ..
            })
        ));
    }

    #[test]
    fn zero_and_negative_indices_are_out_of_range() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\n";
        let zero = load_positions_from_str(&format!("{src}f 0 1 2\n"));
        assert!(matches!(
            zero,
            Err(MeshError::IndexOutOfRange { index: 0, .. })
        ));
        let negative = load_positions_from_str(&format!("{src}f -1 1 2\n"));
        assert!(matches!(
            negative,
            Err(MeshError::IndexOutOfRange { index: -1, .. })
        ));
    }

    #[test]
    fn malformed_vertex_aborts_strict_loads() {
        let src = "# header\n\nv 0 0 zero\nf 1 2 3\n";
        let result = load_positions_from_str(src);
        assert!(matches!(
            result,
            Err(MeshError::MalformedVertex { line: 3, .. })
        ));
    }

    #[test]
    fn malformed_face_aborts_strict_loads() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 two 3\n";
        assert!(matches!(
            load_positions_from_str(src),
            Err(MeshError::MalformedFace { line: 4, .. })
        ));
    }

    #[test]
    fn quads_are_unsupported() {
        let src = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        assert!(matches!(
            load_positions_from_str(src),
            Err(MeshError::UnsupportedFaceLine { .. })
        ));
    }

    #[test]
    fn texture_coordinate_corners_are_unsupported() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1 2/2 3/3\n";
        assert!(matches!(
            load_positions_from_str(src),
            Err(MeshError::UnsupportedFaceLine { .. })
        ));
        let full = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1/1/1 2/2/1 3/3/1\n";
        assert!(matches!(
            load_positions_from_str(full),
            Err(MeshError::UnsupportedFaceLine { .. })
        ));
    }

    #[test]
    fn mixed_corner_styles_are_malformed() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1 2//1 3\n";
        assert!(matches!(
            load_positions_from_str(src),
            Err(MeshError::MalformedFace { .. })
        ));
    }

    #[test]
    fn pair_syntax_resolves_in_position_loads() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n";
        let buffer = load_positions_from_str(src).expect("pair faces parse");
        assert_eq!(buffer.float_count(), 9);
        assert_eq!(&buffer.floats()[3..6], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn lenient_skips_bad_lines_and_keeps_good_ones() {
        let src = "\
v 0 0 0
v 1 0 0
v zero zero zero
v 0 1 0
f 1 2 3
f 1 2
f nope 2 3
";
        let buffer = load_interleaved_from_str(src).expect("lenient load");
        // One face survives. The malformed `v` line is gone, so index 3
        // names the last good position.
        assert_eq!(buffer.triangle_count(), 1);
        assert_eq!(&buffer.floats()[12..15], &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn missing_normals_synthesize_a_single_default() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nf 3 2 1\n";
        let buffer = load_interleaved_from_str(src).expect("no-normal load");
        assert_eq!(buffer.triangle_count(), 2);
        for vertex in buffer.floats().chunks_exact(6) {
            assert_eq!(&vertex[3..], &[0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn two_corner_face_is_dropped_without_failing() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2\nf 1 2 3\n";
        let buffer = load_interleaved_from_str(src).expect("load succeeds");
        assert_eq!(buffer.triangle_count(), 1);
    }

    #[test]
    fn pair_corners_resolve_their_own_normals() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 1 0 0
vn 0 1 0
f 1//2 2//2 3//1
";
        let buffer = load_interleaved_from_str(src).expect("pair load");
        let floats = buffer.floats();
        assert_eq!(&floats[3..6], &[0.0, 1.0, 0.0]);
        assert_eq!(&floats[9..12], &[0.0, 1.0, 0.0]);
        assert_eq!(&floats[15..18], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn bare_faces_reference_the_first_normal() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 1 0\nvn 1 0 0\nf 1 2 3\n";
        let buffer = load_interleaved_from_str(src).expect("bare load");
        for vertex in buffer.floats().chunks_exact(6) {
            assert_eq!(&vertex[3..], &[0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn pair_face_with_no_normals_resolves_the_synthetic_one() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1//1 2//1 3//1\n";
        let buffer = load_interleaved_from_str(src).expect("synthetic normal");
        assert_eq!(&buffer.floats()[3..6], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn out_of_range_normal_drops_the_face_leniently() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//9 2//9 3//9\nf 1 2 3\n";
        let buffer = load_interleaved_from_str(src).expect("lenient load");
        assert_eq!(buffer.triangle_count(), 1);
    }

    #[test]
    fn strict_interleaved_rejects_out_of_range_normals() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//9 2//9 3//9\n";
        let result = LoadOptions::strict().load_interleaved_from_str(src);
        assert!(matches!(
            result,
            Err(MeshError::IndexOutOfRange {
                index: 9,
                count: 1,
                ..
            })
        ));
    }

    #[test]
    fn unknown_directives_and_comments_are_ignored() {
        let src = "\
# exported by hand
mtllib cube.mtl
o demo
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 1
s off
usemtl none
f 1 2 3
";
        let buffer = load_positions_from_str(src).expect("directives ignored");
        assert_eq!(buffer.triangle_count(), 1);
    }

    #[test]
    fn crlf_sources_parse() {
        let src = "v 0 0 0\r\nv 1 0 0\r\nv 0 1 0\r\nf 1 2 3\r\n";
        let buffer = load_positions_from_str(src).expect("crlf load");
        assert_eq!(buffer.float_count(), 9);
    }

    #[test]
    fn extra_vertex_components_are_ignored() {
        // `v x y z w` is legal OBJ, the trailing weight is dropped.
        let src = "v 0 0 0 1.0\nv 1 0 0 1.0\nv 0 1 0 1.0\nf 1 2 3\n";
        let buffer = load_positions_from_str(src).expect("w component");
        assert_eq!(buffer.float_count(), 9);
    }

    #[test]
    fn exact_and_growable_allocations_agree() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
f 3 2 1
";
        let exact = LoadOptions {
            policy: LoadPolicy::Strict,
            allocation: Allocation::Exact,
        }
        .load_interleaved_from_str(src)
        .expect("exact");
        let growable = LoadOptions {
            policy: LoadPolicy::Strict,
            allocation: Allocation::Growable,
        }
        .load_interleaved_from_str(src)
        .expect("growable");
        assert_eq!(exact, growable);
    }

    #[test]
    fn lenient_empty_source_yields_an_empty_buffer() {
        let buffer = load_interleaved_from_str("# nothing here\n").expect("empty ok");
        assert!(buffer.is_empty());
        assert_eq!(buffer.triangle_count(), 0);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        assert!(matches!(
            load_positions_from_path("definitely/not/here.obj"),
            Err(MeshError::FileNotFound { .. })
        ));
        assert!(matches!(
            load_interleaved_from_path("definitely/not/here.obj"),
            Err(MeshError::FileNotFound { .. })
        ));
    }

    #[test]
    fn reader_sources_load_like_strings() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let from_reader = load_positions_from_reader(src.as_bytes()).expect("reader");
        let from_str = load_positions_from_str(src).expect("str");
        assert_eq!(from_reader, from_str);
    }

    #[test]
    fn non_utf8_input_is_an_io_error() {
        let bytes: &[u8] = &[0xff, 0xfe, 0xfd];
        assert!(matches!(
            load_positions_from_reader(bytes),
            Err(MeshError::Io(_))
        ));
        assert!(matches!(
            load_interleaved_from_reader(bytes),
            Err(MeshError::Io(_))
        ));
    }

    #[test]
    fn strict_reports_the_offending_line_number() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn bad data here\nf 1 2 3\n";
        match load_positions_from_str(src) {
            Err(MeshError::MalformedVertex { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected MalformedVertex, got {other:?}"),
        }
    }
}
