//! Reader for the small OBJ subset used by the model viewer.
//!
//! Only `v`, `vn` and triangular `f` lines with `P//N` corners are understood.
//! Faces are expanded into a flat triangle list: three [`Vertex`] values per
//! face, no index buffer and no sharing between faces.

use glam::Vec3;
use nom::bytes::complete::{is_not, tag};
use nom::combinator::all_consuming;
use nom::number::complete::float;
use nom::sequence::separated_pair;
use nom::IResult;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::math::AABB;
use crate::types::Vertex;

/// Which attribute list a face index points into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Position,
    Normal,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position => write!(f, "position"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

/// Errors produced while reading an OBJ file. Line numbers are 1-based.
#[derive(Debug)]
pub enum ParseError {
    /// The file could not be opened or read.
    Open { path: PathBuf, source: std::io::Error },
    /// A coordinate or index failed numeric conversion.
    InvalidNumber { line: usize, token: String },
    /// A directive had fewer components than it needs.
    MissingComponent { line: usize, directive: &'static str },
    /// A face corner was not of the form `P//N`.
    MalformedFaceToken { line: usize, token: String },
    /// A face with more than three corners.
    UnsupportedFace { line: usize, corners: usize },
    /// A face referenced index 0 or past the end of the data read so far.
    IndexOutOfBounds {
        line: usize,
        attribute: Attribute,
        index: usize,
        available: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "failed to open OBJ file {}: {source}", path.display())
            }
            Self::InvalidNumber { line, token } => {
                write!(f, "line {line}: invalid number '{token}'")
            }
            Self::MissingComponent { line, directive } => {
                write!(f, "line {line}: '{directive}' needs three components")
            }
            Self::MalformedFaceToken { line, token } => {
                write!(f, "line {line}: face corner '{token}' is not of the form P//N")
            }
            Self::UnsupportedFace { line, corners } => {
                write!(f, "line {line}: face has {corners} corners, only triangles are supported")
            }
            Self::IndexOutOfBounds {
                line,
                attribute,
                index,
                available,
            } => write!(
                f,
                "line {line}: {attribute} index {index} is out of range (1..={available})"
            ),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Everything read from an OBJ file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Flat triangle list, three entries per face
    pub vertices: Vec<Vertex>,
}

impl ParsedMesh {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Bounds of the emitted vertices (unreferenced positions are ignored)
    pub fn bounds(&self) -> Option<AABB> {
        AABB::from_points(self.vertices.iter().map(Vertex::position))
    }
}

/// Load an OBJ file and return its flattened vertex list
pub fn load_obj(path: impl AsRef<Path>) -> Result<Vec<Vertex>, ParseError> {
    load_obj_mesh(path).map(|mesh| mesh.vertices)
}

/// Load an OBJ file keeping the raw attribute lists alongside the vertices
pub fn load_obj_mesh(path: impl AsRef<Path>) -> Result<ParsedMesh, ParseError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mesh = parse_obj(&source)?;
    log::debug!(
        "Loaded {}: {} positions, {} normals, {} triangles",
        path.display(),
        mesh.positions.len(),
        mesh.normals.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Parse OBJ text
pub fn parse_obj(source: &str) -> Result<ParsedMesh, ParseError> {
    let mut mesh = ParsedMesh::default();
    let mut skipped = 0usize;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let content = match raw.find('#') {
            Some(start) => &raw[..start],
            None => raw,
        };

        let mut tokens = content.split_whitespace();
        let Some(directive) = tokens.next() else {
            continue;
        };

        match directive {
            "v" => mesh.positions.push(parse_vec3(line, "v", tokens)?),
            "vn" => mesh.normals.push(parse_vec3(line, "vn", tokens)?),
            "f" => {
                let corners: Vec<&str> = tokens.collect();
                if corners.len() < 3 {
                    return Err(ParseError::MissingComponent { line, directive: "f" });
                }
                if corners.len() > 3 {
                    return Err(ParseError::UnsupportedFace {
                        line,
                        corners: corners.len(),
                    });
                }

                for token in corners {
                    let (p, n) = parse_face_token(line, token)?;
                    let position = resolve(line, Attribute::Position, p, &mesh.positions)?;
                    let normal = resolve(line, Attribute::Normal, n, &mesh.normals)?;
                    mesh.vertices
                        .push(Vertex::new(position.to_array(), normal.to_array()));
                }
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} unsupported OBJ directives");
    }

    Ok(mesh)
}

/// A single coordinate token, e.g. `-0.5` or `1e-3`
fn coordinate(input: &str) -> IResult<&str, f32> {
    all_consuming(float)(input)
}

/// A `P//N` corner split into its raw index strings
fn face_corner(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(is_not("/"), tag("//"), is_not("/")))(input)
}

/// Read the first three floats; trailing components such as `w` are ignored
fn parse_vec3<'a>(
    line: usize,
    directive: &'static str,
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<Vec3, ParseError> {
    let mut xyz = [0.0f32; 3];
    for slot in &mut xyz {
        let token = tokens
            .next()
            .ok_or(ParseError::MissingComponent { line, directive })?;
        let (_, value) = coordinate(token).map_err(|_| ParseError::InvalidNumber {
            line,
            token: token.to_string(),
        })?;
        *slot = value;
    }
    Ok(Vec3::from_array(xyz))
}

/// Split a `P//N` corner into its two 1-based indices
fn parse_face_token(line: usize, token: &str) -> Result<(usize, usize), ParseError> {
    let (_, (p, n)) = face_corner(token).map_err(|_| ParseError::MalformedFaceToken {
        line,
        token: token.to_string(),
    })?;

    let parse_index = |s: &str| {
        s.parse::<usize>().map_err(|_| ParseError::InvalidNumber {
            line,
            token: s.to_string(),
        })
    };

    Ok((parse_index(p)?, parse_index(n)?))
}

fn resolve(
    line: usize,
    attribute: Attribute,
    index: usize,
    values: &[Vec3],
) -> Result<Vec3, ParseError> {
    index
        .checked_sub(1)
        .and_then(|i| values.get(i))
        .copied()
        .ok_or(ParseError::IndexOutOfBounds {
            line,
            attribute,
            index,
            available: values.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0
f 1//1 2//1 3//1
";

    #[test]
    fn test_parse_single_triangle() {
        let mesh = parse_obj(TRIANGLE).unwrap();
        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.normals.len(), 1);
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[2].attribute, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_parse_vertex_with_leading_whitespace_and_comment() {
        let mesh = parse_obj("   v 1.0 2.0 -3.0 # first\n").unwrap();
        assert_eq!(mesh.positions, vec![Vec3::new(1.0, 2.0, -3.0)]);
    }

    #[test]
    fn test_parse_vertex_ignores_w_component() {
        let mesh = parse_obj("v 1.0 2.0 3.0 1.0\n").unwrap();
        assert_eq!(mesh.positions, vec![Vec3::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_parse_face_token() {
        assert_eq!(parse_face_token(1, "5//10005").unwrap(), (5, 10005));
    }

    #[test]
    fn test_parse_face_token_rejects_texture_slot() {
        for token in ["1/2/3", "1/2", "1", "//1", "1//", "1//2//3"] {
            assert!(
                matches!(
                    parse_face_token(7, token),
                    Err(ParseError::MalformedFaceToken { line: 7, .. })
                ),
                "token {token} should be rejected"
            );
        }
    }

    #[test]
    fn test_coordinate_forms() {
        assert_eq!(coordinate("-0.5"), Ok(("", -0.5)));
        assert_eq!(coordinate("3"), Ok(("", 3.0)));
        assert_eq!(coordinate("1e-3"), Ok(("", 1e-3)));
        assert!(coordinate("1.0x").is_err());
        assert!(coordinate("one").is_err());
    }

    #[test]
    fn test_vertex_trailing_garbage_is_invalid() {
        let err = parse_obj("v 1.0 2.0 3.0f\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { line: 1, ref token } if token == "3.0f"));
    }

    #[test]
    fn test_face_index_not_an_integer() {
        let err = parse_face_token(3, "a//1").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { line: 3, ref token } if token == "a"));
    }

    #[test]
    fn test_zero_length_normal_is_accepted() {
        let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 0\nf 1//1 2//1 3//1\n").unwrap();
        assert_eq!(mesh.vertices[0].attribute, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_vertex_missing_component() {
        let err = parse_obj("v 1.0 2.0\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingComponent { line: 1, directive: "v" }
        ));
    }

    #[test]
    fn test_vertex_invalid_float() {
        let err = parse_obj("vn 0.0 one 0.0\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { line: 1, ref token } if token == "one"));
    }

    #[test]
    fn test_quad_face_is_rejected() {
        let source = format!("{TRIANGLE}v 1.0 1.0 0.0\nf 1//1 2//1 4//1 3//1\n");
        let err = parse_obj(&source).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFace { line: 7, corners: 4 }));
    }

    #[test]
    fn test_face_with_two_corners_is_rejected() {
        let source = format!("{TRIANGLE}f 1//1 2//1\n");
        let err = parse_obj(&source).unwrap_err();
        assert!(matches!(err, ParseError::MissingComponent { line: 6, directive: "f" }));
    }

    #[test]
    fn test_unsupported_directives_are_skipped() {
        let source = format!("mtllib cube.mtl\no Cube\nvt 0.5 0.5\ns off\nusemtl Material\n{TRIANGLE}");
        let mesh = parse_obj(&source).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
    }

    #[test]
    fn test_normal_index_beyond_parsed_normals() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//2 3//1\n").unwrap_err();
        match err {
            ParseError::IndexOutOfBounds {
                line,
                attribute,
                index,
                available,
            } => {
                assert_eq!(line, 5);
                assert_eq!(attribute, Attribute::Normal);
                assert_eq!(index, 2);
                assert_eq!(available, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_face_before_its_vertices_is_out_of_bounds() {
        let err = parse_obj("vn 0 0 1\nf 1//1 2//1 3//1\nv 0 0 0\nv 1 0 0\nv 0 1 0\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::IndexOutOfBounds {
                attribute: Attribute::Position,
                available: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_bounds_cover_emitted_vertices() {
        let bounds = parse_obj(TRIANGLE).unwrap().bounds().unwrap();
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_empty_source_gives_empty_mesh() {
        let mesh = parse_obj("# nothing here\n\n").unwrap();
        assert!(mesh.vertices.is_empty());
        assert!(mesh.bounds().is_none());
    }

    #[test]
    fn test_error_messages_name_the_line() {
        let err = parse_obj("v 0 0 0\nf 1//0 1//0 1//0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 2: normal index 0 is out of range (1..=0)"
        );
    }
}
