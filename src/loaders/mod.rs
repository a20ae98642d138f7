pub mod obj;

pub use obj::{load_obj, load_obj_mesh, parse_obj, Attribute, ParseError, ParsedMesh};
