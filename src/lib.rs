pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod loaders;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod types;

pub use camera::{OrbitInput, OrbitSpeeds, OrbitState, Projection};
pub use loaders::{load_obj, parse_obj, ParseError, ParsedMesh};
pub use scene::{Scene, Shading};
pub use scenes::{create_scene, SceneKind};
pub use types::{FrameUniforms, Vertex};
