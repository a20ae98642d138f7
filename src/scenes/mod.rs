mod model;
mod orbit;
mod pyramid;
mod triangle;

pub use model::ModelScene;
pub use orbit::OrbitTriangleScene;
pub use pyramid::{create_pyramid_vertices, PyramidScene};
pub use triangle::TriangleScene;

use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;

use crate::scene::Scene;

/// Demo variants selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Flat RGB triangle, no camera
    Triangle,
    /// Tilted RGB triangle with an orbit camera
    Orbit,
    /// Colored pyramid with an orbit camera
    Pyramid,
    /// OBJ model with per-vertex normals
    Model,
}

/// Build the scene for `kind`; only `Model` reads `model_path`
pub fn create_scene(kind: SceneKind, model_path: &Path) -> Result<Box<dyn Scene>> {
    let scene: Box<dyn Scene> = match kind {
        SceneKind::Triangle => Box::new(TriangleScene::new()),
        SceneKind::Orbit => Box::new(OrbitTriangleScene::new()),
        SceneKind::Pyramid => Box::new(PyramidScene::new()),
        SceneKind::Model => Box::new(ModelScene::load(model_path)?),
    };

    log::info!(
        "Scene '{}': {} vertices",
        scene.name(),
        scene.vertices().len()
    );
    Ok(scene)
}
