use anyhow::{bail, Context, Result};
use glam::Vec3;
use std::path::Path;

use crate::camera::OrbitState;
use crate::loaders::{load_obj_mesh, ParsedMesh};
use crate::scene::{Scene, Shading};
use crate::types::Vertex;

/// Bounding-sphere radii between the eye and the model centre at start-up.
/// Just over 1/sin(22.5°), so the sphere fits a 45° field of view.
const FRAMING_FACTOR: f32 = 3.0;

/// OBJ model viewer with per-vertex normals
pub struct ModelScene {
    name: String,
    mesh: ParsedMesh,
}

impl ModelScene {
    /// Load the model; any I/O or parse failure is fatal to the scene
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mesh = load_obj_mesh(path)
            .with_context(|| format!("Failed to load model {}", path.display()))?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Model")
            .to_string();

        Self::from_mesh(name, mesh)
    }

    pub fn from_mesh(name: impl Into<String>, mesh: ParsedMesh) -> Result<Self> {
        let name = name.into();
        if mesh.vertices.is_empty() {
            bail!("Model '{name}' has no faces to draw");
        }

        log::info!(
            "Model '{}': {} triangles",
            name,
            mesh.triangle_count()
        );
        Ok(Self { name, mesh })
    }
}

impl Scene for ModelScene {
    fn name(&self) -> &str {
        &self.name
    }

    fn vertices(&self) -> &[Vertex] {
        &self.mesh.vertices
    }

    fn shading(&self) -> Shading {
        Shading::Lit
    }

    fn initial_orbit(&self) -> Option<OrbitState> {
        let (target, radius) = self
            .mesh
            .bounds()
            .map_or((Vec3::ZERO, 1.0), |b| (b.center(), b.radius()));

        Some(OrbitState::new(radius * FRAMING_FACTOR, 0.0, 0.0, target))
    }
}
