use glam::Vec3;

use crate::camera::OrbitState;
use crate::scene::{Scene, Shading};
use crate::types::Vertex;

/// Starting distance of the transformed-triangle demo; close enough that the
/// triangle fills most of the view
const INITIAL_DISTANCE: f32 = 0.5;

/// A colored triangle tilted out of the XY plane, viewed with an orbit camera
pub struct OrbitTriangleScene {
    vertices: Vec<Vertex>,
}

impl OrbitTriangleScene {
    pub fn new() -> Self {
        Self {
            vertices: vec![
                Vertex::new([-0.5, -0.5, 0.7], [1.0, 0.0, 0.0]),
                Vertex::new([0.5, -0.5, -0.3], [0.0, 1.0, 0.0]),
                Vertex::new([0.0, 0.5, 0.5], [0.0, 0.0, 1.0]),
            ],
        }
    }
}

impl Default for OrbitTriangleScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for OrbitTriangleScene {
    fn name(&self) -> &str {
        "Orbit Triangle"
    }

    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn shading(&self) -> Shading {
        Shading::VertexColor
    }

    fn initial_orbit(&self) -> Option<OrbitState> {
        Some(OrbitState::new(INITIAL_DISTANCE, 0.0, 0.0, Vec3::ZERO))
    }
}
