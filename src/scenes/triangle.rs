use crate::scene::{Scene, Shading};
use crate::types::Vertex;

/// The first tutorial: an RGB triangle drawn straight into clip space
pub struct TriangleScene {
    vertices: Vec<Vertex>,
}

impl TriangleScene {
    pub fn new() -> Self {
        Self {
            vertices: vec![
                Vertex::new([-0.5, -0.5, 0.0], [1.0, 0.0, 0.0]),
                Vertex::new([0.5, -0.5, 0.0], [0.0, 1.0, 0.0]),
                Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0]),
            ],
        }
    }
}

impl Default for TriangleScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for TriangleScene {
    fn name(&self) -> &str {
        "Triangle"
    }

    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn shading(&self) -> Shading {
        Shading::VertexColor
    }
}
