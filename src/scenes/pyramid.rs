use glam::Vec3;

use crate::camera::OrbitState;
use crate::scene::{Scene, Shading};
use crate::types::Vertex;

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const GRAY: [f32; 3] = [0.5, 0.5, 0.5];

/// Square pyramid with one colour per side, viewed with an orbit camera
pub struct PyramidScene {
    vertices: Vec<Vertex>,
}

impl PyramidScene {
    pub fn new() -> Self {
        Self {
            vertices: create_pyramid_vertices(),
        }
    }
}

impl Default for PyramidScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PyramidScene {
    fn name(&self) -> &str {
        "Pyramid"
    }

    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn shading(&self) -> Shading {
        Shading::VertexColor
    }

    fn initial_orbit(&self) -> Option<OrbitState> {
        Some(OrbitState::new(3.0, 0.0, 0.3, Vec3::ZERO))
    }
}

/// 4 triangular sides + 2 triangles for the square base = 18 corners
pub fn create_pyramid_vertices() -> Vec<Vertex> {
    let apex = [0.0, 0.5, 0.0];

    let half = 0.5;
    let base_y = -0.5;
    let p0 = [-half, base_y, half]; // front-left
    let p1 = [half, base_y, half]; // front-right
    let p2 = [half, base_y, -half]; // back-right
    let p3 = [-half, base_y, -half]; // back-left

    let faces = [
        (p0, p1, apex, RED),
        (p1, p2, apex, GREEN),
        (p2, p3, apex, BLUE),
        (p3, p0, apex, YELLOW),
        (p0, p3, p2, GRAY),
        (p0, p2, p1, GRAY),
    ];

    faces
        .iter()
        .flat_map(|&(a, b, c, color)| {
            [
                Vertex::new(a, color),
                Vertex::new(b, color),
                Vertex::new(c, color),
            ]
        })
        .collect()
}
