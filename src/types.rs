use glam::{Mat4, Vec3};

use crate::camera::{OrbitState, Projection};

/// One triangle corner as uploaded to the GPU.
///
/// `attribute` is a colour for the vertex-coloured demos and a normal for the
/// model viewer; the layout is identical either way.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub attribute: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub const fn new(position: [f32; 3], attribute: [f32; 3]) -> Self {
        Self { position, attribute }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn attribute(&self) -> Vec3 {
        Vec3::from_array(self.attribute)
    }

    /// Interleaved position/attribute layout, locations 0 and 1
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-frame uniform block shared by every shader
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _pad: f32,
}

impl FrameUniforms {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4, eye: Vec3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            eye: eye.to_array(),
            _pad: 0.0,
        }
    }

    /// Identity transforms; vertices are drawn directly in clip space
    pub fn identity() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY, Vec3::Z)
    }

    /// Uniforms for a static mesh seen from an orbit camera, or clip-space
    /// passthrough when there is no camera
    pub fn for_camera(orbit: Option<&OrbitState>, projection: &Projection) -> Self {
        match orbit {
            Some(orbit) => Self::new(
                Mat4::IDENTITY,
                orbit.view_matrix(),
                projection.matrix(),
                orbit.eye(),
            ),
            None => Self::identity(),
        }
    }
}
