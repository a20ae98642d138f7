use crate::camera::OrbitState;
use crate::types::Vertex;

/// Shader pair used to draw a scene's vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// `attribute` is an RGB colour passed straight through
    VertexColor,
    /// `attribute` is a normal; diffuse light from the eye
    Lit,
}

impl Shading {
    /// WGSL module with `vs_main` and `fs_main` entry points
    pub fn shader_source(self) -> &'static str {
        match self {
            Shading::VertexColor => include_str!("shaders/color.wgsl"),
            Shading::Lit => include_str!("shaders/lit.wgsl"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Shading::VertexColor => "Vertex Color Shader",
            Shading::Lit => "Lit Shader",
        }
    }
}

/// One demo: a static mesh plus how to shade and view it
pub trait Scene {
    /// Scene name for window titles and logs
    fn name(&self) -> &str;

    /// Flat triangle list drawn with a single call
    fn vertices(&self) -> &[Vertex];

    fn shading(&self) -> Shading;

    /// Starting camera, or None for a fixed 2D scene drawn in clip space
    fn initial_orbit(&self) -> Option<OrbitState> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_sources_define_entry_points() {
        for shading in [Shading::VertexColor, Shading::Lit] {
            let source = shading.shader_source();
            assert!(source.contains("fn vs_main"), "{:?} lacks vs_main", shading);
            assert!(source.contains("fn fs_main"), "{:?} lacks fs_main", shading);
        }
    }

    #[test]
    fn test_lit_shader_guards_zero_normals() {
        let source = Shading::Lit.shader_source();
        assert!(!source.contains("normalize(in.normal)"));
        assert!(source.contains("len > 0.0"));
    }
}
