// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "orbit-viewer")]
#[command(about = "Orbit a camera around a single static mesh", long_about = None)]
pub struct Cli {
    /// Demo to run
    #[arg(long, value_enum, env = "SCENE", default_value = "model")]
    pub scene: SceneKind,

    /// OBJ file for the model scene (v, vn and triangular P//N faces)
    #[arg(long, default_value = "assets/pyramid.obj")]
    pub model: PathBuf,

    /// JSON settings file; built-in defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_names_parse() {
        for (name, kind) in [
            ("triangle", SceneKind::Triangle),
            ("orbit", SceneKind::Orbit),
            ("pyramid", SceneKind::Pyramid),
            ("model", SceneKind::Model),
        ] {
            let cli = Cli::try_parse_from(["orbit-viewer", "--scene", name]).unwrap();
            assert_eq!(cli.scene, kind);
        }
    }

    #[test]
    fn test_model_and_config_paths() {
        let cli = Cli::try_parse_from([
            "orbit-viewer",
            "--scene",
            "model",
            "--model",
            "teapot.obj",
            "--config",
            "viewer.json",
        ])
        .unwrap();

        assert_eq!(cli.model, PathBuf::from("teapot.obj"));
        assert_eq!(cli.config, Some(PathBuf::from("viewer.json")));
    }

    #[test]
    fn test_unknown_scene_is_rejected() {
        assert!(Cli::try_parse_from(["orbit-viewer", "--scene", "teapot"]).is_err());
    }
}
