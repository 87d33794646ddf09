pub mod check;
pub mod list;
pub mod play;
pub mod show;

use std::path::Path;

use log::debug;
use wf_core::{Blueprint, SectionId, World};

/// The world played when no blueprint is given.
const DEMO_WORLD: &str = include_str!("../../assets/demo.json");

/// Read and parse a blueprint, or the built-in one when `path` is `None`.
fn load_blueprint(path: Option<&Path>) -> Result<Blueprint, String> {
    let source = match path {
        Some(path) => {
            debug!("reading blueprint from {}", path.display());
            std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?
        }
        None => DEMO_WORLD.to_string(),
    };
    Blueprint::from_json(&source).map_err(|e| e.to_string())
}

/// Load and build a world. Returns it with its starting section.
fn load_world(path: Option<&Path>) -> Result<(World, SectionId), String> {
    load_blueprint(path)?.build().map_err(|e| e.to_string())
}
