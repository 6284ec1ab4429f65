//! Emitter discovery over a scene query.
use mint::Vector3;
use tracing::debug;

use crate::scene::SceneQuery;

pub type EmitterId = String;

/// Name prefix that marks a scene object as an emitter, matched
/// case-insensitively.
pub const DEFAULT_EMITTER_PREFIX: &str = "tower";

/// A discovered coverage source with a world position.
///
/// Emitters are immutable for the duration of a run and replaced wholesale
/// by the next discovery pass.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Emitter {
    pub id: EmitterId,
    pub position: Vector3<f32>,
}

impl Emitter {
    pub fn new(id: impl Into<EmitterId>, position: impl Into<Vector3<f32>>) -> Self {
        Self {
            id: id.into(),
            position: position.into(),
        }
    }
}

/// Discovers emitters by name prefix and visibility.
#[derive(Debug, Clone)]
pub struct EmitterDirectory {
    /// Name prefix to match, case-insensitively.
    pub prefix: String,
}

impl Default for EmitterDirectory {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_EMITTER_PREFIX.to_owned(),
        }
    }
}

impl EmitterDirectory {
    /// Create a directory matching the default prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory matching a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Lists visible emitters in scene encounter order.
    ///
    /// Zero matches is a valid, empty result; the caller decides whether an
    /// empty coverage map is worth warning about.
    pub fn discover(&self, scene: &dyn SceneQuery) -> Vec<Emitter> {
        let prefix = self.prefix.to_lowercase();
        let mut found = Vec::new();

        for object in scene.objects() {
            if !object.visible {
                continue;
            }
            if !object.name.to_lowercase().starts_with(&prefix) {
                continue;
            }
            debug!(
                "Discovered emitter '{}' at ({:.1}, {:.1}, {:.1}).",
                object.name, object.position.x, object.position.y, object.position.z
            );
            found.push(Emitter::new(object.name, object.position));
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MemoryScene, SceneObject};

    fn scene() -> MemoryScene {
        MemoryScene::new()
            .with_object(SceneObject::new("Tower_A", [0.0, 0.0, 0.0], true))
            .with_object(SceneObject::new("tower_b", [10.0, 0.0, 0.0], true))
            .with_object(SceneObject::new("TOWER_C", [20.0, 0.0, 0.0], false))
            .with_object(SceneObject::new("Antenna_D", [30.0, 0.0, 0.0], true))
            .with_object(SceneObject::new("Watchtower", [40.0, 0.0, 0.0], true))
    }

    #[test]
    fn matches_prefix_case_insensitively() {
        let emitters = EmitterDirectory::new().discover(&scene());
        let ids: Vec<_> = emitters.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["Tower_A", "tower_b"]);
    }

    #[test]
    fn excludes_hidden_emitters() {
        let emitters = EmitterDirectory::new().discover(&scene());
        assert!(emitters.iter().all(|e| e.id != "TOWER_C"));
    }

    #[test]
    fn prefix_match_ignores_substrings() {
        // "Watchtower" contains the prefix but does not start with it.
        let emitters = EmitterDirectory::new().discover(&scene());
        assert!(emitters.iter().all(|e| e.id != "Watchtower"));
    }

    #[test]
    fn empty_scene_is_not_an_error() {
        let emitters = EmitterDirectory::new().discover(&MemoryScene::new());
        assert!(emitters.is_empty());
    }

    #[test]
    fn custom_prefix_redefines_matching() {
        let emitters = EmitterDirectory::with_prefix("antenna").discover(&scene());
        let ids: Vec<_> = emitters.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["Antenna_D"]);
    }

    #[test]
    fn repeated_discovery_is_stable() {
        let directory = EmitterDirectory::new();
        let scene = scene();
        assert_eq!(directory.discover(&scene), directory.discover(&scene));
    }
}
