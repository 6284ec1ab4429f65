//! Scene query seam and emitter discovery.
//!
//! The engine never walks a concrete scene graph. It talks to a [`SceneQuery`]
//! implementation that lists candidate objects; [`EmitterDirectory`] filters
//! that list down to the visible emitters.
use mint::Vector3;

pub mod directory;

pub use directory::{Emitter, EmitterDirectory, EmitterId, DEFAULT_EMITTER_PREFIX};

/// A single object reported by a scene backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Object name as authored in the scene.
    pub name: String,
    /// World-space position.
    pub position: Vector3<f32>,
    /// Whether the object is currently visible.
    pub visible: bool,
}

impl SceneObject {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<Vector3<f32>>,
        visible: bool,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            visible,
        }
    }
}

/// Trait for scene backends that can enumerate objects.
///
/// Implementations must report objects in a stable order so that repeated
/// discovery passes over an unchanged scene are reproducible.
pub trait SceneQuery {
    fn objects(&self) -> Vec<SceneObject>;
}

/// A vec-backed scene, mainly for tests and examples.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    objects: Vec<SceneObject>,
}

impl MemoryScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add a single object to the scene.
    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Add multiple objects to the scene.
    pub fn with_objects(mut self, objects: impl IntoIterator<Item = SceneObject>) -> Self {
        self.objects.extend(objects);
        self
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl SceneQuery for MemoryScene {
    fn objects(&self) -> Vec<SceneObject> {
        self.objects.clone()
    }
}
