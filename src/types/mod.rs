//! Shared types used throughout the library.

mod direction;
mod property;

pub use direction::{AttachFace, Axis, Direction};
pub use property::{BlockDef, PartialState, Property, StateCombination};

pub(crate) use property::combinations;

/// Opaque handle to a block model declared by the external model pipeline.
///
/// This crate never inspects or validates the model; it only carries the
/// resource location into the emitted documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelRef {
    location: String,
}

impl ModelRef {
    /// Wrap a model resource location (e.g., "minecraft:block/oak_stairs").
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// The model's resource location.
    pub fn location(&self) -> &str {
        &self.location
    }
}

impl std::fmt::Display for ModelRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.location)
    }
}
