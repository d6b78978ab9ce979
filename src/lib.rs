//! # Blockstate Gen
//!
//! A Rust library for generating Minecraft-style blockstate definition
//! documents (blockstates/*.json) from block properties and shape rules.
//!
//! ## Overview
//!
//! Given a block and its discrete state properties, the library decides for
//! every reachable property combination which model applies and how it is
//! oriented (cardinal X/Y rotations, uv-lock, weight), then serializes the
//! result as a "variants" or "multipart" document. Model files themselves
//! are an external concern: the generator only carries opaque [`ModelRef`]
//! handles into the output.
//!
//! ## Quick Start
//!
//! ```
//! use blockstate_gen::{
//!     shapes, BlockDef, BlockStateRegistry, MemorySink, ModelRef, Property,
//! };
//!
//! let mut registry = BlockStateRegistry::new();
//!
//! let log = BlockDef::new("minecraft:oak_log").with_property(Property::axis());
//! shapes::axis_block(&mut registry, &log, &ModelRef::new("block/oak_log"));
//!
//! let fence = BlockDef::new("minecraft:oak_fence")
//!     .with_property(Property::boolean("north"))
//!     .with_property(Property::boolean("south"))
//!     .with_property(Property::boolean("west"))
//!     .with_property(Property::boolean("east"));
//! shapes::fence_block(
//!     &mut registry,
//!     &fence,
//!     &ModelRef::new("block/oak_fence_post"),
//!     &ModelRef::new("block/oak_fence_side"),
//! );
//!
//! let mut sink = MemorySink::new();
//! registry.flush(&mut sink).unwrap();
//! assert_eq!(sink.len(), 2);
//! ```
//!
//! One-off blocks that don't fit a named shape family register a closure
//! instead, through
//! [`VariantBuilder::for_all_states`](builder::VariantBuilder::for_all_states) or
//! [`for_all_states_except`](builder::VariantBuilder::for_all_states_except).

pub mod builder;
pub mod document;
pub mod error;
pub mod registry;
pub mod shapes;
pub mod sink;
pub mod types;

// Re-export main types for convenience
pub use builder::{AxisFilter, MultipartBuilder, VariantBuilder};
pub use document::{BlockstateDocument, Condition, ModelGroup, ModelVariant, MultipartCase};
pub use error::{GeneratorError, Result};
pub use registry::BlockStateRegistry;
pub use shapes::ShapeRule;
pub use sink::{DiskSink, MemorySink, StateSink};
pub use types::{
    AttachFace, Axis, BlockDef, Direction, ModelRef, PartialState, Property, StateCombination,
};
