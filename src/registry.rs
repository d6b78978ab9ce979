//! Caller-owned registry of in-progress blockstate definitions.
//!
//! The registry records one builder per block, in registration order, and
//! is drained exactly once: [`flush`](BlockStateRegistry::flush) assembles
//! every block's document and hands it to a [`StateSink`].

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::builder::{MultipartBuilder, VariantBuilder};
use crate::error::{GeneratorError, Result};
use crate::sink::StateSink;
use crate::types::BlockDef;

#[derive(Debug)]
enum RegistryEntry {
    Variants(VariantBuilder),
    Multipart(MultipartBuilder),
}

/// Collects blockstate builders across many registration calls and flushes
/// them in one pass.
///
/// A block is registered as variant-style or multipart-style, never both;
/// asking for the other kind afterwards is a programming error and panics.
#[derive(Debug, Default)]
pub struct BlockStateRegistry {
    /// Block names in first-registration order.
    order: Vec<String>,
    entries: HashMap<String, RegistryEntry>,
}

impl BlockStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered blocks.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get (or create) the variant builder for `block`.
    ///
    /// # Panics
    ///
    /// Panics when the block is already registered as multipart, or was
    /// first registered with a different property set.
    pub fn variant_builder(&mut self, block: &BlockDef) -> &mut VariantBuilder {
        match self.entry(block, |def| RegistryEntry::Variants(VariantBuilder::new(def))) {
            RegistryEntry::Variants(builder) => builder,
            RegistryEntry::Multipart(_) => panic!(
                "block {} is already registered as multipart",
                block.name()
            ),
        }
    }

    /// Get (or create) the multipart builder for `block`.
    ///
    /// # Panics
    ///
    /// Panics when the block is already registered as variant-style, or was
    /// first registered with a different property set.
    pub fn multipart_builder(&mut self, block: &BlockDef) -> &mut MultipartBuilder {
        match self.entry(block, |def| {
            RegistryEntry::Multipart(MultipartBuilder::new(def))
        }) {
            RegistryEntry::Multipart(builder) => builder,
            RegistryEntry::Variants(_) => panic!(
                "block {} is already registered as variant-style",
                block.name()
            ),
        }
    }

    fn entry(
        &mut self,
        block: &BlockDef,
        create: impl FnOnce(BlockDef) -> RegistryEntry,
    ) -> &mut RegistryEntry {
        let entry = match self.entries.entry(block.name().to_string()) {
            Entry::Vacant(vacant) => {
                self.order.push(block.name().to_string());
                vacant.insert(create(block.clone()))
            }
            Entry::Occupied(occupied) => occupied.into_mut(),
        };
        let registered = match &*entry {
            RegistryEntry::Variants(b) => b.block(),
            RegistryEntry::Multipart(b) => b.block(),
        };
        assert!(
            registered == block,
            "block {} re-registered with a different definition",
            block.name()
        );
        entry
    }

    /// Assemble and write every registered document, in registration order.
    ///
    /// Blocks are independent: a block whose assembly or write fails is
    /// logged and skipped, and the remaining blocks are still produced.
    /// Returns [`GeneratorError::Flush`] when anything failed.
    pub fn flush<S: StateSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        let total = self.order.len();
        let mut failed = 0;

        for name in self.order.drain(..) {
            let Some(entry) = self.entries.remove(&name) else {
                continue;
            };
            let (block, assembled) = match entry {
                RegistryEntry::Variants(builder) => {
                    (builder.block().clone(), builder.assemble())
                }
                RegistryEntry::Multipart(builder) => {
                    (builder.block().clone(), builder.assemble())
                }
            };
            let result = assembled
                .and_then(|doc| sink.write(block.namespace(), block.block_id(), &doc));
            if let Err(err) = result {
                log::error!("couldn't generate blockstate for {}: {}", name, err);
                failed += 1;
            }
        }

        if failed > 0 {
            Err(GeneratorError::Flush { failed, total })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ModelGroup, ModelVariant};
    use crate::sink::MemorySink;
    use crate::types::{ModelRef, PartialState, Property};

    fn single(loc: &str) -> ModelGroup {
        ModelGroup::single(ModelVariant::of(&ModelRef::new(loc)))
    }

    #[test]
    fn test_repeated_calls_return_same_builder() {
        let mut registry = BlockStateRegistry::new();
        let block = BlockDef::new("minecraft:stone");
        registry
            .variant_builder(&block)
            .set_models(PartialState::new(), single("block/stone"));
        // A second call mutates the same in-progress table.
        registry.variant_builder(&block);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered as variant-style")]
    fn test_kind_switch_panics() {
        let mut registry = BlockStateRegistry::new();
        let block = BlockDef::new("minecraft:oak_fence");
        registry.variant_builder(&block);
        registry.multipart_builder(&block);
    }

    #[test]
    #[should_panic(expected = "re-registered with a different definition")]
    fn test_redefinition_panics() {
        let mut registry = BlockStateRegistry::new();
        registry.variant_builder(&BlockDef::new("minecraft:lever"));
        registry.variant_builder(
            &BlockDef::new("minecraft:lever").with_property(Property::boolean("powered")),
        );
    }

    #[test]
    fn test_flush_writes_in_registration_order() {
        let mut registry = BlockStateRegistry::new();
        let stone = BlockDef::new("minecraft:stone");
        let dirt = BlockDef::new("minecraft:dirt");
        registry
            .variant_builder(&stone)
            .set_models(PartialState::new(), single("block/stone"));
        registry
            .variant_builder(&dirt)
            .set_models(PartialState::new(), single("block/dirt"));

        let mut sink = MemorySink::new();
        registry.flush(&mut sink).unwrap();
        assert!(registry.is_empty());

        let names: Vec<_> = sink.documents().map(|(name, _)| name.to_string()).collect();
        assert_eq!(names, ["minecraft:stone", "minecraft:dirt"]);
    }

    #[test]
    fn test_flush_keeps_going_after_a_bad_block() {
        let mut registry = BlockStateRegistry::new();

        // Incomplete: declared property never assigned.
        let broken = BlockDef::new("minecraft:lever").with_property(Property::boolean("powered"));
        registry.variant_builder(&broken);

        let stone = BlockDef::new("minecraft:stone");
        registry
            .variant_builder(&stone)
            .set_models(PartialState::new(), single("block/stone"));

        let mut sink = MemorySink::new();
        match registry.flush(&mut sink) {
            Err(GeneratorError::Flush { failed, total }) => {
                assert_eq!((failed, total), (1, 2));
            }
            other => panic!("expected Flush error, got {:?}", other),
        }
        // The healthy block still made it out.
        assert!(sink.get("minecraft:stone").is_some());
        assert!(sink.get("minecraft:lever").is_none());
    }
}
