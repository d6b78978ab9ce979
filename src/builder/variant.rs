//! Variant-style blockstate assembly.

use std::collections::BTreeMap;

use crate::document::{BlockstateDocument, ModelGroup};
use crate::error::{GeneratorError, Result};
use crate::shapes::ShapeRule;
use crate::types::{combinations, BlockDef, PartialState, Property, StateCombination};

/// Builds the per-state model table of a variant-style blockstate document.
///
/// Entries are keyed by [`PartialState`] matchers; at assembly time every
/// combination in the block's full state space must be covered by exactly
/// one entry. Created through
/// [`BlockStateRegistry::variant_builder`](crate::registry::BlockStateRegistry::variant_builder).
#[derive(Debug)]
pub struct VariantBuilder {
    block: BlockDef,
    entries: BTreeMap<PartialState, ModelGroup>,
}

impl VariantBuilder {
    pub(crate) fn new(block: BlockDef) -> Self {
        Self {
            block,
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn block(&self) -> &BlockDef {
        &self.block
    }

    /// Assign `models` to every state combination matching `state`.
    ///
    /// # Panics
    ///
    /// Panics when the matcher references an undeclared property or a value
    /// outside its domain, or when models were already set for the exact
    /// same matcher. Overlapping but distinct matchers are only rejected at
    /// flush time, when coverage is checked.
    pub fn set_models(&mut self, state: PartialState, models: ModelGroup) -> &mut Self {
        for (property, value) in state.pairs() {
            let declared = self.block.property(property).unwrap_or_else(|| {
                panic!(
                    "block {} has no property `{}`",
                    self.block.name(),
                    property
                )
            });
            assert!(
                declared.accepts(value),
                "block {}: `{}` is not a value of property `{}`",
                self.block.name(),
                value,
                property
            );
        }
        let key = state.key();
        let previous = self.entries.insert(state, models);
        assert!(
            previous.is_none(),
            "block {}: models already set for [{}]",
            self.block.name(),
            key
        );
        self
    }

    /// Run `rule` for every combination in the block's state space.
    pub fn for_all<R: ShapeRule>(&mut self, rule: R) -> &mut Self {
        self.for_all_except(&[], rule)
    }

    /// [`for_all`](Self::for_all) with the properties named in `excluded`
    /// collapsed away before the rule runs.
    pub fn for_all_except<R: ShapeRule>(&mut self, excluded: &[&str], rule: R) -> &mut Self {
        self.for_all_states_except(excluded, |state| rule.assign(state))
    }

    /// Closure form of [`for_all`](Self::for_all), for one-off blocks that
    /// don't warrant a named rule.
    pub fn for_all_states<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&StateCombination) -> ModelGroup,
    {
        self.for_all_states_except(&[], f)
    }

    /// Run `f` for every combination of the properties *not* named in
    /// `excluded`.
    ///
    /// The state space is partitioned by the projection that drops the
    /// excluded properties; `f` runs once per projected combination, on a
    /// representative full combination, and its group is stored under the
    /// projected matcher so it applies to every state sharing that
    /// projection. Excluded properties therefore never show up in the
    /// emitted keys. Names the block does not declare are ignored, so rules
    /// can exclude e.g. "powered" unconditionally.
    pub fn for_all_states_except<F>(&mut self, excluded: &[&str], f: F) -> &mut Self
    where
        F: Fn(&StateCombination) -> ModelGroup,
    {
        let kept: Vec<&Property> = self
            .block
            .properties()
            .iter()
            .filter(|p| !excluded.contains(&p.name()))
            .collect();
        // Owned (name, first domain value) pairs; the block stays borrowed
        // only up to here, freeing `set_models` inside the loop.
        let dropped: Vec<(String, String)> = self
            .block
            .properties()
            .iter()
            .filter(|p| excluded.contains(&p.name()))
            .map(|p| (p.name().to_string(), p.values()[0].clone()))
            .collect();
        let projections = combinations(&kept);

        for projected in projections {
            let mut matcher = PartialState::new();
            for (property, value) in &projected {
                matcher = matcher.with(property, value);
            }

            // Representative full state: the projection plus the first
            // domain value of each dropped property. Rules must not read
            // the dropped properties, so the choice is arbitrary.
            let mut full = projected;
            for (property, value) in &dropped {
                full.insert(property.clone(), value.clone());
            }

            let models = f(&StateCombination::from_map(full));
            self.set_models(matcher, models);
        }
        self
    }

    /// Check coverage and produce the variants document.
    pub(crate) fn assemble(self) -> Result<BlockstateDocument> {
        for state in self.block.states() {
            let matching = self
                .entries
                .keys()
                .filter(|matcher| matcher.matches(&state))
                .count();
            match matching {
                1 => {}
                0 => {
                    return Err(GeneratorError::UnassignedState {
                        block: self.block.name().to_string(),
                        state: state.key(),
                    })
                }
                count => {
                    return Err(GeneratorError::ConflictingState {
                        block: self.block.name().to_string(),
                        state: state.key(),
                        count,
                    })
                }
            }
        }

        let variants = self
            .entries
            .into_iter()
            .map(|(matcher, models)| (matcher.key(), models))
            .collect();
        Ok(BlockstateDocument::Variants(variants))
    }
}
