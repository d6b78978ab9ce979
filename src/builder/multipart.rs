//! Multipart-style blockstate assembly.

use crate::document::{BlockstateDocument, Condition, ModelGroup, MultipartCase};
use crate::error::{GeneratorError, Result};
use crate::types::{Axis, BlockDef, Direction};

/// Restricts [`MultipartBuilder::for_all_directions`] to a subset of the
/// six directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisFilter {
    /// Only north, south, west, east.
    Horizontal,
    /// Only up and down.
    Vertical,
    /// All six directions.
    All,
}

impl AxisFilter {
    fn accepts(&self, axis: Axis) -> bool {
        match self {
            AxisFilter::Horizontal => axis.is_horizontal(),
            AxisFilter::Vertical => axis.is_vertical(),
            AxisFilter::All => true,
        }
    }
}

/// Builds the ordered part list of a multipart blockstate document.
///
/// Parts are evaluated independently by the consumer; every matching part
/// is overlaid rather than one being selected. Created through
/// [`BlockStateRegistry::multipart_builder`](crate::registry::BlockStateRegistry::multipart_builder).
#[derive(Debug)]
pub struct MultipartBuilder {
    block: BlockDef,
    parts: Vec<MultipartCase>,
}

impl MultipartBuilder {
    pub(crate) fn new(block: BlockDef) -> Self {
        Self {
            block,
            parts: Vec::new(),
        }
    }

    pub(crate) fn block(&self) -> &BlockDef {
        &self.block
    }

    /// Append an unconditional part.
    pub fn part(&mut self, models: ModelGroup) -> &mut Self {
        self.parts.push(MultipartCase { when: None, apply: models });
        self
    }

    /// Append a part applied when `condition` matches.
    ///
    /// # Panics
    ///
    /// Panics when the condition references an undeclared property or a
    /// value outside its domain, or when the condition is empty (an
    /// always-on part is spelled [`part`](Self::part)).
    pub fn part_when(&mut self, models: ModelGroup, condition: Condition) -> &mut Self {
        assert!(
            !condition.is_empty(),
            "block {}: empty condition, use part() for unconditional parts",
            self.block.name()
        );
        for (property, values) in condition.terms() {
            let declared = self.block.property(property).unwrap_or_else(|| {
                panic!(
                    "block {} has no property `{}`",
                    self.block.name(),
                    property
                )
            });
            for value in values {
                assert!(
                    declared.accepts(value),
                    "block {}: `{}` is not a value of property `{}`",
                    self.block.name(),
                    value,
                    property
                );
            }
        }
        self.parts.push(MultipartCase {
            when: Some(condition),
            apply: models,
        });
        self
    }

    /// Append one part per direction accepted by `filter`, each conditioned
    /// on that direction's boolean connectivity property being `"true"`.
    ///
    /// The factory receives the direction and produces the part's models,
    /// typically deriving the Y rotation from
    /// [`Direction::horizontal_angle`].
    pub fn for_all_directions<F>(&mut self, filter: AxisFilter, mut models: F) -> &mut Self
    where
        F: FnMut(Direction) -> ModelGroup,
    {
        for direction in Direction::ALL {
            if filter.accepts(direction.axis()) {
                self.part_when(
                    models(direction),
                    Condition::new().term(direction.to_string(), "true"),
                );
            }
        }
        self
    }

    /// Produce the multipart document.
    pub(crate) fn assemble(self) -> Result<BlockstateDocument> {
        if self.parts.is_empty() {
            return Err(GeneratorError::EmptyMultipart {
                block: self.block.name().to_string(),
            });
        }
        Ok(BlockstateDocument::Multipart(self.parts))
    }
}
