//! Blockstate document model and serialization.
//!
//! These types mirror the blockstates/*.json schema: a document is either a
//! "variants" map from state keys to model assignments, or a "multipart"
//! list of conditionally applied parts. Default-valued fields (rotation 0,
//! uvlock false, weight 1) are omitted on output.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::types::ModelRef;

/// A model reference with its orientation transform.
///
/// Rotations are about the X and Y axes, in degrees, and always one of
/// 0, 90, 180 or 270. `weight` participates in weighted random selection
/// when several variants share one state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelVariant {
    /// Model resource location (e.g., "minecraft:block/oak_stairs").
    pub model: String,
    /// X rotation in degrees.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub x: i32,
    /// Y rotation in degrees.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub y: i32,
    /// If true, UV coordinates don't rotate with the block.
    #[serde(default, skip_serializing_if = "is_false")]
    pub uvlock: bool,
    /// Weight for random selection.
    #[serde(default = "default_weight", skip_serializing_if = "is_default_weight")]
    pub weight: u32,
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}

fn is_false(v: &bool) -> bool {
    !*v
}

fn default_weight() -> u32 {
    1
}

fn is_default_weight(w: &u32) -> bool {
    *w == 1
}

impl ModelVariant {
    /// An untransformed variant of the given model.
    pub fn of(model: &ModelRef) -> Self {
        Self {
            model: model.location().to_string(),
            x: 0,
            y: 0,
            uvlock: false,
            weight: 1,
        }
    }

    /// Start building a transformed variant of the given model.
    pub fn builder(model: &ModelRef) -> ModelVariantBuilder {
        ModelVariantBuilder {
            variant: Self::of(model),
        }
    }
}

/// Builder for [`ModelVariant`]. Construction only; the built variant is
/// immutable.
#[derive(Debug, Clone)]
pub struct ModelVariantBuilder {
    variant: ModelVariant,
}

impl ModelVariantBuilder {
    /// Set the rotation about the X axis.
    ///
    /// # Panics
    ///
    /// Panics when `degrees` is not a multiple of 90; non-cardinal angles
    /// never occur in a correct shape rule.
    pub fn rotation_x(mut self, degrees: i32) -> Self {
        self.variant.x = canonical_angle(degrees);
        self
    }

    /// Set the rotation about the Y axis.
    ///
    /// # Panics
    ///
    /// Panics when `degrees` is not a multiple of 90.
    pub fn rotation_y(mut self, degrees: i32) -> Self {
        self.variant.y = canonical_angle(degrees);
        self
    }

    /// Set the uv-lock flag.
    pub fn uv_lock(mut self, uvlock: bool) -> Self {
        self.variant.uvlock = uvlock;
        self
    }

    /// Set the random-selection weight.
    ///
    /// # Panics
    ///
    /// Panics when `weight` is zero.
    pub fn weight(mut self, weight: u32) -> Self {
        assert!(weight > 0, "model weight must be positive");
        self.variant.weight = weight;
        self
    }

    pub fn build(self) -> ModelVariant {
        self.variant
    }
}

/// Normalize an angle to {0, 90, 180, 270}.
fn canonical_angle(degrees: i32) -> i32 {
    assert!(
        degrees % 90 == 0,
        "rotation must be a multiple of 90 degrees, got {}",
        degrees
    );
    degrees.rem_euclid(360)
}

/// A non-empty ordered group of model variants attached to one state.
///
/// Serializes as a bare object when it holds a single variant and as an
/// array otherwise, matching the schema's single-vs-weighted distinction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelGroup(Vec<ModelVariant>);

impl ModelGroup {
    /// A group holding one variant.
    pub fn single(variant: ModelVariant) -> Self {
        Self(vec![variant])
    }

    /// A group holding the given variants, in order.
    ///
    /// # Panics
    ///
    /// Panics when `variants` is empty; a state with no models is an
    /// invariant violation.
    pub fn new(variants: Vec<ModelVariant>) -> Self {
        assert!(!variants.is_empty(), "model group must not be empty");
        Self(variants)
    }

    pub fn variants(&self) -> &[ModelVariant] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; emptiness is ruled out at construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Serialize for ModelGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.len() == 1 {
            self.0[0].serialize(serializer)
        } else {
            self.0.serialize(serializer)
        }
    }
}

/// A conjunction of `property -> accepted values` terms.
///
/// A term with several accepted values is an OR over those values and
/// serializes pipe-joined (e.g., `"north|south"`). Disjunction across
/// properties is expressed as separate multipart cases, never inside one
/// condition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Condition(BTreeMap<String, Vec<String>>);

impl Condition {
    /// An empty conjunction; add terms with [`term`](Self::term) or
    /// [`any_of`](Self::any_of).
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `property == value`.
    pub fn term(self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.any_of(property, [value])
    }

    /// Require `property` to hold one of `values`.
    ///
    /// # Panics
    ///
    /// Panics when `values` is empty.
    pub fn any_of<S: Into<String>>(
        mut self,
        property: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        let property = property.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        assert!(
            !values.is_empty(),
            "condition on `{}` accepts no values",
            property
        );
        self.0.insert(property, values);
        self
    }

    /// The `(property, accepted values)` terms, sorted by property name.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (property, values) in &self.0 {
            map.serialize_entry(property, &values.join("|"))?;
        }
        map.end()
    }
}

/// One entry of a multipart document: a model group applied whenever the
/// condition matches (or unconditionally when `when` is absent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultipartCase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<Condition>,
    pub apply: ModelGroup,
}

/// A complete blockstate document in one of its two shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockstateDocument {
    /// State keys mapped to model assignments; keys are canonical sorted
    /// `property=value,...` strings.
    Variants(BTreeMap<String, ModelGroup>),
    /// Independently overlaid conditional parts, in declaration order.
    Multipart(Vec<MultipartCase>),
}
