//! Block state properties and state-space enumeration.
//!
//! A [`Property`] is a named, finite, ordered domain of values. A
//! [`BlockDef`] couples a block identity with its property list; the full
//! state space is the Cartesian product of the property domains.

use std::collections::BTreeMap;

use super::direction::{AttachFace, Axis, Direction};

/// A named, finite-domain state property. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    values: Vec<String>,
}

impl Property {
    /// Create a property with an explicit ordered domain.
    ///
    /// # Panics
    ///
    /// Panics on an empty domain or duplicate values.
    pub fn new<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        assert!(!values.is_empty(), "property `{}` has an empty domain", name);
        for (i, v) in values.iter().enumerate() {
            assert!(
                !values[..i].contains(v),
                "property `{}` declares value `{}` twice",
                name,
                v
            );
        }
        Self { name, values }
    }

    /// A boolean property with domain `true`, `false`.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ["true", "false"])
    }

    /// The three-valued `axis` property (x, y, z).
    pub fn axis() -> Self {
        Self::new("axis", [Axis::X, Axis::Y, Axis::Z].map(|a| a.to_string()))
    }

    /// A `facing` property over the four horizontal directions.
    pub fn horizontal_facing() -> Self {
        Self::new("facing", Direction::HORIZONTAL.map(|d| d.to_string()))
    }

    /// A `facing` property over all six directions.
    pub fn facing() -> Self {
        Self::new("facing", Direction::ALL.map(|d| d.to_string()))
    }

    /// The `face` property of face-attached blocks (floor, wall, ceiling).
    pub fn attach_face() -> Self {
        Self::new(
            "face",
            [AttachFace::Floor, AttachFace::Wall, AttachFace::Ceiling].map(|f| f.to_string()),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The domain, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Whether `value` is part of this property's domain.
    pub fn accepts(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// A block identity plus its declared state properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDef {
    name: String,
    properties: Vec<Property>,
}

impl BlockDef {
    /// Create a block definition. `name` is a resource location like
    /// `"minecraft:oak_stairs"`; a bare path defaults to the `minecraft`
    /// namespace when split.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property to this block.
    ///
    /// # Panics
    ///
    /// Panics when a property with the same name was already declared.
    pub fn with_property(mut self, property: Property) -> Self {
        assert!(
            self.property(property.name()).is_none(),
            "block {} declares property `{}` twice",
            self.name,
            property.name()
        );
        self.properties.push(property);
        self
    }

    /// Full resource location of the block.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the namespace (e.g., "minecraft").
    pub fn namespace(&self) -> &str {
        self.name.split(':').next().unwrap_or("minecraft")
    }

    /// Get the block ID without namespace (e.g., "oak_stairs").
    pub fn block_id(&self) -> &str {
        self.name.split(':').nth(1).unwrap_or(&self.name)
    }

    /// The declared properties, in declaration order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Enumerate the full state space. A block with no properties has
    /// exactly one (empty) state combination.
    pub fn states(&self) -> Vec<StateCombination> {
        let props: Vec<&Property> = self.properties.iter().collect();
        combinations(&props)
            .into_iter()
            .map(StateCombination)
            .collect()
    }
}

/// Cartesian product of the given property domains, in declaration order
/// (later properties vary fastest).
pub(crate) fn combinations(props: &[&Property]) -> Vec<BTreeMap<String, String>> {
    let mut out = vec![BTreeMap::new()];
    for prop in props {
        let mut next = Vec::with_capacity(out.len() * prop.values().len());
        for base in &out {
            for value in prop.values() {
                let mut assignment = base.clone();
                assignment.insert(prop.name().to_string(), value.clone());
                next.push(assignment);
            }
        }
        out = next;
    }
    out
}

/// A total assignment of values to all of a block's properties.
///
/// Backed by a sorted map, so equality, ordering and the rendered key are
/// canonical regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StateCombination(BTreeMap<String, String>);

impl StateCombination {
    /// An empty combination (for blocks without properties, or as a
    /// starting point for [`with`](Self::with)).
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `property` set to `value`.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Get a property value, if present.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Get a property value.
    ///
    /// # Panics
    ///
    /// Panics when the property is absent; shape rules only read properties
    /// their block declares, so a miss is a programming error.
    pub fn value(&self, property: &str) -> &str {
        self.get(property)
            .unwrap_or_else(|| panic!("state has no property `{}`", property))
    }

    /// Read a property as a [`Direction`].
    ///
    /// # Panics
    ///
    /// Panics when the property is absent or not a direction name.
    pub fn direction(&self, property: &str) -> Direction {
        let raw = self.value(property);
        Direction::from_str(raw)
            .unwrap_or_else(|| panic!("property `{}` holds `{}`, not a direction", property, raw))
    }

    /// Read a property as an [`AttachFace`].
    ///
    /// # Panics
    ///
    /// Panics when the property is absent or not an attach face.
    pub fn face(&self, property: &str) -> AttachFace {
        let raw = self.value(property);
        AttachFace::from_str(raw)
            .unwrap_or_else(|| panic!("property `{}` holds `{}`, not an attach face", property, raw))
    }

    /// Read a boolean property.
    ///
    /// # Panics
    ///
    /// Panics when the property is absent.
    pub fn is_true(&self, property: &str) -> bool {
        self.value(property) == "true"
    }

    /// Canonical `name=value,...` key, sorted by property name. Empty for a
    /// combination without properties.
    pub fn key(&self) -> String {
        join_pairs(&self.0)
    }

    pub(crate) fn from_map(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// A matcher over a subset of a block's properties. Properties that are not
/// mentioned are wildcards; the empty matcher matches every state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PartialState(BTreeMap<String, String>);

impl PartialState {
    /// A matcher with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy that additionally requires `property == value`.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Whether the given full combination agrees with every constrained
    /// property.
    pub fn matches(&self, state: &StateCombination) -> bool {
        self.0
            .iter()
            .all(|(prop, value)| state.get(prop) == Some(value.as_str()))
    }

    /// The constrained `(property, value)` pairs, sorted by property name.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether this matcher constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical `name=value,...` key, sorted by property name. Empty string
    /// for the unconstrained matcher.
    pub fn key(&self) -> String {
        join_pairs(&self.0)
    }
}

fn join_pairs(map: &BTreeMap<String, String>) -> String {
    map.iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}
