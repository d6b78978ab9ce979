//! Shape rule library: registration helpers for recurring shape families.
//!
//! Each helper wires one block into a [`BlockStateRegistry`] using its
//! family's geometric convention, encoded by the per-family [`ShapeRule`]
//! structs. Blocks stay registered until the registry is flushed.

mod rules;

pub use rules::{
    DirectionalRule, DoorRule, FenceGateRule, HorizontalFaceRule, HorizontalRule, StairsRule,
    TrapdoorRule,
};

use crate::builder::{AxisFilter, MultipartBuilder};
use crate::document::{Condition, ModelGroup, ModelVariant};
use crate::registry::BlockStateRegistry;
use crate::types::{Axis, BlockDef, Direction, ModelRef, PartialState, StateCombination};

/// Default yaw correction: model fronts are authored facing south.
pub const DEFAULT_ANGLE_OFFSET: i32 = 180;

/// One rule application: a state combination mapped to its models.
///
/// Implemented once per shape family. One-off blocks that don't warrant a
/// named rule use the closure-based
/// [`VariantBuilder::for_all_states`](crate::builder::VariantBuilder::for_all_states)
/// instead.
pub trait ShapeRule {
    fn assign(&self, state: &StateCombination) -> ModelGroup;
}

/// A block with no state-dependent appearance: one model for everything.
pub fn simple_block(registry: &mut BlockStateRegistry, block: &BlockDef, model: &ModelRef) {
    simple_block_models(registry, block, ModelGroup::single(ModelVariant::of(model)));
}

/// Like [`simple_block`], with a caller-built group (e.g., weighted random
/// texture rotations).
pub fn simple_block_models(registry: &mut BlockStateRegistry, block: &BlockDef, models: ModelGroup) {
    registry
        .variant_builder(block)
        .set_models(PartialState::new(), models);
}

/// A pillar/log block with a 3-valued `axis` property and one shared model
/// authored along the Y axis.
pub fn axis_block(registry: &mut BlockStateRegistry, block: &BlockDef, model: &ModelRef) {
    registry
        .variant_builder(block)
        .set_models(
            PartialState::new().with("axis", Axis::Y.to_string()),
            ModelGroup::single(ModelVariant::of(model)),
        )
        .set_models(
            PartialState::new().with("axis", Axis::Z.to_string()),
            ModelGroup::single(ModelVariant::builder(model).rotation_x(90).build()),
        )
        .set_models(
            PartialState::new().with("axis", Axis::X.to_string()),
            ModelGroup::single(
                ModelVariant::builder(model).rotation_x(90).rotation_y(90).build(),
            ),
        );
}

/// A block with a 4-way `facing` property, using the default yaw offset.
pub fn horizontal_block(registry: &mut BlockStateRegistry, block: &BlockDef, model: &ModelRef) {
    horizontal_block_with_offset(registry, block, model, DEFAULT_ANGLE_OFFSET);
}

/// [`horizontal_block`] with an explicit yaw offset, for models authored at
/// a different default orientation.
pub fn horizontal_block_with_offset(
    registry: &mut BlockStateRegistry,
    block: &BlockDef,
    model: &ModelRef,
    offset: i32,
) {
    registry.variant_builder(block).for_all(HorizontalRule {
        model: model.clone(),
        offset,
    });
}

/// A face-attached block (floor/wall/ceiling `face` plus 4-way `facing`).
pub fn horizontal_face_block(registry: &mut BlockStateRegistry, block: &BlockDef, model: &ModelRef) {
    registry.variant_builder(block).for_all(HorizontalFaceRule {
        model: model.clone(),
        offset: DEFAULT_ANGLE_OFFSET,
    });
}

/// A block with a 6-way `facing` property.
pub fn directional_block(registry: &mut BlockStateRegistry, block: &BlockDef, model: &ModelRef) {
    registry.variant_builder(block).for_all(DirectionalRule {
        model: model.clone(),
        offset: DEFAULT_ANGLE_OFFSET,
    });
}

/// Stairs, from the straight, inner and outer corner models.
pub fn stairs_block(
    registry: &mut BlockStateRegistry,
    block: &BlockDef,
    stairs: &ModelRef,
    inner: &ModelRef,
    outer: &ModelRef,
) {
    registry.variant_builder(block).for_all_except(
        &["powered", "waterlogged"],
        StairsRule {
            stairs: stairs.clone(),
            inner: inner.clone(),
            outer: outer.clone(),
        },
    );
}

/// A slab: `type` picks bottom, top, or the caller-supplied full-block
/// model for the double state.
pub fn slab_block(
    registry: &mut BlockStateRegistry,
    block: &BlockDef,
    bottom: &ModelRef,
    top: &ModelRef,
    double: &ModelRef,
) {
    registry
        .variant_builder(block)
        .set_models(
            PartialState::new().with("type", "bottom"),
            ModelGroup::single(ModelVariant::of(bottom)),
        )
        .set_models(
            PartialState::new().with("type", "top"),
            ModelGroup::single(ModelVariant::of(top)),
        )
        .set_models(
            PartialState::new().with("type", "double"),
            ModelGroup::single(ModelVariant::of(double)),
        );
}

/// Append one connector part per horizontal direction, rotated to face it
/// and conditioned on that direction's connectivity flag.
pub fn four_way_multipart(builder: &mut MultipartBuilder, side: &ModelRef) {
    builder.for_all_directions(AxisFilter::Horizontal, |direction| {
        ModelGroup::single(
            ModelVariant::builder(side)
                .rotation_y(direction.horizontal_angle() + DEFAULT_ANGLE_OFFSET)
                .uv_lock(true)
                .build(),
        )
    });
}

/// A fence: an unconditional post plus four conditional connectors.
pub fn fence_block(
    registry: &mut BlockStateRegistry,
    block: &BlockDef,
    post: &ModelRef,
    side: &ModelRef,
) {
    let builder = registry.multipart_builder(block);
    builder.part(ModelGroup::single(ModelVariant::of(post)));
    four_way_multipart(builder, side);
}

/// A wall: like a fence, but the post only renders when `up` is set.
pub fn wall_block(
    registry: &mut BlockStateRegistry,
    block: &BlockDef,
    post: &ModelRef,
    side: &ModelRef,
) {
    let builder = registry.multipart_builder(block);
    builder.part_when(
        ModelGroup::single(ModelVariant::of(post)),
        Condition::new().term("up", "true"),
    );
    four_way_multipart(builder, side);
}

/// A glass-pane style block.
///
/// Per direction this emits a connected side part and a complementary
/// no-side filler part with the opposite condition polarity, so the
/// consumer overlays exactly the right connector pieces. The `_alt` models
/// alternate between directions to break up visible texture repetition.
pub fn pane_block(
    registry: &mut BlockStateRegistry,
    block: &BlockDef,
    post: &ModelRef,
    side: &ModelRef,
    side_alt: &ModelRef,
    noside: &ModelRef,
    noside_alt: &ModelRef,
) {
    let builder = registry.multipart_builder(block);
    builder.part(ModelGroup::single(ModelVariant::of(post)));
    for direction in Direction::HORIZONTAL {
        let alt = direction == Direction::South;

        let side_model = if alt || direction == Direction::West {
            side_alt
        } else {
            side
        };
        let side_y = if direction.axis() == Axis::X { 90 } else { 0 };
        builder.part_when(
            ModelGroup::single(ModelVariant::builder(side_model).rotation_y(side_y).build()),
            Condition::new().term(direction.to_string(), "true"),
        );

        let noside_model = if alt || direction == Direction::East {
            noside_alt
        } else {
            noside
        };
        let noside_y = match direction {
            Direction::West => 270,
            Direction::South => 90,
            _ => 0,
        };
        builder.part_when(
            ModelGroup::single(
                ModelVariant::builder(noside_model).rotation_y(noside_y).build(),
            ),
            Condition::new().term(direction.to_string(), "false"),
        );
    }
}

/// A fence gate, from its four {default, open} x {free-standing, in-wall}
/// models.
pub fn fence_gate_block(
    registry: &mut BlockStateRegistry,
    block: &BlockDef,
    gate: &ModelRef,
    gate_open: &ModelRef,
    wall: &ModelRef,
    wall_open: &ModelRef,
) {
    registry.variant_builder(block).for_all_except(
        &["powered"],
        FenceGateRule {
            gate: gate.clone(),
            gate_open: gate_open.clone(),
            wall: wall.clone(),
            wall_open: wall_open.clone(),
        },
    );
}

/// A door, from its four {bottom, top} x {left, right-hinge} models.
pub fn door_block(
    registry: &mut BlockStateRegistry,
    block: &BlockDef,
    bottom_left: &ModelRef,
    bottom_right: &ModelRef,
    top_left: &ModelRef,
    top_right: &ModelRef,
) {
    registry.variant_builder(block).for_all_except(
        &["powered"],
        DoorRule {
            bottom_left: bottom_left.clone(),
            bottom_right: bottom_right.clone(),
            top_left: top_left.clone(),
            top_right: top_right.clone(),
        },
    );
}

/// A trapdoor. `orientable` selects between the model family that renders
/// correctly when rotated open and the legacy symmetric one.
pub fn trapdoor_block(
    registry: &mut BlockStateRegistry,
    block: &BlockDef,
    bottom: &ModelRef,
    top: &ModelRef,
    open: &ModelRef,
    orientable: bool,
) {
    registry.variant_builder(block).for_all_except(
        &["powered", "waterlogged"],
        TrapdoorRule {
            bottom: bottom.clone(),
            top: top.clone(),
            open: open.clone(),
            orientable,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::types::Property;
    use serde_json::{json, Value};

    fn model(loc: &str) -> ModelRef {
        ModelRef::new(loc)
    }

    fn generate(register: impl FnOnce(&mut BlockStateRegistry)) -> Value {
        let mut registry = BlockStateRegistry::new();
        register(&mut registry);
        let mut sink = MemorySink::new();
        registry.flush(&mut sink).unwrap();
        let (_, doc) = sink.documents().next().unwrap();
        serde_json::to_value(doc).unwrap()
    }

    #[test]
    fn test_simple_block_empty_key() {
        let block = BlockDef::new("minecraft:stone");
        let doc = generate(|r| simple_block(r, &block, &model("block/stone")));
        assert_eq!(doc, json!({ "variants": { "": { "model": "block/stone" } } }));
    }

    #[test]
    fn test_axis_block_shares_one_model() {
        let block = BlockDef::new("minecraft:oak_log").with_property(Property::axis());
        let doc = generate(|r| axis_block(r, &block, &model("block/oak_log")));
        assert_eq!(
            doc,
            json!({ "variants": {
                "axis=x": { "model": "block/oak_log", "x": 90, "y": 90 },
                "axis=y": { "model": "block/oak_log" },
                "axis=z": { "model": "block/oak_log", "x": 90 }
            } })
        );
    }

    #[test]
    fn test_horizontal_block_rotations() {
        let block = BlockDef::new("minecraft:furnace").with_property(Property::horizontal_facing());
        let doc = generate(|r| horizontal_block(r, &block, &model("block/furnace")));
        let variants = doc["variants"].as_object().unwrap();
        assert_eq!(variants["facing=north"]["y"], json!(180));
        assert_eq!(variants["facing=east"]["y"], json!(270));
        assert_eq!(variants["facing=south"].get("y"), None);
        assert_eq!(variants["facing=west"]["y"], json!(90));
    }

    fn stairs_def() -> BlockDef {
        BlockDef::new("minecraft:oak_stairs")
            .with_property(Property::horizontal_facing())
            .with_property(Property::new("half", ["bottom", "top"]))
            .with_property(Property::new(
                "shape",
                ["straight", "inner_left", "inner_right", "outer_left", "outer_right"],
            ))
            .with_property(Property::boolean("waterlogged"))
    }

    #[test]
    fn test_stairs_document_covers_and_excludes() {
        let block = stairs_def();
        let doc = generate(|r| {
            stairs_block(
                r,
                &block,
                &model("block/oak_stairs"),
                &model("block/oak_stairs_inner"),
                &model("block/oak_stairs_outer"),
            )
        });
        let variants = doc["variants"].as_object().unwrap();
        // 4 facings x 2 halves x 5 shapes; waterlogged collapsed away.
        assert_eq!(variants.len(), 40);
        for key in variants.keys() {
            assert!(!key.contains("waterlogged"));
        }
        assert_eq!(
            variants["facing=north,half=bottom,shape=straight"],
            json!({ "model": "block/oak_stairs" })
        );
    }

    #[test]
    fn test_slab_three_states() {
        let block = BlockDef::new("minecraft:stone_slab")
            .with_property(Property::new("type", ["bottom", "top", "double"]))
            .with_property(Property::boolean("waterlogged"));
        let doc = generate(|r| {
            slab_block(
                r,
                &block,
                &model("block/stone_slab"),
                &model("block/stone_slab_top"),
                &model("block/stone"),
            )
        });
        assert_eq!(
            doc,
            json!({ "variants": {
                "type=bottom": { "model": "block/stone_slab" },
                "type=double": { "model": "block/stone" },
                "type=top": { "model": "block/stone_slab_top" }
            } })
        );
    }

    fn fence_def(name: &str) -> BlockDef {
        BlockDef::new(name)
            .with_property(Property::boolean("north"))
            .with_property(Property::boolean("south"))
            .with_property(Property::boolean("west"))
            .with_property(Property::boolean("east"))
            .with_property(Property::boolean("waterlogged"))
    }

    #[test]
    fn test_fence_post_and_connectors() {
        let block = fence_def("minecraft:oak_fence");
        let doc = generate(|r| {
            fence_block(r, &block, &model("block/fence_post"), &model("block/fence_side"))
        });
        let parts = doc["multipart"].as_array().unwrap();
        assert_eq!(parts.len(), 5);
        // Post first, unconditional.
        assert_eq!(parts[0], json!({ "apply": { "model": "block/fence_post" } }));
        // One connector per horizontal direction, single-property condition.
        for (part, dir) in parts[1..].iter().zip(["north", "south", "west", "east"]) {
            assert_eq!(part["when"], json!({ dir: "true" }));
            assert_eq!(part["apply"]["uvlock"], json!(true));
        }
    }

    #[test]
    fn test_wall_post_is_conditional() {
        let block = fence_def("minecraft:cobblestone_wall").with_property(Property::boolean("up"));
        let doc = generate(|r| {
            wall_block(r, &block, &model("block/wall_post"), &model("block/wall_side"))
        });
        let parts = doc["multipart"].as_array().unwrap();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[0]["when"], json!({ "up": "true" }));
    }

    #[test]
    fn test_pane_sixteen_combinable_pieces() {
        let block = fence_def("minecraft:glass_pane");
        let doc = generate(|r| {
            pane_block(
                r,
                &block,
                &model("block/pane_post"),
                &model("block/pane_side"),
                &model("block/pane_side_alt"),
                &model("block/pane_noside"),
                &model("block/pane_noside_alt"),
            )
        });
        let parts = doc["multipart"].as_array().unwrap();
        // Post + (side, noside) per horizontal direction.
        assert_eq!(parts.len(), 9);
        assert!(parts[0].get("when").is_none());
        // Side and noside alternate condition polarity per direction.
        assert_eq!(parts[1]["when"], json!({ "north": "true" }));
        assert_eq!(parts[2]["when"], json!({ "north": "false" }));
        // South uses the alternate side model, rotated 90 for the noside.
        assert_eq!(parts[3]["apply"]["model"], json!("block/pane_side_alt"));
        assert_eq!(parts[4]["apply"]["y"], json!(90));
        // West side parts sit on the X axis and rotate 90.
        assert_eq!(parts[5]["apply"]["y"], json!(90));
        assert_eq!(parts[6]["apply"]["y"], json!(270));
    }

    #[test]
    fn test_fence_gate_excludes_powered() {
        let block = BlockDef::new("minecraft:oak_fence_gate")
            .with_property(Property::horizontal_facing())
            .with_property(Property::boolean("in_wall"))
            .with_property(Property::boolean("open"))
            .with_property(Property::boolean("powered"));
        let doc = generate(|r| {
            fence_gate_block(
                r,
                &block,
                &model("block/gate"),
                &model("block/gate_open"),
                &model("block/gate_wall"),
                &model("block/gate_wall_open"),
            )
        });
        let variants = doc["variants"].as_object().unwrap();
        assert_eq!(variants.len(), 4 * 2 * 2);
        assert_eq!(
            variants["facing=north,in_wall=true,open=true"],
            json!({ "model": "block/gate_wall_open", "uvlock": true })
        );
    }

    #[test]
    fn test_door_document() {
        let block = BlockDef::new("minecraft:oak_door")
            .with_property(Property::horizontal_facing())
            .with_property(Property::new("half", ["lower", "upper"]))
            .with_property(Property::new("hinge", ["left", "right"]))
            .with_property(Property::boolean("open"))
            .with_property(Property::boolean("powered"));
        let doc = generate(|r| {
            door_block(
                r,
                &block,
                &model("block/door_bottom"),
                &model("block/door_bottom_hinge"),
                &model("block/door_top"),
                &model("block/door_top_hinge"),
            )
        });
        let variants = doc["variants"].as_object().unwrap();
        assert_eq!(variants.len(), 4 * 2 * 2 * 2);
        assert_eq!(
            variants["facing=north,half=lower,hinge=left,open=false"],
            json!({ "model": "block/door_bottom", "y": 90 })
        );
        assert_eq!(
            variants["facing=north,half=lower,hinge=left,open=true"],
            json!({ "model": "block/door_bottom_hinge", "y": 180 })
        );
    }

    #[test]
    fn test_trapdoor_document() {
        let block = BlockDef::new("minecraft:oak_trapdoor")
            .with_property(Property::horizontal_facing())
            .with_property(Property::new("half", ["bottom", "top"]))
            .with_property(Property::boolean("open"))
            .with_property(Property::boolean("powered"))
            .with_property(Property::boolean("waterlogged"));
        let doc = generate(|r| {
            trapdoor_block(
                r,
                &block,
                &model("block/trapdoor_bottom"),
                &model("block/trapdoor_top"),
                &model("block/trapdoor_open"),
                true,
            )
        });
        let variants = doc["variants"].as_object().unwrap();
        assert_eq!(variants.len(), 4 * 2 * 2);
        assert_eq!(
            variants["facing=north,half=top,open=true"],
            json!({ "model": "block/trapdoor_open", "x": 180 })
        );
        assert_eq!(
            variants["facing=west,half=bottom,open=false"],
            json!({ "model": "block/trapdoor_bottom", "y": 90 })
        );
    }

    #[test]
    fn test_weighted_simple_block() {
        let block = BlockDef::new("minecraft:netherrack");
        let doc = generate(|r| {
            simple_block_models(
                r,
                &block,
                ModelGroup::new(vec![
                    ModelVariant::of(&model("block/netherrack")),
                    ModelVariant::builder(&model("block/netherrack"))
                        .rotation_y(180)
                        .weight(3)
                        .build(),
                ]),
            )
        });
        let value = &doc["variants"][""];
        assert!(value.is_array());
        assert_eq!(value[1]["weight"], json!(3));
    }
}
