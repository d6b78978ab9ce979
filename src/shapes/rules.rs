//! Per-family shape rules.
//!
//! Each rule maps one state combination to its model assignment, encoding
//! the geometric convention of its shape family. The compass convention is
//! north 0, east 90, south 180, west 270; all arithmetic stays on cardinal
//! multiples and is normalized by the [`ModelVariant`] builder.

use crate::document::{ModelGroup, ModelVariant};
use crate::types::{AttachFace, Direction, ModelRef, StateCombination};

use super::ShapeRule;

/// A block with a 4-way `facing` property and a single model.
///
/// The model's front is authored facing south, so the default offset of
/// 180 brings it around to the facing direction.
#[derive(Debug, Clone)]
pub struct HorizontalRule {
    pub model: ModelRef,
    pub offset: i32,
}

impl ShapeRule for HorizontalRule {
    fn assign(&self, state: &StateCombination) -> ModelGroup {
        ModelGroup::single(
            ModelVariant::builder(&self.model)
                .rotation_y(state.direction("facing").horizontal_angle() + self.offset)
                .build(),
        )
    }
}

/// A face-attached block: 4-way `facing` plus a floor/wall/ceiling `face`.
///
/// X rotation follows the attach face (floor 0, wall 90, ceiling 180); the
/// yaw flips 180 on ceilings because the model is authored floor-mounted.
#[derive(Debug, Clone)]
pub struct HorizontalFaceRule {
    pub model: ModelRef,
    pub offset: i32,
}

impl ShapeRule for HorizontalFaceRule {
    fn assign(&self, state: &StateCombination) -> ModelGroup {
        let face = state.face("face");
        let ceiling = if face == AttachFace::Ceiling { 180 } else { 0 };
        ModelGroup::single(
            ModelVariant::builder(&self.model)
                .rotation_x(face.index() * 90)
                .rotation_y(state.direction("facing").horizontal_angle() + self.offset + ceiling)
                .build(),
        )
    }
}

/// A block with a 6-way `facing` property and a single model.
#[derive(Debug, Clone)]
pub struct DirectionalRule {
    pub model: ModelRef,
    pub offset: i32,
}

impl ShapeRule for DirectionalRule {
    fn assign(&self, state: &StateCombination) -> ModelGroup {
        let facing = state.direction("facing");
        let x = if facing == Direction::Down {
            180
        } else if facing.axis().is_horizontal() {
            90
        } else {
            0
        };
        // Vertical facings carry no meaningful yaw.
        let y = if facing.axis().is_vertical() {
            0
        } else {
            facing.horizontal_angle() + self.offset
        };
        ModelGroup::single(
            ModelVariant::builder(&self.model)
                .rotation_x(x)
                .rotation_y(y)
                .build(),
        )
    }
}

/// Stairs: `facing`, bottom/top `half` and a five-valued `shape`.
///
/// Only right-handed straight/inner/outer models exist; left shapes reuse
/// them pre-rotated 270, and non-straight top-half states get a further 90.
/// Top-half states are the bottom model flipped about X.
#[derive(Debug, Clone)]
pub struct StairsRule {
    pub stairs: ModelRef,
    pub inner: ModelRef,
    pub outer: ModelRef,
}

impl ShapeRule for StairsRule {
    fn assign(&self, state: &StateCombination) -> ModelGroup {
        let shape = state.value("shape");
        let top = state.value("half") == "top";

        let mut y = state.direction("facing").horizontal_angle();
        if matches!(shape, "inner_left" | "outer_left") {
            y += 270;
        }
        if shape != "straight" && top {
            y += 90;
        }
        y %= 360;

        let model = match shape {
            "straight" => &self.stairs,
            "inner_left" | "inner_right" => &self.inner,
            "outer_left" | "outer_right" => &self.outer,
            other => panic!("unknown stairs shape `{}`", other),
        };
        // No uvlock for states that aren't rotated at all.
        let uvlock = y != 0 || top;
        ModelGroup::single(
            ModelVariant::builder(model)
                .rotation_x(if top { 180 } else { 0 })
                .rotation_y(y)
                .uv_lock(uvlock)
                .build(),
        )
    }
}

/// Fence gate: model is a 2x2 decision on `in_wall` and `open`; the gate
/// models are authored at the correct default yaw, so no offset applies.
#[derive(Debug, Clone)]
pub struct FenceGateRule {
    pub gate: ModelRef,
    pub gate_open: ModelRef,
    pub wall: ModelRef,
    pub wall_open: ModelRef,
}

impl ShapeRule for FenceGateRule {
    fn assign(&self, state: &StateCombination) -> ModelGroup {
        let model = match (state.is_true("in_wall"), state.is_true("open")) {
            (false, false) => &self.gate,
            (false, true) => &self.gate_open,
            (true, false) => &self.wall,
            (true, true) => &self.wall_open,
        };
        ModelGroup::single(
            ModelVariant::builder(model)
                .rotation_y(state.direction("facing").horizontal_angle())
                .uv_lock(true)
                .build(),
        )
    }
}

/// Door: lower/upper `half`, left/right `hinge`, `open`.
///
/// A door swaps apparent handedness when opened (right = hinge-right XOR
/// open); the four authored quarter-turn variants collapse onto the two
/// physical meshes via the +90/+180 corrections.
#[derive(Debug, Clone)]
pub struct DoorRule {
    pub bottom_left: ModelRef,
    pub bottom_right: ModelRef,
    pub top_left: ModelRef,
    pub top_right: ModelRef,
}

impl ShapeRule for DoorRule {
    fn assign(&self, state: &StateCombination) -> ModelGroup {
        let hinge_right = state.value("hinge") == "right";
        let open = state.is_true("open");
        let right = hinge_right ^ open;

        let mut y = state.direction("facing").horizontal_angle() + 90;
        if open {
            y += 90;
        }
        if hinge_right && open {
            y += 180;
        }

        let lower = state.value("half") == "lower";
        let model = match (lower, right) {
            (true, false) => &self.bottom_left,
            (true, true) => &self.bottom_right,
            (false, false) => &self.top_left,
            (false, true) => &self.top_right,
        };
        ModelGroup::single(ModelVariant::builder(model).rotation_y(y).build())
    }
}

/// Trapdoor: `facing`, bottom/top `half`, `open`.
///
/// Orientable open top-half trapdoors flip 180 on both axes so they hang
/// from the top edge; non-orientable closed ones look identical from every
/// side, so their yaw is forced to zero to reduce emitted variety.
#[derive(Debug, Clone)]
pub struct TrapdoorRule {
    pub bottom: ModelRef,
    pub top: ModelRef,
    pub open: ModelRef,
    pub orientable: bool,
}

impl ShapeRule for TrapdoorRule {
    fn assign(&self, state: &StateCombination) -> ModelGroup {
        let open = state.is_true("open");
        let top = state.value("half") == "top";

        let mut x = 0;
        let mut y = state.direction("facing").horizontal_angle() + 180;
        if self.orientable && open && top {
            x += 180;
            y += 180;
        }
        if !self.orientable && !open {
            y = 0;
        }

        let model = if open {
            &self.open
        } else if top {
            &self.top
        } else {
            &self.bottom
        };
        ModelGroup::single(
            ModelVariant::builder(model)
                .rotation_x(x)
                .rotation_y(y)
                .build(),
        )
    }
}
