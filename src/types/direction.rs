//! Direction, axis and attach-face types used by the shape rules.

use serde::{Deserialize, Serialize};

/// The six cardinal directions / face directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All six directions in order.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The four horizontal directions, in the same relative order as [`ALL`](Self::ALL).
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Get the axis this direction is on.
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Down | Direction::Up => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
            Direction::West | Direction::East => Axis::X,
        }
    }

    /// Compass angle of a horizontal direction: north 0, east 90, south 180,
    /// west 270, increasing clockwise when viewed from above.
    ///
    /// # Panics
    ///
    /// Panics for `Up` and `Down`; vertical directions carry no yaw.
    pub fn horizontal_angle(&self) -> i32 {
        match self {
            Direction::North => 0,
            Direction::East => 90,
            Direction::South => 180,
            Direction::West => 270,
            Direction::Up | Direction::Down => {
                panic!("{} has no horizontal angle", self)
            }
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" => Some(Direction::Down),
            "up" => Some(Direction::Up),
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "west" => Some(Direction::West),
            "east" => Some(Direction::East),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
            Direction::East => write!(f, "east"),
        }
    }
}

/// The three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Whether this axis lies in the horizontal plane.
    pub fn is_horizontal(&self) -> bool {
        !matches!(self, Axis::Y)
    }

    /// Whether this is the vertical axis.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Axis::Y)
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// The surface a face-attached block is mounted on.
///
/// The declaration order fixes the X rotation of face-attached models:
/// floor 0, wall 90, ceiling 180.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachFace {
    Floor,
    Wall,
    Ceiling,
}

impl AttachFace {
    /// Position of this face in declaration order (floor 0, wall 1, ceiling 2).
    pub fn index(&self) -> i32 {
        match self {
            AttachFace::Floor => 0,
            AttachFace::Wall => 1,
            AttachFace::Ceiling => 2,
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "floor" => Some(AttachFace::Floor),
            "wall" => Some(AttachFace::Wall),
            "ceiling" => Some(AttachFace::Ceiling),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttachFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachFace::Floor => write!(f, "floor"),
            AttachFace::Wall => write!(f, "wall"),
            AttachFace::Ceiling => write!(f, "ceiling"),
        }
    }
}
