#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the planet grid engine.
//!
//! This crate defines the vocabulary that connects the constant adjacency
//! table, the normalizer system, and adapters. A cell on the planet is
//! addressed by a [`GridPosition`] naming one of the six cube [`Face`] values
//! together with local `x` and `y` coordinates. Crossing a face boundary in a
//! [`Direction`] is described by an [`EdgeMapping`], and every rejected input
//! surfaces as a [`TransformError`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod embedding;
pub mod field;

pub use field::Felt;

/// Side length of every cube face measured in grid cells.
pub const PLANET_DIM: i64 = 100;

/// Number of faces that make up the cube.
pub const FACE_COUNT: usize = 6;

/// Number of edge directions leaving a face.
pub const DIRECTION_COUNT: usize = 4;

/// One of the six square regions that approximate the planet surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    /// Face centred on the positive `z` pole.
    Top,
    /// Face centred on the negative `z` pole.
    Bottom,
    /// Face lying in the `y = 0` plane.
    North,
    /// Face lying in the `y = N` plane.
    South,
    /// Face lying in the `x = N` plane.
    East,
    /// Face lying in the `x = 0` plane.
    West,
}

impl Face {
    /// Every face ordered by its numeric identifier.
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Top,
        Face::Bottom,
        Face::North,
        Face::South,
        Face::East,
        Face::West,
    ];

    /// Resolves a numeric face identifier in `[0, 6)`.
    pub fn from_id(id: i64) -> Result<Self, TransformError> {
        usize::try_from(id)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(TransformError::InvalidFace(id))
    }

    /// Numeric identifier of the face.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::North => 2,
            Self::South => 3,
            Self::East => 4,
            Self::West => 5,
        }
    }

    /// Identifier widened for indexing constant tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.id() as usize
    }

    /// Lower-case name used by adapters.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TryFrom<i64> for Face {
    type Error = TransformError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl FromStr for Face {
    type Err = TransformError;

    /// Accepts either a face name (case-insensitive) or its numeric identifier.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Some(face) = Self::ALL
            .iter()
            .copied()
            .find(|face| face.name().eq_ignore_ascii_case(trimmed))
        {
            return Ok(face);
        }

        let id = trimmed
            .parse::<i64>()
            .map_err(|_| TransformError::UnknownFaceName(trimmed.to_owned()))?;
        Self::from_id(id)
    }
}

/// Direction in which a coordinate leaves the bounds of its face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Toward increasing `x`.
    PosX,
    /// Toward decreasing `x`.
    NegX,
    /// Toward increasing `y`.
    PosY,
    /// Toward decreasing `y`.
    NegY,
}

impl Direction {
    /// Every direction ordered by its table index.
    pub const ALL: [Direction; DIRECTION_COUNT] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
    ];

    /// Resolves a raw table index in `[0, 4)`.
    pub fn from_index(index: i64) -> Result<Self, TransformError> {
        usize::try_from(index)
            .ok()
            .and_then(|slot| Self::ALL.get(slot).copied())
            .ok_or(TransformError::InvalidDirection(index))
    }

    /// Column of the adjacency table that stores this direction.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::PosX => 0,
            Self::NegX => 1,
            Self::PosY => 2,
            Self::NegY => 3,
        }
    }

    /// Direction pointing the opposite way along the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::PosX => Self::NegX,
            Self::NegX => Self::PosX,
            Self::PosY => Self::NegY,
            Self::NegY => Self::PosY,
        }
    }

    /// Unit cell offset `(dx, dy)` travelled by a single step.
    #[must_use]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::PosX => (1, 0),
            Self::NegX => (-1, 0),
            Self::PosY => (0, 1),
            Self::NegY => (0, -1),
        }
    }

    /// Direction matching a unit offset, if the offset is axis aligned.
    #[must_use]
    pub const fn from_offset(dx: i64, dy: i64) -> Option<Self> {
        match (dx, dy) {
            (1, 0) => Some(Self::PosX),
            (-1, 0) => Some(Self::NegX),
            (0, 1) => Some(Self::PosY),
            (0, -1) => Some(Self::NegY),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PosX => "+x",
            Self::NegX => "-x",
            Self::PosY => "+y",
            Self::NegY => "-y",
        };
        f.pad(label)
    }
}

/// Orientation change applied when a coordinate crosses into a neighbouring face.
///
/// The overflowing coordinate is first wrapped into `[0, N)` as if the
/// neighbouring face continued the current one without rotation. The pair is
/// then swapped when `coordinate_swap` is set, after which `flip_x` and
/// `flip_y` reflect the resulting axes (`v -> N - 1 - v`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeMapping {
    target_face: Face,
    coordinate_swap: bool,
    flip_x: bool,
    flip_y: bool,
}

impl EdgeMapping {
    /// Creates a mapping into `target_face` with the provided orientation change.
    #[must_use]
    pub const fn new(target_face: Face, coordinate_swap: bool, flip_x: bool, flip_y: bool) -> Self {
        Self {
            target_face,
            coordinate_swap,
            flip_x,
            flip_y,
        }
    }

    /// Mapping that enters `target_face` without rotating or reflecting.
    #[must_use]
    pub const fn straight(target_face: Face) -> Self {
        Self::new(target_face, false, false, false)
    }

    /// Face entered by the crossing.
    #[must_use]
    pub const fn target_face(&self) -> Face {
        self.target_face
    }

    /// Whether the `x` and `y` axes exchange roles.
    #[must_use]
    pub const fn coordinate_swap(&self) -> bool {
        self.coordinate_swap
    }

    /// Whether the target `x` axis is reflected.
    #[must_use]
    pub const fn flip_x(&self) -> bool {
        self.flip_x
    }

    /// Whether the target `y` axis is reflected.
    #[must_use]
    pub const fn flip_y(&self) -> bool {
        self.flip_y
    }

    /// Applies the orientation change to an already wrapped coordinate pair.
    ///
    /// Coordinates outside `[0, N)` are carried through the same affine map,
    /// which keeps a still-overflowing axis meaningful for a second crossing.
    #[must_use]
    pub const fn orient(&self, x: i64, y: i64) -> (i64, i64) {
        let (mut x, mut y) = if self.coordinate_swap { (y, x) } else { (x, y) };
        if self.flip_x {
            x = PLANET_DIM - 1 - x;
        }
        if self.flip_y {
            y = PLANET_DIM - 1 - y;
        }
        (x, y)
    }

    /// Direction that leads back across the same edge from the target face.
    ///
    /// `crossed` is the direction that was travelled on the source face.
    #[must_use]
    pub const fn entry_direction(&self, crossed: Direction) -> Direction {
        let (dx, dy) = crossed.opposite().offset();
        let (mut dx, mut dy) = if self.coordinate_swap { (dy, dx) } else { (dx, dy) };
        if self.flip_x {
            dx = -dx;
        }
        if self.flip_y {
            dy = -dy;
        }
        match Direction::from_offset(dx, dy) {
            Some(direction) => direction,
            None => crossed.opposite(),
        }
    }
}

/// Location of a cell on the planet, possibly outside its face while in transit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    face: Face,
    x: i64,
    y: i64,
}

impl GridPosition {
    /// Creates a position on `face` at local coordinates `(x, y)`.
    #[must_use]
    pub const fn new(face: Face, x: i64, y: i64) -> Self {
        Self { face, x, y }
    }

    /// Face the coordinates are expressed on.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Local column.
    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Local row.
    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Reports whether both coordinates lie within `[0, N)`.
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        in_range(self.x) && in_range(self.y)
    }

    /// Position translated by `(dx, dy)` on the same face without normalizing.
    ///
    /// Returns `None` when the translation overflows `i64`.
    #[must_use]
    pub fn offset_by(&self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self::new(
            self.face,
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
        ))
    }

    /// Fails with [`TransformError::NotNormalized`] unless the position is normalized.
    pub fn require_normalized(self) -> Result<Self, TransformError> {
        if self.is_normalized() {
            Ok(self)
        } else {
            Err(TransformError::NotNormalized {
                face: self.face,
                x: self.x,
                y: self.y,
            })
        }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.face, self.x, self.y)
    }
}

/// Reports whether a single coordinate lies within `[0, N)`.
#[must_use]
pub const fn in_range(value: i64) -> bool {
    value >= 0 && value < PLANET_DIM
}

/// Reasons a transform request may be rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The face identifier lies outside `[0, 6)`.
    #[error("face identifier {0} is outside [0, 6)")]
    InvalidFace(i64),
    /// The face name is neither a known face nor a numeric identifier.
    #[error("'{0}' does not name a face")]
    UnknownFaceName(String),
    /// The direction index lies outside `[0, 4)`.
    #[error("direction index {0} is outside [0, 4)")]
    InvalidDirection(i64),
    /// The coordinates require more edge crossings than supported.
    #[error("displacement ({x}, {y}) on face {face} exceeds one face width")]
    DisplacementTooLarge {
        /// Face the rejected coordinates were expressed on.
        face: Face,
        /// Rejected column.
        x: i64,
        /// Rejected row.
        y: i64,
    },
    /// A field element literal could not be parsed.
    #[error("'{0}' is not a valid field element")]
    InvalidFieldElement(String),
    /// A cross-net coordinate does not fall on any face.
    #[error("net coordinate ({column}, {row}) does not lie on a face")]
    OffNet {
        /// Rejected net column.
        column: u32,
        /// Rejected net row.
        row: u32,
    },
    /// An operation required a normalized position.
    #[error("position ({x}, {y}) on face {face} is not normalized")]
    NotNormalized {
        /// Face of the rejected position.
        face: Face,
        /// Rejected column.
        x: i64,
        /// Rejected row.
        y: i64,
    },
}
