//! Cross-shaped unfolding of the cube into a single plane.
//!
//! ```text
//!          North
//!  West    Top    East   Bottom
//!          South
//! ```
//!
//! The plane is `4N` cells wide and `3N` cells tall. Each face occupies one
//! `N x N` block without rotation, so a net coordinate converts to a face
//! position by subtracting the block origin.

use planet_grid_core::{Face, GridPosition, TransformError, PLANET_DIM};
use serde::{Deserialize, Serialize};

const DIM: u32 = PLANET_DIM as u32;

/// Width of the unfolded plane measured in cells.
pub const NET_COLUMNS: u32 = 4 * DIM;

/// Height of the unfolded plane measured in cells.
pub const NET_ROWS: u32 = 3 * DIM;

/// Cell of the unfolded plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NetCoord {
    column: u32,
    row: u32,
}

impl NetCoord {
    /// Creates a net coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column within the plane.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row within the plane.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Block `(column, row)` of the net occupied by `face`.
#[must_use]
pub const fn block(face: Face) -> (u32, u32) {
    match face {
        Face::West => (0, 1),
        Face::Top => (1, 1),
        Face::East => (2, 1),
        Face::Bottom => (3, 1),
        Face::North => (1, 0),
        Face::South => (1, 2),
    }
}

/// Face occupying net block `(column, row)`, if any.
#[must_use]
pub fn face_at_block(column: u32, row: u32) -> Option<Face> {
    Face::ALL
        .into_iter()
        .find(|face| block(*face) == (column, row))
}

/// Resolves a net coordinate into a normalized position on its face.
pub fn locate(coord: NetCoord) -> Result<GridPosition, TransformError> {
    let off_net = TransformError::OffNet {
        column: coord.column,
        row: coord.row,
    };
    if coord.column >= NET_COLUMNS || coord.row >= NET_ROWS {
        return Err(off_net);
    }

    let face = face_at_block(coord.column / DIM, coord.row / DIM).ok_or(off_net)?;
    Ok(GridPosition::new(
        face,
        i64::from(coord.column % DIM),
        i64::from(coord.row % DIM),
    ))
}

/// Projects a normalized position into the unfolded plane.
pub fn to_net(position: &GridPosition) -> Result<NetCoord, TransformError> {
    let position = position.require_normalized()?;
    let (block_column, block_row) = block(position.face());
    let column = u32::try_from(position.x()).map_err(|_| not_normalized(&position))?;
    let row = u32::try_from(position.y()).map_err(|_| not_normalized(&position))?;
    Ok(NetCoord::new(block_column * DIM + column, block_row * DIM + row))
}

fn not_normalized(position: &GridPosition) -> TransformError {
    TransformError::NotNormalized {
        face: position.face(),
        x: position.x(),
        y: position.y(),
    }
}
