//! Placement of every face on the surface of an axis-aligned cube.
//!
//! The cube spans `[0, N]` on each axis. Points are reported in doubled
//! units so that cell centres, which sit on half-integer coordinates, stay
//! exact integers.

use serde::{Deserialize, Serialize};

use crate::{Face, GridPosition, PLANET_DIM};

/// Point on or near the cube surface measured in doubled cell units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfacePoint {
    /// Doubled `X` component.
    pub x: i64,
    /// Doubled `Y` component.
    pub y: i64,
    /// Doubled `Z` component.
    pub z: i64,
}

impl SurfacePoint {
    /// Creates a point from doubled components.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    const fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    const fn scale(self, factor: i64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Squared Euclidean distance to `other`, in doubled units.
    #[must_use]
    pub const fn distance_squared(self, other: Self) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }
}

/// Origin and axes of a face expressed in undoubled cube units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceFrame {
    /// Cube corner that local `(0, 0)` touches.
    pub origin: SurfacePoint,
    /// Unit vector followed by increasing local `x`.
    pub x_axis: SurfacePoint,
    /// Unit vector followed by increasing local `y`.
    pub y_axis: SurfacePoint,
    /// Unit vector pointing away from the cube interior.
    pub normal: SurfacePoint,
}

/// Frame that folds `face` onto the cube surface.
#[must_use]
pub const fn frame(face: Face) -> FaceFrame {
    const N: i64 = PLANET_DIM;
    let (origin, x_axis, y_axis, normal) = match face {
        Face::Top => ((0, 0, N), (1, 0, 0), (0, 1, 0), (0, 0, 1)),
        Face::Bottom => ((N, 0, 0), (-1, 0, 0), (0, 1, 0), (0, 0, -1)),
        Face::North => ((0, 0, 0), (1, 0, 0), (0, 0, 1), (0, -1, 0)),
        Face::South => ((0, N, N), (1, 0, 0), (0, 0, -1), (0, 1, 0)),
        Face::East => ((N, 0, N), (0, 0, -1), (0, 1, 0), (1, 0, 0)),
        Face::West => ((0, 0, 0), (0, 0, 1), (0, 1, 0), (-1, 0, 0)),
    };
    FaceFrame {
        origin: SurfacePoint::new(origin.0, origin.1, origin.2),
        x_axis: SurfacePoint::new(x_axis.0, x_axis.1, x_axis.2),
        y_axis: SurfacePoint::new(y_axis.0, y_axis.1, y_axis.2),
        normal: SurfacePoint::new(normal.0, normal.1, normal.2),
    }
}

/// Lattice point at local corner `(column, row)` of a face, in doubled units.
#[must_use]
pub const fn lattice_point(face: Face, column: i64, row: i64) -> SurfacePoint {
    let frame = frame(face);
    frame
        .origin
        .scale(2)
        .add(frame.x_axis.scale(2 * column))
        .add(frame.y_axis.scale(2 * row))
}

/// Centre of the cell at `position`, in doubled units.
#[must_use]
pub const fn cell_center(position: &GridPosition) -> SurfacePoint {
    let frame = frame(position.face());
    frame
        .origin
        .scale(2)
        .add(frame.x_axis.scale(2 * position.x() + 1))
        .add(frame.y_axis.scale(2 * position.y() + 1))
}

/// The four lattice points bounding the cell at `position`.
#[must_use]
pub const fn cell_corners(position: &GridPosition) -> [SurfacePoint; 4] {
    let face = position.face();
    let (x, y) = (position.x(), position.y());
    [
        lattice_point(face, x, y),
        lattice_point(face, x + 1, y),
        lattice_point(face, x, y + 1),
        lattice_point(face, x + 1, y + 1),
    ]
}
