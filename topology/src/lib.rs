#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Static face adjacency for the cube-mapped planet.
//!
//! The table below is authored from the cross unfolding described in
//! [`net`]. Every face sits unrotated in the net, so crossings between faces
//! that touch inside the net are straight, while the remaining edges fold
//! around the cube and swap or reflect axes.

use planet_grid_core::{
    Direction, EdgeMapping, Face, GridPosition, DIRECTION_COUNT, FACE_COUNT, PLANET_DIM,
};

pub mod net;

const fn straight(target: Face) -> EdgeMapping {
    EdgeMapping::straight(target)
}

const fn turned(target: Face, coordinate_swap: bool, flip_x: bool, flip_y: bool) -> EdgeMapping {
    EdgeMapping::new(target, coordinate_swap, flip_x, flip_y)
}

/// Edge mappings indexed by [`Face::index`] and then [`Direction::index`]
/// (`+x`, `-x`, `+y`, `-y`).
pub const ADJACENCY: [[EdgeMapping; DIRECTION_COUNT]; FACE_COUNT] = [
    // Top
    [
        straight(Face::East),
        straight(Face::West),
        straight(Face::South),
        straight(Face::North),
    ],
    // Bottom
    [
        straight(Face::West),
        straight(Face::East),
        turned(Face::South, false, true, true),
        turned(Face::North, false, true, true),
    ],
    // North
    [
        turned(Face::East, true, true, false),
        turned(Face::West, true, false, true),
        straight(Face::Top),
        turned(Face::Bottom, false, true, true),
    ],
    // South
    [
        turned(Face::East, true, false, true),
        turned(Face::West, true, true, false),
        turned(Face::Bottom, false, true, true),
        straight(Face::Top),
    ],
    // East
    [
        straight(Face::Bottom),
        straight(Face::Top),
        turned(Face::South, true, true, false),
        turned(Face::North, true, false, true),
    ],
    // West
    [
        straight(Face::Top),
        straight(Face::Bottom),
        turned(Face::South, true, false, true),
        turned(Face::North, true, true, false),
    ],
];

/// Mapping applied when leaving `face` in `direction`.
#[must_use]
pub const fn edge_mapping(face: Face, direction: Direction) -> EdgeMapping {
    ADJACENCY[face.index()][direction.index()]
}

/// Mapping stored at raw table indices.
///
/// # Panics
///
/// Panics when either index lies outside the table. Callers holding typed
/// [`Face`] and [`Direction`] values should use [`edge_mapping`] instead.
#[must_use]
pub fn edge_mapping_by_index(face: usize, direction: usize) -> EdgeMapping {
    assert!(face < FACE_COUNT, "face index {face} outside adjacency table");
    assert!(
        direction < DIRECTION_COUNT,
        "direction index {direction} outside adjacency table"
    );
    ADJACENCY[face][direction]
}

/// Direction that leads back to `face` after leaving it in `direction`.
#[must_use]
pub const fn entry_direction(face: Face, direction: Direction) -> Direction {
    edge_mapping(face, direction).entry_direction(direction)
}

/// Faces across each edge of `face`, ordered like [`Direction::ALL`].
#[must_use]
pub fn neighbours(face: Face) -> [Face; DIRECTION_COUNT] {
    Direction::ALL.map(|direction| edge_mapping(face, direction).target_face())
}

/// Every table entry in face-major order.
pub fn entries() -> impl Iterator<Item = (Face, Direction, EdgeMapping)> {
    Face::ALL.into_iter().flat_map(|face| {
        Direction::ALL
            .into_iter()
            .map(move |direction| (face, direction, edge_mapping(face, direction)))
    })
}

/// Face edges touched by the cell at `position`.
///
/// Interior cells touch no edge, cells along a side touch one, and the four
/// corner cells of a face touch two.
pub fn boundary_edges(position: &GridPosition) -> impl Iterator<Item = Direction> {
    let (x, y) = (position.x(), position.y());
    Direction::ALL
        .into_iter()
        .filter(move |direction| match direction {
            Direction::PosX => x == PLANET_DIM - 1,
            Direction::NegX => x == 0,
            Direction::PosY => y == PLANET_DIM - 1,
            Direction::NegY => y == 0,
        })
}
