#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that resolves out-of-range coordinates onto the cube surface.
//!
//! A position whose coordinates leave `[0, N)` is walked across face edges
//! using the constant adjacency table until it lands inside some face. Corner
//! crossings are resolved as two edge crossings, always `x` before `y`.

use planet_grid_core::{Direction, Face, Felt, GridPosition, TransformError, PLANET_DIM};
use planet_grid_topology::edge_mapping;
use tracing::{debug, warn};

/// Default bound on the number of edge crossings a single request may need.
pub const MAX_CROSSINGS: usize = 4;

/// Tunable parameters for the normalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    max_crossings: usize,
}

impl Config {
    /// Creates a configuration allowing at most `max_crossings` edge crossings.
    ///
    /// Corner displacements need two crossings, so smaller bounds reject them.
    #[must_use]
    pub const fn new(max_crossings: usize) -> Self {
        Self { max_crossings }
    }

    /// Maximum number of edge crossings per request.
    #[must_use]
    pub const fn max_crossings(&self) -> usize {
        self.max_crossings
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(MAX_CROSSINGS)
    }
}

/// Resolves positions onto the face that actually contains them.
#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer {
    config: Config,
}

impl Normalizer {
    /// Creates a normalizer using the provided configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Configuration the normalizer was created with.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Normalizes `(x, y)` expressed on the face with identifier `face_id`.
    pub fn normalize(&self, face_id: i64, x: i64, y: i64) -> Result<GridPosition, TransformError> {
        let face = Face::from_id(face_id)?;
        self.normalize_position(GridPosition::new(face, x, y))
    }

    /// Normalizes a position that may lie outside its face.
    pub fn normalize_position(
        &self,
        position: GridPosition,
    ) -> Result<GridPosition, TransformError> {
        if !within_reach(position.x()) || !within_reach(position.y()) {
            warn!(%position, "displacement_too_large");
            return Err(too_large(&position));
        }

        let mut current = position;
        for crossing in 0..self.config.max_crossings {
            let Some(direction) = overflow_direction(current.x(), current.y()) else {
                return Ok(current);
            };
            let next = cross_edge(current, direction)?;
            debug!(crossing, from = %current, %direction, to = %next, "face_edge_crossed");
            current = next;
        }

        if current.is_normalized() {
            Ok(current)
        } else {
            warn!(
                %position,
                max_crossings = self.config.max_crossings,
                "crossing_bound_exhausted"
            );
            Err(too_large(&position))
        }
    }

    /// Normalizes coordinates delivered as prime-field residues.
    ///
    /// Residues above half the modulus read as negative offsets, so a
    /// coordinate computed as `0 - 1` on a field backend behaves exactly like
    /// native `-1`.
    pub fn normalize_felt(
        &self,
        face_id: i64,
        x: &Felt,
        y: &Felt,
    ) -> Result<GridPosition, TransformError> {
        self.normalize(face_id, x.to_signed_saturating(), y.to_signed_saturating())
    }

    /// Moves one cell in `direction` and normalizes the result.
    pub fn step(
        &self,
        position: GridPosition,
        direction: Direction,
    ) -> Result<GridPosition, TransformError> {
        let (dx, dy) = direction.offset();
        let moved = position
            .offset_by(dx, dy)
            .ok_or_else(|| too_large(&position))?;
        self.normalize_position(moved)
    }

    /// Cells one step away from `position`, ordered like [`Direction::ALL`].
    pub fn neighbours(&self, position: GridPosition) -> Result<[GridPosition; 4], TransformError> {
        let mut around = [position; 4];
        for (slot, direction) in around.iter_mut().zip(Direction::ALL) {
            *slot = self.step(position, direction)?;
        }
        Ok(around)
    }
}

/// Normalizes `(x, y)` on face `face_id` with the default configuration.
pub fn normalize(face_id: i64, x: i64, y: i64) -> Result<GridPosition, TransformError> {
    Normalizer::default().normalize(face_id, x, y)
}

/// Normalizes field-element coordinates with the default configuration.
pub fn normalize_felt(face_id: i64, x: &Felt, y: &Felt) -> Result<GridPosition, TransformError> {
    Normalizer::default().normalize_felt(face_id, x, y)
}

/// Axis that must be resolved next, `x` taking precedence over `y`.
#[must_use]
pub const fn overflow_direction(x: i64, y: i64) -> Option<Direction> {
    if x >= PLANET_DIM {
        Some(Direction::PosX)
    } else if x < 0 {
        Some(Direction::NegX)
    } else if y >= PLANET_DIM {
        Some(Direction::PosY)
    } else if y < 0 {
        Some(Direction::NegY)
    } else {
        None
    }
}

/// Carries `position` across the edge of its face that lies in `direction`.
///
/// The coordinate along `direction` is moved one face width back, which turns
/// an overflow of `k` cells into local `k` past the entering edge. The other
/// coordinate is carried unchanged, even when it still overflows. The pair is
/// then reoriented by the table entry for that edge.
pub fn cross_edge(
    position: GridPosition,
    direction: Direction,
) -> Result<GridPosition, TransformError> {
    if !within_reach(position.x()) || !within_reach(position.y()) {
        return Err(too_large(&position));
    }

    let (x, y) = match direction {
        Direction::PosX => (position.x() - PLANET_DIM, position.y()),
        Direction::NegX => (position.x() + PLANET_DIM, position.y()),
        Direction::PosY => (position.x(), position.y() - PLANET_DIM),
        Direction::NegY => (position.x(), position.y() + PLANET_DIM),
    };
    let mapping = edge_mapping(position.face(), direction);
    let (x, y) = mapping.orient(x, y);
    Ok(GridPosition::new(mapping.target_face(), x, y))
}

/// Coordinates within one face width of a legal cell, `[-N, 2N)`.
const fn within_reach(value: i64) -> bool {
    value >= -PLANET_DIM && value < 2 * PLANET_DIM
}

fn too_large(position: &GridPosition) -> TransformError {
    TransformError::DisplacementTooLarge {
        face: position.face(),
        x: position.x(),
        y: position.y(),
    }
}
