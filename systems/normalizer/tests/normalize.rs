use planet_grid_core::{
    embedding::{self, SurfacePoint},
    field,
    Direction, Face, Felt, GridPosition, TransformError, PLANET_DIM,
};
use planet_grid_system_normalizer::{cross_edge, normalize, normalize_felt, Normalizer};
use planet_grid_topology::{
    boundary_edges, edge_mapping, entry_direction,
    net::{self, NetCoord, NET_COLUMNS, NET_ROWS},
};

const LAST: i64 = PLANET_DIM - 1;

fn id(face: Face) -> i64 {
    i64::from(face.id())
}

/// Cell on the edge of `face` that `direction` leaves through, `t` cells along it.
fn edge_cell(face: Face, direction: Direction, t: i64) -> GridPosition {
    match direction {
        Direction::PosX => GridPosition::new(face, LAST, t),
        Direction::NegX => GridPosition::new(face, 0, t),
        Direction::PosY => GridPosition::new(face, t, LAST),
        Direction::NegY => GridPosition::new(face, t, 0),
    }
}

#[test]
fn normalized_input_is_returned_unchanged() {
    for face in Face::ALL {
        for x in 0..PLANET_DIM {
            for y in 0..PLANET_DIM {
                assert_eq!(normalize(id(face), x, y), Ok(GridPosition::new(face, x, y)));
            }
        }
    }
}

#[test]
fn crossing_back_through_entry_edge_returns_to_origin() {
    let normalizer = Normalizer::default();
    for face in Face::ALL {
        for direction in Direction::ALL {
            let back = entry_direction(face, direction);
            for t in 0..PLANET_DIM {
                let origin = edge_cell(face, direction, t);
                let there = normalizer.step(origin, direction).expect("one step is in reach");
                assert_ne!(there.face(), face);
                let returned = normalizer.step(there, back).expect("one step is in reach");
                assert_eq!(returned, origin, "{origin} -> {there} did not return");
            }
        }
    }
}

#[test]
fn minus_one_column_round_trips_to_column_zero() {
    for face in Face::ALL {
        let back = entry_direction(face, Direction::NegX);
        for y in 0..PLANET_DIM {
            let there = normalize(id(face), -1, y).expect("single crossing");
            let (dx, dy) = back.offset();
            let returned = normalize(id(there.face()), there.x() + dx, there.y() + dy)
                .expect("single crossing");
            assert_eq!(returned, GridPosition::new(face, 0, y));
        }
    }
}

#[test]
fn one_past_the_edge_lands_on_the_neighbours_entry_edge() {
    for face in Face::ALL {
        let mapping = edge_mapping(face, Direction::PosX);
        let entered = entry_direction(face, Direction::PosX);
        for y in 0..PLANET_DIM {
            let landed = normalize(id(face), PLANET_DIM, y).expect("single crossing");
            assert_eq!(landed.face(), mapping.target_face());
            assert!(
                boundary_edges(&landed).any(|edge| edge == entered),
                "{landed} is not on the {entered} edge"
            );

            let before = embedding::cell_center(&GridPosition::new(face, LAST, y));
            let after = embedding::cell_center(&landed);
            assert_eq!(
                before.distance_squared(after),
                2,
                "{landed} is not adjacent to ({face}, {LAST}, {y})"
            );
        }
    }
}

#[test]
fn corner_crossings_stay_on_the_shared_cube_vertex() {
    let normalizer = Normalizer::default();
    for face in Face::ALL {
        for (corner_x, corner_y) in [(0, 0), (LAST, 0), (0, LAST), (LAST, LAST)] {
            let dx = if corner_x == 0 { -1 } else { 1 };
            let (dy, y_direction) = if corner_y == 0 {
                (-1, Direction::NegY)
            } else {
                (1, Direction::PosY)
            };
            let diagonal = GridPosition::new(face, corner_x + dx, corner_y + dy);
            let vertex: SurfacePoint = embedding::lattice_point(
                face,
                corner_x + i64::from(dx > 0),
                corner_y + i64::from(dy > 0),
            );

            let x_first = normalizer
                .normalize_position(diagonal)
                .expect("corner is in reach");
            let partial = cross_edge(diagonal, y_direction).expect("corner is in reach");
            let y_first = normalizer
                .normalize_position(partial)
                .expect("corner is in reach");

            for landed in [x_first, y_first] {
                assert!(landed.is_normalized());
                assert_ne!(landed.face(), face);
                assert!(
                    embedding::cell_corners(&landed).contains(&vertex),
                    "{diagonal} resolved to {landed}, away from the cube vertex"
                );
            }

            assert_ne!(x_first.face(), y_first.face());
            assert!(
                normalizer
                    .neighbours(x_first)
                    .expect("corner cell neighbours")
                    .contains(&y_first),
                "{x_first} and {y_first} do not share an edge"
            );
            assert_eq!(normalizer.normalize_position(diagonal), Ok(x_first));
        }
    }
}

#[test]
fn displacement_beyond_one_face_width_is_rejected() {
    for face in Face::ALL {
        assert_eq!(
            normalize(id(face), -(PLANET_DIM + 1), 0),
            Err(TransformError::DisplacementTooLarge {
                face,
                x: -(PLANET_DIM + 1),
                y: 0,
            })
        );
        assert!(normalize(id(face), 0, 2 * PLANET_DIM).is_err());
        assert!(normalize(id(face), -PLANET_DIM, 0).is_ok());
        assert!(normalize(id(face), 2 * PLANET_DIM - 1, -PLANET_DIM).is_ok());
    }
}

#[test]
fn field_residues_match_native_offsets() {
    let zero = Felt::zero();
    let one = Felt::from(1);
    let wrapped_minus_one = &zero - &one;
    assert_eq!(
        normalize_felt(0, &wrapped_minus_one, &Felt::from(50)),
        normalize(0, -1, 50)
    );

    for face in Face::ALL {
        for (x, y) in [(-1, 0), (PLANET_DIM, 99), (-PLANET_DIM, -PLANET_DIM), (12, 150)] {
            assert_eq!(
                normalize_felt(id(face), &Felt::from(x), &Felt::from(y)),
                normalize(id(face), x, y)
            );
        }
    }
}

#[test]
fn huge_field_residues_are_rejected() {
    let half = Felt::from_biguint(field::prime_half().clone());
    assert_eq!(
        normalize_felt(0, &half, &Felt::zero()),
        Err(TransformError::DisplacementTooLarge {
            face: Face::Top,
            x: i64::MAX,
            y: 0,
        })
    );
}

#[test]
fn invalid_face_is_rejected() {
    assert_eq!(normalize(6, 0, 0), Err(TransformError::InvalidFace(6)));
    assert_eq!(
        normalize_felt(-3, &Felt::zero(), &Felt::zero()),
        Err(TransformError::InvalidFace(-3))
    );
}

#[test]
fn stepping_across_the_net_matches_planet_adjacency() {
    let normalizer = Normalizer::default();
    for row in 0..NET_ROWS {
        for column in 0..NET_COLUMNS - 1 {
            let (Ok(left), Ok(right)) = (
                net::locate(NetCoord::new(column, row)),
                net::locate(NetCoord::new(column + 1, row)),
            ) else {
                continue;
            };
            assert_eq!(normalizer.step(left, Direction::PosX), Ok(right));
        }
    }

    for column in 0..NET_COLUMNS {
        for row in 0..NET_ROWS - 1 {
            let (Ok(upper), Ok(lower)) = (
                net::locate(NetCoord::new(column, row)),
                net::locate(NetCoord::new(column, row + 1)),
            ) else {
                continue;
            };
            assert_eq!(normalizer.step(upper, Direction::PosY), Ok(lower));
        }
    }
}

#[test]
fn every_cell_has_four_distinct_neighbours() {
    let normalizer = Normalizer::default();
    for face in Face::ALL {
        for (x, y) in [(0, 0), (LAST, LAST), (0, 50), (50, LAST), (42, 17)] {
            let around = normalizer
                .neighbours(GridPosition::new(face, x, y))
                .expect("neighbours of a normalized cell");
            for (index, cell) in around.iter().enumerate() {
                assert!(cell.is_normalized());
                assert!(!around[index + 1..].contains(cell));
            }
        }
    }
}
