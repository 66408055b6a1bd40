//! World tests - walls derived from tile grids

use tui_raycast::core::{TileGrid, Wall, World, WorldError};

/// Small deterministic generator so grids vary without a test-only dependency.
struct Lcg(u32);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1664525).wrapping_add(1013904223);
        self.0 >> 16
    }
}

fn random_rows(rng: &mut Lcg, width: usize, height: usize) -> Vec<Vec<u8>> {
    (0..height)
        .map(|_| (0..width).map(|_| (rng.next() % 3 == 0) as u8).collect())
        .collect()
}

#[test]
fn wall_count_matches_solid_tiles() {
    let mut rng = Lcg(7);
    for case in 0..50 {
        let width = 1 + (rng.next() % 24) as usize;
        let height = 1 + (rng.next() % 24) as usize;
        let rows = random_rows(&mut rng, width, height);
        let solid = rows.iter().flatten().filter(|&&t| t != 0).count();

        let world = World::from_rows(rows).unwrap();
        assert_eq!(world.walls().len(), solid, "case {case}");
    }
}

#[test]
fn each_wall_sits_on_its_solid_tile() {
    let mut rng = Lcg(99);
    let rows = random_rows(&mut rng, 17, 13);
    let world = World::from_rows(rows.clone()).unwrap();

    for wall in world.walls() {
        assert_eq!(rows[wall.y as usize][wall.x as usize], 1);
        assert_eq!(wall.center().x, wall.x as f64);
        assert_eq!(wall.center().y, wall.y as f64);
    }
}

#[test]
fn walls_enumerate_row_then_column() {
    let world = World::default_level();
    let walls = world.walls();
    assert!(walls
        .windows(2)
        .all(|w| (w[0].y, w[0].x) < (w[1].y, w[1].x)));
    assert_eq!(walls[0], Wall::new(0, 0));
    assert_eq!(*walls.last().unwrap(), Wall::new(16, 12));
}

#[test]
fn empty_world_has_no_walls() {
    let world = World::from_rows(vec![vec![0; 5]; 4]).unwrap();
    assert!(world.walls().is_empty());
}

#[test]
fn construction_fails_fast_on_malformed_grids() {
    assert_eq!(World::from_rows(vec![]).unwrap_err(), WorldError::EmptyGrid);
    assert!(matches!(
        World::from_rows(vec![vec![1, 1], vec![1]]),
        Err(WorldError::RaggedRow { row: 1, .. })
    ));
}

#[test]
fn parsed_map_matches_numeric_rows() {
    let parsed = TileGrid::parse(
        "
#####
#...#
#.#.#
#####
",
    )
    .unwrap();
    let numeric = TileGrid::new(vec![
        vec![1, 1, 1, 1, 1],
        vec![1, 0, 0, 0, 1],
        vec![1, 0, 1, 0, 1],
        vec![1, 1, 1, 1, 1],
    ])
    .unwrap();
    assert_eq!(parsed, numeric);
}
