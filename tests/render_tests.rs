//! Camera rendering tests - full frames through the public API

use tui_raycast::core::{Player, RayCaster, World};
use tui_raycast::term::shade::{BLANK, FLOOR_FAR, FLOOR_MID, FLOOR_NEAR, WALL_FAR, WALL_MID, WALL_NEAR};
use tui_raycast::term::{floor_glyph, Camera, FrameBuffer};
use tui_raycast::types::{Vec2, FOG_DISTANCE, FOV};

fn ring(size: usize) -> World {
    let rows = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| (x == 0 || y == 0 || x == size - 1 || y == size - 1) as u8)
                .collect()
        })
        .collect();
    World::from_rows(rows).unwrap()
}

fn is_wall(ch: char) -> bool {
    matches!(ch, WALL_NEAR | WALL_MID | WALL_FAR)
}

#[test]
fn centered_in_a_ring_every_column_shows_wall_at_midline() {
    let world = ring(9);
    let player = Player::new(Vec2::new(4.0, 4.0));
    let caster = RayCaster::default();
    let mut cam = Camera::new(100, 20, FOV, FOG_DISTANCE);

    let hits = cam.cast_columns(&world, &player, &caster).to_vec();
    assert_eq!(hits.len(), 100);
    for (x, hit) in hits.iter().enumerate() {
        let hit = hit.unwrap_or_else(|| panic!("column {x} missed the ring"));
        assert!(hit.distance < FOG_DISTANCE);
    }

    let fb = cam.render(&world, &player, &caster);
    let mid = fb.height() / 2;
    for x in 0..fb.width() {
        let ch = fb.get(x, mid).unwrap().ch;
        assert!(is_wall(ch), "column {x} midline was {ch:?}");
    }
}

#[test]
fn tight_ring_fills_every_cell_with_wall() {
    let world = ring(3);
    let player = Player::new(Vec2::new(1.0, 1.0));
    let caster = RayCaster::default();
    let mut cam = Camera::default();
    let fb = cam.render(&world, &player, &caster);

    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let ch = fb.get(x, y).unwrap().ch;
            assert_eq!(ch, WALL_NEAR, "cell ({x}, {y}) was {ch:?}");
        }
    }
}

#[test]
fn wall_bands_are_contiguous_around_the_midline() {
    let world = World::default_level();
    let player = Player::new(Vec2::new(8.0, 5.0)).with_angle(0.9);
    let caster = RayCaster::default();
    let mut cam = Camera::default();
    let fb = cam.render(&world, &player, &caster);

    for x in 0..fb.width() {
        let rows: Vec<bool> = (0..fb.height())
            .map(|y| is_wall(fb.get(x, y).unwrap().ch))
            .collect();
        let first = rows.iter().position(|&w| w);
        let last = rows.iter().rposition(|&w| w);
        if let (Some(first), Some(last)) = (first, last) {
            assert!(rows[first..=last].iter().all(|&w| w), "gap in column {x}");
            assert!(first <= 10 && last >= 10, "band misses midline in column {x}");
        }
    }
}

#[test]
fn closer_walls_draw_taller_and_denser() {
    let world = ring(30);
    let caster = RayCaster::default();
    let mut cam = Camera::default();

    let band = |fb: &FrameBuffer| {
        (0..fb.height())
            .filter(|&y| is_wall(fb.get(50, y).unwrap().ch))
            .count()
    };

    // Facing +y toward the far wall from two depths.
    let near = cam.render(&world, &Player::new(Vec2::new(15.0, 25.0)), &caster);
    let far = cam.render(&world, &Player::new(Vec2::new(15.0, 22.0)), &caster);

    assert!(band(&near) > band(&far));
    assert_eq!(near.get(50, 10).unwrap().ch, WALL_NEAR);
    assert_eq!(far.get(50, 10).unwrap().ch, WALL_MID);
}

#[test]
fn open_space_renders_sky_and_tiered_floor() {
    let world = World::from_rows(vec![vec![0]]).unwrap();
    let player = Player::new(Vec2::new(100.0, 100.0));
    let caster = RayCaster::default();
    let mut cam = Camera::default();
    let fb = cam.render(&world, &player, &caster);

    for y in 0..=10 {
        assert!(fb.row(y).iter().all(|c| c.ch == BLANK), "row {y}");
    }
    let expect = [
        (11, FLOOR_NEAR),
        (13, FLOOR_NEAR),
        (14, FLOOR_MID),
        (16, FLOOR_MID),
        (17, FLOOR_FAR),
        (19, FLOOR_FAR),
    ];
    for (y, ch) in expect {
        assert!(fb.row(y).iter().all(|c| c.ch == ch), "row {y}");
    }
}

#[test]
fn floor_glyph_at_midline_is_always_sky() {
    for height in [2u16, 10, 20, 40] {
        for offset in [0.0, 0.5, 3.0, 100.0] {
            assert_eq!(floor_glyph(offset, height / 2, height).ch, BLANK);
        }
    }
}

#[test]
fn render_into_reuses_and_resizes_buffer() {
    let world = World::default_level();
    let player = Player::spawn();
    let caster = RayCaster::default();
    let mut cam = Camera::new(30, 12, FOV, FOG_DISTANCE);

    let mut fb = FrameBuffer::new(2, 2);
    cam.render_into(&world, &player, &caster, &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 12));

    let again = cam.render(&world, &player, &caster);
    assert_eq!(fb, again);
}
