//! Glyph shading for walls and floor.
//!
//! Both functions are pure; [`Camera`](crate::camera::Camera) memoizes them
//! through [`ShadeCache`](crate::cache::ShadeCache).

use crate::fb::{Cell, CellStyle, Rgb};

pub const WALL_NEAR: char = '▓';
pub const WALL_MID: char = '▒';
pub const WALL_FAR: char = '░';
pub const FLOOR_NEAR: char = '.';
pub const FLOOR_MID: char = 'x';
pub const FLOOR_FAR: char = '#';
pub const BLANK: char = ' ';

const WALL_NEAR_STYLE: CellStyle = CellStyle::fg(Rgb::gray(235));
const WALL_MID_STYLE: CellStyle = CellStyle::fg(Rgb::gray(180));
const WALL_FAR_STYLE: CellStyle = CellStyle::fg(Rgb::gray(120));
const FLOOR_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(120, 110, 90),
    bg: Rgb::gray(0),
    dim: true,
};

/// Wall glyph for a hit at `distance`, fading out at `fog_distance`.
///
/// | distance | glyph |
/// |----------|-------|
/// | `< fog/5` | `▓` |
/// | `< 2·fog/5` | `▒` |
/// | `< fog` | `░` |
/// | otherwise | blank |
pub fn wall_glyph(distance: f64, fog_distance: f64) -> Cell {
    if distance < fog_distance / 5.0 {
        Cell::new(WALL_NEAR, WALL_NEAR_STYLE)
    } else if distance < 2.0 * fog_distance / 5.0 {
        Cell::new(WALL_MID, WALL_MID_STYLE)
    } else if distance < fog_distance {
        Cell::new(WALL_FAR, WALL_FAR_STYLE)
    } else {
        Cell::BLANK
    }
}

/// Floor glyph for row `y` at `center_offset` rows from the midline.
///
/// Rows at or above the midline are sky (blank). Below it the half-height is
/// split in thirds: sparse dots nearest the midline, densest at the bottom.
pub fn floor_glyph(center_offset: f64, y: u16, height: u16) -> Cell {
    let half = height as f64 / 2.0;
    if y as f64 <= half {
        return Cell::BLANK;
    }
    let ch = if center_offset < half / 3.0 {
        FLOOR_NEAR
    } else if center_offset < 2.0 * half / 3.0 {
        FLOOR_MID
    } else {
        FLOOR_FAR
    };
    Cell::new(ch, FLOOR_STYLE)
}

/// Distance of row `y` from the horizontal midline.
#[inline]
pub fn center_offset(y: u16, height: u16) -> f64 {
    (height as f64 / 2.0 - y as f64).abs()
}
