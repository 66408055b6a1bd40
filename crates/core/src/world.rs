//! World module - tile grid and the walls derived from it
//!
//! A [`TileGrid`] is an immutable row-major grid of tiles where any non-zero
//! value is solid. A [`World`] scans the grid once and keeps one [`Wall`] per
//! solid tile, in row-major order.

use thiserror::Error;

use crate::types::Vec2;

/// Errors that can occur when building a tile grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// The grid has no rows, or its first row has no columns.
    #[error("tile grid must have at least one row and one column")]
    EmptyGrid,

    /// A row's length differs from the first row.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Immutable rectangular grid of tiles (0 = open, anything else = solid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<u8>,
}

impl TileGrid {
    /// Build a grid from rows of tiles.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, WorldError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(WorldError::EmptyGrid);
        }

        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(WorldError::RaggedRow {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            tiles.extend(cells);
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Parse an ASCII map, one line per row.
    ///
    /// `#` and `1` are solid; `.`, `0` and space are open, including spaces at
    /// the end of a line. Leading and trailing blank lines are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycast_core::TileGrid;
    ///
    /// let grid = TileGrid::parse("###\n#.#\n###").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 3));
    /// assert!(grid.is_solid(0, 0));
    /// assert!(!grid.is_solid(1, 1));
    /// ```
    pub fn parse(map: &str) -> Result<Self, WorldError> {
        let lines: Vec<&str> = map.lines().collect();
        let blank = |line: &&str| line.trim().is_empty();
        let start = lines.iter().position(|l| !blank(l)).unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|l| !blank(l))
            .map(|i| i + 1)
            .unwrap_or(start);

        let rows = lines[start..end]
            .iter()
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        '#' | '1' => 1,
                        _ => 0,
                    })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the tile at column `x`, row `y` is solid. Out of bounds is open.
    pub fn is_solid(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.tiles[y * self.width + x] != 0
    }

    pub fn solid_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t != 0).count()
    }
}

/// Square axis-aligned obstacle centered on a solid tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    /// Column of the source tile.
    pub x: i32,
    /// Row of the source tile.
    pub y: i32,
}

impl Wall {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x as f64, self.y as f64)
    }

    /// Strict bounding-box test: `|px - x| < unit` and `|py - y| < unit`.
    #[inline]
    pub fn contains(&self, point: Vec2, unit: f64) -> bool {
        (point.x - self.x as f64).abs() < unit && (point.y - self.y as f64).abs() < unit
    }
}

/// Static level geometry: the tile grid and its derived walls.
#[derive(Debug, Clone)]
pub struct World {
    grid: TileGrid,
    walls: Vec<Wall>,
}

impl World {
    pub fn new(grid: TileGrid) -> Self {
        let mut walls = Vec::with_capacity(grid.solid_count());
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_solid(x, y) {
                    walls.push(Wall::new(x as i32, y as i32));
                }
            }
        }
        log::debug!(
            "world built: {}x{} tiles, {} walls",
            grid.width(),
            grid.height(),
            walls.len()
        );
        Self { grid, walls }
    }

    /// Build a world straight from rows of tiles.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, WorldError> {
        TileGrid::new(rows).map(Self::new)
    }

    /// The built-in level.
    pub fn default_level() -> Self {
        Self::new(crate::level::default_grid())
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Walls in row-major order of their source tiles.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }
}
