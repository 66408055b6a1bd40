//! Camera: turns the world and player pose into a frame of shaded glyphs.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each screen column casts one ray; rays fan evenly across the field of view.
//! A hit at distance `d` covers every row whose distance from the midline is
//! below `height / max(d, 0.01)`, so nearer walls draw taller. Rows outside the
//! wall band show the floor (below the midline) or sky (above).

use crate::cache::ShadeCache;
use crate::core::{Player, RayCaster, RayHit, World};
use crate::fb::FrameBuffer;
use crate::shade::{center_offset, floor_glyph, wall_glyph};
use crate::types::{GameConfig, FOG_DISTANCE, FOV, MIN_WALL_DISTANCE, SCREEN_HEIGHT, SCREEN_WIDTH};

const FLOOR_CACHE_CAPACITY: usize = 4096;
const WALL_CACHE_CAPACITY: usize = 4096;

/// Ray-casting camera with its per-frame column scratch and shading caches.
#[derive(Debug, Clone)]
pub struct Camera {
    width: u16,
    height: u16,
    fov: f64,
    fog_distance: f64,
    columns: Vec<Option<RayHit>>,
    floor_cache: ShadeCache<(u64, u16)>,
    wall_cache: ShadeCache<u64>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT, FOV, FOG_DISTANCE)
    }
}

impl Camera {
    pub fn new(width: u16, height: u16, fov: f64, fog_distance: f64) -> Self {
        Self {
            width,
            height,
            fov,
            fog_distance,
            columns: Vec::with_capacity(width as usize),
            floor_cache: ShadeCache::new(FLOOR_CACHE_CAPACITY),
            wall_cache: ShadeCache::new(WALL_CACHE_CAPACITY),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.width, config.height, config.fov, config.fog_distance)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn fog_distance(&self) -> f64 {
        self.fog_distance
    }

    /// Ray direction for screen column `x` when the player faces `angle`.
    pub fn column_angle(&self, angle: f64, x: u16) -> f64 {
        let per_column = self.fov / self.width as f64;
        angle - self.fov / 2.0 + (x as f64 + 1.0) * per_column
    }

    /// Cast one ray per column from the player's position.
    pub fn cast_columns(
        &mut self,
        world: &World,
        player: &Player,
        caster: &RayCaster,
    ) -> &[Option<RayHit>] {
        self.columns.clear();
        for x in 0..self.width {
            let direction = self.column_angle(player.angle(), x);
            let hit = caster.cast(world, player.position(), direction, self.fog_distance);
            self.columns.push(hit);
        }
        &self.columns
    }

    /// Render a full frame into `fb`, resizing it to the camera's size.
    ///
    /// After the first frame at a given size this does not allocate, apart
    /// from filling the shading caches with values not seen before.
    pub fn render_into(
        &mut self,
        world: &World,
        player: &Player,
        caster: &RayCaster,
        fb: &mut FrameBuffer,
    ) {
        self.cast_columns(world, player, caster);
        fb.resize(self.width, self.height);

        let Self {
            height,
            fog_distance,
            columns,
            floor_cache,
            wall_cache,
            ..
        } = self;
        let (height, fog_distance) = (*height, *fog_distance);

        for y in 0..height {
            let offset = center_offset(y, height);
            let floor = floor_cache.get_or_insert_with((offset.to_bits(), y), || {
                floor_glyph(offset, y, height)
            });

            for (x, column) in columns.iter().enumerate() {
                let cell = match column {
                    Some(hit) => {
                        if in_wall_band(offset, height, hit.distance) {
                            wall_cache.get_or_insert_with(hit.distance.to_bits(), || {
                                wall_glyph(hit.distance, fog_distance)
                            })
                        } else {
                            floor
                        }
                    }
                    None => floor,
                };
                fb.set(x as u16, y, cell);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, world: &World, player: &Player, caster: &RayCaster) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.width, self.height);
        self.render_into(world, player, caster, &mut fb);
        fb
    }

    /// Number of memoized floor and wall shades.
    pub fn cached_shades(&self) -> (usize, usize) {
        (self.floor_cache.len(), self.wall_cache.len())
    }
}

/// Whether a row `offset` cells from the midline lies inside the silhouette of
/// a wall hit at `distance`.
fn in_wall_band(offset: f64, height: u16, distance: f64) -> bool {
    offset < height as f64 / distance.max(MIN_WALL_DISTANCE)
}
