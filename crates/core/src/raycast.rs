//! Ray marching against the world's walls.
//!
//! A ray advances a probe point from its origin in fixed increments and tests
//! every wall's bounding box after each step. The first wall (in world order)
//! containing the probe wins. This is a stepping approximation, not an exact
//! intersection: the reported distance is the distance accumulated before the
//! step that landed inside the wall, so it can be short by up to one step.

use crate::types::{Vec2, MAX_RAY_STEPS, MIN_RAY_STEP, RAY_STEP, WALL_UNIT};
use crate::world::{Wall, World};

/// A single ray: origin, facing angle and how far it may travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub direction: f64,
    pub max_distance: f64,
}

impl Ray {
    pub fn new(origin: Vec2, direction: f64, max_distance: f64) -> Self {
        Self {
            origin,
            direction,
            max_distance,
        }
    }
}

/// Result of a successful cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Index into [`World::walls`].
    pub wall_index: usize,
    pub wall: Wall,
    /// Accumulated step distance at the hit.
    pub distance: f64,
}

/// Stepping ray caster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCaster {
    step: f64,
    unit: f64,
}

impl Default for RayCaster {
    fn default() -> Self {
        Self {
            step: RAY_STEP,
            unit: WALL_UNIT,
        }
    }
}

impl RayCaster {
    /// Create a caster with the given step size and wall half-width.
    ///
    /// A step below [`MIN_RAY_STEP`] or a unit that is not a positive finite
    /// number falls back to the default.
    pub fn new(step: f64, unit: f64) -> Self {
        let step = if step.is_finite() && step >= MIN_RAY_STEP {
            step
        } else {
            log::warn!("invalid ray step {step}, using {RAY_STEP}");
            RAY_STEP
        };
        let unit = if unit.is_finite() && unit > 0.0 {
            unit
        } else {
            log::warn!("invalid wall unit {unit}, using {WALL_UNIT}");
            WALL_UNIT
        };
        Self { step, unit }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// Upper bound on probe steps for a ray: `ceil(max_distance / step)`,
    /// capped at [`MAX_RAY_STEPS`].
    pub fn max_steps(&self, max_distance: f64) -> usize {
        if !max_distance.is_finite() || max_distance <= 0.0 {
            return 0;
        }
        let steps = (max_distance / self.step).ceil();
        if steps >= MAX_RAY_STEPS as f64 {
            MAX_RAY_STEPS
        } else {
            steps as usize
        }
    }

    /// Probe points along a ray as `(accumulated distance, point)` pairs.
    ///
    /// Probe `i` sits `(i + 1)` steps from the origin and reports `i` steps of
    /// accumulated distance.
    pub fn probes(
        &self,
        origin: Vec2,
        direction: f64,
        max_distance: f64,
    ) -> impl Iterator<Item = (f64, Vec2)> {
        let step = self.step;
        let delta = Vec2::from_angle(direction) * step;
        (0..self.max_steps(max_distance))
            .map(move |i| (i as f64 * step, origin + delta * (i + 1) as f64))
    }

    /// Cast a ray and return the first wall it hits, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycast_core::{RayCaster, World};
    /// use tui_raycast_core::types::Vec2;
    ///
    /// let world = World::from_rows(vec![vec![0, 0, 0, 0, 0, 1]]).unwrap();
    /// let caster = RayCaster::default();
    ///
    /// // Angle 0 faces +y; turn a quarter to face +x along the row.
    /// let hit = caster
    ///     .cast(&world, Vec2::new(0.0, 0.0), std::f64::consts::FRAC_PI_2, 20.0)
    ///     .unwrap();
    /// assert_eq!(hit.wall_index, 0);
    /// assert!(hit.distance < 5.0);
    /// ```
    pub fn cast(
        &self,
        world: &World,
        origin: Vec2,
        direction: f64,
        max_distance: f64,
    ) -> Option<RayHit> {
        let walls = world.walls();
        self.probes(origin, direction, max_distance)
            .find_map(|(distance, point)| {
                walls
                    .iter()
                    .position(|wall| wall.contains(point, self.unit))
                    .map(|wall_index| RayHit {
                        wall_index,
                        wall: walls[wall_index],
                        distance,
                    })
            })
    }

    pub fn cast_ray(&self, world: &World, ray: &Ray) -> Option<RayHit> {
        self.cast(world, ray.origin, ray.direction, ray.max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn corridor() -> World {
        // Wall at column 10 of a single row.
        let mut row = vec![0u8; 11];
        row[10] = 1;
        World::from_rows(vec![row]).unwrap()
    }

    #[test]
    fn max_steps_is_ceiling() {
        let caster = RayCaster::default();
        assert_eq!(caster.max_steps(20.0), 100);
        assert_eq!(caster.max_steps(0.3), 2);
        assert_eq!(caster.max_steps(0.0), 0);
        assert_eq!(caster.max_steps(-1.0), 0);
        assert_eq!(caster.max_steps(f64::INFINITY), 0);
        assert_eq!(caster.max_steps(f64::NAN), 0);
    }

    #[test]
    fn probes_are_bounded_and_evenly_spaced() {
        let caster = RayCaster::new(0.5, 1.0);
        let probes: Vec<_> = caster.probes(Vec2::ZERO, 0.0, 2.2).collect();
        assert_eq!(probes.len(), 5);
        assert_eq!(probes[0].0, 0.0);
        assert!((probes[0].1.y - 0.5).abs() < 1e-12);
        assert!((probes[4].0 - 2.0).abs() < 1e-12);
        assert!((probes[4].1.y - 2.5).abs() < 1e-12);
    }

    #[test]
    fn hit_reports_distance_before_entering_step() {
        let world = corridor();
        let caster = RayCaster::new(1.0, 1.0);
        // Probes at x = 1, 2, ..; the first inside (9, 11) exclusive is x = 10.
        let hit = caster.cast(&world, Vec2::ZERO, FRAC_PI_2, 20.0).unwrap();
        assert_eq!(hit.wall, Wall::new(10, 0));
        assert!((hit.distance - 9.0).abs() < 1e-9);
    }

    #[test]
    fn miss_when_facing_away() {
        let world = corridor();
        let caster = RayCaster::default();
        assert_eq!(caster.cast(&world, Vec2::ZERO, -FRAC_PI_2, 20.0), None);
    }

    #[test]
    fn miss_when_wall_beyond_max_distance() {
        let world = corridor();
        let caster = RayCaster::default();
        assert_eq!(caster.cast(&world, Vec2::ZERO, FRAC_PI_2, 5.0), None);
        assert!(caster.cast(&world, Vec2::ZERO, FRAC_PI_2, 9.5).is_some());
    }

    #[test]
    fn first_wall_in_world_order_wins_on_overlap() {
        // Adjacent walls overlap; a probe at x = 1.5 lies in both.
        let world = World::from_rows(vec![vec![0, 1, 1]]).unwrap();
        let caster = RayCaster::new(1.5, 1.0);
        let hit = caster.cast(&world, Vec2::ZERO, FRAC_PI_2, 10.0).unwrap();
        assert_eq!(hit.wall_index, 0);
        assert_eq!(hit.wall, Wall::new(1, 0));
    }

    #[test]
    fn origin_inside_wall_hits_at_zero() {
        let world = World::from_rows(vec![vec![1]]).unwrap();
        let caster = RayCaster::default();
        let hit = caster.cast(&world, Vec2::ZERO, PI, 20.0).unwrap();
        assert_eq!(hit.distance, 0.0);
    }

    #[test]
    fn invalid_parameters_fall_back_to_defaults() {
        let caster = RayCaster::new(0.0, -1.0);
        assert_eq!(caster, RayCaster::default());
    }

    #[test]
    fn tiny_step_falls_back_to_default() {
        assert_eq!(RayCaster::new(1e-300, 1.0).step(), RAY_STEP);
        assert_eq!(RayCaster::new(MIN_RAY_STEP, 1.0).step(), MIN_RAY_STEP);
    }

    #[test]
    fn extreme_distances_give_a_bounded_step_count() {
        let caster = RayCaster::default();
        assert_eq!(caster.max_steps(1e300), MAX_RAY_STEPS);
        assert_eq!(caster.max_steps(f64::MAX), MAX_RAY_STEPS);

        let finest = RayCaster::new(MIN_RAY_STEP, 1.0);
        assert!(finest.max_steps(20.0) <= MAX_RAY_STEPS);
        assert_eq!(finest.probes(Vec2::ZERO, 0.0, 1e300).size_hint().1, Some(MAX_RAY_STEPS));
    }

    #[test]
    fn cast_ray_matches_cast() {
        let world = corridor();
        let caster = RayCaster::default();
        let ray = Ray::new(Vec2::new(0.0, 0.2), FRAC_PI_2, 20.0);
        assert_eq!(
            caster.cast_ray(&world, &ray),
            caster.cast(&world, ray.origin, ray.direction, ray.max_distance)
        );
    }
}
