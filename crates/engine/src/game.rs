//! Game loop: input, fixed-step simulation, render, present.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{Player, RayCaster, World};
use crate::input::InputSource;
use crate::term::{present, write_fps, Camera, FrameBuffer, OutputSink};
use crate::types::{CancelToken, GameConfig, FPS_EPSILON};

/// Timing of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Wall time from the start of the iteration until the frame was written.
    pub elapsed: Duration,
    /// `1 / (elapsed + 1e-5)`
    pub fps: f64,
}

impl FrameStats {
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self {
            elapsed,
            fps: 1.0 / (elapsed.as_secs_f64() + FPS_EPSILON),
        }
    }
}

/// Owns the world, the player and the camera, and drives them frame by frame.
///
/// Construct one per process and hand it the input source and output sink.
pub struct Game {
    world: World,
    player: Player,
    camera: Camera,
    caster: RayCaster,
    config: GameConfig,
    fb: FrameBuffer,
    run: String,
    frames: u64,
}

impl Game {
    pub fn new(world: World, config: GameConfig) -> Self {
        let camera = Camera::from_config(&config);
        let caster = RayCaster::new(config.ray_step, config.wall_unit);
        let fb = FrameBuffer::new(camera.width(), camera.height());
        Self {
            world,
            player: Player::new(config.spawn),
            camera,
            caster,
            fb,
            run: String::with_capacity(config.width as usize * 4),
            frames: 0,
            config,
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one iteration: poll input, advance the player by the fixed
    /// `delta_time`, render, write the frame and then the FPS readout, and
    /// flush once.
    pub fn step<I, S>(&mut self, input: &mut I, sink: &mut S) -> Result<FrameStats>
    where
        I: InputSource + ?Sized,
        S: OutputSink + ?Sized,
    {
        let start = Instant::now();

        input.poll(Duration::ZERO)?;
        let intent = input.intent();
        self.player.update_with(
            intent,
            self.config.delta_time,
            self.config.rotation_speed,
            self.config.movement_speed,
        );

        self.camera
            .render_into(&self.world, &self.player, &self.caster, &mut self.fb);
        present(&self.fb, sink, &mut self.run)?;

        // The readout is queued over the frame so both land in one flush.
        let stats = FrameStats::from_elapsed(start.elapsed());
        write_fps(sink, stats.fps)?;
        sink.flush()?;

        self.frames += 1;
        log::trace!(
            "frame {} in {:?} at ({:.2}, {:.2}) angle {:.3}",
            self.frames,
            stats.elapsed,
            self.player.position().x,
            self.player.position().y,
            self.player.angle()
        );
        Ok(stats)
    }

    /// Loop until `cancel` fires. Returns the number of frames drawn by this
    /// call.
    ///
    /// With frame pacing on, the rest of each `delta_time` budget is spent
    /// waiting on input so the simulation runs at wall-clock speed.
    pub fn run<I, S>(&mut self, input: &mut I, sink: &mut S, cancel: &CancelToken) -> Result<u64>
    where
        I: InputSource + ?Sized,
        S: OutputSink + ?Sized,
    {
        let budget = self.config.frame_budget();
        let first = self.frames;
        log::info!("game loop started");

        while !cancel.is_cancelled() {
            let stats = self.step(input, sink)?;
            if self.config.frame_pacing && !cancel.is_cancelled() {
                input.poll(budget.saturating_sub(stats.elapsed))?;
            }
        }

        let drawn = self.frames - first;
        log::info!("game loop stopped after {drawn} frames");
        Ok(drawn)
    }
}
