//! Game session
//!
//! Owns everything that changes during a run: the cube, the level's coin
//! flags, score, status and camera. The host calls [`Session::tick`] once per
//! simulation step and [`Session::restart`] whenever the restart key fires.

use glam::Vec2;

use crate::consts::{FRAME_DT, MAX_SUBSTEPS};
use crate::sim::{Actor, Coin, GameEvent, GameStatus, Level, Platform, StepOutcome, TickInput, step};
use crate::tuning::Tuning;

/// One run of the level
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    level: Level,
    actor: Actor,
    score: u32,
    status: GameStatus,
    camera_offset: f32,
    /// Steps simulated since the last restart
    frame: u64,
}

impl Session {
    /// A fresh session on the standard level
    pub fn new(tuning: Tuning) -> Self {
        let level = Level::standard(&tuning);
        Self::with_level(tuning, level)
    }

    /// A fresh session on a custom level
    pub fn with_level(tuning: Tuning, level: Level) -> Self {
        let actor = Actor::from_tuning(level.spawn, &tuning);
        Self {
            tuning,
            level,
            actor,
            score: 0,
            status: GameStatus::Playing,
            camera_offset: 0.0,
            frame: 0,
        }
    }

    /// Run one simulation step. Does nothing once the run has ended.
    pub fn tick(&mut self, input: &TickInput) -> StepOutcome {
        if self.status.is_terminal() {
            return StepOutcome::default();
        }

        let outcome = step(&mut self.actor, input, &mut self.level, &self.tuning);
        self.frame += 1;
        self.camera_offset = self.tuning.camera_offset_for(self.actor.pos.x);

        for event in &outcome.events {
            match *event {
                GameEvent::CoinCollected { index } => {
                    self.score += self.tuning.coin_reward;
                    log::debug!("Coin {} collected, score {}", index, self.score);
                }
                GameEvent::Lost => {
                    self.status = GameStatus::Lost;
                    log::info!("Fell off the world at frame {} (score {})", self.frame, self.score);
                }
                GameEvent::Won => {
                    self.status = GameStatus::Won;
                    log::info!("Reached the finish at frame {} (score {})", self.frame, self.score);
                }
            }
        }

        outcome
    }

    /// Reset the cube, coins, score and status. Valid in any status.
    pub fn restart(&mut self) {
        self.actor.reset(self.level.spawn);
        self.level.reset_coins();
        self.score = 0;
        self.status = GameStatus::Playing;
        self.camera_offset = 0.0;
        self.frame = 0;
        log::info!("Session restarted");
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn camera_offset(&self) -> f32 {
        self.camera_offset
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Read-only snapshot for the renderer and HUD
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            actor: &self.actor,
            platforms: &self.level.platforms,
            coins: &self.level.coins,
            camera_offset: self.camera_offset,
            status: self.status,
            score: self.score,
            display: Vec2::new(self.tuning.display_width, self.tuning.display_height),
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub actor: &'a Actor,
    pub platforms: &'a [Platform],
    pub coins: &'a [Coin],
    /// Horizontal scroll subtracted from world x before drawing
    pub camera_offset: f32,
    pub status: GameStatus,
    pub score: u32,
    /// Logical display size
    pub display: Vec2,
}

/// Turns display-refresh timestamps into a whole number of simulation steps.
///
/// The physics constants are per-frame values tuned for 60 Hz, so steps are
/// paced at [`FRAME_DT`] regardless of the display's refresh rate.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    last_time: Option<f64>,
}

impl FrameClock {
    /// Timing jitter tolerated when deciding whether a step is due (seconds)
    const TOLERANCE: f32 = 0.001;
    /// Longest frame gap honoured (tab switches would otherwise replay seconds)
    const MAX_FRAME_GAP: f32 = 0.1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps to run for a frame at `time_ms` (a `requestAnimationFrame` timestamp)
    pub fn advance(&mut self, time_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => (((time_ms - last) / 1000.0) as f32).clamp(0.0, Self::MAX_FRAME_GAP),
            None => FRAME_DT,
        };
        self.last_time = Some(time_ms);
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator + Self::TOLERANCE >= FRAME_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= FRAME_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            // Drop the backlog instead of carrying it into the next frame
            self.accumulator = self.accumulator.min(FRAME_DT);
        }
        steps
    }

    /// Forget timing history (after a pause in frame delivery)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}
