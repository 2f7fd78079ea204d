//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// Where the run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Active gameplay
    #[default]
    Playing,
    /// Fell below the world; frozen until restart
    Lost,
    /// Crossed the finish line; frozen until restart
    Won,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Direction the cube's eye looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Something that happened during one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Coin at this index in the level's coin list was picked up
    CoinCollected { index: usize },
    /// Cube fell below the world's lower bound
    Lost,
    /// Cube crossed the finish threshold
    Won,
}

/// The player-controlled cube
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner in world coordinates (y grows downward)
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Resting on a platform; required to jump
    pub grounded: bool,
    pub facing: Facing,
}

impl Actor {
    /// A cube at rest at `pos`
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            grounded: false,
            facing: Facing::Right,
        }
    }

    pub fn from_tuning(pos: Vec2, tuning: &Tuning) -> Self {
        Self::new(pos, Vec2::new(tuning.actor_width, tuning.actor_height))
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Put the cube back at `spawn` with no motion.
    ///
    /// Facing is kept, the same way a restart leaves the eye where it was.
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.grounded = false;
    }
}

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub bounds: Rect,
    /// Cosmetic fill color, 0xRRGGBB
    pub color: u32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: u32) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            color,
        }
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub bounds: Rect,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, size, size),
            collected: false,
        }
    }
}
