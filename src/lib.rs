//! Cube Runner - a small side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level geometry, physics step, collisions)
//! - `session`: Game session (score, status, camera, restart, frame pacing)
//! - `input`: Keyboard bindings and the per-frame held-key snapshot
//! - `renderer`: WebGPU rendering pipeline and HUD text
//! - `tuning`: Data-driven physics and layout constants

pub mod input;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use input::{Action, InputState};
pub use session::{FrameClock, FrameView, Session};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame duration the per-frame physics constants are tuned for (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum simulation steps per display frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical display size
    pub const DISPLAY_WIDTH: f32 = 800.0;
    pub const DISPLAY_HEIGHT: f32 = 400.0;

    /// Cube defaults
    pub const ACTOR_WIDTH: f32 = 40.0;
    pub const ACTOR_HEIGHT: f32 = 40.0;
    pub const ACTOR_SPEED: f32 = 5.0;
    pub const ACTOR_JUMP_POWER: f32 = 15.0;

    /// Per-frame downward acceleration
    pub const GRAVITY: f32 = 0.8;
    /// Per-frame horizontal velocity decay
    pub const FRICTION: f32 = 0.8;

    /// Points per coin
    pub const COIN_REWARD: u32 = 100;
    /// Crossing this x wins the run
    pub const FINISH_X: f32 = 1700.0;

    /// Camera keeps the cube a third of the way across the display
    pub const CAMERA_LEAD_FRACTION: f32 = 1.0 / 3.0;
}
