//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per nominal frame, no elapsed-time scaling
//! - No randomness
//! - Stable iteration order (platform and coin list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Rect, lands_on};
pub use level::Level;
pub use state::{Actor, Coin, Facing, GameEvent, GameStatus, Platform};
pub use tick::{StepOutcome, TickInput, step};
