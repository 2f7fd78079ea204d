//! Per-frame simulation step
//!
//! Advances the cube by one nominal frame. The order of the stages below is
//! part of the game's feel (friction before input, clamp before the fall
//! check, landing before coins) and must not be rearranged.

use super::collision::lands_on;
use super::level::Level;
use super::state::{Actor, Facing, GameEvent};
use crate::tuning::Tuning;

/// Held actions for a single step (deterministic snapshot)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

/// Events produced by one step, in the order they happened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub events: Vec<GameEvent>,
}

impl StepOutcome {
    /// Number of coins picked up this step
    pub fn coins_collected(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::CoinCollected { .. }))
            .count()
    }

    pub fn lost(&self) -> bool {
        self.events.contains(&GameEvent::Lost)
    }

    pub fn won(&self) -> bool {
        self.events.contains(&GameEvent::Won)
    }
}

/// Advance `actor` by one frame against the level's platforms and coins.
///
/// Coins touched this frame are marked collected in `level`. Callers must
/// stop stepping once a `Lost` or `Won` event has been returned.
pub fn step(actor: &mut Actor, input: &TickInput, level: &mut Level, tuning: &Tuning) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    actor.vel.y += tuning.gravity;
    actor.vel.x *= tuning.friction;

    // Input sets speed outright; left is checked last so it wins a tie
    if input.move_right {
        actor.vel.x = tuning.speed;
        actor.facing = Facing::Right;
    }
    if input.move_left {
        actor.vel.x = -tuning.speed;
        actor.facing = Facing::Left;
    }

    if input.jump && actor.grounded {
        actor.vel.y = -tuning.jump_power;
        actor.grounded = false;
    }

    actor.pos += actor.vel;
    actor.pos.x = actor.pos.x.max(0.0);

    if actor.pos.y > tuning.world_height() {
        outcome.events.push(GameEvent::Lost);
        return outcome;
    }

    // Matches are judged against the pre-landing pose, so every matching
    // platform snaps the cube and the last one in list order wins
    let falling = actor.bounds();
    let fall_speed = actor.vel.y;
    actor.grounded = false;
    for platform in &level.platforms {
        if lands_on(&falling, fall_speed, &platform.bounds) {
            actor.grounded = true;
            actor.vel.y = 0.0;
            actor.pos.y = platform.bounds.y - actor.size.y;
        }
    }

    let bounds = actor.bounds();
    for (index, coin) in level.coins.iter_mut().enumerate() {
        if !coin.collected && bounds.overlaps(&coin.bounds) {
            coin.collected = true;
            outcome.events.push(GameEvent::CoinCollected { index });
        }
    }

    if actor.pos.x > level.finish_x {
        outcome.events.push(GameEvent::Won);
    }

    outcome
}
