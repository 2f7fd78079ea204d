//! Static world geometry
//!
//! The single level is laid out relative to the display height so that the
//! ground always sits along the bottom of the screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Coin, Platform};
use crate::tuning::Tuning;

/// Platform fill color
pub const PLATFORM_COLOR: u32 = 0x4ecca3;
/// Side length of a coin
pub const COIN_SIZE: f32 = 15.0;
/// Horizontal spawn position
pub const SPAWN_X: f32 = 50.0;
/// Spawn height above the bottom of the display
pub const SPAWN_HEIGHT: f32 = 100.0;

const GROUND_HEIGHT: f32 = 60.0;
const GROUND_WIDTH: f32 = 1200.0;
const LEDGE_WIDTH: f32 = 200.0;
const LEDGE_HEIGHT: f32 = 20.0;

/// Floating ledges as (x, height above the display bottom)
const LEDGES: [(f32, f32); 5] = [
    (300.0, 150.0),
    (600.0, 200.0),
    (900.0, 250.0),
    (1200.0, 150.0),
    (1500.0, 100.0),
];

/// Coins as (x, height above the display bottom), one above each ledge
const COINS: [(f32, f32); 5] = [
    (350.0, 190.0),
    (650.0, 240.0),
    (950.0, 290.0),
    (1250.0, 190.0),
    (1550.0, 140.0),
];

/// Platforms, coins, spawn point and finish line for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Landing checks run in this order
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub spawn: Vec2,
    pub finish_x: f32,
}

impl Level {
    /// The standard level for the tuned display size
    pub fn standard(tuning: &Tuning) -> Self {
        let h = tuning.display_height;

        let mut platforms = Vec::with_capacity(LEDGES.len() + 1);
        platforms.push(Platform::new(
            0.0,
            h - GROUND_HEIGHT,
            GROUND_WIDTH,
            GROUND_HEIGHT,
            PLATFORM_COLOR,
        ));
        platforms.extend(LEDGES.iter().map(|&(x, above)| {
            Platform::new(x, h - above, LEDGE_WIDTH, LEDGE_HEIGHT, PLATFORM_COLOR)
        }));

        let coins = COINS
            .iter()
            .map(|&(x, above)| Coin::new(x, h - above, COIN_SIZE))
            .collect();

        Self {
            platforms,
            coins,
            spawn: Vec2::new(SPAWN_X, h - SPAWN_HEIGHT),
            finish_x: tuning.finish_x,
        }
    }

    /// An empty level with only a spawn point (used for focused tests and tools)
    pub fn empty(spawn: Vec2, finish_x: f32) -> Self {
        Self {
            platforms: Vec::new(),
            coins: Vec::new(),
            spawn,
            finish_x,
        }
    }

    /// Mark every coin uncollected
    pub fn reset_coins(&mut self) {
        for coin in &mut self.coins {
            coin.collected = false;
        }
    }

    pub fn coins_collected(&self) -> usize {
        self.coins.iter().filter(|c| c.collected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let tuning = Tuning::default();
        let level = Level::standard(&tuning);

        assert_eq!(level.platforms.len(), 6);
        assert_eq!(level.coins.len(), 5);

        let ground = &level.platforms[0].bounds;
        assert_eq!(ground.y, 340.0);
        assert_eq!(ground.width, 1200.0);

        assert_eq!(level.coins[0].bounds.x, 350.0);
        assert_eq!(level.coins[0].bounds.y, 210.0);
        assert_eq!(level.spawn, Vec2::new(50.0, 300.0));
        assert_eq!(level.finish_x, 1700.0);
    }

    #[test]
    fn test_spawn_sits_above_ground() {
        let tuning = Tuning::default();
        let level = Level::standard(&tuning);
        let ground = &level.platforms[0].bounds;
        assert!(level.spawn.y + tuning.actor_height <= ground.y);
    }

    #[test]
    fn test_layout_follows_display_height() {
        let tuning = Tuning {
            display_height: 600.0,
            ..Default::default()
        };
        let level = Level::standard(&tuning);
        assert_eq!(level.platforms[0].bounds.y, 540.0);
        assert_eq!(level.spawn.y, 500.0);
    }

    #[test]
    fn test_reset_coins() {
        let mut level = Level::standard(&Tuning::default());
        level.coins[1].collected = true;
        level.coins[3].collected = true;
        assert_eq!(level.coins_collected(), 2);

        level.reset_coins();
        assert_eq!(level.coins_collected(), 0);
    }
}
