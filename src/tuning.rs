//! Data-driven game balance
//!
//! Every physics and layout constant the session reads comes from [`Tuning`].
//! Defaults reproduce the classic feel; a partial JSON object can override any
//! subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics, scoring and display constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Horizontal velocity multiplier applied every frame (0..1)
    pub friction: f32,
    /// Horizontal speed set while a move key is held
    pub speed: f32,
    /// Upward velocity given by a jump
    pub jump_power: f32,
    /// Score per coin
    pub coin_reward: u32,
    /// World x past which the run is won
    pub finish_x: f32,
    /// Logical display width (the camera keeps the cube at a third of it)
    pub display_width: f32,
    /// Logical display height; falling below it loses the run
    pub display_height: f32,
    pub actor_width: f32,
    pub actor_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            speed: ACTOR_SPEED,
            jump_power: ACTOR_JUMP_POWER,
            coin_reward: COIN_REWARD,
            finish_x: FINISH_X,
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Lower bound of the world (y grows downward)
    pub fn world_height(&self) -> f32 {
        self.display_height
    }

    /// Horizontal scroll for a cube at `actor_x`
    pub fn camera_offset_for(&self, actor_x: f32) -> f32 {
        actor_x - self.display_width * CAMERA_LEAD_FRACTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_feel() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.8);
        assert_eq!(t.friction, 0.8);
        assert_eq!(t.speed, 5.0);
        assert_eq!(t.jump_power, 15.0);
        assert_eq!(t.coin_reward, 100);
        assert_eq!(t.finish_x, 1700.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.5, "display_height": 600 }"#).unwrap();
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.world_height(), 600.0);
        assert_eq!(t.speed, ACTOR_SPEED);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ gravity: }").is_err());
        assert!(Tuning::from_json(r#"{ "gravity": "heavy" }"#).is_err());
    }

    #[test]
    fn test_camera_leads_by_a_third() {
        let t = Tuning::default();
        let offset = t.camera_offset_for(400.0);
        assert!((offset - (400.0 - 800.0 / 3.0)).abs() < 1e-4);
    }
}
