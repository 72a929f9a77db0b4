use serde::{Deserialize, Serialize};

use crate::config::Validate;

use super::types::GridSize;

/// Multiplier applied to the tick cadence while a speed boost is active
/// (arcade rules only).
pub const SPEED_BOOST_FACTOR: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSet {
    /// No obstacles, two food kinds, speed food permanently ratchets the
    /// tick interval down to a floor.
    Classic,
    /// Obstacles (portals, phasing, disco), three food kinds, speed food
    /// grants a temporary multiplier.
    Arcade,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub grid_width: usize,
    pub grid_height: usize,
    pub initial_snake_length: usize,
    pub tick_interval_ms: u64,
    pub rule_set: RuleSet,
    pub obstacle_tick_probability: f32,
    pub obstacle_spawn_probability: f32,
    pub speed_boost_duration_ticks: u64,
    pub phasing_duration_ticks: u64,
    pub disco_duration_ticks: u64,
    pub speed_ratchet_decrement_ms: u64,
    pub min_tick_interval_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            initial_snake_length: 3,
            tick_interval_ms: 100,
            rule_set: RuleSet::Arcade,
            obstacle_tick_probability: 0.02,
            obstacle_spawn_probability: 0.2,
            speed_boost_duration_ticks: 50,
            phasing_duration_ticks: 50,
            disco_duration_ticks: 80,
            speed_ratchet_decrement_ms: 10,
            min_tick_interval_ms: 50,
        }
    }
}

impl GameSettings {
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_width < 10 || self.grid_width > 100 {
            return Err("Grid width must be between 10 and 100".to_string());
        }
        if self.grid_height < 10 || self.grid_height > 100 {
            return Err("Grid height must be between 10 and 100".to_string());
        }
        if !(2..=10).contains(&self.initial_snake_length) {
            return Err("Initial snake length must be between 2 and 10".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if !(0.0..=1.0).contains(&self.obstacle_tick_probability) {
            return Err("Obstacle tick probability must be between 0.0 and 1.0".to_string());
        }
        if !(0.0..=1.0).contains(&self.obstacle_spawn_probability) {
            return Err("Obstacle spawn probability must be between 0.0 and 1.0".to_string());
        }
        if self.speed_boost_duration_ticks == 0
            || self.phasing_duration_ticks == 0
            || self.disco_duration_ticks == 0
        {
            return Err("Effect durations must be at least 1 tick".to_string());
        }
        if self.speed_ratchet_decrement_ms == 0 {
            return Err("Speed ratchet decrement must be at least 1ms".to_string());
        }
        if self.min_tick_interval_ms < 50 || self.min_tick_interval_ms > self.tick_interval_ms {
            return Err(
                "Minimum tick interval must be between 50ms and the base tick interval"
                    .to_string(),
            );
        }
        Ok(())
    }
}
