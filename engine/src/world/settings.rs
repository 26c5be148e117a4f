use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::effect::EffectKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectDurations {
    pub reverse_controls: f32,
    pub speed_boost: f32,
    pub speed_brake: f32,
    pub phantom: f32,
}

impl EffectDurations {
    pub fn duration_for(&self, kind: EffectKind) -> f32 {
        match kind {
            // Food is applied and discarded, it never runs on a timer.
            EffectKind::Food => 0.0,
            EffectKind::ReverseControls => self.reverse_controls,
            EffectKind::SpeedBoost => self.speed_boost,
            EffectKind::SpeedBrake => self.speed_brake,
            EffectKind::Phantom => self.phantom,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemWeights {
    pub food: u32,
    pub reverse_controls: u32,
    pub speed_boost: u32,
    pub speed_brake: u32,
    pub phantom: u32,
}

impl ItemWeights {
    pub fn weight_for(&self, kind: EffectKind) -> u32 {
        match kind {
            EffectKind::Food => self.food,
            EffectKind::ReverseControls => self.reverse_controls,
            EffectKind::SpeedBoost => self.speed_boost,
            EffectKind::SpeedBrake => self.speed_brake,
            EffectKind::Phantom => self.phantom,
        }
    }

    pub fn total(&self) -> u32 {
        EffectKind::ALL
            .iter()
            .map(|&kind| self.weight_for(kind))
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSettings {
    pub field_width: f32,
    pub field_height: f32,
    /// Items and spawn points keep this distance from the field edge.
    pub field_margin: f32,
    pub snake_initial_length: usize,
    pub snake_speed: f32,
    pub link_radius: f32,
    /// Links a snake gains per food item, spread over subsequent frames.
    pub food_growth: u32,
    pub item_radius: f32,
    pub speed_boost_factor: f32,
    pub speed_brake_factor: f32,
    pub effect_durations: EffectDurations,
    pub item_weights: ItemWeights,
    pub respawn_effects: Vec<EffectKind>,
    pub dead_link_fade: f32,
    pub colors: Vec<Rgba>,
    pub frame_rate: u32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            field_width: 1600.0,
            field_height: 900.0,
            field_margin: 40.0,
            snake_initial_length: 10,
            snake_speed: 240.0,
            link_radius: 6.0,
            food_growth: 3,
            item_radius: 10.0,
            speed_boost_factor: 1.6,
            speed_brake_factor: 0.6,
            effect_durations: EffectDurations {
                reverse_controls: 6.0,
                speed_boost: 5.0,
                speed_brake: 5.0,
                phantom: 4.0,
            },
            item_weights: ItemWeights {
                food: 60,
                reverse_controls: 8,
                speed_boost: 12,
                speed_brake: 10,
                phantom: 10,
            },
            respawn_effects: vec![EffectKind::Phantom],
            dead_link_fade: 2.5,
            colors: vec![
                Rgba::new(255, 140, 90, 255),
                Rgba::new(110, 220, 255, 255),
                Rgba::new(170, 255, 130, 255),
                Rgba::new(255, 120, 200, 255),
                Rgba::new(220, 220, 255, 255),
                Rgba::new(255, 210, 120, 255),
            ],
            frame_rate: 30,
        }
    }
}

impl Validate for WorldSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err("field dimensions must be positive".to_string());
        }
        if self.field_margin < 0.0 {
            return Err("field_margin must not be negative".to_string());
        }
        if self.field_margin * 2.0 >= self.field_width.min(self.field_height) {
            return Err("field_margin must leave room inside the field".to_string());
        }
        if self.snake_initial_length == 0 {
            return Err("snake_initial_length must be at least 1".to_string());
        }
        if self.snake_speed <= 0.0 {
            return Err("snake_speed must be positive".to_string());
        }
        if self.link_radius <= 0.0 {
            return Err("link_radius must be positive".to_string());
        }
        if self.food_growth == 0 {
            return Err("food_growth must be at least 1".to_string());
        }
        if self.item_radius <= 0.0 {
            return Err("item_radius must be positive".to_string());
        }
        if self.speed_boost_factor <= 0.0 || self.speed_brake_factor <= 0.0 {
            return Err("speed factors must be positive".to_string());
        }
        for kind in EffectKind::ALL {
            if kind != EffectKind::Food && self.effect_durations.duration_for(kind) <= 0.0 {
                return Err(format!("duration for {:?} must be positive", kind));
            }
        }
        if self.item_weights.total() == 0 {
            return Err("at least one item weight must be non-zero".to_string());
        }
        if self.respawn_effects.contains(&EffectKind::Food) {
            return Err("respawn_effects cannot contain food".to_string());
        }
        if self.dead_link_fade <= 0.0 {
            return Err("dead_link_fade must be positive".to_string());
        }
        if self.colors.is_empty() {
            return Err("colors must not be empty".to_string());
        }
        if self.frame_rate == 0 || self.frame_rate > 240 {
            return Err("frame_rate must be between 1 and 240".to_string());
        }
        Ok(())
    }
}
