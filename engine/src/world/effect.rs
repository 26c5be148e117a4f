use serde::{Deserialize, Serialize};

use super::settings::WorldSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Instantaneous growth; applied at pickup and never stored.
    Food,
    /// Applied to every snake at pickup; the toggle persists until the next
    /// reverse pickup rather than running on a timer.
    ReverseControls,
    SpeedBoost,
    SpeedBrake,
    /// Collision immunity; a phantom snake cannot die and cannot be crashed
    /// into.
    Phantom,
}

impl EffectKind {
    pub const ALL: [EffectKind; 5] = [
        EffectKind::Food,
        EffectKind::ReverseControls,
        EffectKind::SpeedBoost,
        EffectKind::SpeedBrake,
        EffectKind::Phantom,
    ];

    /// Pickup collision radius. Rare kinds are physically larger so they are
    /// easier to spot and grab.
    pub fn item_radius(self, settings: &WorldSettings) -> f32 {
        let factor = match self {
            EffectKind::Food => 1.0,
            EffectKind::ReverseControls => 1.25,
            EffectKind::SpeedBoost => 0.8,
            EffectKind::SpeedBrake => 0.8,
            EffectKind::Phantom => 1.5,
        };
        settings.item_radius * factor
    }

    fn speed_factor(self, settings: &WorldSettings) -> f32 {
        match self {
            EffectKind::SpeedBoost => settings.speed_boost_factor,
            EffectKind::SpeedBrake => settings.speed_brake_factor,
            _ => 1.0,
        }
    }
}

/// A timed modifier attached to one player. Expired effects are removed by
/// the universe's advance phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Effect {
    pub kind: EffectKind,
    pub time_left: f32,
}

impl Effect {
    pub fn new(kind: EffectKind, settings: &WorldSettings) -> Self {
        Self {
            kind,
            time_left: settings.effect_durations.duration_for(kind),
        }
    }

    /// Counts the effect down; returns false once it should be dropped.
    pub fn update(&mut self, dt: f32) -> bool {
        self.time_left -= dt;
        self.time_left > 0.0
    }
}

/// The fixed effect set granted to a freshly respawned snake.
pub fn respawn_bundle(settings: &WorldSettings) -> Vec<Effect> {
    settings
        .respawn_effects
        .iter()
        .map(|&kind| Effect::new(kind, settings))
        .collect()
}

/// Combined speed multiplier of a player's active effects.
pub fn speed_factor(effects: &[Effect], settings: &WorldSettings) -> f32 {
    effects
        .iter()
        .map(|effect| effect.kind.speed_factor(settings))
        .product()
}

pub fn is_phantom(effects: &[Effect]) -> bool {
    effects
        .iter()
        .any(|effect| effect.kind == EffectKind::Phantom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_counts_down_without_expiring() {
        let settings = WorldSettings::default();
        let mut effect = Effect::new(EffectKind::Phantom, &settings);
        let before = effect.time_left;
        assert!(effect.update(1.5));
        assert!((effect.time_left - (before - 1.5)).abs() < 1e-6);
    }

    #[test]
    fn test_update_expires_when_dt_reaches_remaining() {
        let settings = WorldSettings::default();
        let mut effect = Effect::new(EffectKind::SpeedBoost, &settings);
        let remaining = effect.time_left;
        assert!(!effect.update(remaining));
    }

    #[test]
    fn test_respawn_bundle_follows_settings() {
        let mut settings = WorldSettings::default();
        settings.respawn_effects = vec![EffectKind::Phantom, EffectKind::SpeedBoost];
        let bundle = respawn_bundle(&settings);
        let kinds: Vec<EffectKind> = bundle.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EffectKind::Phantom, EffectKind::SpeedBoost]);
        assert!(bundle.iter().all(|e| e.time_left > 0.0));
    }

    #[test]
    fn test_item_radius_varies_by_kind() {
        let settings = WorldSettings::default();
        assert!(
            EffectKind::Phantom.item_radius(&settings) > EffectKind::Food.item_radius(&settings)
        );
        assert!(
            EffectKind::SpeedBoost.item_radius(&settings) < EffectKind::Food.item_radius(&settings)
        );
    }

    #[test]
    fn test_speed_factor_stacks_multiplicatively() {
        let settings = WorldSettings::default();
        let effects = vec![
            Effect::new(EffectKind::SpeedBoost, &settings),
            Effect::new(EffectKind::SpeedBoost, &settings),
            Effect::new(EffectKind::Phantom, &settings),
        ];
        let expected = settings.speed_boost_factor * settings.speed_boost_factor;
        assert!((speed_factor(&effects, &settings) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_is_phantom_looks_through_whole_list() {
        let settings = WorldSettings::default();
        let effects = vec![
            Effect::new(EffectKind::SpeedBrake, &settings),
            Effect::new(EffectKind::Phantom, &settings),
        ];
        assert!(is_phantom(&effects));
        assert!(!is_phantom(&effects[..1]));
    }
}
