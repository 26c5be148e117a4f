use glam::Vec2;

use super::effect::EffectKind;

/// A spawned pickup. Exactly one item is live at a time; the rest of the
/// stream stays unrealized until this one is consumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item {
    pub at: Vec2,
    pub kind: EffectKind,
}

impl Item {
    pub fn new(at: Vec2, kind: EffectKind) -> Self {
        Self { at, kind }
    }

    /// Hook for timed item behavior such as despawning. Items currently
    /// persist until eaten, so this always keeps the item.
    pub fn update(&mut self, _dt: f32) -> bool {
        true
    }
}
