use glam::Vec2;

use super::settings::Rgba;

/// A fading remnant of one destroyed snake link. Purely cosmetic; the
/// renderer derives opacity from `fade_fraction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeadLink {
    pub at: Vec2,
    pub radius: f32,
    pub color: Rgba,
    pub fade_left: f32,
    pub fade_total: f32,
}

impl DeadLink {
    pub fn new(at: Vec2, radius: f32, color: Rgba, fade: f32) -> Self {
        Self {
            at,
            radius,
            color,
            fade_left: fade,
            fade_total: fade,
        }
    }

    /// Counts the fade down; returns false once the link should disappear.
    pub fn update(&mut self, dt: f32) -> bool {
        self.fade_left -= dt;
        self.fade_left > 0.0
    }

    pub fn fade_fraction(&self) -> f32 {
        (self.fade_left / self.fade_total).clamp(0.0, 1.0)
    }
}
