use glam::Vec2;

/// High-level inputs produced by the input-translation collaborator. The
/// engine never sees raw device events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlayerAction {
    /// Steer the player's snake toward a world-space point, typically the
    /// pointer position sampled each frame.
    Redirect(Vec2),
}
