use glam::Vec2;

/// Circle overlap test shared by every collision check in the engine.
/// Strict: two circles whose centers sit exactly at the sum of their radii
/// do not collide.
pub fn collides(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    center_a.distance_squared(center_b) < reach * reach
}
