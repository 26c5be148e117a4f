use std::collections::VecDeque;

use glam::Vec2;

use super::dead_link::DeadLink;
use super::settings::{Rgba, WorldSettings};

/// One player's body: an ordered chain of circular links, head first.
/// Invariant: at least one link exists at all times.
#[derive(Clone, Debug)]
pub struct Snake {
    pub links: VecDeque<Vec2>,
    pub link_radius: f32,
    pub heading: Vec2,
    pub speed: f32,
    pub color: Rgba,
    /// Pending link additions; one link materializes per frame until zero.
    pub growth: u32,
    pub reversed: bool,
}

impl Snake {
    /// The body is laid out behind the spawn point at the steady-state
    /// spacing one frame of movement produces, so a fresh snake starts in
    /// the same shape a moving one settles into.
    pub fn spawn(at: Vec2, heading: Vec2, color: Rgba, settings: &WorldSettings) -> Self {
        let heading = if heading.length_squared() > f32::EPSILON {
            heading.normalize()
        } else {
            Vec2::X
        };
        let spacing = settings.snake_speed / settings.frame_rate as f32;

        Self {
            links: (0..settings.snake_initial_length)
                .map(|i| at - heading * spacing * i as f32)
                .collect(),
            link_radius: settings.link_radius,
            heading,
            speed: settings.snake_speed,
            color,
            growth: 0,
            reversed: false,
        }
    }

    pub fn head(&self) -> Vec2 {
        *self
            .links
            .front()
            .expect("snake body should never be empty")
    }

    /// Follow-the-leader body update: the head advances, every trailing link
    /// takes the position its predecessor held before the move. While growth
    /// is pending the old tail is kept, adding one link per frame.
    pub fn advance(&mut self, dt: f32, speed_factor: f32) {
        let new_head = self.head() + self.heading * self.speed * speed_factor * dt;
        self.links.push_front(new_head);

        if self.growth > 0 {
            self.growth -= 1;
        } else {
            self.links
                .pop_back()
                .expect("snake body should never be empty");
        }
    }

    /// Growth is deferred; the body lengthens over the following frames.
    pub fn feed(&mut self, settings: &WorldSettings) {
        self.growth += settings.food_growth;
    }

    /// Flips the heading and toggles control inversion. The body keeps its
    /// order; only future movement changes.
    pub fn reverse(&mut self) {
        self.heading = -self.heading;
        self.reversed = !self.reversed;
    }

    /// Steers toward `target`, mirrored while controls are reversed. A target
    /// on top of the head leaves the heading alone.
    pub fn redirect(&mut self, target: Vec2) {
        let towards = target - self.head();
        if towards.length_squared() <= f32::EPSILON {
            return;
        }
        let dir = towards.normalize();
        self.heading = if self.reversed { -dir } else { dir };
    }

    /// Consumes the snake, leaving one fading dead link per body link.
    pub fn into_dead_links(self, settings: &WorldSettings) -> Vec<DeadLink> {
        let radius = self.link_radius;
        let color = self.color;
        self.links
            .into_iter()
            .map(|at| DeadLink::new(at, radius, color, settings.dead_link_fade))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_snake(at: Vec2) -> Snake {
        Snake::spawn(at, Vec2::X, Rgba::new(255, 0, 0, 255), &WorldSettings::default())
    }

    #[test]
    fn test_spawn_trails_body_behind_spawn_point() {
        let settings = WorldSettings::default();
        let spacing = settings.snake_speed / settings.frame_rate as f32;
        let snake = test_snake(Vec2::new(100.0, 50.0));

        assert_eq!(snake.links.len(), settings.snake_initial_length);
        assert_eq!(snake.head(), Vec2::new(100.0, 50.0));
        for (i, &link) in snake.links.iter().enumerate() {
            let expected = Vec2::new(100.0 - spacing * i as f32, 50.0);
            assert!((link - expected).length() < 1e-4);
        }
        assert_eq!(snake.growth, 0);
        assert!(!snake.reversed);
    }

    #[test]
    fn test_spawn_normalizes_heading() {
        let snake = Snake::spawn(
            Vec2::ZERO,
            Vec2::new(3.0, 4.0),
            Rgba::new(0, 0, 0, 255),
            &WorldSettings::default(),
        );
        assert!((snake.heading.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_advance_preserves_length_without_growth() {
        let mut snake = test_snake(Vec2::ZERO);
        let len = snake.links.len();
        for _ in 0..10 {
            snake.advance(1.0 / 60.0, 1.0);
            assert_eq!(snake.links.len(), len);
        }
    }

    #[test]
    fn test_advance_is_follow_the_leader() {
        let mut snake = test_snake(Vec2::ZERO);
        snake.links = VecDeque::from(vec![Vec2::ZERO, Vec2::new(-10.0, 0.0)]);
        snake.speed = 10.0;
        snake.advance(1.0, 1.0);
        assert_eq!(snake.links[0], Vec2::new(10.0, 0.0));
        // The trailing link moved onto the head's old position.
        assert_eq!(snake.links[1], Vec2::ZERO);
    }

    #[test]
    fn test_feed_grows_one_link_per_frame_until_exhausted() {
        let settings = WorldSettings::default();
        let mut snake = test_snake(Vec2::ZERO);
        let base_len = snake.links.len();

        snake.feed(&settings);
        assert_eq!(snake.links.len(), base_len);
        assert_eq!(snake.growth, settings.food_growth);

        for frame in 1..=settings.food_growth as usize {
            snake.advance(1.0 / 60.0, 1.0);
            assert_eq!(snake.links.len(), base_len + frame);
        }
        for _ in 0..5 {
            snake.advance(1.0 / 60.0, 1.0);
            assert_eq!(snake.links.len(), base_len + settings.food_growth as usize);
        }
    }

    #[test]
    fn test_reverse_flips_heading_and_toggles_flag() {
        let mut snake = test_snake(Vec2::ZERO);
        let heading = snake.heading;
        let body: Vec<Vec2> = snake.links.iter().copied().collect();

        snake.reverse();
        assert_eq!(snake.heading, -heading);
        assert!(snake.reversed);
        assert_eq!(snake.links.iter().copied().collect::<Vec<_>>(), body);

        snake.reverse();
        assert_eq!(snake.heading, heading);
        assert!(!snake.reversed);
    }

    #[test]
    fn test_redirect_points_at_target() {
        let mut snake = test_snake(Vec2::ZERO);
        snake.redirect(Vec2::new(0.0, 50.0));
        assert!((snake.heading - Vec2::Y).length() < 1e-6);
    }

    #[test]
    fn test_redirect_is_mirrored_while_reversed() {
        let mut snake = test_snake(Vec2::ZERO);
        snake.reverse();
        snake.redirect(Vec2::new(0.0, 50.0));
        assert!((snake.heading + Vec2::Y).length() < 1e-6);
    }

    #[test]
    fn test_redirect_onto_head_is_a_no_op() {
        let mut snake = test_snake(Vec2::new(5.0, 5.0));
        let heading = snake.heading;
        snake.redirect(Vec2::new(5.0, 5.0));
        assert_eq!(snake.heading, heading);
    }

    #[test]
    fn test_destroy_yields_one_dead_link_per_link() {
        let settings = WorldSettings::default();
        let snake = test_snake(Vec2::new(7.0, 7.0));
        let expected = snake.links.len();
        let color = snake.color;

        let dead = snake.into_dead_links(&settings);
        assert_eq!(dead.len(), expected);
        for link in &dead {
            assert_eq!(link.color, color);
            assert_eq!(link.radius, settings.link_radius);
            assert_eq!(link.fade_left, settings.dead_link_fade);
        }
    }
}
