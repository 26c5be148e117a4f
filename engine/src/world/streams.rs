use glam::Vec2;
use rand::distr::weighted::WeightedIndex;

use super::effect::EffectKind;
use super::item::Item;
use super::rng::WorldRng;
use super::settings::{Rgba, WorldSettings};

// Infinite sequences (items, spawns, colors) as explicit peek/advance
// generators. Each holds exactly one realized head entry; `advance`
// realizes the next one, so the streams can never be exhausted.

/// Infinite pickup source: uniform positions inside the field margin, kinds
/// drawn from the configured weights.
pub struct ItemStream {
    min: Vec2,
    max: Vec2,
    kinds: Vec<EffectKind>,
    weights: WeightedIndex<u32>,
    current: Item,
}

impl ItemStream {
    pub fn new(settings: &WorldSettings, rng: &mut WorldRng) -> Result<Self, String> {
        let kinds: Vec<EffectKind> = EffectKind::ALL.to_vec();
        let weights =
            WeightedIndex::new(kinds.iter().map(|&kind| settings.item_weights.weight_for(kind)))
                .map_err(|e| format!("Invalid item weights: {}", e))?;

        let mut stream = Self {
            min: Vec2::splat(settings.field_margin),
            max: Vec2::new(
                settings.field_width - settings.field_margin,
                settings.field_height - settings.field_margin,
            ),
            kinds,
            weights,
            current: Item::new(Vec2::splat(settings.field_margin), EffectKind::Food),
        };
        stream.advance(rng);
        Ok(stream)
    }

    /// The live item, the only one eligible for collision.
    pub fn peek(&self) -> &Item {
        &self.current
    }

    pub fn peek_mut(&mut self) -> &mut Item {
        &mut self.current
    }

    /// Discards the head and realizes the next pickup.
    pub fn advance(&mut self, rng: &mut WorldRng) {
        let at = Vec2::new(
            rng.random_range(self.min.x..self.max.x),
            rng.random_range(self.min.y..self.max.y),
        );
        let kind = self.kinds[rng.sample(&self.weights)];
        self.current = Item::new(at, kind);
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, item: Item) {
        self.current = item;
    }
}

/// Infinite source of (spawn point, spawn heading) pairs.
pub struct SpawnStream {
    min: Vec2,
    max: Vec2,
    current: (Vec2, Vec2),
}

impl SpawnStream {
    pub fn new(settings: &WorldSettings, rng: &mut WorldRng) -> Self {
        let mut stream = Self {
            min: Vec2::splat(settings.field_margin),
            max: Vec2::new(
                settings.field_width - settings.field_margin,
                settings.field_height - settings.field_margin,
            ),
            current: (Vec2::splat(settings.field_margin), Vec2::X),
        };
        stream.advance(rng);
        stream
    }

    pub fn peek(&self) -> (Vec2, Vec2) {
        self.current
    }

    pub fn advance(&mut self, rng: &mut WorldRng) {
        let at = Vec2::new(
            rng.random_range(self.min.x..self.max.x),
            rng.random_range(self.min.y..self.max.y),
        );
        self.current = (at, rng.random_unit_dir());
    }
}

/// Cycles through the configured palette forever. Settings validation
/// guarantees the palette is non-empty.
pub struct ColorStream {
    palette: Vec<Rgba>,
    next: usize,
}

impl ColorStream {
    pub fn new(palette: Vec<Rgba>) -> Self {
        Self { palette, next: 0 }
    }

    pub fn peek(&self) -> Rgba {
        self.palette[self.next]
    }

    pub fn advance(&mut self) {
        self.next = (self.next + 1) % self.palette.len();
    }
}

#[cfg(test)]
mod tests {
    use super::super::settings::ItemWeights;
    use super::*;

    #[test]
    fn test_item_stream_stays_inside_margin() {
        let settings = WorldSettings::default();
        let mut rng = WorldRng::new(11);
        let mut stream = ItemStream::new(&settings, &mut rng).unwrap();

        for _ in 0..200 {
            let item = *stream.peek();
            assert!(item.at.x >= settings.field_margin);
            assert!(item.at.x <= settings.field_width - settings.field_margin);
            assert!(item.at.y >= settings.field_margin);
            assert!(item.at.y <= settings.field_height - settings.field_margin);
            stream.advance(&mut rng);
        }
    }

    #[test]
    fn test_item_stream_honors_weights() {
        let mut settings = WorldSettings::default();
        settings.item_weights = ItemWeights {
            food: 1,
            reverse_controls: 0,
            speed_boost: 0,
            speed_brake: 0,
            phantom: 0,
        };
        let mut rng = WorldRng::new(5);
        let mut stream = ItemStream::new(&settings, &mut rng).unwrap();

        for _ in 0..100 {
            assert_eq!(stream.peek().kind, EffectKind::Food);
            stream.advance(&mut rng);
        }
    }

    #[test]
    fn test_spawn_stream_yields_in_field_unit_headings() {
        let settings = WorldSettings::default();
        let mut rng = WorldRng::new(23);
        let mut stream = SpawnStream::new(&settings, &mut rng);

        for _ in 0..100 {
            let (at, heading) = stream.peek();
            assert!(at.x >= settings.field_margin);
            assert!(at.x <= settings.field_width - settings.field_margin);
            assert!(at.y >= settings.field_margin);
            assert!(at.y <= settings.field_height - settings.field_margin);
            assert!((heading.length() - 1.0).abs() < 1e-5);
            stream.advance(&mut rng);
        }
    }

    #[test]
    fn test_spawn_stream_advances_to_new_entries() {
        let settings = WorldSettings::default();
        let mut rng = WorldRng::new(23);
        let mut stream = SpawnStream::new(&settings, &mut rng);

        let first = stream.peek();
        stream.advance(&mut rng);
        assert_ne!(stream.peek(), first);
    }

    #[test]
    fn test_color_stream_cycles() {
        let red = Rgba::new(255, 0, 0, 255);
        let blue = Rgba::new(0, 0, 255, 255);
        let mut stream = ColorStream::new(vec![red, blue]);

        assert_eq!(stream.peek(), red);
        stream.advance();
        assert_eq!(stream.peek(), blue);
        stream.advance();
        assert_eq!(stream.peek(), red);
    }
}
