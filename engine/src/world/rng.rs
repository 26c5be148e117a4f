use glam::Vec2;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded once per universe; all item, spawn and color draws flow through it,
/// so a run is reproducible from its seed.
pub struct WorldRng {
    rng: StdRng,
    seed: u64,
}

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn sample<T, D: Distribution<T>>(&mut self, distribution: &D) -> T {
        distribution.sample(&mut self.rng)
    }

    pub fn random_unit_dir(&mut self) -> Vec2 {
        let angle = self.random_range(0.0f32..std::f32::consts::TAU);
        Vec2::new(angle.cos(), angle.sin())
    }
}
