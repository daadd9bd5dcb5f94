use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Chooses where the mines of a game go.
///
/// The engine checks the returned layout, so a generator only has to honor the configured mine count.
pub trait MineGenerator {
    fn generate(self, config: &GameConfig) -> Vec<Coord2>;
}

/// Uniform placement without replacement: every position is shuffled and a prefix is taken.
#[derive(Clone, Debug)]
pub struct ShuffleGenerator<R> {
    rng: R,
}

impl<R: Rng> ShuffleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ShuffleGenerator<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MineGenerator for ShuffleGenerator<R> {
    fn generate(mut self, config: &GameConfig) -> Vec<Coord2> {
        let (width, height) = config.size();
        let mut positions: Vec<Coord2> = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .collect();

        positions.shuffle(&mut self.rng);
        positions.truncate(config.mines.into());
        positions
    }
}

/// Mines exactly where the caller says, used for puzzles and reproducible tests.
#[derive(Copy, Clone, Debug)]
pub struct FixedLayout<'a>(pub &'a [Coord2]);

impl MineGenerator for FixedLayout<'_> {
    fn generate(self, _config: &GameConfig) -> Vec<Coord2> {
        self.0.to_vec()
    }
}
