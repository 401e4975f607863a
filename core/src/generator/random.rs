use super::*;

/// Generation strategy that assigns each square a mine independently with
/// the configured probability. Deterministic for a fixed seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMineLayoutGenerator {
    seed: u64,
}

impl RandomMineLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineLayoutGenerator for RandomMineLayoutGenerator {
    fn generate(self, config: &BoardConfig) -> Array2<bool> {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        for mine in mines.iter_mut() {
            *mine = rng.random_bool(config.mine_probability);
        }

        let placed = mines.iter().filter(|&&mine| mine).count();
        log::debug!(
            "generated {}x{} layout with {} mines",
            config.size.0,
            config.size.1,
            placed
        );
        mines
    }
}
