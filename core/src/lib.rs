//! Mutable Minesweeper board core.
//!
//! A [`Board`] owns a fixed-size grid of [`Square`]s and exposes dig, flag,
//! deflag and text rendering, with automatic flood-fill reveal of safe
//! regions. Boards come from random generation ([`Board::new_random`]) or
//! from the text definition format ([`Board::from_definition`]);
//! [`SharedBoard`] serializes concurrent callers through one lock.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use shared::*;
pub use square::*;
pub use types::*;

mod board;
mod definition;
mod error;
mod generator;
mod shared;
mod square;
mod types;

/// Grid size used when none is configured.
pub const DEFAULT_SIZE: Coord2 = (10, 10);

/// Chance of any one square holding a mine when none is configured.
pub const DEFAULT_MINE_PROBABILITY: f64 = 0.25;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mine_probability: f64,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mine_probability: f64) -> Self {
        Self {
            size,
            mine_probability,
        }
    }

    /// Clamps the size to at least one square per axis and the probability
    /// into `[0, 1]`.
    pub fn new((size_x, size_y): Coord2, mine_probability: f64) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let probability = if mine_probability.is_finite() {
            mine_probability.clamp(0.0, 1.0)
        } else {
            DEFAULT_MINE_PROBABILITY
        };
        if probability != mine_probability {
            log::warn!("mine probability {mine_probability} out of range, using {probability}");
        }
        Self::new_unchecked((size_x, size_y), probability)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, DEFAULT_MINE_PROBABILITY)
    }
}
