use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

/// Produces the mine mask a [`Board`] is built from.
pub trait MineLayoutGenerator {
    fn generate(self, config: &BoardConfig) -> Array2<bool>;
}
