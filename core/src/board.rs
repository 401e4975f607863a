use std::collections::{HashSet, VecDeque};
use std::io::Read;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A mutable Minesweeper board.
///
/// The grid shape is fixed at construction; afterwards only square states
/// and mine flags mutate in place. Every square carries the count of mines
/// in its 8-neighborhood, recomputed whenever the mine layout changes.
///
/// `Board` is a single-owner value; see [`SharedBoard`] for the handle that
/// serializes concurrent callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    squares: Array2<Square>,
}

impl Board {
    /// Builds a board from a mine mask indexed `[x, y]`; every square
    /// starts untouched.
    ///
    /// # Panics
    ///
    /// Panics if the mask is empty or larger than [`Coord`] can address.
    pub fn from_layout(mines: Array2<bool>) -> Self {
        let dim = mines.dim();
        assert!(
            dim.0 >= 1 && dim.1 >= 1,
            "board needs at least one column and one row"
        );
        assert!(
            dim.0 <= Coord::MAX as usize && dim.1 <= Coord::MAX as usize,
            "board dimensions exceed the coordinate range"
        );

        let squares = mines.map(|&mine| Square {
            mine,
            ..Square::default()
        });
        let mut board = Self { squares };
        board.recount_all();
        board
    }

    /// Random board with an entropy seed; see [`RandomMineLayoutGenerator`]
    /// for deterministic generation.
    pub fn new_random(config: &BoardConfig) -> Self {
        use rand::RngExt;

        let seed = rand::rng().random();
        Self::from_layout(RandomMineLayoutGenerator::new(seed).generate(config))
    }

    /// Parses the board-definition text format.
    pub fn from_definition(text: &str) -> Result<Self> {
        definition::parse(text).map(Self::from_layout)
    }

    /// Like [`Board::from_definition`], reading the text from any source.
    pub fn read_definition(reader: impl Read) -> Result<Self> {
        definition::read_from(reader).map(Self::from_layout)
    }

    /// Board dimensions as `(cols, rows)`.
    pub fn size(&self) -> Coord2 {
        let dim = self.squares.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    /// The square at `coords`. Panics when out of bounds; the mutating
    /// operations below treat out-of-bounds coordinates as no-ops instead.
    pub fn square_at(&self, coords: Coord2) -> Square {
        self.squares[coords.to_nd_index()]
    }

    pub fn has_mine(&self, coords: Coord2) -> bool {
        self.square_at(coords).mine
    }

    pub fn mine_count(&self) -> CellCount {
        self.squares
            .iter()
            .filter(|square| square.mine)
            .count()
            .try_into()
            .unwrap()
    }

    fn in_bounds(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    /// Digs at `coords`, returning `true` when the square held a mine.
    ///
    /// Out-of-bounds coordinates and squares that are no longer untouched
    /// leave the board unchanged and return `false`. Digging a mine clears
    /// the mine flag (updating the surrounding counts) and does not cascade;
    /// digging a safe square with no neighboring mines flood-reveals the
    /// connected zero-count region and its border.
    pub fn dig(&mut self, coords: Coord2) -> bool {
        if !self.in_bounds(coords) {
            return false;
        }

        let square = self.squares[coords.to_nd_index()];
        if !square.state.is_untouched() {
            return false;
        }
        self.squares[coords.to_nd_index()].state = SquareState::Dug;

        if square.mine {
            self.squares[coords.to_nd_index()].mine = false;
            self.recount_around(coords);
            log::debug!("dug a mine at {coords:?}");
            return true;
        }

        log::debug!(
            "dug {coords:?}, neighbor mines: {}",
            square.neighbor_mines
        );
        if square.neighbor_mines == 0 {
            self.flood_reveal(coords);
        }
        false
    }

    /// Flags an untouched square; anything else is a no-op.
    pub fn flag(&mut self, coords: Coord2) {
        if self.in_bounds(coords) && self.squares[coords.to_nd_index()].state.is_untouched() {
            self.squares[coords.to_nd_index()].state = SquareState::Flagged;
            log::debug!("flagged {coords:?}");
        }
    }

    /// Returns a flagged square to untouched; anything else is a no-op.
    pub fn deflag(&mut self, coords: Coord2) {
        if self.in_bounds(coords) && self.squares[coords.to_nd_index()].state.is_flagged() {
            self.squares[coords.to_nd_index()].state = SquareState::Untouched;
            log::debug!("deflagged {coords:?}");
        }
    }

    /// Renders the grid as text: one line per row, cells separated by single
    /// spaces, no trailing newline. `-` untouched, `F` flagged, dug squares
    /// show their neighbor-mine count or a blank for zero.
    pub fn render(&self) -> String {
        let (cols, rows) = self.size();
        let mut out = String::new();
        for y in 0..rows {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..cols {
                if x > 0 {
                    out.push(' ');
                }
                out.push(self.squares[(x, y).to_nd_index()].glyph());
            }
        }
        out
    }

    /// Work-queue reveal of the zero-count region around `start`, which has
    /// just been dug. Each square transitions untouched to dug at most once,
    /// so the queue drains.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut visited = HashSet::from([start]);
        let mut to_visit: VecDeque<_> = self.squares.iter_neighbors(start).collect();
        log::trace!("flood fill from {start:?}, seed queue: {to_visit:?}");

        while let Some(coords) = to_visit.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            let square = self.squares[coords.to_nd_index()];
            if !square.state.is_untouched() {
                continue;
            }
            self.squares[coords.to_nd_index()].state = SquareState::Dug;
            log::trace!(
                "flood revealed {coords:?}, neighbor mines: {}",
                square.neighbor_mines
            );

            if square.neighbor_mines == 0 {
                to_visit.extend(
                    self.squares
                        .iter_neighbors(coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    fn recount_all(&mut self) {
        let (cols, rows) = self.size();
        for x in 0..cols {
            for y in 0..rows {
                self.recount_at((x, y));
            }
        }
    }

    /// Clearing a mine only shifts the counts of the surrounding squares.
    fn recount_around(&mut self, coords: Coord2) {
        for pos in self.squares.iter_neighbors(coords) {
            self.recount_at(pos);
        }
    }

    fn recount_at(&mut self, coords: Coord2) {
        let count = self
            .squares
            .iter_neighbors(coords)
            .filter(|&pos| self.squares[pos.to_nd_index()].mine)
            .count();
        self.squares[coords.to_nd_index()].neighbor_mines = count.try_into().unwrap();
    }
}
