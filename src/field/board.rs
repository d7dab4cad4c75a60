//! Definition of the board and associated types

use std::error::Error;
use std::fmt;
use std::ops;

use crate::util::Position;

use super::tile::Tile;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};


/// Rectangular board of tiles
///
/// The board is addressed via [Position]s, with `(0, 0)` referring to the top
/// left corner. Reads go through the bounds-checked [Board::peek]; indexed
/// writes expect an in-bounds position and are only ever performed on
/// positions a `peek` validated beforehand.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Create a board from rows of tiles
    ///
    /// The board must have at least one row, and all rows must have the same
    /// non-zero length. Otherwise, a [ShapeError] is returned.
    ///
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, ShapeError> {
        let cols = rows.first().map(Vec::len).unwrap_or_default();
        if cols == 0 {
            return Err(ShapeError::Empty)
        }

        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find_map(|(n, r)| if r.len() != cols { Some((n, r.len())) } else { None })
        {
            return Err(ShapeError::RaggedRow {row, expected: cols, found})
        }

        let count = rows.len();
        Ok(Self {tiles: rows.into_iter().flatten().collect(), rows: count, cols})
    }

    /// Retrieve the number of rows
    ///
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Retrieve the number of columns
    ///
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Retrieve the tile on the given position, if any
    ///
    /// This function returns the tile's current contents if `pos` lies on the
    /// board and `None` otherwise. It never mutates the board.
    ///
    pub fn peek(&self, pos: Position) -> Option<Tile> {
        self.index_of(pos).map(|i| self.tiles[i])
    }

    /// Iterate over all positions on the board, in row-major order
    ///
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Retrieve the positions of all eggs, in row-major order
    ///
    pub fn eggs(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |pos| self[*pos] == Tile::Egg)
    }

    /// Translate a position into an index into the tile store
    ///
    fn index_of(&self, (row, col): Position) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

impl ops::Index<Position> for Board {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        self.index_of(pos).map(|i| &self.tiles[i]).expect("position outside the board")
    }
}

impl ops::IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let index = self.index_of(pos).expect("position outside the board");
        &mut self.tiles[index]
    }
}

/// Render the board as rows of symbols, top to bottom, joined by newlines
///
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tiles.chunks(self.cols).enumerate().try_for_each(|(n, row)| {
            if n > 0 {
                f.write_str("\n")?
            }
            row.iter().try_for_each(|tile| fmt::Display::fmt(tile, f))
        })
    }
}

#[cfg(test)]
impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        let rows = u8::arbitrary(g) as usize % 8 + 1;
        let cols = u8::arbitrary(g) as usize % 8 + 1;
        let tiles = (0..rows)
            .map(|_| (0..cols).map(|_| Tile::arbitrary(g)).collect())
            .collect();
        Self::from_rows(tiles).expect("generated a malformed board")
    }
}


/// Error indicating a malformed board geometry
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// The board has no rows, or its first row has no columns
    Empty,
    /// A row's length differs from the first row's
    RaggedRow {row: usize, expected: usize, found: usize},
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board has no tiles"),
            Self::RaggedRow {row, expected, found} => write!(
                f,
                "row {} has {} tiles, expected {}",
                row,
                found,
                expected,
            ),
        }
    }
}
