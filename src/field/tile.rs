//! Types representing the contents of individual board tiles

use std::fmt;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};


/// Representation of a single tile's contents
///
/// The first six variants are the documented game objects. Level files may
/// contain characters outside the documented alphabet; those are carried
/// verbatim as `Other`. An `Other` tile behaves as an obstacle and renders as
/// its character.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Egg,
    Nest,
    Pan,
    ClosedNest,
    Other(char),
}

impl Tile {
    /// Decode a tile from its level file symbol
    ///
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '#' => Self::Wall,
            '.' => Self::Floor,
            '0' => Self::Egg,
            'O' => Self::Nest,
            'P' => Self::Pan,
            '@' => Self::ClosedNest,
            c   => Self::Other(c),
        }
    }

    /// Retrieve the level file symbol for the tile
    ///
    pub fn symbol(self) -> char {
        match self {
            Self::Wall       => '#',
            Self::Floor      => '.',
            Self::Egg        => '0',
            Self::Nest       => 'O',
            Self::Pan        => 'P',
            Self::ClosedNest => '@',
            Self::Other(c)   => c,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::Floor
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.symbol(), f)
    }
}

#[cfg(test)]
impl Arbitrary for Tile {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Self::Wall, Self::Floor, Self::Egg, Self::Nest, Self::Pan, Self::ClosedNest])
            .unwrap()
    }
}
