//! Core utilities

use std::fmt;
use std::ops;

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};



/// Position of a single tile on a board
///
/// The first component denotes the row, with `0` referring to the top row.
/// The second component denotes the column, with `0` referring to the
/// left-most column.
///
pub type Position = (usize, usize);


/// Representation of a move direction
///
/// A direction carries everything the movement logic needs to know about a
/// player move: the unit step it applies to a [Position], the [Axis] it moves
/// along, the [Polarity] of that movement and the arrow glyph shown in the
/// move history.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Front,
    Back,
}

impl Direction {
    /// Decode a direction from its key character
    ///
    /// Only the four lower-case keys `l`, `r`, `f` and `b` decode to a
    /// direction. Any other character yields `None`.
    ///
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'l' => Some(Self::Left),
            'r' => Some(Self::Right),
            'f' => Some(Self::Front),
            'b' => Some(Self::Back),
            _ => None,
        }
    }

    /// Retrieve the axis the direction moves along
    ///
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Front | Self::Back => Axis::Vertical,
        }
    }

    /// Retrieve the polarity of the direction
    ///
    /// The polarity indicates whether a step along the direction increases
    /// (`Positive`) or decreases (`Negative`) the coordinate it moves along.
    ///
    pub fn polarity(self) -> Polarity {
        match self {
            Self::Left | Self::Front => Polarity::Negative,
            Self::Right | Self::Back => Polarity::Positive,
        }
    }

    /// Retrieve the arrow glyph for the direction
    ///
    pub fn arrow(self) -> char {
        match self {
            Self::Left  => '←',
            Self::Right => '→',
            Self::Front => '↑',
            Self::Back  => '↓',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.arrow(), f)
    }
}

#[cfg(test)]
impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Self::Left, Self::Right, Self::Front, Self::Back]).unwrap()
    }
}


/// Axis a direction moves along
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}


/// Polarity of a direction
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polarity {
    Negative,
    Positive,
}


/// Apply a direction to a position
///
/// The result is the position one step along `direction`, or `None` if that
/// step would leave the non-negative coordinate range. Steps over the bottom
/// or right edge of a board are only caught by a bounds-checked read on the
/// board itself.
///
impl ops::Add<Direction> for Position {
    type Output = Option<Position>;

    fn add(self, direction: Direction) -> Self::Output {
        let (row, col) = self;
        match direction {
            Direction::Left  => col.checked_sub(1).map(|col| (row, col)),
            Direction::Right => col.checked_add(1).map(|col| (row, col)),
            Direction::Front => row.checked_sub(1).map(|row| (row, col)),
            Direction::Back  => row.checked_add(1).map(|row| (row, col)),
        }
    }
}
