//! Board representation and egg movement

mod board;
mod movement;
mod tile;

#[cfg(test)]
mod tests;

pub use board::{Board, ShapeError};
pub use movement::{advance_wave, resolve, Resolution, Wave};
pub use tile::Tile;
