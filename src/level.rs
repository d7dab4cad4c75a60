//! Level file loading

use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use crate::field::{Board, ShapeError, Tile};
use crate::scores;



/// Contents of a level file
///
#[derive(Debug)]
pub struct Level {
    pub board: Board,
    pub moves: i32,
    pub scores: scores::Table,
}


/// Load a level from the given path
///
pub async fn load(path: &Path) -> Result<Level, LoadError> {
    parse(&tokio::fs::read_to_string(path).await?)
}


/// Parse a level from its textual representation
///
/// A level consists of an integer row count, an integer move budget, the
/// announced number of grid rows and up to [scores::LENGTH] persisted score
/// lines, one item per line. Grid symbols outside the documented alphabet
/// are carried through as [Tile::Other].
///
pub fn parse(input: &str) -> Result<Level, LoadError> {
    let mut lines = input.lines().enumerate();

    let rows: usize = header(lines.next(), 0)?;
    let moves: i32 = header(lines.next(), 1)?;

    let mut grid = Vec::with_capacity(rows);
    for _ in 0..rows {
        let (_, line) = lines
            .next()
            .ok_or(LoadError::MissingRows {expected: rows, found: grid.len()})?;
        grid.push(line.chars().map(Tile::from_symbol).collect());
    }
    let board = Board::from_rows(grid)?;

    let entries = lines
        .filter(|(_, line)| !line.is_empty())
        .map(|(n, line)| scores::Entry::parse(line).ok_or(LoadError::Score {line: n + 1}))
        .collect::<Result<Vec<_>, _>>()?;
    if entries.len() > scores::LENGTH {
        return Err(LoadError::ExcessScores {found: entries.len()})
    }

    Ok(Level {board, moves, scores: scores::Table::new(entries)})
}


/// Parse a single header line
///
/// `expected` is the zero-based line the header was expected on, used for
/// reporting when the input ended early.
///
fn header<T: std::str::FromStr>(
    line: Option<(usize, &str)>,
    expected: usize,
) -> Result<T, LoadError> {
    let (n, text) = line.unwrap_or((expected, ""));
    text.trim()
        .parse()
        .map_err(|_| LoadError::Header {line: n + 1, found: text.to_string()})
}


/// Error indicating a level which could not be loaded
///
#[derive(Debug)]
pub enum LoadError {
    /// The level file could not be read at all
    Io(io::Error),
    /// A header line did not hold the expected integer
    Header {line: usize, found: String},
    /// The file ended before all announced grid rows were read
    MissingRows {expected: usize, found: usize},
    /// The grid rows do not form a rectangle
    Shape(ShapeError),
    /// A persisted score line could not be parsed
    Score {line: usize},
    /// More score lines than a table can hold
    ExcessScores {found: usize},
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(_) => write!(f, "could not read level file"),
            Self::Header {line, found} => {
                write!(f, "expected an integer on line {}, found '{}'", line, found)
            },
            Self::MissingRows {expected, found} => {
                write!(f, "level announces {} rows but holds only {}", expected, found)
            },
            Self::Shape(_) => write!(f, "malformed level geometry"),
            Self::Score {line} => write!(f, "malformed score entry on line {}", line),
            Self::ExcessScores {found} => {
                write!(f, "found {} score entries, at most {} are allowed", found, scores::LENGTH)
            },
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ShapeError> for LoadError {
    fn from(err: ShapeError) -> Self {
        Self::Shape(err)
    }
}
