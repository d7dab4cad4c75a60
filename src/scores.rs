//! Score table handling and persistence

use std::fmt;
use std::io;
use std::path::PathBuf;

#[cfg(test)]
mod tests;


/// Maximum number of entries kept in a table
///
pub const LENGTH: usize = 10;


/// Table of the best scores achieved on a level
///
/// The table holds at most [LENGTH] entries, sorted by score with the
/// player's name breaking ties, both descending.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    entries: Vec<Entry>,
}

impl Table {
    /// Create a table from the given entries
    ///
    /// The entries are brought into rank order; excess entries are dropped.
    ///
    pub fn new(entries: Vec<Entry>) -> Self {
        let mut table = Self {entries};
        table.sort();
        table.entries.truncate(LENGTH);
        table
    }

    /// Retrieve the entries, best score first
    ///
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_ref()
    }

    /// Check whether the table holds no entries
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a score would enter the table
    ///
    /// A score enters the table if fewer than [LENGTH] entries are recorded
    /// or if it beats the lowest recorded score.
    ///
    pub fn qualifies(&self, score: i32) -> bool {
        self.entries.len() < LENGTH
            || self.entries.last().map(|e| e.score < score).unwrap_or(true)
    }

    /// Enter a new score into the table
    ///
    /// The entry is placed according to its rank. If the table would grow
    /// beyond [LENGTH] entries, the lowest ranking one is dropped.
    ///
    pub fn insert(&mut self, name: String, score: i32) {
        self.entries.push(Entry {name, score});
        self.sort();
        self.entries.truncate(LENGTH);
    }

    /// Render the table for display
    ///
    /// The result is a `PLAYER | SCORES` table with a divider below the
    /// header row and columns padded to their widest item.
    ///
    pub fn tabulate(&self) -> String {
        use fmt::Write;

        const PADDING: usize = 1;

        let name_width = self
            .entries
            .iter()
            .map(|e| e.name.chars().count())
            .chain(std::iter::once("PLAYER".len()))
            .max()
            .unwrap_or_default() + PADDING;
        let score_width = self
            .entries
            .iter()
            .map(|e| e.score.to_string().len())
            .chain(std::iter::once("SCORES".len()))
            .max()
            .unwrap_or_default() + PADDING;

        let rows = std::iter::once(("PLAYER".to_string(), "SCORES".to_string()))
            .chain(self.entries.iter().map(|e| (e.name.clone(), e.score.to_string())));

        let mut out = String::new();
        for (n, (name, score)) in rows.enumerate() {
            let _ = writeln!(out, "{:<width$}| {}", name, score, width = name_width);
            if n == 0 {
                let _ = writeln!(out, "{}+{}", "-".repeat(name_width), "-".repeat(score_width));
            }
        }
        out
    }

    /// Sort the entries into rank order
    ///
    fn sort(&mut self) {
        self.entries.sort_by(|a, b| (b.score, &b.name).cmp(&(a.score, &a.name)))
    }
}

/// Format the table in its level file representation, one entry per line
///
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entries.iter().enumerate().try_for_each(|(n, entry)| {
            if n > 0 {
                f.write_str("\n")?
            }
            fmt::Display::fmt(entry, f)
        })
    }
}


/// Single score table entry
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub score: i32,
}

impl Entry {
    /// Parse an entry from its `name - score` line representation
    ///
    /// The separator is searched from the right, so names may themselves
    /// contain ` - `.
    ///
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.rsplitn(2, " - ");
        let score = parts.next()?.parse().ok()?;
        let name = parts.next()?.to_string();
        Some(Self {name, score})
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.score)
    }
}


/// Persistence for a score table
///
/// The session receives the store as an injected collaborator; where and how
/// scores are kept is of no concern to the game itself.
///
pub trait Store {
    /// Persist the given table
    ///
    fn save(&mut self, table: &Table) -> io::Result<()>;

    /// Remove all persisted scores
    ///
    fn clear(&mut self) -> io::Result<()>;
}


/// Store keeping scores in the level file they belong to
///
/// Scores are persisted as the lines following the level's grid rows. The
/// header and grid rows themselves are never touched.
///
pub struct LevelFile {
    path: PathBuf,
}

impl LevelFile {
    /// Create a store for the level file at the given path
    ///
    pub fn new(path: PathBuf) -> Self {
        Self {path}
    }

    /// Replace everything following the grid rows with the given table
    ///
    fn rewrite(&self, table: Option<&Table>) -> io::Result<()> {
        let contents = std::fs::read_to_string(&self.path)?;
        let rows: usize = contents
            .lines()
            .next()
            .and_then(|l| l.trim().parse().ok())
            .ok_or(io::ErrorKind::InvalidData)?;

        let rendered;
        let mut out: Vec<&str> = contents.lines().take(rows + 2).collect();
        if let Some(table) = table.filter(|t| !t.is_empty()) {
            rendered = table.to_string();
            out.extend(rendered.lines());
        }
        std::fs::write(&self.path, out.join("\n") + "\n")
    }
}

impl Store for LevelFile {
    fn save(&mut self, table: &Table) -> io::Result<()> {
        self.rewrite(Some(table))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.rewrite(None)
    }
}
