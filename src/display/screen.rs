//! Screen handle

use tokio::io::AsyncWrite;
use tokio_util::codec;

use crate::field::{Board, Tile};
use crate::scores;
use crate::util::Direction;

use super::commands::{ANSIEncoder, Colour, DrawCommand as DC, Intensity, SGR};


/// Handle for the player facing terminal
///
/// An instance of this type wraps a writer connected to the player's ANSI
/// terminal and renders the various parts of the game's interface.
///
pub struct Screen<W: AsyncWrite + Send + Unpin> {
    write: codec::FramedWrite<W, ANSIEncoder>,
}

impl<W: AsyncWrite + Send + Unpin> Screen<W> {
    /// Create a new screen over the given writer
    ///
    pub fn new(write: W) -> Self {
        Self {write: codec::FramedWrite::new(write, ANSIEncoder::new())}
    }

    /// Draw the board onto a cleared screen
    ///
    /// Each tile is drawn as its level symbol in the colour selected by
    /// [tile_colour].
    ///
    pub async fn frame(&mut self, board: &Board) -> std::io::Result<()> {
        use futures::SinkExt;
        use futures::stream::iter;

        let mut cmds = vec![DC::ClearScreen, (0u16, 0u16).into()];
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let tile = board[(row, col)];
                cmds.push(tile_colour(tile).into());
                cmds.push(String::from(tile.symbol()).into());
            }
            cmds.push("\r\n".into());
        }
        cmds.push(SGR::Reset.into());

        self.write.send_all(&mut iter(cmds.into_iter().map(Ok))).await
    }

    /// Print the stats block below the board
    ///
    pub async fn stats(
        &mut self,
        moves: i32,
        history: &[Direction],
        score: i32,
    ) -> std::io::Result<()> {
        use futures::SinkExt;
        use futures::stream::iter;

        let arrows: String = history.iter().map(|d| d.arrow()).collect();
        let cmds = vec![
            Intensity::Faint.into(),
            format!(
                "Previous Moves: {}\r\nRemaining Moves: {}\r\nPoints: {}\r\n",
                arrows, moves, score,
            ).into(),
            SGR::Intensity(None).into(),
        ];

        self.write.send_all(&mut iter(cmds.into_iter().map(Ok))).await
    }

    /// Print a prompt, without a trailing line break
    ///
    pub async fn prompt(&mut self, text: &str) -> std::io::Result<()> {
        use futures::SinkExt;

        self.write.send(DC::Text(text.to_string().into())).await
    }

    /// Show the score table on a cleared screen
    ///
    pub async fn table(&mut self, table: &scores::Table) -> std::io::Result<()> {
        use futures::SinkExt;
        use futures::stream::iter;

        let cmds = vec![
            DC::ClearScreen,
            (0u16, 0u16).into(),
            Intensity::Bold.into(),
            format!("TOP {} SCORES\r\n\r\n", scores::LENGTH).into(),
            SGR::Intensity(None).into(),
            table.tabulate().replace('\n', "\r\n").into(),
            "\r\n".into(),
        ];

        self.write.send_all(&mut iter(cmds.into_iter().map(Ok))).await
    }
}


/// Select the colour a tile is drawn with
///
fn tile_colour(tile: Tile) -> SGR {
    match tile {
        Tile::Wall       => Colour::White.into(),
        Tile::Floor      => Colour::Green.into(),
        Tile::Egg        => Colour::Yellow.into(),
        Tile::Nest       => Colour::Cyan.into(),
        Tile::Pan        => Colour::Red.into(),
        Tile::ClosedNest => Colour::Magenta.into(),
        Tile::Other(_)   => SGR::FGColour(None),
    }
}
