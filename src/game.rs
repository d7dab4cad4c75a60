//! Interactive game session

use std::time::Duration;

use tokio::io;
use tokio::time;

use crate::display;
use crate::error::TryExt;
use crate::field;
use crate::scores;
use crate::util::{Direction, Position};



/// Complete state of a running game
///
/// A value of this type is created once per loaded level. It is mutated only
/// by the session loop: the move counter when a move is charged, everything
/// else through the movement resolution.
///
pub struct State {
    pub board: field::Board,
    pub moves: i32,
    pub eggs: Vec<Position>,
    pub score: i32,
    pub finished: bool,
}

impl State {
    /// Set up the state for a freshly loaded board
    ///
    pub fn new(board: field::Board, moves: i32) -> Self {
        let eggs = board.eggs().collect();
        Self {board, moves, eggs, score: 0, finished: false}
    }
}


/// Player command issued on the prompt
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}


/// Interpret a line of player input
///
/// Input is trimmed and case-folded. The literal `quit` ends the session.
/// Otherwise, the first direction key found anywhere in the input determines
/// the move and everything around it is ignored. Input without any direction
/// key is rejected with `None`.
///
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim().to_lowercase();
    if input == "quit" {
        return Some(Command::Quit)
    }
    input.chars().find_map(Direction::from_key).map(Command::Move)
}


/// Run a complete interactive session
///
/// The session reads commands from `reader` and renders to `screen` until
/// the game is finished or the player quits. If `scoring` is present and the
/// game ran to its proper end, the final score is offered to the table,
/// which is persisted through the store; afterwards the player may view or
/// clear the persisted scores. The final state is returned.
///
pub async fn run(
    reader: impl io::AsyncRead + Unpin,
    screen: &mut display::Screen<impl io::AsyncWrite + Send + Unpin>,
    mut state: State,
    mut scoring: Option<(scores::Table, Box<dyn scores::Store>)>,
    tick: Duration,
) -> io::Result<State> {
    use io::AsyncBufReadExt;

    let mut lines = io::BufReader::new(reader).lines();
    let mut history = Vec::new();
    let mut quit = false;

    while !state.finished && !quit {
        screen.frame(&state.board).await?;
        screen.stats(state.moves, &history, state.score).await?;
        time::sleep(tick).await;
        screen.prompt("Enter a move: ").await?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        match parse_command(&line) {
            Some(Command::Quit) => quit = true,
            Some(Command::Move(direction)) => {
                history.push(direction);
                state.moves -= 1;

                let mut frames = Vec::new();
                let outcome = field::resolve(
                    &mut state.board,
                    direction,
                    state.moves,
                    std::mem::take(&mut state.eggs),
                    state.score,
                    |board| frames.push(board.clone()),
                );
                for frame in frames {
                    screen.frame(&frame).await?;
                    time::sleep(tick).await;
                }

                state.eggs = outcome.eggs;
                state.score = outcome.score;
                state.finished = outcome.finished;
            },
            None => (),
        }
    }

    screen.frame(&state.board).await?;
    screen.stats(state.moves, &history, state.score).await?;

    if let Some((table, store)) = scoring.as_mut() {
        if state.finished && table.qualifies(state.score) {
            screen.prompt("Please input your name: ").await?;
            if let Some(name) = lines.next_line().await? {
                table.insert(name, state.score);
                store.save(table).or_warn("Could not save scores");
            }
        }

        epilogue(&mut lines, screen, &state, &history, table, store.as_mut()).await?;
    }

    Ok(state)
}


/// Offer the persisted scores after the session ended
///
/// The player may view the table, clear the persisted scores or leave.
/// Anything else redraws the final game state and asks again.
///
async fn epilogue<R: io::AsyncRead + Unpin>(
    lines: &mut io::Lines<io::BufReader<R>>,
    screen: &mut display::Screen<impl io::AsyncWrite + Send + Unpin>,
    state: &State,
    history: &[Direction],
    table: &scores::Table,
    store: &mut dyn scores::Store,
) -> io::Result<()> {
    loop {
        screen.frame(&state.board).await?;
        screen.stats(state.moves, history, state.score).await?;
        screen.prompt("Show leaderboard? [Y/n/clear]: ").await?;

        let answer = match lines.next_line().await? {
            Some(line) => line.trim().to_lowercase(),
            None => break,
        };
        match answer.as_str() {
            "y" => {
                screen.table(table).await?;
                break
            },
            "n" => break,
            "clear" => {
                store.clear().or_err("Could not clear scores");
                break
            },
            _ => (),
        }
    }
    Ok(())
}
