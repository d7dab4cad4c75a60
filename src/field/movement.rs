//! Egg movement resolution

use crate::util::{Axis, Direction, Polarity, Position};

use super::board::Board;
use super::tile::Tile;


/// Points lost for each egg landing in a frying pan
///
const PAN_PENALTY: i32 = 5;


/// Base points awarded for each nest closed
///
/// The actual award is this base plus the remaining move budget.
///
const NEST_REWARD: i32 = 10;


/// Resolve a player move completely
///
/// Starting from the given set of egg positions, this function advances all
/// movable eggs wave after wave until no egg can move further, mutating the
/// board in place. It then rescans the board for the authoritative set of
/// remaining eggs and derives the terminal signal from that set and the move
/// budget.
///
/// `moves_left` is the budget after the current move was charged. `on_wave`
/// is invoked with the board after every wave, allowing callers to capture
/// animation frames. The returned [Resolution] carries the updated egg set,
/// the updated score and the finished flag.
///
pub fn resolve(
    board: &mut Board,
    direction: Direction,
    moves_left: i32,
    eggs: Vec<Position>,
    score: i32,
    mut on_wave: impl FnMut(&Board),
) -> Resolution {
    let mut rolling = eggs;
    let mut score = score;

    while !rolling.is_empty() {
        let wave = advance_wave(board, direction, rolling, moves_left);
        score += wave.score;
        rolling = wave.rolling;
        on_wave(board);
    }

    Resolution::conclude(board, moves_left, score)
}


/// Advance all rolling eggs by one tile
///
/// The given positions are brought into wavefront order and then processed
/// one by one: an egg with a free tile ahead rolls onto it and joins the
/// returned wave's rolling set; an egg facing a frying pan or an empty nest
/// is consumed, adjusting the wave's score; any other egg stays where it is
/// and leaves the wave.
///
/// Every write this function performs targets a position previously
/// validated by [Board::peek].
///
pub fn advance_wave(
    board: &mut Board,
    direction: Direction,
    mut rolling: Vec<Position>,
    moves_left: i32,
) -> Wave {
    sort_wavefront(&mut rolling, direction);

    let mut wave = Wave {rolling: Vec::new(), score: 0};
    for current in rolling {
        let next = match current + direction {
            Some(next) => next,
            None => continue,
        };

        match board.peek(next) {
            Some(Tile::Floor) => {
                board[next] = Tile::Egg;
                board[current] = Tile::Floor;
                wave.rolling.push(next);
            },
            Some(Tile::Pan) => {
                // the pan keeps its tile, only the egg vanishes
                board[current] = Tile::Floor;
                wave.score -= PAN_PENALTY;
            },
            Some(Tile::Nest) => {
                board[next] = Tile::ClosedNest;
                board[current] = Tile::Floor;
                wave.score += NEST_REWARD + moves_left;
            },
            _ => (),
        }
    }
    wave
}


/// Bring egg positions into wavefront order
///
/// Eggs are sorted by the coordinate on the axis orthogonal to the motion
/// first and by the in-line coordinate second, ascending for a negative
/// polarity and descending for a positive one. Within each line, the egg
/// closest to the direction of travel thus comes first, so a trailing egg
/// can never roll through a tile its leader has not yet vacated, and no two
/// eggs ever contend for the same destination within one wave.
///
fn sort_wavefront(eggs: &mut [Position], direction: Direction) {
    let key = move |&(row, col): &Position| match direction.axis() {
        Axis::Horizontal => (row, col),
        Axis::Vertical   => (col, row),
    };

    match direction.polarity() {
        Polarity::Negative => eggs.sort_unstable_by_key(key),
        Polarity::Positive => eggs.sort_unstable_by(move |a, b| key(b).cmp(&key(a))),
    }
}


/// Eggs still rolling after a wave, and the points the wave yielded
///
pub struct Wave {
    pub rolling: Vec<Position>,
    pub score: i32,
}


/// Settled outcome of a single player move
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Positions of all remaining eggs, in row-major order
    pub eggs: Vec<Position>,
    /// Score after the move
    pub score: i32,
    /// Whether the game ended with this move
    pub finished: bool,
}

impl Resolution {
    /// Collect the outcome of a move after all waves settled
    ///
    /// The remaining egg set is rescanned from the board rather than carried
    /// over from the waves' bookkeeping. The game continues exactly if
    /// `moves_left - 1` is non-zero and eggs remain; a budget of `0` thus
    /// does *not* end the game on its own, only a budget of exactly `1` or
    /// an empty egg set does.
    ///
    pub fn conclude(board: &Board, moves_left: i32, score: i32) -> Self {
        let eggs: Vec<_> = board.eggs().collect();
        let finished = moves_left - 1 == 0 || eggs.is_empty();
        Self {eggs, score, finished}
    }
}
