mod display;
mod error;
mod field;
mod game;
mod level;
mod scores;
mod util;

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;



use std::path::PathBuf;
use std::time::Duration;

use tokio::io;

use error::TryExt;


#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = clap::App::new("egg-roll")
        .about("Roll all eggs into their nests before you run out of moves")
        .arg(clap::Arg::with_name("level")
            .value_name("FILE")
            .required(true)
            .help("Level file to play"))
        .arg(clap::Arg::with_name("tick")
            .long("tick")
            .value_name("MS")
            .takes_value(true)
            .help("Delay between animation frames in milliseconds"))
        .arg(clap::Arg::with_name("no-scores")
            .long("no-scores")
            .help("Play without the persistent score table"))
        .get_matches();

    let path: PathBuf = matches.value_of_os("level").ok_or(error::NoneError)?.into();
    let tick = matches
        .value_of("tick")
        .and_then(|v| v.parse().or_warn("Ignoring unparsable tick duration"))
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TICK);

    let level = level::load(&path)
        .await
        .map_err(|e| error::WrappedErr::new("Could not load level", e))?;
    let state = game::State::new(level.board, level.moves);
    let scoring = if matches.is_present("no-scores") {
        None
    } else {
        Some((level.scores, Box::new(scores::LevelFile::new(path)) as Box<dyn scores::Store>))
    };

    let mut screen = display::Screen::new(io::stdout());
    game::run(io::stdin(), &mut screen, state, scoring, tick).await?;

    Ok(())
}


/// Default delay between animation frames
///
const DEFAULT_TICK: Duration = Duration::from_millis(10);
