//! The outer game loop: setup, rounds, matches and replays.

use crate::console::{Console, ConsoleHuman};
use crate::settings::Settings;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, instrument};
use ttt_engine::{
    Mark, MatchConfig, MatchController, MatchError, RandomSource, RoundOutcome, WINNING_SCORE,
    pick_computer_name,
};

/// Plays matches on `console` until the human declines a rematch or input
/// ends.
#[instrument(skip_all)]
pub fn run<R, W, S>(console: &mut Console<R, W>, settings: &Settings, mut rng: S) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: RandomSource,
{
    console.clear()?;
    console.say("Welcome to Tic Tac Toe!")?;
    console.say(format!("First to {WINNING_SCORE} rounds wins the match."))?;
    console.say("")?;

    let Some(config) = setup(console, settings, &mut rng)? else {
        return goodbye(console);
    };
    let mut game = MatchController::new(config, rng);

    loop {
        if !play_match(console, &mut game)? {
            break;
        }
        match console.prompt_play_again()? {
            Some(true) => {
                game.rematch().context("Failed to start a rematch")?;
                console.clear()?;
                console.say("Let's play again!")?;
                console.say("")?;
            }
            Some(false) | None => break,
        }
    }

    goodbye(console)
}

/// Builds the match setup from settings, asking for whatever is missing.
///
/// Returns `None` if input ends during the prompts.
fn setup<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
    rng: &mut dyn RandomSource,
) -> Result<Option<MatchConfig>> {
    let symbol = match settings.marker() {
        Some(symbol) => *symbol,
        None => match console.prompt_symbol()? {
            Some(symbol) => symbol,
            None => return Ok(None),
        },
    };
    let name = match settings.name() {
        Some(name) => name.clone(),
        None => match console.prompt_name()? {
            Some(name) => name,
            None => return Ok(None),
        },
    };
    let computer_name = pick_computer_name(rng);
    info!(%symbol, %name, computer_name, "Setup complete");

    Ok(Some(MatchConfig::new(symbol, name, computer_name)))
}

/// Plays rounds until someone reaches the winning score.
///
/// Returns `false` if input ended mid-match. A failed read is an error.
fn play_match<R, W, S>(console: &mut Console<R, W>, game: &mut MatchController<S>) -> Result<bool>
where
    R: BufRead,
    W: Write,
    S: RandomSource,
{
    loop {
        console.draw_board(game.board(), game.config())?;

        let mut human = ConsoleHuman::new(console, game.config().clone());
        let played = game.play_round(&mut human);
        if let Some(e) = human.take_error() {
            return Err(e).context("Failed to read a move");
        }
        match played {
            Ok(_) => {}
            Err(MatchError::InputClosed) => return Ok(false),
            Err(e) => return Err(e).context("Round failed"),
        }

        let outcome = game.score_round().context("Failed to score round")?;
        console.clear()?;
        console.draw_board(game.board(), game.config())?;
        announce(console, game, outcome)?;

        if let Some(champion) = game.champion() {
            console.say(format!("{} is the champion!", champion.name()))?;
            return Ok(true);
        }
        game.start_next_round().context("Failed to start the next round")?;
    }
}

fn announce<R, W, S>(
    console: &mut Console<R, W>,
    game: &MatchController<S>,
    outcome: RoundOutcome,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: RandomSource,
{
    let result = match outcome.winner() {
        Some(Mark::Human) => "You won!".to_string(),
        Some(mark) => format!("{} won!", game.config().name_for(mark)),
        None => "It's a tie!".to_string(),
    };
    console.say(result)?;
    console.say(format!(
        "{}: {}  {}: {}",
        game.human().name(),
        game.human().score(),
        game.computer().name(),
        game.computer().score()
    ))?;
    console.say("")?;
    Ok(())
}

fn goodbye<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("Thanks for playing Tic Tac Toe! Goodbye!")?;
    Ok(())
}
