//! Console front end for the tic-tac-toe engine.
//!
//! Everything that touches the terminal lives here: flags, the settings
//! file, prompts with their re-prompt loops, board drawing and the outer
//! match loop. Game rules stay in [`ttt_engine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod console;
pub mod session;
pub mod settings;

pub use cli::Cli;
pub use console::{Console, ConsoleHuman, join_or, parse_yes_no, render_board};
pub use session::run;
pub use settings::{ConfigError, Settings};
