//! Terminal prompts and board rendering.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument, warn};
use ttt_engine::{Board, HumanInput, Mark, MatchConfig, Position, Symbol};

const ROW_DIVIDER: &str = "-----+-----+-----";
const ROW_PADDING: &str = "     |     |";

/// Joins choices for a prompt: "1, 2, or 3" for three or more, "1 OR 2"
/// otherwise.
pub fn join_or<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    match parts.split_last() {
        Some((last, rest)) if parts.len() > 2 => format!("{}, or {}", rest.join(", "), last),
        _ => parts.join(" OR "),
    }
}

/// Parses a yes/no answer, ignoring case and surrounding whitespace.
pub fn parse_yes_no(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn parse_name(s: &str) -> Option<String> {
    let name = s.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Draws the board as three 5-wide cells per row.
pub fn render_board(board: &Board, config: &MatchConfig) -> Vec<String> {
    let glyph = |pos: Position| {
        config
            .symbol_for(board.mark_at(pos))
            .map_or_else(|| " ".to_string(), |s| s.to_string())
    };

    let mut lines = Vec::with_capacity(11);
    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            lines.push(ROW_DIVIDER.to_string());
        }
        lines.push(ROW_PADDING.to_string());
        lines.push(format!(
            "  {}  |  {}  |  {}",
            glyph(cells[0]),
            glyph(cells[1]),
            glyph(cells[2])
        ));
        lines.push(ROW_PADDING.to_string());
    }
    lines
}

/// One line of player input.
enum Line {
    Text(String),
    Garbled,
    End,
}

/// Line-oriented console over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console. With `clear_screen` off, [`clear`](Self::clear)
    /// does nothing.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Consumes the console and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }

    /// Wipes the terminal and homes the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Reads one line without its terminator.
    fn read_line(&mut self) -> io::Result<Line> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input");
            return Ok(Line::End);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        Ok(String::from_utf8(buf).map_or(Line::Garbled, Line::Text))
    }

    /// Prompts until `parse` accepts an answer.
    ///
    /// Returns `None` if input ends first.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        self.say(prompt)?;
        loop {
            match self.read_line()? {
                Line::End => return Ok(None),
                Line::Text(line) => {
                    if let Some(value) = parse(&line) {
                        return Ok(Some(value));
                    }
                    debug!(input = %line, "Rejected answer");
                }
                Line::Garbled => debug!("Rejected answer that is not UTF-8"),
            }
            self.say(retry)?;
        }
    }

    /// Asks which marker the human plays.
    pub fn prompt_symbol(&mut self) -> io::Result<Option<Symbol>> {
        self.ask(
            "Choose your marker: X or O?",
            "Sorry, must be X or O.",
            Symbol::parse,
        )
    }

    /// Asks for the human's name.
    pub fn prompt_name(&mut self) -> io::Result<Option<String>> {
        self.ask("What's your name?", "Sorry, must enter a value.", parse_name)
    }

    /// Asks whether to play another match.
    pub fn prompt_play_again(&mut self) -> io::Result<Option<bool>> {
        self.ask(
            "Would you like to play again? (y/n)",
            "Sorry, must be y or n.",
            parse_yes_no,
        )
    }

    /// Asks for an open square on `board`.
    #[instrument(skip_all)]
    pub fn prompt_square(&mut self, board: &Board) -> io::Result<Option<Position>> {
        let open = board.unmarked_positions();
        let prompt = format!("Choose a square ({}):", join_or(&open));
        self.ask(&prompt, "Sorry, that's not a valid choice.", |s| {
            Position::from_label_or_number(s).filter(|pos| open.contains(pos))
        })
    }

    /// Prints who plays which marker, then the board.
    pub fn draw_board(&mut self, board: &Board, config: &MatchConfig) -> io::Result<()> {
        self.say(format!(
            "You're {}. {} is {}.",
            config.human_symbol(),
            config.computer_name(),
            config.computer_symbol()
        ))?;
        self.say("")?;
        for line in render_board(board, config) {
            self.say(line)?;
        }
        self.say("")
    }
}

/// Feeds the human's console answers into the engine.
///
/// The engine only sees `None` when a read fails, so the failure is kept
/// here for [`take_error`](Self::take_error).
#[derive(Debug)]
pub struct ConsoleHuman<'a, R, W> {
    console: &'a mut Console<R, W>,
    config: MatchConfig,
    error: Option<io::Error>,
}

impl<'a, R: BufRead, W: Write> ConsoleHuman<'a, R, W> {
    /// Creates a move source that renders with `config`.
    pub fn new(console: &'a mut Console<R, W>, config: MatchConfig) -> Self {
        Self {
            console,
            config,
            error: None,
        }
    }

    /// The I/O error that ended input, if it was not a plain end of input.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn turn(&mut self, board: &Board) -> io::Result<Option<Position>> {
        // The opening board is drawn by the session, later ones replace it.
        if board.marks().iter().any(|&m| m != Mark::Empty) {
            self.console.clear()?;
            self.console.draw_board(board, &self.config)?;
        }
        self.console.prompt_square(board)
    }
}

impl<R: BufRead, W: Write> HumanInput for ConsoleHuman<'_, R, W> {
    fn choose_position(&mut self, board: &Board) -> Option<Position> {
        match self.turn(board) {
            Ok(choice) => choice,
            Err(e) => {
                warn!(error = %e, "Console failed while reading a move");
                self.error = Some(e);
                None
            }
        }
    }
}
