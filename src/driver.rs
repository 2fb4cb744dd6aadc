//! Line-oriented terminal driver.
//!
//! Reads one command per line, feeds it to a [`Game`], then renders the
//! resulting view as text or JSON. This is the whole presentation layer:
//! it owns no rules and keeps no state beyond the game itself.

use crate::games::slide::{Game, Position};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

const HELP: &str = "\
Commands:
  click <cell>   click a square (0-8 or a label such as center, top-left)
  jump <n>       show the board after move n
  show           redraw the board
  moves          list jump targets
  new            start a new game
  help           show this help
  quit           exit";

/// A parsed driver command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a square.
    Click(Position),
    /// Jump to a recorded move.
    Jump(usize),
    /// Redraw the board.
    Show,
    /// List jump targets.
    Moves,
    /// Start a new game.
    New,
    /// Print the command list.
    Help,
    /// Leave the loop.
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "click" | "c" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("click"));
                }
                parse_cell(arg).map(Command::Click)
            }
            "jump" | "j" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument("jump"));
                }
                arg.parse()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::InvalidMove(arg.to_string()))
            }
            "show" | "s" => Ok(Command::Show),
            "moves" | "m" => Ok(Command::Moves),
            "new" | "n" => Ok(Command::New),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Parses a cell given as an index or a position label.
pub fn parse_cell(s: &str) -> Result<Position, CommandError> {
    Position::from_label_or_number(s).ok_or_else(|| CommandError::InvalidCell(s.to_string()))
}

/// Error parsing a driver command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// Verb not recognised.
    #[display("Unknown command: {} (try help)", _0)]
    Unknown(String),
    /// Verb given without its argument.
    #[display("Missing argument for {}", _0)]
    MissingArgument(&'static str),
    /// Cell is neither 0-8 nor a position label.
    #[display("Invalid cell: {} (use 0-8 or a label such as center)", _0)]
    InvalidCell(String),
    /// Move number is not a non-negative integer.
    #[display("Invalid move number: {}", _0)]
    InvalidMove(String),
}

impl std::error::Error for CommandError {}

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Terminal driver over any line source and sink.
pub struct Driver<R, W> {
    game: Game,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a driver for `game`.
    pub fn new(game: Game, input: R, output: W, json: bool) -> Self {
        Self {
            game,
            input,
            output,
            json,
        }
    }

    /// The game being driven.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the driver, returning the game and output sink.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        if !self.json {
            writeln!(self.output, "{HELP}\n")?;
        }
        self.render()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.dispatch(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Bad command");
                    self.message(&e.to_string())?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Applies `clicks` in order and renders the final view once.
    #[instrument(skip(self))]
    pub fn replay(&mut self, clicks: &[Position]) -> Result<()> {
        for &pos in clicks {
            let click = self.game.click(pos);
            if let Some(reason) = click.rejection() {
                debug!(%pos, %reason, "Replay click rejected");
            }
        }
        self.render()?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "Dispatching");
        match command {
            Command::Click(pos) => {
                let click = self.game.click(pos);
                if let Some(reason) = click.rejection() {
                    self.message(&format!("Rejected: {reason}"))?;
                }
                self.render()?;
            }
            Command::Jump(target) => match self.game.jump(target) {
                Ok(()) => self.render()?,
                Err(e) => self.message(&e.to_string())?,
            },
            Command::Show => self.render()?,
            Command::Moves => {
                if self.json {
                    let moves: Vec<_> = self.game.moves().collect();
                    writeln!(self.output, "{}", serde_json::to_string(&moves)?)?;
                } else {
                    for entry in self.game.moves() {
                        writeln!(self.output, "{entry}")?;
                    }
                }
            }
            Command::New => {
                self.game.reset();
                self.render()?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn render(&mut self) -> Result<()> {
        let view = self.game.view();
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string(&view)?)?;
        } else {
            writeln!(self.output, "{}", view.render_text())?;
        }
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<()> {
        if self.json {
            let value = serde_json::json!({ "message": text });
            writeln!(self.output, "{value}")?;
        } else {
            writeln!(self.output, "{text}")?;
        }
        Ok(())
    }
}
