#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::bail;
use log::debug;
use rand::rngs::SmallRng;

use crate::core::common::{Coordinate, ShotError};

use super::Player;

/// Human player typing targets as `row col`, both 1-based.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    line: String,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse `"row col"` (1-based) into a 0-based coordinate.
///
/// Only the shape of the input is checked here; a coordinate off the board is
/// returned as is and rejected when fired.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err("Enter two coordinates separated by a space!".to_string());
    };
    match (row.parse::<u16>(), col.parse::<u16>()) {
        (Ok(r), Ok(c)) => Ok(Coordinate::new(i32::from(r) - 1, i32::from(c) - 1)),
        _ => Err("Enter numbers only!".to_string()),
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Where do we fire? (row col): ")?;
            self.output.flush()?;
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                bail!("input closed before a target was chosen");
            }
            match parse_coord(self.line.trim()) {
                Ok(target) => return Ok(target),
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
    }

    fn handle_rejected_shot(&mut self, _target: Coordinate, error: ShotError) {
        if let Err(e) = writeln!(self.output, "{}", error) {
            debug!("could not report rejected shot: {}", e);
        }
    }
}
