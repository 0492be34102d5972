#![cfg(feature = "std")]

//! Console presentation: banners, side-by-side boards, outcome narration and
//! the start confirmation prompt.

use std::io::{self, BufRead, Write};

use crate::core::board::BoardView;
use crate::core::common::ShotOutcome;

/// Width of each board column in the side-by-side layout.
const COLUMN_WIDTH: usize = 40;

/// Render two boards next to each other under their titles.
pub fn side_by_side(
    left_title: &str,
    left: BoardView<'_>,
    right_title: &str,
    right: BoardView<'_>,
) -> String {
    let rule = "-".repeat(27);
    let mut out = String::new();
    out.push_str(&format!("{:^w$} {:^w$}\n", rule, rule, w = COLUMN_WIDTH));
    out.push_str(&format!(
        "{:^w$} {:^w$}\n",
        left_title,
        right_title,
        w = COLUMN_WIDTH
    ));
    let left = left.to_string();
    let right = right.to_string();
    for (a, b) in left.lines().zip(right.lines()) {
        out.push_str(&format!("{:^w$}  {:^w$}\n", a, b, w = COLUMN_WIDTH));
    }
    out.push_str(&format!("{:^w$} {:^w$}", rule, rule, w = COLUMN_WIDTH));
    out
}

/// Short narration line for a shot outcome.
pub fn narrate(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Ship hit!",
        ShotOutcome::Destroyed => "Ship destroyed!",
    }
}

/// Frame `text` between two rules.
pub fn banner(text: &str) -> String {
    let rule = "=".repeat(44);
    format!("{}\n{:^44}\n{}", rule, text, rule)
}

/// Ask whether to start. `Y` starts, `N` declines, anything else asks again;
/// closed input counts as a no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    writeln!(output, "Ready for battle?")?;
    write!(output, "Enter Y to start, N if you changed your mind: ")?;
    let mut line = String::new();
    loop {
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_ascii_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            _ => write!(output, "Shall we play? Enter Y or N: ")?,
        }
    }
}
