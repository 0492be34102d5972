//! Turn loop and match orchestration.

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::core::board::Board;
use crate::core::common::{Coordinate, ShotOutcome};
use crate::player::Player;

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Target of the shot that landed.
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Targets the board refused before this one.
    pub rejected: usize,
}

impl TurnReport {
    /// Whether the same player shoots again.
    pub fn retains_turn(&self) -> bool {
        self.outcome.retains_turn()
    }
}

/// Ask `player` for targets until one lands on `target_board`.
///
/// Off-board and repeated targets are handed back to the player and retried.
/// Errors come only from the player itself, e.g. closed input.
pub fn take_turn(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    target_board: &mut Board,
) -> anyhow::Result<TurnReport> {
    let mut rejected = 0;
    loop {
        let target = player.select_target(rng)?;
        match target_board.resolve_shot(target) {
            Ok(outcome) => {
                player.handle_shot_result(target, outcome);
                return Ok(TurnReport {
                    target,
                    outcome,
                    rejected,
                });
            }
            Err(e) => {
                debug!("target {} rejected: {:?}", target, e);
                player.handle_rejected_shot(target, e);
                rejected += 1;
            }
        }
    }
}

/// Where the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// The player in this seat shoots next.
    AwaitingTurn(usize),
    /// The player in this seat has won.
    Finished(usize),
}

/// Two players, each with their own board, taking turns.
///
/// Seat 0 moves first. A player keeps shooting while they hit.
pub struct Match {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    state: MatchState,
    rng: SmallRng,
    shots: [usize; 2],
}

impl Match {
    /// `boards[i]` belongs to `players[i]` and is the one the other seat fires at.
    pub fn new(players: [Box<dyn Player>; 2], boards: [Board; 2], rng: SmallRng) -> Self {
        info!(
            "match starting: {} vs {} vessels",
            boards[0].vessels().len(),
            boards[1].vessels().len()
        );
        Self {
            players,
            boards,
            state: MatchState::AwaitingTurn(0),
            rng,
            shots: [0; 2],
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<usize> {
        match self.state {
            MatchState::Finished(seat) => Some(seat),
            MatchState::AwaitingTurn(_) => None,
        }
    }

    /// The board owned by `seat`. Panics if `seat > 1`.
    pub fn board(&self, seat: usize) -> &Board {
        &self.boards[seat]
    }

    /// Shots landed by `seat` so far. Panics if `seat > 1`.
    pub fn shots_fired(&self, seat: usize) -> usize {
        self.shots[seat]
    }

    /// Play one turn. Returns the acting seat and its report, or `None` once
    /// the match is over.
    pub fn step(&mut self) -> anyhow::Result<Option<(usize, TurnReport)>> {
        let active = match self.state {
            MatchState::Finished(_) => return Ok(None),
            MatchState::AwaitingTurn(seat) => seat,
        };
        let opponent = 1 - active;

        let report = take_turn(
            self.players[active].as_mut(),
            &mut self.rng,
            &mut self.boards[opponent],
        )?;
        self.shots[active] += 1;

        self.state = if self.boards[opponent].is_defeated() {
            info!("seat {} wins after {} shots", active, self.shots[active]);
            MatchState::Finished(active)
        } else if report.retains_turn() {
            MatchState::AwaitingTurn(active)
        } else {
            MatchState::AwaitingTurn(opponent)
        };
        debug!(
            "seat {} {} at {}; next state {:?}",
            active, report.outcome, report.target, self.state
        );
        Ok(Some((active, report)))
    }

    /// Play until someone wins and return the winning seat.
    pub fn run(&mut self) -> anyhow::Result<usize> {
        loop {
            if let MatchState::Finished(winner) = self.state {
                return Ok(winner);
            }
            self.step()?;
        }
    }
}
