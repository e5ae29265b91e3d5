//! Plain-text rendering of the board and of action results.
//!
//! Legend: `R`/`B` tokens, `r@`/`b@` bases, `r^`/`b^` jump cells, `+` energy
//! cells, `#N` a wall with N hit points left.

use std::fmt::Write;

use game_core::board::{self, COLS, ROWS};
use game_core::{ActionResult, CellKind, GameState, MoveKind, PlayerColor, Position, ValidMoves};

fn initial(color: PlayerColor) -> char {
    match color {
        PlayerColor::Red => 'r',
        PlayerColor::Blue => 'b',
    }
}

fn cell(state: &GameState, position: Position) -> String {
    if let Some(color) = PlayerColor::ALL
        .into_iter()
        .find(|&color| state.position(color) == position)
    {
        return format!(" {}", initial(color).to_ascii_uppercase());
    }
    if let Some(wall) = state.walls.get(position) {
        return format!("#{}", wall.hp);
    }
    match board::cell_kind(position) {
        CellKind::Base(color) => format!("{}@", initial(color)),
        CellKind::Jump(color) => format!("{}^", initial(color)),
        CellKind::Energy => " +".to_string(),
        CellKind::Empty => " .".to_string(),
    }
}

pub fn board(state: &GameState) -> String {
    let mut out = String::from("   ");
    for col in 0..COLS {
        let _ = write!(out, " {col:>2}");
    }
    out.push('\n');

    for row in 0..ROWS {
        let _ = write!(out, "{row:>2} ");
        for col in 0..COLS {
            let _ = write!(out, " {}", cell(state, Position::new(row, col)));
        }
        out.push('\n');
    }
    out.push_str(&status(state));
    out
}

pub fn status(state: &GameState) -> String {
    if let Some(winner) = state.winner {
        return format!("game over: {winner} wins");
    }

    let current = state.current_player();
    let mut line = format!(
        "{current} to act | energy red {} blue {}",
        state.energy(PlayerColor::Red),
        state.energy(PlayerColor::Blue)
    );
    if state.turn.used_jump[current] {
        line.push_str(" | jump used");
    }
    if state.turn.hits_this_turn > 0 {
        let _ = write!(line, " | hits {}", state.turn.hits_this_turn);
    }
    if state.turn.actions_locked {
        line.push_str(" | wall placed, end the turn");
    }
    line
}

fn list(positions: &[Position]) -> String {
    if positions.is_empty() {
        return "-".to_string();
    }
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn valid_moves(moves: &ValidMoves, can_end_turn: bool) -> String {
    format!(
        "move: {}\nwall: {}\nhit:  {}\nend:  {}",
        list(&moves.moves),
        list(&moves.wall_placements),
        list(&moves.hit_targets),
        if can_end_turn { "yes" } else { "no" }
    )
}

pub fn result(player: PlayerColor, result: &ActionResult) -> String {
    match result {
        ActionResult::Move {
            to,
            kind,
            captured,
            refunded,
            ..
        } => {
            let verb = match kind {
                MoveKind::Step => "moves",
                MoveKind::Jump => "jumps",
            };
            let mut line = format!("{player} {verb} to {to}");
            if *refunded {
                line.push_str(", energy refunded");
            }
            if *captured {
                let _ = write!(line, " and captures {}", player.opponent());
            }
            line
        }
        ActionResult::Hit(outcome) => {
            let mut line = format!("{player} hits for {} energy", outcome.energy_spent);
            let damaged = outcome.walls.len() - outcome.walls_destroyed();
            if damaged > 0 {
                let _ = write!(line, ", {damaged} wall(s) cracked");
            }
            if outcome.walls_destroyed() > 0 {
                let _ = write!(line, ", {} wall(s) destroyed", outcome.walls_destroyed());
            }
            match outcome.knockback {
                Some(knockback) if knockback.was_blocked() => {
                    line.push_str(", push blocked");
                }
                Some(knockback) => {
                    let _ = write!(line, ", opponent pushed to {}", knockback.to);
                }
                None => {}
            }
            if outcome.reverse_capture {
                let _ = write!(line, ", onto the {player} base");
            }
            line
        }
        ActionResult::PlaceWall { position } => format!("{player} builds a wall at {position}"),
        ActionResult::EndTurn {
            next_player,
            energy,
        } => format!("{player} ends the turn; {next_player} has {energy} energy"),
    }
}
