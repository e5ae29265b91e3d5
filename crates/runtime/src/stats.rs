//! Per-game statistics shown when a match ends.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use game_core::{ActionKind, PerColor, PlayerColor, StateDelta};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub moves_made: PerColor<u32>,
    pub walls_placed: PerColor<u32>,
    pub hits: PerColor<u32>,
    /// Walls destroyed by hits, whoever owned them.
    pub walls_broken: u32,
    /// Completed turns across both sides.
    pub turns_played: u32,
    pub winner: Option<PlayerColor>,
    /// Wall-clock length of the match, filled in by the session once it is won.
    #[serde(default)]
    pub duration: Option<Duration>,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one accepted action into the totals.
    pub fn record(&mut self, delta: &StateDelta) {
        let actor = delta.actor;
        match delta.action.kind() {
            ActionKind::Move => self.moves_made[actor] += 1,
            ActionKind::PlaceWall => self.walls_placed[actor] += 1,
            ActionKind::Hit => self.hits[actor] += 1,
            ActionKind::EndTurn => self.turns_played += 1,
        }

        self.walls_broken += delta.walls.destroyed.len() as u32;

        if let Some(winner) = delta.winner {
            self.winner = Some(winner);
        }
    }

    pub fn finish(&mut self, duration: Duration) {
        self.duration = Some(duration);
    }
}

impl fmt::Display for MatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(winner) = self.winner {
            writeln!(f, "winner:        {winner}")?;
        }
        writeln!(f, "               red  blue")?;
        writeln!(
            f,
            "moves made:   {:>4}  {:>4}",
            self.moves_made.red, self.moves_made.blue
        )?;
        writeln!(
            f,
            "walls placed: {:>4}  {:>4}",
            self.walls_placed.red, self.walls_placed.blue
        )?;
        writeln!(f, "hits:         {:>4}  {:>4}", self.hits.red, self.hits.blue)?;
        writeln!(f, "walls broken: {:>4}", self.walls_broken)?;
        write!(f, "turns played: {:>4}", self.turns_played)?;
        if let Some(duration) = self.duration {
            let secs = duration.as_secs();
            write!(f, "\nduration:     {}m {:02}s", secs / 60, secs % 60)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Action, GameConfig, GameEngine, Position, Wall, new_game};

    #[test]
    fn counts_follow_accepted_actions() {
        let config = GameConfig::default();
        let mut state = new_game(&config);
        state
            .walls
            .insert(Wall::new(Position::new(1, 1), PlayerColor::Blue, 1))
            .unwrap();
        let mut stats = MatchStats::new();

        for action in [Action::hit(), Action::end_turn(), Action::move_to(Position::new(2, 4))] {
            let outcome = GameEngine::new(&mut state, &config).execute(&action).unwrap();
            stats.record(&outcome.delta);
        }

        assert_eq!(stats.hits.red, 1);
        assert_eq!(stats.walls_broken, 1);
        assert_eq!(stats.turns_played, 1);
        assert_eq!(stats.moves_made.blue, 1);
        assert_eq!(stats.winner, None);
        assert!(stats.to_string().contains("walls broken"));
        assert!(!stats.to_string().contains("duration"));
    }

    #[test]
    fn finished_match_shows_its_duration() {
        let mut stats = MatchStats::new();
        stats.finish(Duration::from_secs(125));
        assert!(stats.to_string().ends_with("duration:     2m 05s"));
    }
}
