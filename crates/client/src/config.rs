//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use game_core::{GameConfig, PlayerColor, StartingPlayer};
use runtime::SessionConfig;

const DEFAULT_SNAPSHOT_PATH: &str = "grid-combat.snapshot";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub starting_player: StartingPlayer,
    pub adjacent_walls_only: bool,
    /// Where `save` and `load` go when no path is given.
    pub snapshot_path: PathBuf,
    pub event_buffer_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            starting_player: StartingPlayer::default(),
            adjacent_walls_only: false,
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            event_buffer_size: 100,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GRID_COMBAT_STARTING_PLAYER` - `red`, `blue` or `random` (default: red)
    /// - `GRID_COMBAT_SEED` - Seed for `random` (default: current time)
    /// - `GRID_COMBAT_ADJACENT_WALLS` - Only allow walls next to the token (default: false)
    /// - `GRID_COMBAT_SNAPSHOT_PATH` - Default save file (default: grid-combat.snapshot)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("GRID_COMBAT_STARTING_PLAYER") {
            match parse_starting_player(&raw, read_env::<u64>("GRID_COMBAT_SEED")) {
                Some(starting) => config.starting_player = starting,
                None => tracing::warn!(
                    value = %raw,
                    "GRID_COMBAT_STARTING_PLAYER must be red, blue or random; using red"
                ),
            }
        }

        if let Some(adjacent) = read_env::<bool>("GRID_COMBAT_ADJACENT_WALLS") {
            config.adjacent_walls_only = adjacent;
        }

        if let Ok(path) = env::var("GRID_COMBAT_SNAPSHOT_PATH") {
            config.snapshot_path = PathBuf::from(path);
        }

        config
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_starting_player(self.starting_player)
            .with_adjacent_walls_only(self.adjacent_walls_only)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            game: self.game_config(),
            seat: None,
            event_buffer_size: self.event_buffer_size,
        }
    }
}

fn parse_starting_player(raw: &str, seed: Option<u64>) -> Option<StartingPlayer> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("random") {
        return Some(StartingPlayer::Seeded(seed.unwrap_or_else(clock_seed)));
    }
    PlayerColor::from_str(raw).ok().map(StartingPlayer::Fixed)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_starting_player_values() {
        assert_eq!(
            parse_starting_player("Blue", None),
            Some(StartingPlayer::Fixed(PlayerColor::Blue))
        );
        assert_eq!(
            parse_starting_player(" random ", Some(9)),
            Some(StartingPlayer::Seeded(9))
        );
        assert!(matches!(
            parse_starting_player("RANDOM", None),
            Some(StartingPlayer::Seeded(_))
        ));
        assert_eq!(parse_starting_player("green", None), None);
    }

    #[test]
    fn game_config_carries_rule_options() {
        let config = ClientConfig {
            adjacent_walls_only: true,
            ..ClientConfig::default()
        };
        assert!(config.game_config().adjacent_walls_only);
        assert_eq!(config.session_config().seat, None);
    }
}
