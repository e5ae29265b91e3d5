//! Hot-seat game loop state: one session shared by both players.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use game_core::{Action, GameState};
use runtime::{
    FileSnapshotRepository, GameSession, RepositoryError, RuntimeError, SnapshotRepository,
};

use crate::command::{Command, HELP};
use crate::config::ClientConfig;
use crate::render;

/// What the input loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

pub struct App {
    session: GameSession,
    snapshots: FileSnapshotRepository,
}

impl App {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            session: GameSession::new(config.session_config()),
            snapshots: FileSnapshotRepository::new(&config.snapshot_path),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        let reply = match command {
            Command::Play(action) => self.play(action)?,
            Command::Moves => {
                let can_end = self.session.available_actions().contains(&Action::end_turn());
                render::valid_moves(&self.session.valid_moves(), can_end)
            }
            Command::Board => render::board(self.session.state()),
            Command::Stats => {
                let stats = self.session.stats();
                if stats.duration.is_some() {
                    stats.to_string()
                } else {
                    let secs = self.session.match_duration().as_secs();
                    format!("{stats}\nelapsed:      {}m {:02}s", secs / 60, secs % 60)
                }
            }
            Command::Save(path) => self.save(path.as_deref())?,
            Command::Load(path) => self.load(path.as_deref())?,
            Command::Export(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("cannot create {}", path.display()))?;
                self.session.log().write_json_lines(BufWriter::new(file))?;
                format!(
                    "wrote {} action(s) to {}",
                    self.session.log().len(),
                    path.display()
                )
            }
            Command::New => {
                self.session.reset();
                render::board(self.session.state())
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(reply))
    }

    fn play(&mut self, action: Action) -> Result<String> {
        let player = self.session.state().current_player();
        match self.session.submit(action) {
            Ok(outcome) => Ok(format!(
                "{}\n{}",
                render::result(player, &outcome.result),
                render::board(self.session.state())
            )),
            Err(RuntimeError::Rejected(error)) => Ok(format!("rejected: {}", error.kind())),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&self, path: Option<&Path>) -> Result<String> {
        let state = self.session.state();
        let repository = self.repository(path);
        repository.save(state)?;
        Ok(format!(
            "saved state {} to {}",
            state.nonce,
            repository.path().display()
        ))
    }

    fn load(&mut self, path: Option<&Path>) -> Result<String> {
        let repository = self.repository(path);
        match repository.load() {
            Ok(Some(state)) => {
                let reply = format!(
                    "loaded state {} from {}",
                    state.nonce,
                    repository.path().display()
                );
                self.restore(state);
                Ok(format!("{reply}\n{}", render::board(self.session.state())))
            }
            Ok(None) => Ok(format!("no snapshot at {}", repository.path().display())),
            Err(RepositoryError::Snapshot(error)) => {
                tracing::warn!(%error, path = %repository.path().display(), "unusable snapshot");
                self.session.reset();
                Ok(format!(
                    "snapshot rejected ({error}); started a new game\n{}",
                    render::board(self.session.state())
                ))
            }
            Err(error) => Err(error.into()),
        }
    }

    fn restore(&mut self, state: GameState) {
        tracing::info!(nonce = state.nonce, "restored saved game");
        self.session.restore(state);
    }

    fn repository(&self, path: Option<&Path>) -> FileSnapshotRepository {
        match path {
            Some(path) => FileSnapshotRepository::new(path),
            None => FileSnapshotRepository::new(self.snapshots.path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{PlayerColor, Position};
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        let config = ClientConfig {
            snapshot_path: dir.path().join("game.snapshot"),
            ..ClientConfig::default()
        };
        App::new(&config)
    }

    fn reply(app: &mut App, line: &str) -> String {
        match app.handle(line.parse().unwrap()).unwrap() {
            Flow::Continue(text) => text,
            Flow::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn both_players_share_the_session() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        assert!(reply(&mut app, "wall 1 1").starts_with("red builds a wall at (1, 1)"));
        assert!(reply(&mut app, "end").contains("blue has 2 energy"));
        assert!(reply(&mut app, "move 2 4").starts_with("blue moves to (2, 4)"));
        assert_eq!(app.session().stats().turns_played, 1);
    }

    #[test]
    fn rejection_is_reported_not_raised() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        assert_eq!(
            reply(&mut app, "wall 0 0"),
            "rejected: cell (0, 0) is occupied or reserved"
        );
        assert_eq!(
            reply(&mut app, "end"),
            "rejected: turn cannot end while energy remains to be spent"
        );
        assert_eq!(app.session().state().nonce, 0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        reply(&mut app, "move 0 1");
        assert!(reply(&mut app, "save").starts_with("saved state 1"));

        reply(&mut app, "new");
        assert_eq!(app.session().state().nonce, 0);

        assert!(reply(&mut app, "load").starts_with("loaded state 1"));
        assert_eq!(
            app.session().state().position(PlayerColor::Red),
            Position::new(0, 1)
        );
        assert!(app.session().log().is_empty());
    }

    #[test]
    fn corrupt_snapshot_starts_a_new_game() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let path = dir.path().join("broken.snapshot");
        std::fs::write(&path, b"not a snapshot").unwrap();

        reply(&mut app, "move 0 1");
        let text = reply(&mut app, &format!("load {}", path.display()));

        assert!(text.starts_with("snapshot rejected"));
        assert_eq!(app.session().state().nonce, 0);
    }

    #[test]
    fn export_writes_one_line_per_action() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        let path = dir.path().join("log.jsonl");

        reply(&mut app, "wall 1 1");
        reply(&mut app, "end");
        let text = reply(&mut app, &format!("export {}", path.display()));

        assert!(text.starts_with("wrote 2 action(s)"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn stats_of_a_running_game_show_elapsed_time() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        reply(&mut app, "hit");
        let text = reply(&mut app, "stats");
        assert!(text.contains("hits:            1     0"));
        assert!(text.contains("elapsed:      0m"));
    }

    #[test]
    fn quit_stops_the_loop() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        assert_eq!(app.handle(Command::Quit).unwrap(), Flow::Quit);
    }
}
