//! One replica of a game: state, rules configuration and bookkeeping.
//!
//! [`GameSession`] is the only place the runtime calls into the engine. Every
//! accepted action updates the statistics and the action log, then publishes
//! events; every rejection publishes an `ActionRejected` event and leaves the
//! state untouched.

use std::time::{Duration, Instant};

use tokio::sync::broadcast;

use game_core::{
    Action, ExecutionOutcome, GameConfig, GameEngine, GameError, GameState, PlayerColor,
    ValidMoves, available_actions, new_game, valid_moves,
};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, GameStateEvent, Topic, TurnEvent};
use crate::repository::{ActionLog, ActionLogEntry};
use crate::stats::MatchStats;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub game: GameConfig,

    /// Side this replica plays. `None` for hot-seat play where both sides
    /// share one session.
    pub seat: Option<PlayerColor>,

    pub event_buffer_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seat: None,
            event_buffer_size: 100,
        }
    }
}

impl SessionConfig {
    pub fn with_seat(mut self, seat: PlayerColor) -> Self {
        self.seat = Some(seat);
        self
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }
}

pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    events: EventBus,
    stats: MatchStats,
    log: ActionLog,
    started_at: Instant,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        let state = new_game(&config.game);
        Self::from_state(config, state)
    }

    /// Resumes from an existing state. Statistics and the log start empty.
    pub fn from_state(config: SessionConfig, state: GameState) -> Self {
        let events = EventBus::with_capacity(config.event_buffer_size);
        Self {
            config,
            state,
            events,
            stats: MatchStats::new(),
            log: ActionLog::new(),
            started_at: Instant::now(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Time since this session started or restored its game, frozen once the
    /// game is won.
    pub fn match_duration(&self) -> Duration {
        self.stats
            .duration
            .unwrap_or_else(|| self.started_at.elapsed())
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    pub fn valid_moves(&self) -> ValidMoves {
        valid_moves(&self.state, &self.config.game)
    }

    pub fn available_actions(&self) -> Vec<Action> {
        available_actions(&self.state, &self.config.game)
    }

    /// True when this replica may act in the current state.
    pub fn is_local_turn(&self) -> bool {
        self.config
            .seat
            .is_none_or(|seat| seat == self.state.current_player())
    }

    /// Runs `action` through the engine on behalf of the local player.
    pub fn submit(&mut self, action: Action) -> Result<ExecutionOutcome> {
        let current = self.state.current_player();
        if let Some(seat) = self.config.seat
            && seat != current
            && !self.state.game_over
        {
            return Err(RuntimeError::NotYourTurn { seat, current });
        }

        let result = GameEngine::new(&mut self.state, &self.config.game).execute(&action);

        match result {
            Ok(outcome) => {
                self.on_applied(&outcome);
                Ok(outcome)
            }
            Err(error) => {
                tracing::debug!(
                    player = %current,
                    action = %action.kind(),
                    phase = %error.phase(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "action rejected: {}",
                    error.kind()
                );
                self.events
                    .publish(Event::GameState(GameStateEvent::ActionRejected {
                        action,
                        phase: error.phase(),
                        error: error.kind(),
                    }));
                Err(error.into())
            }
        }
    }

    /// Replaces the local state with one received from the peer.
    pub fn adopt(&mut self, state: GameState, state_root: String) {
        tracing::debug!(nonce = state.nonce, root = %state_root, "adopting peer snapshot");
        let nonce = state.nonce;
        self.state = state;
        if self.state.game_over && self.stats.duration.is_none() {
            self.stats.finish(self.started_at.elapsed());
        }
        self.events
            .publish(Event::GameState(GameStateEvent::SnapshotAdopted {
                nonce,
                state_root,
            }));
        self.announce_game_over();
    }

    /// Starts over with a fresh game. Statistics and the log are cleared.
    pub fn reset(&mut self) {
        self.restore(new_game(&self.config.game));
        tracing::info!(starting = %self.state.current_player(), "new game");
    }

    /// Continues from a saved state. Statistics and the log are cleared.
    pub fn restore(&mut self, state: GameState) {
        self.state = state;
        self.stats = MatchStats::new();
        self.log.clear();
        self.started_at = Instant::now();
    }

    fn on_applied(&mut self, outcome: &ExecutionOutcome) {
        let delta = &outcome.delta;
        tracing::debug!(
            player = %delta.actor,
            action = %delta.action.kind(),
            nonce = delta.nonce,
            "action applied"
        );

        self.stats.record(delta);
        self.log.record(ActionLogEntry {
            nonce: delta.nonce,
            player: delta.actor,
            action: delta.action,
            result: outcome.result.clone(),
        });

        self.events
            .publish(Event::GameState(GameStateEvent::ActionApplied {
                delta: Box::new(delta.clone()),
                result: outcome.result.clone(),
            }));

        if let Some(next_player) = delta.next_player {
            let energy = self.state.energy(next_player);
            tracing::info!(%next_player, energy, "turn passed");
            self.events.publish(Event::Turn(TurnEvent::TurnEnded {
                next_player,
                energy,
                nonce: delta.nonce,
            }));
        }

        if delta.winner.is_some() {
            self.stats.finish(self.started_at.elapsed());
            self.announce_game_over();
        }
    }

    fn announce_game_over(&self) {
        if let Some(winner) = self.state.winner {
            tracing::info!(%winner, nonce = self.state.nonce, "game over");
            self.events.publish(Event::Turn(TurnEvent::GameOver {
                winner,
                nonce: self.state.nonce,
            }));
        }
    }
}
