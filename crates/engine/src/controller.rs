//! Session orchestration.
//!
//! [`GameController`] owns one [`BoardGenerator`], the countdown and the
//! current [`GameState`], and forwards every visible change to a [`Surface`].
//! It is driven from a single loop: input events go through
//! [`GameController::handle_input`] and elapsed time through
//! [`GameController::advance`]. Nothing runs on its own; the mismatch-hide and
//! end-of-game delays are countdowns consumed by `advance`.

use serde::Serialize;

use crate::config::GameConfig;
use crate::core::{
    BoardError, BoardGenerator, CountdownTimer, GameState, SelectionResult, TimerToken,
};
use crate::surface::Surface;
use crate::types::{
    CellPosition, InputEvent, TimerEvent, END_OF_GAME_MS, MESSAGE_MS, MISMATCH_HIDE_MS,
};

/// Where the controller is in the session cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Start prompt is showing; no grid.
    Ready,
    Playing,
    /// Summary is showing; input is ignored until the grid is torn down.
    Ending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    AllPairsFound,
    TimeUp,
}

/// Final numbers of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SessionSummary {
    pub reason: EndReason,
    pub score: u32,
    pub total_pairs: u32,
    pub attempts: u32,
    pub remaining_secs: u32,
}

impl SessionSummary {
    /// Text shown to the player when the session ends.
    pub fn message(&self) -> String {
        match self.reason {
            EndReason::AllPairsFound => format!(
                "All {} pairs found in {} attempts with {}s to spare!",
                self.total_pairs, self.attempts, self.remaining_secs
            ),
            EndReason::TimeUp => format!(
                "Time's up! You found {} of {} pairs in {} attempts.",
                self.score, self.total_pairs, self.attempts
            ),
        }
    }
}

pub struct GameController<S: Surface> {
    config: GameConfig,
    generator: BoardGenerator,
    surface: S,
    timer: CountdownTimer,
    timer_token: Option<TimerToken>,
    game: Option<GameState>,
    phase: Phase,
    /// Pending mismatch hide, in ms.
    hide_delay_ms: Option<u32>,
    /// Remaining end-of-game display, in ms.
    end_delay_ms: u32,
    last_summary: Option<SessionSummary>,
    sessions: u32,
}

impl<S: Surface> GameController<S> {
    pub fn new(config: GameConfig, generator: BoardGenerator, mut surface: S) -> Self {
        surface.set_start_visible(true);
        surface.set_time_remaining(config.time_limit_secs);
        let timer = CountdownTimer::new(config.time_limit_secs);
        Self {
            config,
            generator,
            surface,
            timer,
            timer_token: None,
            game: None,
            phase: Phase::Ready,
            hide_delay_ms: None,
            end_delay_ms: 0,
            last_summary: None,
            sessions: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn last_summary(&self) -> Option<&SessionSummary> {
        self.last_summary.as_ref()
    }

    /// Sessions started since the controller was created.
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Route one input event.
    ///
    /// Only [`InputEvent::Start`] can fail, when the configured grid cannot
    /// be dealt.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<(), BoardError> {
        match event {
            InputEvent::Start => self.start_session()?,
            InputEvent::CellActivated(pos) => self.select(pos),
            InputEvent::FocusLost => self.set_paused(true),
            InputEvent::FocusGained => self.set_paused(false),
        }
        self.flush_timer_events();
        Ok(())
    }

    /// Deal a new board and start the countdown. No-op outside `Ready`.
    pub fn start_session(&mut self) -> Result<(), BoardError> {
        if self.phase != Phase::Ready {
            return Ok(());
        }

        let board = match self.generator.generate(self.config.width, self.config.height) {
            Ok(board) => board,
            Err(err) => {
                tracing::warn!("cannot start session: {err}");
                return Err(err);
            }
        };
        let game = GameState::new(board);

        self.surface
            .create_grid(game.board().rows(), game.board().cols());
        self.surface.set_score(0, game.total_pairs());
        self.surface.set_start_visible(false);
        self.surface.set_paused(false);

        self.timer = CountdownTimer::new(self.config.time_limit_secs);
        self.surface.set_time_remaining(self.timer.remaining_secs());
        self.timer_token = self.timer.start();

        tracing::info!(
            rows = game.board().rows(),
            cols = game.board().cols(),
            time_limit = self.config.time_limit_secs,
            "session started"
        );

        self.game = Some(game);
        self.hide_delay_ms = None;
        self.phase = Phase::Playing;
        self.sessions += 1;
        self.flush_timer_events();
        Ok(())
    }

    /// Feed elapsed wall time into the pending delays and the countdown.
    pub fn advance(&mut self, elapsed_ms: u32) {
        match self.phase {
            Phase::Ready => {}
            Phase::Playing => {
                self.advance_hide_delay(elapsed_ms);
                self.timer.advance(elapsed_ms);
                self.flush_timer_events();
            }
            Phase::Ending => {
                self.end_delay_ms = self.end_delay_ms.saturating_sub(elapsed_ms);
                if self.end_delay_ms == 0 {
                    self.teardown();
                }
            }
        }
    }

    fn select(&mut self, pos: CellPosition) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let result = game.select_cell(pos);
        match result {
            SelectionResult::Ignored => {
                tracing::trace!(row = pos.row, col = pos.col, "selection ignored");
            }
            SelectionResult::AwaitingSecond { pos, symbol } => {
                self.surface.set_cell_content(pos, symbol);
                self.surface.set_cell_revealed(pos, true);
            }
            SelectionResult::Match {
                second,
                symbol,
                complete,
                ..
            } => {
                self.surface.set_cell_content(second, symbol);
                self.surface.set_cell_revealed(second, true);
                self.surface.set_score(game.score(), game.total_pairs());
                tracing::debug!(symbol, score = game.score(), "pair matched");
                if complete {
                    self.end_session(EndReason::AllPairsFound);
                }
            }
            SelectionResult::Mismatch { first, second } => {
                if let Some(symbol) = game.board().get(second) {
                    self.surface.set_cell_content(second, symbol);
                }
                self.surface.set_cell_revealed(second, true);
                self.hide_delay_ms = Some(MISMATCH_HIDE_MS);
                tracing::debug!(?first, ?second, "mismatch");
            }
        }
    }

    fn advance_hide_delay(&mut self, elapsed_ms: u32) {
        let Some(remaining) = self.hide_delay_ms else {
            return;
        };
        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining > 0 {
            self.hide_delay_ms = Some(remaining);
            return;
        }

        self.hide_delay_ms = None;
        if let Some(pair) = self.game.as_mut().and_then(GameState::clear_mismatch) {
            for pos in pair {
                self.surface.set_cell_revealed(pos, false);
            }
        }
    }

    fn set_paused(&mut self, paused: bool) {
        if self.phase != Phase::Playing || self.timer.is_paused() == paused {
            return;
        }
        if paused {
            self.timer.pause();
        } else {
            self.timer.resume();
        }
        // A finished timer ignores both; only report real changes.
        if self.timer.is_paused() == paused {
            self.surface.set_paused(paused);
            tracing::debug!(paused, "countdown focus change");
        }
    }

    fn flush_timer_events(&mut self) {
        while let Some(event) = self.timer.poll_event() {
            match event {
                TimerEvent::Tick(remaining) | TimerEvent::Reset(remaining) => {
                    self.surface.set_time_remaining(remaining);
                }
                TimerEvent::Finished => self.end_session(EndReason::TimeUp),
            }
        }
    }

    fn end_session(&mut self, reason: EndReason) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(game) = self.game.as_ref() else {
            return;
        };

        let summary = SessionSummary {
            reason,
            score: game.score(),
            total_pairs: game.total_pairs(),
            attempts: game.attempts(),
            remaining_secs: self.timer.remaining_secs(),
        };

        if let Some(token) = self.timer_token.take() {
            self.timer.stop(token);
        }
        self.hide_delay_ms = None;
        self.phase = Phase::Ending;
        self.end_delay_ms = END_OF_GAME_MS;

        self.surface.set_paused(false);
        self.surface.display_message(&summary.message(), MESSAGE_MS);
        tracing::info!(
            reason = ?summary.reason,
            score = summary.score,
            total_pairs = summary.total_pairs,
            attempts = summary.attempts,
            "session ended"
        );
        self.last_summary = Some(summary);
    }

    fn teardown(&mut self) {
        self.surface.remove_grid();
        self.surface.set_start_visible(true);
        self.game = None;
        self.phase = Phase::Ready;
    }
}
