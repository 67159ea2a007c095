//! Game state machine
//!
//! Idle --primary action--> Active --shuffle lands sorted--> Idle
//!
//! Every transition completes inside the callback that triggered it, so the
//! next rendered frame always sees a consistent session.

use super::shake::{ShakeMode, ShakeOffset};
use super::state::{ButtonLabel, GameEvent, GamePhase, GameSession};

impl GameSession {
    /// Apply tuning that can change between games
    pub fn configure(&mut self, shake_mode: ShakeMode, debounce_ms: f64, key_repeat_guard: bool) {
        if self.shake.mode() != shake_mode {
            self.shake.set_mode(shake_mode);
        }
        self.debounce_ms = debounce_ms.max(0.0);
        self.key_repeat_guard = key_repeat_guard;
        if !key_repeat_guard {
            self.key_held = false;
        }
    }

    /// The on-screen button was pressed. A sorted puzzle always restarts.
    pub fn on_primary_action(&mut self, now_ms: f64) {
        if self.phase == GamePhase::Idle || self.puzzle.is_sorted() {
            self.start(now_ms);
        } else {
            self.on_player_input(now_ms);
        }
    }

    /// A click landed on the canvas; `on_button` tells whether it hit the button
    pub fn on_click(&mut self, on_button: bool, now_ms: f64) {
        if on_button {
            self.on_primary_action(now_ms);
        } else if self.phase == GamePhase::Active {
            self.on_player_input(now_ms);
        }
    }

    /// Debounced reshuffle. Returns true when the input was accepted.
    pub fn on_player_input(&mut self, now_ms: f64) -> bool {
        if self.phase != GamePhase::Active {
            return false;
        }
        if let Some(last) = self.last_input_ms {
            if now_ms - last < self.debounce_ms {
                log::trace!("Input debounced ({:.1}ms since last)", now_ms - last);
                return false;
            }
        }
        self.last_input_ms = Some(now_ms);

        self.shuffler.shuffle(&mut self.puzzle);
        self.shuffles += 1;
        self.shake.on_input();
        self.events.push(GameEvent::Shuffled);
        log::debug!("Shuffle #{} -> {:?}", self.shuffles, self.puzzle.values());

        if self.puzzle.is_sorted() {
            self.win(now_ms);
        }
        true
    }

    /// Key pressed anywhere on the page
    pub fn on_key_down(&mut self, now_ms: f64) {
        if self.key_repeat_guard && self.key_held {
            return;
        }
        // Latch only on an accepted press; a debounced one leaves no trace
        if self.on_player_input(now_ms) && self.key_repeat_guard {
            self.key_held = true;
        }
    }

    /// Key released: clears the held latch only (plus jitter calm-down)
    pub fn on_key_up(&mut self) {
        self.key_held = false;
        self.shake.on_key_release();
    }

    /// Full reset to the baseline puzzle
    pub fn reset_to_initial(&mut self) {
        self.puzzle.reset();
        self.set_phase(GamePhase::Idle);
        self.timer.clear();
        self.shake.clear();
        self.last_input_ms = None;
        self.key_held = false;
        self.shuffles = 0;
        self.events.push(GameEvent::Reset);
        log::info!("Game reset");
    }

    /// Render-loop step: advance the shake and return this frame's transform
    pub fn advance_frame(&mut self) -> ShakeOffset {
        let unsettled = self.phase == GamePhase::Active && !self.puzzle.is_sorted();
        self.shake.advance(unsettled, &mut self.fx_rng)
    }

    /// Stopwatch interval step. Returns true when the display text changed.
    pub fn timer_tick(&mut self, now_ms: f64) -> bool {
        self.timer.tick(now_ms)
    }

    /// Phase change; the button label follows
    fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        self.label = ButtonLabel::for_phase(phase);
    }

    fn start(&mut self, now_ms: f64) {
        self.shuffler.shuffle(&mut self.puzzle);
        self.set_phase(GamePhase::Active);
        self.shuffles = 0;
        self.last_input_ms = None;
        self.timer.start(now_ms);
        self.shake.on_start();
        self.events.push(GameEvent::Started);
        log::info!(
            "Game started ({} shake): {:?}",
            self.shake.mode().as_str(),
            self.puzzle.values()
        );
    }

    fn win(&mut self, now_ms: f64) {
        let elapsed_ms = self.timer.stop(now_ms).unwrap_or(0.0);
        self.set_phase(GamePhase::Idle);
        self.shake.clear();
        self.events.push(GameEvent::Won {
            elapsed_ms,
            shuffles: self.shuffles,
        });
        log::info!(
            "Sorted in {} after {} shuffles",
            self.timer.display(),
            self.shuffles
        );
    }
}
