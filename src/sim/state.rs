//! Game session state
//!
//! One `GameSession` is created at startup and mutated in place by input
//! callbacks, the render loop and the stopwatch tick.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::puzzle::{Puzzle, RngShuffler, Shuffler};
use super::shake::{ShakeAnimator, ShakeMode};
use super::timer::Stopwatch;
use crate::consts::DEFAULT_DEBOUNCE_MS;

/// Current phase of play
///
/// Winning is instantaneous: it is reported as `GameEvent::Won` and the phase
/// goes straight back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for the primary action
    #[default]
    Idle,
    /// Puzzle shuffled, stopwatch running
    Active,
}

/// Text on the action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonLabel {
    #[default]
    Shuffle,
    Sort,
}

impl ButtonLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonLabel::Shuffle => "Shuffle!",
            ButtonLabel::Sort => "Sort!",
        }
    }

    pub fn for_phase(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Idle => ButtonLabel::Shuffle,
            GamePhase::Active => ButtonLabel::Sort,
        }
    }
}

/// Things the platform layer reacts to (sounds, logging, HUD)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Primary action started a new game
    Started,
    /// An accepted input reshuffled the puzzle
    Shuffled,
    /// A shuffle landed sorted
    Won { elapsed_ms: f64, shuffles: u32 },
    /// Explicit reset to the baseline
    Reset,
}

/// The single owned game session
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) puzzle: Puzzle,
    pub(crate) phase: GamePhase,
    pub(crate) label: ButtonLabel,
    pub(crate) shake: ShakeAnimator,
    pub(crate) timer: Stopwatch,
    /// Debounce clock: time of the last accepted input
    pub(crate) last_input_ms: Option<f64>,
    /// Key-held latch against auto-repeat
    pub(crate) key_held: bool,
    /// Accepted shuffles in the current game
    pub(crate) shuffles: u32,
    pub(crate) debounce_ms: f64,
    pub(crate) key_repeat_guard: bool,
    pub(crate) shuffler: Box<dyn Shuffler>,
    /// Visual-only randomness (shake signs)
    pub(crate) fx_rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("seed", &self.seed)
            .field("puzzle", &self.puzzle)
            .field("phase", &self.phase)
            .field("shake", &self.shake)
            .field("timer", &self.timer)
            .field("shuffles", &self.shuffles)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Create a session with a seeded uniform shuffler
    pub fn new(seed: u64) -> Self {
        Self::with_shuffler(seed, Box::new(RngShuffler::new(seed)))
    }

    /// Create a session with a caller-provided permutation source
    pub fn with_shuffler(seed: u64, shuffler: Box<dyn Shuffler>) -> Self {
        Self {
            seed,
            puzzle: Puzzle::baseline(),
            phase: GamePhase::Idle,
            label: ButtonLabel::Shuffle,
            shake: ShakeAnimator::new(ShakeMode::default()),
            timer: Stopwatch::new(),
            last_input_ms: None,
            key_held: false,
            shuffles: 0,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            key_repeat_guard: true,
            shuffler,
            // Separate stream so shake never perturbs shuffle outcomes
            fx_rng: Pcg32::seed_from_u64(seed ^ 0x5eed_5a4e),
            events: Vec::new(),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn label(&self) -> ButtonLabel {
        self.label
    }

    pub fn shake(&self) -> &ShakeAnimator {
        &self.shake
    }

    pub fn timer(&self) -> &Stopwatch {
        &self.timer
    }

    pub fn shuffles(&self) -> u32 {
        self.shuffles
    }

    pub fn key_held(&self) -> bool {
        self.key_held
    }

    pub fn debounce_ms(&self) -> f64 {
        self.debounce_ms
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
