//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in as explicit `now_ms` arguments
//! - Randomness only through seeded or injected sources
//! - No rendering or platform dependencies

pub mod puzzle;
pub mod session;
pub mod shake;
pub mod state;
pub mod timer;

pub use puzzle::{Puzzle, RngShuffler, ScriptedShuffler, Shuffler, is_sorted, shuffle};
pub use shake::{ShakeAnimator, ShakeMode, ShakeOffset};
pub use state::{ButtonLabel, GameEvent, GamePhase, GameSession};
pub use timer::{Stopwatch, ZERO_DISPLAY, format_elapsed};
