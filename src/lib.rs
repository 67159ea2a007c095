//! Shake Sort - shake five bars until they land in order
//!
//! Core modules:
//! - `sim`: Deterministic game session (puzzle, shake, stopwatch, state machine)
//! - `renderer`: Canvas-style drawing of the bars and the action button
//! - `platform`: Browser bindings (DOM, scheduling, input)
//! - `settings`: Player preferences loaded at startup

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{GameEvent, GamePhase, GameSession, ShakeMode};

/// Game configuration constants
pub mod consts {
    /// Canonical unshuffled puzzle
    pub const BASELINE: [u32; 5] = [1, 2, 3, 4, 5];

    /// Minimum gap between accepted player inputs (ms)
    pub const DEFAULT_DEBOUNCE_MS: f64 = 1.0;
    /// Stopwatch display refresh period (ms)
    pub const TIMER_INTERVAL_MS: i32 = 10;

    /// Shake magnitude the jitter policy starts from (px)
    pub const SHAKE_INITIAL: f64 = 5.0;
    /// Per-frame growth of the jitter magnitude (px)
    pub const SHAKE_JITTER_GROWTH: f64 = 0.2;
    /// Offset added by each accepted input under impulse+decay (px)
    pub const SHAKE_IMPULSE: f64 = 5.0;
    /// Impulse seeded when a new game starts (px)
    pub const SHAKE_START_IMPULSE: f64 = 2.0;
    /// Hard cap on the shake offset (px)
    pub const SHAKE_CAP: f64 = 30.0;
    /// Multiplicative per-frame decay
    pub const SHAKE_DECAY: f64 = 0.9;
    /// Below this the offset snaps to zero (px)
    pub const SHAKE_SNAP: f64 = 0.1;

    /// Bar geometry (px)
    pub const BAR_WIDTH: f64 = 40.0;
    pub const BAR_SPACING: f64 = 10.0;
    pub const MAX_BAR_HEIGHT: f64 = 150.0;
    /// Bar height is value / BAR_SCALE * MAX_BAR_HEIGHT
    pub const BAR_SCALE: f64 = 7.0;
    /// Space under the bars reserved for the button
    pub const CANVAS_PADDING_BOTTOM: f64 = 50.0;

    /// Action button geometry (px)
    pub const BUTTON_WIDTH: f64 = 120.0;
    pub const BUTTON_HEIGHT: f64 = 40.0;
    pub const BUTTON_MARGIN_BOTTOM: f64 = 10.0;
}
