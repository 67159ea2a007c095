//! Container shake animation
//!
//! Two policies are supported:
//! - `Jitter`: while the puzzle is unsettled the magnitude creeps up every frame
//! - `ImpulseDecay`: each accepted input kicks the offset, frames decay it away
//!
//! Either way the offset stays within `[0, SHAKE_CAP]` and is zero whenever the
//! game is idle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Shake policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShakeMode {
    Jitter,
    #[default]
    ImpulseDecay,
}

impl ShakeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShakeMode::Jitter => "Jitter",
            ShakeMode::ImpulseDecay => "Impulse",
        }
    }
}

/// Positional transform for one frame (px)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShakeOffset {
    pub x: f64,
    pub y: f64,
}

impl ShakeOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// CSS `transform` value for the container
    pub fn css_transform(&self) -> String {
        if self.is_zero() {
            "none".to_string()
        } else {
            format!("translate({}px, {}px)", self.x, self.y)
        }
    }
}

/// Scalar shake state advanced once per rendered frame
#[derive(Debug, Clone)]
pub struct ShakeAnimator {
    mode: ShakeMode,
    offset: f64,
}

impl ShakeAnimator {
    pub fn new(mode: ShakeMode) -> Self {
        Self { mode, offset: 0.0 }
    }

    pub fn mode(&self) -> ShakeMode {
        self.mode
    }

    /// Switch policy; any running shake is dropped
    pub fn set_mode(&mut self, mode: ShakeMode) {
        self.mode = mode;
        self.offset = 0.0;
    }

    /// Current magnitude
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Fresh game: make the shake visible immediately
    pub fn on_start(&mut self) {
        self.offset = match self.mode {
            ShakeMode::Jitter => SHAKE_INITIAL,
            ShakeMode::ImpulseDecay => (self.offset + SHAKE_START_IMPULSE).min(SHAKE_CAP),
        };
    }

    /// Accepted player input
    pub fn on_input(&mut self) {
        if self.mode == ShakeMode::ImpulseDecay {
            self.offset = (self.offset + SHAKE_IMPULSE).min(SHAKE_CAP);
        }
    }

    /// Key released: jitter calms back down to its starting magnitude
    pub fn on_key_release(&mut self) {
        if self.mode == ShakeMode::Jitter && self.offset > 0.0 {
            self.offset = SHAKE_INITIAL;
        }
    }

    pub fn clear(&mut self) {
        self.offset = 0.0;
    }

    /// Advance one frame and return the transform to apply.
    ///
    /// `unsettled` is false once the game is idle or the puzzle is sorted; the
    /// offset snaps to zero in that case.
    pub fn advance<R: Rng + ?Sized>(&mut self, unsettled: bool, rng: &mut R) -> ShakeOffset {
        if !unsettled {
            self.offset = 0.0;
            return ShakeOffset::ZERO;
        }

        let magnitude = match self.mode {
            ShakeMode::Jitter => {
                self.offset = (self.offset + SHAKE_JITTER_GROWTH).min(SHAKE_CAP);
                self.offset
            }
            ShakeMode::ImpulseDecay => {
                let current = self.offset;
                self.offset *= SHAKE_DECAY;
                if self.offset < SHAKE_SNAP {
                    self.offset = 0.0;
                }
                current
            }
        };

        if magnitude == 0.0 {
            return ShakeOffset::ZERO;
        }

        let sx = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        ShakeOffset {
            x: sx * magnitude,
            y: sy * magnitude,
        }
    }
}
