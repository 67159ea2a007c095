//! Draw command generation for one frame

use super::layout::{Layout, Rect};
use crate::sim::{GamePhase, GameSession};

/// Colors for game elements
pub mod colors {
    pub const BAR_FILL: &str = "#4CAF50";
    pub const BAR_STROKE: &str = "#333";
    /// Button while a game is running
    pub const BUTTON_ACTIVE: &str = "#FFC107";
    /// Button while waiting to start
    pub const BUTTON_IDLE: &str = "#2196F3";
    pub const BUTTON_TEXT: &str = "#fff";
}

pub const BUTTON_FONT: &str = "20px Arial";

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Rect),
    FillRect { rect: Rect, color: &'static str },
    StrokeRect { rect: Rect, color: &'static str },
    /// Text centered on (x, y) both horizontally and vertically
    Text {
        text: &'static str,
        x: f64,
        y: f64,
        font: &'static str,
        color: &'static str,
    },
}

/// Filled and outlined bars for the current puzzle
pub fn bars(session: &GameSession, layout: &Layout) -> Vec<DrawCmd> {
    let rects = layout.bar_rects(session.puzzle());
    let mut cmds = Vec::with_capacity(rects.len() * 2);
    for rect in rects {
        cmds.push(DrawCmd::FillRect {
            rect,
            color: colors::BAR_FILL,
        });
        cmds.push(DrawCmd::StrokeRect {
            rect,
            color: colors::BAR_STROKE,
        });
    }
    cmds
}

/// Action button: color and label follow the phase
pub fn button(session: &GameSession, layout: &Layout) -> Vec<DrawCmd> {
    let rect = layout.button_rect();
    let fill = match session.phase() {
        GamePhase::Active => colors::BUTTON_ACTIVE,
        GamePhase::Idle => colors::BUTTON_IDLE,
    };
    let (cx, cy) = rect.center();
    vec![
        DrawCmd::FillRect { rect, color: fill },
        DrawCmd::Text {
            text: session.label().as_str(),
            x: cx,
            y: cy,
            font: BUTTON_FONT,
            color: colors::BUTTON_TEXT,
        },
    ]
}

/// Full frame: clear, bars, button
pub fn frame(session: &GameSession, layout: &Layout) -> Vec<DrawCmd> {
    let mut cmds = vec![DrawCmd::Clear(Rect::new(0.0, 0.0, layout.width, layout.height))];
    cmds.extend(bars(session, layout));
    cmds.extend(button(session, layout));
    cmds
}
