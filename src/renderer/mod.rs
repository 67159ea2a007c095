//! 2D rendering module
//!
//! Frames are described as `DrawCmd` lists and replayed onto a `Surface`.
//! The browser implements `Surface` with a canvas 2D context; tests record.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod layout;
pub mod shapes;

pub use layout::{Layout, Rect};
pub use shapes::DrawCmd;

use crate::sim::{GameSession, ShakeOffset};

/// Drawing surface capability
pub trait Surface {
    fn clear(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn stroke_rect(&mut self, rect: Rect, color: &str);
    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str);

    fn draw(&mut self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::Clear(rect) => self.clear(*rect),
            DrawCmd::FillRect { rect, color } => self.fill_rect(*rect, color),
            DrawCmd::StrokeRect { rect, color } => self.stroke_rect(*rect, color),
            DrawCmd::Text {
                text,
                x,
                y,
                font,
                color,
            } => self.fill_text_centered(text, *x, *y, font, color),
        }
    }
}

/// Positional transform on the container holding the canvas
pub trait ShakeTarget {
    fn apply_shake(&mut self, offset: ShakeOffset);
}

/// One render-loop iteration: shake the container, then redraw everything.
///
/// Scheduling the next iteration is the caller's job.
pub fn render_frame(
    session: &mut GameSession,
    layout: &Layout,
    surface: &mut dyn Surface,
    target: &mut dyn ShakeTarget,
) -> ShakeOffset {
    let offset = session.advance_frame();
    target.apply_shake(offset);

    for cmd in shapes::frame(session, layout) {
        surface.draw(&cmd);
    }
    offset
}
