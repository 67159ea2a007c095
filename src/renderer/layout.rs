//! Canvas geometry for bars and the action button

use crate::consts::*;
use crate::sim::Puzzle;

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Edges inclusive, matching how the button has always been hit-tested
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Layout for a canvas of the given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Height of the bar drawn for `value`
    pub fn bar_height(value: u32) -> f64 {
        value as f64 / BAR_SCALE * MAX_BAR_HEIGHT
    }

    /// One bar per element, left to right, bottom-aligned, row centered
    pub fn bar_rects(&self, puzzle: &Puzzle) -> Vec<Rect> {
        let values = puzzle.values();
        let count = values.len() as f64;
        let total = (BAR_WIDTH + BAR_SPACING) * count - BAR_SPACING;
        let start_x = (self.width - total) / 2.0;
        let baseline_y = self.height - CANVAS_PADDING_BOTTOM;

        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let h = Self::bar_height(v);
                let x = start_x + i as f64 * (BAR_WIDTH + BAR_SPACING);
                Rect::new(x, baseline_y - h, BAR_WIDTH, h)
            })
            .collect()
    }

    pub fn button_rect(&self) -> Rect {
        Rect::new(
            (self.width - BUTTON_WIDTH) / 2.0,
            self.height - BUTTON_HEIGHT - BUTTON_MARGIN_BOTTOM,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    /// True if a canvas-relative point lands on the button
    pub fn hit_button(&self, x: f64, y: f64) -> bool {
        self.button_rect().contains(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_centered() {
        let layout = Layout::new(400.0, 300.0);
        let bars = layout.bar_rects(&Puzzle::baseline());
        assert_eq!(bars.len(), 5);
        // 5 * 50 - 10 = 240 wide, so the row starts at 80
        assert_eq!(bars[0].x, 80.0);
        let last = bars[4];
        assert_eq!(last.x + last.w, 320.0);
    }

    #[test]
    fn test_bar_heights_follow_values() {
        let layout = Layout::new(400.0, 300.0);
        let puzzle = Puzzle::from_values([5, 1, 2, 3, 4]).unwrap();
        let bars = layout.bar_rects(&puzzle);
        assert!(bars[0].h > bars[4].h);
        assert!((bars[0].h - 5.0 / 7.0 * 150.0).abs() < 1e-9);
        // All bars share the same bottom edge
        for bar in &bars {
            assert!((bar.y + bar.h - 250.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_button_hit() {
        let layout = Layout::new(400.0, 300.0);
        let btn = layout.button_rect();
        assert_eq!(btn, Rect::new(140.0, 250.0, 120.0, 40.0));
        assert!(layout.hit_button(200.0, 270.0));
        assert!(layout.hit_button(140.0, 250.0));
        assert!(layout.hit_button(260.0, 290.0));
        assert!(!layout.hit_button(139.0, 270.0));
        assert!(!layout.hit_button(200.0, 100.0));
    }
}
