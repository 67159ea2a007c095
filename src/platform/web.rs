//! Browser adapters: clock, container transform, timer readout

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::renderer::ShakeTarget;
use crate::sim::ShakeOffset;

/// Monotonic milliseconds (`performance.now()`), 0 if unavailable
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// The element wrapping the canvas, shaken by CSS transform
pub struct ContainerShake {
    el: Option<HtmlElement>,
    enabled: bool,
    /// Avoid restyling when nothing moved
    last: ShakeOffset,
}

impl ContainerShake {
    pub fn new(document: &Document, id: &str, enabled: bool) -> Self {
        let el = document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok());
        if el.is_none() {
            log::warn!("No #{} element - shake disabled", id);
        }
        Self {
            el,
            enabled,
            last: ShakeOffset::ZERO,
        }
    }
}

impl ShakeTarget for ContainerShake {
    fn apply_shake(&mut self, offset: ShakeOffset) {
        let offset = if self.enabled { offset } else { ShakeOffset::ZERO };
        if offset == self.last {
            return;
        }
        self.last = offset;
        if let Some(el) = &self.el {
            el.style()
                .set_property("transform", &offset.css_transform())
                .ok();
        }
    }
}

/// Text sink for the elapsed-time readout
pub struct TimerText {
    el: Option<Element>,
}

impl TimerText {
    pub fn new(document: &Document, id: &str) -> Self {
        let el = document.get_element_by_id(id);
        if el.is_none() {
            log::warn!("No #{} element - timer readout hidden", id);
        }
        Self { el }
    }

    pub fn set(&self, text: &str) {
        if let Some(el) = &self.el {
            el.set_text_content(Some(text));
        }
    }
}
