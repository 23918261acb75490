//! # Scroll viewport
//!
//! `ScrollState` is the vertical scroll model behind a form. It stores the
//! viewport height, the content height and the current offset, and clamps
//! the offset whenever any of them changes.
//!
//! Two writers touch the offset:
//!
//! - the user dragging, through [`ScrollState::scroll_immediate`], which
//!   consumes what it can and returns the leftover for a parent scroller;
//! - the form's scroll sync, through the [`Viewport`] impl, which jumps to
//!   the focused field or back to the top.
//!
//! The offset is a `Signal<f32>`, so a renderer can subscribe to it:
//!
//! ```rust
//! use formchain_core::Viewport;
//! use formchain_ui::scroll::ScrollState;
//!
//! let state = ScrollState::new();
//! state.set_viewport_height(400.0);
//! state.set_content_height(1000.0);
//! state.scroll_to(900.0);
//! assert_eq!(state.get(), 600.0);
//! ```

use formchain_core::*;

pub struct ScrollState {
    scroll_offset: Signal<f32>,
    viewport_height: Signal<f32>,
    content_height: Signal<f32>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            scroll_offset: signal(0.0),
            viewport_height: signal(0.0),
            content_height: signal(0.0),
        }
    }

    pub fn set_viewport_height(&self, h: f32) {
        self.viewport_height.set(h.max(0.0));
        self.clamp_offset();
    }

    pub fn set_content_height(&self, h: f32) {
        self.content_height.set(h.max(0.0));
        self.clamp_offset();
    }

    fn max_offset(&self) -> f32 {
        (self.content_height.get() - self.viewport_height.get()).max(0.0)
    }

    pub fn set_offset(&self, off: f32) {
        let max_off = self.max_offset();
        self.scroll_offset.set(off.clamp(0.0, max_off));
    }

    fn clamp_offset(&self) {
        let max_off = self.max_offset();
        if self.scroll_offset.get() > max_off {
            self.scroll_offset.set(max_off);
        }
    }

    pub fn get(&self) -> f32 {
        self.scroll_offset.get()
    }

    /// Observe offset changes; returns the subscription id.
    pub fn on_offset_change(&self, f: impl Fn(f32) + 'static) -> SubId {
        self.scroll_offset.subscribe(move |v| f(*v))
    }

    /// Consume dy (pixels), clamp to bounds, return leftover.
    pub fn scroll_immediate(&self, dy: f32) -> f32 {
        let before = self.scroll_offset.get();
        let new_off = (before + dy).clamp(0.0, self.max_offset());
        self.scroll_offset.set(new_off);
        dy - (new_off - before)
    }
}

impl Viewport for ScrollState {
    fn scroll_to(&self, y: f32) {
        log::trace!("ScrollState::scroll_to({y})");
        self.set_offset(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sized(viewport: f32, content: f32) -> ScrollState {
        let s = ScrollState::new();
        s.set_viewport_height(viewport);
        s.set_content_height(content);
        s
    }

    #[test]
    fn scroll_to_clamps_into_content() {
        let s = sized(300.0, 800.0);
        s.scroll_to(120.0);
        assert_eq!(s.get(), 120.0);
        s.scroll_to(-5.0);
        assert_eq!(s.get(), 0.0);
        s.scroll_to(10_000.0);
        assert_eq!(s.get(), 500.0);
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let s = sized(300.0, 800.0);
        s.set_offset(450.0);
        s.set_content_height(500.0);
        assert_eq!(s.get(), 200.0);
    }

    #[test]
    fn drag_returns_leftover() {
        let s = sized(300.0, 400.0);
        assert_eq!(s.scroll_immediate(60.0), 0.0);
        assert_eq!(s.scroll_immediate(60.0), 20.0);
        assert_eq!(s.get(), 100.0);
    }

    #[test]
    fn offset_changes_are_observable() {
        let s = sized(300.0, 800.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            s.on_offset_change(move |y| seen.borrow_mut().push(y));
        }
        s.scroll_to(40.0);
        s.scroll_to(0.0);
        assert_eq!(*seen.borrow(), vec![40.0, 0.0]);
    }
}
