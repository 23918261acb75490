use std::cell::RefCell;
use std::rc::Rc;

use crate::field::{FieldHandle, FieldRegistry};
use crate::focus::HandoffFlag;

/// Anything that can be scrolled vertically.
pub trait Viewport {
    /// Fire-and-forget scroll request.
    fn scroll_to(&self, y: f32);
}

/// Keeps the focused field in view.
///
/// The only writer of the viewport offset. Every call is an unconditional
/// `scroll_to`; the current offset is never read back.
pub struct ScrollSync {
    handoff: Rc<HandoffFlag>,
    viewport: Rc<dyn Viewport>,
    fields: Rc<RefCell<FieldRegistry>>,
}

impl ScrollSync {
    pub fn new(
        handoff: Rc<HandoffFlag>,
        viewport: Rc<dyn Viewport>,
        fields: Rc<RefCell<FieldRegistry>>,
    ) -> Self {
        Self {
            handoff,
            viewport,
            fields,
        }
    }

    /// A field gained focus; `offset` is its cached layout offset.
    pub fn on_field_focus_gained(&self, offset: f32) {
        self.handoff.clear();
        log::trace!("scroll to focused field at {offset}");
        self.viewport.scroll_to(offset);
    }

    /// A field lost focus. Resets to the top unless a hand-off is pending.
    pub fn on_field_focus_lost(&self) {
        if self.handoff.take() {
            log::trace!("blur during hand-off; keeping scroll position");
        } else {
            log::trace!("blur; scroll to top");
            self.viewport.scroll_to(0.0);
        }
    }

    /// Cache the field's latest vertical offset. Unmounted fields are ignored.
    pub fn on_field_layout(&self, field: &FieldHandle, offset: f32) {
        if !self.fields.borrow_mut().record_layout(field, offset) {
            log::debug!("layout for unmounted field `{}` ignored", field.name());
        }
    }
}
