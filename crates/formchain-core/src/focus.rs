use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::Result;
use crate::field::{FieldHandle, FieldRegistry};

/// Latch that suppresses one scroll-to-top reset during a hand-off.
///
/// Armed by [`FocusCoordinator`] right before it requests focus on the next
/// field; cleared by [`crate::ScrollSync`] on the next focus or blur
/// notification it observes. Not a counter: arming twice is the same as
/// arming once.
#[derive(Debug, Default)]
pub struct HandoffFlag(Cell<bool>);

impl HandoffFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&self) {
        self.0.set(true);
    }

    pub fn clear(&self) {
        self.0.set(false);
    }

    /// Read and clear.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }

    pub fn is_armed(&self) -> bool {
        self.0.get()
    }
}

/// Resolves a field's advance request into a focus or a blur.
pub struct FocusCoordinator {
    handoff: Rc<HandoffFlag>,
    fields: Rc<RefCell<FieldRegistry>>,
}

impl FocusCoordinator {
    pub fn new(handoff: Rc<HandoffFlag>, fields: Rc<RefCell<FieldRegistry>>) -> Self {
        Self { handoff, fields }
    }

    /// Field `current` was submitted.
    ///
    /// With a `next` field the hand-off flag is armed and `next` is asked to
    /// take focus; otherwise `current` is blurred without arming, so the
    /// viewport resets. A field that has been unmounted or has no focus
    /// target turns the request into a no-op.
    pub fn advance(&self, next: Option<&FieldHandle>, current: &FieldHandle) {
        let res = match next {
            Some(next) => self.hand_off(next),
            None => self.dismiss(current),
        };
        if let Err(err) = res {
            log::debug!("advance from `{}` dropped: {err}", current.name());
        }
    }

    fn hand_off(&self, next: &FieldHandle) -> Result<()> {
        // The registry borrow must end before calling out: hosts may deliver
        // the focus notification synchronously.
        let target = self.fields.borrow().resolve(next)?;
        self.handoff.arm();
        log::trace!("hand-off to `{}`", next.name());
        target.focus();
        Ok(())
    }

    fn dismiss(&self, current: &FieldHandle) -> Result<()> {
        let target = self.fields.borrow().resolve(current)?;
        log::trace!("`{}` is the last field; blurring", current.name());
        target.blur();
        Ok(())
    }
}
