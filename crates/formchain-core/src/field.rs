//! Focusable capability and the per-container arena of live fields.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use bitflags::bitflags;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::error::{FocusError, Result};

/// Capability every chain participant implements.
///
/// Both calls are requests to the host. Their effect is observed later
/// through the container's focus/blur notifications, never through a return
/// value.
pub trait Focusable {
    fn focus(&self);
    fn blur(&self);
}

slotmap::new_key_type! {
    /// Versioned slot key; stays dead once its field is unmounted.
    pub struct FieldKey;
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FieldFlags: u8 {
        const FOCUSED = 1;
        const LAID_OUT = 1 << 1;
    }
}

/// Identifies one live field instance of a form.
///
/// Handles are produced by the bind step of a render and compared by slot
/// only; the name is informational and may change between renders.
#[derive(Clone)]
pub struct FieldHandle {
    key: FieldKey,
    name: Rc<str>,
}

impl FieldHandle {
    pub fn key(&self) -> FieldKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for FieldHandle {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FieldHandle {}

impl Hash for FieldHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for FieldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldHandle")
            .field("name", &self.name)
            .field("key", &self.key)
            .finish()
    }
}

struct FieldSlot {
    name: Rc<str>,
    target: Option<Rc<dyn Focusable>>,
    layout_offset: f32,
    flags: FieldFlags,
}

/// Chain position input for [`FieldRegistry::sync`].
pub struct MountedField {
    pub name: String,
    pub target: Option<Rc<dyn Focusable>>,
}

fn same_target(a: &Option<Rc<dyn Focusable>>, b: &Option<Rc<dyn Focusable>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Arena of the fields currently mounted in one form.
#[derive(Default)]
pub struct FieldRegistry {
    slots: SlotMap<FieldKey, FieldSlot>,
    /// Slot keys by forward chain position.
    order: SmallVec<[FieldKey; 8]>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the arena with the chain of the current render.
    ///
    /// Position `i` keeps the slot it had last render as long as the same
    /// widget is still there, so its cached layout offset and focus state
    /// survive re-renders. A different widget at that position gets a fresh
    /// slot, starting blurred and not laid out. Slots past the new chain are
    /// unmounted.
    pub fn sync(&mut self, fields: Vec<MountedField>) -> SmallVec<[FieldHandle; 8]> {
        let mut handles = SmallVec::with_capacity(fields.len());

        for (position, field) in fields.into_iter().enumerate() {
            let name: Rc<str> = Rc::from(field.name);
            let reused = self.order.get(position).copied().filter(|&key| {
                self.slots
                    .get(key)
                    .is_some_and(|slot| same_target(&slot.target, &field.target))
            });
            let key = match reused {
                Some(key) => {
                    if let Some(slot) = self.slots.get_mut(key) {
                        slot.name = name.clone();
                    }
                    key
                }
                None => {
                    let key = self.slots.insert(FieldSlot {
                        name: name.clone(),
                        target: field.target,
                        layout_offset: 0.0,
                        flags: FieldFlags::empty(),
                    });
                    match self.order.get_mut(position) {
                        Some(old) => {
                            if let Some(slot) = self.slots.remove(*old) {
                                log::trace!("`{}` replaced at position {position}", slot.name);
                            }
                            *old = key;
                        }
                        None => self.order.push(key),
                    }
                    key
                }
            };
            handles.push(FieldHandle { key, name });
        }

        let keep = handles.len();
        for key in self.order.drain(keep..) {
            if let Some(slot) = self.slots.remove(key) {
                log::trace!("unmounted field `{}`", slot.name);
            }
        }

        handles
    }

    /// Live focus target behind `handle`.
    pub fn resolve(&self, handle: &FieldHandle) -> Result<Rc<dyn Focusable>> {
        let slot = self
            .slots
            .get(handle.key)
            .ok_or_else(|| FocusError::MissingHandle(handle.name.to_string()))?;
        slot.target
            .clone()
            .ok_or_else(|| FocusError::CapabilityMismatch(slot.name.to_string()))
    }

    /// Last reported vertical offset.
    ///
    /// `None` for an unmounted field and for one that has not been laid out
    /// yet; callers treat both as offset 0.
    pub fn layout_offset(&self, handle: &FieldHandle) -> Option<f32> {
        self.slots
            .get(handle.key)
            .filter(|s| s.flags.contains(FieldFlags::LAID_OUT))
            .map(|s| s.layout_offset)
    }

    /// Overwrites the cached offset. Returns false for an unmounted field.
    pub fn record_layout(&mut self, handle: &FieldHandle, offset: f32) -> bool {
        match self.slots.get_mut(handle.key) {
            Some(slot) => {
                slot.layout_offset = offset;
                slot.flags.insert(FieldFlags::LAID_OUT);
                true
            }
            None => false,
        }
    }

    pub fn flags(&self, handle: &FieldHandle) -> Option<FieldFlags> {
        self.slots.get(handle.key).map(|s| s.flags)
    }

    /// Moves the field's state machine to `focused`.
    ///
    /// `Ok(true)` when the state changed, `Ok(false)` when the field was
    /// already in that state.
    pub fn transition(&mut self, handle: &FieldHandle, focused: bool) -> Result<bool> {
        let slot = self
            .slots
            .get_mut(handle.key)
            .ok_or_else(|| FocusError::MissingHandle(handle.name.to_string()))?;
        let was = slot.flags.contains(FieldFlags::FOCUSED);
        slot.flags.set(FieldFlags::FOCUSED, focused);
        Ok(was != focused)
    }

    pub fn is_focused(&self, handle: &FieldHandle) -> bool {
        self.flags(handle)
            .is_some_and(|f| f.contains(FieldFlags::FOCUSED))
    }

    /// Handles of all mounted fields in chain order.
    pub fn handles(&self) -> impl Iterator<Item = FieldHandle> + '_ {
        self.order.iter().filter_map(|&key| {
            self.slots.get(key).map(|slot| FieldHandle {
                key,
                name: slot.name.clone(),
            })
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl Focusable for Noop {
        fn focus(&self) {}
        fn blur(&self) {}
    }

    fn targets(n: usize) -> Vec<Rc<dyn Focusable>> {
        (0..n).map(|_| Rc::new(Noop) as Rc<dyn Focusable>).collect()
    }

    fn mounted(targets: &[Rc<dyn Focusable>]) -> Vec<MountedField> {
        let n = targets.len();
        targets
            .iter()
            .enumerate()
            .map(|(i, t)| MountedField {
                name: format!("input{}", n - i),
                target: Some(t.clone()),
            })
            .collect()
    }

    #[test]
    fn sync_keeps_slots_by_position() {
        let mut reg = FieldRegistry::new();
        let t = targets(3);
        let first = reg.sync(mounted(&t[..2]));
        assert!(reg.record_layout(&first[0], 40.0));

        let second = reg.sync(mounted(&t));
        assert_eq!(second[0], first[0]);
        assert_eq!(second[0].name(), "input3");
        assert_eq!(reg.layout_offset(&second[0]), Some(40.0));
        assert_eq!(reg.layout_offset(&second[2]), None);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn shrinking_chain_unmounts_tail() {
        let mut reg = FieldRegistry::new();
        let t = targets(2);
        let before = reg.sync(mounted(&t));
        let after = reg.sync(mounted(&t[..1]));

        assert_eq!(after.len(), 1);
        assert_eq!(after[0], before[0]);
        assert_eq!(
            reg.resolve(&before[1]).err(),
            Some(FocusError::MissingHandle("input1".into()))
        );
        assert!(!reg.record_layout(&before[1], 10.0));
    }

    #[test]
    fn different_widget_at_a_position_starts_fresh() {
        let mut reg = FieldRegistry::new();
        let t = targets(2);
        let before = reg.sync(mounted(&t));
        assert!(reg.record_layout(&before[0], 300.0));
        assert_eq!(reg.transition(&before[0], true), Ok(true));

        // First widget removed; the second one moves up to position 0.
        let after = reg.sync(mounted(&t[1..]));
        assert_ne!(after[0], before[0]);
        assert!(!reg.is_focused(&after[0]));
        assert_eq!(reg.layout_offset(&after[0]), None);
        assert_eq!(reg.flags(&after[0]), Some(FieldFlags::empty()));
        assert!(reg.resolve(&before[0]).is_err());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn field_without_target_is_a_capability_mismatch() {
        let mut reg = FieldRegistry::new();
        let handles = reg.sync(vec![MountedField {
            name: "input1".into(),
            target: None,
        }]);
        assert_eq!(
            reg.resolve(&handles[0]).err(),
            Some(FocusError::CapabilityMismatch("input1".into()))
        );
    }

    #[test]
    fn transition_reports_state_changes_only() {
        let mut reg = FieldRegistry::new();
        let h = reg.sync(mounted(&targets(1)));
        assert_eq!(reg.transition(&h[0], true), Ok(true));
        assert_eq!(reg.transition(&h[0], true), Ok(false));
        assert!(reg.is_focused(&h[0]));
        assert_eq!(reg.transition(&h[0], false), Ok(true));
        assert!(!reg.is_focused(&h[0]));
    }
}
