use std::fmt;
use std::rc::Rc;

use crate::field::Focusable;

/// One element of a form's ordered child sequence.
///
/// A child is never mutated by the form; chain construction clones it.
#[derive(Clone, Default)]
pub struct Child {
    /// Declared type name, e.g. `"Text"` or `"InlineTextInput"`.
    pub kind: String,
    pub label: Option<String>,
    pub value: Option<String>,
    /// Explicit capability marker.
    pub focusable: bool,
    pub target: Option<Rc<dyn Focusable>>,
}

impl Child {
    pub fn new(kind: impl Into<String>) -> Self {
        Child {
            kind: kind.into(),
            ..Default::default()
        }
    }
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
    pub fn focusable(mut self) -> Self {
        self.focusable = true;
        self
    }
    /// Marks the child focusable and attaches the widget behind it.
    pub fn focus_target(mut self, target: Rc<dyn Focusable>) -> Self {
        self.focusable = true;
        self.target = Some(target);
        self
    }
}

impl PartialEq for Child {
    fn eq(&self, other: &Self) -> bool {
        let same_target = match (&self.target, &other.target) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_target
            && self.kind == other.kind
            && self.label == other.label
            && self.value == other.value
            && self.focusable == other.focusable
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Child")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("value", &self.value)
            .field("focusable", &self.focusable)
            .field("target", &self.target.as_ref().map(|_| "<focusable>"))
            .finish()
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

    #[test]
    fn targets_compare_by_identity() {
        let t: Rc<dyn Focusable> = Rc::new(Noop);
        let a = Child::new("InlineTextInput").focus_target(t.clone());
        assert!(a.focusable);
        assert_eq!(a, a.clone());
        assert_ne!(a, Child::new("InlineTextInput").focus_target(Rc::new(Noop)));
        assert_ne!(a, Child::new("InlineTextInput").focusable());
    }

    #[test]
    fn debug_hides_target() {
        let c = Child::new("Text").focus_target(Rc::new(Noop));
        assert!(format!("{c:?}").contains("<focusable>"));
    }
}
