use std::fmt;
use std::rc::Rc;

use taffy::AlignSelf;

use crate::{Child, Modifier};

/// Decides which children join the focus chain.
#[derive(Clone, Default)]
pub enum FocusPredicate {
    /// Children that carry the explicit capability marker.
    #[default]
    Marker,
    /// Children that declare a value, marked or not.
    HasValue,
    /// Children whose declared kind is in the list.
    AllowList(Vec<String>),
    Custom(Rc<dyn Fn(&Child) -> bool>),
}

impl FocusPredicate {
    pub fn custom(f: impl Fn(&Child) -> bool + 'static) -> Self {
        FocusPredicate::Custom(Rc::new(f))
    }

    pub fn allow<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FocusPredicate::AllowList(kinds.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, child: &Child) -> bool {
        match self {
            FocusPredicate::Marker => child.focusable,
            FocusPredicate::HasValue => child.value.is_some(),
            FocusPredicate::AllowList(kinds) => kinds.iter().any(|k| *k == child.kind),
            FocusPredicate::Custom(f) => f(child),
        }
    }
}

impl fmt::Debug for FocusPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusPredicate::Marker => write!(f, "Marker"),
            FocusPredicate::HasValue => write!(f, "HasValue"),
            FocusPredicate::AllowList(kinds) => f.debug_tuple("AllowList").field(kinds).finish(),
            FocusPredicate::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}

/// Every option a form container recognizes.
#[derive(Clone, Debug, Default)]
pub struct FormConfig {
    pub focus_predicate: FocusPredicate,
    /// Merged over [`FormConfig::container_modifier`].
    pub style: Modifier,
    /// Height of the trailing spacer. `None` leaves the platform default.
    pub trailing_spacer: Option<f32>,
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn focus_predicate(mut self, p: FocusPredicate) -> Self {
        self.focus_predicate = p;
        self
    }
    pub fn style(mut self, m: Modifier) -> Self {
        self.style = m;
        self
    }
    pub fn trailing_spacer(mut self, height: f32) -> Self {
        self.trailing_spacer = Some(height.max(0.0));
        self
    }

    /// The container's own layout: fill the parent and stretch across it.
    pub fn container_modifier() -> Modifier {
        Modifier::new().flex_grow(1.0).align_self(AlignSelf::Stretch)
    }

    pub fn resolved_style(&self) -> Modifier {
        Self::container_modifier().then(&self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates() {
        let text = Child::new("Text").label("Sign up");
        let marked = Child::new("InlineTextInput").focusable();
        let valued = Child::new("Custom").value("");

        assert!(!FocusPredicate::Marker.matches(&text));
        assert!(FocusPredicate::Marker.matches(&marked));
        assert!(FocusPredicate::HasValue.matches(&valued));
        assert!(!FocusPredicate::HasValue.matches(&marked));

        let allow = FocusPredicate::allow(["Custom"]);
        assert!(allow.matches(&valued));
        assert!(!allow.matches(&marked));

        let custom = FocusPredicate::custom(|c| c.label.is_some());
        assert!(custom.matches(&text));
    }

    #[test]
    fn user_style_is_merged_over_the_container_style() {
        let cfg = FormConfig::new().style(Modifier::new().padding(8.0));
        let m = cfg.resolved_style();
        assert_eq!(m.flex_grow, Some(1.0));
        assert_eq!(m.align_self, Some(AlignSelf::Stretch));
        assert!(m.padding.is_some());
    }
}
