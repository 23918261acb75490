//! Pieces shared by the text-field widgets.

use std::fmt;
use std::rc::Rc;

use formchain_core::*;

pub const HAIRLINE_WIDTH: f32 = 1.0;

pub type Hook = Rc<dyn Fn()>;

/// Soft-keyboard action label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnKey {
    /// Inserts a newline (multiline fields).
    Default,
    Next,
    Done,
}

impl ReturnKey {
    pub fn for_field(multiline: bool, has_next: bool) -> Self {
        if multiline {
            ReturnKey::Default
        } else if has_next {
            ReturnKey::Next
        } else {
            ReturnKey::Done
        }
    }
}

/// Base icon plus optional validity variants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Icons {
    pub icon: Option<String>,
    pub valid: Option<String>,
    pub invalid: Option<String>,
}

impl Icons {
    /// Icon to draw next to the field, if any.
    ///
    /// Validity variants only apply once the field has content.
    pub fn pick(&self, value: Option<&str>, valid: bool) -> Option<&str> {
        let base = self.icon.as_deref()?;
        if value.is_none_or(str::is_empty) {
            return Some(base);
        }
        let variant = if valid { &self.valid } else { &self.invalid };
        Some(variant.as_deref().unwrap_or(base))
    }
}

/// A field widget after the form bound it for this render.
///
/// Carries the resolved presentation and routes host events: user hooks
/// first, then the container's notification.
#[derive(Clone)]
pub struct FieldView {
    pub kind: &'static str,
    pub title: String,
    pub value: Option<String>,
    pub return_key: ReturnKey,
    pub icon: Option<String>,
    /// Set only while the message is shown.
    pub message: Option<String>,
    pub border_bottom: f32,
    pub padding_bottom: f32,
    pub binding: FieldBinding,
    pub(crate) target: Option<Rc<dyn Focusable>>,
    pub(crate) on_focus: Option<Hook>,
    pub(crate) on_blur: Option<Hook>,
}

impl FieldView {
    pub fn name(&self) -> &str {
        &self.binding.name
    }

    /// Row tapped: ask the host to focus the text input.
    pub fn tap(&self) {
        match &self.target {
            Some(t) => t.focus(),
            None => log::debug!("tap on `{}` with no focus target", self.name()),
        }
    }

    /// Keyboard return pressed.
    pub fn submit(&self) {
        self.binding.submit();
    }

    pub fn handle_focus(&self) {
        if let Some(f) = &self.on_focus {
            f();
        }
        self.binding.focused();
    }

    pub fn handle_blur(&self) {
        if let Some(f) = &self.on_blur {
            f();
        }
        self.binding.blurred();
    }

    pub fn handle_layout(&self, y: f32) {
        self.binding.layout(y);
    }
}

impl fmt::Debug for FieldView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldView")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("return_key", &self.return_key)
            .field("icon", &self.icon)
            .field("message", &self.message)
            .field("binding", &self.binding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_key() {
        assert_eq!(ReturnKey::for_field(true, true), ReturnKey::Default);
        assert_eq!(ReturnKey::for_field(false, true), ReturnKey::Next);
        assert_eq!(ReturnKey::for_field(false, false), ReturnKey::Done);
    }

    #[test]
    fn icon_selection() {
        let none = Icons::default();
        assert_eq!(none.pick(Some("x"), true), None);

        let base_only = Icons {
            icon: Some("mail".into()),
            ..Default::default()
        };
        assert_eq!(base_only.pick(Some("x"), false), Some("mail"));

        let all = Icons {
            icon: Some("mail".into()),
            valid: Some("check".into()),
            invalid: Some("cross".into()),
        };
        assert_eq!(all.pick(None, false), Some("mail"));
        assert_eq!(all.pick(Some(""), true), Some("mail"));
        assert_eq!(all.pick(Some("a@b"), true), Some("check"));
        assert_eq!(all.pick(Some("a@"), false), Some("cross"));
    }
}
