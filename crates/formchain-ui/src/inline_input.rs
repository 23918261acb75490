use std::rc::Rc;

use formchain_core::*;

use crate::input::{FieldView, HAIRLINE_WIDTH, Hook, Icons, ReturnKey};

pub const INLINE_PADDING: f32 = 6.0;

/// Single-row field: bold title on the left, input filling the rest.
#[derive(Clone)]
pub struct InlineTextInput {
    pub title: String,
    pub value: Option<String>,
    pub valid: bool,
    pub touched: bool,
    pub message: Option<String>,
    pub icons: Icons,
    pub multiline: bool,
    pub on_focus: Option<Hook>,
    pub on_blur: Option<Hook>,
}

impl Default for InlineTextInput {
    fn default() -> Self {
        Self {
            title: "Use title prop".into(),
            value: None,
            valid: false,
            touched: false,
            message: None,
            icons: Icons::default(),
            multiline: false,
            on_focus: None,
            on_blur: None,
        }
    }
}

impl InlineTextInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
    pub fn value(mut self, v: impl Into<String>) -> Self {
        self.value = Some(v.into());
        self
    }
    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }
    pub fn touched(mut self, touched: bool) -> Self {
        self.touched = touched;
        self
    }
    pub fn message(mut self, m: impl Into<String>) -> Self {
        self.message = Some(m.into());
        self
    }
    pub fn icons(mut self, icons: Icons) -> Self {
        self.icons = icons;
        self
    }
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }
    pub fn on_focus(mut self, f: impl Fn() + 'static) -> Self {
        self.on_focus = Some(Rc::new(f));
        self
    }
    pub fn on_blur(mut self, f: impl Fn() + 'static) -> Self {
        self.on_blur = Some(Rc::new(f));
        self
    }

    /// Validation message is shown once the user has touched an invalid field.
    pub fn should_display_message(&self) -> bool {
        self.touched && !self.valid && self.message.as_deref().is_some_and(|m| !m.is_empty())
    }

    pub fn to_child(&self, target: Option<Rc<dyn Focusable>>) -> Child {
        let mut c = Child::new("InlineTextInput").label(self.title.clone()).focusable();
        c.value = self.value.clone();
        c.target = target;
        c
    }

    pub fn bind(
        &self,
        binding: FieldBinding,
        target: Option<Rc<dyn Focusable>>,
    ) -> FieldView {
        let show_message = self.should_display_message();
        FieldView {
            kind: "InlineTextInput",
            title: self.title.clone(),
            value: self.value.clone(),
            return_key: ReturnKey::for_field(self.multiline, !binding.is_last()),
            icon: self
                .icons
                .pick(self.value.as_deref(), self.valid)
                .map(str::to_string),
            message: show_message.then(|| self.message.clone()).flatten(),
            border_bottom: if binding.is_last() { HAIRLINE_WIDTH } else { 0.0 },
            padding_bottom: if show_message { 0.0 } else { INLINE_PADDING },
            binding,
            target,
            on_focus: self.on_focus.clone(),
            on_blur: self.on_blur.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_needs_touch_and_invalid() {
        let base = InlineTextInput::new("Email").message("Not an email");
        assert!(!base.clone().should_display_message());
        assert!(base.clone().touched(true).should_display_message());
        assert!(!base.clone().touched(true).valid(true).should_display_message());
        assert!(
            !InlineTextInput::new("Email")
                .touched(true)
                .message("")
                .should_display_message()
        );
    }

    #[test]
    fn child_carries_marker_and_value() {
        let c = InlineTextInput::new("Name").value("Ada").to_child(None);
        assert_eq!(c.kind, "InlineTextInput");
        assert!(c.focusable);
        assert_eq!(c.value.as_deref(), Some("Ada"));
        assert_eq!(InlineTextInput::default().title, "Use title prop");
    }
}
