use std::rc::Rc;

use formchain_core::*;

use crate::input::{FieldView, HAIRLINE_WIDTH, Hook, Icons, ReturnKey};

pub const LABELED_PADDING: f32 = 10.0;

/// Stacked field: small label above a bordered input.
#[derive(Clone)]
pub struct LabeledTextInput {
    pub label: String,
    pub value: Option<String>,
    pub valid: bool,
    pub message: Option<String>,
    pub icons: Icons,
    pub multiline: bool,
    pub on_focus: Option<Hook>,
    pub on_blur: Option<Hook>,
}

impl Default for LabeledTextInput {
    fn default() -> Self {
        Self {
            label: "Use label prop".into(),
            value: None,
            valid: false,
            message: None,
            icons: Icons::default(),
            multiline: false,
            on_focus: None,
            on_blur: None,
        }
    }
}

impl LabeledTextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
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

    /// No "touched" state here: any non-empty invalid value shows the message.
    pub fn should_display_message(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.is_empty())
            && !self.valid
            && self.message.as_deref().is_some_and(|m| !m.is_empty())
    }

    pub fn to_child(&self, target: Option<Rc<dyn Focusable>>) -> Child {
        let mut c = Child::new("LabeledTextInput").label(self.label.clone()).focusable();
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
            kind: "LabeledTextInput",
            title: self.label.clone(),
            value: self.value.clone(),
            return_key: ReturnKey::for_field(self.multiline, !binding.is_last()),
            icon: self
                .icons
                .pick(self.value.as_deref(), self.valid)
                .map(str::to_string),
            message: show_message.then(|| self.message.clone()).flatten(),
            border_bottom: if binding.is_last() { HAIRLINE_WIDTH } else { 0.0 },
            padding_bottom: if show_message { 0.0 } else { LABELED_PADDING },
            binding,
            target,
            on_focus: self.on_focus.clone(),
            on_blur: self.on_blur.clone(),
        }
    }
}
