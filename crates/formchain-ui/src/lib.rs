#![allow(non_snake_case)]
//! Form widgets on top of `formchain-core`.
//!
//! [`StatelessForm`] renders a list of [`FormItem`]s inside one vertical
//! container. Every text field it recognises is linked to the next one, so
//! the keyboard return key walks the form and the scroll position follows
//! the focused field.

pub mod inline_input;
pub mod input;
pub mod labeled_input;
pub mod scroll;

use std::rc::Rc;

use formchain_core::*;
use taffy::style::Style;

pub use inline_input::InlineTextInput;
pub use input::{FieldView, HAIRLINE_WIDTH, Icons, ReturnKey};
pub use labeled_input::LabeledTextInput;
pub use scroll::ScrollState;

/// Extra room below the last field so it can scroll above the keyboard.
pub const ANDROID_TRAILING_SPACER: f32 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Desktop
        }
    }
}

/// One entry of a form, as the host declares it.
pub enum FormItem {
    Inline(InlineTextInput, Option<Rc<dyn Focusable>>),
    Labeled(LabeledTextInput, Option<Rc<dyn Focusable>>),
    /// Anything else: headings, separators, custom rows.
    Static(Child),
}

impl FormItem {
    pub fn inline(input: InlineTextInput, target: Rc<dyn Focusable>) -> Self {
        FormItem::Inline(input, Some(target))
    }

    pub fn labeled(input: LabeledTextInput, target: Rc<dyn Focusable>) -> Self {
        FormItem::Labeled(input, Some(target))
    }

    fn to_child(&self) -> Child {
        match self {
            FormItem::Inline(i, t) => i.to_child(t.clone()),
            FormItem::Labeled(l, t) => l.to_child(t.clone()),
            FormItem::Static(c) => c.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum RenderedItem {
    Static(Child),
    Field(FieldView),
    /// A custom child the focus predicate picked up.
    Bound(Child, FieldBinding),
}

impl RenderedItem {
    pub fn binding(&self) -> Option<&FieldBinding> {
        match self {
            RenderedItem::Static(_) => None,
            RenderedItem::Field(v) => Some(&v.binding),
            RenderedItem::Bound(_, b) => Some(b),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FormView {
    pub style: Style,
    pub items: Vec<RenderedItem>,
    /// Height of the empty block after the last item.
    pub spacer: Option<f32>,
}

impl FormView {
    pub fn fields(&self) -> impl Iterator<Item = &FieldView> {
        self.items.iter().filter_map(|i| match i {
            RenderedItem::Field(v) => Some(v),
            _ => None,
        })
    }

    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields().find(|v| v.name() == name)
    }
}

/// Render `items` through `state`, linking each field to the next.
///
/// The form keeps no state of its own beyond what `state` holds, so calling
/// this again with new items is how a host re-renders.
pub fn StatelessForm(state: &Rc<FormState>, platform: Platform, items: Vec<FormItem>) -> FormView {
    let children: Vec<Child> = items.iter().map(FormItem::to_child).collect();
    let bound = state.render(&children);

    let items = items
        .into_iter()
        .zip(bound)
        .map(|(item, b)| match (item, b) {
            (FormItem::Inline(i, t), BoundChild::Field { binding, .. }) => {
                RenderedItem::Field(i.bind(binding, t))
            }
            (FormItem::Labeled(l, t), BoundChild::Field { binding, .. }) => {
                RenderedItem::Field(l.bind(binding, t))
            }
            (_, BoundChild::Field { child, binding }) => RenderedItem::Bound(child, binding),
            (_, BoundChild::Passthrough(child)) => RenderedItem::Static(child),
        })
        .collect();

    let config = state.config();
    let spacer = config.trailing_spacer.or(match platform {
        Platform::Android => Some(ANDROID_TRAILING_SPACER),
        Platform::Ios | Platform::Desktop => None,
    });

    FormView {
        style: config.resolved_style().to_style(),
        items,
        spacer,
    }
}
