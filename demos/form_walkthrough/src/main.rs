//! Drives a sign-up form with a simulated host: the return key moves focus
//! field by field and the scroll offset follows.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::{Context, ensure};
use formchain_core::*;
use formchain_ui::*;

enum Event {
    Focus(String),
    Blur(String),
}

/// Stands in for the platform's text-input system: one focused input at a
/// time, notifications delivered later from a queue.
#[derive(Default)]
struct Host {
    queue: RefCell<VecDeque<Event>>,
    focused: RefCell<Option<String>>,
}

impl Host {
    fn request_focus(&self, title: &str) {
        let mut focused = self.focused.borrow_mut();
        if focused.as_deref() == Some(title) {
            return;
        }
        let mut queue = self.queue.borrow_mut();
        if let Some(prev) = focused.take() {
            queue.push_back(Event::Blur(prev));
        }
        queue.push_back(Event::Focus(title.to_string()));
        *focused = Some(title.to_string());
    }

    fn request_blur(&self, title: &str) {
        let mut focused = self.focused.borrow_mut();
        if focused.as_deref() == Some(title) {
            *focused = None;
            self.queue.borrow_mut().push_back(Event::Blur(title.to_string()));
        }
    }

    fn pump(&self, view: &FormView) -> anyhow::Result<()> {
        loop {
            let Some(ev) = self.queue.borrow_mut().pop_front() else {
                return Ok(());
            };
            let (title, focus) = match &ev {
                Event::Focus(t) => (t, true),
                Event::Blur(t) => (t, false),
            };
            let field = view
                .fields()
                .find(|f| &f.title == title)
                .with_context(|| format!("no field titled {title}"))?;
            if focus {
                field.handle_focus();
            } else {
                field.handle_blur();
            }
        }
    }
}

struct HostField {
    title: String,
    host: Rc<Host>,
}

impl Focusable for HostField {
    fn focus(&self) {
        self.host.request_focus(&self.title);
    }
    fn blur(&self) {
        self.host.request_blur(&self.title);
    }
}

fn target(host: &Rc<Host>, title: &str) -> Rc<dyn Focusable> {
    Rc::new(HostField {
        title: title.to_string(),
        host: host.clone(),
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scroll = Rc::new(ScrollState::new());
    scroll.set_viewport_height(400.0);
    scroll.set_content_height(1200.0);
    scroll.on_offset_change(|y| log::info!("scroll offset -> {y}"));

    let host = Rc::new(Host::default());
    let state = FormState::new(FormConfig::new(), scroll.clone());

    let email_icons = Icons {
        icon: Some("mail".into()),
        valid: Some("mail-check".into()),
        invalid: Some("mail-alert".into()),
    };
    let items = vec![
        FormItem::Static(Child::new("Text").label("Create account")),
        FormItem::inline(InlineTextInput::new("Name").value("Ada"), target(&host, "Name")),
        FormItem::inline(
            InlineTextInput::new("Email")
                .value("ada@")
                .touched(true)
                .message("Enter a full address")
                .icons(email_icons),
            target(&host, "Email"),
        ),
        FormItem::labeled(
            LabeledTextInput::new("Password").value("correct horse").valid(true),
            target(&host, "Password"),
        ),
        FormItem::labeled(LabeledTextInput::new("Bio").multiline(), target(&host, "Bio")),
    ];

    let view = StatelessForm(&state, Platform::current(), items);
    log::debug!("{view:#?}");

    let fields: Vec<FieldView> = view.fields().cloned().collect();
    for (i, f) in fields.iter().enumerate() {
        f.handle_layout(60.0 + i as f32 * 110.0);
    }

    let first = fields.first().context("form has no fields")?;
    first.tap();
    host.pump(&view)?;

    for f in &fields {
        ensure!(
            state.is_focused(&f.binding.handle),
            "expected {} to hold focus",
            f.title
        );
        let expected = state.layout_offset(&f.binding.handle).unwrap_or(0.0);
        ensure!(scroll.get() == expected, "{} not scrolled into view", f.title);
        log::info!(
            "{} focused, return key {:?}, icon {:?}, message {:?}",
            f.title,
            f.return_key,
            f.icon,
            f.message
        );
        f.submit();
        host.pump(&view)?;
    }

    ensure!(state.focused_field().is_none(), "focus should be dismissed");
    ensure!(scroll.get() == 0.0, "form should scroll back to the top");
    log::info!("walked {} fields", fields.len());
    Ok(())
}
