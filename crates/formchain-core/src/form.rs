//! Form container state: binds a render's chain to live field handles and
//! routes field notifications to the coordinator and the scroll sync.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::chain::{ChainBuilder, ChainNode};
use crate::field::{FieldHandle, FieldRegistry, MountedField};
use crate::{Child, FocusCoordinator, FormConfig, HandoffFlag, ScrollSync, Viewport};

pub type AdvanceCallback = Rc<dyn Fn(Option<&FieldHandle>, &FieldHandle)>;
pub type FieldCallback = Rc<dyn Fn(&FieldHandle)>;
pub type LayoutCallback = Rc<dyn Fn(&FieldHandle, f32)>;

/// Container callbacks injected into every chained field.
#[derive(Clone)]
pub struct FieldCallbacks {
    pub on_next_input_focus: AdvanceCallback,
    pub post_focus: FieldCallback,
    pub post_blur: FieldCallback,
    pub on_layout: LayoutCallback,
}

impl FieldCallbacks {
    fn bound_to(form: &Rc<FormState>) -> Self {
        let on_next_input_focus: AdvanceCallback = {
            let form = Rc::downgrade(form);
            Rc::new(move |next: Option<&FieldHandle>, current: &FieldHandle| {
                with_form(&form, |f| f.advance(next, current))
            })
        };
        let post_focus: FieldCallback = {
            let form = Rc::downgrade(form);
            Rc::new(move |field: &FieldHandle| with_form(&form, |f| f.field_focused(field)))
        };
        let post_blur: FieldCallback = {
            let form = Rc::downgrade(form);
            Rc::new(move |field: &FieldHandle| with_form(&form, |f| f.field_blurred(field)))
        };
        let on_layout: LayoutCallback = {
            let form = Rc::downgrade(form);
            Rc::new(move |field: &FieldHandle, y: f32| {
                with_form(&form, |f| f.field_layout(field, y))
            })
        };
        Self {
            on_next_input_focus,
            post_focus,
            post_blur,
            on_layout,
        }
    }
}

fn with_form(form: &Weak<FormState>, f: impl FnOnce(&FormState)) {
    match form.upgrade() {
        Some(form) => f(&form),
        None => log::debug!("field callback after its form was dropped"),
    }
}

/// What a chained field receives from its container for one render.
#[derive(Clone)]
pub struct FieldBinding {
    pub name: String,
    pub handle: FieldHandle,
    pub next: Option<FieldHandle>,
    pub callbacks: FieldCallbacks,
}

impl FieldBinding {
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// The field's submit/advance action fired.
    pub fn submit(&self) {
        (self.callbacks.on_next_input_focus)(self.next.as_ref(), &self.handle)
    }

    /// Native focus confirmed.
    pub fn focused(&self) {
        (self.callbacks.post_focus)(&self.handle)
    }

    /// Native blur confirmed.
    pub fn blurred(&self) {
        (self.callbacks.post_blur)(&self.handle)
    }

    pub fn layout(&self, y: f32) {
        (self.callbacks.on_layout)(&self.handle, y)
    }
}

impl fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("handle", &self.handle)
            .field("next", &self.next)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub enum BoundChild {
    Passthrough(Child),
    Field { child: Child, binding: FieldBinding },
}

impl BoundChild {
    pub fn child(&self) -> &Child {
        match self {
            BoundChild::Passthrough(c) | BoundChild::Field { child: c, .. } => c,
        }
    }

    pub fn binding(&self) -> Option<&FieldBinding> {
        match self {
            BoundChild::Field { binding, .. } => Some(binding),
            BoundChild::Passthrough(_) => None,
        }
    }
}

/// Instance state of one form container.
///
/// Owns the hand-off flag; nothing here is shared between forms.
pub struct FormState {
    config: FormConfig,
    builder: ChainBuilder,
    fields: Rc<RefCell<FieldRegistry>>,
    handoff: Rc<HandoffFlag>,
    coordinator: FocusCoordinator,
    scroll: ScrollSync,
}

impl FormState {
    pub fn new(config: FormConfig, viewport: Rc<dyn Viewport>) -> Rc<Self> {
        let fields = Rc::new(RefCell::new(FieldRegistry::new()));
        let handoff = Rc::new(HandoffFlag::new());
        Rc::new(Self {
            builder: ChainBuilder::new(config.focus_predicate.clone()),
            coordinator: FocusCoordinator::new(handoff.clone(), fields.clone()),
            scroll: ScrollSync::new(handoff.clone(), viewport, fields.clone()),
            config,
            fields,
            handoff,
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Build this render's chain and bind it to live handles.
    ///
    /// The output matches `children` in length and order.
    pub fn render(self: &Rc<Self>, children: &[Child]) -> Vec<BoundChild> {
        let chain = self.builder.build(children);

        let mounted: Vec<MountedField> = chain
            .entries()
            .map(|e| MountedField {
                name: e.name.clone(),
                target: e.child.target.clone(),
            })
            .collect();
        let handles = self.fields.borrow_mut().sync(mounted);
        log::trace!("rendered form with {} chained fields", handles.len());

        // Render index -> chain position, to resolve `next` into a handle.
        let mut position_at = vec![None; children.len()];
        for e in chain.entries() {
            position_at[e.index] = Some(e.position);
        }

        let callbacks = FieldCallbacks::bound_to(self);
        chain
            .into_nodes()
            .into_iter()
            .map(|node| match node {
                ChainNode::Passthrough(child) => BoundChild::Passthrough(child),
                ChainNode::Field(entry) => {
                    let next = entry
                        .next
                        .and_then(|i| position_at[i])
                        .map(|p| handles[p].clone());
                    BoundChild::Field {
                        binding: FieldBinding {
                            name: entry.name,
                            handle: handles[entry.position].clone(),
                            next,
                            callbacks: callbacks.clone(),
                        },
                        child: entry.child,
                    }
                }
            })
            .collect()
    }

    pub fn advance(&self, next: Option<&FieldHandle>, current: &FieldHandle) {
        self.coordinator.advance(next, current);
    }

    /// Focus-gained notification from the host.
    pub fn field_focused(&self, field: &FieldHandle) {
        let offset = {
            let mut fields = self.fields.borrow_mut();
            match fields.transition(field, true) {
                Ok(true) => fields.layout_offset(field).unwrap_or(0.0),
                Ok(false) => {
                    log::debug!("`{}` already focused", field.name());
                    return;
                }
                Err(err) => {
                    log::debug!("focus notification dropped: {err}");
                    return;
                }
            }
        };
        self.scroll.on_field_focus_gained(offset);
    }

    /// Focus-lost notification from the host.
    pub fn field_blurred(&self, field: &FieldHandle) {
        let changed = self.fields.borrow_mut().transition(field, false);
        match changed {
            Ok(true) => self.scroll.on_field_focus_lost(),
            Ok(false) => log::debug!("`{}` already blurred", field.name()),
            Err(err) => log::debug!("blur notification dropped: {err}"),
        }
    }

    pub fn field_layout(&self, field: &FieldHandle, y: f32) {
        self.scroll.on_field_layout(field, y);
    }

    pub fn layout_offset(&self, field: &FieldHandle) -> Option<f32> {
        self.fields.borrow().layout_offset(field)
    }

    pub fn is_focused(&self, field: &FieldHandle) -> bool {
        self.fields.borrow().is_focused(field)
    }

    pub fn focused_field(&self) -> Option<FieldHandle> {
        let fields = self.fields.borrow();
        fields.handles().find(|h| fields.is_focused(h))
    }

    pub fn handoff_pending(&self) -> bool {
        self.handoff.is_armed()
    }

    pub fn mounted_fields(&self) -> usize {
        self.fields.borrow().len()
    }
}
