//! # Focus chains for form containers
//!
//! A form holds an ordered, mixed list of children: labels, spacers, and
//! fields. Formchain finds the focusable ones, links each to the next in
//! render order, and keeps the focused field visible in a scrolling
//! viewport.
//!
//! There are four pieces:
//!
//! - [`chain::build_chain`]: pure pass over the children that links every
//!   focusable child to the next one.
//! - [`FocusCoordinator`]: turns a field's "submit" into `focus()` on the
//!   next field, or `blur()` on the last one.
//! - [`ScrollSync`]: scrolls to the field that gained focus and back to
//!   the top on a real dismissal, but not in the middle of a hand-off.
//! - [`FormState`]: per-container state that binds each render's chain to
//!   live [`FieldHandle`]s and routes host notifications.
//!
//! ## A form render
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use formchain_core::*;
//!
//! struct Top(Cell<f32>);
//! impl Viewport for Top {
//!     fn scroll_to(&self, y: f32) {
//!         self.0.set(y);
//!     }
//! }
//!
//! let viewport = Rc::new(Top(Cell::new(-1.0)));
//! let form = FormState::new(FormConfig::new(), viewport.clone());
//!
//! let kids = vec![
//!     Child::new("Text").label("Account"),
//!     Child::new("InlineTextInput").label("Email").focusable(),
//!     Child::new("InlineTextInput").label("Password").focusable(),
//! ];
//! let bound = form.render(&kids);
//!
//! let email = bound[1].binding().unwrap();
//! let password = bound[2].binding().unwrap();
//! assert_eq!(email.next.as_ref(), Some(&password.handle));
//! assert!(password.is_last());
//!
//! password.layout(180.0);
//! password.focused();
//! assert_eq!(viewport.0.get(), 180.0);
//! ```
//!
//! ## Ordering of host notifications
//!
//! `focus()` and `blur()` are requests. The host later reports what
//! happened, in an order it does not promise: the blur of the old field may
//! arrive before or after the focus of the new one. The [`HandoffFlag`] is
//! armed before the focus request and cleared by whichever notification
//! comes first, so a hand-off produces at most one scroll-to-top decision.
//!
//! Everything runs on the host's single UI thread; state lives in `Rc`,
//! `RefCell` and `Cell`.

pub mod chain;
pub mod child;
pub mod config;
pub mod error;
pub mod field;
pub mod focus;
pub mod form;
pub mod modifier;
pub mod scroll;
pub mod signal;

pub use chain::{ChainBuilder, ChainEntry, ChainNode, build_chain};
pub use child::*;
pub use config::*;
pub use error::FocusError;
pub use field::{FieldFlags, FieldHandle, FieldKey, FieldRegistry, Focusable};
pub use focus::*;
pub use form::*;
pub use modifier::*;
pub use scroll::*;
pub use signal::*;
