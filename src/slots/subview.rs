//! Subview - Plain attachment slot.
//!
//! The value is added as a child of the resolved superview, which defaults
//! to the owner's [`SuperviewContainer::default_superview`].
//!
//! ```ignore
//! struct Card {
//!     view: View,
//!     title: Subview<Card, View>,
//!     badge: Subview<Card, View>,
//! }
//!
//! impl Enclosing for Card {
//!     fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
//!         slots.slot(&self.title).slot(&self.badge);
//!     }
//! }
//!
//! let card = enclose(Card {
//!     view: View::named("card"),
//!     title: Subview::new(View::named("title")).layout(LayoutOption::pin_top(8.0)),
//!     badge: Subview::with(|card: &Card| badge_for(&card.title.get())),
//! });
//! ```

use std::any::Any;

use crate::engine::{deep_resolve, Enclosed, Enclosing};

use super::slot::{slot_api, SlotCore};
use super::{Container, ReplaceBehavior, ViewLike};
use crate::view::View;

pub struct Subview<O, V, P = View> {
    core: SlotCore<O, V, P>,
}

slot_api!(Subview);

impl<O, V, P> Subview<O, V, P> {
    fn from_core(core: SlotCore<O, V, P>) -> Self {
        Self { core }
    }
}

impl<O, V, P> Subview<O, V, P>
where
    O: 'static,
    V: ViewLike + Clone + 'static,
    P: Container<V> + 'static,
{
    /// Replace the value using the slot's replace behavior.
    pub fn set(&self, new: V, owner: &O) {
        let behavior = self.core.on_replace.clone();
        self.replace(new, owner, &behavior);
    }

    /// Replace the value using `behavior`.
    ///
    /// The old value's effect runs first. Then `new` is installed, attached,
    /// configured and its own slots resolved. The new value's effect runs last.
    pub fn replace(&self, new: V, owner: &O, behavior: &ReplaceBehavior<V>) {
        if let Some(old) = self.core.peek() {
            behavior.on_old(&old);
        }
        tracing::debug!(slot = %self.core.name(), "replacing subview");

        self.core.install(new.clone());
        deep_resolve(self, owner);
        behavior.on_new(&new);
    }
}

impl<O, V, P> Enclosed for Subview<O, V, P>
where
    O: 'static,
    V: ViewLike + Clone + 'static,
    P: Container<V> + 'static,
{
    fn resolve_enclosing(&self, owner: &dyn Any) {
        let Some((owner, value)) = self.core.unattached(owner) else {
            return;
        };
        self.core.superview(owner).add_child(&value);
        self.core.configure_attached(&value, owner);
    }

    fn visit_wrapped(&self, visit: &mut dyn FnMut(&dyn Enclosing)) {
        self.core.visit_wrapped(visit);
    }

    fn slot_name(&self) -> &str {
        self.core.name()
    }
}
