//! Child - Hierarchical attachment slot for controllers.
//!
//! Attaching a child controller takes four steps, in this order:
//!
//! ```text
//! owner.controller().add_child(child)     → child: WillMoveToParent(owner)
//! superview(owner).add_child(child view)
//! layout options, configure
//! child.did_move_to_parent(owner)         → child: DidMoveToParent(owner)
//! ```
//!
//! Replacing a child defaults to [`ReplaceBehavior::remove_child`], which
//! brackets the removal with the matching notifications.

use std::any::Any;

use crate::engine::{deep_resolve, Enclosed, Enclosing};
use crate::view::View;

use super::slot::{slot_api, SlotCore};
use super::{AsController, Container, ReplaceBehavior, ViewLike};

pub struct Child<O, C, P = View> {
    core: SlotCore<O, C, P>,
}

slot_api!(Child where O: AsController, V: AsController);

impl<O, C, P> Child<O, C, P>
where
    O: AsController + 'static,
    C: AsController + ViewLike + Clone + 'static,
    P: 'static,
{
    fn from_core(core: SlotCore<O, C, P>) -> Self {
        Self {
            core: core.on_replace(ReplaceBehavior::remove_child()),
        }
    }
}

impl<O, C, P> Child<O, C, P>
where
    O: AsController + 'static,
    C: AsController + ViewLike + Clone + 'static,
    P: Container<C> + 'static,
{
    /// Replace the child using the slot's replace behavior.
    pub fn set(&self, new: C, owner: &O) {
        let behavior = self.core.on_replace.clone();
        self.replace(new, owner, &behavior);
    }

    /// Replace the child using `behavior`.
    pub fn replace(&self, new: C, owner: &O, behavior: &ReplaceBehavior<C>) {
        if let Some(old) = self.core.peek() {
            behavior.on_old(&old);
        }
        tracing::debug!(slot = %self.core.name(), "replacing child");

        self.core.install(new.clone());
        deep_resolve(self, owner);
        behavior.on_new(&new);
    }
}

impl<O, C, P> Enclosed for Child<O, C, P>
where
    O: AsController + 'static,
    C: AsController + ViewLike + Clone + 'static,
    P: Container<C> + 'static,
{
    fn resolve_enclosing(&self, owner: &dyn Any) {
        let Some((owner, child)) = self.core.unattached(owner) else {
            return;
        };
        let parent = owner.controller();
        parent.add_child(child.controller());
        self.core.superview(owner).add_child(&child);
        self.core.configure_attached(&child, owner);
        child.controller().did_move_to_parent(Some(parent));
    }

    fn visit_wrapped(&self, visit: &mut dyn FnMut(&dyn Enclosing)) {
        self.core.visit_wrapped(visit);
    }

    fn slot_name(&self) -> &str {
        self.core.name()
    }
}
