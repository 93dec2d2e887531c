//! ArrangedSubview - Ordered attachment slot for stacks.
//!
//! The value is appended to the arrangement of the resolved container, so
//! declaration order is arrangement order. Arranged slots cannot be replaced:
//! [`ArrangedSubview::set`] is rejected and leaves the stack untouched.

use std::any::Any;

use crate::engine::{Enclosed, Enclosing};
use crate::error::SlotError;
use crate::view::StackView;

use super::slot::{slot_api, SlotCore};
use super::{ArrangedContainer, ViewLike};

pub struct ArrangedSubview<O, V, P = StackView> {
    core: SlotCore<O, V, P>,
}

slot_api!(ArrangedSubview);

impl<O, V, P> ArrangedSubview<O, V, P> {
    fn from_core(core: SlotCore<O, V, P>) -> Self {
        Self { core }
    }
}

impl<O, V, P> ArrangedSubview<O, V, P>
where
    O: 'static,
    V: ViewLike + Clone + 'static,
    P: ArrangedContainer<V> + 'static,
{
    /// Arranged slots are fixed once declared.
    ///
    /// Always returns [`SlotError::ArrangedReplace`]; nothing is attached or
    /// detached.
    pub fn set(&self, _new: V, _owner: &O) -> Result<(), SlotError> {
        let err = SlotError::ArrangedReplace {
            slot: self.core.name().to_string(),
        };
        tracing::warn!(slot = %self.core.name(), "{err}");
        Err(err)
    }
}

impl<O, V, P> Enclosed for ArrangedSubview<O, V, P>
where
    O: 'static,
    V: ViewLike + Clone + 'static,
    P: ArrangedContainer<V> + 'static,
{
    fn resolve_enclosing(&self, owner: &dyn Any) {
        let Some((owner, value)) = self.core.unattached(owner) else {
            return;
        };
        self.core.superview(owner).add_arranged_child(&value);
        self.core.configure_attached(&value, owner);
    }

    fn visit_wrapped(&self, visit: &mut dyn FnMut(&dyn Enclosing)) {
        self.core.visit_wrapped(visit);
    }

    fn slot_name(&self) -> &str {
        self.core.name()
    }
}
