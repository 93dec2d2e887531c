//! Graph walker - resolves declared slots depth-first.
//!
//! For each registered slot, in registry order:
//!
//! 1. resolve the slot against its owner (materialize, attach, configure)
//! 2. if the materialized value is itself a composite, walk its slots
//!    (the value is their owner) before moving on to the next sibling
//!
//! ```text
//! Owner
//! ├── a            1
//! ├── b            2
//! │   └── b.inner  3   (b's value is a composite)
//! └── c            4
//! ```
//!
//! A second walk over the same owner creates and attaches nothing new, but
//! slots whose creator returned `None` are asked again.

use std::any::Any;
use std::rc::Rc;

use super::enclosed::{Enclosed, Enclosing, SlotRegistry};

/// Resolve every slot `owner` declares, then every slot nested below them.
pub fn resolve_all(owner: &dyn Enclosing) {
    let registry = SlotRegistry::collect(owner);
    for entry in registry.entries() {
        deep_resolve(entry.slot, entry.owner);
    }
}

/// Resolve one slot against `owner`, then walk its materialized value.
pub fn deep_resolve(slot: &dyn Enclosed, owner: &dyn Any) {
    slot.resolve_enclosing(owner);
    slot.visit_wrapped(&mut |nested| resolve_all(nested));
}

/// Resolve an ad-hoc list of slots against `owner`, in order.
///
/// Unlike [`resolve_all`] this does not walk into the resolved values.
pub fn resolve_slots(owner: &dyn Enclosing, slots: &[&dyn Enclosed]) {
    let owner = owner.as_any();
    for slot in slots {
        slot.resolve_enclosing(owner);
    }
}

/// Move `owner` behind an `Rc` and resolve all of its slots.
///
/// This is the usual way to finish constructing a composite.
pub fn enclose<T: Enclosing>(owner: T) -> Rc<T> {
    let owner = Rc::new(owner);
    resolve_all(&*owner);
    owner
}
