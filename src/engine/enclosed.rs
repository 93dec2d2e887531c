//! Enclosed slots and the owners that declare them.
//!
//! An owner implements [`Enclosing`] and lists its slots in a
//! [`SlotRegistry`], in declaration order:
//!
//! ```ignore
//! impl Enclosing for Card {
//!     fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
//!         slots.slot(&self.title).slot(&self.body).inherit(&self.base);
//!     }
//! }
//! ```
//!
//! # Ordering
//!
//! The registry yields an owner's own slots first, then the slots of every
//! inherited base, each base again own-first. The order in which `slot` and
//! `inherit` are called only matters within each group.
//!
//! ```text
//! Card.title, Card.body, Base.header, Base.footer, BaseOfBase.*
//! ```

use std::any::Any;

/// A declared slot that can be resolved against an owner.
pub trait Enclosed {
    /// Materialize and attach this slot's value using `owner`.
    ///
    /// Does nothing when `owner` is not the slot's owner type, or when the
    /// value is not available yet.
    fn resolve_enclosing(&self, owner: &dyn Any);

    /// Visit the slots nested in the materialized value, if it is itself a
    /// composite.
    fn visit_wrapped(&self, visit: &mut dyn FnMut(&dyn Enclosing));

    /// Diagnostic name.
    fn slot_name(&self) -> &str;
}

/// An owner that declares slots.
pub trait Enclosing: AsAny {
    /// Register declared slots, in declaration order.
    fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>);

    /// Resolve every declared slot. See [`resolve_all`](super::resolve_all).
    fn resolve_all_enclosed(&self)
    where
        Self: Sized,
    {
        super::resolve_all(self);
    }
}

/// One registered slot paired with the owner it resolves against.
#[derive(Clone, Copy)]
pub struct SlotEntry<'a> {
    pub slot: &'a dyn Enclosed,
    pub owner: &'a dyn Any,
}

/// Ordered list of an owner's slots, built by [`Enclosing::declare`].
pub struct SlotRegistry<'a> {
    owner: &'a dyn Any,
    own: Vec<SlotEntry<'a>>,
    inherited: Vec<SlotEntry<'a>>,
}

impl<'a> SlotRegistry<'a> {
    /// Collect the slots declared by `owner`.
    pub fn collect<T: Enclosing + ?Sized>(owner: &'a T) -> Self {
        let mut registry = Self {
            owner: owner.as_any(),
            own: Vec::new(),
            inherited: Vec::new(),
        };
        owner.declare(&mut registry);
        registry
    }

    /// Register one of the owner's own slots.
    pub fn slot(&mut self, slot: &'a dyn Enclosed) -> &mut Self {
        self.own.push(SlotEntry { slot, owner: self.owner });
        self
    }

    /// Register several of the owner's own slots, in order.
    pub fn slots<const N: usize>(&mut self, slots: [&'a dyn Enclosed; N]) -> &mut Self {
        for slot in slots {
            self.slot(slot);
        }
        self
    }

    /// Register a base composite whose slots resolve against `base` itself,
    /// after all of this owner's own slots.
    pub fn inherit<T: Enclosing>(&mut self, base: &'a T) -> &mut Self {
        let base = Self::collect(base);
        tracing::debug!(count = base.len(), "inheriting declared slots");
        self.inherited.extend(base.entries());
        self
    }

    pub fn len(&self) -> usize {
        self.own.len() + self.inherited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in resolution order: own slots, then inherited ones.
    pub fn entries(&self) -> impl Iterator<Item = SlotEntry<'a>> + '_ {
        self.own.iter().chain(self.inherited.iter()).copied()
    }

    /// Slot names in resolution order.
    pub fn names(&self) -> Vec<&str> {
        self.entries().map(|entry| entry.slot.slot_name()).collect()
    }
}

/// Upcast to `&dyn Any`, also through `&dyn Enclosing`.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
