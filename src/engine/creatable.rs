//! Creatable - Memoized, owner-parameterized value holder.
//!
//! A `Creatable` either starts with a value or holds a creator that receives
//! the owner at call time. The first `Some` the creator returns is kept for
//! the lifetime of the `Creatable`; a `None` is not kept, so the next call
//! tries again.
//!
//! The owner is never stored. It only exists for the duration of a
//! [`Creatable::create`] call.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Creator function: owner in, optional value out.
pub type Creator<V, O> = Rc<dyn Fn(&O) -> Option<V>>;

pub struct Creatable<V, O: ?Sized> {
    created: RefCell<Option<V>>,
    creator: Option<Creator<V, O>>,
}

impl<V: Clone, O: ?Sized> Creatable<V, O> {
    /// Holder that already contains `value`.
    pub fn value(value: V) -> Self {
        Self {
            created: RefCell::new(Some(value)),
            creator: None,
        }
    }

    /// Holder that creates its value from the owner on first demand.
    pub fn lazy(create: impl Fn(&O) -> Option<V> + 'static) -> Self {
        Self {
            created: RefCell::new(None),
            creator: Some(Rc::new(create)),
        }
    }

    /// Holder from an optional creator. Without one it stays empty until replaced.
    pub fn new(creator: Option<Creator<V, O>>) -> Self {
        Self {
            created: RefCell::new(None),
            creator,
        }
    }

    /// Return the memoized value, or run the creator with `owner`.
    ///
    /// The creator runs with no borrow held, so it may freely read other
    /// state reachable from the owner.
    pub fn create(&self, owner: &O) -> Option<V> {
        if let Some(created) = self.peek() {
            return Some(created);
        }

        let creator = self.creator.as_ref()?;
        let new = creator(owner)?;

        // The creator may have re-entered and filled us; first value wins.
        let mut created = self.created.borrow_mut();
        Some(created.get_or_insert(new).clone())
    }

    /// Memoized value, if any. Never runs the creator.
    pub fn peek(&self) -> Option<V> {
        self.created.borrow().clone()
    }

    pub fn is_created(&self) -> bool {
        self.created.borrow().is_some()
    }
}

impl<V, O: ?Sized> fmt::Debug for Creatable<V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Creatable")
            .field("created", &self.created.borrow().is_some())
            .field("lazy", &self.creator.is_some())
            .finish()
    }
}
