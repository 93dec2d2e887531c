//! Slot core - State shared by every slot flavor.
//!
//! A slot is a declared field of an owner. It holds:
//!
//! - a [`Creatable`] producing the value from the owner
//! - a superview resolver, `Fn(&O) -> P`
//! - layout options and a configuration function, run once per attach
//! - the [`ReplaceBehavior`] used by `set`
//!
//! The flavors differ only in how a value is attached to `P`:
//!
//! | Flavor           | Attachment                                       |
//! |------------------|--------------------------------------------------|
//! | `Subview`        | `Container::add_child`                           |
//! | `ArrangedSubview`| `ArrangedContainer::add_arranged_child`          |
//! | `Child`          | controller `add_child`, then `Container::add_child` |
//!
//! A slot never stores its owner. The owner is handed in at resolution and
//! replacement time only.

use std::any::{type_name, Any};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::engine::{Creatable, Enclosing};
use crate::error::SlotError;
use crate::layout::LayoutOption;

use super::{ReplaceBehavior, SuperviewContainer, ViewLike};

type SuperviewResolver<O, P> = Rc<dyn Fn(&O) -> P>;
type Configure<O, V> = Rc<dyn Fn(&V, &O)>;

pub(crate) struct SlotCore<O, V, P> {
    name: String,
    creatable: RefCell<Rc<Creatable<V, O>>>,
    /// Whether the current creatable's value was attached.
    attached: Cell<bool>,
    /// Set once a value was materialized against an owner. Reads are
    /// refused until then, eager values included.
    resolved: Cell<bool>,
    superview: SuperviewResolver<O, P>,
    layout: LayoutOption,
    configure: Configure<O, V>,
    pub(crate) on_replace: ReplaceBehavior<V>,
}

impl<O, V, P> SlotCore<O, V, P>
where
    O: 'static,
    V: ViewLike + Clone + 'static,
    P: 'static,
{
    /// Core attaching to the owner's default superview.
    pub(crate) fn new(creatable: Creatable<V, O>) -> Self
    where
        O: SuperviewContainer<Superview = P>,
    {
        Self {
            name: type_name::<V>().to_string(),
            creatable: RefCell::new(Rc::new(creatable)),
            attached: Cell::new(false),
            resolved: Cell::new(false),
            superview: Rc::new(|owner: &O| owner.default_superview()),
            layout: LayoutOption::none(),
            configure: Rc::new(|_: &V, _: &O| {}),
            on_replace: ReplaceBehavior::remove(),
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub(crate) fn of<Q: 'static>(self, superview: impl Fn(&O) -> Q + 'static) -> SlotCore<O, V, Q> {
        SlotCore {
            name: self.name,
            creatable: self.creatable,
            attached: self.attached,
            resolved: self.resolved,
            superview: Rc::new(superview),
            layout: self.layout,
            configure: self.configure,
            on_replace: self.on_replace,
        }
    }

    pub(crate) fn layout(mut self, option: LayoutOption) -> Self {
        self.layout = self.layout.and(option);
        self
    }

    pub(crate) fn configure(mut self, configure: impl Fn(&V, &O) + 'static) -> Self {
        let previous = self.configure;
        self.configure = Rc::new(move |value: &V, owner: &O| {
            previous(value, owner);
            configure(value, owner);
        });
        self
    }

    pub(crate) fn on_replace(mut self, behavior: ReplaceBehavior<V>) -> Self {
        self.on_replace = behavior;
        self
    }

    pub(crate) fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Downcast `owner` and materialize the value.
    ///
    /// Returns the value only when it still has to be attached. Marks it
    /// attached before returning, so re-entrant resolution attaches nothing.
    pub(crate) fn unattached<'o>(&self, owner: &'o dyn Any) -> Option<(&'o O, V)> {
        let owner = owner.downcast_ref::<O>()?;
        // Cloned out: the creator may read or replace this slot
        let creatable = self.creatable.borrow().clone();
        let value = creatable.create(owner)?;
        self.resolved.set(true);

        if !Rc::ptr_eq(&creatable, &self.creatable.borrow()) || self.attached.replace(true) {
            return None;
        }
        Some((owner, value))
    }

    pub(crate) fn superview(&self, owner: &O) -> P {
        let superview = self.superview.clone();
        superview(owner)
    }

    /// Run layout options, then the configuration function.
    pub(crate) fn configure_attached(&self, value: &V, owner: &O) {
        tracing::trace!(slot = %self.name, view = %value.view().name(), "attached");
        self.layout.apply(value.view());
        let configure = self.configure.clone();
        configure(value, owner);
    }

    pub(crate) fn visit_wrapped(&self, visit: &mut dyn FnMut(&dyn Enclosing)) {
        let Some(value) = self.peek() else {
            return;
        };
        if let Some(enclosing) = value.enclosing() {
            visit(enclosing);
        }
    }

    // =========================================================================
    // Access
    // =========================================================================

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn peek(&self) -> Option<V> {
        self.creatable.borrow().peek()
    }

    pub(crate) fn is_resolved(&self) -> bool {
        self.resolved.get()
    }

    pub(crate) fn try_get(&self) -> Result<V, SlotError> {
        self.peek()
            .filter(|_| self.is_resolved())
            .ok_or_else(|| SlotError::Unresolved {
                slot: self.name.clone(),
            })
    }

    pub(crate) fn get(&self) -> V {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Install `new` as an eager, not yet attached value.
    ///
    /// Replacement resolves the slot, so `new` is readable from here on.
    pub(crate) fn install(&self, new: V) {
        *self.creatable.borrow_mut() = Rc::new(Creatable::value(new));
        self.attached.set(false);
        self.resolved.set(true);
    }
}

impl<O, V, P> fmt::Debug for SlotCore<O, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("name", &self.name)
            .field("creatable", &self.creatable.borrow())
            .field("attached", &self.attached.get())
            .field("resolved", &self.resolved.get())
            .finish()
    }
}

/// Builder and accessor methods shared by every slot flavor.
///
/// The flavor must be a `$slot<O, V, P>` struct with a `core: SlotCore` field
/// and provide `fn from_core(SlotCore<O, V, P>) -> Self`.
macro_rules! slot_api {
    ($slot:ident $(where $($bounds:tt)+)?) => {
        impl<O, V, P> $slot<O, V, P>
        where
            O: $crate::slots::SuperviewContainer<Superview = P> + 'static,
            V: $crate::slots::ViewLike + Clone + 'static,
            P: 'static,
            $($($bounds)+)?
        {
            /// Slot holding `value`.
            pub fn new(value: V) -> Self {
                Self::from_core(SlotCore::new($crate::engine::Creatable::value(value)))
            }

            /// Slot created from the owner on first resolution. `None` defers
            /// creation to the next resolution pass.
            pub fn lazy(create: impl Fn(&O) -> Option<V> + 'static) -> Self {
                Self::from_core(SlotCore::new($crate::engine::Creatable::lazy(create)))
            }

            /// Slot created from the owner on first resolution.
            pub fn with(create: impl Fn(&O) -> V + 'static) -> Self {
                Self::lazy(move |owner| Some(create(owner)))
            }

            /// Slot without a value until one is set.
            pub fn deferred() -> Self {
                Self::from_core(SlotCore::new($crate::engine::Creatable::new(None)))
            }
        }

        impl<O, V, P> $slot<O, V, P>
        where
            O: 'static,
            V: $crate::slots::ViewLike + Clone + 'static,
            P: 'static,
            $($($bounds)+)?
        {
            /// Attach to `superview(owner)` instead of the owner's default.
            pub fn of<Q: 'static>(self, superview: impl Fn(&O) -> Q + 'static) -> $slot<O, V, Q> {
                $slot { core: self.core.of(superview) }
            }

            /// Add a layout option, applied right after attaching.
            pub fn layout(self, option: $crate::layout::LayoutOption) -> Self {
                Self { core: self.core.layout(option) }
            }

            /// Add a configuration step, run once per attach after layout.
            pub fn configure(self, configure: impl Fn(&V, &O) + 'static) -> Self {
                Self { core: self.core.configure(configure) }
            }

            /// Add a configuration step that does not need the owner.
            pub fn configure_value(self, configure: impl Fn(&V) + 'static) -> Self {
                self.configure(move |value, _| configure(value))
            }

            pub fn on_replace(self, behavior: $crate::slots::ReplaceBehavior<V>) -> Self {
                Self { core: self.core.on_replace(behavior) }
            }

            /// Name shown in diagnostics.
            pub fn named(self, name: impl Into<String>) -> Self {
                Self { core: self.core.named(name) }
            }

            /// The resolved value.
            ///
            /// # Panics
            ///
            /// When the slot was never resolved, even if it was built with a
            /// value, or when its creator has not produced one yet.
            pub fn get(&self) -> V {
                self.core.get()
            }

            pub fn try_get(&self) -> Result<V, $crate::error::SlotError> {
                self.core.try_get()
            }

            /// Whether a value was materialized against an owner.
            pub fn is_resolved(&self) -> bool {
                self.core.is_resolved()
            }
        }

        impl<O, V, P> std::fmt::Debug for $slot<O, V, P> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(&self.core, f)
            }
        }
    };
}

pub(crate) use slot_api;
