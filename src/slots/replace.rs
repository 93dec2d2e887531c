//! Replace behaviors - What happens to the old and new value on replacement.
//!
//! A behavior is a pair of side effects:
//! - `old` runs with the outgoing value, before anything structural changes
//! - `new` runs with the incoming value, once it is attached, configured and
//!   its own slots are resolved
//!
//! # Presets
//!
//! | Preset                 | old                                | new               |
//! |------------------------|------------------------------------|-------------------|
//! | `overlay`              | nothing                            | nothing           |
//! | `remove` (default)     | detach                             | nothing           |
//! | `remove_child`         | detach from the controller parent  | nothing           |
//! | `hide`                 | hide                               | unhide            |
//! | `remove_and_fade_in`   | detach                             | fade in           |
//! | `fade_out_and_fade_in` | fade out, then detach              | delayed fade in   |
//! | `cross_fade`           | fade out, then detach              | fade in           |
//!
//! Fading presets schedule [transitions](crate::state::transition). The detach
//! sits in the transition's completion, which runs even when the transition is
//! cancelled or the queue is reset.
//!
//! The latest fade scheduled on a view owns its alpha. An older fade stops
//! stepping, and a fade-out that lost ownership does not detach. Replacing
//! A with B and then B with A again leaves A attached and visible.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::state::transition::{animate, TransitionConfig};
use crate::types::ViewId;

use super::{AsController, ViewLike};

pub struct ReplaceBehavior<V> {
    new: Rc<dyn Fn(&V)>,
    old: Rc<dyn Fn(&V)>,
}

impl<V> ReplaceBehavior<V> {
    pub fn new(new: impl Fn(&V) + 'static, old: impl Fn(&V) + 'static) -> Self {
        Self {
            new: Rc::new(new),
            old: Rc::new(old),
        }
    }

    /// Old and new coexist; nothing happens.
    pub fn overlay() -> Self {
        Self::new(|_| {}, |_| {})
    }

    /// Run the outgoing-value effect.
    pub fn on_old(&self, value: &V) {
        (self.old)(value)
    }

    /// Run the incoming-value effect.
    pub fn on_new(&self, value: &V) {
        (self.new)(value)
    }

    /// Run `self`, then `other`, for both effects.
    pub fn then(self, other: ReplaceBehavior<V>) -> Self
    where
        V: 'static,
    {
        let Self { new: first_new, old: first_old } = self;
        let Self { new: second_new, old: second_old } = other;
        Self::new(
            move |value| {
                first_new(value);
                second_new(value);
            },
            move |value| {
                first_old(value);
                second_old(value);
            },
        )
    }
}

impl<V: ViewLike + Clone + 'static> ReplaceBehavior<V> {
    /// Detach the old value.
    pub fn remove() -> Self {
        Self::new(|_| {}, |old: &V| old.detach())
    }

    /// Hide the old value instead of detaching it.
    pub fn hide() -> Self {
        Self::new(
            |new: &V| new.view().set_hidden(false),
            |old: &V| old.view().set_hidden(true),
        )
    }

    /// Detach the old value; fade the new one in.
    pub fn remove_and_fade_in() -> Self {
        Self::new(|new: &V| fade_in(new, TransitionConfig::FADE_IN), |old: &V| old.detach())
    }

    /// Fade the old value out and detach it; fade the new one in afterwards.
    pub fn fade_out_and_fade_in() -> Self {
        Self::new(
            |new: &V| fade_in(new, TransitionConfig::FADE_IN_AFTER_FADE_OUT),
            |old: &V| fade_out_and_detach(old, TransitionConfig::FADE),
        )
    }

    /// Fade old out and new in at the same time; detach the old value.
    pub fn cross_fade() -> Self {
        Self::new(
            |new: &V| fade_in(new, TransitionConfig::FADE),
            |old: &V| fade_out_and_detach(old, TransitionConfig::FADE),
        )
    }
}

impl<V: AsController + 'static> ReplaceBehavior<V> {
    /// Take the old controller out of both hierarchies, with lifecycle
    /// notifications. Default for child slots.
    pub fn remove_child() -> Self {
        Self::new(|_| {}, |old: &V| old.controller().detach_from_parent())
    }
}

// =============================================================================
// Fades
// =============================================================================

thread_local! {
    /// Fade currently driving each view's alpha.
    static ALPHA_OWNERS: RefCell<HashMap<ViewId, u64>> = RefCell::new(HashMap::new());
    static NEXT_FADE: Cell<u64> = const { Cell::new(0) };
}

/// Take over `view`'s alpha from any earlier fade.
fn claim_alpha(view: ViewId) -> u64 {
    let fade = NEXT_FADE.with(|next| {
        let fade = next.get();
        next.set(fade + 1);
        fade
    });
    ALPHA_OWNERS.with(|owners| owners.borrow_mut().insert(view, fade));
    fade
}

fn owns_alpha(view: ViewId, fade: u64) -> bool {
    ALPHA_OWNERS.with(|owners| owners.borrow().get(&view) == Some(&fade))
}

/// Give up `view`'s alpha. Returns whether `fade` still owned it.
fn release_alpha(view: ViewId, fade: u64) -> bool {
    ALPHA_OWNERS.with(|owners| {
        let mut owners = owners.borrow_mut();
        if owners.get(&view) != Some(&fade) {
            return false;
        }
        owners.remove(&view);
        true
    })
}

fn fade_in<V: ViewLike>(value: &V, config: TransitionConfig) {
    let view = value.view().clone();
    let id = view.id();
    let fade = claim_alpha(id);
    view.set_alpha(0.0);
    animate(
        config,
        move |t| {
            if owns_alpha(id, fade) {
                view.set_alpha(t);
            }
        },
        Some(Box::new(move || {
            release_alpha(id, fade);
        })),
    );
}

fn fade_out_and_detach<V: ViewLike + Clone + 'static>(value: &V, config: TransitionConfig) {
    let view = value.view().clone();
    let id = view.id();
    let fade = claim_alpha(id);
    let start = view.alpha();
    let value = value.clone();
    animate(
        config,
        move |t| {
            if owns_alpha(id, fade) {
                view.set_alpha(start * (1.0 - t));
            }
        },
        Some(Box::new(move || {
            if release_alpha(id, fade) {
                value.detach();
            } else {
                tracing::debug!(view = %value.view().name(), "fade-out superseded, keeping view attached");
            }
        })),
    );
}

impl<V> Clone for ReplaceBehavior<V> {
    fn clone(&self) -> Self {
        Self {
            new: self.new.clone(),
            old: self.old.clone(),
        }
    }
}

impl<V: ViewLike + Clone + 'static> Default for ReplaceBehavior<V> {
    fn default() -> Self {
        Self::remove()
    }
}

impl<V> fmt::Debug for ReplaceBehavior<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReplaceBehavior")
    }
}
