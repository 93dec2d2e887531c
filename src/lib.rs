//! # spark-subviews
//!
//! Declarative view composition for a retained UI tree.
//!
//! A view or controller declares its child views and child controllers as
//! slot fields. The crate creates each value once, attaches it to the right
//! superview, applies layout options and configuration, walks into nested
//! composites, and replaces values at runtime with a chosen behavior.
//!
//! ## Architecture
//!
//! ```text
//! owner ──declare──▶ SlotRegistry [own slots…, inherited slots…]
//!                        │
//!               resolve_enclosing(owner)
//!                        │
//!      create once ─▶ attach to superview ─▶ layout ─▶ configure
//!                        │
//!            value is a composite? ─▶ resolve its slots first
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use spark_subviews::prelude::*;
//!
//! struct Card {
//!     view: View,
//!     title: Subview<Card, View>,
//!     body: Subview<Card, StackView>,
//! }
//!
//! impl SuperviewContainer for Card {
//!     type Superview = View;
//!     fn default_superview(&self) -> View { self.view.clone() }
//! }
//!
//! impl Enclosing for Card {
//!     fn declare<'a>(&'a self, slots: &mut SlotRegistry<'a>) {
//!         slots.slot(&self.title).slot(&self.body);
//!     }
//! }
//!
//! let card = enclose(Card {
//!     view: View::named("card"),
//!     title: Subview::new(View::named("title")).layout(LayoutOption::pin_top(8.0)),
//!     body: Subview::with(vertical_stack(|_: &Card| vec![View::new(), View::new()])),
//! });
//!
//! card.title.set(View::named("renamed"), &card);
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - Creatable, slot declaration, graph walker
//! - [`slots`] - Subview, ArrangedSubview, Child, replace behaviors
//! - [`view`] - View, StackView, Controller node model
//! - [`layout`] - Layout options and Taffy layout
//! - [`state`] - Host-driven transitions
//! - [`types`] - Identifiers, edges, insets

pub mod engine;
pub mod error;
pub mod layout;
pub mod slots;
pub mod state;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    deep_resolve, enclose, resolve_all, resolve_slots, Creatable, Enclosed, Enclosing,
    SlotRegistry,
};

pub use error::{LayoutError, SlotError};

pub use layout::{compute_layout, ComputedLayout, Frame, LayoutOption};

pub use slots::{
    ArrangedContainer, ArrangedSubview, AsController, Child, Container, ReplaceBehavior,
    Subview, SuperviewContainer, ViewLike,
};

pub use state::{
    advance_transitions, animate, cancel_transition, finish_transitions, pending_transitions,
    reset_transitions, TransitionConfig, TransitionId,
};

pub use view::{
    horizontal_stack, stack, vertical_stack, Controller, LifecycleEvent, StackView, View,
};

/// Everything needed to declare and resolve composites.
pub mod prelude {
    pub use crate::engine::{enclose, resolve_all, Enclosing, SlotRegistry};
    pub use crate::layout::LayoutOption;
    pub use crate::slots::{
        ArrangedSubview, AsController, Child, ReplaceBehavior, Subview, SuperviewContainer,
        ViewLike,
    };
    pub use crate::types::{Axis, EdgeInsets, Edges, HorizontalInsets, VerticalInsets};
    pub use crate::view::{horizontal_stack, vertical_stack, Controller, StackView, View};
}
