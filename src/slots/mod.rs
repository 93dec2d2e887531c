//! Slots Module
//!
//! Declared fields that create, attach and replace child views and child
//! controllers of an owner.
//!
//! # Flavors
//!
//! - [`Subview`]: added as a child of a [`Container`]
//! - [`ArrangedSubview`]: appended to an [`ArrangedContainer`], never replaced
//! - [`Child`]: registered as a child controller, then added as a child view
//!
//! Every flavor is built the same way:
//!
//! ```ignore
//! Subview::new(value)               // eager
//! Subview::with(|owner| make(owner)) // created on first resolution
//! Subview::lazy(|owner| maybe(owner)) // None defers to the next pass
//! Subview::deferred()               // empty until set
//!     .of(|owner| owner.header.clone())
//!     .layout(LayoutOption::pin())
//!     .configure(|value, owner| { .. })
//!     .on_replace(ReplaceBehavior::cross_fade())
//!     .named("title")
//! ```
//!
//! # Replacement
//!
//! `set` runs the slot's [`ReplaceBehavior`]: the old value's effect, then the
//! new value is attached and configured, then the new value's effect.

mod arranged;
mod child;
mod replace;
mod slot;
mod subview;
mod superview;

pub use arranged::ArrangedSubview;
pub use child::Child;
pub use replace::ReplaceBehavior;
pub use subview::Subview;
pub use superview::{ArrangedContainer, AsController, Container, SuperviewContainer, ViewLike};
