//! Node model - Views, stacks and controllers.
//!
//! A minimal retained tree the slot engine attaches into:
//! - [`View`] - ordered subviews, visibility, alpha, layout style
//! - [`StackView`] - view with an ordered arrangement along an axis
//! - [`Controller`] - root view plus child controllers with lifecycle
//!
//! All three are `Rc` handles: cloning shares the node, equality is identity.

mod controller;
mod stack;
#[allow(clippy::module_inception)]
mod view;

pub use controller::*;
pub use stack::*;
pub use view::View;
