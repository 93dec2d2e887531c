//! Attachment points - Where slot values go.
//!
//! - [`Container`]: "add as a child" (plain and child-controller slots)
//! - [`ArrangedContainer`]: "add as the next arranged child" (stack slots)
//! - [`SuperviewContainer`]: default attachment point of an owner
//! - [`ViewLike`]: anything with a view surface that can be attached,
//!   detached, hidden and faded
//! - [`AsController`]: anything that takes part in the controller hierarchy

use std::rc::Rc;

use crate::engine::Enclosing;
use crate::view::{Controller, View};

/// Receives children.
pub trait Container<V: ?Sized> {
    fn add_child(&self, child: &V);
}

/// Receives children in an ordered arrangement.
pub trait ArrangedContainer<V: ?Sized> {
    fn add_arranged_child(&self, child: &V);
}

/// Default attachment point of an owner.
///
/// Plain views answer with themselves. Controllers answer with their root
/// view. Composites answer with the surface their slots belong on.
pub trait SuperviewContainer {
    type Superview;

    fn default_superview(&self) -> Self::Superview;
}

/// A value with a view surface.
pub trait ViewLike {
    /// The surface that gets attached, laid out, hidden and faded.
    fn view(&self) -> &View;

    /// Structurally remove this value from wherever it is attached.
    fn detach(&self) {
        self.view().remove_from_superview();
    }

    /// The slots this value declares, when it is a composite.
    fn enclosing(&self) -> Option<&dyn Enclosing> {
        None
    }
}

/// A value that is, or owns, a [`Controller`].
pub trait AsController {
    fn controller(&self) -> &Controller;
}

// =============================================================================
// Rc delegation
// =============================================================================

impl<T: ViewLike + ?Sized> ViewLike for Rc<T> {
    fn view(&self) -> &View {
        (**self).view()
    }

    fn detach(&self) {
        (**self).detach()
    }

    fn enclosing(&self) -> Option<&dyn Enclosing> {
        (**self).enclosing()
    }
}

impl<T: AsController + ?Sized> AsController for Rc<T> {
    fn controller(&self) -> &Controller {
        (**self).controller()
    }
}

impl<T: SuperviewContainer + ?Sized> SuperviewContainer for Rc<T> {
    type Superview = T::Superview;

    fn default_superview(&self) -> Self::Superview {
        (**self).default_superview()
    }
}
