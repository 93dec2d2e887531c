//! Controller - Node in the controller hierarchy with a root view.
//!
//! Controllers own a root [`View`] and a list of child controllers. Moving a
//! controller in or out of a parent is bracketed by lifecycle notifications:
//!
//! ```text
//! parent.add_child(child)        → child: WillMoveToParent(Some(parent))
//! parent.view().add_subview(..)
//! child.did_move_to_parent(..)   → child: DidMoveToParent(Some(parent))
//!
//! child.will_move_to_parent(None) → child: WillMoveToParent(None)
//! child.view().remove_from_superview()
//! child.remove_from_parent()      → child: DidMoveToParent(None)
//! ```
//!
//! Listeners registered with [`Controller::on_lifecycle`] observe these
//! notifications in order.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::slots::{AsController, SuperviewContainer, ViewLike};
use crate::types::{next_id, ControllerId};

use super::View;

/// Lifecycle notification delivered to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    WillMoveToParent(Option<ControllerId>),
    DidMoveToParent(Option<ControllerId>),
}

type LifecycleListener = Rc<dyn Fn(&Controller, LifecycleEvent)>;

struct ControllerInner {
    id: ControllerId,
    name: String,
    view: View,
    children: RefCell<Vec<Controller>>,
    parent: RefCell<Weak<ControllerInner>>,
    listeners: RefCell<Vec<LifecycleListener>>,
}

#[derive(Clone)]
pub struct Controller {
    inner: Rc<ControllerInner>,
}

impl Controller {
    pub fn new() -> Self {
        let id = next_id();
        Self::build(format!("controller{id}"), id, View::new())
    }

    /// Controller with a diagnostic name. Its root view gets the same name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let view = View::named(name.clone());
        Self::build(name, next_id(), view)
    }

    /// Controller around an existing root view.
    pub fn with_view(view: View) -> Self {
        let id = next_id();
        Self::build(format!("controller{id}"), id, view)
    }

    fn build(name: String, id: usize, view: View) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                id: ControllerId(id),
                name,
                view,
                children: RefCell::new(Vec::new()),
                parent: RefCell::new(Weak::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> ControllerId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Root view.
    pub fn root_view(&self) -> &View {
        &self.inner.view
    }

    pub fn ptr_eq(&self, other: &Controller) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // =========================================================================
    // Hierarchy
    // =========================================================================

    /// Register `child` as a structural child.
    ///
    /// A child that has another parent is removed from it first. Sends
    /// `WillMoveToParent(Some(self))` to the child; the caller sends
    /// `DidMoveToParent` once the child's view is in place.
    pub fn add_child(&self, child: &Controller) {
        if child.ptr_eq(self) {
            return;
        }
        if let Some(parent) = child.parent() {
            if parent.ptr_eq(self) {
                return;
            }
            child.remove_from_parent();
        }
        child.will_move_to_parent(Some(self));
        self.inner.children.borrow_mut().push(child.clone());
        *child.inner.parent.borrow_mut() = Rc::downgrade(&self.inner);
    }

    /// Unregister from the parent. Sends `DidMoveToParent(None)`.
    pub fn remove_from_parent(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent.inner.children.borrow_mut().retain(|c| !c.ptr_eq(self));
        *self.inner.parent.borrow_mut() = Weak::new();
        self.did_move_to_parent(None);
    }

    pub fn parent(&self) -> Option<Controller> {
        self.inner.parent.borrow().upgrade().map(|inner| Controller { inner })
    }

    pub fn children(&self) -> Vec<Controller> {
        self.inner.children.borrow().clone()
    }

    pub fn child_count(&self) -> usize {
        self.inner.children.borrow().len()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn will_move_to_parent(&self, parent: Option<&Controller>) {
        self.notify(LifecycleEvent::WillMoveToParent(parent.map(Controller::id)));
    }

    pub fn did_move_to_parent(&self, parent: Option<&Controller>) {
        self.notify(LifecycleEvent::DidMoveToParent(parent.map(Controller::id)));
    }

    /// Observe lifecycle notifications sent to this controller.
    pub fn on_lifecycle(&self, listener: impl Fn(&Controller, LifecycleEvent) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self, event: LifecycleEvent) {
        // Listeners may register more listeners
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(self, event);
        }
    }

    /// Detach from both hierarchies with full lifecycle bracketing.
    pub fn detach_from_parent(&self) {
        self.will_move_to_parent(None);
        self.inner.view.remove_from_superview();
        self.remove_from_parent();
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Controller {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Controller {}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("children", &self.child_count())
            .finish()
    }
}

// =============================================================================
// Attachment capabilities
// =============================================================================

impl ViewLike for Controller {
    fn view(&self) -> &View {
        &self.inner.view
    }

    fn detach(&self) {
        self.detach_from_parent();
    }
}

impl AsController for Controller {
    fn controller(&self) -> &Controller {
        self
    }
}

impl SuperviewContainer for Controller {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.inner.view.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn record(controller: &Controller) -> Rc<RefCell<Vec<LifecycleEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        controller.on_lifecycle(move |_, event| events_clone.borrow_mut().push(event));
        events
    }

    #[test]
    fn test_add_child_sends_will_move() {
        let parent = Controller::named("parent");
        let child = Controller::named("child");
        let events = record(&child);

        parent.add_child(&child);

        assert_eq!(parent.children(), vec![child.clone()]);
        assert_eq!(child.parent(), Some(parent.clone()));
        assert_eq!(
            *events.borrow(),
            vec![LifecycleEvent::WillMoveToParent(Some(parent.id()))]
        );
    }

    #[test]
    fn test_add_child_twice_is_ignored() {
        let parent = Controller::new();
        let child = Controller::new();
        let events = record(&child);

        parent.add_child(&child);
        parent.add_child(&child);

        assert_eq!(parent.child_count(), 1);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_detach_from_parent_brackets_lifecycle() {
        let parent = Controller::new();
        let child = Controller::new();
        parent.add_child(&child);
        parent.root_view().add_subview(child.root_view());
        child.did_move_to_parent(Some(&parent));
        let events = record(&child);

        child.detach_from_parent();

        assert_eq!(parent.child_count(), 0);
        assert_eq!(parent.root_view().subview_count(), 0);
        assert_eq!(
            *events.borrow(),
            vec![
                LifecycleEvent::WillMoveToParent(None),
                LifecycleEvent::DidMoveToParent(None),
            ]
        );
    }

    #[test]
    fn test_moving_child_between_parents() {
        let first = Controller::new();
        let second = Controller::new();
        let child = Controller::new();

        first.add_child(&child);
        second.add_child(&child);

        assert_eq!(first.child_count(), 0);
        assert_eq!(second.children(), vec![child.clone()]);
        assert_eq!(child.parent(), Some(second));
    }

    #[test]
    fn test_named_controller_names_root_view() {
        let controller = Controller::named("settings");
        assert_eq!(controller.name(), "settings");
        assert_eq!(controller.root_view().name(), "settings");
    }
}
