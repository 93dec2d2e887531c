//! View - Retained node with ordered subviews.
//!
//! A `View` is a cheap, clonable handle. Clones refer to the same node;
//! equality is identity.
//!
//! # State
//!
//! - subviews, in attach order (later = drawn above)
//! - arranged subviews, only populated on stacks
//! - weak link to the superview
//! - `hidden` and `alpha`, held in signals so effects can follow them
//! - a `taffy::Style` written by layout options

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use spark_signals::{signal, Signal};
use taffy::Style;

use crate::slots::{Container, SuperviewContainer, ViewLike};
use crate::types::{next_id, ViewId};

pub(crate) struct ViewInner {
    id: ViewId,
    name: String,
    subviews: RefCell<Vec<View>>,
    arranged: RefCell<Vec<View>>,
    superview: RefCell<Weak<ViewInner>>,
    hidden: Signal<bool>,
    alpha: Signal<f32>,
    style: RefCell<Style>,
}

#[derive(Clone)]
pub struct View {
    inner: Rc<ViewInner>,
}

impl View {
    pub fn new() -> Self {
        let id = next_id();
        Self::with_name(format!("view{id}"), id)
    }

    /// View with a diagnostic name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_name(name.into(), next_id())
    }

    fn with_name(name: String, id: usize) -> Self {
        Self {
            inner: Rc::new(ViewInner {
                id: ViewId(id),
                name,
                subviews: RefCell::new(Vec::new()),
                arranged: RefCell::new(Vec::new()),
                superview: RefCell::new(Weak::new()),
                hidden: signal(false),
                alpha: signal(1.0),
                style: RefCell::new(Style::default()),
            }),
        }
    }

    pub fn id(&self) -> ViewId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn ptr_eq(&self, other: &View) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // =========================================================================
    // Hierarchy
    // =========================================================================

    /// Append `view` as the topmost subview.
    ///
    /// A view that already has a superview is moved; adding an existing
    /// subview again brings it to the front.
    pub fn add_subview(&self, view: &View) {
        if view.ptr_eq(self) {
            return;
        }
        view.remove_from_superview();
        self.inner.subviews.borrow_mut().push(view.clone());
        *view.inner.superview.borrow_mut() = Rc::downgrade(&self.inner);
    }

    /// Detach from the superview, including its arranged subviews.
    pub fn remove_from_superview(&self) {
        let Some(superview) = self.superview() else {
            return;
        };
        superview.inner.subviews.borrow_mut().retain(|v| !v.ptr_eq(self));
        superview.inner.arranged.borrow_mut().retain(|v| !v.ptr_eq(self));
        *self.inner.superview.borrow_mut() = Weak::new();
    }

    pub fn superview(&self) -> Option<View> {
        self.inner.superview.borrow().upgrade().map(|inner| View { inner })
    }

    pub fn subviews(&self) -> Vec<View> {
        self.inner.subviews.borrow().clone()
    }

    pub fn subview_count(&self) -> usize {
        self.inner.subviews.borrow().len()
    }

    /// Whether `self` is `ancestor` or lies below it.
    pub fn is_descendant_of(&self, ancestor: &View) -> bool {
        let mut current = Some(self.clone());
        while let Some(view) = current {
            if view.ptr_eq(ancestor) {
                return true;
            }
            current = view.superview();
        }
        false
    }

    pub(crate) fn push_arranged(&self, view: &View) {
        let mut arranged = self.inner.arranged.borrow_mut();
        arranged.retain(|v| !v.ptr_eq(view));
        arranged.push(view.clone());
    }

    pub(crate) fn arranged(&self) -> Vec<View> {
        self.inner.arranged.borrow().clone()
    }

    // =========================================================================
    // Visual state
    // =========================================================================

    pub fn is_hidden(&self) -> bool {
        self.inner.hidden.get()
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.inner.hidden.set(hidden);
    }

    pub fn alpha(&self) -> f32 {
        self.inner.alpha.get()
    }

    /// Set opacity, clamped to `0.0..=1.0`.
    pub fn set_alpha(&self, alpha: f32) {
        self.inner.alpha.set(alpha.clamp(0.0, 1.0));
    }

    /// Signal backing `hidden`, for effects that track visibility.
    pub fn hidden_signal(&self) -> Signal<bool> {
        self.inner.hidden.clone()
    }

    /// Signal backing `alpha`.
    pub fn alpha_signal(&self) -> Signal<f32> {
        self.inner.alpha.clone()
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn style(&self) -> Ref<'_, Style> {
        self.inner.style.borrow()
    }

    /// Mutate the layout style in place.
    pub fn update_style(&self, update: impl FnOnce(&mut Style)) {
        update(&mut self.inner.style.borrow_mut());
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for View {}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("subviews", &self.subview_count())
            .finish()
    }
}

// =============================================================================
// Attachment capabilities
// =============================================================================

impl ViewLike for View {
    fn view(&self) -> &View {
        self
    }
}

impl SuperviewContainer for View {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.clone()
    }
}

impl<V: ViewLike + ?Sized> Container<V> for View {
    fn add_child(&self, child: &V) {
        self.add_subview(child.view());
    }
}
