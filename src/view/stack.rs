//! StackView - View that arranges its children along an axis.
//!
//! Arranged subviews are also regular subviews. Removing an arranged view
//! from its superview removes it from the arrangement too.
//!
//! The axis is written into the view's `taffy::Style` as a flex direction,
//! so [`compute_layout`](crate::layout::compute_layout) lays arranged
//! children out in order.

use std::fmt;

use taffy::{Display, FlexDirection};

use crate::slots::{ArrangedContainer, SuperviewContainer, ViewLike};
use crate::types::Axis;

use super::View;

#[derive(Clone, PartialEq, Eq)]
pub struct StackView {
    view: View,
}

impl StackView {
    pub fn new(axis: Axis) -> Self {
        let stack = Self { view: View::new() };
        stack.set_axis(axis);
        stack
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Stack with a diagnostic name.
    pub fn named(name: impl Into<String>, axis: Axis) -> Self {
        let stack = Self { view: View::named(name) };
        stack.set_axis(axis);
        stack
    }

    pub fn axis(&self) -> Axis {
        match self.view.style().flex_direction {
            FlexDirection::Row | FlexDirection::RowReverse => Axis::Horizontal,
            FlexDirection::Column | FlexDirection::ColumnReverse => Axis::Vertical,
        }
    }

    pub fn set_axis(&self, axis: Axis) {
        self.view.update_style(|style| {
            style.display = Display::Flex;
            style.flex_direction = match axis {
                Axis::Vertical => FlexDirection::Column,
                Axis::Horizontal => FlexDirection::Row,
            };
        });
    }

    /// Append `view` to the arrangement (and to the subviews).
    pub fn add_arranged_subview(&self, view: &View) {
        self.view.add_subview(view);
        self.view.push_arranged(view);
    }

    pub fn arranged_subviews(&self) -> Vec<View> {
        self.view.arranged()
    }

    pub fn arranged_count(&self) -> usize {
        self.view.arranged().len()
    }

    pub fn as_view(&self) -> &View {
        &self.view
    }
}

impl Default for StackView {
    fn default() -> Self {
        Self::vertical()
    }
}

impl fmt::Debug for StackView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackView")
            .field("view", &self.view)
            .field("axis", &self.axis())
            .field("arranged", &self.arranged_count())
            .finish()
    }
}

impl ViewLike for StackView {
    fn view(&self) -> &View {
        &self.view
    }
}

impl SuperviewContainer for StackView {
    type Superview = View;

    fn default_superview(&self) -> View {
        self.view.clone()
    }
}

impl<V: ViewLike + ?Sized> ArrangedContainer<V> for StackView {
    fn add_arranged_child(&self, child: &V) {
        self.add_arranged_subview(child.view());
    }
}

// =============================================================================
// Stack factories
// =============================================================================

/// Factory building a stack along `axis` that arranges the views returned
/// by `subviews`, in order.
///
/// ```ignore
/// card: Subview::with(vertical_stack(|card: &Card| vec![
///     View::named(&card.line1),
///     View::named(&card.line2),
/// ])),
/// ```
pub fn stack<O>(axis: Axis, subviews: impl Fn(&O) -> Vec<View> + 'static) -> impl Fn(&O) -> StackView {
    move |owner| {
        let stack = StackView::new(axis);
        for subview in subviews(owner) {
            stack.add_arranged_subview(&subview);
        }
        stack
    }
}

pub fn vertical_stack<O>(subviews: impl Fn(&O) -> Vec<View> + 'static) -> impl Fn(&O) -> StackView {
    stack(Axis::Vertical, subviews)
}

pub fn horizontal_stack<O>(subviews: impl Fn(&O) -> Vec<View> + 'static) -> impl Fn(&O) -> StackView {
    stack(Axis::Horizontal, subviews)
}
