//! Layout options - Composable layout directives for slot values.
//!
//! A [`LayoutOption`] is an opaque function applied to a value's view right
//! after it is attached. The built-in options write into the view's
//! `taffy::Style`:
//!
//! | Option              | Style effect                                        |
//! |---------------------|-----------------------------------------------------|
//! | `pin*`              | absolute position, inset on the pinned edges        |
//! | `align_center*`     | absolute position, auto margins on the centred axis |
//! | `size`, `width`...  | fixed `size`                                        |
//! | `aspect_ratio`      | `aspect_ratio`                                      |
//! | `relative_*`        | percent `size`, only once the view has a superview  |
//!
//! Options combine in order with [`LayoutOption::all`] or
//! [`LayoutOption::and`]; later options win on conflicting fields.
//!
//! # Example
//!
//! ```ignore
//! Subview::new(View::named("badge"))
//!     .layout(LayoutOption::all([
//!         LayoutOption::pin_top(8.0),
//!         LayoutOption::pin_trailing(8.0),
//!         LayoutOption::size(24.0, 24.0),
//!     ]))
//! ```

use std::fmt;
use std::rc::Rc;

use taffy::{Dimension, LengthPercentageAuto, Position, Style};

use crate::types::{EdgeInsets, Edges, HorizontalInsets, VerticalInsets};
use crate::view::View;

#[derive(Clone)]
pub struct LayoutOption {
    layout: Rc<dyn Fn(&View)>,
}

impl LayoutOption {
    /// Option from an arbitrary layout function.
    pub fn new(layout: impl Fn(&View) + 'static) -> Self {
        Self { layout: Rc::new(layout) }
    }

    /// No layout.
    pub fn none() -> Self {
        Self::new(|_| {})
    }

    /// Apply every option in order.
    pub fn all(options: impl IntoIterator<Item = LayoutOption>) -> Self {
        let options: Vec<LayoutOption> = options.into_iter().collect();
        Self::new(move |view| {
            for option in &options {
                option.apply(view);
            }
        })
    }

    /// `self`, then `other`.
    pub fn and(self, other: LayoutOption) -> Self {
        Self::all([self, other])
    }

    /// Option that only runs once the view has a superview.
    pub fn with_superview(layout: impl Fn(&View, &View) + 'static) -> Self {
        Self::new(move |view| {
            if let Some(superview) = view.superview() {
                layout(view, &superview);
            }
        })
    }

    pub fn apply(&self, view: &View) {
        (self.layout)(view)
    }

    /// Option that edits the view's style.
    fn style(update: impl Fn(&mut Style) + 'static) -> Self {
        Self::new(move |view| view.update_style(&update))
    }

    // =========================================================================
    // Pin
    // =========================================================================

    /// Pin all edges to the superview.
    pub fn pin() -> Self {
        Self::pin_edges(Edges::ALL, EdgeInsets::ZERO)
    }

    pub fn pin_inset(inset: f32) -> Self {
        Self::pin_edges(Edges::ALL, EdgeInsets::all(inset))
    }

    pub fn pin_insets(insets: EdgeInsets) -> Self {
        Self::pin_edges(Edges::ALL, insets)
    }

    pub fn pin_horizontally(insets: HorizontalInsets) -> Self {
        Self::pin_edges(Edges::HORIZONTAL, insets.into())
    }

    pub fn pin_vertically(insets: VerticalInsets) -> Self {
        Self::pin_edges(Edges::VERTICAL, insets.into())
    }

    pub fn pin_top(inset: f32) -> Self {
        Self::pin_edges(Edges::TOP, EdgeInsets::all(inset))
    }

    pub fn pin_bottom(inset: f32) -> Self {
        Self::pin_edges(Edges::BOTTOM, EdgeInsets::all(inset))
    }

    pub fn pin_leading(inset: f32) -> Self {
        Self::pin_edges(Edges::LEADING, EdgeInsets::all(inset))
    }

    pub fn pin_trailing(inset: f32) -> Self {
        Self::pin_edges(Edges::TRAILING, EdgeInsets::all(inset))
    }

    /// Pin the given `edges` using the matching values from `insets`.
    pub fn pin_edges(edges: Edges, insets: EdgeInsets) -> Self {
        Self::style(move |style| {
            style.position = Position::Absolute;
            if edges.contains(Edges::TOP) {
                style.inset.top = LengthPercentageAuto::Length(insets.top);
            }
            if edges.contains(Edges::BOTTOM) {
                style.inset.bottom = LengthPercentageAuto::Length(insets.bottom);
            }
            if edges.contains(Edges::LEADING) {
                style.inset.left = LengthPercentageAuto::Length(insets.leading);
            }
            if edges.contains(Edges::TRAILING) {
                style.inset.right = LengthPercentageAuto::Length(insets.trailing);
            }
        })
    }

    // =========================================================================
    // Center
    // =========================================================================

    pub fn align_center() -> Self {
        Self::align_center_x(0.0).and(Self::align_center_y(0.0))
    }

    /// Center horizontally, shifted right by `offset`.
    pub fn align_center_x(offset: f32) -> Self {
        Self::style(move |style| {
            style.position = Position::Absolute;
            style.inset.left = LengthPercentageAuto::Length(offset);
            style.inset.right = LengthPercentageAuto::Length(-offset);
            style.margin.left = LengthPercentageAuto::Auto;
            style.margin.right = LengthPercentageAuto::Auto;
        })
    }

    /// Center vertically, shifted down by `offset`.
    pub fn align_center_y(offset: f32) -> Self {
        Self::style(move |style| {
            style.position = Position::Absolute;
            style.inset.top = LengthPercentageAuto::Length(offset);
            style.inset.bottom = LengthPercentageAuto::Length(-offset);
            style.margin.top = LengthPercentageAuto::Auto;
            style.margin.bottom = LengthPercentageAuto::Auto;
        })
    }

    // =========================================================================
    // Size
    // =========================================================================

    pub fn size(width: f32, height: f32) -> Self {
        Self::width(width).and(Self::height(height))
    }

    pub fn width(width: f32) -> Self {
        Self::style(move |style| style.size.width = Dimension::Length(width))
    }

    pub fn height(height: f32) -> Self {
        Self::style(move |style| style.size.height = Dimension::Length(height))
    }

    /// Width divided by height.
    pub fn aspect_ratio(width_to_height: f32) -> Self {
        Self::style(move |style| style.aspect_ratio = Some(width_to_height))
    }

    pub fn aspect_ratio_square() -> Self {
        Self::aspect_ratio(1.0)
    }

    /// Size as a fraction (`0.0..=1.0`) of the superview.
    pub fn relative_size(width: f32, height: f32) -> Self {
        Self::relative_width(width).and(Self::relative_height(height))
    }

    pub fn relative_width(fraction: f32) -> Self {
        Self::with_superview(move |view, _| {
            view.update_style(|style| style.size.width = Dimension::Percent(fraction));
        })
    }

    pub fn relative_height(fraction: f32) -> Self {
        Self::with_superview(move |view, _| {
            view.update_style(|style| style.size.height = Dimension::Percent(fraction));
        })
    }
}

impl Default for LayoutOption {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for LayoutOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LayoutOption")
    }
}

impl From<Vec<LayoutOption>> for LayoutOption {
    fn from(options: Vec<LayoutOption>) -> Self {
        Self::all(options)
    }
}
