//! Core types for spark-subviews.
//!
//! Identifiers, axes, edge sets and insets shared by the node model and the
//! layout options.

use std::cell::Cell;
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

thread_local! {
    /// Counter for generating unique node IDs.
    static ID_COUNTER: Cell<usize> = const { Cell::new(0) };
}

/// Allocate the next node ID.
pub(crate) fn next_id() -> usize {
    ID_COUNTER.with(|counter| {
        let id = counter.get();
        counter.set(id + 1);
        id
    })
}

/// Reset the node ID counter (for testing).
pub fn reset_ids() {
    ID_COUNTER.with(|counter| counter.set(0));
}

/// Identity of a [`View`](crate::view::View).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub usize);

/// Identity of a [`Controller`](crate::view::Controller).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(pub usize);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

// =============================================================================
// Axis
// =============================================================================

/// Direction in which a stack arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

// =============================================================================
// Edges (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Set of edges a layout option pins.
    ///
    /// Combine with bitwise OR: `Edges::TOP | Edges::LEADING`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEADING = 1 << 2;
        const TRAILING = 1 << 3;
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const HORIZONTAL = Self::LEADING.bits() | Self::TRAILING.bits();
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

// =============================================================================
// Insets
// =============================================================================

/// Insets applied to all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::all(0.0);

    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self { top, leading, bottom, trailing }
    }

    /// Same inset on every edge.
    pub const fn all(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Combine vertical and horizontal insets.
    pub const fn from_parts(vertical: VerticalInsets, horizontal: HorizontalInsets) -> Self {
        Self::new(vertical.top, horizontal.leading, vertical.bottom, horizontal.trailing)
    }
}

impl From<VerticalInsets> for EdgeInsets {
    fn from(vertical: VerticalInsets) -> Self {
        Self::from_parts(vertical, HorizontalInsets::ZERO)
    }
}

impl From<HorizontalInsets> for EdgeInsets {
    fn from(horizontal: HorizontalInsets) -> Self {
        Self::from_parts(VerticalInsets::ZERO, horizontal)
    }
}

/// Top and bottom insets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalInsets {
    pub top: f32,
    pub bottom: f32,
}

impl VerticalInsets {
    pub const ZERO: Self = Self::all(0.0);

    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub const fn all(inset: f32) -> Self {
        Self::new(inset, inset)
    }
}

/// Leading and trailing insets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HorizontalInsets {
    pub leading: f32,
    pub trailing: f32,
}

impl HorizontalInsets {
    pub const ZERO: Self = Self::all(0.0);

    pub const fn new(leading: f32, trailing: f32) -> Self {
        Self { leading, trailing }
    }

    pub const fn all(inset: f32) -> Self {
        Self::new(inset, inset)
    }
}
