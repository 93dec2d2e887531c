//! Layout Module
//!
//! Layout directives for slot values and layout computation with
//! [Taffy](https://github.com/DioxusLabs/taffy).
//!
//! # Architecture
//!
//! 1. Slots apply a [`LayoutOption`] to each value right after attaching it;
//!    options only write into the value's `taffy::Style`
//! 2. [`compute_layout`] mirrors a view tree into a Taffy tree and extracts
//!    frames back out
//!
//! # Example
//!
//! ```ignore
//! use spark_subviews::layout::{compute_layout, LayoutOption};
//!
//! LayoutOption::pin().apply(&content);
//! let layout = compute_layout(&root, 320.0, 480.0)?;
//! let frame = layout.frame(&content)?;
//! ```

mod option;
mod taffy_bridge;

pub use option::LayoutOption;
pub use taffy_bridge::{compute_layout, ComputedLayout, Frame};
