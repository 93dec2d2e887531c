//! Error types.

use thiserror::Error;

use crate::types::ViewId;

/// Misuse of a declared slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// The slot was read before any resolution produced a value.
    #[error("trying to access slot `{slot}` before it was resolved")]
    Unresolved { slot: String },

    /// Arranged slots are fixed once resolved.
    #[error("arranged slot `{slot}` cannot be replaced after it was resolved")]
    ArrangedReplace { slot: String },
}

/// Failure while laying out a view tree.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("taffy error: {0}")]
    Taffy(#[from] taffy::TaffyError),

    #[error("view {0} is not part of the laid out tree")]
    NotInTree(ViewId),
}
