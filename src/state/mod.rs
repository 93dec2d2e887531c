//! State Module - Runtime state driven by the host
//!
//! - **Transition** - Timed alpha transitions with guaranteed completion

pub mod transition;

pub use transition::*;
