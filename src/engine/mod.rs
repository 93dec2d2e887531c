//! Resolution engine - Deferred values, slot declarations and the walker.
//!
//! The engine knows nothing about views. It manages:
//! - Creatable: memoized value holder parameterized by the owner
//! - Enclosed / Enclosing: slot and owner capabilities
//! - SlotRegistry: explicit, ordered slot declaration
//! - Walker: depth-first resolution over the declared graph
//!
//! # Architecture
//!
//! Owners never hand their slots out by reflection. Each owner lists them:
//!
//! ```text
//! owner.declare(registry)  →  [slot, slot, inherited slot, ...]
//!                                 │
//!                  slot.resolve_enclosing(owner)
//!                                 │
//!                  value is a composite? → resolve_all(value)
//! ```

mod creatable;
mod enclosed;
mod walker;

pub use creatable::*;
pub use enclosed::*;
pub use walker::*;
