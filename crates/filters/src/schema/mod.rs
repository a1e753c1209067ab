//! Filter schema types.
//!
//! Defines the model shared by the decoder, the encoder and the presentation layer:
//! - `FilterKind`: closed set of field shapes
//! - `FilterDescriptor` / `FieldSpec`: one filterable field and its per-kind configuration
//! - `Clause`: one decoded criterion, shaped by kind
//! - `FilterField` / `FilterSet`: included and excluded clauses per field

mod clause;
mod descriptor;
mod filter_set;
mod kind;
mod reference;

pub use clause::*;
pub use descriptor::*;
pub use filter_set::*;
pub use kind::*;
pub use reference::*;
