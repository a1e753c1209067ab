//! Filter query translation engine for alert and event lists.
//!
//! This crate provides:
//! - Typed filter descriptors and compiled-in descriptor tables per object type
//! - Decoding of raw URL/persisted parameter maps into reference-resolved filter sets
//! - Encoding of filter sets into flat backend query parameters
//! - Persisted filter state keyed by object type
//!
//! Decoding and encoding are pure: they never perform I/O and never fail.
//! Unknown keys, unparseable dates and reference-lookup misses are dropped.

pub mod datetime;
pub mod decoder;
pub mod encoder;
pub mod params;
pub mod persist;
pub mod registry;
pub mod resolver;
pub mod schema;

pub use decoder::{decode_clause, parse_filters, refresh_filters};
pub use encoder::{encode_clause, encode_filters, format_object_filters_for_api};
pub use params::{FlatParams, ParamValue, RawParams};
pub use resolver::{ReferenceResolver, ReferenceSnapshot};
pub use schema::{Clause, FilterDescriptor, FilterField, FilterKind, FilterSet, Polarity};
