//! # Helium Parameter Schema
//!
//! Declarative parameter definitions for the Helium Network workflow node.
//!
//! The host runtime renders these definitions as form fields in its editor
//! and resolves the entered values at execution time. This crate is purely
//! descriptive: it carries no resolution or validation logic of its own.
//!
//! ## Core Types
//!
//! - [`ParameterDef`] — tagged union over the supported parameter kinds
//! - [`ParameterKind`] — discriminant (text, number, date-time, select)
//! - [`ParameterMetadata`] — key, label, description, required flag
//! - [`SelectOption`] — one choice in an enumerated set
//! - [`ParameterCollection`] — ordered set of definitions for one operation

/// Ordered collections of parameter definitions.
pub mod collection;
/// The tagged [`ParameterDef`] union and its accessors.
pub mod def;
/// Parameter kind discriminant.
pub mod kind;
/// Shared descriptive metadata.
pub mod metadata;
/// Choices for select parameters.
pub mod option;
/// Per-kind definition structs.
pub mod types;

/// Convenience re-exports for schema authors.
pub mod prelude {
    pub use crate::collection::ParameterCollection;
    pub use crate::def::ParameterDef;
    pub use crate::kind::ParameterKind;
    pub use crate::metadata::ParameterMetadata;
    pub use crate::option::SelectOption;
    pub use crate::types::*;
}

pub use collection::ParameterCollection;
pub use def::ParameterDef;
pub use kind::ParameterKind;
pub use metadata::ParameterMetadata;
pub use option::SelectOption;
pub use types::{
    DateTimeParameter, NumberOptions, NumberParameter, SelectParameter, TextParameter,
};
