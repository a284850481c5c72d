//! Target/Mapping Translator
//!
//! Converts caller target and mapping blocks into the list shapes of the
//! panel document, with deterministic ordering and mapping indices.

pub mod mappings;
pub mod targets;

pub use mappings::translate_mappings;
pub use targets::translate_targets;
