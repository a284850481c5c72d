//! Property-based tests for merge laws, mapping indices and identifiers

mod identifier;
mod mapping_indices;
mod merge_laws;
