//! Override Merge Engine
//!
//! Layers override blocks onto concrete defaults. Each section implements
//! [`Overlay`] for its block type: a present field overwrites, an absent one
//! keeps whatever the lower layer left there. The same impls serve both the
//! provider layer (settings onto builtin defaults) and the request layer
//! (request blocks onto registry defaults), so layering is always
//! builtin → provider → request.

pub mod field;
pub mod row;
pub mod stat;
pub mod timeseries;

pub use field::merge_field_config;
pub use stat::merge_stat_options;
pub use timeseries::{merge_custom, merge_legend, merge_tooltip};

/// Apply an override block onto a concrete settings struct
pub trait Overlay<O> {
    fn overlay(&mut self, overrides: &O);

    /// Apply a zero-or-one block list in order
    fn overlay_all(&mut self, blocks: &[O]) {
        for block in blocks {
            self.overlay(block);
        }
    }
}

/// Overwrite `slot` when the override is present
pub(crate) fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

/// Same as [`set`] for settings that are nullable in the document
pub(crate) fn set_nullable<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        *slot = value.clone();
    }
}
