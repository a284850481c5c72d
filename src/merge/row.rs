//! Row merge.

use crate::defaults::{RowDefaults, RowSettings};
use crate::merge::{set, Overlay};
use crate::options::RowGraphOptions;

impl Overlay<RowGraphOptions> for RowDefaults {
    fn overlay(&mut self, overrides: &RowGraphOptions) {
        set(&mut self.collapsed, &overrides.collapsed);
    }
}

impl Overlay<RowSettings> for RowDefaults {
    fn overlay(&mut self, settings: &RowSettings) {
        self.overlay_all(settings.graph.as_slice());
    }
}
