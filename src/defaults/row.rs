//! Row defaults.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowDefaults {
    pub collapsed: bool,
}
