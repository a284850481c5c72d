//! Configuration System
//!
//! Layered provider configuration: merge-policy defaults, the global config
//! file, workspace config files and `GDASH__*` environment variables, in
//! increasing precedence. The `[defaults]` section feeds the defaults
//! registry; `[logging]` configures the subscriber.

use crate::defaults::{Defaults, DefaultsSettings};
use crate::error::PanelError;
use crate::logging::LoggingConfig;
use crate::options::validate::{check_axis, check_field, Violations};
use serde::Deserialize;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GdashConfig {
    /// Provider-level panel defaults
    #[serde(default)]
    pub defaults: DefaultsSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GdashConfig {
    /// Range checks on the provider settings
    ///
    /// Settings blocks are single by construction, so only value checks
    /// (such as the axis log base) can fail here.
    pub fn validate(&self) -> Result<(), PanelError> {
        let mut violations = Violations::new();
        if let Some(timeseries) = &self.defaults.timeseries {
            check_field(&mut violations, timeseries.field.as_slice());
            check_axis(&mut violations, timeseries.axis.as_slice());
        }
        if let Some(stat) = &self.defaults.stat {
            check_field(&mut violations, stat.field.as_slice());
        }
        violations.into_result().map_err(|e| match e {
            PanelError::Validation(message) => PanelError::ConfigError(message),
            other => other,
        })
    }

    /// Build the defaults registry for this configuration
    pub fn registry(&self) -> Defaults {
        Defaults::from_settings(&self.defaults)
    }
}
