//! Environment source: `GDASH__SECTION__KEY=value`

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

/// Add environment overrides, e.g. `GDASH__DEFAULTS__TIMESERIES__FIELD__UNIT=bytes`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("GDASH")
            .separator("__")
            .try_parsing(true),
    )
}
