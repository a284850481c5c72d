//! Config loading facade: one entry point over every source.

use crate::config::merge::merge_policy::builder_with_defaults;
use crate::config::sources::{env, global_file, workspace_file};
use crate::config::GdashConfig;
use crate::error::PanelError;
use config::File;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace
    ///
    /// Sources, lowest precedence first: merge policy defaults, the global
    /// config file, `config/config.toml`, `config/{GDASH_ENV}.toml`, then
    /// `GDASH__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<GdashConfig, PanelError> {
        let global = global_file::global_config_path();
        Self::load_with_global(workspace_root, global.as_deref())
    }

    /// Same as [`ConfigLoader::load`] with an explicit global file path
    pub fn load_with_global(
        workspace_root: &Path,
        global_path: Option<&Path>,
    ) -> Result<GdashConfig, PanelError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, global_path)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = env::add_to_builder(builder);

        let config: GdashConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from a single file, skipping every other source
    pub fn load_from_file(path: &Path) -> Result<GdashConfig, PanelError> {
        let config: GdashConfig = builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true))
            .build()?
            .try_deserialize()?;
        debug!(config_path = %path.display(), "Loaded configuration file");
        Ok(config)
    }
}
