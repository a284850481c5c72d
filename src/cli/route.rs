//! CLI route: single route table and run context.

use crate::cli::help::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_defaults_json, format_rendered_json, format_rendered_text, format_validate_result,
};
use crate::config::{global_config_path, ConfigLoader, GdashConfig};
use crate::error::PanelError;
use crate::panel::{PanelKind, PanelRenderer, PanelRequest};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace, config path and renderer.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config_path: Option<PathBuf>,
    renderer: PanelRenderer,
}

impl RunContext {
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, PanelError> {
        let global = global_config_path();
        Self::with_global(workspace_root, config_path, global.as_deref())
    }

    /// Same as [`RunContext::new`] with an explicit global config file
    pub fn with_global(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        global_path: Option<&Path>,
    ) -> Result<Self, PanelError> {
        let config = load_config(&workspace_root, config_path.as_deref(), global_path)?;
        config.validate()?;

        Ok(Self {
            workspace_root,
            config_path,
            renderer: PanelRenderer::new(Arc::new(config.registry())),
        })
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn renderer(&self) -> &PanelRenderer {
        &self.renderer
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, PanelError> {
        info!(command = command_name(command), "Executing command");

        match command {
            Commands::Render { file, format } => {
                let request = read_request(&self.resolve(file))?;
                let rendered = self.renderer.render(&request)?;
                if format == "json" {
                    format_rendered_json(&rendered)
                } else {
                    Ok(format_rendered_text(&rendered))
                }
            }
            Commands::Validate { file, format } => {
                let request = read_request(&self.resolve(file))?;
                request.validate()?;
                format_validate_result(request.kind(), request.title(), format)
            }
            Commands::Defaults { kind } => {
                let defaults = self.renderer.defaults();
                match kind.as_deref().map(str::parse::<PanelKind>).transpose()? {
                    None => format_defaults_json(defaults),
                    Some(PanelKind::Row) => format_defaults_json(defaults.row()),
                    Some(PanelKind::Timeseries) => format_defaults_json(defaults.timeseries()),
                    Some(PanelKind::Stat) => format_defaults_json(defaults.stat()),
                }
            }
        }
    }

    /// Relative paths missing from the current directory resolve against the workspace
    fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() || file.exists() {
            file.to_path_buf()
        } else {
            self.workspace_root.join(file)
        }
    }
}

fn load_config(
    workspace_root: &Path,
    config_path: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<GdashConfig, PanelError> {
    match config_path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load_with_global(workspace_root, global_path),
    }
}

/// Read a panel request; `.json` files parse as JSON, anything else as TOML
pub fn read_request(path: &Path) -> Result<PanelRequest, PanelError> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let parsed = if is_json {
        serde_json::from_str(&contents).map_err(|e| e.to_string())
    } else {
        toml::from_str(&contents).map_err(|e| e.to_string())
    };

    let request: PanelRequest = parsed.map_err(|message| PanelError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    debug!(path = %path.display(), kind = %request.kind(), "Read panel request");
    Ok(request)
}
