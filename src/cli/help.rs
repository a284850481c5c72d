//! Command-name contract for logging.

use crate::cli::parse::Commands;

/// Stable command name, e.g. "render"
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Render { .. } => "render",
        Commands::Validate { .. } => "validate",
        Commands::Defaults { .. } => "defaults",
    }
}
