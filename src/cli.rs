//! CLI domain: parse, route, help, output, and presentation only.
//! No panel logic; a single route table dispatches to the renderer.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_defaults_json, format_rendered_json, format_rendered_text, format_validate_result,
};
pub use route::{read_request, RunContext};
