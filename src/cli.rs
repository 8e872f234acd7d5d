//! CLI domain: parse, route, output, and presentation only.
//! No decoding logic here; the route table dispatches to the context domain.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_inspect_json, format_inspect_text, format_validate_result_text, InspectRow,
};
pub use route::{read_input, RunContext};
