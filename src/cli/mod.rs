//! # CLI Module
//!
//! Command-line surface of the `autoroute-gen` binary.
//!
//! ## Commands
//!
//! ### `make-controller`
//!
//! ```bash
//! autoroute-gen make-controller Admin/User --dir app --auto --resource
//! ```
//!
//! Options:
//! - `--dir <DIR>` - Directory to create the controller under (default: `.`)
//! - `--namespace <NS>` - Namespace written into the route descriptor
//! - `--config <FILE>` - Resolve the namespace from `autoroute.toml` instead
//! - `--auto` - Route-ready stubs plus a `.routes.yaml` descriptor
//! - `--resource` - index/create/store/show/edit/update/destroy stubs
//! - `--force` - Overwrite existing files
//!
//! ### `routes`
//!
//! ```bash
//! autoroute-gen routes --config autoroute.toml --dir app --prefix /blog --except Admin
//! ```
//!
//! Prints the routes directory registration produces, as a table or as JSON
//! (`--format json`).

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{format_routes, run, run_cli, Cli, Commands, OutputFormat};
