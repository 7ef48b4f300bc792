use crate::assembler::{AutoRoute, RouteTarget};
use crate::config::{load_config, ProjectConfig, CONFIG_FILE};
use crate::descriptor::Options;
use crate::discovery::resolve_namespace;
use crate::generator::{make_controller, ScaffoldOptions};
use crate::router::{RouteSpec, RouteTable};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Command-line interface for autoroute
///
/// Scaffolds controllers and prints the routes a directory of controllers
/// registers.
#[derive(Parser)]
#[command(name = "autoroute-gen")]
#[command(about = "Convention-based route derivation", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new controller
    ///
    /// Nested names (`Admin/User`) create sub-directories. The name is
    /// suffixed with `Controller` when it is not already.
    MakeController {
        /// Controller name, e.g. `Post` or `Admin/UserProfile`
        name: String,

        /// Directory the controller is created under
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Namespace of `--dir`, written into the route descriptor
        #[arg(long)]
        namespace: Option<String>,

        /// Take the namespace of `--dir` and the file extension from this
        /// configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Generate route-ready stubs and a `.routes.yaml` descriptor
        #[arg(long, default_value_t = false)]
        auto: bool,

        /// Generate the seven resource methods
        #[arg(long, default_value_t = false)]
        resource: bool,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Register a controller directory and print the resulting routes
    Routes {
        /// Path to the project configuration
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,

        /// Controller directory (absolute, or relative to the project root)
        #[arg(short, long)]
        dir: PathBuf,

        /// Mount prefix
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Exclusion rule (repeatable)
        #[arg(long)]
        except: Vec<String>,

        /// Group middleware applied to every route (repeatable)
        #[arg(long)]
        middleware: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

/// How `routes` prints the table
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    Table,
    /// JSON array of routes
    Json,
}

/// Parse arguments and execute the command
///
/// # Errors
///
/// Returns an error if:
/// - The configuration or a descriptor cannot be loaded
/// - Route registration fails
/// - Scaffold files cannot be written
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse())
}

/// Execute an already-parsed command
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::MakeController {
            name,
            dir,
            namespace,
            config,
            auto,
            resource,
            force,
        } => {
            let mut options = ScaffoldOptions {
                dir,
                namespace,
                auto,
                resource,
                force,
                ..ScaffoldOptions::default()
            };
            if let Some(config) = config {
                let config = load_config(&config)?;
                if options.namespace.is_none() {
                    options.namespace = namespace_for(&options.dir, &config)?;
                }
                options.extension = config.file_extension;
            }
            make_controller(&name, &options)?;
            Ok(())
        }
        Commands::Routes {
            config,
            dir,
            prefix,
            except,
            middleware,
            format,
        } => {
            let config = load_config(&config)?;
            let dir = if dir.is_dir() { dir } else { config.resolve(&dir) };
            let auto = AutoRoute::from_config(config)?;

            let mut options = Options::new();
            if !middleware.is_empty() {
                options.insert("middleware", middleware);
            }
            let mut table = RouteTable::new();
            auto.except(except)
                .register(&mut table, &prefix, RouteTarget::Directory(&dir), &options)?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(table.routes())?),
                OutputFormat::Table => print_routes(table.routes()),
            }
            Ok(())
        }
    }
}

/// Namespace of `dir` through the source roots in `config`, if it has one.
fn namespace_for(dir: &Path, config: &ProjectConfig) -> anyhow::Result<Option<String>> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    match resolve_namespace(dir, config) {
        Ok(ns) => Ok(Some(ns)),
        Err(e) => {
            tracing::warn!(error = %e, "Writing descriptor without a namespace");
            Ok(None)
        }
    }
}

/// Render routes as aligned columns.
pub fn format_routes(routes: &[RouteSpec]) -> String {
    let rows: Vec<[String; 5]> = routes
        .iter()
        .map(|r| {
            [
                r.method.to_string(),
                r.uri.clone(),
                r.name.clone().unwrap_or_default(),
                format!("{}@{}", r.controller, r.action),
                r.middleware.join(","),
            ]
        })
        .collect();
    let header = ["METHOD", "URI", "NAME", "ACTION", "MIDDLEWARE"].map(String::from);

    let mut widths = header.clone().map(|h| h.len());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_routes(routes: &[RouteSpec]) {
    if routes.is_empty() {
        println!("No routes registered.");
        return;
    }
    println!("{}", format_routes(routes));
    println!("\n{} route(s)", routes.len());
}
