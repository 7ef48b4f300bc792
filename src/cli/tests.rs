//! Unit tests for CLI commands

use crate::cli::{format_routes, Cli, Commands, OutputFormat};
use crate::descriptor::HttpVerb;
use crate::router::RouteSpec;
use clap::Parser;
use std::collections::BTreeMap;

#[test]
fn test_make_controller_parses() {
    let cli = Cli::try_parse_from([
        "autoroute-gen",
        "make-controller",
        "Admin/User",
        "--dir",
        "app",
        "--auto",
        "--resource",
    ])
    .unwrap();

    match cli.command {
        Commands::MakeController {
            name,
            dir,
            auto,
            resource,
            force,
            ..
        } => {
            assert_eq!(name, "Admin/User");
            assert_eq!(dir.to_string_lossy(), "app");
            assert!(auto);
            assert!(resource);
            assert!(!force);
        }
        _ => panic!("Expected MakeController command"),
    }
}

#[test]
fn test_routes_repeatable_except() {
    let cli = Cli::try_parse_from([
        "autoroute-gen",
        "routes",
        "--dir",
        "app",
        "--except",
        "Admin",
        "--except",
        "Legacy",
        "--format",
        "json",
    ])
    .unwrap();

    match cli.command {
        Commands::Routes {
            config,
            except,
            prefix,
            format,
            ..
        } => {
            assert_eq!(config.to_string_lossy(), "autoroute.toml");
            assert_eq!(except, vec!["Admin", "Legacy"]);
            assert_eq!(prefix, "");
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("Expected Routes command"),
    }
}

#[test]
fn test_routes_requires_dir() {
    assert!(Cli::try_parse_from(["autoroute-gen", "routes"]).is_err());
}

#[test]
fn test_format_routes_aligns_columns() {
    let route = RouteSpec {
        method: HttpVerb::Get,
        uri: "/blog/post/show/{id}".to_string(),
        name: Some("blog.post.show".to_string()),
        middleware: vec!["web".to_string()],
        controller: "App::PostController".to_string(),
        action: "show".to_string(),
        domain: None,
        without_middleware: Vec::new(),
        extra: BTreeMap::new(),
    };
    let out = format_routes(&[route]);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("METHOD  URI"));
    assert!(lines[1].starts_with("GET     /blog/post/show/{id}"));
    assert!(lines[1].ends_with("App::PostController@show  web"));
}
