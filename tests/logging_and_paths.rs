// tests/logging_and_paths.rs

use std::path::{Path, PathBuf};

use clap::Parser;
use flowstate::cli::{CliArgs, Command, LogLevel};
use flowstate::config::resolve_config_path;
use flowstate::logging::filter_directives;

#[test]
fn cli_level_overrides_environment() {
    assert_eq!(filter_directives(Some(LogLevel::Debug), Some("warn")), "debug");
    assert_eq!(filter_directives(Some(LogLevel::Error), None), "error");
}

#[test]
fn environment_directives_pass_through() {
    assert_eq!(
        filter_directives(None, Some("flowstate::layout=trace,warn")),
        "flowstate::layout=trace,warn"
    );
}

#[test]
fn blank_environment_falls_back_to_info() {
    assert_eq!(filter_directives(None, None), "info");
    assert_eq!(filter_directives(None, Some("   ")), "info");
}

#[test]
fn explicit_config_path_wins() {
    assert_eq!(
        resolve_config_path(Some(Path::new("conf/team.toml"))),
        PathBuf::from("conf/team.toml")
    );
}

#[test]
fn cli_parses_queue_and_layout_commands() {
    let args = CliArgs::try_parse_from([
        "flowstate",
        "--project",
        "plans/q3.toml",
        "--log-level",
        "debug",
        "queue",
        "--user",
        "alice",
    ])
    .expect("valid args");
    assert!(args.config.is_none());
    assert!(matches!(
        args.command,
        Command::Queue { user: Some(ref u), team: None } if u == "alice"
    ));

    let args = CliArgs::try_parse_from([
        "flowstate",
        "--config",
        "custom.toml",
        "--project",
        "q3.toml",
        "layout",
        "--mode",
        "tb",
        "--organize",
        "--dry-run",
    ])
    .expect("valid args");
    assert_eq!(args.config.as_deref(), Some(Path::new("custom.toml")));
    match args.command {
        Command::Layout {
            mode,
            organize,
            dry_run,
        } => {
            assert_eq!(mode.as_deref(), Some("tb"));
            assert!(organize);
            assert!(dry_run);
        }
        other => panic!("expected layout command, got {other:?}"),
    }
}

#[test]
fn queue_rejects_user_and_team_together() {
    let result = CliArgs::try_parse_from([
        "flowstate",
        "--project",
        "q3.toml",
        "queue",
        "--user",
        "alice",
        "--team",
        "core",
    ]);
    assert!(result.is_err());

    let result = CliArgs::try_parse_from(["flowstate", "--project", "q3.toml", "queue"]);
    assert!(result.is_err());
}
