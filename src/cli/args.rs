//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Page asset resolver for server-rendered pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: page-assets.toml)
    #[arg(short = 'C', long, default_value = "page-assets.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve the assets of a page and print them as JSON
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Validate a plugin manifest against this engine version
    #[command(visible_alias = "c")]
    Check {
        /// Plugin manifest (default: `plugin` under [manifest])
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: Option<PathBuf>,
    },
}

/// Output ordering of `resolve`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Eager delivery order for HTML injection
    #[default]
    Push,
    /// Order for an early-hints response
    EarlyHints,
    /// Resolution order, unsorted
    None,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Client entry of the page (repeatable). `@@page-assets/` ids name engine modules.
    #[arg(short, long = "entry", value_name = "ID")]
    pub entries: Vec<String>,

    /// Client dependency of the page (repeatable)
    #[arg(short, long = "dep", value_name = "ID")]
    pub deps: Vec<String>,

    /// Dependency imported by server code: collect its static assets only (repeatable)
    #[arg(short, long = "only-assets", value_name = "ID")]
    pub only_assets: Vec<String>,

    /// Resolve against the build manifest
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub production: Option<bool>,

    /// Resolve against the dev server (same as `--production false`)
    #[arg(short = 'D', long, conflicts_with = "production")]
    pub development: bool,

    /// Page is being pre-rendered (always uses the build manifest)
    #[arg(short = 'R', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub pre_render: Option<bool>,

    /// Override the base URL of the app
    #[arg(short = 'U', long, value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Override the base of asset URLs (e.g. a CDN)
    #[arg(short = 'A', long, value_hint = clap::ValueHint::Url)]
    pub base_assets: Option<String>,

    /// Output ordering
    #[arg(long, value_enum, default_value_t = Order::Push)]
    pub order: Order,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub const fn is_resolve(&self) -> bool {
        matches!(self.command, Commands::Resolve { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "page-assets",
            "resolve",
            "--entry",
            "/src/entry.js",
            "--entry",
            "@@page-assets/dist/client/router.js",
            "--dep",
            "pages/index.js",
            "--only-assets",
            "server/db.js",
            "--production",
            "--order",
            "early-hints",
            "-v",
        ]);
        assert!(cli.is_resolve());
        assert!(cli.verbose);

        let Commands::Resolve { args } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.entries.len(), 2);
        assert_eq!(args.deps, ["pages/index.js"]);
        assert_eq!(args.only_assets, ["server/db.js"]);
        assert_eq!(args.production, Some(true));
        assert_eq!(args.pre_render, None);
        assert_eq!(args.order, Order::EarlyHints);
    }

    #[test]
    fn test_parse_production_value() {
        let cli = Cli::parse_from(["page-assets", "resolve", "--production", "false"]);
        let Commands::Resolve { args } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.production, Some(false));
        assert_eq!(args.order, Order::Push);
    }

    #[test]
    fn test_development_conflicts_with_production() {
        let result = Cli::try_parse_from(["page-assets", "resolve", "-p", "-D"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from(["page-assets", "-C", "app.toml", "check", "plugin.json"]);
        assert!(!cli.is_resolve());
        assert_eq!(cli.config, PathBuf::from("app.toml"));
        assert!(matches!(cli.command, Commands::Check { path: Some(_) }));
    }
}
