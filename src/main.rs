mod commands;
mod core;
mod logging;

use clap::{Args, Parser, Subcommand};
use commands::GlobalOptions;
use crate::core::config::GitOptions;
use crate::core::error::{ReleaseError, print_error};

/// Resolve the push remote, latest tag and next tag name for a release
#[derive(Parser)]
#[command(name = "release-rail")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(flatten)]
  global: GlobalArgs,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
  /// Remote name or URL to release to (default: branch remote, then origin)
  #[arg(long, global = true)]
  push_repo: Option<String>,
  /// Tag template, e.g. "v${version}" (default: follow the latest tag)
  #[arg(long, global = true)]
  tag_name: Option<String>,
  /// Changelog command; may reference ${latestTag}
  #[arg(long, global = true)]
  changelog: Option<String>,
  /// Skip state-changing commands such as `git fetch`
  #[arg(long, global = true)]
  dry_run: bool,
  /// Log executed commands and fallbacks to stderr
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve remote, latest tag and tag template
  Resolve {
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Print the changelog since the latest tag
  Changelog,

  /// Compute the tag name for the next version
  Bump {
    /// Explicit version (1.2.0) or increment (major, minor, patch)
    #[arg(id = "bump_version", value_name = "VERSION")]
    version: String,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },
}

impl From<GlobalArgs> for GlobalOptions {
  fn from(args: GlobalArgs) -> Self {
    GlobalOptions {
      git: GitOptions {
        push_repo: args.push_repo,
        tag_name: args.tag_name,
        changelog: args.changelog,
      },
      dry_run: args.dry_run,
    }
  }
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();
  logging::init(cli.global.verbose);

  let opts = GlobalOptions::from(cli.global);

  let result = match cli.command {
    Commands::Resolve { json } => commands::run_resolve(&opts, json),
    Commands::Changelog => commands::run_changelog(&opts),
    Commands::Bump { version, json } => commands::run_bump(&opts, &version, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ReleaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
