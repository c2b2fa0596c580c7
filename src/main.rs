mod checks;
mod commands;
mod core;
mod ui;

use crate::core::error::{PackError, print_error};
use clap::{Parser, Subcommand};

/// Package Processing libraries into release-ready staging trees and zips
#[derive(Parser)]
#[command(name = "procpack")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct ProcpackCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Scaffold procpack.toml and a release.properties template
  Init {
    /// Library name (default: the current directory name)
    name: Option<String>,
  },

  /// Run health checks over config, metadata, and artifact paths
  Doctor {
    /// Release tag to resolve the version from (e.g. v2.0.0)
    #[arg(long)]
    tag: Option<String>,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Print the resolved release version
  Version {
    /// Release tag to resolve the version from (e.g. v2.0.0)
    #[arg(long)]
    tag: Option<String>,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Write library.properties with the resolved version
  Metadata {
    /// Release tag to resolve the version from (e.g. v2.0.0)
    #[arg(long)]
    tag: Option<String>,
  },

  /// Clean and assemble the release staging tree (no zip)
  Stage {
    /// Release tag to resolve the version from (e.g. v2.0.0)
    #[arg(long)]
    tag: Option<String>,
    /// Output the staging report in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Produce the distributable release: stage, zip, and checksum
  Package {
    /// Release tag to resolve the version from (e.g. v2.0.0)
    #[arg(long)]
    tag: Option<String>,
    /// Output the package report in JSON format
    #[arg(long)]
    json: bool,
  },
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
  let cli = ProcpackCli::parse();

  let result = match cli.command {
    Commands::Init { name } => commands::run_init(name),
    Commands::Doctor { tag, json } => commands::run_doctor(tag, json),
    Commands::Version { tag, json } => commands::run_version(tag, json),
    Commands::Metadata { tag } => commands::run_metadata(tag),
    Commands::Stage { tag, json } => commands::run_stage(tag, json),
    Commands::Package { tag, json } => commands::run_package(tag, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: PackError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
