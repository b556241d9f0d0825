//! Command-line surface: argument parsing and dispatch.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::path::Path;

use crate::commands;
use crate::config::{FileConfig, InitOptions};
use crate::prompt::TerminalPrompter;

#[derive(Parser, Debug)]
#[command(name = "maajise")]
#[command(about = "Project scaffolding: git, beads, templates and boilerplate in one command

Run 'maajise <project-name>' as a shortcut for 'maajise init <project-name>'.")]
#[command(version)]
pub struct Cli {
  /// Show subprocess output and extra detail
  #[arg(short, long, global = true)]
  pub verbose: bool,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Create a new project with Git, Beads and template files
  Init(InitArgs),
  /// Add tooling or template files to an existing project
  Add {
    /// git, beads, ubs, .gitignore, readme, or any template file path
    items: Vec<String>,
    #[command(flatten)]
    files: FileArgs,
  },
  /// Write missing template files into an existing project
  Update {
    /// Only update these files (defaults to every template file)
    files: Vec<String>,
    #[command(flatten)]
    options: FileArgs,
  },
  /// Check the project setup and report problems
  Validate {
    /// Treat warnings as failures
    #[arg(long)]
    strict: bool,
  },
  /// Show a quick project status
  Status {
    /// Print machine-readable JSON
    #[arg(long)]
    json: bool,
  },
  /// Check system dependencies and configuration
  Doctor {
    /// Print machine-readable JSON
    #[arg(long)]
    json: bool,
  },
  /// List available project templates
  Templates,
  /// Manage the user configuration file
  Config {
    #[command(subcommand)]
    action: ConfigAction,
  },
  /// Show version information
  Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
  /// Write a starter config file
  Init {
    /// Replace an existing file
    #[arg(long)]
    force: bool,
  },
  /// Print the effective configuration
  Show,
  /// Print the config file location
  Path,
}

/// Flags shared by `add` and `update`
#[derive(Args, Debug, Default)]
pub struct FileArgs {
  /// Template to take files from (detected from the project when omitted)
  #[arg(long, short)]
  pub template: Option<String>,
  /// Overwrite existing files
  #[arg(long)]
  pub force: bool,
  /// Show what would change without writing anything
  #[arg(long)]
  pub dry_run: bool,
}

#[derive(Args, Debug, Default)]
pub struct InitArgs {
  /// Project name (defaults to the current directory name with --in-place)
  pub name: Option<String>,
  /// Initialize in the current directory instead of creating <name>/<name>/
  #[arg(long)]
  pub in_place: bool,
  /// Project template (see 'maajise templates')
  #[arg(long, short)]
  pub template: Option<String>,
  /// Keep files that already exist
  #[arg(long)]
  pub no_overwrite: bool,
  #[arg(long)]
  pub skip_git: bool,
  #[arg(long)]
  pub skip_beads: bool,
  #[arg(long)]
  pub skip_commit: bool,
  #[arg(long)]
  pub skip_remote: bool,
  /// Leave git user.name/user.email alone
  #[arg(long)]
  pub skip_git_user: bool,
  /// Git user.name for the new repository
  #[arg(long)]
  pub git_name: Option<String>,
  /// Git user.email for the new repository
  #[arg(long)]
  pub git_email: Option<String>,
  /// Remote URL to register as origin (https://, git@ or ssh://)
  #[arg(long)]
  pub remote: Option<String>,
  /// Initial branch name
  #[arg(long)]
  pub main_branch: Option<String>,
}

impl InitArgs {
  pub fn into_options(self, verbose: bool) -> InitOptions {
    InitOptions {
      project_name: self.name,
      in_place: self.in_place,
      no_overwrite: self.no_overwrite,
      skip_git: self.skip_git,
      skip_beads: self.skip_beads,
      skip_commit: self.skip_commit,
      skip_remote: self.skip_remote,
      skip_git_user: self.skip_git_user,
      git_name: self.git_name,
      git_email: self.git_email,
      template: self.template,
      main_branch: self.main_branch,
      remote: self.remote,
      verbose,
    }
  }
}

/// Rewrite `maajise [flags] <name> ...` into `maajise init [flags] <name> ...`.
///
/// Applies when the first positional argument is not a known subcommand.
/// Values of options that take one (`--template rust`) are not positionals.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString>,
{
  let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
  let command = Cli::command();
  let known: Vec<&str> = command
    .get_subcommands()
    .flat_map(|sub| std::iter::once(sub.get_name()).chain(sub.get_all_aliases()))
    .chain(std::iter::once("help"))
    .collect();

  let value_options: Vec<String> = command
    .get_arguments()
    .chain(command.find_subcommand("init").into_iter().flat_map(|init| init.get_arguments()))
    .filter(|arg| !arg.is_positional() && arg.get_action().takes_values())
    .flat_map(|arg| {
      let long = arg.get_long().map(|long| format!("--{long}"));
      let short = arg.get_short().map(|short| format!("-{short}"));
      long.into_iter().chain(short)
    })
    .collect();

  let mut first_positional = None;
  let mut rest = args.iter().skip(1).map(|arg| arg.to_string_lossy());
  while let Some(arg) = rest.next() {
    if value_options.iter().any(|option| *option == arg) {
      rest.next();
    } else if !arg.starts_with('-') {
      first_positional = Some(arg.into_owned());
      break;
    }
  }

  if let Some(word) = first_positional {
    if !known.contains(&word.as_str()) {
      args.insert(1, OsString::from("init"));
    }
  }
  args
}

pub fn run(cli: Cli) -> Result<()> {
  let cwd = std::env::current_dir().context("failed to get current directory")?;
  dispatch(cli, &cwd)
}

fn dispatch(cli: Cli, cwd: &Path) -> Result<()> {
  let verbose = cli.verbose;
  match cli.command {
    Commands::Init(args) => {
      let config = FileConfig::load()?;
      commands::init::execute(cwd, args.into_options(verbose), &config, &TerminalPrompter)?;
      Ok(())
    }
    Commands::Add { items, files } => {
      let options = commands::add::AddOptions {
        items,
        template: files.template,
        force: files.force,
        dry_run: files.dry_run,
        verbose,
      };
      commands::add::execute(cwd, &options, &FileConfig::load()?)
    }
    Commands::Update { files, options } => {
      let options = commands::update::UpdateOptions {
        files,
        template: options.template,
        force: options.force,
        dry_run: options.dry_run,
        verbose,
      };
      commands::update::execute(cwd, &options, &FileConfig::load()?).map(|_| ())
    }
    Commands::Validate { strict } => {
      commands::validate::execute(cwd, strict, verbose, &FileConfig::load()?).map(|_| ())
    }
    Commands::Status { json } => commands::status::execute(cwd, json).map(|_| ()),
    Commands::Doctor { json } => commands::doctor::execute(json, verbose).map(|_| ()),
    Commands::Templates => commands::templates::execute(&FileConfig::load()?),
    Commands::Config { action } => match action {
      ConfigAction::Init { force } => commands::config::init(force).map(|_| ()),
      ConfigAction::Show => commands::config::show(),
      ConfigAction::Path => commands::config::path(),
    },
    Commands::Version => commands::version::execute(),
  }
}
