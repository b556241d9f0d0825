use clap::Parser;
use std::process;

use maajise::cli::{self, Cli};

fn main() {
  herald::init();
  let cli = Cli::parse_from(cli::normalize_args(std::env::args_os()));
  herald::init_logging(cli.verbose);

  if let Err(err) = cli::run(cli) {
    tracing::debug!("command failed: {err:?}");
    herald::error(&format!("{err:#}"));
    process::exit(1);
  }
}
