use anyhow::Result;
use clap::Parser as ClapParser;

use burnish::{cli, commands};

fn main() -> Result<()> {
  let cli = cli::Cli::parse();

  let mut log_builder = env_logger::builder();
  log_builder
    .format_timestamp(None)
    .format_target(false)
    .filter_module(
      "burnish",
      cli.global_opts.log_level.unwrap_or(log::LevelFilter::Info),
    )
    .filter_level(log::LevelFilter::Off);

  log_builder.init();

  match cli.command {
    cli::Commands::Format(args) => {
      commands::format::handle(args, cli.global_opts)?;
    }
    cli::Commands::Check(args) => {
      commands::check::handle(args, cli.global_opts)?;
    }
    cli::Commands::FileInfo(args) => {
      commands::file_info::handle(args, cli.global_opts)?;
    }
    cli::Commands::Info => {
      commands::info::handle()?;
    }
  }

  Ok(())
}
