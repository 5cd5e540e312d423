use anyhow::Result;
use std::path::PathBuf;

use crate::{api, cli::GlobalOpts, config};

#[derive(clap::Args, Debug)]
pub struct FileInfoArgs {
  /// File to resolve options and info for
  pub path: PathBuf,
}

pub fn handle(args: FileInfoArgs, global: GlobalOpts) -> Result<()> {
  let config = config::load(global.config)?;
  let context = api::file_context(&config, &args.path)?;

  print!("{}", toml::to_string(&context)?);

  Ok(())
}
