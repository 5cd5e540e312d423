use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
  fs,
  path::{Path, PathBuf},
  time::Instant,
};

use crate::{
  api::{self, diff, engine},
  cli::GlobalOpts,
  commands::format::collect_files,
  config::{self, BurnishConfig},
};

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
  /// Files or directories to check; defaults to the current directory
  pub paths: Vec<PathBuf>,
}

fn try_check_file(config: &BurnishConfig, path: &Path) -> Result<bool> {
  let context = api::file_context(config, path)?;
  if context.info.ignored {
    return Ok(true);
  }
  let Some(parser) = context.effective_parser().map(String::from) else {
    return Ok(true);
  };

  let mut options = context.config;
  options.parser = Some(parser);

  let source = fs::read_to_string(path)?;
  let formatted = engine::format_source(config, source.as_bytes(), &options)
    .with_context(|| format!("Check failed with options:\n{}", options.to_toml()))?;

  if formatted.as_slice() == source.as_bytes() {
    return Ok(true);
  }

  let formatted = String::from_utf8(formatted)?;
  let name = path.to_string_lossy();
  log::error!(
    "Wrong formatting for {:?} with options:\n{}{}",
    path,
    options.to_toml(),
    diff::unified(&source, &formatted, &name)
  );

  Ok(false)
}

pub fn check_file(config: &BurnishConfig, path: &Path) -> bool {
  match try_check_file(config, path) {
    Ok(success) => success,
    Err(error) => {
      log::error!("Failed to check {:?}: {:#}", path, error);
      false
    }
  }
}

pub fn handle(args: CheckArgs, global: GlobalOpts) -> Result<()> {
  let config = config::load(global.config)?;

  let paths = if args.paths.is_empty() {
    vec![PathBuf::from(".")]
  } else {
    args.paths
  };
  let files = collect_files(&paths)?;

  let start = Instant::now();
  let results = files
    .par_iter()
    .map(|path| check_file(&config, path))
    .collect::<Vec<bool>>();
  log::debug!(
    "Check sweep duration: {:?}",
    Instant::now().duration_since(start)
  );

  let failed = results.iter().filter(|success| !**success).count();
  if failed > 0 {
    anyhow::bail!("{failed} file(s) are not correctly formatted");
  }

  Ok(())
}
