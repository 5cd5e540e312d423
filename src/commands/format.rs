use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
  fs,
  io::{Read, Write},
  path::{Path, PathBuf},
  time::Instant,
};

use crate::{
  api::{self, engine, fileinfo},
  cli::GlobalOpts,
  config::{self, BurnishConfig},
};

#[derive(clap::Args, Debug)]
pub struct FormatArgs {
  /// Files or directories to format; reads stdin when empty
  pub paths: Vec<PathBuf>,

  /// Parser to use for stdin input
  #[arg(long)]
  pub parser: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Skipped,
  Unchanged,
  Changed,
}

pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
  let mut files = Vec::new();

  for path in paths {
    if path.is_file() {
      files.push(path.clone());
      continue;
    }

    let walk = ignore::WalkBuilder::new(path)
      .hidden(false)
      .filter_entry(|entry| entry.file_name() != ".git")
      .add_custom_ignore_filename(fileinfo::IGNORE_FILE)
      .build();

    for entry in walk {
      let entry = entry?;
      if entry.file_type().map(|kind| kind.is_file()).unwrap_or(false) {
        files.push(entry.into_path());
      }
    }
  }

  files.sort();
  Ok(files)
}

pub fn try_format_file(config: &BurnishConfig, path: &Path) -> Result<Outcome> {
  let context = api::file_context(config, path)?;
  if context.info.ignored {
    return Ok(Outcome::Skipped);
  }
  let Some(parser) = context.effective_parser().map(String::from) else {
    return Ok(Outcome::Skipped);
  };

  let mut options = context.config;
  options.parser = Some(parser);

  let source = fs::read(path)?;
  let formatted = engine::format_source(config, &source, &options)
    .with_context(|| format!("Format failed with options:\n{}", options.to_toml()))?;

  if formatted == source {
    return Ok(Outcome::Unchanged);
  }

  fs::write(path, &formatted)?;
  Ok(Outcome::Changed)
}

pub fn format_file(config: &BurnishConfig, path: &Path) -> bool {
  match try_format_file(config, path) {
    Ok(outcome) => {
      if outcome == Outcome::Changed {
        log::info!("Formatted {:?}", path);
      }
      true
    }
    Err(error) => {
      log::error!("Failed to format {:?}: {:#}", path, error);
      false
    }
  }
}

fn format_stdin(config: &BurnishConfig, parser: Option<&str>) -> Result<()> {
  let Some(parser) = parser else {
    anyhow::bail!("--parser is required when reading from stdin");
  };

  let input = {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    buf
  };

  let mut options = config.options.clone().unwrap_or_default();
  options.parser = Some(parser.to_string());

  let result = engine::format_source(config, &input, &options)?;
  std::io::stdout().write_all(&result)?;

  Ok(())
}

pub fn handle(args: FormatArgs, global: GlobalOpts) -> Result<()> {
  let config = config::load(global.config)?;

  if args.paths.is_empty() {
    return format_stdin(&config, args.parser.as_deref());
  }

  let files = collect_files(&args.paths)?;

  let start = Instant::now();
  let results = files
    .par_iter()
    .map(|path| format_file(&config, path))
    .collect::<Vec<bool>>();
  log::debug!(
    "Format sweep duration: {:?}",
    Instant::now().duration_since(start)
  );

  let failed = results.iter().filter(|success| !**success).count();
  if failed > 0 {
    anyhow::bail!("Failed to format {failed} file(s)");
  }

  Ok(())
}
