use anyhow::{Context, Result};
use globset::GlobBuilder;
use std::path::Path;

use crate::api::editorconfig;
use crate::config::{BurnishConfig, FormatOptions};

fn override_matches(config: &BurnishConfig, pattern: &str, path: &Path) -> Result<bool> {
  let path_relative = pattern.contains('/');
  let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);

  let glob = GlobBuilder::new(trimmed)
    .literal_separator(path_relative)
    .build()
    .with_context(|| format!("Invalid override pattern {pattern:?}"))?;
  let matcher = glob.compile_matcher();

  if path_relative {
    let relative = config
      .base_dir
      .as_deref()
      .and_then(|base| path.strip_prefix(base).ok())
      .unwrap_or(path);
    return Ok(matcher.is_match(relative));
  }

  match path.file_name() {
    Some(name) => Ok(matcher.is_match(name)),
    None => Ok(false),
  }
}

pub fn resolve_options(config: &BurnishConfig, path: &Path) -> Result<FormatOptions> {
  let path = if path.is_absolute() {
    path.to_path_buf()
  } else {
    std::env::current_dir()?.join(path)
  };

  let mut options = editorconfig::options_for(&path)?;

  if let Some(defaults) = &config.options {
    options = FormatOptions::overlay(&options, defaults);
  }

  for override_spec in config.overrides.as_deref().unwrap_or_default() {
    for pattern in &override_spec.files {
      if override_matches(config, pattern, &path)? {
        options = FormatOptions::overlay(&options, &override_spec.options);
        break;
      }
    }
  }

  Ok(options)
}
