use anyhow::Result;
use std::path::Path;

use crate::config::{BurnishConfig, FormatOptions};

pub mod diff;
pub mod editorconfig;
pub mod engine;
pub mod fileinfo;
pub mod resolve;
pub mod support;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FileContext {
  pub config: FormatOptions,
  pub info: fileinfo::FileInfo,
}

impl FileContext {
  pub fn effective_parser(&self) -> Option<&str> {
    self
      .config
      .parser
      .as_deref()
      .or(self.info.inferred_parser.as_deref())
  }
}

pub fn file_context(config: &BurnishConfig, path: &Path) -> Result<FileContext> {
  let options = resolve::resolve_options(config, path)?;
  let info = fileinfo::file_info(path)?;

  Ok(FileContext {
    config: options,
    info,
  })
}

pub fn format_str(config: &BurnishConfig, data: &str, filename: &Path) -> Result<String> {
  let context = file_context(config, filename)?;
  if context.info.ignored {
    return Ok(data.to_string());
  }
  let Some(parser) = context.effective_parser().map(String::from) else {
    return Ok(data.to_string());
  };

  let mut options = context.config;
  options.parser = Some(parser);

  let formatted = engine::format_source(config, data.as_bytes(), &options)?;
  Ok(String::from_utf8(formatted)?)
}
