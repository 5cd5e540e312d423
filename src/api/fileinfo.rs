use anyhow::{Context, Result};
use ignore::gitignore::GitignoreBuilder;
use std::path::{Path, PathBuf};

use crate::api::support;

pub const IGNORE_FILE: &str = ".burnishignore";

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FileInfo {
  pub ignored: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inferred_parser: Option<String>,
}

fn find_ignore_file(start_dir: &Path) -> Option<PathBuf> {
  for ancestor in start_dir.ancestors() {
    let candidate = ancestor.join(IGNORE_FILE);
    if candidate.is_file() {
      return Some(candidate);
    }
  }
  None
}

fn is_ignored(path: &Path) -> Result<bool> {
  let start_dir = path.parent().unwrap_or(Path::new("."));
  let Some(ignore_path) = find_ignore_file(start_dir) else {
    return Ok(false);
  };

  let root = ignore_path.parent().unwrap_or(Path::new("."));
  let mut builder = GitignoreBuilder::new(root);
  if let Some(error) = builder.add(&ignore_path) {
    return Err(error).with_context(|| format!("Failed to parse {:?}", ignore_path));
  }
  let matcher = builder.build()?;

  Ok(matcher.matched_path_or_any_parents(path, false).is_ignore())
}

pub fn file_info(path: &Path) -> Result<FileInfo> {
  let path = if path.is_absolute() {
    path.to_path_buf()
  } else {
    std::env::current_dir()?.join(path)
  };

  Ok(FileInfo {
    ignored: is_ignored(&path)?,
    inferred_parser: support::infer_parser(&path).map(String::from),
  })
}
