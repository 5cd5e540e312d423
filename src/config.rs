use anyhow::{Context, Result};
use std::{
  collections::HashMap,
  hash::Hash,
  path::{Path, PathBuf},
};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
  Lf,
  Crlf,
  Cr,
}

impl EndOfLine {
  pub fn as_str(&self) -> &'static str {
    match self {
      EndOfLine::Lf => "lf",
      EndOfLine::Crlf => "crlf",
      EndOfLine::Cr => "cr",
    }
  }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parser: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub print_width: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tab_width: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub use_tabs: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_of_line: Option<EndOfLine>,
}

impl FormatOptions {
  pub fn overlay(base: &FormatOptions, overlay: &FormatOptions) -> FormatOptions {
    FormatOptions {
      parser: overlay.parser.clone().or_else(|| base.parser.clone()),
      print_width: overlay.print_width.or(base.print_width),
      tab_width: overlay.tab_width.or(base.tab_width),
      use_tabs: overlay.use_tabs.or(base.use_tabs),
      end_of_line: overlay.end_of_line.or(base.end_of_line),
    }
  }

  pub fn to_toml(&self) -> String {
    toml::to_string(self).unwrap_or_default()
  }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct FormatterSpec {
  pub cmd: String,
  pub args: Vec<String>,
  pub stdin: Option<bool>,
  pub fail_on_stderr: Option<bool>,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct OverrideSpec {
  pub files: Vec<String>,
  pub options: FormatOptions,
}

pub type FormatterSpecs = HashMap<String, FormatterSpec>;
pub type ParserFormatters = HashMap<String, Vec<String>>;

#[derive(serde::Deserialize, Debug, Default)]
pub struct BurnishConfig {
  pub options: Option<FormatOptions>,
  pub overrides: Option<Vec<OverrideSpec>>,

  pub formatters: Option<FormatterSpecs>,
  pub parsers: Option<ParserFormatters>,

  #[serde(skip)]
  pub base_dir: Option<PathBuf>,
}

fn merge_vecs<T: Clone>(base: &Option<Vec<T>>, overlay: &Option<Vec<T>>) -> Option<Vec<T>> {
  match (base, overlay) {
    (None, None) => None,
    (Some(values), None) | (None, Some(values)) => Some(values.clone()),
    (Some(base_values), Some(overlay_values)) => {
      let mut merged = base_values.clone();
      merged.extend(overlay_values.clone());
      Some(merged)
    }
  }
}

fn merge_maps<K: Eq + Hash + Clone, V: Clone>(
  base: &Option<HashMap<K, V>>,
  overlay: &Option<HashMap<K, V>>,
) -> Option<HashMap<K, V>> {
  match (base, overlay) {
    (None, None) => None,
    (Some(values), None) | (None, Some(values)) => Some(values.clone()),
    (Some(base_values), Some(overlay_values)) => {
      let mut merged = base_values.clone();
      merged.extend(overlay_values.clone());
      Some(merged)
    }
  }
}

fn merge_options(
  base: &Option<FormatOptions>,
  overlay: &Option<FormatOptions>,
) -> Option<FormatOptions> {
  match (base, overlay) {
    (None, None) => None,
    (Some(values), None) | (None, Some(values)) => Some(values.clone()),
    (Some(base_values), Some(overlay_values)) => {
      Some(FormatOptions::overlay(base_values, overlay_values))
    }
  }
}

impl BurnishConfig {
  pub fn from_file(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let mut config: BurnishConfig = toml::from_str(&content)?;
    config.base_dir = path.parent().map(PathBuf::from);
    Ok(config)
  }

  pub fn merge(base: &BurnishConfig, overlay: &BurnishConfig) -> BurnishConfig {
    BurnishConfig {
      options: merge_options(&base.options, &overlay.options),
      overrides: merge_vecs(&base.overrides, &overlay.overrides),
      formatters: merge_maps(&base.formatters, &overlay.formatters),
      parsers: merge_maps(&base.parsers, &overlay.parsers),
      base_dir: overlay
        .base_dir
        .clone()
        .or_else(|| base.base_dir.clone()),
    }
  }
}

fn find_local_config(start_dir: &Path) -> Option<PathBuf> {
  for ancestor in start_dir.ancestors() {
    let candidate = ancestor.join("burnish.toml");
    if candidate.is_file() {
      return Some(candidate);
    }
  }
  None
}

pub fn load(config_path: Option<PathBuf>) -> Result<BurnishConfig> {
  let cwd = std::env::current_dir()?;

  if let Some(path) = config_path {
    return BurnishConfig::from_file(&cwd.join(path));
  }

  let xdg_dirs = xdg::BaseDirectories::with_prefix("burnish");
  let config_path = xdg_dirs.find_config_file("config.toml");
  let global_config = match config_path.as_deref() {
    Some(config_path) => BurnishConfig::from_file(config_path)
      .with_context(|| format!("Failed to load config {:?}", config_path))?,
    None => BurnishConfig::default(),
  };

  let local_config_path = find_local_config(&cwd);
  let local_config = match local_config_path.as_deref() {
    Some(local_config_path) => BurnishConfig::from_file(local_config_path)
      .with_context(|| format!("Failed to load config {:?}", local_config_path))?,
    None => BurnishConfig::default(),
  };

  Ok(BurnishConfig::merge(&global_config, &local_config))
}
