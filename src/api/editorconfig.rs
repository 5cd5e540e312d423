use anyhow::{Context, Result};
use globset::GlobBuilder;
use std::path::{Path, PathBuf};

use crate::config::{EndOfLine, FormatOptions};

pub const EDITORCONFIG_FILE: &str = ".editorconfig";

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
  pub pattern: String,
  pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorConfig {
  pub root: bool,
  pub sections: Vec<Section>,
}

pub fn parse(content: &str) -> EditorConfig {
  let mut config = EditorConfig::default();
  let mut current: Option<Section> = None;

  for line in content.lines() {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
      continue;
    }

    if line.starts_with('[') && line.ends_with(']') {
      if let Some(section) = current.take() {
        config.sections.push(section);
      }
      current = Some(Section {
        pattern: line[1..line.len() - 1].to_string(),
        properties: Vec::new(),
      });
      continue;
    }

    let Some((key, value)) = line.split_once('=') else {
      continue;
    };
    let key = key.trim().to_ascii_lowercase();
    let value = value.trim().to_string();

    match current.as_mut() {
      Some(section) => section.properties.push((key, value)),
      None => {
        if key == "root" {
          config.root = value.eq_ignore_ascii_case("true");
        }
      }
    }
  }

  if let Some(section) = current.take() {
    config.sections.push(section);
  }

  config
}

pub fn find_all(start_dir: &Path) -> Result<Vec<(PathBuf, EditorConfig)>> {
  let mut found = Vec::new();

  for ancestor in start_dir.ancestors() {
    let candidate = ancestor.join(EDITORCONFIG_FILE);
    if !candidate.is_file() {
      continue;
    }

    let content = std::fs::read_to_string(&candidate)
      .with_context(|| format!("Failed to read {:?}", candidate))?;
    let config = parse(&content);
    let root = config.root;
    found.push((ancestor.to_path_buf(), config));

    if root {
      break;
    }
  }

  Ok(found)
}

fn section_matches(base_dir: &Path, pattern: &str, path: &Path) -> Result<bool> {
  let path_relative = pattern.contains('/');
  let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);

  let glob = GlobBuilder::new(trimmed)
    .literal_separator(path_relative)
    .build()
    .with_context(|| format!("Invalid editorconfig pattern {pattern:?}"))?;
  let matcher = glob.compile_matcher();

  if path_relative {
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    return Ok(matcher.is_match(relative));
  }

  match path.file_name() {
    Some(name) => Ok(matcher.is_match(name)),
    None => Ok(false),
  }
}

fn apply_properties(options: &mut FormatOptions, properties: &[(String, String)]) {
  for (key, value) in properties {
    match key.as_str() {
      "indent_style" => match value.to_ascii_lowercase().as_str() {
        "tab" => options.use_tabs = Some(true),
        "space" => options.use_tabs = Some(false),
        _ => {}
      },
      "indent_size" | "tab_width" => {
        if let Ok(width) = value.parse::<u32>() {
          options.tab_width = Some(width);
        }
      }
      "max_line_length" => {
        if let Ok(width) = value.parse::<u32>() {
          options.print_width = Some(width);
        }
      }
      "end_of_line" => match value.to_ascii_lowercase().as_str() {
        "lf" => options.end_of_line = Some(EndOfLine::Lf),
        "crlf" => options.end_of_line = Some(EndOfLine::Crlf),
        "cr" => options.end_of_line = Some(EndOfLine::Cr),
        _ => {}
      },
      _ => {}
    }
  }
}

pub fn options_for(path: &Path) -> Result<FormatOptions> {
  let start_dir = match path.parent() {
    Some(parent) if parent != Path::new("") => parent.to_path_buf(),
    _ => std::env::current_dir()?,
  };

  let configs = find_all(&start_dir)?;
  let mut options = FormatOptions::default();

  // Outermost file first, so nearer files override its properties.
  for (dir, config) in configs.iter().rev() {
    let mut properties: Vec<(String, String)> = Vec::new();
    for section in &config.sections {
      if section_matches(dir, &section.pattern, path)? {
        properties.extend(section.properties.iter().cloned());
      }
    }
    apply_properties(&mut options, &properties);
  }

  Ok(options)
}
