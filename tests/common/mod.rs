#![allow(dead_code)]

use std::{
  collections::HashMap,
  fs,
  path::{Path, PathBuf},
  time::{SystemTime, UNIX_EPOCH},
};

use burnish::config::{BurnishConfig, FormatterSpec};

pub fn unique_temp_dir() -> PathBuf {
  let nanos = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .expect("time should be available")
    .as_nanos();
  let temp_dir = std::env::temp_dir().join(format!("burnish-test-{nanos}"));
  fs::create_dir_all(&temp_dir).expect("should create temp dir");
  temp_dir
}

pub fn write_file(path: &Path, content: &str) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).expect("should create parent dirs");
  }
  fs::write(path, content).expect("should write file");
}

pub fn upcase_formatter() -> FormatterSpec {
  FormatterSpec {
    cmd: "tr".to_string(),
    args: vec!["a-z".to_string(), "A-Z".to_string()],
    stdin: Some(true),
    fail_on_stderr: None,
  }
}

pub fn identity_formatter() -> FormatterSpec {
  FormatterSpec {
    cmd: "cat".to_string(),
    args: Vec::new(),
    stdin: Some(true),
    fail_on_stderr: None,
  }
}

pub fn test_config() -> BurnishConfig {
  BurnishConfig {
    options: None,
    overrides: None,
    formatters: Some(HashMap::from([
      ("upcase".to_string(), upcase_formatter()),
      ("identity".to_string(), identity_formatter()),
    ])),
    parsers: Some(HashMap::from([
      ("yaml".to_string(), vec!["upcase".to_string()]),
      ("markdown".to_string(), vec!["identity".to_string()]),
    ])),
    base_dir: None,
  }
}
