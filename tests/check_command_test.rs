use burnish::api::diff;
use burnish::commands::check::check_file;
use std::fs;

mod common;

#[test]
fn accepts_correctly_formatted_files() {
  let temp_dir = common::unique_temp_dir();
  let file = temp_dir.join("pipeline.yaml");
  common::write_file(&file, "SERVICES:\n");

  let config = common::test_config();

  assert!(check_file(&config, &file));
}

#[test]
fn rejects_files_that_would_be_reformatted() {
  let temp_dir = common::unique_temp_dir();
  let file = temp_dir.join("pipeline.yaml");
  common::write_file(&file, "services:\n");

  let config = common::test_config();

  assert!(!check_file(&config, &file));
  // Checking never rewrites the file.
  assert_eq!(
    fs::read_to_string(&file).expect("should read file"),
    "services:\n"
  );
}

#[test]
fn accepts_ignored_and_unsupported_files() {
  let temp_dir = common::unique_temp_dir();
  common::write_file(&temp_dir.join(".burnishignore"), "*.yaml\n");
  common::write_file(&temp_dir.join("pipeline.yaml"), "services:\n");
  common::write_file(&temp_dir.join("notes.txt"), "hello\n");

  let config = common::test_config();

  assert!(check_file(&config, &temp_dir.join("pipeline.yaml")));
  assert!(check_file(&config, &temp_dir.join("notes.txt")));
}

#[test]
fn reports_engine_failures_as_check_failures() {
  let temp_dir = common::unique_temp_dir();
  let file = temp_dir.join("data.json");
  common::write_file(&file, "{}\n");

  // No formatter is configured for the json parser.
  let config = common::test_config();

  assert!(!check_file(&config, &file));
}

#[test]
fn renders_a_unified_diff() {
  let rendered = diff::unified("services:\nname: a\n", "SERVICES:\nname: a\n", "pipeline.yaml");

  assert!(rendered.contains("--- pipeline.yaml"));
  assert!(rendered.contains("+++ pipeline.yaml-formatted"));
  assert!(rendered.contains("-services:"));
  assert!(rendered.contains("+SERVICES:"));
  assert!(rendered.contains(" name: a"));
}
