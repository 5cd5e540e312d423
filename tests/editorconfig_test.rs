use burnish::api::editorconfig;
use burnish::config::EndOfLine;

mod common;

#[test]
fn parses_sections_and_root() {
  let parsed = editorconfig::parse(
    r#"
# top-level comment
root = true

[*]
indent_style = space
indent_size = 2

[*.md]
max_line_length = 100
"#,
  );

  assert!(parsed.root);
  assert_eq!(parsed.sections.len(), 2);
  assert_eq!(parsed.sections[0].pattern, "*");
  assert_eq!(
    parsed.sections[0].properties,
    vec![
      ("indent_style".to_string(), "space".to_string()),
      ("indent_size".to_string(), "2".to_string()),
    ]
  );
  assert_eq!(parsed.sections[1].pattern, "*.md");
  assert_eq!(
    parsed.sections[1].properties,
    vec![("max_line_length".to_string(), "100".to_string())]
  );
}

#[test]
fn resolves_options_with_nearest_file_priority() {
  let temp_dir = common::unique_temp_dir();
  common::write_file(
    &temp_dir.join(".editorconfig"),
    r#"
root = true

[*]
indent_style = space
indent_size = 2
end_of_line = lf

[*.md]
max_line_length = 100
"#,
  );
  common::write_file(
    &temp_dir.join("sub/.editorconfig"),
    r#"
[*.md]
indent_size = 4
"#,
  );

  let doc = temp_dir.join("sub/doc.md");
  let options = editorconfig::options_for(&doc).expect("should resolve options");
  assert_eq!(options.tab_width, Some(4));
  assert_eq!(options.print_width, Some(100));
  assert_eq!(options.use_tabs, Some(false));
  assert_eq!(options.end_of_line, Some(EndOfLine::Lf));
  assert_eq!(options.parser, None);

  let data = temp_dir.join("sub/data.json");
  let options = editorconfig::options_for(&data).expect("should resolve options");
  assert_eq!(options.tab_width, Some(2));
  assert_eq!(options.print_width, None);
}

#[test]
fn later_sections_override_earlier_ones() {
  let temp_dir = common::unique_temp_dir();
  common::write_file(
    &temp_dir.join(".editorconfig"),
    r#"
root = true

[*]
indent_size = 2

[*.yaml]
indent_size = 8
indent_style = tab
"#,
  );

  let options =
    editorconfig::options_for(&temp_dir.join("pipeline.yaml")).expect("should resolve options");
  assert_eq!(options.tab_width, Some(8));
  assert_eq!(options.use_tabs, Some(true));

  let options =
    editorconfig::options_for(&temp_dir.join("main.rs")).expect("should resolve options");
  assert_eq!(options.tab_width, Some(2));
  assert_eq!(options.use_tabs, None);
}

#[test]
fn matches_path_relative_patterns() {
  let temp_dir = common::unique_temp_dir();
  common::write_file(
    &temp_dir.join(".editorconfig"),
    r#"
root = true

[docs/*.md]
max_line_length = 72
"#,
  );

  let options =
    editorconfig::options_for(&temp_dir.join("docs/guide.md")).expect("should resolve options");
  assert_eq!(options.print_width, Some(72));

  let options =
    editorconfig::options_for(&temp_dir.join("other/guide.md")).expect("should resolve options");
  assert_eq!(options.print_width, None);
}
