use similar::TextDiff;

pub fn unified(original: &str, formatted: &str, name: &str) -> String {
  TextDiff::from_lines(original, formatted)
    .unified_diff()
    .context_radius(3)
    .header(name, &format!("{name}-formatted"))
    .to_string()
}
