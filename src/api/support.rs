use std::path::Path;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LanguageSupport {
  pub name: &'static str,
  pub parser: &'static str,
  pub extensions: &'static [&'static str],
  pub filenames: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SupportInfo {
  pub languages: &'static [LanguageSupport],
}

pub const LANGUAGES: &[LanguageSupport] = &[
  LanguageSupport {
    name: "JSON",
    parser: "json",
    extensions: &["json", "geojson"],
    filenames: &[".babelrc", ".eslintrc", ".jshintrc"],
  },
  LanguageSupport {
    name: "JSON5",
    parser: "json5",
    extensions: &["json5"],
    filenames: &[],
  },
  LanguageSupport {
    name: "YAML",
    parser: "yaml",
    extensions: &["yaml", "yml"],
    filenames: &[".clang-format", ".clang-tidy", ".gemrc"],
  },
  LanguageSupport {
    name: "TOML",
    parser: "toml",
    extensions: &["toml"],
    filenames: &["Cargo.lock", "Gopkg.lock", "Pipfile"],
  },
  LanguageSupport {
    name: "Markdown",
    parser: "markdown",
    extensions: &["md", "markdown", "mdown"],
    filenames: &[],
  },
  LanguageSupport {
    name: "JavaScript",
    parser: "javascript",
    extensions: &["js", "mjs", "cjs", "jsx"],
    filenames: &[],
  },
  LanguageSupport {
    name: "TypeScript",
    parser: "typescript",
    extensions: &["ts", "mts", "cts", "tsx"],
    filenames: &[],
  },
  LanguageSupport {
    name: "CSS",
    parser: "css",
    extensions: &["css"],
    filenames: &[],
  },
  LanguageSupport {
    name: "SCSS",
    parser: "scss",
    extensions: &["scss"],
    filenames: &[],
  },
  LanguageSupport {
    name: "Less",
    parser: "less",
    extensions: &["less"],
    filenames: &[],
  },
  LanguageSupport {
    name: "HTML",
    parser: "html",
    extensions: &["html", "htm", "xhtml"],
    filenames: &[],
  },
  LanguageSupport {
    name: "GraphQL",
    parser: "graphql",
    extensions: &["graphql", "gql"],
    filenames: &[],
  },
];

pub fn support_info() -> SupportInfo {
  SupportInfo {
    languages: LANGUAGES,
  }
}

pub fn infer_parser(path: &Path) -> Option<&'static str> {
  let file_name = path.file_name()?.to_str()?;

  for language in LANGUAGES {
    if language.filenames.iter().any(|name| *name == file_name) {
      return Some(language.parser);
    }
  }

  let extension = path.extension()?.to_str()?.to_ascii_lowercase();
  for language in LANGUAGES {
    if language.extensions.iter().any(|ext| *ext == extension) {
      return Some(language.parser);
    }
  }

  None
}
