use anyhow::Result;
use std::{
  fs,
  io::Write,
  path::PathBuf,
  process::{Command, Stdio},
  time::{Instant, SystemTime, UNIX_EPOCH},
};

use crate::config::{BurnishConfig, EndOfLine, FormatOptions, FormatterSpec};

pub const DEFAULT_PRINT_WIDTH: u32 = 80;
pub const DEFAULT_TAB_WIDTH: u32 = 2;

fn unique_temp_file() -> std::io::Result<PathBuf> {
  let mut path = std::env::temp_dir();
  let nanos = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .unwrap()
    .as_nanos();
  path.push(format!("burnish-format-{}-{nanos}", std::process::id()));
  Ok(path)
}

pub fn run_formatter(
  formatter: &FormatterSpec,
  source: &[u8],
  parser: &str,
  options: &FormatOptions,
) -> Result<Vec<u8>> {
  let use_stdin = formatter.stdin.unwrap_or(true);
  let mut temp_file: Option<PathBuf> = None;

  if !use_stdin {
    let path = unique_temp_file()?;
    fs::write(&path, source)?;
    temp_file = Some(path);
  }

  let file_var = temp_file
    .as_ref()
    .map(|path| path.to_string_lossy().to_string())
    .unwrap_or_default();

  let print_width = options.print_width.unwrap_or(DEFAULT_PRINT_WIDTH);
  let tab_width = options.tab_width.unwrap_or(DEFAULT_TAB_WIDTH);
  let end_of_line = options.end_of_line.unwrap_or(EndOfLine::Lf);

  let args = formatter.args.iter().map(|arg| {
    arg
      .replace("$printwidth", &format!("{print_width}"))
      .replace("$tabwidth", &format!("{tab_width}"))
      .replace("$endofline", end_of_line.as_str())
      .replace("$parser", parser)
      .replace("$file", &file_var)
  });

  let mut command = Command::new(&formatter.cmd);
  command
    .args(args)
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .stdin(Stdio::piped());

  let start = Instant::now();
  let mut proc = command.spawn()?;

  if use_stdin {
    let stdin = proc
      .stdin
      .as_mut()
      .ok_or_else(|| anyhow::anyhow!("Failed to open stdin"))?;
    stdin.write_all(source)?;
  }

  let output = proc.wait_with_output()?;

  if !output.status.success() {
    anyhow::bail!(
      "Failed to run formatter {}: {}",
      formatter.cmd,
      String::from_utf8_lossy(&output.stderr)
    );
  }

  if formatter.fail_on_stderr.unwrap_or(false) && !output.stderr.is_empty() {
    anyhow::bail!(
      "Failed to run formatter {}: {}",
      formatter.cmd,
      String::from_utf8_lossy(&output.stderr)
    );
  }

  let mut result = output.stdout;

  if !use_stdin {
    if let Some(path) = temp_file.as_ref() {
      result = fs::read(path)?;
    }
  }

  if let Some(path) = temp_file {
    let _ = fs::remove_file(path);
  }

  log::debug!(
    "Format time [{}]: {:?}",
    formatter.cmd,
    Instant::now().duration_since(start)
  );

  Ok(result)
}

pub fn format_source(
  config: &BurnishConfig,
  source: &[u8],
  options: &FormatOptions,
) -> Result<Vec<u8>> {
  let Some(parser) = options.parser.as_deref() else {
    anyhow::bail!("No parser specified in the resolved options");
  };

  let formatter_names = config
    .parsers
    .as_ref()
    .and_then(|parsers| parsers.get(parser))
    .filter(|names| !names.is_empty())
    .ok_or_else(|| anyhow::format_err!("No formatter configured for parser {parser:?}"))?;

  let mut result = Vec::from(source);
  for name in formatter_names {
    let formatter = config
      .formatters
      .as_ref()
      .and_then(|formatters| formatters.get(name))
      .ok_or_else(|| {
        anyhow::format_err!("Unknown formatter {name:?} configured for parser {parser:?}")
      })?;
    result = run_formatter(formatter, &result, parser, options)?;
  }

  Ok(result)
}

pub fn check_source(
  config: &BurnishConfig,
  source: &[u8],
  options: &FormatOptions,
) -> Result<bool> {
  let formatted = format_source(config, source, options)?;
  Ok(formatted.as_slice() == source)
}
