use std::path::PathBuf;

use crate::commands::check::CheckArgs;
use crate::commands::file_info::FileInfoArgs;
use crate::commands::format::FormatArgs;

#[derive(Debug, clap::Args)]
pub struct GlobalOpts {
  #[clap(long, global = true)]
  pub log_level: Option<log::LevelFilter>,

  #[arg(long)]
  pub config: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
#[command(name = "burnish", version = env!("VERSION"))]
pub struct Cli {
  #[clap(flatten)]
  pub global_opts: GlobalOpts,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
  /// Format files in place, or stdin when no paths are given
  Format(FormatArgs),
  /// Verify formatting without rewriting anything
  Check(CheckArgs),
  /// Show the resolved options and file info for a path
  FileInfo(FileInfoArgs),
  /// Show the supported languages and parsers
  Info,
}
