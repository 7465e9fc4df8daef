use std::path::PathBuf;

use clap::Args;

use crate::types::{filename_policy::FilenamePolicy, shell_profile::ShellProfile};

#[derive(Args)]
pub struct InputArgs {
  /// Build mode; falls back to the `ENV` process variable. Anything other
  /// than `production` selects development.
  #[clap(long)]
  pub mode: Option<String>,

  #[clap(long, default_value = ".env")]
  pub env_file: PathBuf,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  #[clap(long)]
  pub filenames: Option<FilenamePolicy>,

  /// Bundle emitted by the bundler; required to resolve hashed filenames.
  #[clap(long)]
  pub bundle: Option<PathBuf>,

  #[clap(long, short = 'p')]
  pub port: Option<u16>,
}

#[derive(Args)]
pub struct ShellArgs {
  #[clap(long)]
  pub title: Option<String>,

  #[clap(long)]
  pub shell: Option<ShellProfile>,

  #[clap(long)]
  pub description: Option<String>,

  #[clap(long)]
  pub keywords: Option<String>,

  #[clap(long)]
  pub author: Option<String>,
}

#[derive(Args)]
pub struct ReportArgs {
  /// Print the resolved build plan as JSON before emitting.
  #[clap(long)]
  pub print_plan: bool,

  #[clap(long, short = 's')]
  pub silent: bool,
}
