use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ShellProfile {
  Minimal,
  Extended,
}

impl From<ShellProfile> for sitepack::ShellProfile {
  fn from(value: ShellProfile) -> Self {
    match value {
      ShellProfile::Minimal => sitepack::ShellProfile::Minimal,
      ShellProfile::Extended => sitepack::ShellProfile::Extended,
    }
  }
}
