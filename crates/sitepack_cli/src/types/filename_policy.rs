use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum FilenamePolicy {
  Fixed,
  Hashed,
}

impl From<FilenamePolicy> for sitepack::FilenamePolicy {
  fn from(value: FilenamePolicy) -> Self {
    match value {
      FilenamePolicy::Fixed => sitepack::FilenamePolicy::Fixed,
      FilenamePolicy::Hashed => sitepack::FilenamePolicy::ContentHashed,
    }
  }
}
