use serde::Serialize;

/// Output naming is a selectable policy, not a hardcoded template string.
/// `Fixed` keeps the stable `bundle.js` name; `ContentHashed` buys
/// cache-busting at the cost of needing the emitted content to name the file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilenamePolicy {
  #[default]
  Fixed,
  ContentHashed,
}

impl FilenamePolicy {
  pub fn pattern(self) -> &'static str {
    match self {
      Self::Fixed => "bundle.js",
      Self::ContentHashed => "[name].[contenthash].bundle.js",
    }
  }
}
