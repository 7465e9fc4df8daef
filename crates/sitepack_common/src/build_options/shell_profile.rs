use serde::Serialize;

/// Some revisions of the shell carry the full descriptive meta-tag list,
/// some only the bare mount document. Both are supported shells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellProfile {
  #[default]
  Minimal,
  Extended,
}
