use serde::Serialize;

/// Dev-server shape carried by development plans. Production plans have no
/// dev server at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSpec {
  pub port: u16,
  pub public_path: String,
  pub hot_only: bool,
}

impl Default for DevServerSpec {
  fn default() -> Self {
    Self { port: 8000, public_path: "/".to_string(), hot_only: true }
  }
}
