use serde::Serialize;

/// Identifier of the element the UI framework mounts onto. The generated
/// shell and the bootstrap launcher must agree on this value; a mismatch
/// only surfaces as a failed mount at application start.
pub const MOUNT_NODE_ID: &str = "app";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaTag {
  pub name: String,
  pub content: String,
}

impl MetaTag {
  pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
    Self { name: name.into(), content: content.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlShellSpec {
  pub title: String,
  pub meta_tags: Vec<MetaTag>,
  pub mount_node_id: String,
}

impl HtmlShellSpec {
  pub fn new(title: String, meta_tags: Vec<MetaTag>) -> Self {
    Self { title, meta_tags, mount_node_id: MOUNT_NODE_ID.to_string() }
  }
}
