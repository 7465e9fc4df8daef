use serde::Serialize;

use crate::{FilenamePolicy, FilenameTemplate};

/// There is a single entry chunk and this is its name.
pub const ENTRY_NAME: &str = "main";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
  pub dir: String,
  pub policy: FilenamePolicy,
  pub pattern: String,
}

impl OutputSpec {
  pub fn new(dir: String, policy: FilenamePolicy) -> Self {
    Self { dir, policy, pattern: policy.pattern().to_string() }
  }

  pub fn filename_template(&self) -> FilenameTemplate {
    FilenameTemplate::new(self.pattern.clone())
  }

  /// `None` when the pattern needs a content hash but no content exists yet.
  pub fn resolved_filename(&self, name: &str, content: Option<&[u8]>) -> Option<String> {
    let template = self.filename_template();
    if template.has_hash_pattern() && content.is_none() {
      return None;
    }
    Some(template.render(name, content))
  }
}

#[test]
fn fixed_policy_resolves_without_content() {
  let output = OutputSpec::new("dist".to_string(), FilenamePolicy::Fixed);
  assert_eq!(output.resolved_filename(ENTRY_NAME, None), Some("bundle.js".to_string()));
}

#[test]
fn hashed_policy_requires_content() {
  let output = OutputSpec::new("dist".to_string(), FilenamePolicy::ContentHashed);
  assert_eq!(output.resolved_filename(ENTRY_NAME, None), None);

  let filename = output.resolved_filename(ENTRY_NAME, Some(b"emitted bundle")).unwrap();
  assert!(filename.starts_with("main."));
  assert!(filename.ends_with(".bundle.js"));
}
