use sitepack_utils::xxhash::content_hash;

pub const HASH_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: String) -> Self {
    Self { template }
  }

  pub fn has_hash_pattern(&self) -> bool {
    self.template.contains("[contenthash]")
  }

  /// `[name]` is always substituted; `[contenthash]` only when there is
  /// content to hash.
  pub fn render(&self, name: &str, content: Option<&[u8]>) -> String {
    let mut filename = self.template.replace("[name]", name);
    if let Some(content) = content {
      filename = filename.replace("[contenthash]", &content_hash(content, HASH_LEN));
    }
    filename
  }
}

#[test]
fn render_substitutes_placeholders() {
  let template = FilenameTemplate::new("[name].[contenthash].bundle.js".to_string());
  assert!(template.has_hash_pattern());

  let filename = template.render("main", Some(b"bundle content"));
  assert!(filename.starts_with("main."));
  assert!(filename.ends_with(".bundle.js"));
  assert_eq!(filename.len(), "main.".len() + HASH_LEN + ".bundle.js".len());
}

#[test]
fn fixed_templates_ignore_content() {
  let template = FilenameTemplate::new("bundle.js".to_string());
  assert!(!template.has_hash_pattern());
  assert_eq!(template.render("main", Some(b"irrelevant")), "bundle.js");
}
