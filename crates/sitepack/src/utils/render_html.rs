use itertools::Itertools;
use sitepack_common::HtmlShellSpec;

/// Renders the document the UI framework mounts into. `script_src` is the
/// already-resolved bundle filename.
pub fn render_html(shell: &HtmlShellSpec, script_src: &str) -> String {
  let meta_tags = shell
    .meta_tags
    .iter()
    .map(|tag| format!(r#"    <meta name="{}" content="{}"/>"#, tag.name, tag.content))
    .join("\n");
  let meta_block = if meta_tags.is_empty() { String::new() } else { format!("{meta_tags}\n") };

  format!(
    r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
{meta_block}    <title>{title}</title>
  </head>
  <body>
    <div id="{mount}"></div>
    <script defer src="{script_src}"></script>
  </body>
</html>
"#,
    title = shell.title,
    mount = shell.mount_node_id,
  )
}

#[cfg(test)]
mod tests {
  use sitepack_common::{MOUNT_NODE_ID, MetaTag};

  use super::*;

  #[test]
  fn shell_contains_exactly_one_mount_node() {
    let shell = HtmlShellSpec::new("A Page".to_string(), Vec::new());
    let html = render_html(&shell, "bundle.js");

    assert_eq!(html.matches("<div id=").count(), 1);
    assert!(html.contains(&format!(r#"<div id="{MOUNT_NODE_ID}"></div>"#)));
    assert!(html.contains("<title>A Page</title>"));
    assert!(html.contains(r#"<script defer src="bundle.js"></script>"#));
  }

  #[test]
  fn extended_meta_tags_render_in_order() {
    let shell = HtmlShellSpec::new(
      "A Page".to_string(),
      vec![
        MetaTag::new("description", "some posts"),
        MetaTag::new("robots", "index,follow"),
      ],
    );
    let html = render_html(&shell, "bundle.js");

    let description = html.find(r#"<meta name="description""#).unwrap();
    let robots = html.find(r#"<meta name="robots""#).unwrap();
    let title = html.find("<title>").unwrap();
    assert!(description < robots);
    assert!(robots < title);
  }

  #[test]
  fn minimal_shell_renders_no_descriptive_tags() {
    let shell = HtmlShellSpec::new("A Page".to_string(), Vec::new());
    let html = render_html(&shell, "bundle.js");

    assert!(!html.contains(r#"<meta name="description""#));
    assert!(!html.contains(r#"<meta name="robots""#));
    assert!(html.contains(r#"<meta name="viewport""#));
  }
}
