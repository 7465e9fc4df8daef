use sitepack_common::{
  BuildOptions, BuildPlan, DefinedGlobals, DevServerSpec, FilenamePolicy, HtmlShellSpec,
  LoaderStage, MetaTag, Mode, OutputSpec, ShellProfile,
};

pub const DEFAULT_TITLE: &str = "Sitepack App";

/// Resolves a raw build context into the complete build plan. Pure and
/// total: no I/O, no error paths, structurally equal inputs give
/// structurally equal plans.
pub fn resolve_plan(mut raw: BuildOptions) -> BuildPlan {
  let mode = Mode::from_raw(raw.mode.as_deref());
  let env_vars = std::mem::take(&mut raw.env_vars).unwrap_or_default();

  // Hot reload wraps the compiler, so it must come first in the chain.
  let loader_chain = match mode {
    Mode::Production => vec![LoaderStage::compile(true)],
    Mode::Development => vec![LoaderStage::hot_reload(), LoaderStage::compile(false)],
  };

  let meta_tags = match raw.shell.unwrap_or_default() {
    ShellProfile::Minimal => Vec::new(),
    ShellProfile::Extended => extended_meta_tags(&raw),
  };

  let policy = raw.filenames.unwrap_or_default();
  let output = OutputSpec::new(raw.dir.unwrap_or_else(|| "dist".to_string()), policy);

  let defined_globals = DefinedGlobals::from_env_vars(&env_vars);

  let title = raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
  let html_shell = HtmlShellSpec::new(title, meta_tags);

  let dev_server = (!mode.is_production())
    .then(|| DevServerSpec { port: raw.dev_port.unwrap_or(8000), ..DevServerSpec::default() });

  BuildPlan { mode, loader_chain, output, html_shell, defined_globals, dev_server }
}

fn extended_meta_tags(raw: &BuildOptions) -> Vec<MetaTag> {
  let mut tags = Vec::new();
  if let Some(description) = &raw.description {
    tags.push(MetaTag::new("description", description.clone()));
  }
  if let Some(keywords) = &raw.keywords {
    tags.push(MetaTag::new("keywords", keywords.clone()));
  }
  if let Some(author) = &raw.author {
    tags.push(MetaTag::new("author", author.clone()));
  }
  tags.push(MetaTag::new("robots", "index,follow"));
  tags
}

#[cfg(test)]
mod tests {
  use sitepack_common::{COMPILE_LOADER, HOT_RELOAD_LOADER, MOUNT_NODE_ID};
  use sitepack_utils::indexmap::FxIndexMap;

  use super::*;

  fn env_vars(pairs: &[(&str, &str)]) -> FxIndexMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
  }

  #[test]
  fn production_selects_a_single_optimizing_stage() {
    let plan = resolve_plan(BuildOptions {
      mode: Some("production".to_string()),
      env_vars: Some(env_vars(&[("SUPABASE_API_KEY", "abc")])),
      ..BuildOptions::default()
    });

    assert_eq!(plan.mode, Mode::Production);
    assert_eq!(plan.loader_chain, vec![LoaderStage::compile(true)]);
    assert_eq!(plan.loader_chain[0].options["optimize"], serde_json::json!(true));

    let parsed: FxIndexMap<String, String> =
      serde_json::from_str(plan.defined_globals.injected_blob()).unwrap();
    assert_eq!(parsed, env_vars(&[("SUPABASE_API_KEY", "abc")]));
  }

  #[test]
  fn development_stages_hot_reload_before_the_compiler() {
    let plan = resolve_plan(BuildOptions {
      mode: Some("development".to_string()),
      ..BuildOptions::default()
    });

    assert_eq!(plan.mode, Mode::Development);
    assert_eq!(plan.loader_chain.len(), 2);
    assert_eq!(plan.loader_chain[0].name, HOT_RELOAD_LOADER);
    assert_eq!(plan.loader_chain[1].name, COMPILE_LOADER);
    assert_eq!(plan.loader_chain[1].options["optimize"], serde_json::json!(false));
    assert_eq!(plan.defined_globals.injected_blob(), "{}");
  }

  #[test]
  fn unknown_mode_takes_the_development_branch() {
    let plan = resolve_plan(BuildOptions {
      mode: Some("staging".to_string()),
      env_vars: Some(env_vars(&[("X", "1")])),
      ..BuildOptions::default()
    });

    assert_eq!(plan.mode, Mode::Development);
    assert_eq!(plan.loader_chain.len(), 2);
    assert_eq!(plan.loader_chain[0].name, HOT_RELOAD_LOADER);

    let parsed: FxIndexMap<String, String> =
      serde_json::from_str(plan.defined_globals.injected_blob()).unwrap();
    assert_eq!(parsed, env_vars(&[("X", "1")]));
  }

  #[test]
  fn absent_mode_takes_the_development_branch() {
    let plan = resolve_plan(BuildOptions::default());
    assert_eq!(plan.mode, Mode::Development);
    assert_eq!(plan.loader_chain.len(), 2);
  }

  #[test]
  fn mount_node_id_is_invariant_across_contexts() {
    for mode in [None, Some("production".to_string()), Some("staging".to_string())] {
      let plan = resolve_plan(BuildOptions { mode, ..BuildOptions::default() });
      assert_eq!(plan.html_shell.mount_node_id, MOUNT_NODE_ID);
    }
  }

  #[test]
  fn resolution_is_idempotent() {
    let options = || BuildOptions {
      mode: Some("production".to_string()),
      env_vars: Some(env_vars(&[("A", "1"), ("B", "2")])),
      filenames: Some(FilenamePolicy::ContentHashed),
      shell: Some(ShellProfile::Extended),
      description: Some("a page".to_string()),
      ..BuildOptions::default()
    };

    assert_eq!(resolve_plan(options()), resolve_plan(options()));
  }

  #[test]
  fn filename_policy_is_an_explicit_field() {
    let fixed = resolve_plan(BuildOptions::default());
    assert_eq!(fixed.output.policy, FilenamePolicy::Fixed);
    assert_eq!(fixed.output.pattern, "bundle.js");

    let hashed = resolve_plan(BuildOptions {
      filenames: Some(FilenamePolicy::ContentHashed),
      ..BuildOptions::default()
    });
    assert_eq!(hashed.output.policy, FilenamePolicy::ContentHashed);
    assert_eq!(hashed.output.pattern, "[name].[contenthash].bundle.js");
  }

  #[test]
  fn dev_server_exists_only_in_development() {
    let dev = resolve_plan(BuildOptions { dev_port: Some(9000), ..BuildOptions::default() });
    let dev_server = dev.dev_server.unwrap();
    assert_eq!(dev_server.port, 9000);
    assert!(dev_server.hot_only);

    let prod = resolve_plan(BuildOptions {
      mode: Some("production".to_string()),
      ..BuildOptions::default()
    });
    assert!(prod.dev_server.is_none());
  }

  #[test]
  fn extended_shell_orders_meta_tags() {
    let plan = resolve_plan(BuildOptions {
      shell: Some(ShellProfile::Extended),
      description: Some("The latest posts, all in one place.".to_string()),
      keywords: Some("blog, posts".to_string()),
      author: Some("The Authors".to_string()),
      ..BuildOptions::default()
    });

    let names: Vec<&str> = plan.html_shell.meta_tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["description", "keywords", "author", "robots"]);
  }

  #[test]
  fn minimal_shell_has_no_descriptive_tags() {
    let plan = resolve_plan(BuildOptions {
      description: Some("ignored without the extended shell".to_string()),
      ..BuildOptions::default()
    });
    assert!(plan.html_shell.meta_tags.is_empty());
  }
}
