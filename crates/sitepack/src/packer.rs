use std::path::Path;

use anyhow::Context;

use sitepack_common::{BuildOptions, BuildPlan, ENTRY_NAME, OutputAsset};
use sitepack_error::{BuildError, BuildResult};

use crate::utils::{render_html::render_html, resolve_plan::resolve_plan};

#[derive(Default, Debug)]
pub struct EmitOutput {
  pub assets: Vec<OutputAsset>,
  pub warnings: Vec<anyhow::Error>,
}

/// Owns one resolved build plan and emits the HTML shell artifact for it.
/// Resolution happens once, in `new`; the plan never changes afterwards.
pub struct Packer {
  plan: BuildPlan,
}

impl Packer {
  pub fn new(options: BuildOptions) -> Self {
    Self { plan: resolve_plan(options) }
  }

  pub fn plan(&self) -> &BuildPlan {
    &self.plan
  }

  /// Produces the emittable assets without touching the filesystem.
  ///
  /// `bundle` is the content the bundling collaborator emitted, if it ran
  /// already. Content-hashed filenames cannot be resolved without it.
  pub fn generate(&self, bundle: Option<&[u8]>) -> BuildResult<EmitOutput> {
    let script_src = self.plan.output.resolved_filename(ENTRY_NAME, bundle).ok_or_else(|| {
      BuildError::msg("content-hashed filenames need the emitted bundle content")
    })?;

    let mut warnings = Vec::new();
    if bundle.is_some() && !self.plan.output.filename_template().has_hash_pattern() {
      warnings.push(anyhow::anyhow!("bundle content is ignored with fixed filenames"));
    }

    let html = render_html(&self.plan.html_shell, &script_src);
    Ok(EmitOutput { assets: vec![OutputAsset::new("index.html", html)], warnings })
  }

  /// Generates and writes the assets into the plan's output directory.
  pub fn write(&self, bundle: Option<&[u8]>) -> BuildResult<EmitOutput> {
    let output = self.generate(bundle)?;

    let dir = Path::new(&self.plan.output.dir);
    std::fs::create_dir_all(dir)
      .with_context(|| format!("failed to create output directory `{}`", dir.display()))?;
    for asset in &output.assets {
      std::fs::write(dir.join(&asset.filename), &asset.content)
        .with_context(|| format!("failed to write `{}`", asset.filename))?;
    }

    Ok(output)
  }
}
