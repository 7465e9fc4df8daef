pub mod build_plan;
pub mod filename_policy;
pub mod filename_template;
pub mod mode;
pub mod shell_profile;

use sitepack_utils::indexmap::FxIndexMap;

use crate::{FilenamePolicy, ShellProfile};

/// Raw build context as handed over by the caller. Every field is optional;
/// resolution fills in the defaults.
#[derive(Default, Debug, Clone)]
pub struct BuildOptions {
  // --- Context
  pub mode: Option<String>,
  pub env_vars: Option<FxIndexMap<String, String>>,

  // --- Output
  pub dir: Option<String>,
  pub filenames: Option<FilenamePolicy>,

  // --- Html shell
  pub title: Option<String>,
  pub shell: Option<ShellProfile>,
  pub description: Option<String>,
  pub keywords: Option<String>,
  pub author: Option<String>,

  // --- Dev server
  pub dev_port: Option<u16>,
}
