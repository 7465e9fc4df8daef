mod build_options;
mod types;

pub use build_options::{
  BuildOptions, build_plan::BuildPlan, filename_policy::FilenamePolicy,
  filename_template::FilenameTemplate, mode::Mode, shell_profile::ShellProfile,
};

pub use crate::types::{
  defined_globals::DefinedGlobals,
  dev_server::DevServerSpec,
  html_shell::{HtmlShellSpec, MOUNT_NODE_ID, MetaTag},
  loader_stage::{COMPILE_LOADER, HOT_RELOAD_LOADER, LoaderStage},
  output_asset::OutputAsset,
  output_spec::{ENTRY_NAME, OutputSpec},
};
