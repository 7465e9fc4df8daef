use serde::Serialize;

use crate::{DefinedGlobals, DevServerSpec, HtmlShellSpec, LoaderStage, Mode, OutputSpec};

/// The complete result of build-configuration resolution. Immutable once
/// resolved; downstream consumers read it, they never patch it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPlan {
  pub mode: Mode,
  pub loader_chain: Vec<LoaderStage>,
  pub output: OutputSpec,
  pub html_shell: HtmlShellSpec,
  pub defined_globals: DefinedGlobals,
  pub dev_server: Option<DevServerSpec>,
}
