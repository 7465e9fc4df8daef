use serde::Serialize;
use serde_json::{Value, json};
use sitepack_utils::indexmap::FxIndexMap;

pub const HOT_RELOAD_LOADER: &str = "hot-reload";
pub const COMPILE_LOADER: &str = "compile";

/// One stage of the loader chain. The bundler applies the chain from the
/// last stage to the first, so ordering is part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderStage {
  pub name: String,
  pub options: FxIndexMap<String, Value>,
}

impl LoaderStage {
  pub fn hot_reload() -> Self {
    Self { name: HOT_RELOAD_LOADER.to_string(), options: FxIndexMap::default() }
  }

  pub fn compile(optimize: bool) -> Self {
    let mut options = FxIndexMap::default();
    options.insert("debug".to_string(), json!(false));
    options.insert("optimize".to_string(), json!(optimize));
    Self { name: COMPILE_LOADER.to_string(), options }
  }
}

#[test]
fn compile_stage_carries_debug_and_optimize() {
  let stage = LoaderStage::compile(true);
  assert_eq!(stage.name, COMPILE_LOADER);
  assert_eq!(stage.options["debug"], json!(false));
  assert_eq!(stage.options["optimize"], json!(true));
}
