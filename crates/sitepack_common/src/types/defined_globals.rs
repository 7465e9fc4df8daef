use serde::Serialize;
use sitepack_utils::indexmap::FxIndexMap;

/// Compile-time globals injected into the bundle. The entire environment map
/// is injected as one JSON blob under a single key; downstream code reads
/// `process.env` as a whole, so keys are never injected one by one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinedGlobals(FxIndexMap<String, String>);

impl DefinedGlobals {
  pub const INJECTION_KEY: &'static str = "process.env";

  pub fn from_env_vars(env_vars: &FxIndexMap<String, String>) -> Self {
    let blob = serde_json::to_string(env_vars).expect("a string map serializes to JSON");
    let mut globals = FxIndexMap::default();
    globals.insert(Self::INJECTION_KEY.to_string(), blob);
    Self(globals)
  }

  pub fn injected_blob(&self) -> &str {
    &self.0[Self::INJECTION_KEY]
  }

  pub fn as_map(&self) -> &FxIndexMap<String, String> {
    &self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blob_round_trips_and_keeps_order() {
    let mut env_vars = FxIndexMap::default();
    env_vars.insert("SUPABASE_API_KEY".to_string(), "abc".to_string());
    env_vars.insert("ANOTHER".to_string(), "value".to_string());

    let globals = DefinedGlobals::from_env_vars(&env_vars);
    let parsed: FxIndexMap<String, String> =
      serde_json::from_str(globals.injected_blob()).unwrap();

    assert_eq!(parsed, env_vars);
    assert_eq!(
      parsed.keys().collect::<Vec<_>>(),
      env_vars.keys().collect::<Vec<_>>()
    );
  }

  #[test]
  fn empty_env_still_injects_the_key() {
    let globals = DefinedGlobals::from_env_vars(&FxIndexMap::default());
    assert_eq!(globals.injected_blob(), "{}");
    assert_eq!(globals.as_map().len(), 1);
  }
}
