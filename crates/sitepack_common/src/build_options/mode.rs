use std::fmt::Display;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Development,
  Production,
}

impl Mode {
  /// Only the exact literal `production` selects production. Anything else,
  /// including an absent or unknown value, falls back to development rather
  /// than erroring.
  pub fn from_raw(raw: Option<&str>) -> Self {
    match raw {
      Some("production") => Self::Production,
      _ => Self::Development,
    }
  }

  #[inline]
  pub fn is_production(self) -> bool {
    matches!(self, Self::Production)
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

#[test]
fn unknown_modes_fall_back_to_development() {
  assert_eq!(Mode::from_raw(Some("production")), Mode::Production);

  for raw in [None, Some(""), Some("development"), Some("staging"), Some("Production")] {
    assert_eq!(Mode::from_raw(raw), Mode::Development);
  }
}
