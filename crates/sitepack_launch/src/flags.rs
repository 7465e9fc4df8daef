use serde::Serialize;

/// Successive bootstrap revisions passed the secret either as a bare string
/// or wrapped in a one-field object. The framework accepts both, so both
/// stay supported behind a switch instead of guessing which is canonical.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FlagShape {
  #[default]
  Raw,
  Wrapped,
}

/// The flags value handed to the framework's `init` entry point.
///
/// Serializes to exactly the two shapes the framework has been mounted with:
/// `"secret"` or `{"supabaseApiKey": "secret"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Flags {
  Raw(String),
  Wrapped {
    #[serde(rename = "supabaseApiKey")]
    api_key: String,
  },
}

impl Flags {
  pub fn from_secret(secret: String, shape: FlagShape) -> Self {
    match shape {
      FlagShape::Raw => Self::Raw(secret),
      FlagShape::Wrapped => Self::Wrapped { api_key: secret },
    }
  }

  pub fn secret(&self) -> &str {
    match self {
      Self::Raw(secret) | Self::Wrapped { api_key: secret } => secret,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn raw_flags_serialize_to_a_bare_string() {
    let flags = Flags::from_secret("abc".to_string(), FlagShape::Raw);
    assert_eq!(serde_json::to_value(&flags).unwrap(), serde_json::json!("abc"));
  }

  #[test]
  fn wrapped_flags_serialize_to_a_one_field_object() {
    let flags = Flags::from_secret("abc".to_string(), FlagShape::Wrapped);
    assert_eq!(
      serde_json::to_value(&flags).unwrap(),
      serde_json::json!({ "supabaseApiKey": "abc" })
    );
  }

  #[test]
  fn both_shapes_expose_the_secret() {
    assert_eq!(Flags::from_secret("abc".to_string(), FlagShape::Raw).secret(), "abc");
    assert_eq!(Flags::from_secret("abc".to_string(), FlagShape::Wrapped).secret(), "abc");
  }
}
