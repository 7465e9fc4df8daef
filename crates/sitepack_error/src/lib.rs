use std::fmt;

/// One failed build step may surface several underlying causes, so the error
/// type is a collection rather than a single chain.
#[derive(Debug)]
pub struct BuildError(Vec<anyhow::Error>);

impl BuildError {
  pub fn msg<M>(message: M) -> Self
  where
    M: fmt::Display + fmt::Debug + Send + Sync + 'static,
  {
    Self(vec![anyhow::Error::msg(message)])
  }

  pub fn push(&mut self, error: anyhow::Error) {
    self.0.push(error);
  }

  pub fn errors(&self) -> &[anyhow::Error] {
    &self.0
  }

  pub fn into_errors(self) -> Vec<anyhow::Error> {
    self.0
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = Result<T, BuildError>;
