use std::fmt;

/// Errors that can occur when constructing a scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
  /// The scheduler was configured with a capacity of zero. A replacement
  /// policy over an empty cache is meaningless, so this is rejected at
  /// construction time rather than deferred to the first access.
  ZeroCapacity,
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildError::ZeroCapacity => write!(f, "cache capacity cannot be zero"),
    }
  }
}

impl std::error::Error for BuildError {}
