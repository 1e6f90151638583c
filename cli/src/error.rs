use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong before or during a simulation run.
#[derive(Debug, Error)]
pub enum HarnessError {
  #[error("failed to read {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config {path}: {source}")]
  Config {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },

  #[error("invalid page id {token:?} at {path}:{line}")]
  Trace {
    path: PathBuf,
    line: usize,
    token: String,
  },

  #[error("unknown algorithm {0:?}")]
  UnknownAlgorithm(String),

  #[error("invalid value for {flag}: {value:?}")]
  InvalidFlag { flag: &'static str, value: String },

  #[error("unrecognized argument {0:?}")]
  UnknownArgument(String),

  #[error("cache size must be a positive integer")]
  ZeroCacheSize,

  #[error("no algorithms configured; set `algorithms` in the config or pass --algorithms")]
  NoAlgorithms,

  #[error("no cache sizes configured; set `cache_sizes` in the config or pass --cache-sizes")]
  NoCacheSizes,

  #[error("no trace files configured; set `traces` in the config or pass --traces")]
  NoTraces,

  #[error(transparent)]
  Build(#[from] cachew_sim::BuildError),
}
