use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use cachew_sim::policy::{
  fifo::Fifo, lfu::Lfu, lifo::Lifo, lru::Lru, marking::Marking, opt::Opt, svm::SvmScheduler,
};
use cachew_sim::{BuildError, Scheduler};

use crate::error::HarnessError;

/// The replacement algorithms the harness can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Algorithm {
  #[serde(rename = "OPT")]
  Opt,
  #[serde(rename = "FIFO")]
  Fifo,
  #[serde(rename = "LIFO")]
  Lifo,
  #[serde(rename = "LRU")]
  Lru,
  #[serde(rename = "LFU")]
  Lfu,
  Marking,
  #[serde(rename = "SVM")]
  Svm,
}

impl Algorithm {
  pub const ALL: [Algorithm; 7] = [
    Algorithm::Opt,
    Algorithm::Fifo,
    Algorithm::Lifo,
    Algorithm::Lru,
    Algorithm::Lfu,
    Algorithm::Marking,
    Algorithm::Svm,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      Algorithm::Opt => "OPT",
      Algorithm::Fifo => "FIFO",
      Algorithm::Lifo => "LIFO",
      Algorithm::Lru => "LRU",
      Algorithm::Lfu => "LFU",
      Algorithm::Marking => "Marking",
      Algorithm::Svm => "SVM",
    }
  }

  /// Builds a fresh scheduler instance for one trace run.
  pub fn build(&self, capacity: usize) -> Result<Box<dyn Scheduler>, BuildError> {
    Ok(match self {
      Algorithm::Opt => Box::new(Opt::new(capacity)?),
      Algorithm::Fifo => Box::new(Fifo::new(capacity)?),
      Algorithm::Lifo => Box::new(Lifo::new(capacity)?),
      Algorithm::Lru => Box::new(Lru::new(capacity)?),
      Algorithm::Lfu => Box::new(Lfu::new(capacity)?),
      Algorithm::Marking => Box::new(Marking::new(capacity)?),
      Algorithm::Svm => Box::new(SvmScheduler::new(capacity)?),
    })
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Algorithm {
  type Err = HarnessError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Algorithm::ALL
      .into_iter()
      .find(|algorithm| algorithm.name() == s)
      .ok_or_else(|| HarnessError::UnknownAlgorithm(s.to_string()))
  }
}

fn default_output_dir() -> PathBuf {
  PathBuf::from("./results")
}

/// YAML run configuration.
///
/// `algorithms`/`cache_sizes` are the list forms; the singular `algorithm`/
/// `cache_size` keys are honored as fallbacks when the lists are absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub algorithms: Vec<Algorithm>,
  #[serde(default)]
  pub algorithm: Option<Algorithm>,
  #[serde(default)]
  pub cache_sizes: Vec<u64>,
  #[serde(default)]
  pub cache_size: Option<u64>,
  #[serde(default)]
  pub traces: Vec<PathBuf>,
  #[serde(default = "default_output_dir")]
  pub output_dir: PathBuf,
}

impl Config {
  pub fn load(path: &Path) -> Result<Self, HarnessError> {
    let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| HarnessError::Config {
      path: path.to_path_buf(),
      source,
    })
  }

  /// The configured algorithm list, falling back to the singular key.
  pub fn algorithms(&self) -> Vec<Algorithm> {
    if self.algorithms.is_empty() {
      self.algorithm.into_iter().collect()
    } else {
      self.algorithms.clone()
    }
  }

  /// The configured cache sizes, falling back to the singular key.
  pub fn cache_sizes(&self) -> Vec<u64> {
    if self.cache_sizes.is_empty() {
      self.cache_size.into_iter().collect()
    } else {
      self.cache_sizes.clone()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_full_config_parses() {
    let config: Config = serde_yaml::from_str(
      "algorithms: [LRU, SVM, Marking]\n\
       cache_sizes: [64, 256]\n\
       traces: [traces/a.txt, traces/b.txt]\n\
       output_dir: out\n",
    )
    .unwrap();
    assert_eq!(
      config.algorithms(),
      vec![Algorithm::Lru, Algorithm::Svm, Algorithm::Marking]
    );
    assert_eq!(config.cache_sizes(), vec![64, 256]);
    assert_eq!(config.traces.len(), 2);
    assert_eq!(config.output_dir, PathBuf::from("out"));
  }

  #[test]
  fn test_singular_keys_are_fallbacks() {
    let config: Config =
      serde_yaml::from_str("algorithm: OPT\ncache_size: 8\ntraces: [t.txt]\n").unwrap();
    assert_eq!(config.algorithms(), vec![Algorithm::Opt]);
    assert_eq!(config.cache_sizes(), vec![8]);
  }

  #[test]
  fn test_list_keys_win_over_singular() {
    let config: Config =
      serde_yaml::from_str("algorithm: OPT\nalgorithms: [FIFO]\ncache_sizes: [4]\n").unwrap();
    assert_eq!(config.algorithms(), vec![Algorithm::Fifo]);
  }

  #[test]
  fn test_output_dir_defaults() {
    let config: Config = serde_yaml::from_str("traces: []\n").unwrap();
    assert_eq!(config.output_dir, PathBuf::from("./results"));
  }

  #[test]
  fn test_algorithm_names_round_trip() {
    for algorithm in Algorithm::ALL {
      assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
    }
    assert!("Belady".parse::<Algorithm>().is_err());
  }
}
