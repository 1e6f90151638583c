use ahash::AHashSet;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A single access in a request trace. Identity only, no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Request {
  /// The page (object) being requested.
  pub page: u64,
}

impl Request {
  pub fn new(page: u64) -> Self {
    Self { page }
  }
}

impl From<u64> for Request {
  fn from(page: u64) -> Self {
    Self { page }
  }
}

/// Aggregate outcome of replaying one trace through one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Report {
  /// Number of requests in the trace.
  pub total_requests: u64,
  /// Number of distinct pages in the trace.
  pub unique_pages: u64,
  /// Requests whose page was not resident when it arrived.
  pub cache_misses: u64,
}

impl Report {
  /// Pre-fills the trace-derived counters; misses start at zero and are
  /// accumulated by the scheduler during the run.
  pub fn for_trace(requests: &[Request]) -> Self {
    let unique: AHashSet<u64> = requests.iter().map(|r| r.page).collect();
    Self {
      total_requests: requests.len() as u64,
      unique_pages: unique.len() as u64,
      cache_misses: 0,
    }
  }

  /// Fraction of requests that missed, in `[0.0, 1.0]`.
  pub fn miss_ratio(&self) -> f64 {
    if self.total_requests == 0 {
      0.0
    } else {
      self.cache_misses as f64 / self.total_requests as f64
    }
  }
}
