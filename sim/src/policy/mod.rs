//! Cache-replacement schedulers.
//!
//! Each scheduler replays a request trace against its own bounded cache and
//! counts the requests that missed. All schedulers implement the
//! [`Scheduler`] trait and reject a zero capacity at construction.

pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod marking;
pub mod opt;
pub mod optgen;
pub mod svm;

mod eviction;
mod recency;

use crate::request::{Report, Request};

/// A cache-replacement scheduler driven by a complete request trace.
pub trait Scheduler {
  /// Replays `requests` in input order, one pass, against an initially
  /// empty cache and returns the accumulated counters.
  fn run(&mut self, requests: &[Request]) -> Report;
}
