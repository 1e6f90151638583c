use crate::error::BuildError;
use crate::policy::Scheduler;
use crate::request::{Report, Request};

use ahash::AHashSet;
use std::collections::VecDeque;

/// First-in, first-out replacement: the victim is the oldest admitted page.
///
/// Hits do not reorder anything; only admission order matters.
#[derive(Debug)]
pub struct Fifo {
  capacity: usize,
  // A queue of resident pages ordered by admission (front is newest).
  order: VecDeque<u64>,
  // A set for quick O(1) residency checks.
  resident: AHashSet<u64>,
}

impl Fifo {
  pub fn new(capacity: usize) -> Result<Self, BuildError> {
    if capacity == 0 {
      return Err(BuildError::ZeroCapacity);
    }
    Ok(Self {
      capacity,
      order: VecDeque::new(),
      resident: AHashSet::new(),
    })
  }
}

impl Scheduler for Fifo {
  fn run(&mut self, requests: &[Request]) -> Report {
    let mut report = Report::for_trace(requests);
    for request in requests {
      let page = request.page;
      if self.resident.contains(&page) {
        continue;
      }
      report.cache_misses += 1;
      if self.resident.len() == self.capacity {
        if let Some(victim) = self.order.pop_back() {
          self.resident.remove(&victim);
        }
      }
      self.order.push_front(page);
      self.resident.insert(page);
    }
    report
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn trace(pages: &[u64]) -> Vec<Request> {
    pages.iter().copied().map(Request::new).collect()
  }

  #[test]
  fn test_hits_do_not_protect_old_pages() {
    // Page 1 is the oldest admission; the hit at position 2 must not save it.
    let mut fifo = Fifo::new(2).unwrap();
    let report = fifo.run(&trace(&[1, 2, 1, 3, 1]));
    assert_eq!(report.cache_misses, 4);
    assert_eq!(report.total_requests, 5);
    assert_eq!(report.unique_pages, 3);
  }

  #[test]
  fn test_no_eviction_below_capacity() {
    let mut fifo = Fifo::new(3).unwrap();
    let report = fifo.run(&trace(&[1, 2, 3, 1, 2, 3]));
    assert_eq!(report.cache_misses, 3);
  }

  #[test]
  fn test_zero_capacity_is_rejected() {
    assert_eq!(Fifo::new(0).unwrap_err(), BuildError::ZeroCapacity);
  }
}
