use crate::error::BuildError;
use crate::policy::Scheduler;
use crate::request::{Report, Request};

use ahash::AHashSet;
use std::collections::VecDeque;

/// Least-recently-used replacement.
#[derive(Debug)]
pub struct Lru {
  capacity: usize,
  // A queue of resident pages ordered by recent use (front is most recent).
  order: VecDeque<u64>,
  resident: AHashSet<u64>,
}

impl Lru {
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

impl Scheduler for Lru {
  fn run(&mut self, requests: &[Request]) -> Report {
    let mut report = Report::for_trace(requests);
    for request in requests {
      let page = request.page;
      if self.resident.contains(&page) {
        // Hit: move the page to the front of the usage queue.
        if let Some(pos) = self.order.iter().position(|&p| p == page) {
          self.order.remove(pos);
          self.order.push_front(page);
        }
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
