use crate::error::BuildError;
use crate::policy::Scheduler;
use crate::request::{Report, Request};

use ahash::AHashSet;

/// Last-in, first-out replacement: the victim is the newest admitted page.
///
/// The oldest admissions are effectively pinned; churn happens at the top of
/// the admission stack.
#[derive(Debug)]
pub struct Lifo {
  capacity: usize,
  // Resident pages in admission order (top of the stack is newest).
  stack: Vec<u64>,
  resident: AHashSet<u64>,
}

impl Lifo {
  pub fn new(capacity: usize) -> Result<Self, BuildError> {
    if capacity == 0 {
      return Err(BuildError::ZeroCapacity);
    }
    Ok(Self {
      capacity,
      stack: Vec::new(),
      resident: AHashSet::new(),
    })
  }
}

impl Scheduler for Lifo {
  fn run(&mut self, requests: &[Request]) -> Report {
    let mut report = Report::for_trace(requests);
    for request in requests {
      let page = request.page;
      if self.resident.contains(&page) {
        continue;
      }
      report.cache_misses += 1;
      if self.resident.len() == self.capacity {
        if let Some(victim) = self.stack.pop() {
          self.resident.remove(&victim);
        }
      }
      self.stack.push(page);
      self.resident.insert(page);
    }
    report
  }
}
