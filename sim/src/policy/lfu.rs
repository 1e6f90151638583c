use crate::error::BuildError;
use crate::policy::Scheduler;
use crate::request::{Report, Request};

use ahash::AHashMap;

/// Tracking state for one resident page.
#[derive(Debug, Clone, Copy)]
struct LfuEntry {
  frequency: u64,
  last_access: u64,
}

/// Least-frequently-used replacement.
///
/// Frequency counts cover only the page's current residency; evicting a page
/// forgets its history. Ties are broken by older last access, then lower
/// page id, so victim selection is fully deterministic.
#[derive(Debug)]
pub struct Lfu {
  capacity: usize,
  resident: AHashMap<u64, LfuEntry>,
  clock: u64,
}

impl Lfu {
  pub fn new(capacity: usize) -> Result<Self, BuildError> {
    if capacity == 0 {
      return Err(BuildError::ZeroCapacity);
    }
    Ok(Self {
      capacity,
      resident: AHashMap::new(),
      clock: 0,
    })
  }
}

impl Scheduler for Lfu {
  fn run(&mut self, requests: &[Request]) -> Report {
    let mut report = Report::for_trace(requests);
    for request in requests {
      let page = request.page;
      self.clock += 1;
      if let Some(entry) = self.resident.get_mut(&page) {
        entry.frequency += 1;
        entry.last_access = self.clock;
        continue;
      }
      report.cache_misses += 1;
      if self.resident.len() == self.capacity {
        // Capacity is small relative to trace length, so a scan is fine.
        let victim = self
          .resident
          .iter()
          .min_by_key(|&(&id, entry)| (entry.frequency, entry.last_access, id))
          .map(|(&id, _)| id);
        if let Some(victim) = victim {
          self.resident.remove(&victim);
        }
      }
      self.resident.insert(
        page,
        LfuEntry {
          frequency: 1,
          last_access: self.clock,
        },
      );
    }
    report
  }
}
