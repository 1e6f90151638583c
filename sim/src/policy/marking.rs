use crate::error::BuildError;
use crate::policy::Scheduler;
use crate::request::{Report, Request};

use ahash::AHashMap;
use rand::seq::IteratorRandom;

/// Phase-based marking replacement.
///
/// Every requested page is marked. A miss that finds all resident pages
/// marked starts a new phase by clearing every mark; the victim is then a
/// uniformly random unmarked page.
#[derive(Debug)]
pub struct Marking {
  capacity: usize,
  // Resident pages and their mark bit.
  resident: AHashMap<u64, bool>,
}

impl Marking {
  pub fn new(capacity: usize) -> Result<Self, BuildError> {
    if capacity == 0 {
      return Err(BuildError::ZeroCapacity);
    }
    Ok(Self {
      capacity,
      resident: AHashMap::new(),
    })
  }
}

impl Scheduler for Marking {
  fn run(&mut self, requests: &[Request]) -> Report {
    let mut report = Report::for_trace(requests);
    let mut rng = rand::rng();
    for request in requests {
      let page = request.page;
      if let Some(marked) = self.resident.get_mut(&page) {
        *marked = true;
        continue;
      }
      report.cache_misses += 1;
      if self.resident.len() == self.capacity {
        if self.resident.values().all(|&marked| marked) {
          // Every page is marked: the phase is over.
          for marked in self.resident.values_mut() {
            *marked = false;
          }
        }
        let victim = self
          .resident
          .iter()
          .filter(|(_, &marked)| !marked)
          .map(|(&id, _)| id)
          .choose(&mut rng);
        if let Some(victim) = victim {
          self.resident.remove(&victim);
        }
      }
      self.resident.insert(page, true);
    }
    report
  }
}
