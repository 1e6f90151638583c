use crate::error::BuildError;
use crate::policy::Scheduler;
use crate::request::{Report, Request};

use ahash::AHashMap;

/// Position value meaning "this page is never requested again".
const NEVER: u64 = u64::MAX;

/// Offline optimal (Belady) replacement.
///
/// A backward pass over the trace precomputes, for every request, the
/// position of the next access to the same page. The victim is always the
/// resident page whose next use lies farthest in the future, with
/// never-used-again pages evicted first and ties broken by lower page id.
#[derive(Debug)]
pub struct Opt {
  capacity: usize,
}

impl Opt {
  pub fn new(capacity: usize) -> Result<Self, BuildError> {
    if capacity == 0 {
      return Err(BuildError::ZeroCapacity);
    }
    Ok(Self { capacity })
  }

  /// For each request position, the position of the next request for the
  /// same page (`NEVER` if there is none).
  fn next_use_positions(requests: &[Request]) -> Vec<u64> {
    let mut next_use = vec![NEVER; requests.len()];
    let mut upcoming: AHashMap<u64, usize> = AHashMap::new();
    for (pos, request) in requests.iter().enumerate().rev() {
      if let Some(&next) = upcoming.get(&request.page) {
        next_use[pos] = next as u64;
      }
      upcoming.insert(request.page, pos);
    }
    next_use
  }
}

impl Scheduler for Opt {
  fn run(&mut self, requests: &[Request]) -> Report {
    let mut report = Report::for_trace(requests);
    let next_use = Self::next_use_positions(requests);
    // Resident pages mapped to the position of their next use.
    let mut resident: AHashMap<u64, u64> = AHashMap::new();
    for (pos, request) in requests.iter().enumerate() {
      let page = request.page;
      if resident.contains_key(&page) {
        resident.insert(page, next_use[pos]);
        continue;
      }
      report.cache_misses += 1;
      if resident.len() == self.capacity {
        let victim = resident
          .iter()
          .max_by_key(|&(&id, &next)| (next, std::cmp::Reverse(id)))
          .map(|(&id, _)| id);
        if let Some(victim) = victim {
          resident.remove(&victim);
        }
      }
      resident.insert(page, next_use[pos]);
    }
    report
  }
}
