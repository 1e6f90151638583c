//! Online-learned replacement supervised by a retrospective optimal oracle.
//!
//! For every access the scheduler first asks [`OptGen`] whether a
//! best-possible policy of the same capacity would have hit, then uses that
//! label to train a per-page linear model over the recently accessed pages.
//! The model's score ranks resident pages for eviction: the lowest score,
//! oldest access, lowest id goes first.

use crate::error::BuildError;
use crate::policy::eviction::EvictionQueue;
use crate::policy::optgen::{OptGen, OracleOutcome};
use crate::policy::recency::RecencyRegister;
use crate::policy::Scheduler;
use crate::request::{Report, Request};

use ahash::AHashMap;

/// Weight updates stop once a weight reaches this magnitude.
const TRAINING_THRESHOLD: i64 = 30;
/// Step applied to a weight on each training update.
const LEARNING_RATE: i64 = 1;

/// Learning state for one page: a signed weight per context page that has
/// co-occurred with it in the recency register. Records are kept for every
/// page ever seen; the memory cost grows with the distinct-page universe and
/// is accepted.
#[derive(Debug, Default)]
struct PageRecord {
  weights: AHashMap<u64, i64>,
}

impl PageRecord {
  /// Sum of the weights of the given contexts. A context with no entry
  /// contributes zero and no entry is created for it.
  fn score(&self, contexts: &[u64]) -> i64 {
    contexts
      .iter()
      .filter_map(|context| self.weights.get(context))
      .sum()
  }

  /// Clipped perceptron-style update toward the oracle's label. Entries are
  /// created at zero on first Hit/Miss training contact; weights never leave
  /// `[-TRAINING_THRESHOLD, TRAINING_THRESHOLD]`.
  fn train(&mut self, contexts: &[u64], outcome: OracleOutcome) {
    let step = match outcome {
      OracleOutcome::Hit => LEARNING_RATE,
      OracleOutcome::Miss => -LEARNING_RATE,
      // First appearances carry no reuse signal: no update, and no entries
      // may be created for them.
      OracleOutcome::FirstAppearance => return,
    };
    for &context in contexts {
      let weight = self.weights.entry(context).or_insert(0);
      let updated = *weight + step;
      if updated.abs() <= TRAINING_THRESHOLD {
        *weight = updated;
      }
    }
  }
}

/// The learned cache scheduler.
#[derive(Debug)]
pub struct SvmScheduler {
  capacity: usize,
  oracle: OptGen,
  recency: RecencyRegister,
  resident: EvictionQueue,
  pages: AHashMap<u64, PageRecord>,
}

impl SvmScheduler {
  pub fn new(capacity: usize) -> Result<Self, BuildError> {
    if capacity == 0 {
      return Err(BuildError::ZeroCapacity);
    }
    Ok(Self {
      capacity,
      oracle: OptGen::new(capacity)?,
      recency: RecencyRegister::new(RecencyRegister::DEFAULT_CAPACITY),
      resident: EvictionQueue::new(),
      pages: AHashMap::new(),
    })
  }

  /// Number of pages currently resident in the simulated cache.
  pub fn resident_pages(&self) -> usize {
    self.resident.len()
  }

  /// Admits or re-ranks `page`, evicting the worst-ranked resident page
  /// first when admission would overflow the capacity.
  fn admit(&mut self, page: u64, priority: i64, now: u64) {
    if !self.resident.contains(page) && self.resident.len() == self.capacity {
      self.resident.pop_victim();
    }
    self.resident.upsert(page, priority, now);
  }
}

impl Scheduler for SvmScheduler {
  fn run(&mut self, requests: &[Request]) -> Report {
    let mut report = Report::for_trace(requests);
    for request in requests {
      let page = request.page;
      let outcome = self.oracle.observe(page);
      let now = self.oracle.now();
      // The miss counter tracks the simulated cache, not the oracle: the
      // oracle label is the training target, residency is the measured
      // outcome.
      if !self.resident.contains(page) {
        report.cache_misses += 1;
      }
      // Score and train against the same register snapshot, taken before
      // this access is registered, so a page cannot use itself as its own
      // context. A first-ever page has no record: prediction zero, no
      // training.
      let priority = match self.pages.get_mut(&page) {
        Some(record) => {
          let contexts = self.recency.snapshot();
          let priority = record.score(contexts);
          record.train(contexts, outcome);
          priority
        }
        None => 0,
      };
      self.pages.entry(page).or_default();
      self.admit(page, priority, now);
      self.recency.insert(page);
    }
    report
  }
}
