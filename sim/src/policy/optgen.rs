use crate::error::BuildError;

use ahash::AHashMap;

/// Outcome of observing one access against the retrospective optimal policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleOutcome {
  /// The page has never been accessed before.
  FirstAppearance,
  /// An optimal policy of this capacity would have served the access from
  /// cache.
  Hit,
  /// Keeping the page resident since its previous access would have
  /// overcommitted at least one time slot, so even an optimal policy would
  /// have missed.
  Miss,
}

/// Retrospective simulator of optimal (Belady) replacement.
///
/// Instead of simulating a cache forward, it keeps one occupancy counter per
/// logical time slot: how many pages the optimal policy holds alive through
/// that slot. An access to a previously seen page is a hit exactly when
/// every slot strictly after its last access still has spare capacity; the
/// hit then reserves one unit across that interval. The slot of the previous
/// access itself is excluded: the charge sitting there is the page's own and
/// must not block its own reuse. A first appearance reserves only its own
/// slot (a cold load occupies the cache at its access time); a miss reserves
/// nothing, since the optimal policy would not have kept the page.
///
/// `observe` is O(reuse distance) in the worst case. Hot pages have short
/// intervals, so the amortized cost on real traces is low.
#[derive(Debug)]
pub struct OptGen {
  capacity: usize,
  // One slot per access observed so far; occupancy[t] <= capacity always.
  occupancy: Vec<u32>,
  // Slot of each page's most recent access.
  last_access: AHashMap<u64, usize>,
}

impl OptGen {
  pub fn new(capacity: usize) -> Result<Self, BuildError> {
    if capacity == 0 {
      return Err(BuildError::ZeroCapacity);
    }
    Ok(Self {
      capacity,
      occupancy: Vec::new(),
      last_access: AHashMap::new(),
    })
  }

  /// Advances the logical clock by one slot and classifies the access.
  ///
  /// Must be called exactly once per access, in stream order.
  pub fn observe(&mut self, page: u64) -> OracleOutcome {
    self.occupancy.push(0);
    let now = self.occupancy.len() - 1;
    let outcome = match self.last_access.get(&page) {
      None => {
        self.occupancy[now] += 1;
        OracleOutcome::FirstAppearance
      }
      Some(&since) => {
        let fits = self.occupancy[since + 1..=now]
          .iter()
          .all(|&used| (used as usize) < self.capacity);
        if fits {
          for used in &mut self.occupancy[since + 1..=now] {
            *used += 1;
          }
          OracleOutcome::Hit
        } else {
          OracleOutcome::Miss
        }
      }
    };
    self.last_access.insert(page, now);
    outcome
  }

  /// The slot index of the most recently observed access (0 before any).
  pub fn now(&self) -> u64 {
    self.occupancy.len().saturating_sub(1) as u64
  }
}
