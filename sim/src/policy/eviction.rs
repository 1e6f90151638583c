use ahash::AHashMap;
use std::collections::BTreeSet;

/// Ranking key for a resident page. The derived lexicographic order
/// (priority, then last access, then page id, all ascending) makes the set's
/// minimum the eviction victim, with no possible ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct RankKey {
  pub priority: i64,
  pub last_access: u64,
  pub page: u64,
}

/// The resident set of the learned scheduler, totally ordered by [`RankKey`].
///
/// Residency is defined by membership here; there is no separate cached
/// flag. The side index maps each page to its current key so a re-rank is a
/// single remove-then-insert move with no intermediate state visible to
/// callers. Disagreement between the index and the ordered set is a
/// programming error, asserted in debug builds and never repaired.
#[derive(Debug, Default)]
pub(crate) struct EvictionQueue {
  ranked: BTreeSet<RankKey>,
  index: AHashMap<u64, RankKey>,
}

impl EvictionQueue {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn len(&self) -> usize {
    debug_assert_eq!(self.ranked.len(), self.index.len());
    self.ranked.len()
  }

  pub(crate) fn contains(&self, page: u64) -> bool {
    self.index.contains_key(&page)
  }

  /// Inserts `page`, or re-ranks it if already resident.
  pub(crate) fn upsert(&mut self, page: u64, priority: i64, last_access: u64) {
    let key = RankKey {
      priority,
      last_access,
      page,
    };
    if let Some(old) = self.index.insert(page, key) {
      let removed = self.ranked.remove(&old);
      debug_assert!(removed, "stale index entry for page {page}");
    }
    self.ranked.insert(key);
  }

  /// Removes and returns the worst-ranked page.
  pub(crate) fn pop_victim(&mut self) -> Option<u64> {
    let victim = self.ranked.pop_first()?;
    self.index.remove(&victim.page);
    Some(victim.page)
  }
}
