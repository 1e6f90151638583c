/// A bounded, duplicate-free register of recently accessed pages, most
/// recent first. The entries serve as the correlation contexts for the
/// learned scheduler's per-page weights.
///
/// The capacity is a small constant, so the linear scans here are effectively
/// O(1).
#[derive(Debug)]
pub(crate) struct RecencyRegister {
  capacity: usize,
  entries: Vec<u64>,
}

impl RecencyRegister {
  pub(crate) const DEFAULT_CAPACITY: usize = 5;

  pub(crate) fn new(capacity: usize) -> Self {
    Self {
      capacity,
      entries: Vec::with_capacity(capacity),
    }
  }

  /// Moves `page` to the front, dropping the least-recent entry if the
  /// register overflows. Re-inserting a registered page never duplicates it.
  pub(crate) fn insert(&mut self, page: u64) {
    if let Some(pos) = self.entries.iter().position(|&p| p == page) {
      self.entries.remove(pos);
    }
    self.entries.insert(0, page);
    if self.entries.len() > self.capacity {
      self.entries.pop();
    }
  }

  /// The registered pages, most recent first.
  pub(crate) fn snapshot(&self) -> &[u64] {
    &self.entries
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_insert_orders_most_recent_first() {
    let mut register = RecencyRegister::new(3);
    for page in [1, 2, 3] {
      register.insert(page);
    }
    assert_eq!(register.snapshot(), &[3, 2, 1]);
  }

  #[test]
  fn test_overflow_drops_least_recent() {
    let mut register = RecencyRegister::new(3);
    for page in [1, 2, 3, 4] {
      register.insert(page);
    }
    assert_eq!(register.snapshot(), &[4, 3, 2]);
  }

  #[test]
  fn test_reinsert_moves_to_front_without_duplicating() {
    let mut register = RecencyRegister::new(3);
    for page in [1, 2, 3, 1, 1] {
      register.insert(page);
    }
    assert_eq!(register.snapshot(), &[1, 3, 2]);
  }
}
