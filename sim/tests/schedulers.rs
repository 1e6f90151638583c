// sim/tests/schedulers.rs

use cachew_sim::policy::{
  fifo::Fifo, lfu::Lfu, lifo::Lifo, lru::Lru, marking::Marking, opt::Opt, svm::SvmScheduler,
};
use cachew_sim::{Report, Request, Scheduler};

use rand::distr::Distribution;
use rand::SeedableRng;
use rand_distr::Zipf;
use rand_pcg::Pcg64;

fn trace(pages: &[u64]) -> Vec<Request> {
  pages.iter().copied().map(Request::new).collect()
}

/// A reproducible skewed trace, the usual shape of real cache workloads.
fn zipf_trace(len: usize, universe: u64, seed: u64) -> Vec<Request> {
  let mut rng = Pcg64::seed_from_u64(seed);
  let dist = Zipf::new(universe as f64, 0.9).unwrap();
  (0..len)
    .map(|_| Request::new(dist.sample(&mut rng) as u64))
    .collect()
}

fn all_schedulers(capacity: usize) -> Vec<(&'static str, Box<dyn Scheduler>)> {
  vec![
    ("FIFO", Box::new(Fifo::new(capacity).unwrap())),
    ("LIFO", Box::new(Lifo::new(capacity).unwrap())),
    ("LRU", Box::new(Lru::new(capacity).unwrap())),
    ("LFU", Box::new(Lfu::new(capacity).unwrap())),
    ("Marking", Box::new(Marking::new(capacity).unwrap())),
    ("OPT", Box::new(Opt::new(capacity).unwrap())),
    ("SVM", Box::new(SvmScheduler::new(capacity).unwrap())),
  ]
}

fn run_all(capacity: usize, requests: &[Request]) -> Vec<(&'static str, Report)> {
  all_schedulers(capacity)
    .into_iter()
    .map(|(name, mut scheduler)| (name, scheduler.run(requests)))
    .collect()
}

#[test]
fn test_trace_counters_are_policy_independent() {
  let requests = zipf_trace(2_000, 150, 7);
  let expected = Report::for_trace(&requests);
  for (name, report) in run_all(32, &requests) {
    assert_eq!(report.total_requests, expected.total_requests, "{name}");
    assert_eq!(report.unique_pages, expected.unique_pages, "{name}");
  }
}

#[test]
fn test_every_policy_misses_at_least_once_per_distinct_page() {
  // Every policy here is must-cache: a first access can never hit.
  let requests = zipf_trace(3_000, 200, 11);
  for (name, report) in run_all(64, &requests) {
    assert!(
      report.cache_misses >= report.unique_pages,
      "{name}: {} misses for {} distinct pages",
      report.cache_misses,
      report.unique_pages
    );
    assert!(report.cache_misses <= report.total_requests, "{name}");
  }
}

#[test]
fn test_working_set_within_capacity_only_cold_misses() {
  // Ten distinct pages cycled through a 16-entry cache: after the cold
  // misses nothing is ever evicted, whatever the policy.
  let pages: Vec<u64> = (0..100).map(|i| i % 10 + 1).collect();
  let requests = trace(&pages);
  for (name, report) in run_all(16, &requests) {
    assert_eq!(report.cache_misses, 10, "{name}");
  }
}

#[test]
fn test_belady_is_a_lower_bound_for_every_policy() {
  let requests = zipf_trace(5_000, 300, 23);
  let capacity = 48;
  let mut opt = Opt::new(capacity).unwrap();
  let optimum = opt.run(&requests).cache_misses;
  for (name, report) in run_all(capacity, &requests) {
    assert!(
      report.cache_misses >= optimum,
      "{name} undercut Belady: {} < {optimum}",
      report.cache_misses
    );
  }
}
