use cachew_sim::policy::{fifo::Fifo, lru::Lru, opt::Opt, svm::SvmScheduler};
use cachew_sim::{Request, Scheduler};

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::distr::Distribution;
use rand::SeedableRng;
use rand_distr::Zipf;
use rand_pcg::Pcg64;

const TRACE_LEN: usize = 100_000;
const UNIVERSE: u64 = 10_000;
const CAPACITY: usize = 1_024;

fn zipf_trace() -> Vec<Request> {
  let mut rng = Pcg64::seed_from_u64(0xCA11AB1E);
  let dist = Zipf::new(UNIVERSE as f64, 1.07).unwrap();
  (0..TRACE_LEN)
    .map(|_| Request::new(dist.sample(&mut rng) as u64))
    .collect()
}

fn bench_schedulers(c: &mut Criterion) {
  let requests = zipf_trace();

  let mut group = c.benchmark_group("run_trace");
  group.throughput(Throughput::Elements(requests.len() as u64));

  group.bench_function("fifo", |b| {
    b.iter(|| {
      let mut scheduler = Fifo::new(CAPACITY).unwrap();
      black_box(scheduler.run(&requests))
    })
  });
  group.bench_function("lru", |b| {
    b.iter(|| {
      let mut scheduler = Lru::new(CAPACITY).unwrap();
      black_box(scheduler.run(&requests))
    })
  });
  group.bench_function("belady", |b| {
    b.iter(|| {
      let mut scheduler = Opt::new(CAPACITY).unwrap();
      black_box(scheduler.run(&requests))
    })
  });
  group.bench_function("svm", |b| {
    b.iter(|| {
      let mut scheduler = SvmScheduler::new(CAPACITY).unwrap();
      black_box(scheduler.run(&requests))
    })
  });

  group.finish();
}

criterion_group!(benches, bench_schedulers);
criterion_main!(benches);
