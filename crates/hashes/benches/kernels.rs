use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashes::crypto::{Sha256, sha256};

mod common;

fn kernels(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("sha256/kernels");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    for &kernel in sha256::ALL_KERNELS {
      let engine = Sha256::with_kernel(kernel);
      group.bench_with_input(BenchmarkId::new(kernel.as_str(), len), data, |b, d| {
        b.iter(|| black_box(engine.hash(black_box(d))))
      });
    }
  }

  group.finish();
}

fn padding(c: &mut Criterion) {
  let mut group = c.benchmark_group("sha256/padding");
  let data = common::pseudo_random_bytes(64 * 1024, 7);
  common::set_throughput(&mut group, data.len());

  group.bench_function("pad+segment", |b| {
    b.iter(|| {
      let padded = sha256::pad(black_box(&data));
      black_box(sha256::segment(&padded).count())
    })
  });
  group.bench_function("padded_blocks", |b| {
    b.iter(|| black_box(Sha256::blocks(black_box(&data)).count()))
  });

  group.finish();
}

criterion_group!(benches, kernels, padding);
criterion_main!(benches);
