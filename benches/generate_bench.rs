//! Benchmarks for record generation.
//!
//! Tests:
//! - Single-record generation per locale
//! - Batch throughput with varying batch sizes (rayon)
//! - Weighted pick over the largest table

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use personagen::resolver::{Picker, RowFilter};
use personagen::{generate_batch, BatchPlan, GenerationContext, GenerationRequest};
use std::hint::black_box;

fn bench_single_record(c: &mut Criterion) {
    let ctx = GenerationContext::builtin().unwrap();
    let mut group = c.benchmark_group("single_record");
    group.throughput(Throughput::Elements(1));

    for locale in ["en_US", "de_DE"] {
        group.bench_with_input(BenchmarkId::new("generate", locale), &locale, |b, &locale| {
            let mut index = 0;
            b.iter(|| {
                let request = GenerationRequest::new(locale, 1, 1, index);
                index += 1;
                black_box(ctx.generate(&request).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_batches(c: &mut Criterion) {
    let ctx = GenerationContext::builtin().unwrap();
    let mut group = c.benchmark_group("batch");

    for batch_size in [10u32, 100, 1_000] {
        group.throughput(Throughput::Elements(u64::from(batch_size)));
        group.bench_with_input(
            BenchmarkId::new("generate_batch", batch_size),
            &batch_size,
            |b, &batch_size| {
                let plan = BatchPlan::new("en_US", 1, 1, batch_size);
                b.iter(|| black_box(generate_batch(&ctx, &plan).unwrap().len()))
            },
        );
    }

    group.finish();
}

fn bench_pick(c: &mut Criterion) {
    let ctx = GenerationContext::builtin().unwrap();
    let names = &ctx.lookups().names;
    let mut group = c.benchmark_group("pick");
    group.throughput(Throughput::Elements(names.len() as u64));

    group.bench_function("names_en_US", |b| {
        let request = GenerationRequest::new("en_US", 1, 1, 0);
        let picker = Picker::new(&request);
        let filter = RowFilter::locale("en_US");
        b.iter(|| black_box(picker.pick(names, &filter).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_single_record, bench_batches, bench_pick);
criterion_main!(benches);
