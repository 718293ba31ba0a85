use std::io::{Cursor, sink};
use std::hint::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use rand::SeedableRng;
use rand::rngs::StdRng;
use fm_mutation::ALPHABET;
use fm_mutation::MutationRate;
use fm_mutation::Mutator;
use fm_mutation::random_base;
use fm_mutation::transcode;

/// A FASTA genome with `records` records of `len` bases, 60 per line.
fn random_genome(records: usize, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut out = Vec::new();
    for r in 0..records {
        out.extend_from_slice(format!(">chr{}\n", r).as_bytes());
        let seq: Vec<u8> = (0..len).map(|_| random_base(&mut rng)).collect();
        for chunk in seq.chunks(60) {
            out.extend_from_slice(chunk);
            out.push(b'\n');
        }
    }
    assert!(out.iter().any(|c| ALPHABET.contains(c)));
    out
}

fn mutate_genome(genome: &[u8], rate: f64) {
    let rate = MutationRate::new(rate).unwrap();
    let mut mutator = Mutator::new(StdRng::seed_from_u64(7), rate);
    transcode(Cursor::new(genome), sink(), &mut mutator).unwrap();
    black_box(mutator.stats());
}

fn mutate_benchmark(c: &mut Criterion) {
    let genome = random_genome(4, 250_000);
    let mut group = c.benchmark_group("transcode_1mb");
    group.bench_function("rate_1e-5", |b| {
        b.iter(|| mutate_genome(&genome, black_box(1e-5)))
    });
    group.bench_function("rate_1e-2", |b| {
        b.iter(|| mutate_genome(&genome, black_box(1e-2)))
    });
    group.bench_function("rate_1", |b| {
        b.iter(|| mutate_genome(&genome, black_box(1.0)))
    });
    group.finish();
}

criterion_group!(benches, mutate_benchmark);
criterion_main!(benches);
