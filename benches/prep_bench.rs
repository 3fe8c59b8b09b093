//! Benchmarks for the stringprep encode pipeline.
//!
//! Exercises the three cost regimes separately: plain ASCII (mapping only),
//! multi-byte text (table lookups dominate), and normalization-heavy input
//! (B.2 fold + NFKC).

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use stringprep::stringprep::{encode, PROFILE_SASL_STORED};
use stringprep::ByteStringBuilder;

fn ascii_input(len: usize) -> String {
    (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect()
}

fn cyrillic_input(len: usize) -> String {
    (0..len)
        .map(|i| char::from_u32(0x0430 + (i % 32) as u32).unwrap())
        .collect()
}

fn folding_input(len: usize) -> String {
    (0..len)
        .map(|i| (b'A' + (i % 26) as u8) as char)
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in [64usize, 1024, 16384] {
        for (name, input, profile) in [
            ("ascii_empty_profile", ascii_input(size), 0),
            ("ascii_sasl_stored", ascii_input(size), PROFILE_SASL_STORED),
            ("cyrillic_sasl_stored", cyrillic_input(size), PROFILE_SASL_STORED),
            ("folding_sasl_stored", folding_input(size), PROFILE_SASL_STORED),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &input, |b, input| {
                let mut out = ByteStringBuilder::with_capacity(input.len() * 2);
                b.iter(|| {
                    out.clear();
                    encode(black_box(input), &mut out, profile).unwrap();
                    black_box(out.len());
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
