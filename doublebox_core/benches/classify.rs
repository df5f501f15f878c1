//! Codec benchmarks.
//!
//! Measures the three operations on the hot path of any consumer:
//! classification, double canonicalization, and short-string packing.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use doublebox_core::{DoubleBox, Kind, ShortStr};

// =============================================================================
// Classification
// =============================================================================

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let words = [
        ("double", DoubleBox::double(std::f64::consts::PI)),
        ("null", DoubleBox::null()),
        ("bool", DoubleBox::bool(true)),
        ("integer", DoubleBox::integer(123_456_789)),
        ("string", DoubleBox::short_str("ABCDE")),
        ("empty", DoubleBox::empty()),
    ];

    for (name, word) in words {
        group.bench_with_input(BenchmarkId::new("kind", name), &word, |b, w| {
            b.iter(|| black_box(w.kind()))
        });
    }

    group.finish();
}

// =============================================================================
// Double Encoding
// =============================================================================

fn bench_encode_double(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_double");

    // Ordinary double: passes through untouched.
    group.bench_function("finite", |b| {
        b.iter(|| black_box(DoubleBox::double(black_box(10.0))))
    });

    // Hardware NaN: still below the boundary, passes through.
    group.bench_function("hardware_nan", |b| {
        b.iter(|| black_box(DoubleBox::double(black_box(f64::NAN))))
    });

    // Foreign NaN: takes the canonicalization branch.
    let foreign = f64::from_bits(u64::MAX);
    group.bench_function("foreign_nan", |b| {
        b.iter(|| black_box(DoubleBox::double(black_box(foreign))))
    });

    group.finish();
}

// =============================================================================
// Short Strings
// =============================================================================

fn bench_short_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_str");

    group.bench_function("pack", |b| {
        b.iter(|| black_box(DoubleBox::short_str(black_box("ABCDE"))))
    });

    let word = DoubleBox::short_str("ABCDE");
    group.bench_function("unpack", |b| {
        b.iter(|| black_box(word.as_short_str().unwrap()))
    });

    group.bench_function("unpack_to_c_buf", |b| {
        let s = ShortStr::new("ABCDE");
        b.iter(|| {
            let mut buf = [0u8; 6];
            s.write_c_buf(&mut buf);
            black_box(buf)
        })
    });

    group.finish();
}

// =============================================================================
// Batch Classification
// =============================================================================

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    // Mixed column of 256 words, counting integers — the columnar-scan
    // pattern the encoding exists for.
    let column: Vec<DoubleBox> = (0..256)
        .map(|i| match i % 4 {
            0 => DoubleBox::double(f64::from(i)),
            1 => DoubleBox::integer(u64::from(i as u32)),
            2 => DoubleBox::short_str("col"),
            _ => DoubleBox::empty(),
        })
        .collect();

    group.bench_function("scan_256_mixed", |b| {
        b.iter(|| {
            let mut integers = 0usize;
            for w in &column {
                if w.kind() == Kind::Integer {
                    integers += 1;
                }
            }
            black_box(integers)
        })
    });

    group.finish();
}

criterion_group!(
    codec_benches,
    bench_classify,
    bench_encode_double,
    bench_short_str,
    bench_batch,
);

criterion_main!(codec_benches);
