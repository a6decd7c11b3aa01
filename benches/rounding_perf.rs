use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

// Ratios and ages spanning the magnitudes a reduction run produces
fn build_fixture(len: usize) -> Vec<f64> {
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let mantissa = (state >> 11) as f64 / (1u64 << 53) as f64;
            let exponent = (i % 24) as i32 - 12;
            (mantissa + 0.5) * 10f64.powi(exponent)
        })
        .collect()
}

fn bench_scalar(c: &mut Criterion) {
    let fixture = build_fixture(256);
    let mut group = c.benchmark_group("round_significant");
    group.sample_size(200);
    group.measurement_time(Duration::from_secs(2));
    for sig_figs in [2, 4, 15] {
        group.bench_function(format!("scalar_{sig_figs}_figures"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &v in &fixture {
                    acc += ludwig_utils::round_significant(black_box(v), black_box(sig_figs));
                }
                black_box(acc);
            });
        });
    }
    group.bench_function("subnormal", |b| {
        b.iter(|| black_box(ludwig_utils::round_significant(black_box(5e-324), black_box(3))));
    });
    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    let rows: Vec<Vec<f64>> = build_fixture(1024).chunks(32).map(<[f64]>::to_vec).collect();
    let mut group = c.benchmark_group("round_significant_matrix");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(2));
    group.bench_function("32x32", |b| {
        b.iter(|| {
            let rounded = ludwig_utils::round_significant_matrix(black_box(&rows), black_box(4));
            black_box(rounded);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_scalar, bench_matrix);
criterion_main!(benches);
