use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use repair_rs::compress;

/// Generate repetitive text data
fn generate_repetitive_text(size: usize) -> String {
    let pattern = "the quick brown fox jumps over the lazy dog ";
    pattern.repeat(size / pattern.len())
}

/// Generate source code-like data
fn generate_source_code(size: usize) -> String {
    let patterns = [
        "fn main() {\n",
        "    let x = 42;\n",
        "    println!(\"Hello, world!\");\n",
        "    if x > 0 {\n",
        "        return x;\n",
        "    }\n",
        "}\n",
    ];

    let mut result = String::new();
    let mut i = 0;
    while result.len() < size {
        result.push_str(patterns[i % patterns.len()]);
        i += 1;
    }
    result.truncate(size);
    result
}

/// Generate low-repetition data (simulating base64)
fn generate_low_repetition(size: usize) -> String {
    let chars = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut result = String::new();
    let mut seed = 12345u64;

    for _ in 0..size {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let idx = (seed % chars.len() as u64) as usize;
        result.push(chars.chars().nth(idx).unwrap());
    }
    result
}

/// Generate long runs of identical characters (overlap-correctness stress case)
fn generate_long_runs(size: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(size);
    let chars = [b'a', b'b', b'c', b'd'];
    let mut i = 0;
    let run_length = 100;

    while result.len() < size {
        let ch = chars[i % chars.len()];
        for _ in 0..run_length.min(size - result.len()) {
            result.push(ch);
        }
        i += 1;
    }
    result
}

/// Generate (ab)^k pattern
fn generate_ab_pattern(k: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(k * 2);
    for _ in 0..k {
        result.push(b'a');
        result.push(b'b');
    }
    result
}

fn bench_repetitive(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("repetitive_text");

    for size in sizes.iter() {
        let data = generate_repetitive_text(*size);
        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data.chars().collect()))));
        });
    }

    group.finish();
}

fn bench_source_code(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 50_000];
    let mut group = c.benchmark_group("source_code");

    for size in sizes.iter() {
        let data = generate_source_code(*size);
        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data.chars().collect()))));
        });
    }

    group.finish();
}

fn bench_low_repetition(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 50_000];
    let mut group = c.benchmark_group("low_repetition");

    for size in sizes.iter() {
        let data = generate_low_repetition(*size);
        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data.chars().collect()))));
        });
    }

    group.finish();
}

fn bench_long_runs(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("long_runs");

    for size in sizes.iter() {
        let data = generate_long_runs(*size);
        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data.clone()))));
        });
    }

    group.finish();
}

fn bench_ab_pattern(c: &mut Criterion) {
    let ks = [100, 1_000, 10_000];
    let mut group = c.benchmark_group("ab_pattern");

    for k in ks.iter() {
        let data = generate_ab_pattern(*k);
        group.bench_with_input(BenchmarkId::new("compress", k), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data.clone()))));
        });
    }

    group.finish();
}

/// Print compression statistics (not a timed benchmark).
fn print_compression_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_stats");
    group.sample_size(10);

    eprintln!("\n{:=^60}", " Compression Statistics ");
    eprintln!("{:<25} {:>10} {:>12} {:>12}", "Dataset", "Input", "Rules", "Output Syms");
    eprintln!("{:-<60}", "");

    for size in [1_000, 10_000, 100_000] {
        let data = generate_long_runs(size);
        let (compressed, rules) = compress(data);
        eprintln!(
            "{:<25} {:>10} {:>12} {:>12}",
            format!("long_runs_{}", size),
            size,
            rules.len(),
            compressed.len()
        );
    }

    for size in [1_000, 10_000, 100_000] {
        let data: Vec<u8> = generate_repetitive_text(size).into_bytes();
        let (compressed, rules) = compress(data);
        eprintln!(
            "{:<25} {:>10} {:>12} {:>12}",
            format!("repetitive_text_{}", size),
            size,
            rules.len(),
            compressed.len()
        );
    }

    eprintln!("{:=<60}\n", "");

    group.bench_function("stats_printed", |b| b.iter(|| black_box(1)));
    group.finish();
}

criterion_group!(
    benches,
    bench_repetitive,
    bench_source_code,
    bench_low_repetition,
    bench_long_runs,
    bench_ab_pattern,
    print_compression_stats,
);
criterion_main!(benches);
