//! Benchmarks for the metrics engine

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use legible_core::Analyzer;
use std::hint::black_box;

const PARAGRAPH: &str = "The harbor glowed at dusk. Gulls wheeled over the cold water and \
their echo rang along the pier. A bitter wind was expected before morning. Nobody watched \
the last boat come in, though its lantern cast a warm color across the rough planks.";

fn chapter_text(repeats: usize) -> String {
    let mut text = String::with_capacity(PARAGRAPH.len() * repeats + repeats);
    for _ in 0..repeats {
        text.push_str(PARAGRAPH);
        text.push('\n');
    }
    text
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = Analyzer::new();

    let mut group = c.benchmark_group("analyze");
    for repeats in [1, 16, 256] {
        let text = chapter_text(repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("paragraphs_{repeats}"), |b| {
            b.iter(|| analyzer.analyze(black_box(&text)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
