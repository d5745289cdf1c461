//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package conchc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use conchc_lex::Lexer;

fn token_count(source: &str) -> usize {
    Lexer::from_str(source).consume().len()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    let source = "var x = 42; fn main() { var y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_decl", |b| b.iter(|| token_count(black_box("var x = 42;"))));
    group.bench_function("function_with_body", |b| b.iter(|| token_count(black_box(source))));
    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");
    let source = "0xFF 0b1010 0o17 1234 3.14e-10 2u 2ul 2uz";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("mixed_numeric_literals", |b| {
        b.iter(|| token_count(black_box(source)))
    });
    group.finish();
}

criterion_group!(benches, bench_lexer_keywords, bench_lexer_numbers);
criterion_main!(benches);
