use criterion::{criterion_group, criterion_main, Criterion};
use fuzzilla::index::{SearchOpts, TrigramIndex};
use std::hint::black_box;

fn bench_search(c: &mut Criterion) {
    let mut idx = TrigramIndex::new();
    for i in 0..1_000 {
        idx.add(&format!("словарная карточка номер {i}"), i);
    }

    c.bench_function("search_1k_docs_typo", |b| {
        b.iter(|| idx.search(black_box("карточкa номеp"), SearchOpts::default()));
    });

    c.bench_function("search_1k_docs_exact", |b| {
        b.iter(|| idx.search(black_box("словарная карточка номер 500"), SearchOpts::default()));
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
