//! Criterion view of the same cases the CLI measures, over generated data

use criterion::{criterion_group, criterion_main, Criterion};
use jsonbench::data::generate;
use jsonbench::{candidate, Config, Dataset, CASES};
use std::hint::black_box;

fn dataset() -> Dataset {
    let large = serde_json::to_string(&generate::large_document(1_000)).unwrap();
    let lines = generate::to_lines(&generate::small_documents(200)).unwrap();
    Dataset::from_parts(large, &lines).unwrap()
}

fn bench_codecs(c: &mut Criterion) {
    let config = Config::default();
    let data = dataset();

    for case in &CASES {
        let mut group = c.benchmark_group(case.label);

        for name in &config.candidates {
            let mut candidate = match candidate::resolve(name, &config) {
                Ok(candidate) => candidate,
                Err(_) => continue,
            };
            if !case.applies_to(&candidate) {
                continue;
            }

            group.bench_function(candidate.display_name(), |b| {
                b.iter(|| black_box(case.run(&mut candidate, &data)).unwrap())
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);
