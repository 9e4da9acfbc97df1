//! Benchmarks for story import throughput

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use vachan_core::{segment_into_sentences, RuleSet, StoryImporter, Transliterator};

/// Generate story text of roughly the given size in kilobytes
fn generate_story(size_kb: usize) -> String {
    let paragraph = "एक आशिल्लो काय्ळो। तो दर दिसा राब्तालो। \
        गुब्चीने भित्तर्थाव्नु निम्गिले - \" कोण तें?\" \
        काय्ळो कड्कड्तचि म्हळालो , \" हांव! काय्ळो!\"\n";
    let repetitions = (size_kb * 1024) / paragraph.len() + 1;
    paragraph.repeat(repetitions)
}

fn benchmark_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for size_kb in [16, 256] {
        let text = generate_story(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("{size_kb}KB"), |b| {
            b.iter(|| segment_into_sentences(black_box(&text)));
        });
    }

    group.finish();
}

fn benchmark_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");
    let text = generate_story(64);
    group.throughput(Throughput::Bytes(text.len() as u64));

    let with_rules = StoryImporter::new(Transliterator::new(RuleSet::builtin().clone()));
    group.bench_function("builtin_rules", |b| {
        b.iter(|| with_rules.import(black_box(&text)));
    });

    let without_rules = StoryImporter::new(Transliterator::new(RuleSet::empty()));
    group.bench_function("no_rules", |b| {
        b.iter(|| without_rules.import(black_box(&text)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_segmentation, benchmark_import);
criterion_main!(benches);
