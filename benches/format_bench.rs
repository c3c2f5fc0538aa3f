use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phonevalidator::{FormatMode, PHONE_VALIDATOR};

type TestEntity = (&'static str, &'static str);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("+919876543210", "IN"),
        ("+9122123456", "IN"),
        ("+15552345678", "US"),
        ("+447123456789", "UK"),
        ("+442012345678", "UK"),
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    let mut group = c.benchmark_group("Formatting");

    let mut test = |mode: FormatMode| {
        group.bench_function(format!("render({:?})", mode), |b| {
            b.iter(|| {
                for (number, country) in &numbers {
                    PHONE_VALIDATOR
                        .render(black_box(*number), country, black_box(mode), None)
                        .unwrap();
                }
            })
        });
    };

    test(FormatMode::Auto);
    test(FormatMode::International);
    test(FormatMode::National);
    test(FormatMode::Raw);

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
