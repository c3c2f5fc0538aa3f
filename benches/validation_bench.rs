use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phonevalidator::{FormatMode, PhoneClass, PHONE_VALIDATOR};

type TestEntity = (&'static str, &'static str, PhoneClass);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("9876543210", "IN", PhoneClass::Mobile),
        ("98765 43210", "IN", PhoneClass::Mobile),
        ("221234567", "IN", PhoneClass::Landline),
        ("(555) 234-5678", "US", PhoneClass::Mobile),
        ("+15552345678", "US", PhoneClass::Any),
        ("07123 456789", "UK", PhoneClass::Mobile),
        ("(020) 1234 5678", "UK", PhoneClass::Landline),
        ("1234567890", "IN", PhoneClass::Any),
    ]
}

fn validation_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();
    let mut group = c.benchmark_group("Validation");

    group.bench_function("validate", |b| {
        b.iter(|| {
            for (number, country, class) in &numbers {
                let _ = PHONE_VALIDATOR.validate(black_box(Some(*number)), country, *class);
            }
        })
    });

    group.bench_function("format_phone(auto)", |b| {
        b.iter(|| {
            for (number, country, _) in &numbers {
                PHONE_VALIDATOR
                    .format_phone(black_box(*number), country, FormatMode::Auto, None)
                    .unwrap();
            }
        })
    });

    group.finish();
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
