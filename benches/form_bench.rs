use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use weld_feature_editor::core::parse_float_prefix;
use weld_feature_editor::dialog::{FormField, FormValues};

fn bench_parse_float_prefix(c: &mut Criterion) {
    let inputs = ["12.5", "  -3.5e2x", "0.125mm", "abc", "", "Infinity"];

    c.bench_function("parse_float_prefix_mixed", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|s| parse_float_prefix(black_box(s)))
                .filter(|v| !v.is_nan())
                .count()
        })
    });
}

fn build_form(valid: bool) -> FormValues {
    let mut form = FormValues::with_defaults();
    form.set(FormField::XMin, "10.0");
    form.set(FormField::XMax, "125.5");
    form.set(FormField::Width, if valid { "4.2" } else { "abc" });
    form
}

fn bench_form_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_extract");

    for valid in [true, false] {
        let form = build_form(valid);
        group.bench_with_input(
            BenchmarkId::new("extract", if valid { "valid" } else { "invalid" }),
            &form,
            |b, form| b.iter(|| black_box(form).extract().is_ok()),
        );
    }

    group.finish();
}

criterion_group!(form_benches, bench_parse_float_prefix, bench_form_extract);
criterion_main!(form_benches);
