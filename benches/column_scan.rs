use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cell_narrow::{DataType, Value, calc_narrowest_type, narrow_array};

fn generate_column(rows: usize, render: impl Fn(usize) -> String) -> Vec<Value> {
    (0..rows).map(|i| Value::text(render(i))).collect()
}

fn bench_column_scan(c: &mut Criterion) {
    let rows = 10_000;
    let flags = generate_column(rows, |i| (if i % 2 == 0 { "yes" } else { "no" }).to_string());
    let integers = generate_column(rows, |i| (i * 7).to_string());
    let doubles = generate_column(rows, |i| format!("{}.{}", i, i % 10));
    let sparse = generate_column(rows, |i| {
        if i % 5 == 0 {
            String::new()
        } else {
            i.to_string()
        }
    });

    let mut group = c.benchmark_group("calc_narrowest_type");
    group.bench_function("boolean_text", |b| {
        b.iter(|| calc_narrowest_type(black_box(&flags), false))
    });
    group.bench_function("integer_text", |b| {
        b.iter(|| calc_narrowest_type(black_box(&integers), false))
    });
    group.bench_function("double_text", |b| {
        b.iter(|| calc_narrowest_type(black_box(&doubles), false))
    });
    group.bench_function("sparse_integer_allow_missing", |b| {
        b.iter(|| calc_narrowest_type(black_box(&sparse), true))
    });
    group.finish();

    let mut group = c.benchmark_group("narrow_array");
    group.bench_function("text_to_double", |b| {
        b.iter_batched(
            || doubles.clone(),
            |values| narrow_array(values, DataType::Double, false).expect("narrow"),
            BatchSize::LargeInput,
        )
    });
    group.bench_function("already_narrow_identity", |b| {
        let narrowed = narrow_array(integers.clone(), DataType::Integer, false).expect("narrow");
        b.iter_batched(
            || narrowed.clone(),
            |values| narrow_array(values, DataType::Integer, false).expect("narrow"),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_column_scan);
criterion_main!(benches);
