use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use format_validator::{LinesSource, Rule, RowValidator, Validator};

/// Generate rows with a given share of failing rows
fn generate_rows(rows: usize, scenario: &str) -> Vec<String> {
    let mut content = Vec::with_capacity(rows);

    for i in 0..rows {
        let row = match scenario {
            "all_valid" => format!("name{},code{},a{},{}.5", i, i, i, i),
            "some_invalid" => {
                if i % 4 == 0 {
                    format!("n{},,b,amount{}", i, i)
                } else {
                    format!("name{},code{},a{},{}.5", i, i, i, i)
                }
            }
            "all_invalid" => format!("n,,b{},x{}", i, i),
            _ => unreachable!("unknown scenario {}", scenario),
        };
        content.push(row);
    }

    content
}

fn configured_validator() -> Validator {
    let mut validator = Validator::new();
    validator
        .add_column_validator(1, vec![Rule::MinLength(4), Rule::MaxLength(12)])
        .expect("column 1");
    validator.add_column_validator(2, Rule::NotNull).expect("column 2");
    validator
        .add_column_validator(3, Rule::pattern("^a[0-9]*$").expect("pattern"))
        .expect("column 3");
    validator.add_column_validator(4, Rule::Number).expect("column 4");
    validator
}

fn bench_row_check(c: &mut Criterion) {
    let mut validator = RowValidator::new();
    validator.add_column_validator(2, Rule::NotNull).expect("column 2");
    validator.add_column_validator(4, Rule::Number).expect("column 4");

    let mut group = c.benchmark_group("row_check");
    for row in ["this,is,a,12.5", "this,,a,row"] {
        group.bench_with_input(BenchmarkId::from_parameter(row), row, |b, row| {
            b.iter(|| black_box(validator.check(black_box(row))))
        });
    }
    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_validation");

    for scenario in ["all_valid", "some_invalid", "all_invalid"] {
        for size in [1_000, 10_000] {
            let rows = generate_rows(size, scenario);
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                BenchmarkId::new(scenario, size),
                &rows,
                |b, rows| {
                    b.iter(|| {
                        let mut validator = configured_validator();
                        let failures = validator
                            .validate(LinesSource(rows.iter().map(String::as_str)))
                            .count();
                        black_box(failures)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_text_source(c: &mut Criterion) {
    let text = generate_rows(10_000, "some_invalid").join("\r\n");

    c.bench_function("text_source_10k", |b| {
        b.iter(|| {
            let mut validator = configured_validator();
            black_box(validator.validate(black_box(text.as_str())).count())
        })
    });
}

criterion_group!(benches, bench_row_check, bench_stream, bench_text_source);
criterion_main!(benches);
