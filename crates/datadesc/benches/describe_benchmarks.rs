//! Describe performance benchmarks.
//!
//! Measures load + profile and report rendering across table sizes.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use datadesc::{ColumnProfiler, Describer, Parser};
use std::io::Write;
use tempfile::NamedTempFile;

/// Generate synthetic CSV data with the specified number of rows and columns.
fn generate_csv_data(rows: usize, cols: usize) -> String {
    let mut data = String::new();

    for i in 0..cols {
        if i > 0 {
            data.push(',');
        }
        data.push_str(&format!("column_{}", i + 1));
    }
    data.push('\n');

    for row in 0..rows {
        for col in 0..cols {
            if col > 0 {
                data.push(',');
            }
            // Mix of column kinds
            match col % 5 {
                0 => data.push_str(&row.to_string()),
                1 => {
                    if row % 17 != 0 {
                        data.push_str(&format!("{:.2}", row as f64 * 1.5));
                    }
                }
                2 => data.push_str(&format!("level_{}", row % 4)),
                3 => data.push_str(if row % 2 == 0 { "true" } else { "false" }),
                4 => data.push_str(&format!("Category_{}", row % 25)),
                _ => unreachable!(),
            }
        }
        data.push('\n');
    }

    data
}

/// Benchmark loading and profiling files of various sizes.
fn bench_describe_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe_load");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_csv_data(*rows, 10);
        let bytes = data.len();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| black_box(Describer::open(temp.path()).unwrap()),
            )
        });
    }

    group.finish();
}

/// Benchmark profiling an already parsed table.
fn bench_profile_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_table");

    for rows in [1_000, 10_000].iter() {
        let data = generate_csv_data(*rows, 10);
        let table = Parser::new().parse_bytes(data.as_bytes(), b',').unwrap();

        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            let profiler = ColumnProfiler::new();
            b.iter(|| black_box(profiler.profile_table(table)))
        });
    }

    group.finish();
}

/// Benchmark rendering the names file.
fn bench_render(c: &mut Criterion) {
    let data = generate_csv_data(10_000, 20);
    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
    temp.write_all(data.as_bytes()).unwrap();
    let describer = Describer::open(temp.path()).unwrap();

    c.bench_function("render", |b| b.iter(|| black_box(describer.render())));
}

criterion_group!(benches, bench_describe_load, bench_profile_table, bench_render);
criterion_main!(benches);
