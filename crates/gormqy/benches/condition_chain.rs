use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gormqy::Query;

/// Build a query with `n` groups of two predicates each:
/// (col0 = ? AND col0 > ?) OR (col1 = ? AND col1 > ?) ...
fn build_grouped_query(n: usize) -> Query {
    let mut q = Query::new();
    for i in 0..n {
        let column = format!("col{i}");
        q.or_condition()
            .eq(column.as_str(), i as i64)
            .and()
            .gt(column.as_str(), 0)
            .end_with_group();
    }
    q
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition_chain/build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_grouped_query(n)));
        });
    }

    group.finish();
}

fn bench_where_clause(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition_chain/where_clause");

    for n in [1, 5, 10, 50, 100] {
        let q = build_grouped_query(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.where_clause()));
        });
    }

    group.finish();
}

fn bench_to_numbered(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition_chain/to_numbered");

    for n in [5, 20, 100, 500] {
        let mut q = Query::new();
        q.condition()
            .in_list("id", 0..n as i64)
            .and()
            .eq("status", "active")
            .end();
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.to_numbered()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_where_clause, bench_to_numbered);
criterion_main!(benches);
