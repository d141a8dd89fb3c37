use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use myorm::qb::{self, Connector, Expr, compile};
use myorm::{Builder, qb::SortBy};

/// Build `n` AND-joined equality predicates: col0 = ? AND col1 = ? ...
fn build_predicates(n: usize) -> Vec<Expr> {
    (0..n).map(|i| qb::eq(&format!("col{i}"), i as i64)).collect()
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("clause_compiler/compile");

    for n in [1, 5, 10, 50, 100] {
        let exprs = build_predicates(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &exprs, |b, exprs| {
            b.iter(|| black_box(compile("t", Connector::And, false, exprs).unwrap()));
        });
    }

    group.finish();
}

fn bench_compile_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("clause_compiler/compile_nested");

    for n in [1, 5, 10, 50] {
        let exprs: Vec<Expr> = (0..n)
            .map(|i| {
                qb::or(vec![
                    qb::eq(&format!("a{i}"), i as i64),
                    qb::and(vec![
                        qb::gt(&format!("b{i}"), i as i64),
                        qb::is_null(&format!("c{i}")),
                    ]),
                ])
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &exprs, |b, exprs| {
            b.iter(|| black_box(compile("t", Connector::And, false, exprs).unwrap()));
        });
    }

    group.finish();
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/to_sql");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut users = Builder::new((), "users");
                users
                    .select(&["id", "name"])
                    .join("orders", "id", "user_id")
                    .order_by("id", SortBy::Desc)
                    .limit(20);
                for expr in build_predicates(n) {
                    users.filter(expr);
                }
                black_box(users.to_sql().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compile, bench_compile_nested, bench_to_sql);
criterion_main!(benches);
