use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semver_constraint::{Constraint, Operator, Version};

fn bench_parse_version(c: &mut Criterion) {
    let versions = [
        "1.2.3",
        "v1.2.3",
        "0.1.0-alpha.1",
        "1.0.0-rc.1+exp.sha.5114f85",
        "2.4.0+build.5",
        "10.20.30",
    ];

    c.bench_function("parse_version", |b| {
        b.iter(|| {
            for version in versions {
                black_box(black_box(version).parse::<Version>().ok());
            }
        })
    });
}

fn bench_parse_constraint(c: &mut Criterion) {
    let constraints = [
        "1.2.3",
        "=1.2.3",
        "!=1.0.0",
        ">1.2.3",
        ">= 1.2.3",
        "<2.0.0",
        "<= 2.0.0-rc.1",
    ];

    c.bench_function("parse_constraint", |b| {
        b.iter(|| {
            for constraint in constraints {
                black_box(black_box(constraint).parse::<Constraint>().ok());
            }
        })
    });
}

fn bench_matches(c: &mut Criterion) {
    let candidate: Version = "1.5.0".parse().unwrap();
    let constraints: Vec<Constraint> = Operator::supported_operators()
        .iter()
        .map(|op| Constraint::from_parts(op, "1.2.3".parse().unwrap()).unwrap())
        .collect();

    c.bench_function("matches", |b| {
        b.iter(|| {
            for constraint in &constraints {
                black_box(constraint.matches(black_box(&candidate)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_parse_version,
    bench_parse_constraint,
    bench_matches
);
criterion_main!(benches);
