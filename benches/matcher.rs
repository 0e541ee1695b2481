use criterion::{black_box, criterion_group, criterion_main, Criterion};
use domain_checker::{Domain, DomainMatcher};

fn forbidden_domains(n: usize) -> Vec<Domain> {
    (0..n)
        .map(|i| match i % 3 {
            0 => Domain::new(format!("site{}.com", i)),
            1 => Domain::new(format!("cdn.site{}.com", i - 1)),
            _ => Domain::new(format!("tracker{}.net", i)),
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let domains = forbidden_domains(100_000);
    c.bench_function("build 100k", |b| {
        b.iter(|| DomainMatcher::new(black_box(domains.clone())))
    });
}

fn bench_query(c: &mut Criterion) {
    let matcher = DomainMatcher::new(forbidden_domains(100_000));
    let hit = Domain::new("a.b.cdn.site999.com");
    let miss = Domain::new("www.example.org");

    c.bench_function("query hit", |b| b.iter(|| matcher.is_forbidden(black_box(&hit))));
    c.bench_function("query miss", |b| b.iter(|| matcher.is_forbidden(black_box(&miss))));
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
