use criterion::{black_box, criterion_group, criterion_main, Criterion};
use revver::prelude::*;

fn ok_inputs() -> Vec<&'static str> {
    vec![
        "v6-Edison-59-gf7114dd",
        "v6.1-Edison-59-gf7114dd",
        "v6.1.3-Edison-59-gf7114dd",
        "v6.1.2-20-gf7114dd",
        "v2.0-Big-Sur-3-gabc1234",
    ]
}

fn parse_ok(inputs: &[&str]) {
    for input in inputs {
        let res = Revision::parse(input);
        assert!(res.is_ok());
    }
}

fn bad_inputs() -> Vec<&'static str> {
    vec!["v6.1.3", "v6.1.3-gf7114dd", "vX.1.3-Edison-59-gf7114dd", "v6.1.3-Edison-fifty-g1"]
}

fn parse_bad(inputs: &[&str]) {
    for input in inputs {
        let res = Revision::parse(input);
        assert!(res.is_err());
    }
}

fn format_all(revisions: &[Revision]) {
    for revision in revisions {
        black_box(revision.to_string());
        black_box(revision.to_tagline());
        black_box(revision.to_deploy_tagline());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let revisions: Vec<Revision> = ok_inputs()
        .into_iter()
        .map(|input| Revision::parse(input).unwrap())
        .collect();

    c.bench_function("parse_ok", |b| b.iter(|| parse_ok(black_box(&ok_inputs()))));
    c.bench_function("parse_bad", |b| b.iter(|| parse_bad(black_box(&bad_inputs()))));
    c.bench_function("format_all", |b| b.iter(|| format_all(black_box(&revisions))));
    c.bench_function("next_all_levels", |b| {
        b.iter(|| {
            for revision in &revisions {
                for level in [Level::Major, Level::Minor, Level::Patch] {
                    black_box(revision.next(&level));
                }
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
