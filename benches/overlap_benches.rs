use criterion::{black_box, criterion_group, criterion_main, Criterion};
use handoff_libs::overlap::{recommend, OverlapGrid, WeeklyOverlap};
use handoff_libs::sample::sample_roster;
use std::collections::BTreeSet;

fn overlap_engine(c: &mut Criterion) {
    let roster = sample_roster();
    let everyone: BTreeSet<String> = roster
        .members()
        .iter()
        .map(|member| member.id.clone())
        .collect();

    c.bench_function("validate", |b| {
        let roster = sample_roster();
        b.iter(|| black_box(roster.validate()));
    });

    c.bench_function("compute_grid", |b| {
        b.iter(|| black_box(OverlapGrid::compute(&roster, &everyone)));
    });

    c.bench_function("recommend", |b| {
        let grid = OverlapGrid::compute(&roster, &everyone);
        b.iter(|| black_box(recommend(&grid, &roster, &everyone)));
    });

    c.bench_function("plan_week", |b| {
        b.iter(|| black_box(WeeklyOverlap::plan(&roster, &everyone)));
    });
}

criterion_group!(benches, overlap_engine);
criterion_main!(benches);
