#![forbid(unsafe_code)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tripane_core::{FragmentKind, Session, location};

const MARKUP: &str = "<main><h1>Demo</h1><p>Some paragraph content.</p></main>";
const STYLE: &str = "main { max-width: 40rem; margin: 0 auto; } h1 { color: #c33; }";
const SCRIPT: &str = "for (let i = 0; i < 10; i++) { console.log('tick', i); }";

fn bench_change_handler(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/change_handler");

    group.bench_function("apply_edit_small", |b| {
        let mut session = Session::new();
        session.apply_edit(FragmentKind::Style, STYLE.to_owned());
        session.apply_edit(FragmentKind::Script, SCRIPT.to_owned());
        b.iter(|| {
            let outcome = session.apply_edit(FragmentKind::Markup, MARKUP.to_owned());
            black_box(outcome.location_path.len());
            black_box(outcome.document.len());
        });
    });

    group.bench_function("apply_edit_large_markup", |b| {
        let large = MARKUP.repeat(256);
        let mut session = Session::new();
        b.iter(|| {
            let outcome = session.apply_edit(FragmentKind::Markup, large.clone());
            black_box(outcome.document.len());
        });
    });

    group.finish();
}

fn bench_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/location");

    let mut session = Session::new();
    session.apply_edit(FragmentKind::Markup, MARKUP.to_owned());
    session.apply_edit(FragmentKind::Style, STYLE.to_owned());
    let path = session.apply_edit(FragmentKind::Script, SCRIPT.to_owned()).location_path;

    group.bench_function("parse_path", |b| {
        b.iter(|| black_box(location::parse_path(black_box(&path))));
    });

    group.finish();
}

criterion_group!(benches, bench_change_handler, bench_location);
criterion_main!(benches);
