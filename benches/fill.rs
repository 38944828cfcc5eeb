use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use xwords::Generator;

const WORDS: &str = "bat\ntab\nbit\ntot\ntat\nbob\ntit\noat\nbot\nact\ncat\naba\n\
ab\nat\nit\nto\nta\nbo\nob\nba\n";

pub fn criterion_benchmark(c: &mut Criterion) {
    let ring = Generator::new(&["...", ".*.", "..."], Cursor::new(WORDS)).expect("failed to build");
    c.bench_function("first_fill_ring", |b| {
        b.iter(|| black_box(ring.solve().next()));
    });
    c.bench_function("all_fills_ring", |b| {
        b.iter(|| black_box(ring.solve().count()));
    });

    let open = Generator::new(&["..*..", "..*..", "*****", "..*..", "..*.."], Cursor::new(WORDS))
        .expect("failed to build");
    c.bench_function("first_100_fills_open", |b| {
        b.iter(|| black_box(open.solve().take(100).count()));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
