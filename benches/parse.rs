use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use xwords::Generator;

const GRID: [&str; 15] = [
    "....*....*.....",
    "....*....*.....",
    ".........*.....",
    "...*...*...*...",
    "**....*........",
    "......*.....***",
    ".....*....*....",
    "...*.......*...",
    "....*....*.....",
    "***.....*......",
    "........*....**",
    "...*...*...*...",
    ".....*.........",
    ".....*....*....",
    ".....*....*....",
];

pub fn criterion_benchmark(c: &mut Criterion) {
    let words: String = (0..10_000usize)
        .flat_map(|i| {
            (0..5)
                .map(move |k| (b'a' + ((i / 26usize.pow(k)) % 26) as u8) as char)
                .chain(std::iter::once('\n'))
        })
        .collect();

    c.bench_function("build_generator_15x15", |b| {
        b.iter(|| Generator::new(black_box(&GRID), Cursor::new(words.as_str())).map(|g| g.entries().len()));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
