use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_encode(c: &mut Criterion) {
    let ascii = "The quick brown fox jumps over the lazy dog. ".repeat(20);
    let mixed = "• Größe – 5€ “quoted” 漢字 ".repeat(20);

    c.bench_function("encode ascii", |b| b.iter(|| aw_winansi::encode(black_box(&ascii))));
    c.bench_function("encode mixed", |b| b.iter(|| aw_winansi::encode(black_box(&mixed))));
}

fn bench_decode(c: &mut Criterion) {
    let encoded = aw_winansi::encode(&"• Größe – 5€ “quoted” ".repeat(20));

    c.bench_function("decode", |b| b.iter(|| aw_winansi::decode(black_box(&encoded))));
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
