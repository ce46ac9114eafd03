use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rect_coverage::{coverage_pixels, CoverageScratch, Rect};

/// Deterministic pseudo-random rectangles (xorshift), roughly window sized.
fn rects(n: usize, screen: &Rect, seed: u64) -> Vec<Rect> {
    let mut s = seed;
    let mut next = move || {
        s ^= s << 13;
        s ^= s >> 7;
        s ^= s << 17;
        s
    };
    let w = screen.width();
    let h = screen.height();
    (0..n)
        .map(|_| {
            let x = (next() % w) as i32 + screen.left - 50;
            let y = (next() % h) as i32 + screen.top - 50;
            let rw = (next() % (w / 2)) as u32 + 1;
            let rh = (next() % (h / 2)) as u32 + 1;
            Rect::from_origin_size(x, y, rw, rh)
        })
        .collect()
}

fn bench_coverage(c: &mut Criterion) {
    let screen = Rect::new(0, 0, 1920, 1080);
    let mut group = c.benchmark_group("coverage_pixels");
    for n in [4usize, 16, 64, 256] {
        let input = rects(n, &screen, 0x9E37_79B9_7F4A_7C15 ^ n as u64);
        group.bench_with_input(BenchmarkId::new("alloc", n), &input, |b, input| {
            b.iter(|| coverage_pixels(black_box(&screen), black_box(input)))
        });
        let mut scratch = CoverageScratch::with_capacity(n);
        group.bench_with_input(BenchmarkId::new("scratch", n), &input, |b, input| {
            b.iter(|| scratch.coverage_pixels(black_box(&screen), black_box(input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_coverage);
criterion_main!(benches);
