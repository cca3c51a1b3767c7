use criterion::{Criterion, black_box, criterion_group, criterion_main};
use smooth_mandelbrot::{
    Complex, EscapeEvaluator, RenderSettings, Renderer, Resolution, Viewport,
    DEFAULT_MAX_ITERATIONS,
};

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = EscapeEvaluator::new(DEFAULT_MAX_ITERATIONS).unwrap();

    c.bench_function("evaluate bounded origin", |b| {
        b.iter(|| evaluator.evaluate(black_box(Complex::ZERO)))
    });
    c.bench_function("evaluate seahorse valley", |b| {
        b.iter(|| evaluator.evaluate(black_box(Complex::new(-0.7453, 0.1127))))
    });
}

fn bench_render(c: &mut Criterion) {
    let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap();
    let resolution = Resolution::new(256, 256).unwrap();
    let parallel = Renderer::default();
    let serial = Renderer::new(RenderSettings {
        parallel: false,
        ..RenderSettings::default()
    })
    .unwrap();

    let mut group = c.benchmark_group("render 256x256");
    group.sample_size(20);
    group.bench_function("rayon", |b| {
        b.iter(|| parallel.render(black_box(viewport), resolution).unwrap())
    });
    group.bench_function("serial", |b| {
        b.iter(|| serial.render(black_box(viewport), resolution).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_render);
criterion_main!(benches);
