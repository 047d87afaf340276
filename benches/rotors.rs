use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ga_kernel::algebras::{pga3, vga3};
use ga_kernel::transcendental::{ga_exp, ga_log};
use std::f64::consts::PI;

fn screw_axis() -> pga3::Mv {
    pga3::bivector([0.3, -0.2, 0.7, 0.1, 0.5, -0.4])
}

/// Sandwich application of rotors and motors to batches of points.
fn bench_apply(c: &mut Criterion) {
    let rotor = vga3::rotor(&vga3::e12(), PI / 4.0).unwrap();
    let vectors: Vec<vga3::Mv> = (0..1000)
        .map(|i| vga3::vector(i as f64 * 0.01, (i as f64 * 0.01).sin(), 1.0))
        .collect();
    c.bench_function("VGA3 rotor apply × 1000", |b| {
        b.iter(|| black_box(rotor.apply_all(black_box(&vectors))))
    });

    let motor = ga_kernel::Rotor::from_bivector(&screw_axis()).unwrap();
    let points: Vec<pga3::Mv> = (0..1000)
        .map(|i| pga3::point(i as f64 * 0.01, (i as f64 * 0.01).cos(), -1.0))
        .collect();
    c.bench_function("PGA3 motor apply × 1000", |b| {
        b.iter(|| black_box(motor.apply_all(black_box(&points))))
    });

    #[cfg(feature = "parallel")]
    c.bench_function("PGA3 motor par_apply × 1000", |b| {
        b.iter(|| black_box(motor.par_apply_all(black_box(&points))))
    });
}

/// Motor composition with renormalization.
fn bench_compose(c: &mut Criterion) {
    let step = pga3::rotation(&pga3::e12(), 0.01).unwrap().then(&pga3::translator(0.01, 0.0, 0.02));
    c.bench_function("PGA3 motor compose × 100 chain", |b| {
        b.iter(|| {
            let mut m = ga_kernel::Rotor::identity();
            for _ in 0..100 {
                m = m.then(black_box(&step));
            }
            black_box(m)
        })
    });
}

/// Closed-form exponential and logarithm of a general screw.
fn bench_exp_log(c: &mut Criterion) {
    let axis = screw_axis();
    let motor = ga_exp(&axis).unwrap();
    c.bench_function("PGA3 exp(bivector)", |b| b.iter(|| black_box(ga_exp(black_box(&axis)))));
    c.bench_function("PGA3 log(motor)", |b| b.iter(|| black_box(ga_log(black_box(&motor)))));
}

criterion_group!(benches, bench_apply, bench_compose, bench_exp_log);
criterion_main!(benches);
