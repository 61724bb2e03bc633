use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elemfn::{find_root, Exponential, Func, Function, Identity, Polynomial, Power};

fn deep_tree(depth: usize) -> Func {
    let g = Polynomial::from_params(&[1.0, -2.0, 0.5, 0.25]);
    let h = Exponential::new(0.5);

    (0..depth).fold(Func::from(Identity::new(1.0)), |f, i| {
        let f = match i % 4 {
            0 => f + &g,
            1 => f * &h,
            2 => f - Power::new(2.0),
            _ => f / &h,
        };
        Func::from(f)
    })
}

fn eval(c: &mut Criterion) {
    let f = deep_tree(32);

    c.bench_function("eval depth 32", |b| b.iter(|| f.eval(black_box(1.5))));
    c.bench_function("derivative depth 32", |b| {
        b.iter(|| f.derivative(black_box(1.5)))
    });
}

fn render(c: &mut Criterion) {
    let f = deep_tree(32);

    c.bench_function("render depth 32", |b| b.iter(|| black_box(&f).render()));
}

fn root(c: &mut Criterion) {
    let g = Polynomial::from_params(&[3.0, -1.0, 3.0, 4.0, 5.0]);
    let f = &g - &Exponential::new(2.0);

    c.bench_function("find root 10000", |b| {
        b.iter(|| find_root(&f, black_box(3.0), 10_000, 1e-9))
    });
}

criterion_group!(benches, eval, render, root);
criterion_main!(benches);
