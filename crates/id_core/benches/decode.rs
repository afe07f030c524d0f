use criterion::{black_box, criterion_group, criterion_main, Criterion};

use id_core::IdentityNumber;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("decode", |b| {
        b.iter(|| {
            let id = IdentityNumber::parse(black_box("43102220200101133X"));

            let _ = id.validate();
            let _ = id.administrative_code();
            let _ = id.birth_date();
            let _ = id.gender();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
