use criterion::{Criterion, criterion_group, criterion_main};
use motley_core::{id_color, name_color};
use std::hint::black_box;
use uuid::Uuid;

fn criterion_benchmark(c: &mut Criterion) {
    let id = Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8);
    c.bench_function("id color", |b| b.iter(|| id_color(black_box(id))));
    c.bench_function("id color nil", |b| {
        b.iter(|| id_color(black_box(Uuid::nil())))
    });
    c.bench_function("name color", |b| b.iter(|| name_color(black_box("motley"))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
