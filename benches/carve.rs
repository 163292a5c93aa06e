use criterion::{criterion_group, criterion_main, Criterion};
use image::{GrayImage, ImageBuffer};
use seamtarget::retarget;

fn bench_retarget(c: &mut Criterion) {
    let data: Vec<u8> = (0..64 * 48).map(|i| (i * 7 % 251) as u8).collect();
    let img: GrayImage = ImageBuffer::from_raw(64, 48, data).unwrap();
    c.bench_function("retarget 64x48 to 48x48", move |b| {
        b.iter(|| retarget(&img, 48, 48).unwrap())
    });
}

criterion_group!(benches, bench_retarget);
criterion_main!(benches);
