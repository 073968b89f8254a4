use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use seamcarve::{SeamCarver, SeamFinder};

fn sample(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x * y) % 256) as u8])
    })
}

fn find_vertical_seam(c: &mut Criterion) {
    let carver = SeamCarver::new(sample(128, 128));
    c.bench_function("find_vertical_seam 128x128", move |b| {
        b.iter(|| carver.find_vertical_seam())
    });
}

fn carve_ten_columns(c: &mut Criterion) {
    let image = sample(96, 96);
    c.bench_function("carve 96x96 -> 86x96", move |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(image.clone());
            carver.carve(86, 96).unwrap();
            carver.into_picture()
        })
    });
}

criterion_group!(benches, find_vertical_seam, carve_ten_columns);
criterion_main!(benches);
