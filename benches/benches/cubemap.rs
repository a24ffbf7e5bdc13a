// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use panoview_cube::{Direction, Face, atan2_approx};
use panoview_raster::{CubeAtlasMut, Panorama, build_cubemap, sample_single_face_pixel};

fn gradient(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8]);
        }
    }
    data
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubemap/build");
    group.sample_size(20);

    for width in [512_u32, 1_024, 2_048] {
        let height = width / 2;
        let pixels = gradient(width, height);
        let panorama = Panorama::new(&pixels, width, height).unwrap();
        let mut faces = vec![0_u8; panorama.layout().byte_len()];
        group.throughput(Throughput::Elements(6 * u64::from(panorama.edge()).pow(2)));

        group.bench_with_input(BenchmarkId::from_parameter(width), &panorama, |b, panorama| {
            b.iter(|| {
                let mut atlas = CubeAtlasMut::for_panorama(&mut faces, panorama).unwrap();
                black_box(build_cubemap(panorama, &mut atlas, None).unwrap());
            });
        });
    }
    group.finish();
}

fn bench_single_pixel(c: &mut Criterion) {
    let pixels = gradient(1_024, 512);
    let panorama = Panorama::new(&pixels, 1_024, 512).unwrap();
    c.bench_function("cubemap/single_face_pixel", |b| {
        b.iter(|| {
            for face in Face::ALL {
                black_box(sample_single_face_pixel(
                    &panorama,
                    black_box(37),
                    black_box(201),
                    face,
                ));
            }
        });
    });
}

fn bench_atan2(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubemap/atan2");
    let points: Vec<(f64, f64)> = (0..1_024)
        .map(|i| {
            let t = f64::from(i) / 1_024.0 * core::f64::consts::TAU;
            (t.sin() * 3.0, t.cos() * 0.5)
        })
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("approx", |b| {
        b.iter(|| {
            for &(y, x) in &points {
                black_box(atan2_approx(black_box(y), black_box(x)));
            }
        });
    });
    group.bench_function("std", |b| {
        b.iter(|| {
            for &(y, x) in &points {
                black_box(black_box(y).atan2(black_box(x)));
            }
        });
    });
    group.bench_function("latitude", |b| {
        b.iter(|| {
            for &(y, x) in &points {
                black_box(Direction::new(x, y, 0.25).latitude());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_single_pixel, bench_atan2);
criterion_main!(benches);
