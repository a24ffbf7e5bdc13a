// Copyright 2025 the Panoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use panoview_cube::{Direction, view_direction_to_texel};
use panoview_raster::{
    CubeAtlas, CubeAtlasMut, Panorama, RgbImageMut, ViewParams, build_cubemap, render_view,
    render_view_from_panorama, view_texel_at,
};

const PANORAMA_WIDTH: u32 = 2_048;

fn atlas_for(width: u32) -> (Vec<u8>, Vec<u8>) {
    let height = width / 2;
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x % 251) as u8, (y % 241) as u8, 128]);
        }
    }
    let panorama = Panorama::new(&pixels, width, height).unwrap();
    let mut faces = vec![0_u8; panorama.layout().byte_len()];
    let mut atlas = CubeAtlasMut::for_panorama(&mut faces, &panorama).unwrap();
    build_cubemap(&panorama, &mut atlas, None).unwrap();
    (pixels, faces)
}

fn bench_render(c: &mut Criterion) {
    let (pixels, faces) = atlas_for(PANORAMA_WIDTH);
    let panorama = Panorama::new(&pixels, PANORAMA_WIDTH, PANORAMA_WIDTH / 2).unwrap();
    let atlas = CubeAtlas::new(&faces, panorama.edge()).unwrap();
    let params = ViewParams::new(12.5, 63.0, 75.0);

    let mut group = c.benchmark_group("projection/render");
    for side in [256_u32, 512, 1_024] {
        let mut out = vec![0_u8; (side * side * 3) as usize];
        group.throughput(Throughput::Elements(u64::from(side) * u64::from(side)));

        group.bench_with_input(BenchmarkId::new("atlas", side), &side, |b, &side| {
            b.iter(|| {
                let mut view = RgbImageMut::new(&mut out, side, side).unwrap();
                render_view(&atlas, black_box(&params), &mut view);
            });
        });
        group.bench_with_input(BenchmarkId::new("panorama", side), &side, |b, &side| {
            b.iter(|| {
                let mut view = RgbImageMut::new(&mut out, side, side).unwrap();
                render_view_from_panorama(&panorama, black_box(&params), &mut view);
            });
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection/lookup");
    let params = ViewParams::default();

    // One row of directions, stepped like the renderer versus picked one by one.
    group.bench_function("incremental_row", |b| {
        b.iter(|| {
            let mut direction = Direction::new(-1.0, 0.3, 1.0);
            for _ in 0..512 {
                direction = direction.add_scaled(Direction::new(1.0, 0.0, 0.0), 2.0 / 512.0);
                black_box(view_direction_to_texel(direction, 512));
            }
        });
    });
    group.bench_function("direct_row", |b| {
        b.iter(|| {
            for x in 0..512 {
                black_box(view_texel_at(&params, 512, 512, 512, x, 180));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render, bench_lookup);
criterion_main!(benches);
