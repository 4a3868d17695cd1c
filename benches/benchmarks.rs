/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sktb_rs::atoms::{OrbitalLabel, Vector3D};
use sktb_rs::slater_koster::{bloch_phase, matrix_element, two_center, DirectionCosines};

fn slater_koster_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Slater-Koster");
    let s3 = 1.0 / 3.0_f64.sqrt();

    group.bench_function("matrix_element", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let d = 2.0 + i as f64 * 1e-3;
                black_box(matrix_element(black_box("px"), black_box("py"), s3, s3, s3, d).ok());
            }
        })
    });

    group.bench_function("two_center_block", |b| {
        let cos = DirectionCosines::new(s3, s3, s3);
        b.iter(|| {
            for a in OrbitalLabel::ALL {
                for o in OrbitalLabel::ALL {
                    black_box(two_center(a, o, black_box(&cos), black_box(2.35)));
                }
            }
        })
    });

    group.bench_function("bloch_phase", |b| {
        let r = Vector3D::new(1.35775, 1.35775, 1.35775);
        b.iter(|| {
            for i in 0..1000 {
                let k = Vector3D::new(i as f64 * 1e-3, 0.0, 0.5);
                black_box(bloch_phase(&k, black_box(&r)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, slater_koster_benchmark);
criterion_main!(benches);
