/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use vsinf::{Alignment, SineVariant, approx_sinf, f_approx_sinf, make_sine_executor};

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();
    let count = 4096 + 3;
    let src: Vec<f32> = (0..count)
        .map(|_| rng.random_range(-4. * std::f32::consts::PI..4. * std::f32::consts::PI))
        .collect();

    // Aligned kernels need 32 byte boundaries, 8 spare lanes cover any start
    let mut src_storage = vec![0f32; count + 8];
    let src_offset = src_storage.as_ptr().align_offset(32);
    let aligned_src = &mut src_storage[src_offset..src_offset + count];
    aligned_src.copy_from_slice(&src);
    let mut dst_storage = vec![0f32; count + 8];
    let dst_offset = dst_storage.as_ptr().align_offset(32);
    let aligned_dst = &mut dst_storage[dst_offset..dst_offset + count];

    for variant in SineVariant::available() {
        let executor = make_sine_executor(variant).unwrap();
        c.bench_function(&format!("vsinf: {variant}"), |b| {
            b.iter(|| {
                executor
                    .execute(black_box(&mut *aligned_dst), black_box(&*aligned_src))
                    .unwrap();
            })
        });
    }

    let best = SineVariant::best(Alignment::Unaligned);
    let executor = make_sine_executor(best).unwrap();
    let mut dst = vec![0f32; count];
    c.bench_function(&format!("vsinf: best {best} on offset buffers"), |b| {
        b.iter(|| {
            executor
                .execute(black_box(&mut dst[1..]), black_box(&src[1..]))
                .unwrap();
        })
    });

    c.bench_function("system::sin", |b| {
        b.iter(|| {
            for (dst, &src) in dst.iter_mut().zip(src.iter()) {
                *dst = black_box(src).sin();
            }
        })
    });

    c.bench_function("libm::sinf", |b| {
        b.iter(|| {
            for (dst, &src) in dst.iter_mut().zip(src.iter()) {
                *dst = libm::sinf(black_box(src));
            }
        })
    });

    c.bench_function("vsinf: approx_sinf", |b| {
        b.iter(|| {
            for (dst, &src) in dst.iter_mut().zip(src.iter()) {
                *dst = approx_sinf(black_box(src));
            }
        })
    });

    c.bench_function("vsinf: FMA approx_sinf", |b| {
        b.iter(|| {
            for (dst, &src) in dst.iter_mut().zip(src.iter()) {
                *dst = f_approx_sinf(black_box(src));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
