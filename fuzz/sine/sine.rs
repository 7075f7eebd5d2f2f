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
#![no_main]

use libfuzzer_sys::fuzz_target;
use vsinf::{Alignment, SineVariant, make_sine_executor};

fuzz_target!(|data: (Vec<f32>, bool)| {
    let src: Vec<f32> = data
        .0
        .iter()
        .map(|&x| {
            if x.is_finite() {
                x % (4. * std::f32::consts::PI)
            } else {
                x
            }
        })
        .collect();
    let offset = if data.1 && !src.is_empty() { 1 } else { 0 };
    let src = &src[offset..];

    let mut reference = vec![0f32; src.len()];
    make_sine_executor(SineVariant::generic())
        .unwrap()
        .execute(&mut reference, src)
        .unwrap();

    for variant in SineVariant::available() {
        if variant.alignment == Alignment::Aligned {
            continue;
        }
        let mut dst = vec![0f32; src.len()];
        make_sine_executor(variant)
            .unwrap()
            .execute(&mut dst, src)
            .unwrap();
        for (&v, &r) in dst.iter().zip(reference.iter()) {
            if r.is_nan() {
                assert!(v.is_nan(), "{variant}: expected NaN, got {v}");
            } else {
                assert!((v - r).abs() < 1e-6, "{variant}: {v} vs {r}");
            }
        }
    }
});
