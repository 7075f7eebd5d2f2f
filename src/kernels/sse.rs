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
use crate::executor::check_buffers;
use crate::kernels::{SineLanes, sine_map};
use crate::math::{M_4_PI, PIO4_A, PIO4_B, SIN_C1, SIN_C2, SIN_C3, SIN_C4, SIN_C5};
use crate::{SineError, SineExecutor};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline(always)]
pub(crate) fn _mm_opt_fmlaf_ps<const FMA: bool>(a: __m128, b: __m128, c: __m128) -> __m128 {
    unsafe {
        if FMA {
            _mm_fmadd_ps(b, c, a)
        } else {
            _mm_add_ps(_mm_mul_ps(b, c), a)
        }
    }
}

#[inline(always)]
pub(crate) fn _mm_opt_fmlsf_ps<const FMA: bool>(a: __m128, b: __m128, c: __m128) -> __m128 {
    unsafe {
        if FMA {
            _mm_fmsub_ps(b, c, a)
        } else {
            _mm_sub_ps(_mm_mul_ps(b, c), a)
        }
    }
}

#[inline(always)]
pub(crate) fn _mm_opt_fnmlaf_ps<const FMA: bool>(a: __m128, b: __m128, c: __m128) -> __m128 {
    unsafe {
        if FMA {
            _mm_fnmadd_ps(b, c, a)
        } else {
            _mm_sub_ps(a, _mm_mul_ps(b, c))
        }
    }
}

struct Sse41Lanes;

impl SineLanes for Sse41Lanes {
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn sine_chunk<const FMA: bool, const ALIGNED: bool>(dst: &mut [f32], src: &[f32]) {
        unsafe {
            let m4pi = _mm_set1_ps(M_4_PI);
            let pio4a = _mm_set1_ps(PIO4_A);
            let pio4b = _mm_set1_ps(PIO4_B);
            let ffours = _mm_set1_ps(4.0);
            let ftwos = _mm_set1_ps(2.0);
            let fones = _mm_set1_ps(1.0);
            let fzeroes = _mm_setzero_ps();
            let ones = _mm_set1_epi32(1);
            let twos = _mm_set1_epi32(2);
            let fours = _mm_set1_epi32(4);

            let cp1 = _mm_set1_ps(SIN_C1);
            let cp2 = _mm_set1_ps(SIN_C2);
            let cp3 = _mm_set1_ps(SIN_C3);
            let cp4 = _mm_set1_ps(SIN_C4);
            let cp5 = _mm_set1_ps(SIN_C5);

            let a = if ALIGNED {
                _mm_load_ps(src.as_ptr())
            } else {
                _mm_loadu_ps(src.as_ptr())
            };

            let negative = _mm_cmplt_ps(a, fzeroes);
            let mut s = _mm_sub_ps(a, _mm_and_ps(_mm_mul_ps(a, ftwos), negative));
            let q = _mm_cvtps_epi32(_mm_floor_ps(_mm_mul_ps(s, m4pi)));
            let r = _mm_cvtepi32_ps(_mm_add_epi32(q, _mm_and_si128(q, ones)));

            s = _mm_opt_fnmlaf_ps::<FMA>(s, r, pio4a);
            s = _mm_opt_fnmlaf_ps::<FMA>(s, r, pio4b);

            s = _mm_div_ps(s, _mm_set1_ps(8.0));
            let t = _mm_mul_ps(s, s);

            let mut p = _mm_opt_fmlsf_ps::<FMA>(cp4, t, cp5);
            p = _mm_opt_fmlaf_ps::<FMA>(cp3, p, t);
            p = _mm_opt_fmlsf_ps::<FMA>(cp2, p, t);
            p = _mm_opt_fmlaf_ps::<FMA>(cp1, p, t);
            let mut v = _mm_mul_ps(p, t);

            for _ in 0..3 {
                v = _mm_mul_ps(v, _mm_sub_ps(ffours, v));
            }
            v = _mm_div_ps(v, ftwos);

            let mut sine = _mm_sqrt_ps(_mm_mul_ps(_mm_sub_ps(ftwos, v), v));
            let cosine = _mm_sub_ps(fones, v);

            let swap = _mm_castsi128_ps(_mm_cmpeq_epi32(
                _mm_and_si128(_mm_add_epi32(q, ones), twos),
                twos,
            ));
            let flip = _mm_xor_ps(
                _mm_castsi128_ps(_mm_cmpeq_epi32(_mm_and_si128(q, fours), fours)),
                negative,
            );

            sine = _mm_add_ps(sine, _mm_and_ps(_mm_sub_ps(cosine, sine), swap));
            sine = _mm_sub_ps(sine, _mm_and_ps(_mm_mul_ps(sine, ftwos), flip));

            if ALIGNED {
                _mm_store_ps(dst.as_mut_ptr(), sine);
            } else {
                _mm_storeu_ps(dst.as_mut_ptr(), sine);
            }
        }
    }
}

/// 4 lanes of SSE4.1, optionally with FMA.
pub(crate) struct SineSse41<const FMA: bool, const ALIGNED: bool>;

impl<const FMA: bool, const ALIGNED: bool> SineSse41<FMA, ALIGNED> {
    #[target_feature(enable = "sse4.1", enable = "fma")]
    unsafe fn sine_fma(&self, dst: &mut [f32], src: &[f32]) {
        unsafe { sine_map::<Sse41Lanes, true, ALIGNED>(dst, src) }
    }

    #[target_feature(enable = "sse4.1")]
    unsafe fn sine_sse(&self, dst: &mut [f32], src: &[f32]) {
        unsafe { sine_map::<Sse41Lanes, false, ALIGNED>(dst, src) }
    }
}

impl<const FMA: bool, const ALIGNED: bool> SineExecutor for SineSse41<FMA, ALIGNED> {
    fn execute(&self, dst: &mut [f32], src: &[f32]) -> Result<(), SineError> {
        let alignment = if ALIGNED {
            Sse41Lanes::LANES * size_of::<f32>()
        } else {
            align_of::<f32>()
        };
        check_buffers(dst, src, alignment)?;
        // Only handed out by the factory after feature detection
        unsafe {
            if FMA {
                self.sine_fma(dst, src);
            } else {
                self.sine_sse(dst, src);
            }
        }
        Ok(())
    }
}
