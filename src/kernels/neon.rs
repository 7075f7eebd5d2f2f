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
use std::arch::aarch64::*;

#[inline(always)]
unsafe fn vopt_fmlaq_f32<const FMA: bool>(
    a: float32x4_t,
    b: float32x4_t,
    c: float32x4_t,
) -> float32x4_t {
    unsafe {
        if FMA {
            vfmaq_f32(a, b, c)
        } else {
            vaddq_f32(vmulq_f32(b, c), a)
        }
    }
}

#[inline(always)]
unsafe fn vopt_fmlsq_f32<const FMA: bool>(
    a: float32x4_t,
    b: float32x4_t,
    c: float32x4_t,
) -> float32x4_t {
    unsafe {
        if FMA {
            vnegq_f32(vfmsq_f32(a, b, c))
        } else {
            vsubq_f32(vmulq_f32(b, c), a)
        }
    }
}

#[inline(always)]
unsafe fn vopt_fnmlaq_f32<const FMA: bool>(
    a: float32x4_t,
    b: float32x4_t,
    c: float32x4_t,
) -> float32x4_t {
    unsafe {
        if FMA {
            vfmsq_f32(a, b, c)
        } else {
            vsubq_f32(a, vmulq_f32(b, c))
        }
    }
}

#[inline(always)]
unsafe fn vandq_mask_f32(a: float32x4_t, mask: uint32x4_t) -> float32x4_t {
    unsafe { vreinterpretq_f32_u32(vandq_u32(vreinterpretq_u32_f32(a), mask)) }
}

struct NeonLanes;

impl SineLanes for NeonLanes {
    const LANES: usize = 4;

    #[inline(always)]
    unsafe fn sine_chunk<const FMA: bool, const ALIGNED: bool>(dst: &mut [f32], src: &[f32]) {
        unsafe {
            let m4pi = vdupq_n_f32(M_4_PI);
            let pio4a = vdupq_n_f32(PIO4_A);
            let pio4b = vdupq_n_f32(PIO4_B);
            let ffours = vdupq_n_f32(4.0);
            let ftwos = vdupq_n_f32(2.0);
            let fones = vdupq_n_f32(1.0);
            let fzeroes = vdupq_n_f32(0.0);
            let ones = vdupq_n_s32(1);
            let twos = vdupq_n_s32(2);
            let fours = vdupq_n_s32(4);

            let cp1 = vdupq_n_f32(SIN_C1);
            let cp2 = vdupq_n_f32(SIN_C2);
            let cp3 = vdupq_n_f32(SIN_C3);
            let cp4 = vdupq_n_f32(SIN_C4);
            let cp5 = vdupq_n_f32(SIN_C5);

            // NEON has a single load form, alignment only narrows the precondition
            let a = vld1q_f32(src.as_ptr());

            let negative = vcltq_f32(a, fzeroes);
            let mut s = vsubq_f32(a, vandq_mask_f32(vmulq_f32(a, ftwos), negative));
            let q = vcvtq_s32_f32(vrndmq_f32(vmulq_f32(s, m4pi)));
            let r = vcvtq_f32_s32(vaddq_s32(q, vandq_s32(q, ones)));

            s = vopt_fnmlaq_f32::<FMA>(s, r, pio4a);
            s = vopt_fnmlaq_f32::<FMA>(s, r, pio4b);

            s = vdivq_f32(s, vdupq_n_f32(8.0));
            let t = vmulq_f32(s, s);

            let mut p = vopt_fmlsq_f32::<FMA>(cp4, t, cp5);
            p = vopt_fmlaq_f32::<FMA>(cp3, p, t);
            p = vopt_fmlsq_f32::<FMA>(cp2, p, t);
            p = vopt_fmlaq_f32::<FMA>(cp1, p, t);
            let mut v = vmulq_f32(p, t);

            for _ in 0..3 {
                v = vmulq_f32(v, vsubq_f32(ffours, v));
            }
            v = vdivq_f32(v, ftwos);

            let mut sine = vsqrtq_f32(vmulq_f32(vsubq_f32(ftwos, v), v));
            let cosine = vsubq_f32(fones, v);

            let swap = vceqq_s32(vandq_s32(vaddq_s32(q, ones), twos), twos);
            let flip = veorq_u32(vceqq_s32(vandq_s32(q, fours), fours), negative);

            sine = vaddq_f32(sine, vandq_mask_f32(vsubq_f32(cosine, sine), swap));
            sine = vsubq_f32(sine, vandq_mask_f32(vmulq_f32(sine, ftwos), flip));

            vst1q_f32(dst.as_mut_ptr(), sine);
        }
    }
}

/// 4 lanes of NEON, FMA selects fused or split multiply-add.
pub(crate) struct SineNeon<const FMA: bool, const ALIGNED: bool>;

impl<const FMA: bool, const ALIGNED: bool> SineExecutor for SineNeon<FMA, ALIGNED> {
    fn execute(&self, dst: &mut [f32], src: &[f32]) -> Result<(), SineError> {
        let alignment = if ALIGNED {
            NeonLanes::LANES * size_of::<f32>()
        } else {
            align_of::<f32>()
        };
        check_buffers(dst, src, alignment)?;
        unsafe {
            sine_map::<NeonLanes, FMA, ALIGNED>(dst, src);
        }
        Ok(())
    }
}
