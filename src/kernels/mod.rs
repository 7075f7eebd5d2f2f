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
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
mod avx;
mod generic;
#[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
mod neon;
mod scalar;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
mod sse;

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
pub(crate) use avx::SineAvx2;
pub(crate) use generic::SineGeneric;
#[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
pub(crate) use neon::SineNeon;
pub(crate) use scalar::SineScalar;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
pub(crate) use sse::SineSse41;

/// One lane group of the sine pipeline.
pub(crate) trait SineLanes {
    const LANES: usize;

    /// Computes sine of exactly `LANES` elements.
    ///
    /// # Safety
    ///
    /// The instruction set must be available, both slices must hold `LANES`
    /// elements, and when `ALIGNED` both must start at `LANES * 4` bytes.
    unsafe fn sine_chunk<const FMA: bool, const ALIGNED: bool>(dst: &mut [f32], src: &[f32]);
}

/// Runs full lane groups through `K` and finishes the tail with `f32::sin`.
///
/// # Safety
///
/// Same as [SineLanes::sine_chunk], `dst` must be at least as long as `src`.
#[inline(always)]
pub(crate) unsafe fn sine_map<K: SineLanes, const FMA: bool, const ALIGNED: bool>(
    dst: &mut [f32],
    src: &[f32],
) {
    let dst = &mut dst[..src.len()];

    for (dst, src) in dst
        .chunks_exact_mut(K::LANES)
        .zip(src.chunks_exact(K::LANES))
    {
        unsafe {
            K::sine_chunk::<FMA, ALIGNED>(dst, src);
        }
    }

    let dst = dst.chunks_exact_mut(K::LANES).into_remainder();
    let src = src.chunks_exact(K::LANES).remainder();

    for (dst, &src) in dst.iter_mut().zip(src.iter()) {
        *dst = src.sin();
    }
}
