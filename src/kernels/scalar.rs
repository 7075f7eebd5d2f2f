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
use crate::math::sinf_lane;
use crate::{SineError, SineExecutor};

struct ScalarLanes;

impl SineLanes for ScalarLanes {
    const LANES: usize = 1;

    #[inline(always)]
    unsafe fn sine_chunk<const FMA: bool, const ALIGNED: bool>(dst: &mut [f32], src: &[f32]) {
        dst[0] = sinf_lane::<FMA>(src[0]);
    }
}

/// The polynomial pipeline without vector instructions.
pub(crate) struct SineScalar<const FMA: bool, const ALIGNED: bool>;

impl<const FMA: bool, const ALIGNED: bool> SineExecutor for SineScalar<FMA, ALIGNED> {
    fn execute(&self, dst: &mut [f32], src: &[f32]) -> Result<(), SineError> {
        check_buffers(dst, src, align_of::<f32>())?;
        // One lane never leaves a tail, so every element goes through the polynomial
        unsafe {
            sine_map::<ScalarLanes, FMA, ALIGNED>(dst, src);
        }
        Ok(())
    }
}
